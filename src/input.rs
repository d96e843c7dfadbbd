use crate::domain::Tab;
use crate::domain::events::Event;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendError;
use tracing::{instrument, warn};

/// Parses one line of user input into a presentation event.
///
/// `tab <name>`, `favorite <listing name>`, `focus` and `blur` are understood.
pub fn parse_command(line: &str) -> Result<Event, String> {
    let line = line.trim();
    let (command, argument) = line.split_once(' ').map(|(c, a)| (c, a.trim())).unwrap_or((line, ""));

    match (command, argument) {
        ("tab", name) => Tab::from_name(name)
            .map(Event::TabSelected)
            .ok_or_else(|| format!("unknown tab '{}'", name)),
        ("favorite", "") => Err("missing listing name".to_string()),
        ("favorite", name) => Ok(Event::FavoriteToggled(name.to_string())),
        ("focus", "") => Ok(Event::SearchFocusChanged(true)),
        ("blur", "") => Ok(Event::SearchFocusChanged(false)),
        _ => Err(format!("unknown command '{}'", line)),
    }
}

/// Forwards commands read from `reader` to the store until end of input.
#[instrument(skip_all)]
pub async fn forward_commands<R>(reader: R, tx: &Sender<Event>) -> Result<(), SendError<Event>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(()),
            Err(e) => {
                warn!("⚠️ Unable to read input: {}", e);
                return Ok(());
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(event) => tx.send(event).await?,
            Err(e) => warn!("⚠️ {}", e),
        }
    }
}

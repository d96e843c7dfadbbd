use crate::domain::Tab;
use crate::feed::{FeedCard, FeedState, FeedView, NO_FAVORITES_HINT, NO_FAVORITES_TITLE};
use crate::store::{AppState, LocationStatus};
use tokio::sync::watch::Receiver;
use tracing::{info, instrument, warn};

/// Renders every published snapshot until the store goes away.
#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<AppState>) {
    let mut shown_messages = 0;
    render(&rx.borrow_and_update().clone(), &mut shown_messages);

    while rx.changed().await.is_ok() {
        let snapshot: AppState = rx.borrow_and_update().clone();
        render(&snapshot, &mut shown_messages);
    }
}

fn render(snapshot: &AppState, shown_messages: &mut usize) {
    for message in snapshot.messages.iter().skip(*shown_messages) {
        warn!("💬 {}: {}", message.title, message.message);
    }
    *shown_messages = snapshot.messages.len();

    info!("🗺️ {}", render_location(&snapshot.location));
    for line in render_feed(&snapshot.feed) {
        info!("📰 {}", line);
    }
}

pub fn render_location(location: &LocationStatus) -> String {
    match location {
        LocationStatus::Fetching => "Fetching location...".to_string(),
        LocationStatus::Located(coordinate) => format!("Current Location: {}", coordinate),
    }
}

pub fn render_feed(feed: &FeedState) -> Vec<String> {
    let tabs = Tab::all()
        .iter()
        .map(|tab| if *tab == feed.active_tab() { format!("[{}]", tab) } else { tab.to_string() })
        .collect::<Vec<_>>()
        .join(" ");
    let mut lines = vec![format!("{}{}", tabs, if feed.shows_search_filter() { " (filter)" } else { "" })];

    match feed.view() {
        FeedView::Explore(sections) => {
            for section in sections {
                lines.push(section.title);
                lines.extend(section.cards.iter().map(card_line));
            }
        }
        FeedView::Favorites(cards) => lines.extend(cards.iter().map(card_line)),
        FeedView::NoFavorites => {
            lines.push(NO_FAVORITES_TITLE.to_string());
            lines.push(NO_FAVORITES_HINT.to_string());
        }
        FeedView::Empty => {}
    }

    lines
}

fn card_line(card: &FeedCard) -> String {
    format!("{} {} - {}", if card.favorite { "♥" } else { "♡" }, card.name, card.discount)
}

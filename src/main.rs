use crate::app_config::AppConfig;
use crate::device::SimulatedDevice;
use crate::domain::events::Event;
use crate::feed::FeedState;
use crate::input::forward_commands;
use crate::location_session::{SessionOutcome, run_location_session};
use crate::notification_handler::NotificationHandler;
use crate::store::Store;
use crate::store_listener::store_listener;
use tokio::io::{BufReader, stdin};
use tokio::sync::mpsc;
use tokio::task;
use tracing::{info, warn};

mod app_config;
mod coordinate_deserializer;
mod device;
mod domain;
mod feed;
mod geo;
mod geofence;
mod input;
mod location_session;
mod notification_handler;
mod store;
mod store_listener;
mod venue_deserializer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.core().log_level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration, {} venue(s), {} listing(s)", config.venues().len(), config.listings().len());

    let handler = NotificationHandler::configure(config.notifications());
    let device = SimulatedDevice::new(config.device(), handler);

    let (tx, rx) = mpsc::channel::<Event>(config.core().store_buffer_size());
    let mut store = Store::new(rx, FeedState::new(config.listings().to_vec(), config.feed().initial_tab()));
    let notifier_rx = store.notifier();

    let listener = task::spawn(async move {
        store_listener(notifier_rx).await;
    });
    info!("✅  Initialized store listener");

    let store_task = task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    match run_location_session(&device, &device, config.venues(), &tx).await? {
        SessionOutcome::LocationDenied => warn!("🚫 Location session ended without permission"),
        SessionOutcome::PositionUnavailable => warn!("🚫 Location session ended without a position fix"),
        SessionOutcome::Located { coordinate, alerts } => {
            info!(badge = device.badge(), "✅  Location session at {} raised {} alert(s)", coordinate, alerts.len())
        }
    }

    info!("⌨️ Reading commands from stdin: tab <name>, favorite <listing>, focus, blur");
    forward_commands(BufReader::new(stdin()), &tx).await?;

    drop(tx);
    store_task.await?;
    listener.await?;

    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}

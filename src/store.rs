use crate::domain::events::Event;
use crate::domain::permission::{PermissionEvent, PermissionState};
use crate::domain::{Coordinate, UserMessage};
use crate::feed::FeedState;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, warn};

#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub enum LocationStatus {
    #[default]
    Fetching,
    Located(Coordinate),
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct AppState {
    pub feed: FeedState,
    pub location: LocationStatus,
    pub location_permission: PermissionState,
    pub notification_permission: PermissionState,
    pub messages: Vec<UserMessage>,
}

#[derive(Debug)]
pub struct Store {
    state: AppState,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<AppState>,
    notifier_rx: WatchReceiver<AppState>,
}

impl Store {
    pub fn new(rx: Receiver<Event>, feed: FeedState) -> Self {
        let state = AppState { feed, ..AppState::default() };
        let (notifier_tx, notifier_rx) = watch::channel::<AppState>(state.clone());

        Store {
            state,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<AppState> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            if reduce(&mut self.state, event) {
                self.notifier_tx.send_replace(self.state.clone());
            }
        }
        debug!("🔵 Event channel closed");
    }
}

/// Applies an event to the state, returns whether anything changed.
fn reduce(state: &mut AppState, event: Event) -> bool {
    match event {
        Event::NotificationPermission(permission_event) => transition(&mut state.notification_permission, permission_event, "notification"),
        Event::LocationPermission(permission_event) => transition(&mut state.location_permission, permission_event, "location"),
        Event::PositionFixed(coordinate) => {
            info!("🔵 Position fixed at {}", coordinate);
            state.location = LocationStatus::Located(coordinate);
            true
        }
        Event::UserMessage(message) => {
            state.messages.push(message);
            true
        }
        Event::TabSelected(tab) => {
            state.feed.select_tab(tab);
            true
        }
        Event::FavoriteToggled(name) => match state.feed.toggle_favorite(&name) {
            Some(favorite) => {
                debug!("🔵 Set favorite '{}' to '{}'", name, favorite);
                true
            }
            None => {
                warn!("⚠️ Received favorite toggle for unknown listing '{}'", name);
                false
            }
        },
        Event::SearchFocusChanged(focused) => {
            state.feed.set_search_focused(focused);
            true
        }
    }
}

fn transition(permission: &mut PermissionState, event: PermissionEvent, kind: &str) -> bool {
    match permission.apply(event) {
        Ok(next) => {
            info!("🔵 Updated {} permission to '{}', was '{}'", kind, next, permission);
            *permission = next;
            true
        }
        Err(e) => {
            warn!("⚠️ Ignoring {} permission event: {}", kind, e);
            false
        }
    }
}

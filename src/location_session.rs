use crate::device::{LocationProvider, NotificationService};
use crate::domain::events::Event;
use crate::domain::permission::{PermissionEvent, PermissionStatus};
use crate::domain::{Alert, Coordinate, UserMessage, Venue};
use crate::geofence::check_geofence;
use thiserror::Error;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendError;
use tracing::{info, instrument, warn};

#[derive(PartialEq, Debug)]
pub enum SessionOutcome {
    LocationDenied,
    PositionUnavailable,
    Located { coordinate: Coordinate, alerts: Vec<Alert> },
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("the store stopped listening: {0}")]
    StoreClosed(#[from] SendError<Event>),
}

/// Runs the location screen once: acquire permissions, take a single fix and check it
/// against the venues. Denials are terminal for the session, nothing is retried.
#[instrument(skip_all)]
pub async fn run_location_session(
    location: &dyn LocationProvider,
    notifications: &dyn NotificationService,
    venues: &[Venue],
    tx: &Sender<Event>,
) -> Result<SessionOutcome, SessionError> {
    tx.send(Event::NotificationPermission(PermissionEvent::Requested)).await?;
    let notification_status = notifications.request_permission().await;
    tx.send(Event::NotificationPermission(PermissionEvent::Resolved(notification_status))).await?;
    if notification_status == PermissionStatus::Denied {
        warn!("🚫 Notification permission denied");
        tx.send(Event::UserMessage(UserMessage::notification_permission_denied())).await?;
    }

    tx.send(Event::LocationPermission(PermissionEvent::Requested)).await?;
    let location_status = location.request_permission().await;
    tx.send(Event::LocationPermission(PermissionEvent::Resolved(location_status))).await?;
    if location_status == PermissionStatus::Denied {
        warn!("🚫 Location permission denied");
        tx.send(Event::UserMessage(UserMessage::location_permission_denied())).await?;
        return Ok(SessionOutcome::LocationDenied);
    }

    info!("📡 Fetching location...");
    let coordinate = match location.current_position().await {
        Ok(coordinate) => coordinate,
        Err(e) => {
            warn!("⚠️ Fetching location... failed, {}", e);
            return Ok(SessionOutcome::PositionUnavailable);
        }
    };
    info!("📡 Fetching location... OK");
    tx.send(Event::PositionFixed(coordinate)).await?;

    let alerts = if notification_status == PermissionStatus::Granted {
        check_geofence(&coordinate, venues, notifications).await
    } else {
        Vec::new()
    };

    Ok(SessionOutcome::Located { coordinate, alerts })
}

use crate::device::{NotificationService, Trigger};
use crate::domain::{Alert, Coordinate, Venue};
use crate::geo::nearby_venues;
use tracing::{debug, info, instrument, warn};

/// Sends one immediate notification per venue whose geofence contains `current` and
/// returns the alerts that were built, delivered or not.
///
/// Nothing is remembered between calls: a later fix inside the same geofence alerts again.
#[instrument(skip_all, fields(latitude = current.latitude, longitude = current.longitude))]
pub async fn check_geofence(current: &Coordinate, venues: &[Venue], notifications: &dyn NotificationService) -> Vec<Alert> {
    debug!("📍 Checking {} geofence(s)...", venues.len());
    let alerts: Vec<Alert> = nearby_venues(current, venues).into_iter().map(Alert::for_venue).collect();
    info!("📍 Checking {} geofence(s)... OK, {} nearby", venues.len(), alerts.len());

    for alert in &alerts {
        if let Err(e) = notifications.schedule(alert, Trigger::Immediate).await {
            warn!("⚠️ Unable to deliver '{}': {}", alert.body, e);
        }
    }

    alerts
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::device::DeviceError;
    use crate::domain::permission::PermissionStatus;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use test_log::test;

    #[derive(Debug, Default)]
    pub(crate) struct RecordingNotifications {
        pub status: Option<PermissionStatus>,
        pub fail: bool,
        pub delivered: Mutex<Vec<(Alert, Trigger)>>,
    }

    impl RecordingNotifications {
        pub fn denying() -> Self {
            RecordingNotifications {
                status: Some(PermissionStatus::Denied),
                ..Default::default()
            }
        }

        pub fn delivered_bodies(&self) -> Vec<String> {
            self.delivered.lock().unwrap().iter().map(|(alert, _)| alert.body.clone()).collect()
        }
    }

    #[async_trait]
    impl NotificationService for RecordingNotifications {
        async fn request_permission(&self) -> PermissionStatus {
            self.status.unwrap_or(PermissionStatus::Granted)
        }

        async fn schedule(&self, alert: &Alert, trigger: Trigger) -> Result<(), DeviceError> {
            if self.fail {
                return Err(DeviceError::NotificationRejected("test".to_string()));
            }
            self.delivered.lock().unwrap().push((alert.clone(), trigger));
            Ok(())
        }
    }

    fn sample_venues() -> Vec<Venue> {
        vec![
            Venue::new("Poulet Rouge", 45.504, -73.567, 500.0),
            Venue::new("Lulu's", 45.506, -73.565, 300.0),
        ]
    }

    #[test(tokio::test)]
    async fn check_geofence_notifies_every_nearby_venue_immediately() {
        let notifications = RecordingNotifications::default();

        let alerts = check_geofence(&Coordinate::new(45.504, -73.567), &sample_venues(), &notifications).await;

        assert_eq!(alerts.len(), 2);
        assert_eq!(
            notifications.delivered_bodies(),
            vec![
                "You are near Poulet Rouge. Don’t forget to use your discount!".to_string(),
                "You are near Lulu's. Don’t forget to use your discount!".to_string(),
            ]
        );
        assert!(notifications.delivered.lock().unwrap().iter().all(|(alert, trigger)| alert.title == "Discount Alert!" && *trigger == Trigger::Immediate));
    }

    #[test(tokio::test)]
    async fn check_geofence_notifies_nothing_when_far_away() {
        let notifications = RecordingNotifications::default();

        let alerts = check_geofence(&Coordinate::new(0.0, 0.0), &sample_venues(), &notifications).await;

        assert!(alerts.is_empty());
        assert!(notifications.delivered_bodies().is_empty());
    }

    #[test(tokio::test)]
    async fn check_geofence_alerts_again_on_the_next_fix() {
        let notifications = RecordingNotifications::default();
        let current = Coordinate::new(45.506, -73.565);
        let venues = vec![Venue::new("Lulu's", 45.506, -73.565, 300.0)];

        check_geofence(&current, &venues, &notifications).await;
        check_geofence(&current, &venues, &notifications).await;

        assert_eq!(notifications.delivered_bodies().len(), 2);
    }

    #[test(tokio::test)]
    async fn check_geofence_does_not_retry_failed_deliveries() {
        let notifications = RecordingNotifications {
            fail: true,
            ..Default::default()
        };

        let alerts = check_geofence(&Coordinate::new(45.504, -73.567), &sample_venues(), &notifications).await;

        assert_eq!(alerts.len(), 2);
        assert!(notifications.delivered_bodies().is_empty());
    }
}

use crate::app_config::Device;
use crate::device::{DeviceError, LocationProvider, NotificationService, Trigger};
use crate::domain::permission::PermissionStatus;
use crate::domain::{Alert, Coordinate};
use crate::notification_handler::NotificationHandler;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Device stand-in that answers from configuration and delivers notifications to the log.
#[derive(Debug)]
pub struct SimulatedDevice {
    location_permission: PermissionStatus,
    notification_permission: PermissionStatus,
    position: Option<Coordinate>,
    fix_delay: Duration,
    handler: NotificationHandler,
    badge: AtomicU32,
}

impl SimulatedDevice {
    pub fn new(config: &Device, handler: NotificationHandler) -> Self {
        SimulatedDevice {
            location_permission: config.location_permission(),
            notification_permission: config.notification_permission(),
            position: config.position(),
            fix_delay: config.fix_delay(),
            handler,
            badge: AtomicU32::new(0),
        }
    }

    pub fn badge(&self) -> u32 {
        self.badge.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl LocationProvider for SimulatedDevice {
    async fn request_permission(&self) -> PermissionStatus {
        debug!(status = ?self.location_permission, "📱 Location permission prompt answered");
        self.location_permission
    }

    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<Coordinate, DeviceError> {
        sleep(self.fix_delay).await;
        self.position
            .ok_or_else(|| DeviceError::PositionUnavailable("no position configured for the simulated device".to_string()))
    }
}

#[async_trait]
impl NotificationService for SimulatedDevice {
    async fn request_permission(&self) -> PermissionStatus {
        debug!(status = ?self.notification_permission, "📱 Notification permission prompt answered");
        self.notification_permission
    }

    async fn schedule(&self, alert: &Alert, trigger: Trigger) -> Result<(), DeviceError> {
        if self.notification_permission == PermissionStatus::Denied {
            return Err(DeviceError::NotificationRejected("notifications are not permitted".to_string()));
        }

        match trigger {
            Trigger::Immediate => {
                if self.handler.show_alert {
                    info!("🔔 {}: {}", alert.title, alert.body);
                }
                if self.handler.play_sound {
                    info!("🔊 *ding*");
                }
                if self.handler.set_badge {
                    let badge = self.badge.fetch_add(1, Ordering::Relaxed) + 1;
                    debug!(badge, "🔴 Updated badge");
                }
            }
        }

        Ok(())
    }
}

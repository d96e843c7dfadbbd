use crate::app_config::Notifications;
use tracing::info;

/// How delivered notifications are presented while the app is in the foreground.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NotificationHandler {
    pub show_alert: bool,
    pub play_sound: bool,
    pub set_badge: bool,
}

impl Default for NotificationHandler {
    fn default() -> Self {
        NotificationHandler {
            show_alert: true,
            play_sound: false,
            set_badge: false,
        }
    }
}

impl NotificationHandler {
    /// Called once during bootstrap; the result is handed to the notification service.
    pub fn configure(config: &Notifications) -> Self {
        let handler = NotificationHandler {
            show_alert: config.show_alert(),
            play_sound: config.play_sound(),
            set_badge: config.set_badge(),
        };

        info!(?handler, "🔔 Configured notification handler");
        handler
    }
}

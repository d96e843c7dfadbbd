use crate::domain::permission::PermissionStatus;
use crate::domain::{Coordinate, Listing, Tab, Venue};
use config::{Config, ConfigError};
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    notifications: Notifications,
    device: Device,
    feed: Feed,
    venues: Vec<Venue>,
    #[serde(default)]
    listings: Vec<Listing>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(deserialize_with = "deserialize_level")]
    log_level: Level,
    store_buffer_size: NonZeroUsize,
}

impl Core {
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn store_buffer_size(&self) -> usize {
        self.store_buffer_size.get()
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Level::from_str(&value).map_err(|_| Error::invalid_value(Unexpected::Str(&value), &"one of trace, debug, info, warn, error"))
}

#[derive(Debug, Deserialize)]
pub struct Notifications {
    show_alert: bool,
    play_sound: bool,
    set_badge: bool,
}

impl Notifications {
    pub fn show_alert(&self) -> bool {
        self.show_alert
    }

    pub fn play_sound(&self) -> bool {
        self.play_sound
    }

    pub fn set_badge(&self) -> bool {
        self.set_badge
    }
}

/// Answers given by the simulated device.
#[derive(Debug, Deserialize)]
pub struct Device {
    location_permission: PermissionStatus,
    notification_permission: PermissionStatus,
    position: Option<Coordinate>,
    #[serde(with = "humantime_serde")]
    fix_delay: Duration,
}

impl Device {
    pub fn location_permission(&self) -> PermissionStatus {
        self.location_permission
    }

    pub fn notification_permission(&self) -> PermissionStatus {
        self.notification_permission
    }

    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    pub fn fix_delay(&self) -> Duration {
        self.fix_delay
    }
}

#[derive(Debug, Deserialize)]
pub struct Feed {
    #[serde(default)]
    initial_tab: Tab,
}

impl Feed {
    pub fn initial_tab(&self) -> Tab {
        self.initial_tab
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    log_level: Level::INFO,
                    store_buffer_size: NonZeroUsize::new(8).unwrap(),
                },
                notifications: Notifications {
                    show_alert: true,
                    play_sound: false,
                    set_badge: false,
                },
                device: Device {
                    location_permission: PermissionStatus::Granted,
                    notification_permission: PermissionStatus::Granted,
                    position: Some(Coordinate::new(45.504, -73.567)),
                    fix_delay: Duration::ZERO,
                },
                feed: Feed { initial_tab: Tab::Explore },
                venues: vec![
                    Venue::new("Poulet Rouge", 45.504, -73.567, 500.0),
                    Venue::new("Lulu's", 45.506, -73.565, 300.0),
                ],
                listings: vec![
                    Listing::new("Ganadara", "15% Discount", "Near You"),
                    Listing::new("Poulet Rouge", "15% Discount", "Recommended"),
                ],
            },
        }
    }

    pub fn location_permission(mut self, status: PermissionStatus) -> Self {
        self.config.device.location_permission = status;
        self
    }

    pub fn notification_permission(mut self, status: PermissionStatus) -> Self {
        self.config.device.notification_permission = status;
        self
    }

    pub fn position(mut self, position: Option<Coordinate>) -> Self {
        self.config.device.position = position;
        self
    }

    pub fn set_badge(mut self, set_badge: bool) -> Self {
        self.config.notifications.set_badge = set_badge;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

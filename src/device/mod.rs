mod simulated;

pub use simulated::SimulatedDevice;

use crate::domain::permission::PermissionStatus;
use crate::domain::{Alert, Coordinate};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trigger {
    Immediate,
}

#[async_trait]
pub trait LocationProvider: Debug + Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    async fn current_position(&self) -> Result<Coordinate, DeviceError>;
}

#[async_trait]
pub trait NotificationService: Debug + Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    async fn schedule(&self, alert: &Alert, trigger: Trigger) -> Result<(), DeviceError>;
}

#[derive(Error, PartialEq, Debug)]
pub enum DeviceError {
    #[error("no position fix available: {0}")]
    PositionUnavailable(String),
    #[error("notification was not delivered: {0}")]
    NotificationRejected(String),
}

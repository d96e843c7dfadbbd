use serde::Deserialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Answer of a device permission prompt.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PermissionEvent {
    Requested,
    Resolved(PermissionStatus),
}

/// Lifecycle of a single permission within a session. There is no way back to
/// `Requesting` once an answer came in.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum PermissionState {
    #[default]
    Unrequested,
    Requesting,
    Granted,
    Denied,
}

impl PermissionState {
    pub fn apply(self, event: PermissionEvent) -> Result<PermissionState, PermissionError> {
        match (self, event) {
            (PermissionState::Unrequested, PermissionEvent::Requested) => Ok(PermissionState::Requesting),
            (PermissionState::Requesting, PermissionEvent::Resolved(PermissionStatus::Granted)) => Ok(PermissionState::Granted),
            (PermissionState::Requesting, PermissionEvent::Resolved(PermissionStatus::Denied)) => Ok(PermissionState::Denied),
            (from, event) => Err(PermissionError::InvalidTransition { from, event }),
        }
    }
}

impl Display for PermissionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionState::Unrequested => write!(f, "unrequested"),
            PermissionState::Requesting => write!(f, "requesting"),
            PermissionState::Granted => write!(f, "granted"),
            PermissionState::Denied => write!(f, "denied"),
        }
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum PermissionError {
    #[error("cannot apply {event:?} to a permission that is {from}")]
    InvalidTransition { from: PermissionState, event: PermissionEvent },
}

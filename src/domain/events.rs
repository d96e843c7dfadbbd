use crate::domain::permission::PermissionEvent;
use crate::domain::{Coordinate, Tab, UserMessage};

#[derive(Debug)]
pub enum Event {
    NotificationPermission(PermissionEvent),
    LocationPermission(PermissionEvent),
    PositionFixed(Coordinate),
    UserMessage(UserMessage),
    TabSelected(Tab),
    FavoriteToggled(String),
    SearchFocusChanged(bool),
}

/// A blocking message the user has to acknowledge.
#[derive(Clone, PartialEq, Debug)]
pub struct UserMessage {
    pub title: String,
    pub message: String,
}

impl UserMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        UserMessage {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn location_permission_denied() -> Self {
        UserMessage::new("Permission Denied", "Location permission is required to use this feature.")
    }

    pub fn notification_permission_denied() -> Self {
        UserMessage::new("Notification Permission Denied", "Push notifications won’t work.")
    }
}

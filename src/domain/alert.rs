use crate::domain::Venue;

pub const ALERT_TITLE: &str = "Discount Alert!";

#[derive(Clone, PartialEq, Debug)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

impl Alert {
    pub fn for_venue(venue: &Venue) -> Self {
        Alert {
            title: ALERT_TITLE.to_string(),
            body: format!("You are near {}. Don’t forget to use your discount!", venue.name),
        }
    }
}

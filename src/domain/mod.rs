mod alert;
mod coordinate;
pub mod events;
mod listing;
pub mod permission;
mod tab;
mod user_message;
mod venue;

pub use alert::Alert;
pub use coordinate::Coordinate;
pub use listing::Listing;
pub use tab::Tab;
pub use user_message::UserMessage;
pub use venue::Venue;

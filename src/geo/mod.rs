pub mod haversine;
pub mod proximity;

pub use haversine::distance;
pub use proximity::nearby_venues;

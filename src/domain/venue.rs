use crate::domain::Coordinate;

/// A listed venue with a circular geofence around it.
#[derive(Clone, PartialEq, Debug)]
pub struct Venue {
    pub name: String,
    pub location: Coordinate,
    pub radius: f64, // In meters
}

#[cfg(test)]
impl Venue {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, radius: f64) -> Self {
        Venue {
            name: name.into(),
            location: Coordinate::new(latitude, longitude),
            radius,
        }
    }
}

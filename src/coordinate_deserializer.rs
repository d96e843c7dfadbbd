use crate::domain::Coordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

pub(crate) fn validate<E: Error>(latitude: f64, longitude: f64) -> Result<Coordinate, E> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(E::custom(format!("invalid latitude: {}, must be between -90 and 90", latitude)));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(E::custom(format!("invalid longitude: {}, must be between -180 and 180", longitude)));
    }

    Ok(Coordinate::new(latitude, longitude))
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        validate(inner.latitude, inner.longitude)
    }
}

use crate::coordinate_deserializer::validate;
use crate::domain::Venue;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Venue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            name: String,
            latitude: f64,
            longitude: f64,
            radius_m: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        let location = validate::<D::Error>(inner.latitude, inner.longitude)?;

        // Also rejects NaN
        if !(inner.radius_m > 0.0) {
            return Err(Error::custom(format!("invalid radius for venue '{}': {}, must be greater than 0", inner.name, inner.radius_m)));
        }

        Ok(Venue {
            name: inner.name,
            location,
            radius: inner.radius_m,
        })
    }
}

use std::fmt::{Display, Formatter};

/// A single sampled position in degrees.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Latitude: {}, Longitude: {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::origin(Coordinate::new(0.0, 0.0), true)]
    #[case::north_pole(Coordinate::new(90.0, 0.0), true)]
    #[case::date_line(Coordinate::new(0.0, -180.0), true)]
    #[case::latitude_too_large(Coordinate::new(90.1, 0.0), false)]
    #[case::longitude_too_small(Coordinate::new(0.0, -180.5), false)]
    #[case::nan(Coordinate::new(f64::NAN, 0.0), false)]
    fn is_valid(#[case] coordinate: Coordinate, #[case] expected: bool) {
        assert_eq!(coordinate.is_valid(), expected);
    }

    #[test]
    fn display_matches_the_location_screen_format() {
        assert_eq!(Coordinate::new(45.504, -73.567).to_string(), "Latitude: 45.504, Longitude: -73.567");
    }
}

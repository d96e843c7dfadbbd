use crate::domain::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two valid coordinates.
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let phi_1 = from.latitude.to_radians();
    let phi_2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2) + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::PI;

    const POULET_ROUGE: Coordinate = Coordinate { latitude: 45.504, longitude: -73.567 };
    const LULUS: Coordinate = Coordinate { latitude: 45.506, longitude: -73.565 };

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!((actual - expected).abs() <= tolerance, "expected {} ± {}, got {}", expected, tolerance, actual);
    }

    #[rstest]
    #[case::origin(Coordinate::new(0.0, 0.0))]
    #[case::venue(POULET_ROUGE)]
    #[case::north_pole(Coordinate::new(90.0, 0.0))]
    #[case::date_line(Coordinate::new(-33.9, 180.0))]
    fn distance_to_itself_is_zero(#[case] coordinate: Coordinate) {
        assert_eq!(distance(&coordinate, &coordinate), 0.0);
    }

    #[rstest]
    #[case(POULET_ROUGE, LULUS)]
    #[case(Coordinate::new(0.0, 0.0), POULET_ROUGE)]
    #[case(Coordinate::new(-89.0, 179.0), Coordinate::new(89.5, -179.5))]
    #[case(Coordinate::new(51.8615899, 4.3580323), Coordinate::new(-33.8688, 151.2093))]
    fn distance_is_symmetric(#[case] a: Coordinate, #[case] b: Coordinate) {
        assert_close(distance(&a, &b), distance(&b, &a), 1e-9);
    }

    #[test]
    fn distance_between_the_sample_venues() {
        assert_close(distance(&POULET_ROUGE, &LULUS), 271.569, 0.01);
    }

    #[test]
    fn distance_between_antipodes_is_half_the_circumference() {
        let result = distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));

        assert_close(result, PI * EARTH_RADIUS, 1e-3);
        assert_close(result, 20_015_086.796, 0.01);
    }

    #[test]
    fn one_millidegree_along_the_equator() {
        assert_close(distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 0.001)), 111.195, 0.001);
    }
}

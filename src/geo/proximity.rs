use crate::domain::{Coordinate, Venue};
use crate::geo::distance;
use tracing::trace;

/// Returns the venues whose geofence contains `current`, in input order. A venue
/// exactly on its radius is not nearby.
pub fn nearby_venues<'a>(current: &Coordinate, venues: &'a [Venue]) -> Vec<&'a Venue> {
    debug_assert!(current.is_valid(), "invalid coordinate {:?}", current);

    venues
        .iter()
        .filter(|venue| {
            let distance = distance(current, &venue.location);
            trace!(venue = venue.name.as_str(), distance, radius = venue.radius, "📍 Distance to venue");
            distance < venue.radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_venues() -> Vec<Venue> {
        vec![
            Venue::new("Poulet Rouge", 45.504, -73.567, 500.0),
            Venue::new("Lulu's", 45.506, -73.565, 300.0),
        ]
    }

    fn names(venues: Vec<&Venue>) -> Vec<&str> {
        venues.into_iter().map(|venue| venue.name.as_str()).collect()
    }

    #[test]
    fn returns_every_venue_in_range_in_input_order() {
        let venues = sample_venues();

        let result = nearby_venues(&Coordinate::new(45.504, -73.567), &venues);

        assert_eq!(names(result), vec!["Poulet Rouge", "Lulu's"]);
    }

    #[test]
    fn returns_nothing_when_far_away() {
        let venues = sample_venues();

        let result = nearby_venues(&Coordinate::new(0.0, 0.0), &venues);

        assert!(result.is_empty());
    }

    #[test]
    fn excludes_a_venue_exactly_on_its_radius() {
        let current = Coordinate::new(45.504, -73.567);
        let mut venue = Venue::new("Lulu's", 45.506, -73.565, 0.0);
        venue.radius = distance(&current, &venue.location);
        let venues = vec![venue];

        let result = nearby_venues(&current, &venues);

        assert!(result.is_empty());
    }

    #[test]
    fn includes_a_venue_just_inside_its_radius() {
        let current = Coordinate::new(45.504, -73.567);
        let mut venue = Venue::new("Lulu's", 45.506, -73.565, 0.0);
        venue.radius = distance(&current, &venue.location) + 0.001;
        let venues = vec![venue];

        let result = nearby_venues(&current, &venues);

        assert_eq!(names(result), vec!["Lulu's"]);
    }

    #[test]
    fn filters_only_the_venues_out_of_range() {
        let venues = vec![
            Venue::new("Far", 0.0, 0.0, 1000.0),
            Venue::new("Lulu's", 45.506, -73.565, 300.0),
            Venue::new("Tight", 45.506, -73.565, 100.0),
        ];

        let result = nearby_venues(&Coordinate::new(45.504, -73.567), &venues);

        assert_eq!(names(result), vec!["Lulu's"]);
    }

    #[test]
    fn returns_nothing_for_no_venues() {
        assert!(nearby_venues(&Coordinate::new(45.504, -73.567), &[]).is_empty());
    }
}

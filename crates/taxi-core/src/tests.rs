//! Unit tests for taxi-core primitives.
//!
//! All tests use small hand-crafted maps so they run without any seed data.

#[cfg(test)]
mod helpers {
    use crate::{CityMap, Location, RoadSegment};

    /// Triangle map: locations 2, 3, 4 with the durations from the original
    /// three-node village.
    pub fn triangle() -> CityMap {
        let l = |id| Location::new(id);
        CityMap::new(
            vec![l(2), l(3), l(4)],
            vec![
                RoadSegment::new(l(2), l(3), 4.0),
                RoadSegment::new(l(2), l(4), 2.0),
                RoadSegment::new(l(3), l(4), 1.0),
            ],
        )
        .unwrap()
    }
}

#[cfg(test)]
mod location {
    use crate::{CoreError, Location};

    #[test]
    fn from_signed_accepts_non_negative() {
        assert_eq!(Location::from_signed(0).unwrap(), Location::new(0));
        assert_eq!(Location::from_signed(16).unwrap(), Location::new(16));
    }

    #[test]
    fn from_signed_rejects_negative() {
        let err = Location::from_signed(-1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidLocation(-1)));
    }

    #[test]
    fn ordering_and_equality_by_id() {
        assert!(Location::new(1) < Location::new(2));
        assert_eq!(Location::new(7), Location::new(7));
    }

    #[test]
    fn display_is_bare_id() {
        assert_eq!(Location::new(12).to_string(), "12");
    }
}

#[cfg(test)]
mod itinerary {
    use crate::{CoreError, Itinerary, Location};

    fn locs(ids: &[u32]) -> Vec<Location> {
        ids.iter().copied().map(Location::new).collect()
    }

    #[test]
    fn two_distinct_stops_ok() {
        let it = Itinerary::new(locs(&[1, 2])).unwrap();
        assert_eq!(it.start(), Location::new(1));
        assert_eq!(it.end(), Location::new(2));
        assert_eq!(it.stop_count(), 2);
    }

    #[test]
    fn single_stop_rejected() {
        let err = Itinerary::new(locs(&[1])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidItinerary(_)));
    }

    #[test]
    fn empty_rejected() {
        assert!(Itinerary::new(vec![]).is_err());
    }

    #[test]
    fn repeated_stop_rejected() {
        let err = Itinerary::new(locs(&[1, 4, 1])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidItinerary(_)));
    }

    #[test]
    fn legs_are_consecutive_pairs() {
        let it = Itinerary::new(locs(&[1, 4, 9])).unwrap();
        let legs: Vec<_> = it.legs().collect();
        assert_eq!(
            legs,
            vec![
                (Location::new(1), Location::new(4)),
                (Location::new(4), Location::new(9)),
            ]
        );
    }
}

#[cfg(test)]
mod city {
    use crate::{CityMap, CoreError, Location, RoadSegment};

    fn l(id: u32) -> Location {
        Location::new(id)
    }

    #[test]
    fn negative_duration_rejected() {
        let err = CityMap::new(
            vec![l(1), l(2)],
            vec![RoadSegment::new(l(1), l(2), -1.0)],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidCityMap(_)));
    }

    #[test]
    fn zero_duration_rejected() {
        let err = CityMap::new(
            vec![l(1), l(2)],
            vec![RoadSegment::new(l(1), l(2), 0.0)],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidCityMap(_)));
    }

    #[test]
    fn nan_duration_rejected() {
        assert!(
            CityMap::new(
                vec![l(1), l(2)],
                vec![RoadSegment::new(l(1), l(2), f64::NAN)],
            )
            .is_err()
        );
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let err = CityMap::new(
            vec![l(1), l(2)],
            vec![RoadSegment::new(l(3), l(2), 1.0)],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidCityMap(_)));
    }

    #[test]
    fn duplicate_location_rejected() {
        let err = CityMap::new(vec![l(1), l(2), l(1)], vec![]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCityMap(_)));
    }

    #[test]
    fn valid_map_builds() {
        let city = CityMap::new(
            vec![l(1), l(3)],
            vec![RoadSegment::new(l(1), l(3), 9.0)],
        )
        .unwrap();
        assert_eq!(city.location_count(), 2);
        assert_eq!(city.segment_count(), 1);
        assert!(city.contains(l(1)));
        assert!(!city.contains(l(2)));
    }

    #[test]
    fn segment_between_is_order_independent() {
        let city = super::helpers::triangle();
        let forward = city.segment_between(l(2), l(3)).unwrap();
        let reverse = city.segment_between(l(3), l(2)).unwrap();
        assert_eq!(forward.minutes, 4.0);
        assert_eq!(reverse.minutes, 4.0);
        assert!(city.segment_between(l(2), l(9)).is_none());
    }

    #[test]
    fn clone_shares_no_state() {
        let original = super::helpers::triangle();
        let copy = original.clone();
        drop(copy);
        // The original is still fully usable after the copy is gone.
        assert_eq!(original.segment_count(), 3);
        assert_eq!(original.segments()[0].minutes, 4.0);
    }

    #[test]
    fn accessors_preserve_construction_order() {
        let city = super::helpers::triangle();
        let ids: Vec<u32> = city.locations().iter().map(|loc| loc.id()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert_eq!(city.segments()[1].minutes, 2.0);
    }
}

#[cfg(test)]
mod validate {
    use crate::{check_route, CoreError, Location};

    fn l(id: u32) -> Location {
        Location::new(id)
    }

    #[test]
    fn unknown_start_fires_first() {
        let city = super::helpers::triangle();
        // Both endpoints are unknown; the start must be the one reported.
        let err = check_route(l(18), l(19), &city).unwrap_err();
        assert!(matches!(err, CoreError::UnknownLocation(loc) if loc == l(18)));
    }

    #[test]
    fn unknown_end_reported() {
        let city = super::helpers::triangle();
        let err = check_route(l(2), l(19), &city).unwrap_err();
        assert!(matches!(err, CoreError::UnknownLocation(loc) if loc == l(19)));
    }

    #[test]
    fn unknown_checked_before_same() {
        let city = super::helpers::triangle();
        // 18 == 18, but 18 is also unknown — unknown wins.
        let err = check_route(l(18), l(18), &city).unwrap_err();
        assert!(matches!(err, CoreError::UnknownLocation(_)));
    }

    #[test]
    fn same_location_rejected() {
        let city = super::helpers::triangle();
        let err = check_route(l(2), l(2), &city).unwrap_err();
        assert!(matches!(err, CoreError::SameLocation(loc) if loc == l(2)));
    }

    #[test]
    fn distinct_known_pair_ok() {
        let city = super::helpers::triangle();
        assert!(check_route(l(2), l(4), &city).is_ok());
    }
}

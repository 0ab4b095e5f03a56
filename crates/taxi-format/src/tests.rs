//! Unit tests for taxi-format — golden strings over small fixture maps.

#[cfg(test)]
mod helpers {
    use taxi_core::{CityMap, Location, RoadSegment};

    pub fn l(id: u32) -> Location {
        Location::new(id)
    }

    pub fn chain() -> CityMap {
        CityMap::new(
            vec![l(2), l(5), l(8)],
            vec![
                RoadSegment::new(l(2), l(5), 3.0),
                RoadSegment::new(l(5), l(8), 4.0),
            ],
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tables {
    use super::helpers::chain;
    use crate::{locations_table, segments_table};

    #[test]
    fn locations_table_lists_in_map_order() {
        let out = locations_table(&chain());
        assert_eq!(
            out,
            "Available locations\n\
             -------------------\n\
             2\n\
             5\n\
             8\n"
        );
    }

    #[test]
    fn segments_table_has_one_row_per_segment() {
        let out = segments_table(&chain());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4); // header + rule + 2 rows
        assert!(lines[0].starts_with("Departure"));
        assert!(lines[2].contains("2") && lines[2].contains("5") && lines[2].contains("3.0 min"));
        assert!(lines[3].contains("4.0 min"));
    }
}

#[cfg(test)]
mod markdown {
    use taxi_core::{Itinerary, Location};
    use taxi_routing::RoutingError;

    use super::helpers::{chain, l};
    use crate::itinerary_markdown;

    fn itinerary(ids: &[u32]) -> Itinerary {
        Itinerary::new(ids.iter().copied().map(Location::new).collect()).unwrap()
    }

    #[test]
    fn renders_legs_and_total() {
        let out = itinerary_markdown(&itinerary(&[2, 5, 8]), &chain()).unwrap();
        assert_eq!(
            out,
            "# Shortest itinerary from 2 to 8\n\
             \n\
             > The taxi passes through the following stops:\n\
             - Location 2 (leg: 3.0 min)\n\
             - Location 5 (leg: 4.0 min)\n\
             - Location 8\n\
             \n\
             Total travel time: 7.0 min\n"
        );
    }

    #[test]
    fn broken_leg_is_an_error() {
        let err = itinerary_markdown(&itinerary(&[2, 8]), &chain()).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::NoSegment { a, b } if a == l(2) && b == l(8)
        ));
    }
}

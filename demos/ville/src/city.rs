//! Seed data for the demonstration city: sixteen locations and twenty-nine
//! road segments.  Durations are in minutes.

use taxi_core::{CityMap, Location, RoadSegment};

/// Build the demonstration city.
///
/// Goes through the public constructor so the seed is validated like any
/// other map.
pub fn build_city() -> CityMap {
    let seg = |a: u32, b: u32, minutes: f64| {
        RoadSegment::new(Location::new(a), Location::new(b), minutes)
    };

    CityMap::new(
        (1..=16).map(Location::new).collect(),
        vec![
            seg(1, 2, 5.0),
            seg(1, 3, 9.0),
            seg(1, 4, 4.0),
            seg(2, 5, 3.0),
            seg(2, 6, 2.0),
            seg(3, 4, 4.0),
            seg(3, 6, 1.0),
            seg(4, 7, 7.0),
            seg(5, 8, 4.0),
            seg(5, 9, 2.0),
            seg(5, 10, 9.0),
            seg(6, 7, 3.0),
            seg(6, 10, 9.0),
            seg(6, 11, 6.0),
            seg(7, 11, 8.0),
            seg(7, 15, 5.0),
            seg(8, 12, 5.0),
            seg(9, 8, 3.0),
            seg(9, 13, 10.0),
            seg(10, 9, 6.0),
            seg(10, 13, 5.0),
            seg(10, 14, 1.0),
            seg(11, 14, 2.0),
            seg(12, 16, 9.0),
            seg(13, 12, 4.0),
            seg(13, 14, 3.0),
            seg(14, 16, 4.0),
            seg(15, 14, 4.0),
            seg(15, 16, 3.0),
        ],
    )
    .expect("seed city satisfies the map invariants")
}

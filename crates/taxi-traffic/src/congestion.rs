//! Congestion — a duration delta on a single road segment.
//!
//! A positive delta adds delay; a negative delta relieves it
//! ("fluidification").  Relief may bring a duration arbitrarily close to
//! zero, but never to zero or below — that fails with
//! [`TrafficError::NegativeDuration`] before any copy is made.

use taxi_core::{check_route, CityMap, Location};

use crate::{TrafficError, TrafficResult};

/// Apply a congestion delta to the segment between `a` and `b`.
///
/// Check order is part of the contract: unknown location, same location,
/// missing segment, non-positive resulting duration — and only then the
/// copy.  On any failure the input map is left completely untouched.
///
/// The segment match is order-independent; with parallel segments between
/// the same pair, the earliest-constructed one is adjusted.
pub fn apply_congestion(
    a: Location,
    b: Location,
    delta_minutes: f64,
    city: &CityMap,
) -> TrafficResult<CityMap> {
    check_route(a, b, city)?;

    let idx = city
        .segments()
        .iter()
        .position(|s| s.links(a, b))
        .ok_or(TrafficError::NonExistentEdge { a, b })?;

    let new_minutes = city.segments()[idx].minutes + delta_minutes;
    if new_minutes <= 0.0 {
        return Err(TrafficError::NegativeDuration { a, b, minutes: new_minutes });
    }

    let mut segments = city.segments().to_vec();
    segments[idx].minutes = new_minutes;

    // Rebuilding through the constructor revalidates every invariant.
    Ok(CityMap::new(city.locations().to_vec(), segments)?)
}

//! Roadworks — a delay applied to every segment touching a set of locations.
//!
//! A segment whose **both** endpoints are under roadworks is delayed twice
//! the delta; exactly one endpoint, once; no endpoint, unchanged.  The 2×
//! compounding is deliberate and part of the contract.

use rustc_hash::FxHashSet;

use taxi_core::{CityMap, CoreError, Location};

use crate::{TrafficError, TrafficResult};

/// Apply roadworks at `targets`, delaying every incident segment by
/// `delta_minutes` per affected endpoint.
///
/// Check order is part of the contract: duplicate target, non-positive
/// delta, unknown target — all before the copy.  On any failure the input
/// map is left completely untouched.
pub fn apply_roadworks(
    targets: &[Location],
    delta_minutes: f64,
    city: &CityMap,
) -> TrafficResult<CityMap> {
    let mut affected: FxHashSet<Location> = FxHashSet::default();
    for &loc in targets {
        if !affected.insert(loc) {
            return Err(TrafficError::DuplicateLocation(loc));
        }
    }

    if delta_minutes <= 0.0 {
        return Err(TrafficError::NonPositiveDuration(delta_minutes));
    }

    for &loc in targets {
        if !city.contains(loc) {
            return Err(CoreError::UnknownLocation(loc).into());
        }
    }

    let segments = city
        .segments()
        .iter()
        .map(|seg| {
            let mut updated = *seg;
            match (affected.contains(&seg.a), affected.contains(&seg.b)) {
                (true, true) => updated.minutes += 2.0 * delta_minutes,
                (true, false) | (false, true) => updated.minutes += delta_minutes,
                (false, false) => {}
            }
            updated
        })
        .collect();

    Ok(CityMap::new(city.locations().to_vec(), segments)?)
}

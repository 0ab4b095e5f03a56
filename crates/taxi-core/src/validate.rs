//! Shared route preconditions.
//!
//! Both the path finder and the disruption engine probe a `(start, end)` pair
//! against the map before doing any work.  The check order is part of the
//! contract — callers depend on which error fires first:
//!
//! 1. unknown start, 2. unknown end, 3. start equals end.

use crate::{CityMap, CoreError, CoreResult, Location};

/// Verify that `start` and `end` name two distinct locations of `city`.
///
/// Returns `Ok(())` when there is no problem; has no side effects.
pub fn check_route(start: Location, end: Location, city: &CityMap) -> CoreResult<()> {
    if !city.contains(start) {
        return Err(CoreError::UnknownLocation(start));
    }
    if !city.contains(end) {
        return Err(CoreError::UnknownLocation(end));
    }
    if start == end {
        return Err(CoreError::SameLocation(start));
    }
    Ok(())
}

//! Itinerary — an ordered, duplicate-free path through the city.

use rustc_hash::FxHashSet;

use crate::{CoreError, CoreResult, Location};

/// An ordered sequence of at least two distinct locations.
///
/// Itineraries are produced by the path finder or supplied by a caller for
/// validation; either way the constructor enforces the shape and the value is
/// immutable afterwards.  An itinerary is pure data — it carries no reference
/// to the map it was computed against.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    stops: Vec<Location>,
}

impl Itinerary {
    /// Validate and wrap a stop sequence.
    ///
    /// Fails with [`CoreError::InvalidItinerary`] if there are fewer than two
    /// stops or any location appears twice.
    pub fn new(stops: Vec<Location>) -> CoreResult<Self> {
        if stops.len() < 2 {
            return Err(CoreError::InvalidItinerary(
                "an itinerary needs at least two stops".into(),
            ));
        }
        let mut seen = FxHashSet::default();
        for &stop in &stops {
            if !seen.insert(stop) {
                return Err(CoreError::InvalidItinerary(format!(
                    "location {stop} appears more than once"
                )));
            }
        }
        Ok(Self { stops })
    }

    /// The stops in travel order.
    #[inline]
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// First stop (origin).
    #[inline]
    pub fn start(&self) -> Location {
        self.stops[0]
    }

    /// Last stop (destination).
    #[inline]
    pub fn end(&self) -> Location {
        self.stops[self.stops.len() - 1]
    }

    /// Number of stops (always ≥ 2).
    #[inline]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Iterator over consecutive stop pairs, in travel order.
    pub fn legs(&self) -> impl Iterator<Item = (Location, Location)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}

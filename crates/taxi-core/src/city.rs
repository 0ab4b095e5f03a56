//! The city map — a validated set of locations and weighted road segments.
//!
//! # Copy-on-write contract
//!
//! `CityMap` is logically immutable: there is no `&mut` API.  Every "change"
//! (see `taxi-traffic`) produces a brand-new validated map, and the original
//! stays intact for undo, tests, and concurrent readers.  `Clone` is a deep
//! copy — both vectors own plain values, so clones share no mutable state.
//!
//! # Storage
//!
//! Locations and segments live in flat ordered vectors (arena-style indexed
//! storage).  Accessor order is construction order, which callers rely on for
//! stable table output.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{CoreError, CoreResult, Location};

// ── RoadSegment ───────────────────────────────────────────────────────────────

/// An undirected road between two locations, weighted by travel time in
/// minutes.  The pair `{a, b}` is unordered: a segment stored as `(2, 5)`
/// also links `5` to `2`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadSegment {
    pub a: Location,
    pub b: Location,
    pub minutes: f64,
}

impl RoadSegment {
    #[inline]
    pub fn new(a: Location, b: Location, minutes: f64) -> Self {
        Self { a, b, minutes }
    }

    /// `true` if this segment connects `x` and `y`, in either stored order.
    #[inline]
    pub fn links(&self, x: Location, y: Location) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// `true` if either endpoint is `loc`.
    #[inline]
    pub fn touches(&self, loc: Location) -> bool {
        self.a == loc || self.b == loc
    }
}

impl fmt::Display for RoadSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({} min)", self.a, self.b, self.minutes)
    }
}

// ── CityMap ───────────────────────────────────────────────────────────────────

/// The full city graph: a duplicate-free location list and the undirected
/// weighted segments between them.
///
/// # Invariants (enforced at construction, and therefore after every
/// mutation, since mutations rebuild through [`CityMap::new`])
///
/// 1. every segment duration is strictly positive;
/// 2. both endpoints of every segment are present in `locations`;
/// 3. no location id appears twice.
///
/// A map violating any of these fails construction with
/// [`CoreError::InvalidCityMap`]; no partially-valid map is ever observable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityMap {
    locations: Vec<Location>,
    segments: Vec<RoadSegment>,
}

impl CityMap {
    /// Validate and build a map from its parts.
    pub fn new(locations: Vec<Location>, segments: Vec<RoadSegment>) -> CoreResult<Self> {
        let mut known: FxHashSet<Location> = FxHashSet::default();
        for &loc in &locations {
            if !known.insert(loc) {
                return Err(CoreError::InvalidCityMap(format!(
                    "location {loc} is listed more than once"
                )));
            }
        }

        for seg in &segments {
            // Negated comparison so NaN durations fail too.
            if !(seg.minutes > 0.0) {
                return Err(CoreError::InvalidCityMap(format!(
                    "segment {}-{} has non-positive duration {} min",
                    seg.a, seg.b, seg.minutes
                )));
            }
            if !known.contains(&seg.a) {
                return Err(CoreError::InvalidCityMap(format!(
                    "segment endpoint {} does not exist in the city",
                    seg.a
                )));
            }
            if !known.contains(&seg.b) {
                return Err(CoreError::InvalidCityMap(format!(
                    "segment endpoint {} does not exist in the city",
                    seg.b
                )));
            }
        }

        Ok(Self { locations, segments })
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    /// Locations in construction order.
    #[inline]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Segments in construction order.
    #[inline]
    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// `true` if `loc` is part of the city.
    pub fn contains(&self, loc: Location) -> bool {
        self.locations.contains(&loc)
    }

    /// The first segment linking `a` and `b` (either direction), if any.
    ///
    /// Parallel segments between the same pair are legal; this returns the
    /// earliest-constructed one.
    pub fn segment_between(&self, a: Location, b: Location) -> Option<&RoadSegment> {
        self.segments.iter().find(|s| s.links(a, b))
    }
}

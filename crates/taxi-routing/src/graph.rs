//! Arc-array view of a city map, built for relaxation-based search.
//!
//! # Data layout
//!
//! Locations get dense indices `0..n` in map order; every road segment
//! contributes **two directed arcs** (one per direction), stored in flat
//! parallel arrays (`arc_from`, `arc_to`, `arc_minutes`).  Bellman-Ford
//! relaxes the whole arc list each round, so no per-node adjacency (CSR row
//! pointer) is kept — a plain edge-list scan is the algorithm's inner loop.
//!
//! Parallel segments between the same pair of locations are preserved as
//! parallel arcs, not collapsed; the search simply never prefers the more
//! expensive one.  Callers that need a simple graph must deduplicate
//! upstream.

use rustc_hash::FxHashMap;

use taxi_core::{CityMap, Location};

/// Sentinel arc index meaning "no arc".
pub(crate) const NO_ARC: u32 = u32::MAX;

/// A weighted directed view of a [`CityMap`], indexed densely.
///
/// Building the graph never mutates or retains the map; the graph is a
/// throwaway value scoped to one query.
pub struct RouteGraph {
    /// Dense index → location, in map order.
    nodes: Vec<Location>,
    /// Location → dense index.
    index: FxHashMap<Location, u32>,

    // ── Arc data (two arcs per segment) ───────────────────────────────────
    pub arc_from: Vec<u32>,
    pub arc_to: Vec<u32>,
    pub arc_minutes: Vec<f64>,
}

impl RouteGraph {
    /// Build the arc-array view of `city`.
    pub fn from_city(city: &CityMap) -> Self {
        let nodes: Vec<Location> = city.locations().to_vec();
        let index: FxHashMap<Location, u32> = nodes
            .iter()
            .enumerate()
            .map(|(i, &loc)| (loc, i as u32))
            .collect();

        let arc_count = city.segment_count() * 2;
        let mut arc_from = Vec::with_capacity(arc_count);
        let mut arc_to = Vec::with_capacity(arc_count);
        let mut arc_minutes = Vec::with_capacity(arc_count);

        for seg in city.segments() {
            // Endpoints are guaranteed present by the map's invariants.
            let a = index[&seg.a];
            let b = index[&seg.b];
            arc_from.push(a);
            arc_to.push(b);
            arc_minutes.push(seg.minutes);
            arc_from.push(b);
            arc_to.push(a);
            arc_minutes.push(seg.minutes);
        }

        Self { nodes, index, arc_from, arc_to, arc_minutes }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arc_to.len()
    }

    // ── Index mapping ─────────────────────────────────────────────────────

    /// Dense index of `loc`, if it is part of the graph.
    pub fn index_of(&self, loc: Location) -> Option<u32> {
        self.index.get(&loc).copied()
    }

    /// Location at dense index `idx`.
    #[inline]
    pub fn location_at(&self, idx: u32) -> Location {
        self.nodes[idx as usize]
    }
}

//! Shortest-path search over a city map.
//!
//! # Algorithm
//!
//! Bellman-Ford relaxation: up to |V|−1 rounds over the whole arc list, with
//! an early exit once a round changes nothing.  The map guarantees strictly
//! positive durations, but congestion relief can legally drive a duration
//! arbitrarily close to zero, so the search must not assume any weight floor
//! — hence plain relaxation rather than a goal-directed algorithm tuned for
//! bounded-away-from-zero weights.
//!
//! # Determinism
//!
//! Arcs are relaxed in map order and a predecessor is only replaced on a
//! strict improvement, so an exact cost tie resolves to the earliest arc.
//! Identical inputs always produce the identical itinerary.

use taxi_core::{check_route, CityMap, Itinerary, Location};

use crate::graph::{RouteGraph, NO_ARC};
use crate::RoutingError;

/// Compute the minimum-total-duration itinerary from `start` to `end`.
///
/// Validation failures from [`check_route`] propagate unchanged (unknown
/// location, same start and end).  Fails with [`RoutingError::NoPath`] when
/// the two locations sit in disconnected components.  Never mutates `city`.
pub fn shortest_path(
    start: Location,
    end: Location,
    city: &CityMap,
) -> Result<Itinerary, RoutingError> {
    check_route(start, end, city)?;

    let graph = RouteGraph::from_city(city);
    // check_route guarantees both endpoints exist in the map.
    let src = graph.index_of(start).ok_or(RoutingError::NoPath { from: start, to: end })?;
    let dst = graph.index_of(end).ok_or(RoutingError::NoPath { from: start, to: end })?;

    let stops = relax(&graph, src, dst).ok_or(RoutingError::NoPath { from: start, to: end })?;
    Ok(Itinerary::new(stops)?)
}

/// Total duration in minutes of an already-built itinerary over `city`.
///
/// Each leg must be covered by a direct segment; otherwise the itinerary
/// does not describe a drivable route and the sum would be meaningless —
/// fails with [`RoutingError::NoSegment`] naming the broken leg.  Where
/// parallel segments cover a leg, the cheapest one counts, matching what the
/// path finder would traverse.
pub fn path_minutes(itinerary: &Itinerary, city: &CityMap) -> Result<f64, RoutingError> {
    let mut total = 0.0;
    for (a, b) in itinerary.legs() {
        total += leg_minutes(a, b, city).ok_or(RoutingError::NoSegment { a, b })?;
    }
    Ok(total)
}

/// Duration in minutes of the direct leg between `a` and `b`, if any segment
/// links them — the cheapest one where parallel segments exist.
pub fn leg_minutes(a: Location, b: Location, city: &CityMap) -> Option<f64> {
    let best = city
        .segments()
        .iter()
        .filter(|s| s.links(a, b))
        .map(|s| s.minutes)
        .fold(f64::INFINITY, f64::min);
    best.is_finite().then_some(best)
}

// ── Bellman-Ford internals ────────────────────────────────────────────────────

/// Run the relaxation and reconstruct the stop sequence from `src` to `dst`.
///
/// Returns `None` when `dst` is unreachable.
fn relax(graph: &RouteGraph, src: u32, dst: u32) -> Option<Vec<Location>> {
    let n = graph.node_count();
    // dist[v] = best known total minutes to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev_arc[v] = arc that reached v; NO_ARC for unreached nodes.
    let mut prev_arc = vec![NO_ARC; n];

    dist[src as usize] = 0.0;

    // |V|-1 rounds bound the longest possible simple path; stop early once a
    // full round no longer improves anything.
    for _ in 1..n {
        let mut improved = false;
        for arc in 0..graph.arc_count() {
            let u = graph.arc_from[arc] as usize;
            if dist[u].is_infinite() {
                continue;
            }
            let v = graph.arc_to[arc] as usize;
            let candidate = dist[u] + graph.arc_minutes[arc];
            if candidate < dist[v] {
                dist[v] = candidate;
                prev_arc[v] = arc as u32;
                improved = true;
            }
        }
        if !improved {
            break;
        }
    }

    if dist[dst as usize].is_infinite() {
        return None;
    }

    // Walk the predecessor arcs back from the destination.
    let mut stops = vec![graph.location_at(dst)];
    let mut cur = dst;
    while prev_arc[cur as usize] != NO_ARC {
        let arc = prev_arc[cur as usize];
        cur = graph.arc_from[arc as usize];
        stops.push(graph.location_at(cur));
    }
    stops.reverse();
    Some(stops)
}

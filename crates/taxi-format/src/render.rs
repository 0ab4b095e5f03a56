//! Table and Markdown renderers.
//!
//! Output is plain fixed-width text for the tables and Markdown for the
//! itinerary, matching what a terminal prints verbatim.  Durations render
//! with one decimal — presentation precision, not storage precision.

use std::fmt::Write;

use taxi_core::{CityMap, Itinerary};
use taxi_routing::{leg_minutes, RoutingError};

/// One row per location, in map order.
pub fn locations_table(city: &CityMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Available locations");
    let _ = writeln!(out, "{}", "-".repeat(19));
    for loc in city.locations() {
        let _ = writeln!(out, "{loc}");
    }
    out
}

/// Departure / arrival / duration rows, in map order.
pub fn segments_table(city: &CityMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:<10} {:<10}", "Departure", "Arrival", "Duration");
    let _ = writeln!(out, "{}", "-".repeat(34));
    for seg in city.segments() {
        let _ = writeln!(
            out,
            "{:<12} {:<10} {:<10}",
            seg.a.to_string(),
            seg.b.to_string(),
            format!("{:.1} min", seg.minutes),
        );
    }
    out
}

/// Markdown rendering of an itinerary: every stop, the duration of the leg
/// to the next stop, and the total travel time.
///
/// Fails with [`RoutingError::NoSegment`] if a leg of the itinerary has no
/// direct road segment in `city` — a partial total would be misleading.
pub fn itinerary_markdown(
    itinerary: &Itinerary,
    city: &CityMap,
) -> Result<String, RoutingError> {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# Shortest itinerary from {} to {}",
        itinerary.start(),
        itinerary.end()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "> The taxi passes through the following stops:");

    let mut total = 0.0;
    let stops = itinerary.stops();
    for (i, stop) in stops.iter().enumerate() {
        if i + 1 < stops.len() {
            let next = stops[i + 1];
            let leg = leg_minutes(*stop, next, city)
                .ok_or(RoutingError::NoSegment { a: *stop, b: next })?;
            total += leg;
            let _ = writeln!(out, "- Location {stop} (leg: {leg:.1} min)");
        } else {
            let _ = writeln!(out, "- Location {stop}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total travel time: {total:.1} min");
    Ok(out)
}

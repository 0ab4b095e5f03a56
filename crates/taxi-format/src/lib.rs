//! `taxi-format` — textual rendering of maps and itineraries.
//!
//! Pure string producers over the core types: nothing here mutates a map,
//! and nothing draws — graphical rendering is explicitly out of scope for
//! the toolkit.  Consumers such as the demo CLI decide where the text goes.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`render`] | `locations_table`, `segments_table`, `itinerary_markdown` |

pub mod render;

#[cfg(test)]
mod tests;

pub use render::{itinerary_markdown, locations_table, segments_table};

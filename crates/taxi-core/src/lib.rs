//! `taxi-core` — foundational types for the `taxiville` city-routing toolkit.
//!
//! This crate is a dependency of every other `taxi-*` crate.  It intentionally
//! has no `taxi-*` dependencies and minimal external ones (only `rustc-hash`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`location`]  | `Location` — non-negative integer node identity       |
//! | [`itinerary`] | `Itinerary` — ordered, duplicate-free path            |
//! | [`city`]      | `CityMap`, `RoadSegment` — the validated graph        |
//! | [`validate`]  | `check_route` — shared route preconditions            |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod city;
pub mod error;
pub mod itinerary;
pub mod location;
pub mod validate;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::{CityMap, RoadSegment};
pub use error::{CoreError, CoreResult};
pub use itinerary::Itinerary;
pub use location::Location;
pub use validate::check_route;

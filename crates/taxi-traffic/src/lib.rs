//! `taxi-traffic` — controlled disruptions of a city map.
//!
//! Both operations follow the same copy-on-write discipline: validate every
//! precondition first, then build a full independent copy of the map with the
//! change applied, revalidate it through the ordinary constructor, and return
//! the new map.  The input map is never touched — on failure there is nothing
//! to roll back, and on success the caller swaps its current-map reference in
//! one assignment.
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`congestion`] | `apply_congestion` — delay or relieve one segment    |
//! | [`roadworks`]  | `apply_roadworks` — delay all segments at locations  |
//! | [`error`]      | `TrafficError`, `TrafficResult<T>`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Propagates `Serialize`/`Deserialize` to the core types.   |

pub mod congestion;
pub mod error;
pub mod roadworks;


pub use congestion::apply_congestion;
pub use error::{TrafficError, TrafficResult};
pub use roadworks::apply_roadworks;

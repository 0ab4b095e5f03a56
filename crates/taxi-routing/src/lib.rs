//! `taxi-routing` — route graph and shortest-path search.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`graph`]      | `RouteGraph` — arc-array view of a `CityMap`             |
//! | [`pathfinder`] | `shortest_path`, `path_minutes`                          |
//! | [`error`]      | `RoutingError`, `RoutingResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Propagates `Serialize`/`Deserialize` to the core types.       |

pub mod error;
pub mod graph;
pub mod pathfinder;


pub use error::{RoutingError, RoutingResult};
pub use graph::RouteGraph;
pub use pathfinder::{leg_minutes, path_minutes, shortest_path};

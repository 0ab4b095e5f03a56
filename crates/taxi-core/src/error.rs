//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so validation failures keep their identity all the
//! way up to the presentation layer.  Every variant is a deterministic
//! input-validation failure — there is nothing transient to retry.

use thiserror::Error;

use crate::Location;

/// Errors produced by `taxi-core` construction and validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid location id {0}: ids are non-negative integers")]
    InvalidLocation(i64),

    #[error("invalid itinerary: {0}")]
    InvalidItinerary(String),

    #[error("invalid city map: {0}")]
    InvalidCityMap(String),

    #[error("location {0} is not part of the city")]
    UnknownLocation(Location),

    #[error("start and end are both location {0}; a route needs two distinct endpoints")]
    SameLocation(Location),
}

/// Shorthand result type for all `taxi-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;

//! Routing-subsystem error type.

use thiserror::Error;

use taxi_core::{CoreError, Location};

/// Errors produced by `taxi-routing`.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("no path connects locations {from} and {to}")]
    NoPath { from: Location, to: Location },

    #[error("no road segment directly links locations {a} and {b}")]
    NoSegment { a: Location, b: Location },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;

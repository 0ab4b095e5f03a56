//! Traffic-subsystem error type.

use thiserror::Error;

use taxi_core::{CoreError, Location};

/// Errors produced by `taxi-traffic`.
#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("no road segment exists between locations {a} and {b}")]
    NonExistentEdge { a: Location, b: Location },

    #[error(
        "adjustment would leave the {a}-{b} segment at {minutes} min; durations must stay positive"
    )]
    NegativeDuration { a: Location, b: Location, minutes: f64 },

    #[error("location {0} appears more than once in the roadworks list")]
    DuplicateLocation(Location),

    #[error("roadworks need a strictly positive delay, got {0} min")]
    NonPositiveDuration(f64),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type TrafficResult<T> = Result<T, TrafficError>;

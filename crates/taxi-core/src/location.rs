//! Location identity type.
//!
//! A `Location` is nothing but a non-negative integer id.  The inner `u32` is
//! `pub` so callers can pattern-match and construct literals without
//! ceremony; because the storage is unsigned, a constructed `Location` can
//! never hold a negative id.  Signed input from an outside boundary (CLI
//! arguments, external data files) goes through [`Location::from_signed`],
//! which is where the "negative id" failure lives.

use std::fmt;

use crate::{CoreError, CoreResult};

/// A node in the city graph, identified by a non-negative integer.
///
/// Equality, ordering, and hashing are all by id.  Immutable once created.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location(pub u32);

impl Location {
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Validate a signed id arriving from an outside boundary.
    ///
    /// Fails with [`CoreError::InvalidLocation`] if `id` is negative (or does
    /// not fit a `u32`).
    pub fn from_signed(id: i64) -> CoreResult<Self> {
        u32::try_from(id)
            .map(Location)
            .map_err(|_| CoreError::InvalidLocation(id))
    }

    /// The raw id.
    #[inline]
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Location {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

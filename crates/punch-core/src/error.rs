//! Usage errors raised by ledger operations.
//!
//! Soft failures (already in, nothing to delete) are not errors; they are
//! reported through [`Outcome`](crate::Outcome) or an absent result.

use thiserror::Error;

use crate::types::ValidationError;

/// A rejected ledger call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A required argument was empty.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// `entry` was called without one of its time bounds.
    #[error("a `{bound}` time is required")]
    MissingBound { bound: &'static str },

    /// `age` only moves history older than a cutoff.
    #[error("an `after` bound makes no sense for aging")]
    AfterNotAllowed,
}

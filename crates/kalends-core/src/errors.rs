//! Error types for kalends.
//!
//! The library has a single validation gate: turning raw components into a
//! `Date`. Everything downstream operates on values that are already known
//! to be valid, so the error surface stays small.

use thiserror::Error;

/// The error type used throughout kalends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year/month/day triple (or raw serial number) that does not denote
    /// a real Gregorian calendar day in the supported range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Checked date arithmetic moved outside the supported range.
    #[error("date out of range: {0}")]
    OutOfRange(String),
}

/// Shorthand `Result` type used throughout kalends.
pub type Result<T, E = Error> = std::result::Result<T, E>;

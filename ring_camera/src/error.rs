//! Error types for the ring camera
//!
//! Configuration problems are detected once, when a controller is built.
//! Per-frame problems (missing subject, failed ray query) never surface as
//! errors from `tick`; they are downgraded and logged where they happen.

use std::fmt;

/// Result type for ring camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ring camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Configuration rejected by validation (ordering, ranges, non-finite values)
    InvalidConfig(String),

    /// A ring with a negative or non-finite radius
    DegenerateRing(String),

    /// The host ray query failed (treated as "no hit" by the controller)
    RaycastFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::DegenerateRing(msg) => write!(f, "Degenerate ring: {}", msg),
            Error::RaycastFailed(msg) => write!(f, "Raycast failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

//! Error types for core value construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Track::new`](crate::Track::new).
///
/// Tracks arrive from an external reconstruction; these variants reject
/// inputs that would make a free trajectory state meaningless.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackError {
    /// A position or momentum component is NaN or infinite.
    NonFinite {
        /// Which quantity was non-finite (`"position"` or `"momentum"`).
        quantity: &'static str,
    },
    /// The inner momentum is the zero vector.
    ZeroMomentum,
    /// Charge is not ±1.
    InvalidCharge {
        /// The rejected charge.
        charge: i32,
    },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { quantity } => write!(f, "track {quantity} is not finite"),
            Self::ZeroMomentum => write!(f, "track momentum is zero"),
            Self::InvalidCharge { charge } => {
                write!(f, "track charge must be +1 or -1, got {charge}")
            }
        }
    }
}

impl Error for TrackError {}

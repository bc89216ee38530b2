//! Per-event error types.
//!
//! An unreachable surface is not an error: it is an invalid
//! [`TrajectoryStateOnSurface`](muex_propagator::TrajectoryStateOnSurface)
//! and ends up as an unavailable projection. The variants here are the
//! hard preconditions an event cannot be processed without.

use std::error::Error;
use std::fmt;

use muex_propagator::PropagationDirection;

use crate::config::ConfigError;

/// Errors returned by [`EventProcessor::process`](crate::EventProcessor::process).
#[derive(Debug, PartialEq)]
pub enum EventError {
    /// The event has no track collection under the configured label.
    MissingCollection {
        /// The label that was looked up.
        label: String,
    },
    /// The event setup has no field map under the configured label.
    MissingField {
        /// The label that was looked up.
        label: String,
    },
    /// The event setup has no propagator under the configured label.
    MissingPropagator {
        /// The label that was looked up.
        label: String,
    },
    /// A propagator was registered for the wrong direction.
    DirectionMismatch {
        /// The propagator's label.
        label: String,
        /// The direction the driver needs from it.
        expected: PropagationDirection,
        /// The direction it propagates in.
        found: PropagationDirection,
    },
    /// The driver configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCollection { label } => {
                write!(f, "no track collection labelled {label:?}")
            }
            Self::MissingField { label } => write!(f, "no magnetic field labelled {label:?}"),
            Self::MissingPropagator { label } => write!(f, "no propagator labelled {label:?}"),
            Self::DirectionMismatch {
                label,
                expected,
                found,
            } => write!(
                f,
                "propagator {label:?} propagates {found}, expected {expected}"
            ),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for EventError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for EventError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

//! The [`Propagator`] trait and [`PropagationDirection`] enum.
//!
//! Propagators are stateless, deterministic operators. Each instance is
//! bound to one direction; hosts register an "along" and an "opposite"
//! instance under separate labels and the extrapolation engine chooses
//! between them.

use std::fmt;

use muex_core::FreeTrajectoryState;
use muex_geometry::Surface;

use crate::tsos::TrajectoryStateOnSurface;

/// Sense of propagation relative to the particle's momentum at the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropagationDirection {
    /// Forward along the momentum (positive path length).
    Along,
    /// Backward against the momentum (negative path length).
    Opposite,
}

impl PropagationDirection {
    /// `+1.0` for [`Along`](Self::Along), `-1.0` for
    /// [`Opposite`](Self::Opposite).
    pub fn sign(self) -> f64 {
        match self {
            Self::Along => 1.0,
            Self::Opposite => -1.0,
        }
    }

    /// The reverse sense.
    pub fn reversed(self) -> Self {
        match self {
            Self::Along => Self::Opposite,
            Self::Opposite => Self::Along,
        }
    }
}

impl fmt::Display for PropagationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Along => write!(f, "alongMomentum"),
            Self::Opposite => write!(f, "oppositeToMomentum"),
        }
    }
}

/// Transports a free trajectory state to a target surface.
///
/// # Contract
///
/// - `propagate()` MUST be deterministic: the same state, field and
///   surface give a bit-identical result.
/// - `&self`: propagators hold configuration only, never per-call state.
/// - A surface that cannot be reached in [`direction()`](Self::direction)
///   within the propagator's limits yields
///   [`TrajectoryStateOnSurface::invalid`], not a panic or an error.
///
/// # Object safety
///
/// This trait is object-safe; hosts register propagators as
/// `Box<dyn Propagator>`.
///
/// # Examples
///
/// A propagator that only ever reaches surfaces its start point already
/// lies on:
///
/// ```
/// use muex_core::FreeTrajectoryState;
/// use muex_geometry::Surface;
/// use muex_propagator::{
///     PropagationDirection, Propagator, SurfaceState, TrajectoryStateOnSurface,
/// };
///
/// struct Stationary;
///
/// impl Propagator for Stationary {
///     fn name(&self) -> &str { "stationary" }
///
///     fn direction(&self) -> PropagationDirection { PropagationDirection::Along }
///
///     fn propagate(
///         &self,
///         start: &FreeTrajectoryState<'_>,
///         surface: &Surface,
///     ) -> TrajectoryStateOnSurface {
///         if surface.contains(&start.position(), 1e-6) {
///             TrajectoryStateOnSurface::valid(
///                 *surface,
///                 SurfaceState::from_free_state(start, 0.0, self.direction()),
///             )
///         } else {
///             TrajectoryStateOnSurface::invalid(*surface)
///         }
///     }
/// }
///
/// assert_eq!(Stationary.name(), "stationary");
/// ```
pub trait Propagator: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// The fixed propagation sense of this instance.
    fn direction(&self) -> PropagationDirection;

    /// Propagate `start` to `surface`.
    fn propagate(
        &self,
        start: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_sign_and_reverse() {
        assert_eq!(PropagationDirection::Along.sign(), 1.0);
        assert_eq!(PropagationDirection::Opposite.sign(), -1.0);
        assert_eq!(
            PropagationDirection::Along.reversed(),
            PropagationDirection::Opposite
        );
        assert_eq!(
            PropagationDirection::Opposite.reversed().reversed(),
            PropagationDirection::Opposite
        );
    }

    #[test]
    fn direction_display() {
        assert_eq!(PropagationDirection::Along.to_string(), "alongMomentum");
        assert_eq!(
            PropagationDirection::Opposite.to_string(),
            "oppositeToMomentum"
        );
    }
}

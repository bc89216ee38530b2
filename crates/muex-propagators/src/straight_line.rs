//! Field-free propagator.
//!
//! Follows the initial momentum direction regardless of the field map.
//! Useful as a baseline and for neutral-like approximations of very
//! stiff tracks.

use muex_core::FreeTrajectoryState;
use muex_geometry::Surface;
use muex_propagator::{
    find_crossing, PathPoint, PropagationDirection, PropagationLimits, Propagator,
    TrajectoryStateOnSurface,
};

use crate::motion::straight_step;

/// A straight-line propagator bound to one direction.
#[derive(Debug)]
pub struct StraightLinePropagator {
    direction: PropagationDirection,
    limits: PropagationLimits,
}

/// Builder for [`StraightLinePropagator`].
///
/// Required: `direction`.
pub struct StraightLinePropagatorBuilder {
    direction: Option<PropagationDirection>,
    limits: PropagationLimits,
}

impl StraightLinePropagator {
    /// Create a new builder for configuring a `StraightLinePropagator`.
    pub fn builder() -> StraightLinePropagatorBuilder {
        StraightLinePropagatorBuilder {
            direction: None,
            limits: PropagationLimits::default(),
        }
    }

    /// The numerical limits in force.
    pub fn limits(&self) -> &PropagationLimits {
        &self.limits
    }
}

impl StraightLinePropagatorBuilder {
    /// Set the propagation direction.
    pub fn direction(mut self, direction: PropagationDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Override the default [`PropagationLimits`].
    pub fn limits(mut self, limits: PropagationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Build the propagator.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `direction` is not set.
    pub fn build(self) -> Result<StraightLinePropagator, String> {
        let direction = self
            .direction
            .ok_or_else(|| "direction is required".to_string())?;
        Ok(StraightLinePropagator {
            direction,
            limits: self.limits,
        })
    }
}

impl Propagator for StraightLinePropagator {
    fn name(&self) -> &str {
        "StraightLinePropagator"
    }

    fn direction(&self) -> PropagationDirection {
        self.direction
    }

    fn propagate(
        &self,
        start: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        let origin = PathPoint {
            position: start.position(),
            momentum: start.momentum(),
        };
        let crossing = find_crossing(
            origin,
            surface,
            self.direction,
            &self.limits,
            |_| f64::INFINITY,
            straight_step,
        );
        TrajectoryStateOnSurface::from_crossing(*surface, crossing, start.charge(), self.direction)
    }
}

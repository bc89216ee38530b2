//! Closed-form helix propagator.
//!
//! Samples the field once, at the start point, and follows the exact
//! helix of that uniform field to the target surface. Exact in a uniform
//! field and fast; in a non-uniform map the result degrades with the
//! distance over which the field changes.
//!
//! Constructed via the builder pattern: [`AnalyticalPropagator::builder`].

use muex_core::FreeTrajectoryState;
use muex_geometry::Surface;
use muex_propagator::{
    find_crossing, PathPoint, PropagationDirection, PropagationLimits, Propagator,
    TrajectoryStateOnSurface,
};

use crate::motion::{helix_step, phase_limited_step};

/// A helix propagator in the start-point field.
///
/// # Construction
///
/// ```
/// use muex_propagator::{PropagationDirection, Propagator};
/// use muex_propagators::AnalyticalPropagator;
///
/// let prop = AnalyticalPropagator::builder()
///     .direction(PropagationDirection::Opposite)
///     .build()
///     .unwrap();
/// assert_eq!(prop.direction(), PropagationDirection::Opposite);
/// ```
#[derive(Debug)]
pub struct AnalyticalPropagator {
    direction: PropagationDirection,
    limits: PropagationLimits,
}

/// Builder for [`AnalyticalPropagator`].
///
/// Required: `direction`.
pub struct AnalyticalPropagatorBuilder {
    direction: Option<PropagationDirection>,
    limits: PropagationLimits,
}

impl AnalyticalPropagator {
    /// Create a new builder for configuring an `AnalyticalPropagator`.
    pub fn builder() -> AnalyticalPropagatorBuilder {
        AnalyticalPropagatorBuilder {
            direction: None,
            limits: PropagationLimits::default(),
        }
    }

    /// The numerical limits in force.
    pub fn limits(&self) -> &PropagationLimits {
        &self.limits
    }
}

impl AnalyticalPropagatorBuilder {
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
    pub fn build(self) -> Result<AnalyticalPropagator, String> {
        let direction = self
            .direction
            .ok_or_else(|| "direction is required".to_string())?;
        Ok(AnalyticalPropagator {
            direction,
            limits: self.limits,
        })
    }
}

impl Propagator for AnalyticalPropagator {
    fn name(&self) -> &str {
        "AnalyticalPropagator"
    }

    fn direction(&self) -> PropagationDirection {
        self.direction
    }

    fn propagate(
        &self,
        start: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        let field = start.local_field();
        let charge = start.charge();
        let origin = PathPoint {
            position: start.position(),
            momentum: start.momentum(),
        };
        let crossing = find_crossing(
            origin,
            surface,
            self.direction,
            &self.limits,
            |p| phase_limited_step(&p.momentum, &field, charge),
            |p, ds| helix_step(p, ds, &field, charge),
        );
        TrajectoryStateOnSurface::from_crossing(*surface, crossing, charge, self.direction)
    }
}

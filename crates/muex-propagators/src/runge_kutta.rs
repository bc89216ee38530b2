//! Fourth-order Runge–Kutta propagator for non-uniform field maps.
//!
//! Unlike [`AnalyticalPropagator`](crate::AnalyticalPropagator), the field
//! is re-sampled at every stage of every step, so the trajectory follows
//! the map as it changes: curved inside a solenoid, straight outside it.
//!
//! Step length is limited by the helix phase in the field at the current
//! point; where the field vanishes the scan falls back to
//! [`PropagationLimits::max_step`].

use muex_core::{FreeTrajectoryState, GlobalPoint};
use muex_geometry::Surface;
use muex_propagator::{
    find_crossing, PathPoint, PropagationDirection, PropagationLimits, Propagator,
    TrajectoryStateOnSurface,
};

use crate::motion::{phase_limited_step, rk4_step};

/// A Runge–Kutta propagator bound to one direction.
///
/// # Construction
///
/// ```
/// use muex_propagator::{PropagationDirection, Propagator};
/// use muex_propagators::RungeKuttaPropagator;
///
/// let prop = RungeKuttaPropagator::builder()
///     .direction(PropagationDirection::Along)
///     .confine_to_field_volume(false)
///     .build()
///     .unwrap();
/// assert_eq!(prop.name(), "RungeKuttaPropagator");
/// ```
#[derive(Debug)]
pub struct RungeKuttaPropagator {
    direction: PropagationDirection,
    limits: PropagationLimits,
    confine_to_field_volume: bool,
}

/// Builder for [`RungeKuttaPropagator`].
///
/// Required: `direction`.
pub struct RungeKuttaPropagatorBuilder {
    direction: Option<PropagationDirection>,
    limits: PropagationLimits,
    confine_to_field_volume: bool,
}

impl RungeKuttaPropagator {
    /// Create a new builder for configuring a `RungeKuttaPropagator`.
    pub fn builder() -> RungeKuttaPropagatorBuilder {
        RungeKuttaPropagatorBuilder {
            direction: None,
            limits: PropagationLimits::default(),
            confine_to_field_volume: true,
        }
    }

    /// The numerical limits in force.
    pub fn limits(&self) -> &PropagationLimits {
        &self.limits
    }

    /// Whether leaving the field map's volume invalidates the result.
    pub fn confine_to_field_volume(&self) -> bool {
        self.confine_to_field_volume
    }
}

impl RungeKuttaPropagatorBuilder {
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

    /// Stop with an invalid result when the trajectory leaves the volume
    /// the field map is defined on. Default: `true`.
    pub fn confine_to_field_volume(mut self, confine: bool) -> Self {
        self.confine_to_field_volume = confine;
        self
    }

    /// Build the propagator.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `direction` is not set.
    pub fn build(self) -> Result<RungeKuttaPropagator, String> {
        let direction = self
            .direction
            .ok_or_else(|| "direction is required".to_string())?;
        Ok(RungeKuttaPropagator {
            direction,
            limits: self.limits,
            confine_to_field_volume: self.confine_to_field_volume,
        })
    }
}

impl Propagator for RungeKuttaPropagator {
    fn name(&self) -> &str {
        "RungeKuttaPropagator"
    }

    fn direction(&self) -> PropagationDirection {
        self.direction
    }

    fn propagate(
        &self,
        start: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        let field = start.field();
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
            |p| phase_limited_step(&p.momentum, &field.field_at(&p.position), charge),
            |p, ds| {
                let next = rk4_step(p, ds, field, charge);
                if self.confine_to_field_volume && !field.in_volume(&next.position) {
                    // A non-finite point ends the search as a miss.
                    PathPoint {
                        position: GlobalPoint::new(f64::NAN, f64::NAN, f64::NAN),
                        momentum: next.momentum,
                    }
                } else {
                    next
                }
            },
        );
        TrajectoryStateOnSurface::from_crossing(*surface, crossing, charge, self.direction)
    }
}

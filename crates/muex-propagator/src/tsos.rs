//! Trajectory states bound to a surface.

use muex_core::{Charge, FreeTrajectoryState, GlobalPoint, GlobalVector};
use muex_geometry::Surface;

use crate::crossing::PathPoint;
use crate::propagator::PropagationDirection;

/// Kinematics of a successful propagation, evaluated on the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    /// Global position on the surface (cm).
    pub position: GlobalPoint,
    /// Global momentum at that position (GeV/c). Always points in the
    /// particle's physical direction of motion, whichever sense was used
    /// to reach the surface.
    pub momentum: GlobalVector,
    /// Particle charge.
    pub charge: Charge,
    /// Signed path length from the start point (cm): positive along the
    /// momentum, negative against it.
    pub path_length: f64,
    /// The sense that reached the surface.
    pub direction: PropagationDirection,
}

impl SurfaceState {
    /// Surface kinematics taken directly from a free state.
    pub fn from_free_state(
        fts: &FreeTrajectoryState<'_>,
        path_length: f64,
        direction: PropagationDirection,
    ) -> Self {
        Self {
            position: fts.position(),
            momentum: fts.momentum(),
            charge: fts.charge(),
            path_length,
            direction,
        }
    }
}

/// The result of propagating a free state to a surface.
///
/// Either valid, carrying a [`SurfaceState`], or invalid. Invalid states
/// have no position or momentum at all: every accessor returns
/// `Option`, so an invalid result cannot be mistaken for a zero vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryStateOnSurface {
    surface: Surface,
    state: Option<SurfaceState>,
}

impl TrajectoryStateOnSurface {
    /// A valid state on `surface`.
    pub fn valid(surface: Surface, state: SurfaceState) -> Self {
        Self {
            surface,
            state: Some(state),
        }
    }

    /// An invalid state: `surface` was not reached.
    pub fn invalid(surface: Surface) -> Self {
        Self {
            surface,
            state: None,
        }
    }

    /// Wrap the outcome of [`find_crossing`](crate::crossing::find_crossing).
    pub fn from_crossing(
        surface: Surface,
        crossing: Option<(PathPoint, f64)>,
        charge: Charge,
        direction: PropagationDirection,
    ) -> Self {
        match crossing {
            Some((point, path_length)) => Self::valid(
                surface,
                SurfaceState {
                    position: point.position,
                    momentum: point.momentum,
                    charge,
                    path_length,
                    direction,
                },
            ),
            None => Self::invalid(surface),
        }
    }

    /// Whether the propagation reached the surface.
    pub fn is_valid(&self) -> bool {
        self.state.is_some()
    }

    /// The target surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Surface kinematics, if valid.
    pub fn state(&self) -> Option<&SurfaceState> {
        self.state.as_ref()
    }

    /// Global position on the surface, if valid.
    pub fn global_position(&self) -> Option<GlobalPoint> {
        self.state.map(|s| s.position)
    }

    /// Global momentum on the surface, if valid.
    pub fn global_momentum(&self) -> Option<GlobalVector> {
        self.state.map(|s| s.momentum)
    }

    /// Signed path length to the surface, if valid.
    pub fn path_length(&self) -> Option<f64> {
        self.state.map(|s| s.path_length)
    }

    /// The sense that reached the surface, if valid.
    pub fn direction(&self) -> Option<PropagationDirection> {
        self.state.map(|s| s.direction)
    }
}

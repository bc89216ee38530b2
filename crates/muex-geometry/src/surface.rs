//! The [`Surface`] sum type consumed by propagators.

use std::fmt;

use muex_core::GlobalPoint;

use crate::cylinder::Cylinder;
use crate::plane::Plane;

/// Discriminant of a [`Surface`], for logging and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// An infinite plane.
    Plane,
    /// An infinite cylinder.
    Cylinder,
}

/// A propagation target.
///
/// Surfaces are cheap value objects built on demand per target; there is
/// nothing to cache.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Surface {
    /// See [`Plane`].
    Plane(Plane),
    /// See [`Cylinder`].
    Cylinder(Cylinder),
}

impl Surface {
    /// Beam-perpendicular plane at `z`. Shorthand for
    /// `Surface::Plane(Plane::at_z(z))`.
    pub fn plane_at_z(z: f64) -> Self {
        Self::Plane(Plane::at_z(z))
    }

    /// Beam-coaxial cylinder of radius `rho`. Shorthand for
    /// `Surface::Cylinder(Cylinder::coaxial(rho))`.
    pub fn coaxial_cylinder(rho: f64) -> Self {
        Self::Cylinder(Cylinder::coaxial(rho))
    }

    /// Which kind of surface this is.
    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::Plane(_) => SurfaceKind::Plane,
            Self::Cylinder(_) => SurfaceKind::Cylinder,
        }
    }

    /// Signed distance of `point` from the surface.
    ///
    /// The sign convention is per surface type (in front of a plane,
    /// outside a cylinder is positive); propagators only rely on the sign
    /// flipping when a trajectory crosses the surface.
    pub fn signed_distance(&self, point: &GlobalPoint) -> f64 {
        match self {
            Self::Plane(p) => p.signed_distance(point),
            Self::Cylinder(c) => c.signed_distance(point),
        }
    }

    /// Whether `point` lies on the surface within `tolerance` (cm).
    pub fn contains(&self, point: &GlobalPoint, tolerance: f64) -> bool {
        self.signed_distance(point).abs() <= tolerance
    }
}

impl From<Plane> for Surface {
    fn from(p: Plane) -> Self {
        Self::Plane(p)
    }
}

impl From<Cylinder> for Surface {
    fn from(c: Cylinder) -> Self {
        Self::Cylinder(c)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plane(p) => write!(f, "plane(z={})", p.position().z),
            Self::Cylinder(c) => write!(f, "cylinder(r={})", c.radius()),
        }
    }
}

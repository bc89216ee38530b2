//! Infinite planes.

use muex_core::{GlobalPoint, GlobalVector};

use crate::rotation::Rotation;

/// An infinite plane through `position` with normal along the local z
/// axis of `rotation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    position: GlobalPoint,
    rotation: Rotation,
}

impl Plane {
    /// Build a plane from a reference point and an orientation.
    pub fn new(position: GlobalPoint, rotation: Rotation) -> Self {
        Self { position, rotation }
    }

    /// The plane perpendicular to the beam axis at longitudinal offset
    /// `z`, centred on the beam line, with identity rotation.
    pub fn at_z(z: f64) -> Self {
        Self::new(GlobalPoint::new(0.0, 0.0, z), Rotation::identity())
    }

    /// Reference point.
    pub fn position(&self) -> GlobalPoint {
        self.position
    }

    /// Orientation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Unit normal in global coordinates.
    pub fn normal(&self) -> GlobalVector {
        self.rotation.z_axis()
    }

    /// Signed distance of `point` from the plane, positive on the side
    /// the normal points to.
    pub fn signed_distance(&self, point: &GlobalPoint) -> f64 {
        self.normal().dot(&(*point - self.position))
    }

    /// Position of `point` in the plane's local frame.
    pub fn to_local(&self, point: &GlobalPoint) -> GlobalVector {
        self.rotation.to_local(&(*point - self.position))
    }
}

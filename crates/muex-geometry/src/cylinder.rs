//! Infinitely long cylinders.

use muex_core::{GlobalPoint, GlobalVector};

use crate::rotation::Rotation;

/// An infinitely long cylinder of radius `radius` whose axis passes
/// through `position` along the local z axis of `rotation`.
///
/// A non-positive or non-finite radius describes an empty surface:
/// [`signed_distance`](Cylinder::signed_distance) never changes sign, so
/// no trajectory can cross it. Construction itself never fails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    position: GlobalPoint,
    rotation: Rotation,
    radius: f64,
}

impl Cylinder {
    /// Build a cylinder from an axis point, orientation and radius (cm).
    pub fn new(position: GlobalPoint, rotation: Rotation, radius: f64) -> Self {
        Self {
            position,
            rotation,
            radius,
        }
    }

    /// A cylinder of radius `rho` coaxial with the beam line, centred on
    /// the origin.
    pub fn coaxial(rho: f64) -> Self {
        Self::new(GlobalPoint::ORIGIN, Rotation::identity(), rho)
    }

    /// Axis reference point.
    pub fn position(&self) -> GlobalPoint {
        self.position
    }

    /// Orientation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Radius (cm).
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit vector along the cylinder axis.
    pub fn axis(&self) -> GlobalVector {
        self.rotation.z_axis()
    }

    /// Distance of `point` from the axis minus the radius: negative
    /// inside, positive outside.
    ///
    /// For an empty cylinder (radius not strictly positive and finite)
    /// this is `+∞` everywhere.
    pub fn signed_distance(&self, point: &GlobalPoint) -> f64 {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return f64::INFINITY;
        }
        self.to_local(point).perp() - self.radius
    }

    /// Position of `point` in the cylinder's local frame.
    pub fn to_local(&self, point: &GlobalPoint) -> GlobalVector {
        self.rotation.to_local(&(*point - self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coaxial_geometry() {
        let c = Cylinder::coaxial(500.0);
        assert_eq!(c.radius(), 500.0);
        assert_eq!(c.axis(), GlobalVector::UNIT_Z);
        assert_eq!(c.position(), GlobalPoint::ORIGIN);
    }

    #[test]
    fn signed_distance_inside_and_outside() {
        let c = Cylinder::coaxial(500.0);
        assert_eq!(c.signed_distance(&GlobalPoint::ORIGIN), -500.0);
        assert_eq!(c.signed_distance(&GlobalPoint::new(300.0, 400.0, 1e4)), 0.0);
        assert_eq!(c.signed_distance(&GlobalPoint::new(0.0, -600.0, -5.0)), 100.0);
    }

    #[test]
    fn empty_cylinder_is_never_crossed() {
        for rho in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let c = Cylinder::coaxial(rho);
            assert_eq!(c.signed_distance(&GlobalPoint::ORIGIN), f64::INFINITY);
            assert_eq!(
                c.signed_distance(&GlobalPoint::new(1e3, 0.0, 0.0)),
                f64::INFINITY
            );
        }
    }

    #[test]
    fn displaced_axis() {
        let c = Cylinder::new(GlobalPoint::new(10.0, 0.0, 0.0), Rotation::identity(), 5.0);
        assert_eq!(c.signed_distance(&GlobalPoint::new(10.0, 0.0, 0.0)), -5.0);
        assert_eq!(c.signed_distance(&GlobalPoint::new(15.0, 0.0, 3.0)), 0.0);
    }
}

//! Global-frame point and vector value types.
//!
//! [`GlobalPoint`] is a position in the detector frame (cm) and
//! [`GlobalVector`] a direction-carrying quantity (momentum in GeV/c,
//! field in tesla). The z axis is the beam axis.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A position in the global detector frame, in centimetres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlobalPoint {
    /// x coordinate.
    pub x: f64,
    /// y coordinate.
    pub y: f64,
    /// z coordinate (beam axis).
    pub z: f64,
}

/// A vector in the global detector frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlobalVector {
    /// x component.
    pub x: f64,
    /// y component.
    pub y: f64,
    /// z component (beam axis).
    pub z: f64,
}

/// Azimuth in `[0, 2π)` of a transverse `(x, y)` pair.
///
/// Returns 0 at the origin, where the azimuth is undefined.
fn azimuth(x: f64, y: f64) -> f64 {
    let phi = y.atan2(x);
    if phi < 0.0 {
        phi + TAU
    } else {
        phi
    }
}

impl GlobalPoint {
    /// The origin of the detector frame.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a point from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared transverse distance from the beam axis.
    pub fn perp2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Transverse distance from the beam axis.
    pub fn perp(&self) -> f64 {
        self.perp2().sqrt()
    }

    /// Azimuthal angle in `[0, 2π)`.
    pub fn phi(&self) -> f64 {
        azimuth(self.x, self.y)
    }

    /// Displacement of this point from the origin.
    pub fn to_vector(self) -> GlobalVector {
        GlobalVector::new(self.x, self.y, self.z)
    }

    /// Returns `true` if all components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl GlobalVector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along the beam axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Scalar product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Vector product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared magnitude.
    pub fn mag2(&self) -> f64 {
        self.dot(self)
    }

    /// Magnitude.
    pub fn mag(&self) -> f64 {
        self.mag2().sqrt()
    }

    /// Squared transverse component.
    pub fn perp2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Transverse component (pT for a momentum).
    pub fn perp(&self) -> f64 {
        self.perp2().sqrt()
    }

    /// Azimuthal angle in `[0, 2π)`.
    pub fn phi(&self) -> f64 {
        azimuth(self.x, self.y)
    }

    /// Pseudorapidity `-ln tan(θ/2)`.
    ///
    /// Infinite for vectors along the beam axis.
    pub fn eta(&self) -> f64 {
        let pt = self.perp();
        if pt == 0.0 {
            return if self.z >= 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }
        (self.z / pt).asinh()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn unit(&self) -> Option<Self> {
        let m = self.mag();
        if m > 0.0 && m.is_finite() {
            Some(*self * (1.0 / m))
        } else {
            None
        }
    }

    /// Returns `true` if all components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add<GlobalVector> for GlobalPoint {
    type Output = GlobalPoint;
    fn add(self, rhs: GlobalVector) -> GlobalPoint {
        GlobalPoint::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<GlobalVector> for GlobalPoint {
    type Output = GlobalPoint;
    fn sub(self, rhs: GlobalVector) -> GlobalPoint {
        GlobalPoint::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub for GlobalPoint {
    type Output = GlobalVector;
    fn sub(self, rhs: GlobalPoint) -> GlobalVector {
        GlobalVector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add for GlobalVector {
    type Output = GlobalVector;
    fn add(self, rhs: GlobalVector) -> GlobalVector {
        GlobalVector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for GlobalVector {
    fn add_assign(&mut self, rhs: GlobalVector) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for GlobalVector {
    type Output = GlobalVector;
    fn sub(self, rhs: GlobalVector) -> GlobalVector {
        GlobalVector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for GlobalVector {
    type Output = GlobalVector;
    fn mul(self, rhs: f64) -> GlobalVector {
        GlobalVector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for GlobalVector {
    type Output = GlobalVector;
    fn neg(self) -> GlobalVector {
        GlobalVector::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for GlobalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl fmt::Display for GlobalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

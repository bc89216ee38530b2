//! Orthonormal frame orientation for surfaces.

use muex_core::GlobalVector;

/// Orientation of a surface's local frame in the global frame.
///
/// Stored as the three local axes expressed in global coordinates. The
/// local z axis is the plane normal or the cylinder axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    x: GlobalVector,
    y: GlobalVector,
    z: GlobalVector,
}

impl Rotation {
    /// The identity rotation: local axes coincide with global axes.
    pub const fn identity() -> Self {
        Self {
            x: GlobalVector::new(1.0, 0.0, 0.0),
            y: GlobalVector::new(0.0, 1.0, 0.0),
            z: GlobalVector::new(0.0, 0.0, 1.0),
        }
    }

    /// Rotation by `angle` radians about the global z axis.
    pub fn about_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            x: GlobalVector::new(c, s, 0.0),
            y: GlobalVector::new(-s, c, 0.0),
            z: GlobalVector::UNIT_Z,
        }
    }

    /// Build a frame from a local x axis and a local z axis.
    ///
    /// Both axes are normalised and `x` is re-orthogonalised against `z`.
    /// Returns `None` if either axis is zero or they are parallel.
    pub fn from_axes(x: GlobalVector, z: GlobalVector) -> Option<Self> {
        let z = z.unit()?;
        let x = (x - z * x.dot(&z)).unit()?;
        let y = z.cross(&x);
        Some(Self { x, y, z })
    }

    /// Local x axis in global coordinates.
    pub fn x_axis(&self) -> GlobalVector {
        self.x
    }

    /// Local y axis in global coordinates.
    pub fn y_axis(&self) -> GlobalVector {
        self.y
    }

    /// Local z axis in global coordinates.
    pub fn z_axis(&self) -> GlobalVector {
        self.z
    }

    /// Express a global vector in the local frame.
    pub fn to_local(&self, v: &GlobalVector) -> GlobalVector {
        GlobalVector::new(self.x.dot(v), self.y.dot(v), self.z.dot(v))
    }

    /// Express a local vector in the global frame.
    pub fn to_global(&self, v: &GlobalVector) -> GlobalVector {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

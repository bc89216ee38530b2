//! The magnetic field collaborator.

use crate::vector::{GlobalPoint, GlobalVector};

/// Speed of light in the units used for curvature: GeV/c per (T·cm).
///
/// A particle of unit charge and momentum `p` (GeV/c) in a field `B`
/// (tesla) has a radius of curvature `p⊥ / (C_LIGHT_GEV_PER_T_CM · B)`
/// centimetres.
pub const C_LIGHT_GEV_PER_T_CM: f64 = 0.299_792_458e-2;

/// A read-only map from global position to magnetic field.
///
/// Obtained from the host's conditions service once per event and shared
/// by every extrapolation in that event. Implementations must be pure:
/// the same point always yields the same field.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores field maps as
/// `Box<dyn MagneticField>` and hands out `&dyn MagneticField`.
///
/// # Examples
///
/// ```
/// use muex_core::{GlobalPoint, GlobalVector, MagneticField};
///
/// struct Axial(f64);
///
/// impl MagneticField for Axial {
///     fn field_at(&self, _point: &GlobalPoint) -> GlobalVector {
///         GlobalVector::new(0.0, 0.0, self.0)
///     }
/// }
///
/// let b = Axial(3.8);
/// assert_eq!(b.field_at(&GlobalPoint::ORIGIN).z, 3.8);
/// assert!(b.in_volume(&GlobalPoint::ORIGIN));
/// ```
pub trait MagneticField: Send + Sync {
    /// Field vector in tesla at `point`.
    fn field_at(&self, point: &GlobalPoint) -> GlobalVector;

    /// Whether `point` lies inside the region where the map is defined.
    ///
    /// Default: everywhere.
    fn in_volume(&self, _point: &GlobalPoint) -> bool {
        true
    }

    /// Human-readable name for logging.
    fn name(&self) -> &str {
        "MagneticField"
    }
}

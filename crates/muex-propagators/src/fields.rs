//! Reference magnetic field maps.

use muex_core::{GlobalPoint, GlobalVector, MagneticField};

/// The same field vector everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformField {
    field: GlobalVector,
}

impl UniformField {
    /// A uniform field of arbitrary direction (tesla).
    pub fn new(field: GlobalVector) -> Self {
        Self { field }
    }

    /// A uniform field of `bz` tesla along the beam axis.
    pub fn axial(bz: f64) -> Self {
        Self::new(GlobalVector::new(0.0, 0.0, bz))
    }
}

impl MagneticField for UniformField {
    fn field_at(&self, _point: &GlobalPoint) -> GlobalVector {
        self.field
    }

    fn name(&self) -> &str {
        "UniformField"
    }
}

/// An ideal finite solenoid: a uniform axial field inside a cylinder of
/// radius `radius` and half-length `half_length`, no field outside.
///
/// Crude compared with a measured map (no fringe field, no return flux in
/// the yoke) but enough to separate curved tracker-region motion from
/// straight flight through the outer detector.
///
/// Constructed via the builder pattern: [`SolenoidField::builder`].
///
/// ```
/// use muex_core::{GlobalPoint, MagneticField};
/// use muex_propagators::SolenoidField;
///
/// let field = SolenoidField::builder()
///     .field_strength(3.8)
///     .build()
///     .unwrap();
/// assert_eq!(field.field_at(&GlobalPoint::ORIGIN).z, 3.8);
/// assert_eq!(field.field_at(&GlobalPoint::new(400.0, 0.0, 0.0)).z, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolenoidField {
    field_strength: f64,
    radius: f64,
    half_length: f64,
}

/// Builder for [`SolenoidField`].
///
/// Required: `field_strength`.
pub struct SolenoidFieldBuilder {
    field_strength: Option<f64>,
    radius: f64,
    half_length: f64,
}

impl SolenoidField {
    /// Create a new builder. Defaults: radius 295 cm, half-length 650 cm.
    pub fn builder() -> SolenoidFieldBuilder {
        SolenoidFieldBuilder {
            field_strength: None,
            radius: 295.0,
            half_length: 650.0,
        }
    }

    /// Central field (tesla, signed along +z).
    pub fn field_strength(&self) -> f64 {
        self.field_strength
    }

    /// Coil radius (cm).
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Coil half-length (cm).
    pub fn half_length(&self) -> f64 {
        self.half_length
    }

    fn inside(&self, point: &GlobalPoint) -> bool {
        point.perp2() < self.radius * self.radius && point.z.abs() < self.half_length
    }
}

impl SolenoidFieldBuilder {
    /// Set the central field in tesla.
    pub fn field_strength(mut self, tesla: f64) -> Self {
        self.field_strength = Some(tesla);
        self
    }

    /// Set the coil radius in cm. Default: 295.
    pub fn radius(mut self, cm: f64) -> Self {
        self.radius = cm;
        self
    }

    /// Set the coil half-length in cm. Default: 650.
    pub fn half_length(mut self, cm: f64) -> Self {
        self.half_length = cm;
        self
    }

    /// Build the field map, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `field_strength` is not set or not finite
    /// - `radius` or `half_length` is not finite and strictly positive
    pub fn build(self) -> Result<SolenoidField, String> {
        let field_strength = self
            .field_strength
            .ok_or_else(|| "field_strength is required".to_string())?;
        if !field_strength.is_finite() {
            return Err(format!(
                "field_strength must be finite, got {field_strength}"
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(format!("radius must be finite and > 0, got {}", self.radius));
        }
        if !self.half_length.is_finite() || self.half_length <= 0.0 {
            return Err(format!(
                "half_length must be finite and > 0, got {}",
                self.half_length
            ));
        }
        Ok(SolenoidField {
            field_strength,
            radius: self.radius,
            half_length: self.half_length,
        })
    }
}

impl MagneticField for SolenoidField {
    fn field_at(&self, point: &GlobalPoint) -> GlobalVector {
        if self.inside(point) {
            GlobalVector::new(0.0, 0.0, self.field_strength)
        } else {
            GlobalVector::ZERO
        }
    }

    fn name(&self) -> &str {
        "SolenoidField"
    }
}

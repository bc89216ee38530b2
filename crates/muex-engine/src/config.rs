//! Driver configuration, extrapolation targets, and validation errors.
//!
//! [`DriverConfig`] names the collaborators an event is processed with
//! (track collection, field map, the two propagators) and the surfaces
//! every track is projected onto. [`validate()`](DriverConfig::validate)
//! checks it once, before the first event.

use std::error::Error;
use std::fmt;

use muex_geometry::Surface;

// ── ExtrapolationTarget ────────────────────────────────────────────

/// A fixed surface every track is extrapolated to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExtrapolationTarget {
    /// Beam-perpendicular plane at `z` (cm).
    PlaneZ {
        /// Longitudinal position (cm).
        z: f64,
    },
    /// Beam-coaxial cylinder of radius `radius` (cm).
    Cylinder {
        /// Transverse radius (cm).
        radius: f64,
    },
}

impl ExtrapolationTarget {
    /// Forward endcap plane, z = +790 cm.
    pub const PLUS_ENDCAP: Self = Self::PlaneZ { z: 790.0 };
    /// Backward endcap plane, z = −790 cm.
    pub const MINUS_ENDCAP: Self = Self::PlaneZ { z: -790.0 };
    /// Barrel cylinder, r = 500 cm.
    pub const BARREL: Self = Self::Cylinder { radius: 500.0 };

    /// The three standard stations, in processing order.
    pub const STANDARD: [Self; 3] = [Self::PLUS_ENDCAP, Self::MINUS_ENDCAP, Self::BARREL];

    /// Build the target surface.
    pub fn surface(&self) -> Surface {
        match *self {
            Self::PlaneZ { z } => Surface::plane_at_z(z),
            Self::Cylinder { radius } => Surface::coaxial_cylinder(radius),
        }
    }

    /// Returns `true` for plane targets.
    pub fn is_plane(&self) -> bool {
        matches!(self, Self::PlaneZ { .. })
    }
}

impl fmt::Display for ExtrapolationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaneZ { z } => write!(f, "plane(z={z})"),
            Self::Cylinder { radius } => write!(f, "cylinder(r={radius})"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DriverConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// No extrapolation targets configured.
    NoTargets,
    /// A target parameter is NaN or infinite.
    NonFiniteTarget {
        /// Index of the offending target.
        index: usize,
    },
    /// A cylinder target has a radius that is zero or negative.
    NonPositiveRadius {
        /// Index of the offending target.
        index: usize,
        /// The configured radius.
        radius: f64,
    },
    /// The sentinel is not finite, or not negative and so could be
    /// mistaken for a valid radius.
    InvalidSentinel {
        /// The configured sentinel.
        value: f64,
    },
    /// A propagator label is empty.
    EmptyPropagatorLabel,
    /// Both propagator labels name the same component.
    DuplicatePropagatorLabel {
        /// The shared label.
        label: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargets => write!(f, "no extrapolation targets configured"),
            Self::NonFiniteTarget { index } => {
                write!(f, "target {index} has a non-finite parameter")
            }
            Self::NonPositiveRadius { index, radius } => {
                write!(f, "target {index}: cylinder radius must be > 0, got {radius}")
            }
            Self::InvalidSentinel { value } => {
                write!(f, "sentinel must be finite and negative, got {value}")
            }
            Self::EmptyPropagatorLabel => write!(f, "propagator labels must not be empty"),
            Self::DuplicatePropagatorLabel { label } => {
                write!(f, "along and opposite propagators share the label {label:?}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── DriverConfig ───────────────────────────────────────────────────

/// Complete configuration of the per-event driver.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    /// Label of the input muon collection. Default: `"slimmedMuons"`.
    pub track_label: String,
    /// Label of the field map in the event setup. Default: `""`, the
    /// ideal field.
    pub field_label: String,
    /// Label of the along-momentum propagator.
    /// Default: `"SmartPropagatorAny"`.
    pub along_label: String,
    /// Label of the opposite-to-momentum propagator.
    /// Default: `"SmartPropagatorAnyOpposite"`.
    pub opposite_label: String,
    /// Surfaces every track is projected onto, in output order.
    /// Default: [`ExtrapolationTarget::STANDARD`].
    pub targets: Vec<ExtrapolationTarget>,
    /// Value reported for unavailable projections. Default: −999999.
    pub sentinel: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            track_label: "slimmedMuons".to_string(),
            field_label: String::new(),
            along_label: "SmartPropagatorAny".to_string(),
            opposite_label: "SmartPropagatorAnyOpposite".to_string(),
            targets: ExtrapolationTarget::STANDARD.to_vec(),
            sentinel: -999_999.0,
        }
    }
}

impl DriverConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least one target, each finite; cylinders non-empty.
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        for (index, target) in self.targets.iter().enumerate() {
            match *target {
                ExtrapolationTarget::PlaneZ { z } if !z.is_finite() => {
                    return Err(ConfigError::NonFiniteTarget { index });
                }
                ExtrapolationTarget::Cylinder { radius } if !radius.is_finite() => {
                    return Err(ConfigError::NonFiniteTarget { index });
                }
                ExtrapolationTarget::Cylinder { radius } if radius <= 0.0 => {
                    return Err(ConfigError::NonPositiveRadius { index, radius });
                }
                _ => {}
            }
        }
        // 2. Sentinel can never collide with r >= 0.
        if !self.sentinel.is_finite() || self.sentinel >= 0.0 {
            return Err(ConfigError::InvalidSentinel {
                value: self.sentinel,
            });
        }
        // 3. Two distinct, named propagators.
        if self.along_label.is_empty() || self.opposite_label.is_empty() {
            return Err(ConfigError::EmptyPropagatorLabel);
        }
        if self.along_label == self.opposite_label {
            return Err(ConfigError::DuplicatePropagatorLabel {
                label: self.along_label.clone(),
            });
        }
        Ok(())
    }
}

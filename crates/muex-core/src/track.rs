//! Reconstructed tracks as delivered by the host event source.

use std::fmt;

use crate::error::TrackError;
use crate::vector::{GlobalPoint, GlobalVector};

/// Electric charge of a track in units of the elementary charge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Charge {
    /// −1 (μ⁻).
    Negative,
    /// +1 (μ⁺).
    Positive,
}

impl Charge {
    /// The charge as a signed integer.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::Positive => 1,
        }
    }

    /// The charge as a floating-point sign.
    pub fn signum(self) -> f64 {
        f64::from(self.as_i32())
    }

    /// The opposite charge.
    pub fn flipped(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}

impl TryFrom<i32> for Charge {
    type Error = TrackError;

    fn try_from(charge: i32) -> Result<Self, Self::Error> {
        match charge {
            -1 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            _ => Err(TrackError::InvalidCharge { charge }),
        }
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "-1"),
            Self::Positive => write!(f, "+1"),
        }
    }
}

/// Inner-track kinematics of a reconstructed muon candidate.
///
/// Read-only once constructed. The inner position is the innermost
/// measured point of the tracker track and the inner momentum its
/// momentum at that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    inner_position: GlobalPoint,
    inner_momentum: GlobalVector,
    charge: Charge,
}

impl Track {
    /// Build a track from raw reconstruction output.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError`] if a component is non-finite, the momentum
    /// is zero, or `charge` is not ±1.
    pub fn new(
        inner_position: GlobalPoint,
        inner_momentum: GlobalVector,
        charge: i32,
    ) -> Result<Self, TrackError> {
        if !inner_position.is_finite() {
            return Err(TrackError::NonFinite {
                quantity: "position",
            });
        }
        if !inner_momentum.is_finite() {
            return Err(TrackError::NonFinite {
                quantity: "momentum",
            });
        }
        if inner_momentum.mag2() == 0.0 {
            return Err(TrackError::ZeroMomentum);
        }
        let charge = Charge::try_from(charge)?;
        Ok(Self {
            inner_position,
            inner_momentum,
            charge,
        })
    }

    /// Innermost measured position (cm).
    pub fn inner_position(&self) -> GlobalPoint {
        self.inner_position
    }

    /// Momentum at the innermost measured position (GeV/c).
    pub fn inner_momentum(&self) -> GlobalVector {
        self.inner_momentum
    }

    /// Track charge.
    pub fn charge(&self) -> Charge {
        self.charge
    }

    /// Transverse momentum at the inner position.
    pub fn pt(&self) -> f64 {
        self.inner_momentum.perp()
    }

    /// Pseudorapidity of the inner momentum.
    pub fn eta(&self) -> f64 {
        self.inner_momentum.eta()
    }

    /// Azimuth of the inner momentum in `[0, 2π)`.
    pub fn phi(&self) -> f64 {
        self.inner_momentum.phi()
    }
}

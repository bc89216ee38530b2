//! The free trajectory state: kinematics not bound to any surface.

use std::fmt;

use crate::field::{MagneticField, C_LIGHT_GEV_PER_T_CM};
use crate::track::{Charge, Track};
use crate::vector::{GlobalPoint, GlobalVector};

/// Immutable snapshot of a particle's free-flight state.
///
/// Holds the global position, global momentum and charge together with a
/// borrowed reference to the field map the state lives in. The field is
/// consulted by reference and never copied, so a state cannot outlive
/// the per-event field handle it was built from.
#[derive(Clone, Copy)]
pub struct FreeTrajectoryState<'a> {
    position: GlobalPoint,
    momentum: GlobalVector,
    charge: Charge,
    field: &'a dyn MagneticField,
}

impl<'a> FreeTrajectoryState<'a> {
    /// Create a state from explicit kinematics.
    pub fn new(
        position: GlobalPoint,
        momentum: GlobalVector,
        charge: Charge,
        field: &'a dyn MagneticField,
    ) -> Self {
        Self {
            position,
            momentum,
            charge,
            field,
        }
    }

    /// Build the state at a track's innermost measurement.
    ///
    /// Pure value transformation; [`Track`] has already validated that
    /// the kinematics are finite and the charge is ±1.
    pub fn from_track(track: &Track, field: &'a dyn MagneticField) -> Self {
        Self::new(
            track.inner_position(),
            track.inner_momentum(),
            track.charge(),
            field,
        )
    }

    /// Global position (cm).
    pub fn position(&self) -> GlobalPoint {
        self.position
    }

    /// Global momentum (GeV/c).
    pub fn momentum(&self) -> GlobalVector {
        self.momentum
    }

    /// Particle charge.
    pub fn charge(&self) -> Charge {
        self.charge
    }

    /// The field map this state is expressed in.
    pub fn field(&self) -> &'a dyn MagneticField {
        self.field
    }

    /// Field vector at the state's own position.
    pub fn local_field(&self) -> GlobalVector {
        self.field.field_at(&self.position)
    }

    /// Signed curvature `q·k·|B⊥| / |p|` in cm⁻¹, where `B⊥` is the field
    /// component transverse to the momentum.
    ///
    /// Zero for straight-line motion.
    pub fn curvature(&self) -> f64 {
        let p = self.momentum.mag();
        if p == 0.0 {
            return 0.0;
        }
        let b = self.local_field();
        let b_perp = self.momentum.cross(&b).mag() / p;
        self.charge.signum() * C_LIGHT_GEV_PER_T_CM * b_perp / p
    }

    /// A copy of this state at a new position and momentum, in the same
    /// field and with the same charge.
    pub fn with_kinematics(&self, position: GlobalPoint, momentum: GlobalVector) -> Self {
        Self {
            position,
            momentum,
            ..*self
        }
    }
}

impl fmt::Debug for FreeTrajectoryState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreeTrajectoryState")
            .field("position", &self.position)
            .field("momentum", &self.momentum)
            .field("charge", &self.charge)
            .field("field", &self.field.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Axial(f64);

    impl MagneticField for Axial {
        fn field_at(&self, _point: &GlobalPoint) -> GlobalVector {
            GlobalVector::new(0.0, 0.0, self.0)
        }
    }

    #[test]
    fn from_track_copies_kinematics() {
        let field = Axial(3.8);
        let track = Track::new(
            GlobalPoint::new(1.0, -2.0, 5.0),
            GlobalVector::new(10.0, 0.0, 2.0),
            -1,
        )
        .unwrap();
        let fts = FreeTrajectoryState::from_track(&track, &field);
        assert_eq!(fts.position(), track.inner_position());
        assert_eq!(fts.momentum(), track.inner_momentum());
        assert_eq!(fts.charge(), Charge::Negative);
        assert_eq!(fts.local_field().z, 3.8);
    }

    #[test]
    fn curvature_matches_radius_formula() {
        // pT = 1 GeV in 3.8 T => R = 1 / (0.00299792458 * 3.8) ≈ 87.78 cm
        let field = Axial(3.8);
        let fts = FreeTrajectoryState::new(
            GlobalPoint::ORIGIN,
            GlobalVector::new(1.0, 0.0, 0.0),
            Charge::Positive,
            &field,
        );
        let r = 1.0 / fts.curvature();
        assert!((r - 87.777).abs() < 1e-2, "radius {r}");
    }

    #[test]
    fn curvature_vanishes_along_field() {
        let field = Axial(3.8);
        let fts = FreeTrajectoryState::new(
            GlobalPoint::ORIGIN,
            GlobalVector::new(0.0, 0.0, 50.0),
            Charge::Positive,
            &field,
        );
        assert_eq!(fts.curvature(), 0.0);
    }

    #[test]
    fn debug_shows_field_name() {
        let field = Axial(0.0);
        let fts = FreeTrajectoryState::new(
            GlobalPoint::ORIGIN,
            GlobalVector::UNIT_Z,
            Charge::Negative,
            &field,
        );
        let s = format!("{fts:?}");
        assert!(s.contains("MagneticField"));
    }
}

//! Derived quantities of an extrapolation, with sentinel handling.

use std::f64::consts::TAU;

use muex_core::{GlobalPoint, GlobalVector};
use muex_propagator::{PropagationDirection, SurfaceState, TrajectoryStateOnSurface};

use crate::config::ExtrapolationTarget;

/// Kinematics and transverse coordinates of a valid extrapolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    /// Global position on the target (cm).
    pub position: GlobalPoint,
    /// Global momentum on the target (GeV/c).
    pub momentum: GlobalVector,
    /// Transverse radius `sqrt(x² + y²)` (cm). Never negative.
    pub r: f64,
    /// `x / r`, or `1` on the beam axis.
    pub cos_phi: f64,
    /// Azimuth in `[0, 2π)`, resolved with the sign of `y`.
    pub phi: f64,
    /// Signed path length from the inner track position (cm).
    pub path_length: f64,
    /// The direction that reached the target.
    pub direction: PropagationDirection,
}

impl ProjectedPoint {
    /// Derive the transverse coordinates of a surface state.
    pub fn from_state(state: &SurfaceState) -> Self {
        let position = state.position;
        let r = position.perp();
        let (cos_phi, phi) = azimuth(position.x, position.y, r);
        Self {
            position,
            momentum: state.momentum,
            r,
            cos_phi,
            phi,
            path_length: state.path_length,
            direction: state.direction,
        }
    }

    /// Longitudinal position (cm).
    pub fn z(&self) -> f64 {
        self.position.z
    }
}

/// `(cos φ, φ)` from `x`, `y` and `r = sqrt(x² + y²)`.
fn azimuth(x: f64, y: f64, r: f64) -> (f64, f64) {
    if r == 0.0 {
        return (1.0, 0.0);
    }
    let cos_phi = (x / r).clamp(-1.0, 1.0);
    let acos = cos_phi.acos();
    let phi = if y >= 0.0 { acos } else { TAU - acos };
    // y = -0.0 style rounding can land exactly on 2π.
    (cos_phi, if phi >= TAU { 0.0 } else { phi })
}

/// Outcome of one (track, target) extrapolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// The target was reached.
    Valid(ProjectedPoint),
    /// Neither direction reached the target.
    Unavailable,
}

impl Projection {
    /// Convert an engine result.
    pub fn from_tsos(tsos: &TrajectoryStateOnSurface) -> Self {
        match tsos.state() {
            Some(state) => Self::Valid(ProjectedPoint::from_state(state)),
            None => Self::Unavailable,
        }
    }

    /// Returns `true` if the target was reached.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The projected point, if valid.
    pub fn point(&self) -> Option<&ProjectedPoint> {
        match self {
            Self::Valid(p) => Some(p),
            Self::Unavailable => None,
        }
    }

    /// Transverse radius, or exactly `sentinel`.
    pub fn r_or(&self, sentinel: f64) -> f64 {
        self.point().map_or(sentinel, |p| p.r)
    }

    /// Azimuth, or exactly `sentinel`.
    pub fn phi_or(&self, sentinel: f64) -> f64 {
        self.point().map_or(sentinel, |p| p.phi)
    }

    /// Longitudinal position, or exactly `sentinel`.
    pub fn z_or(&self, sentinel: f64) -> f64 {
        self.point().map_or(sentinel, |p| p.z())
    }
}

/// A [`Projection`] tagged with the target it was computed for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetProjection {
    /// The target surface.
    pub target: ExtrapolationTarget,
    /// The outcome.
    pub projection: Projection,
}

impl TargetProjection {
    /// The target's natural observables: `(r, φ)` on a plane, `(z, φ)`
    /// on a cylinder, with `sentinel` for both when unavailable.
    pub fn observables(&self, sentinel: f64) -> (f64, f64) {
        let first = if self.target.is_plane() {
            self.projection.r_or(sentinel)
        } else {
            self.projection.z_or(sentinel)
        };
        (first, self.projection.phi_or(sentinel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muex_core::Charge;
    use muex_geometry::Surface;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const SENTINEL: f64 = -999_999.0;

    fn state_at(x: f64, y: f64, z: f64) -> SurfaceState {
        SurfaceState {
            position: GlobalPoint::new(x, y, z),
            momentum: GlobalVector::new(0.0, 0.0, 1.0),
            charge: Charge::Negative,
            path_length: 12.5,
            direction: PropagationDirection::Along,
        }
    }

    #[test]
    fn quadrants_resolve_with_sign_of_y() {
        let cases = [
            ((1.0, 0.0), 0.0),
            ((0.0, 1.0), FRAC_PI_2),
            ((-1.0, 0.0), PI),
            ((0.0, -1.0), 3.0 * FRAC_PI_2),
        ];
        for ((x, y), expected) in cases {
            let p = ProjectedPoint::from_state(&state_at(x, y, 0.0));
            assert!((p.phi - expected).abs() < 1e-12, "({x}, {y}) -> {}", p.phi);
            assert_eq!(p.r, 1.0);
        }
    }

    #[test]
    fn beam_axis_has_zero_azimuth() {
        let p = ProjectedPoint::from_state(&state_at(0.0, 0.0, 790.0));
        assert_eq!((p.r, p.cos_phi, p.phi), (0.0, 1.0, 0.0));
        assert_eq!(p.z(), 790.0);
    }

    #[test]
    fn unavailable_reports_sentinel_exactly() {
        let u = Projection::Unavailable;
        assert!(!u.is_valid());
        assert_eq!(u.r_or(SENTINEL), SENTINEL);
        assert_eq!(u.phi_or(SENTINEL), SENTINEL);
        assert_eq!(u.z_or(SENTINEL), SENTINEL);
        assert!(u.point().is_none());
    }

    #[test]
    fn from_tsos_maps_validity() {
        let surface = Surface::plane_at_z(790.0);
        let invalid = TrajectoryStateOnSurface::invalid(surface);
        assert_eq!(Projection::from_tsos(&invalid), Projection::Unavailable);

        let valid = TrajectoryStateOnSurface::valid(surface, state_at(3.0, 4.0, 790.0));
        let p = Projection::from_tsos(&valid);
        assert_eq!(p.r_or(SENTINEL), 5.0);
        assert_eq!(p.point().map(|p| p.path_length), Some(12.5));
    }

    #[test]
    fn observables_follow_the_target_kind() {
        let point = Projection::Valid(ProjectedPoint::from_state(&state_at(0.0, 500.0, -42.0)));
        let barrel = TargetProjection {
            target: ExtrapolationTarget::BARREL,
            projection: point,
        };
        assert_eq!(barrel.observables(SENTINEL), (-42.0, FRAC_PI_2));
        let endcap = TargetProjection {
            target: ExtrapolationTarget::PLUS_ENDCAP,
            projection: point,
        };
        assert_eq!(endcap.observables(SENTINEL).0, 500.0);
        let missing = TargetProjection {
            target: ExtrapolationTarget::BARREL,
            projection: Projection::Unavailable,
        };
        assert_eq!(missing.observables(SENTINEL), (SENTINEL, SENTINEL));
    }

    proptest! {
        #[test]
        fn radius_and_azimuth_are_consistent(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
        ) {
            let p = ProjectedPoint::from_state(&state_at(x, y, 0.0));
            prop_assert!(p.r >= 0.0);
            prop_assert_eq!(p.r, (x * x + y * y).sqrt());
            prop_assert!((0.0..TAU).contains(&p.phi));
            prop_assert!((p.cos_phi - p.phi.cos()).abs() < 1e-9);
            if p.r > 1e-9 {
                prop_assert!((p.r * p.phi.sin() - y).abs() < 1e-6 * p.r.max(1.0));
            }
        }
    }
}

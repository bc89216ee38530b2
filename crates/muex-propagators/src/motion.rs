//! Equations of motion of a charged particle in a static magnetic field.
//!
//! With unit tangent `t = p/|p|` and path length `s`:
//!
//! ```text
//! dx/ds = t
//! dt/ds = (q·k/|p|) · t × B(x)        k = 0.299792458e-2 GeV/(c·T·cm)
//! ```
//!
//! `|p|` is conserved (no material). Negative `ds` integrates backwards.

use muex_core::{Charge, GlobalPoint, GlobalVector, MagneticField, C_LIGHT_GEV_PER_T_CM};
use muex_propagator::PathPoint;

/// Largest transverse phase advance (radians) per scan step.
pub const MAX_PHASE_PER_STEP: f64 = 0.2;

/// Below this phase the helix uses its Taylor expansion.
const SMALL_PHASE: f64 = 1e-6;

/// Signed helix phase rate `q·k·|B|/|p|` in rad/cm.
pub fn phase_rate(momentum: &GlobalVector, field: &GlobalVector, charge: Charge) -> f64 {
    let p = momentum.mag();
    if p == 0.0 {
        return 0.0;
    }
    charge.signum() * C_LIGHT_GEV_PER_T_CM * field.mag() / p
}

/// Step length keeping the phase advance under [`MAX_PHASE_PER_STEP`].
///
/// Infinite for a vanishing field; the crossing search clamps it.
pub fn phase_limited_step(momentum: &GlobalVector, field: &GlobalVector, charge: Charge) -> f64 {
    let w = phase_rate(momentum, field, charge).abs();
    if w > 0.0 {
        MAX_PHASE_PER_STEP / w
    } else {
        f64::INFINITY
    }
}

/// Advance along a straight line.
pub fn straight_step(point: &PathPoint, ds: f64) -> PathPoint {
    let t = point.momentum.unit().unwrap_or(GlobalVector::ZERO);
    PathPoint {
        position: point.position + t * ds,
        momentum: point.momentum,
    }
}

/// Advance along the exact helix in the uniform field `field`.
///
/// The helix axis is the field direction; the component of the tangent
/// along it is conserved and the transverse component rotates by
/// `phase_rate · ds` radians.
pub fn helix_step(point: &PathPoint, ds: f64, field: &GlobalVector, charge: Charge) -> PathPoint {
    let p = point.momentum.mag();
    let (Some(t), Some(b_hat)) = (point.momentum.unit(), field.unit()) else {
        return straight_step(point, ds);
    };
    let omega = phase_rate(&point.momentum, field, charge);

    let t_par = t.dot(&b_hat);
    let t_perp = t - b_hat * t_par;
    let n = b_hat.cross(&t_perp);

    let phase = omega * ds;
    let (sin, cos) = phase.sin_cos();
    // sin(φ)/ω and (1 − cos φ)/ω, expanded near φ = 0.
    let (along_perp, along_n) = if phase.abs() < SMALL_PHASE {
        (ds * (1.0 - phase * phase / 6.0), ds * phase * 0.5)
    } else {
        (sin / omega, (1.0 - cos) / omega)
    };

    let position = point.position + b_hat * (t_par * ds) + t_perp * along_perp - n * along_n;
    let tangent = b_hat * t_par + t_perp * cos - n * sin;
    PathPoint {
        position,
        momentum: tangent * p,
    }
}

/// One classical fourth-order Runge–Kutta step through `field`.
///
/// The tangent is renormalised after the step so `|p|` stays exact.
pub fn rk4_step(
    point: &PathPoint,
    ds: f64,
    field: &dyn MagneticField,
    charge: Charge,
) -> PathPoint {
    let p = point.momentum.mag();
    let Some(t0) = point.momentum.unit() else {
        return *point;
    };
    let c = charge.signum() * C_LIGHT_GEV_PER_T_CM / p;
    let x0 = point.position;
    let dtds = |x: &GlobalPoint, t: &GlobalVector| t.cross(&field.field_at(x)) * c;

    let k1x = t0;
    let k1t = dtds(&x0, &t0);

    let t2 = t0 + k1t * (0.5 * ds);
    let k2x = t2;
    let k2t = dtds(&(x0 + k1x * (0.5 * ds)), &t2);

    let t3 = t0 + k2t * (0.5 * ds);
    let k3x = t3;
    let k3t = dtds(&(x0 + k2x * (0.5 * ds)), &t3);

    let t4 = t0 + k3t * ds;
    let k4x = t4;
    let k4t = dtds(&(x0 + k3x * ds), &t4);

    let w = ds / 6.0;
    let position = x0 + (k1x + k2x * 2.0 + k3x * 2.0 + k4x) * w;
    let tangent = t0 + (k1t + k2t * 2.0 + k3t * 2.0 + k4t) * w;
    let tangent = tangent.unit().unwrap_or(t0);

    PathPoint {
        position,
        momentum: tangent * p,
    }
}

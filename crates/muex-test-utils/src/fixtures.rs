//! Reusable propagator and track fixtures.
//!
//! - [`ScriptedPropagator`]: reaches only the surfaces it was told to,
//!   at the points it was told to, and counts its calls.
//! - [`UnreachablePropagator`]: never reaches anything.
//! - [`random_tracks`]: a seeded sample of muon-like tracks.

use std::sync::atomic::{AtomicUsize, Ordering};

use muex_core::{FreeTrajectoryState, GlobalPoint, GlobalVector, Track};
use muex_geometry::Surface;
use muex_propagator::{
    PropagationDirection, Propagator, SurfaceState, TrajectoryStateOnSurface,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Returns a fixed point for each scripted surface, invalid otherwise.
///
/// Useful for testing fallback order and sentinel handling without any
/// numerical propagation.
pub struct ScriptedPropagator {
    pub name: String,
    pub direction: PropagationDirection,
    script: Vec<(Surface, GlobalPoint)>,
    call_count: AtomicUsize,
}

impl ScriptedPropagator {
    pub fn new(name: impl Into<String>, direction: PropagationDirection) -> Self {
        Self {
            name: name.into(),
            direction,
            script: Vec::new(),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Reach `surface` at `point`.
    pub fn reaching(mut self, surface: Surface, point: GlobalPoint) -> Self {
        self.script.push((surface, point));
        self
    }

    /// How many times `propagate()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

impl Propagator for ScriptedPropagator {
    fn name(&self) -> &str {
        &self.name
    }

    fn direction(&self) -> PropagationDirection {
        self.direction
    }

    fn propagate(
        &self,
        start: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match self.script.iter().find(|(s, _)| s == surface) {
            Some((_, point)) => {
                let path_length = self.direction.sign() * (*point - start.position()).mag();
                TrajectoryStateOnSurface::valid(
                    *surface,
                    SurfaceState {
                        position: *point,
                        momentum: start.momentum(),
                        charge: start.charge(),
                        path_length,
                        direction: self.direction,
                    },
                )
            }
            None => TrajectoryStateOnSurface::invalid(*surface),
        }
    }
}

/// Always returns an invalid state.
pub struct UnreachablePropagator {
    pub direction: PropagationDirection,
}

impl Propagator for UnreachablePropagator {
    fn name(&self) -> &str {
        "UnreachablePropagator"
    }

    fn direction(&self) -> PropagationDirection {
        self.direction
    }

    fn propagate(
        &self,
        _start: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        TrajectoryStateOnSurface::invalid(*surface)
    }
}

/// `count` muon-like tracks drawn deterministically from `seed`.
///
/// Inner positions lie near the beam spot (|x|, |y| < 0.5 cm,
/// |z| < 15 cm), pT in [3, 100) GeV, |η| < 2.4, both charges.
pub fn random_tracks(seed: u64, count: usize) -> Vec<Track> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tracks = Vec::with_capacity(count);
    while tracks.len() < count {
        let position = GlobalPoint::new(
            rng.random_range(-0.5..0.5),
            rng.random_range(-0.5..0.5),
            rng.random_range(-15.0..15.0),
        );
        let pt: f64 = rng.random_range(3.0..100.0);
        let eta: f64 = rng.random_range(-2.4..2.4);
        let phi: f64 = rng.random_range(0.0..std::f64::consts::TAU);
        let momentum = GlobalVector::new(pt * phi.cos(), pt * phi.sin(), pt * eta.sinh());
        let charge = if rng.random::<bool>() { 1 } else { -1 };
        if let Ok(track) = Track::new(position, momentum, charge) {
            tracks.push(track);
        }
    }
    tracks
}

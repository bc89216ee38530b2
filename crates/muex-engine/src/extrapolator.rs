//! The extrapolation engine: free state, target surface, and the
//! along-then-opposite propagation fallback.
//!
//! ```text
//!  Track ──► FreeTrajectoryState ──► along.propagate(surface)
//!                                         │ valid? ──► done
//!                                         ▼ invalid
//!                                    opposite.propagate(surface) ──► done
//! ```
//!
//! "Along" is always tried first and "opposite" only on failure; the
//! result of the last attempt is returned whether valid or not.

use muex_core::{FreeTrajectoryState, MagneticField, Track};
use muex_geometry::Surface;
use muex_propagator::{PropagationDirection, Propagator, TrajectoryStateOnSurface};

use crate::config::DriverConfig;
use crate::error::EventError;
use crate::setup::EventSetup;

/// Per-event extrapolation handles.
///
/// Borrowed for one event from an [`EventSetup`]; holds no other state,
/// so every call is a pure function of the track and the target.
#[derive(Clone, Copy)]
pub struct Extrapolator<'a> {
    field: &'a dyn MagneticField,
    along: &'a dyn Propagator,
    opposite: &'a dyn Propagator,
}

impl<'a> Extrapolator<'a> {
    /// Bind explicit handles.
    pub fn new(
        field: &'a dyn MagneticField,
        along: &'a dyn Propagator,
        opposite: &'a dyn Propagator,
    ) -> Self {
        Self {
            field,
            along,
            opposite,
        }
    }

    /// Fetch the field map and both propagators named in `config`.
    ///
    /// # Errors
    ///
    /// [`EventError::MissingField`] or [`EventError::MissingPropagator`]
    /// if a label is not registered, and
    /// [`EventError::DirectionMismatch`] if a propagator was registered
    /// under the other direction's label.
    pub fn from_setup(setup: &'a dyn EventSetup, config: &DriverConfig) -> Result<Self, EventError> {
        let field = setup
            .magnetic_field(&config.field_label)
            .ok_or_else(|| EventError::MissingField {
                label: config.field_label.clone(),
            })?;
        let along = lookup_propagator(setup, &config.along_label, PropagationDirection::Along)?;
        let opposite =
            lookup_propagator(setup, &config.opposite_label, PropagationDirection::Opposite)?;
        Ok(Self::new(field, along, opposite))
    }

    /// The field map in use.
    pub fn field(&self) -> &'a dyn MagneticField {
        self.field
    }

    /// The free state at the track's innermost measurement.
    pub fn free_state(&self, track: &Track) -> FreeTrajectoryState<'a> {
        FreeTrajectoryState::from_track(track, self.field)
    }

    /// Propagate `track` to `surface`, falling back to the opposite
    /// direction if the along propagation is invalid.
    pub fn extrapolate(&self, track: &Track, surface: &Surface) -> TrajectoryStateOnSurface {
        let start = self.free_state(track);
        let along = self.along.propagate(&start, surface);
        if along.is_valid() {
            return along;
        }
        self.opposite.propagate(&start, surface)
    }

    /// Extrapolate to the beam-perpendicular plane at `z`.
    pub fn to_plane(&self, track: &Track, z: f64) -> TrajectoryStateOnSurface {
        self.extrapolate(track, &Surface::plane_at_z(z))
    }

    /// Extrapolate to the beam-coaxial cylinder of radius `rho`.
    pub fn to_cylinder(&self, track: &Track, rho: f64) -> TrajectoryStateOnSurface {
        self.extrapolate(track, &Surface::coaxial_cylinder(rho))
    }
}

fn lookup_propagator<'a>(
    setup: &'a dyn EventSetup,
    label: &str,
    expected: PropagationDirection,
) -> Result<&'a dyn Propagator, EventError> {
    let propagator = setup
        .propagator(label)
        .ok_or_else(|| EventError::MissingPropagator {
            label: label.to_string(),
        })?;
    let found = propagator.direction();
    if found != expected {
        return Err(EventError::DirectionMismatch {
            label: label.to_string(),
            expected,
            found,
        });
    }
    Ok(propagator)
}

//! The per-event driver.
//!
//! For every track of the configured collection, extrapolates to every
//! configured target and records a [`Projection`]. An unreachable target
//! is an ordinary outcome; only missing collaborators abort the event.

use std::time::Instant;

use muex_core::TrackSource;
use muex_geometry::Surface;
use muex_propagator::PropagationDirection;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::config::{ConfigError, DriverConfig, ExtrapolationTarget};
use crate::error::EventError;
use crate::extrapolator::Extrapolator;
use crate::metrics::EventMetrics;
use crate::projection::{Projection, TargetProjection};
use crate::setup::EventSetup;

/// Projections of one track, in target order. The standard three
/// targets fit inline.
pub type TrackProjections = SmallVec<[TargetProjection; 3]>;

/// Everything the driver produced for one event.
#[derive(Clone, Debug)]
pub struct EventProjections {
    tracks: Vec<TrackProjections>,
    sentinel: f64,
    metrics: EventMetrics,
}

impl EventProjections {
    /// Number of tracks processed.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if the collection was empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Projections of the track at `index` in the input collection.
    pub fn track(&self, index: usize) -> Option<&[TargetProjection]> {
        self.tracks.get(index).map(|p| p.as_slice())
    }

    /// Projections of every track, in input order.
    pub fn iter(&self) -> impl Iterator<Item = &[TargetProjection]> {
        self.tracks.iter().map(|p| p.as_slice())
    }

    /// Natural observables of the track at `index`, one pair per target,
    /// with the sentinel for unavailable projections.
    pub fn observables(&self, index: usize) -> Option<SmallVec<[(f64, f64); 3]>> {
        self.track(index).map(|projections| {
            projections
                .iter()
                .map(|p| p.observables(self.sentinel))
                .collect()
        })
    }

    /// The value reported for unavailable projections.
    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    /// Outcome counts and timing.
    pub fn metrics(&self) -> &EventMetrics {
        &self.metrics
    }
}

/// Runs the extrapolation of every muon of an event.
///
/// Holds only validated configuration; collaborator handles are passed
/// to each [`process()`](Self::process) call and dropped at its end.
#[derive(Clone, Debug)]
pub struct EventProcessor {
    config: DriverConfig,
}

impl EventProcessor {
    /// Create a processor.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`DriverConfig::validate`].
    pub fn new(config: DriverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Process one event.
    ///
    /// # Errors
    ///
    /// [`EventError::MissingCollection`] if `event` has no collection
    /// under the configured label; otherwise any error of
    /// [`Extrapolator::from_setup`].
    pub fn process(
        &self,
        event: &dyn TrackSource,
        setup: &dyn EventSetup,
    ) -> Result<EventProjections, EventError> {
        let start = Instant::now();
        let tracks = event
            .tracks(&self.config.track_label)
            .ok_or_else(|| EventError::MissingCollection {
                label: self.config.track_label.clone(),
            })?;
        let extrapolator = Extrapolator::from_setup(setup, &self.config)?;
        let targets: SmallVec<[(ExtrapolationTarget, Surface); 3]> = self
            .config
            .targets
            .iter()
            .map(|t| (*t, t.surface()))
            .collect();
        let sentinel = self.config.sentinel;

        let mut metrics = EventMetrics {
            tracks: tracks.len(),
            ..EventMetrics::default()
        };
        let mut per_track = Vec::with_capacity(tracks.len());

        for (index, track) in tracks.iter().enumerate() {
            let mut projections = TrackProjections::new();
            for (target, surface) in &targets {
                let tsos = extrapolator.extrapolate(track, surface);
                let projection = Projection::from_tsos(&tsos);
                let direction = projection.point().map(|p| p.direction);
                match direction {
                    Some(PropagationDirection::Along) => metrics.valid_along += 1,
                    Some(PropagationDirection::Opposite) => metrics.valid_opposite += 1,
                    None => metrics.unavailable += 1,
                }
                trace!(
                    track = index,
                    target = %target,
                    direction = ?direction,
                    r = projection.r_or(sentinel),
                    "extrapolated"
                );
                projections.push(TargetProjection {
                    target: *target,
                    projection,
                });
            }
            metrics.extrapolations += projections.len();
            per_track.push(projections);
        }

        metrics.total_us = start.elapsed().as_micros() as u64;
        debug!(
            tracks = metrics.tracks,
            valid_along = metrics.valid_along,
            valid_opposite = metrics.valid_opposite,
            unavailable = metrics.unavailable,
            total_us = metrics.total_us,
            "event processed"
        );
        if metrics.tracks > 0 && metrics.valid() == 0 {
            warn!(
                label = %self.config.track_label,
                tracks = metrics.tracks,
                "no track reached any target"
            );
        }

        Ok(EventProjections {
            tracks: per_track,
            sentinel,
            metrics,
        })
    }
}

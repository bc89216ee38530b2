//! Extrapolation engine and per-event driver for muon track projection.
//!
//! [`Extrapolator`] places one track on one surface, trying the
//! along-momentum propagator first and the opposite one only when that
//! fails. [`EventProcessor`] runs it for every muon of an event against
//! the configured [`ExtrapolationTarget`]s and derives transverse
//! coordinates, substituting a sentinel where no direction reaches the
//! target.
//!
//! Collaborators are passed in per event: the muon collection through
//! [`muex_core::TrackSource`], the field map and propagators through
//! [`EventSetup`]. Nothing is carried from one event to the next.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extrapolator;
pub mod metrics;
pub mod processor;
pub mod projection;
pub mod setup;

pub use config::{ConfigError, DriverConfig, ExtrapolationTarget};
pub use error::EventError;
pub use extrapolator::Extrapolator;
pub use metrics::EventMetrics;
pub use processor::{EventProcessor, EventProjections, TrackProjections};
pub use projection::{ProjectedPoint, Projection, TargetProjection};
pub use setup::{Conditions, EventSetup};

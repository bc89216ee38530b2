//! muex: field-aware extrapolation of muon tracks to detector surfaces.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! muex sub-crates. For most users, adding `muex` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use muex::prelude::*;
//! use muex::propagators::{AnalyticalPropagator, UniformField};
//!
//! let helix = |direction| {
//!     AnalyticalPropagator::builder()
//!         .direction(direction)
//!         .build()
//!         .unwrap()
//! };
//! let setup = Conditions::new()
//!     .with_field("", UniformField::axial(3.8))
//!     .with_propagator("SmartPropagatorAny", helix(PropagationDirection::Along))
//!     .with_propagator(
//!         "SmartPropagatorAnyOpposite",
//!         helix(PropagationDirection::Opposite),
//!     );
//!
//! // One μ⁺ flying straight down the beam axis.
//! let muon = Track::new(GlobalPoint::ORIGIN, GlobalVector::new(0.0, 0.0, 50.0), 1).unwrap();
//! let mut event = HashMap::new();
//! event.insert("slimmedMuons".to_string(), vec![muon]);
//!
//! let processor = EventProcessor::new(DriverConfig::default()).unwrap();
//! let out = processor.process(&event, &setup).unwrap();
//!
//! // Plane z=+790: on axis. Plane z=−790: on axis, behind the track.
//! // Barrel r=500: never reached, reported as the sentinel.
//! let observables = out.observables(0).unwrap();
//! assert!(observables[0].0 < 1e-9);
//! assert!(observables[1].0 < 1e-9);
//! assert_eq!(observables[2], (-999_999.0, -999_999.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `muex-core` | Vectors, tracks, free states, collaborator traits |
//! | [`geometry`] | `muex-geometry` | Planes, cylinders, rotations |
//! | [`propagator`] | `muex-propagator` | Propagator trait, surface states, crossing search |
//! | [`propagators`] | `muex-propagators` | Reference propagators and field maps |
//! | [`engine`] | `muex-engine` | Extrapolation engine and per-event driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and collaborator traits (`muex-core`).
///
/// Contains [`types::GlobalPoint`], [`types::GlobalVector`],
/// [`types::Track`], [`types::FreeTrajectoryState`], and the
/// [`types::MagneticField`] and [`types::TrackSource`] traits.
pub use muex_core as types;

/// Target surfaces (`muex-geometry`).
pub use muex_geometry as geometry;

/// Propagator trait and surface crossing search (`muex-propagator`).
///
/// The [`propagator::Propagator`] trait is the main extension point for
/// user-supplied transport.
pub use muex_propagator as propagator;

/// Reference propagators and field maps (`muex-propagators`).
///
/// Includes [`propagators::AnalyticalPropagator`],
/// [`propagators::RungeKuttaPropagator`], and
/// [`propagators::StraightLinePropagator`].
pub use muex_propagators as propagators;

/// Extrapolation engine and per-event driver (`muex-engine`).
pub use muex_engine as engine;

/// Common imports for typical muex usage.
///
/// ```rust
/// use muex::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use muex_core::{
        Charge, FreeTrajectoryState, GlobalPoint, GlobalVector, MagneticField, Track, TrackError,
        TrackSource,
    };

    // Geometry
    pub use muex_geometry::Surface;

    // Propagator
    pub use muex_propagator::{PropagationDirection, Propagator, TrajectoryStateOnSurface};

    // Engine
    pub use muex_engine::{
        Conditions, DriverConfig, EventError, EventProcessor, EventProjections, EventSetup,
        ExtrapolationTarget, Extrapolator, Projection,
    };
}

//! Core types and traits for muon track extrapolation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the kinematic value types shared by the whole workspace: global
//! points and vectors, charge, reconstructed tracks, the free trajectory
//! state, and the two collaborator traits that the host framework
//! implements ([`MagneticField`] and [`TrackSource`]).
//!
//! # Units
//!
//! Positions are in centimetres, momenta in GeV/c and magnetic fields
//! in tesla throughout the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod state;
pub mod track;
pub mod traits;
pub mod vector;

pub use error::TrackError;
pub use field::{MagneticField, C_LIGHT_GEV_PER_T_CM};
pub use state::FreeTrajectoryState;
pub use track::{Charge, Track};
pub use traits::TrackSource;
pub use vector::{GlobalPoint, GlobalVector};

//! Propagator trait and shared propagation machinery.
//!
//! The [`Propagator`] trait transports a
//! [`FreeTrajectoryState`](muex_core::FreeTrajectoryState) to a
//! [`Surface`](muex_geometry::Surface) in one fixed
//! [`PropagationDirection`], producing a [`TrajectoryStateOnSurface`]
//! that is either valid or explicitly invalid. Failure to reach the
//! surface is never an error value.
//!
//! [`crossing::find_crossing`] is the scan-and-bisect surface search that
//! every reference propagator builds on; it is bounded by
//! [`PropagationLimits`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod crossing;
pub mod limits;
pub mod propagator;
pub mod tsos;

pub use crossing::{find_crossing, PathPoint};
pub use limits::{PropagationLimits, PropagationLimitsBuilder};
pub use propagator::{PropagationDirection, Propagator};
pub use tsos::{SurfaceState, TrajectoryStateOnSurface};

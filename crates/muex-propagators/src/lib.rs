//! Reference propagators and magnetic field maps.
//!
//! Three propagators, each bound to one [`PropagationDirection`] at build
//! time:
//!
//! 1. [`AnalyticalPropagator`]: closed-form helix in the field found at
//!    the start point. Exact for uniform fields.
//! 2. [`RungeKuttaPropagator`]: fourth-order Runge–Kutta stepping that
//!    samples the field at every stage. Use for non-uniform maps.
//! 3. [`StraightLinePropagator`]: ignores the field entirely.
//!
//! Two field maps: [`UniformField`] and [`SolenoidField`].
//!
//! All propagators share the scan-and-bisect surface search in
//! [`muex_propagator::crossing`]; they differ only in how they advance a
//! point along the trajectory.
//!
//! [`PropagationDirection`]: muex_propagator::PropagationDirection

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod fields;
pub mod motion;
pub mod runge_kutta;
pub mod straight_line;

pub use analytical::AnalyticalPropagator;
pub use fields::{SolenoidField, UniformField};
pub use runge_kutta::RungeKuttaPropagator;
pub use straight_line::StraightLinePropagator;

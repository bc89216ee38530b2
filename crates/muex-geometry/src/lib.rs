//! Target surfaces for track extrapolation.
//!
//! Two surface types are supported: an infinite [`Plane`] and an
//! infinitely long [`Cylinder`]. Both are value objects positioned by a
//! global point and oriented by a [`Rotation`]; the convenience
//! constructors [`Plane::at_z`] and [`Cylinder::coaxial`] build the
//! beam-aligned variants used for muon station matching.
//!
//! The propagators only need one thing from a surface: a signed distance
//! that changes sign when a trajectory crosses it. See
//! [`Surface::signed_distance`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cylinder;
pub mod plane;
pub mod rotation;
pub mod surface;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use rotation::Rotation;
pub use surface::{Surface, SurfaceKind};

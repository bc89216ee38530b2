//! Benchmark profiles for the muex extrapolation workspace.
//!
//! Provides pre-built event setups and events for benchmarks:
//!
//! - [`reference_conditions`]: uniform 3.8 T field, helix propagators
//! - [`solenoid_conditions`]: finite 3.8 T solenoid, Runge–Kutta propagators
//! - [`reference_event`]: a seeded muon collection under the default label

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use muex_engine::{Conditions, DriverConfig};
use muex_propagator::PropagationDirection;
use muex_propagators::{AnalyticalPropagator, RungeKuttaPropagator, SolenoidField, UniformField};
use muex_test_utils::fixtures::random_tracks;
use muex_test_utils::MockEvent;

/// Central field of the reference profiles (tesla).
pub const REFERENCE_FIELD_T: f64 = 3.8;

/// Uniform axial field with closed-form helix propagators registered
/// under the default labels.
pub fn reference_conditions() -> Result<Conditions, String> {
    let config = DriverConfig::default();
    let along = AnalyticalPropagator::builder()
        .direction(PropagationDirection::Along)
        .build()?;
    let opposite = AnalyticalPropagator::builder()
        .direction(PropagationDirection::Opposite)
        .build()?;
    Ok(Conditions::new()
        .with_field(config.field_label, UniformField::axial(REFERENCE_FIELD_T))
        .with_propagator(config.along_label, along)
        .with_propagator(config.opposite_label, opposite))
}

/// Finite solenoid with Runge–Kutta propagators registered under the
/// default labels.
pub fn solenoid_conditions() -> Result<Conditions, String> {
    let config = DriverConfig::default();
    let field = SolenoidField::builder()
        .field_strength(REFERENCE_FIELD_T)
        .build()?;
    let along = RungeKuttaPropagator::builder()
        .direction(PropagationDirection::Along)
        .build()?;
    let opposite = RungeKuttaPropagator::builder()
        .direction(PropagationDirection::Opposite)
        .build()?;
    Ok(Conditions::new()
        .with_field(config.field_label, field)
        .with_propagator(config.along_label, along)
        .with_propagator(config.opposite_label, opposite))
}

/// An event holding `muons` seeded muon tracks under the default label.
pub fn reference_event(seed: u64, muons: usize) -> MockEvent {
    MockEvent::new().with_collection(DriverConfig::default().track_label, random_tracks(seed, muons))
}

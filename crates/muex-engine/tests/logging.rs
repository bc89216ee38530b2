//! Integration test: structured log output of the driver.
//!
//! Installs a scoped `tracing-subscriber` writing into a buffer and
//! checks the per-event and per-extrapolation records.

use std::io;
use std::sync::{Arc, Mutex};

use muex_core::{GlobalPoint, GlobalVector, Track};
use muex_engine::{Conditions, DriverConfig, EventProcessor};
use muex_propagator::PropagationDirection;
use muex_test_utils::fixtures::UnreachablePropagator;
use muex_test_utils::{MockEvent, ProbeField};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(filter: &str, f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

fn blind_setup() -> Conditions {
    Conditions::new()
        .with_field("", ProbeField::axial(3.8))
        .with_propagator(
            "SmartPropagatorAny",
            UnreachablePropagator {
                direction: PropagationDirection::Along,
            },
        )
        .with_propagator(
            "SmartPropagatorAnyOpposite",
            UnreachablePropagator {
                direction: PropagationDirection::Opposite,
            },
        )
}

fn muon() -> Track {
    Track::new(GlobalPoint::ORIGIN, GlobalVector::new(5.0, 0.0, 5.0), 1).unwrap()
}

#[test]
fn warns_when_nothing_is_reached() {
    let setup = blind_setup();
    let event = MockEvent::new().with_collection("slimmedMuons", vec![muon()]);
    let processor = EventProcessor::new(DriverConfig::default()).unwrap();
    let logs = capture("muex_engine=debug", || {
        processor.process(&event, &setup).unwrap();
    });
    assert!(logs.contains("event processed"), "{logs}");
    assert!(logs.contains("unavailable=3"), "{logs}");
    assert!(logs.contains("no track reached any target"), "{logs}");
    assert!(!logs.contains("extrapolated"), "{logs}");
}

#[test]
fn traces_each_extrapolation() {
    let setup = blind_setup();
    let event = MockEvent::new().with_collection("slimmedMuons", vec![muon(), muon()]);
    let processor = EventProcessor::new(DriverConfig::default()).unwrap();
    let logs = capture("muex_engine=trace", || {
        processor.process(&event, &setup).unwrap();
    });
    assert_eq!(logs.matches("extrapolated").count(), 6, "{logs}");
    assert!(logs.contains("target=cylinder(r=500)"), "{logs}");
    assert!(logs.contains("r=-999999"), "{logs}");
}

#[test]
fn empty_event_does_not_warn() {
    let setup = blind_setup();
    let event = MockEvent::new().with_collection("slimmedMuons", Vec::new());
    let processor = EventProcessor::new(DriverConfig::default()).unwrap();
    let logs = capture("muex_engine=debug", || {
        processor.process(&event, &setup).unwrap();
    });
    assert!(logs.contains("tracks=0"), "{logs}");
    assert!(!logs.contains("WARN"), "{logs}");
}

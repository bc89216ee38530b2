//! Test utilities and mock types for muex development.
//!
//! Provides a mock event ([`MockEvent`]) implementing [`TrackSource`], a
//! field map that counts its lookups ([`ProbeField`]), and, in
//! [`fixtures`], scripted propagators and seeded random track samples.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use muex_core::{GlobalPoint, GlobalVector, MagneticField, Track, TrackSource};

/// Mock implementation of [`TrackSource`].
///
/// Backed by a `HashMap<String, Vec<Track>>`. Pre-populate collections
/// with [`with_collection`](MockEvent::with_collection) before passing to
/// code under test.
#[derive(Default)]
pub struct MockEvent {
    collections: HashMap<String, Vec<Track>>,
}

impl MockEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a collection.
    pub fn with_collection(mut self, label: impl Into<String>, tracks: Vec<Track>) -> Self {
        self.collections.insert(label.into(), tracks);
        self
    }

    /// Number of collections in the event.
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }
}

impl TrackSource for MockEvent {
    fn tracks(&self, label: &str) -> Option<&[Track]> {
        self.collections.get(label).map(|v| v.as_slice())
    }
}

/// Uniform field map that counts how often it is queried.
///
/// Uses `AtomicUsize` for the counter so it satisfies `Sync`.
pub struct ProbeField {
    field: GlobalVector,
    lookups: AtomicUsize,
}

impl ProbeField {
    /// A uniform field of `bz` tesla along +z.
    pub fn axial(bz: f64) -> Self {
        Self {
            field: GlobalVector::new(0.0, 0.0, bz),
            lookups: AtomicUsize::new(0),
        }
    }

    /// How many times `field_at()` has been called.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl MagneticField for ProbeField {
    fn field_at(&self, _point: &GlobalPoint) -> GlobalVector {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.field
    }

    fn name(&self) -> &str {
        "ProbeField"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_event_serves_collections() {
        let t = Track::new(GlobalPoint::ORIGIN, GlobalVector::UNIT_Z, -1).unwrap();
        let event = MockEvent::new().with_collection("muons", vec![t]);
        assert_eq!(event.collection_count(), 1);
        assert_eq!(event.tracks("muons"), Some(&[t][..]));
        assert!(event.tracks("other").is_none());
    }

    #[test]
    fn probe_field_counts_lookups() {
        let f = ProbeField::axial(3.8);
        assert_eq!(f.lookups(), 0);
        assert_eq!(f.field_at(&GlobalPoint::ORIGIN).z, 3.8);
        f.field_at(&GlobalPoint::ORIGIN);
        assert_eq!(f.lookups(), 2);
    }
}

//! Collaborator trait for reading input collections.

use crate::track::Track;

/// Read-only access to the track collections of one event.
///
/// Implemented by the host's event type. Collections are addressed by a
/// fixed label (e.g. `"slimmedMuons"`); the returned slice is ordered as
/// the host stored it, and that order is preserved in every output.
pub trait TrackSource {
    /// The tracks stored under `label`, or `None` if the event has no
    /// such collection.
    fn tracks(&self, label: &str) -> Option<&[Track]>;
}

impl TrackSource for std::collections::HashMap<String, Vec<Track>> {
    fn tracks(&self, label: &str) -> Option<&[Track]> {
        self.get(label).map(|v| v.as_slice())
    }
}

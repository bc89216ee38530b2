//! Per-event counters for the extrapolation driver.
//!
//! [`EventMetrics`] captures how each extrapolation of one event was
//! resolved, enabling logging and efficiency studies.

/// Outcome counts and timing for a single event.
///
/// The driver populates these after each
/// [`process()`](crate::EventProcessor::process) call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventMetrics {
    /// Tracks in the input collection.
    pub tracks: usize,
    /// (track, target) pairs evaluated.
    pub extrapolations: usize,
    /// Extrapolations resolved by the along propagator.
    pub valid_along: usize,
    /// Extrapolations resolved by the opposite fallback.
    pub valid_opposite: usize,
    /// Extrapolations neither direction resolved.
    pub unavailable: usize,
    /// Wall-clock time for the event, in microseconds.
    pub total_us: u64,
}

impl EventMetrics {
    /// Extrapolations that produced a valid projection.
    pub fn valid(&self) -> usize {
        self.valid_along + self.valid_opposite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = EventMetrics::default();
        assert_eq!(m.tracks, 0);
        assert_eq!(m.extrapolations, 0);
        assert_eq!(m.valid(), 0);
        assert_eq!(m.unavailable, 0);
        assert_eq!(m.total_us, 0);
    }

    #[test]
    fn valid_sums_both_directions() {
        let m = EventMetrics {
            tracks: 2,
            extrapolations: 6,
            valid_along: 3,
            valid_opposite: 2,
            unavailable: 1,
            total_us: 17,
        };
        assert_eq!(m.valid(), 5);
        assert_eq!(m.valid() + m.unavailable, m.extrapolations);
    }
}

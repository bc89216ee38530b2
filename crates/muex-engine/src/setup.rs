//! The event-setup collaborator: field maps and propagators by label.

use indexmap::IndexMap;
use muex_core::MagneticField;
use muex_propagator::Propagator;

/// Read-only access to the per-event conditions a driver needs.
///
/// Handles are borrowed for the duration of one event and never cached
/// across events.
pub trait EventSetup {
    /// The field map registered under `label`.
    fn magnetic_field(&self, label: &str) -> Option<&dyn MagneticField>;

    /// The propagator registered under `label`.
    fn propagator(&self, label: &str) -> Option<&dyn Propagator>;
}

/// Owned registry of field maps and propagators.
///
/// Populated once per run; labels keep their insertion order so listings
/// are stable.
///
/// ```
/// use muex_core::{GlobalPoint, GlobalVector, MagneticField};
/// use muex_engine::{Conditions, EventSetup};
///
/// struct Axial;
/// impl MagneticField for Axial {
///     fn field_at(&self, _p: &GlobalPoint) -> GlobalVector {
///         GlobalVector::new(0.0, 0.0, 3.8)
///     }
/// }
///
/// let conditions = Conditions::new().with_field("", Axial);
/// assert!(conditions.magnetic_field("").is_some());
/// assert!(conditions.propagator("SmartPropagatorAny").is_none());
/// ```
#[derive(Default)]
pub struct Conditions {
    fields: IndexMap<String, Box<dyn MagneticField>>,
    propagators: IndexMap<String, Box<dyn Propagator>>,
}

impl Conditions {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field map, replacing any previous one under `label`.
    pub fn insert_field(&mut self, label: impl Into<String>, field: impl MagneticField + 'static) {
        self.fields.insert(label.into(), Box::new(field));
    }

    /// Register a propagator, replacing any previous one under `label`.
    pub fn insert_propagator(
        &mut self,
        label: impl Into<String>,
        propagator: impl Propagator + 'static,
    ) {
        self.propagators.insert(label.into(), Box::new(propagator));
    }

    /// Builder-style [`insert_field`](Self::insert_field).
    pub fn with_field(mut self, label: impl Into<String>, field: impl MagneticField + 'static) -> Self {
        self.insert_field(label, field);
        self
    }

    /// Builder-style [`insert_propagator`](Self::insert_propagator).
    pub fn with_propagator(
        mut self,
        label: impl Into<String>,
        propagator: impl Propagator + 'static,
    ) -> Self {
        self.insert_propagator(label, propagator);
        self
    }

    /// Field labels in registration order.
    pub fn field_labels(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Propagator labels in registration order.
    pub fn propagator_labels(&self) -> impl Iterator<Item = &str> {
        self.propagators.keys().map(String::as_str)
    }
}

impl EventSetup for Conditions {
    fn magnetic_field(&self, label: &str) -> Option<&dyn MagneticField> {
        self.fields.get(label).map(|f| f.as_ref())
    }

    fn propagator(&self, label: &str) -> Option<&dyn Propagator> {
        self.propagators.get(label).map(|p| p.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muex_propagator::PropagationDirection;
    use muex_test_utils::fixtures::UnreachablePropagator;
    use muex_test_utils::ProbeField;

    #[test]
    fn lookups_by_label() {
        let c = Conditions::new()
            .with_field("", ProbeField::axial(3.8))
            .with_propagator(
                "back",
                UnreachablePropagator {
                    direction: PropagationDirection::Opposite,
                },
            );
        assert_eq!(c.magnetic_field("").map(|f| f.name()), Some("ProbeField"));
        assert!(c.magnetic_field("other").is_none());
        assert_eq!(
            c.propagator("back").map(|p| p.direction()),
            Some(PropagationDirection::Opposite)
        );
    }

    #[test]
    fn labels_keep_registration_order() {
        let mut c = Conditions::new();
        for label in ["z", "a", "m"] {
            c.insert_propagator(
                label,
                UnreachablePropagator {
                    direction: PropagationDirection::Along,
                },
            );
        }
        c.insert_field("b", ProbeField::axial(1.0));
        c.insert_field("a", ProbeField::axial(2.0));
        assert_eq!(c.propagator_labels().collect::<Vec<_>>(), ["z", "a", "m"]);
        assert_eq!(c.field_labels().collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn insert_replaces() {
        let c = Conditions::new()
            .with_field("", ProbeField::axial(1.0))
            .with_field("", ProbeField::axial(2.0));
        assert_eq!(c.field_labels().count(), 1);
        let b = c
            .magnetic_field("")
            .map(|f| f.field_at(&muex_core::GlobalPoint::ORIGIN).z);
        assert_eq!(b, Some(2.0));
    }
}

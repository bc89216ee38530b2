//! Numerical bounds shared by all reference propagators.

/// Bounds on a single propagation.
///
/// Propagation is a deterministic numerical computation with no timeout;
/// these limits are what keep it bounded. A surface not reached within
/// them is reported as an invalid state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropagationLimits {
    max_path_length: f64,
    max_step: f64,
    tolerance: f64,
    max_iterations: u32,
    max_steps: u32,
}

impl PropagationLimits {
    /// Create a new builder starting from the defaults.
    pub fn builder() -> PropagationLimitsBuilder {
        PropagationLimitsBuilder {
            limits: Self::default(),
        }
    }

    /// Largest absolute path length searched (cm). Default: 10000.
    pub fn max_path_length(&self) -> f64 {
        self.max_path_length
    }

    /// Largest single step (cm). Default: 50.
    pub fn max_step(&self) -> f64 {
        self.max_step
    }

    /// Distance to the surface accepted as "on it" (cm). Default: 1e-4.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Bisection iterations when refining a crossing. Default: 100.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Steps taken before giving up on a crossing. Default: 100000.
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }
}

impl Default for PropagationLimits {
    fn default() -> Self {
        Self {
            max_path_length: 10_000.0,
            max_step: 50.0,
            tolerance: 1e-4,
            max_iterations: 100,
            max_steps: 100_000,
        }
    }
}

/// Builder for [`PropagationLimits`].
pub struct PropagationLimitsBuilder {
    limits: PropagationLimits,
}

impl PropagationLimitsBuilder {
    /// Set the maximum absolute path length (cm).
    pub fn max_path_length(mut self, value: f64) -> Self {
        self.limits.max_path_length = value;
        self
    }

    /// Set the maximum step length (cm).
    pub fn max_step(mut self, value: f64) -> Self {
        self.limits.max_step = value;
        self
    }

    /// Set the on-surface tolerance (cm).
    pub fn tolerance(mut self, value: f64) -> Self {
        self.limits.tolerance = value;
        self
    }

    /// Set the bisection iteration cap.
    pub fn max_iterations(mut self, value: u32) -> Self {
        self.limits.max_iterations = value;
        self
    }

    /// Set the step count cap.
    pub fn max_steps(mut self, value: u32) -> Self {
        self.limits.max_steps = value;
        self
    }

    /// Build the limits, validating all settings.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - any length is not finite and strictly positive
    /// - `max_step` exceeds `max_path_length`
    /// - `max_iterations` or `max_steps` is zero
    pub fn build(self) -> Result<PropagationLimits, String> {
        let l = self.limits;
        for (name, value) in [
            ("max_path_length", l.max_path_length),
            ("max_step", l.max_step),
            ("tolerance", l.tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be finite and > 0, got {value}"));
            }
        }
        if l.max_step > l.max_path_length {
            return Err(format!(
                "max_step ({}) must not exceed max_path_length ({})",
                l.max_step, l.max_path_length
            ));
        }
        if l.max_iterations == 0 {
            return Err("max_iterations must be at least 1".to_string());
        }
        if l.max_steps == 0 {
            return Err("max_steps must be at least 1".to_string());
        }
        Ok(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let l = PropagationLimits::default();
        assert_eq!(l.max_path_length(), 10_000.0);
        assert_eq!(l.max_step(), 50.0);
        assert_eq!(l.tolerance(), 1e-4);
        assert_eq!(l.max_iterations(), 100);
        assert_eq!(l.max_steps(), 100_000);
        assert_eq!(PropagationLimits::builder().build().unwrap(), l);
    }

    #[test]
    fn builder_overrides() {
        let l = PropagationLimits::builder()
            .max_path_length(2000.0)
            .max_step(10.0)
            .tolerance(1e-6)
            .build()
            .unwrap();
        assert_eq!(l.max_path_length(), 2000.0);
        assert_eq!(l.max_step(), 10.0);
        assert_eq!(l.tolerance(), 1e-6);
    }

    #[test]
    fn builder_rejects_non_positive_lengths() {
        let r = PropagationLimits::builder().tolerance(0.0).build();
        assert!(r.unwrap_err().contains("tolerance"));
        let r = PropagationLimits::builder().max_step(f64::NAN).build();
        assert!(r.unwrap_err().contains("max_step"));
        let r = PropagationLimits::builder().max_path_length(-1.0).build();
        assert!(r.unwrap_err().contains("max_path_length"));
    }

    #[test]
    fn builder_rejects_step_longer_than_path() {
        let r = PropagationLimits::builder()
            .max_path_length(10.0)
            .max_step(20.0)
            .build();
        assert!(r.unwrap_err().contains("must not exceed"));
    }

    #[test]
    fn builder_rejects_zero_caps() {
        assert!(PropagationLimits::builder().max_iterations(0).build().is_err());
        assert!(PropagationLimits::builder().max_steps(0).build().is_err());
    }
}

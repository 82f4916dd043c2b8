use rand::Rng;

/// Decides whether a processing run ends in the error state.
pub trait OutcomeProvider: Send + Sync {
    fn should_fail(&self) -> bool;
}

/// Fails with a fixed probability. Out-of-range values are clamped and NaN
/// never fails.
#[derive(Debug, Clone, Copy)]
pub struct RandomOutcome {
    probability: f64,
}

impl RandomOutcome {
    pub fn new(probability: f64) -> Self {
        if probability.is_nan() {
            tracing::warn!("Error probability is NaN, processing will always succeed");
            return Self { probability: 0.0 };
        }
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl OutcomeProvider for RandomOutcome {
    fn should_fail(&self) -> bool {
        rand::thread_rng().gen_bool(self.probability)
    }
}

/// Always succeeds or always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedOutcome {
    Succeed,
    Fail,
}

impl OutcomeProvider for FixedOutcome {
    fn should_fail(&self) -> bool {
        matches!(self, FixedOutcome::Fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_outcome_extremes() {
        assert!(!RandomOutcome::new(0.0).should_fail());
        assert!(RandomOutcome::new(1.0).should_fail());
        // Out-of-range probabilities are clamped rather than panicking
        assert!(RandomOutcome::new(7.0).should_fail());
        assert!(!RandomOutcome::new(-1.0).should_fail());
        assert!(RandomOutcome::new(f64::INFINITY).should_fail());
    }

    #[test]
    fn test_nan_probability_never_fails() {
        let outcome = RandomOutcome::new(f64::NAN);
        for _ in 0..20 {
            assert!(!outcome.should_fail());
        }
    }

    #[test]
    fn test_fixed_outcome() {
        assert!(FixedOutcome::Fail.should_fail());
        assert!(!FixedOutcome::Succeed.should_fail());
    }
}

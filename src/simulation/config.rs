// src/simulation/config.rs

use crate::error::ProjectionError;

/// The fixed inputs of the attrition projection.
///
/// Rates are per-period fractions applied to the start-of-year workforce.
/// Using `u64` for the workforce makes a negative population unrepresentable,
/// so validation only has to police the rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub initial_workforce: u64,
    pub retirement_rate: f64,
    pub quit_rate: f64,
    pub years: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        // The canonical scenario: 2.98M insurance workers, 3.3% retirements
        // and 1% quits per year, projected over five years.
        Self {
            initial_workforce: 2_980_000,
            retirement_rate: 0.033,
            quit_rate: 0.01,
            years: 5,
        }
    }
}

impl SimulationParameters {
    /// Rejects rates outside `0 <= retirement + quit <= 1`.
    ///
    /// Today the parameters are compile-time constants, but the engine
    /// still refuses to run on nonsense so nothing silently breaks the day
    /// they become configurable.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !self.retirement_rate.is_finite() || !self.quit_rate.is_finite() {
            return Err(ProjectionError::InvalidParameters(format!(
                "rates must be finite (retirement {}, quit {})",
                self.retirement_rate, self.quit_rate
            )));
        }
        if self.retirement_rate < 0.0 || self.quit_rate < 0.0 {
            return Err(ProjectionError::InvalidParameters(format!(
                "rates must be non-negative (retirement {}, quit {})",
                self.retirement_rate, self.quit_rate
            )));
        }
        if self.retirement_rate + self.quit_rate > 1.0 {
            return Err(ProjectionError::InvalidParameters(format!(
                "combined attrition rate {} exceeds 1.0",
                self.retirement_rate + self.quit_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_are_the_canonical_scenario() {
        let params = SimulationParameters::default();
        assert_eq!(params.initial_workforce, 2_980_000);
        assert_eq!(params.retirement_rate, 0.033);
        assert_eq!(params.quit_rate, 0.01);
        assert_eq!(params.years, 5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_negative_rate() {
        let params = SimulationParameters {
            quit_rate: -0.01,
            ..SimulationParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ProjectionError::InvalidParameters(_))
        ));
    }

    #[test]
    fn rejects_combined_rate_above_one() {
        let params = SimulationParameters {
            retirement_rate: 0.7,
            quit_rate: 0.4,
            ..SimulationParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_rate() {
        let params = SimulationParameters {
            retirement_rate: f64::NAN,
            ..SimulationParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn total_attrition_of_exactly_one_is_allowed() {
        let params = SimulationParameters {
            retirement_rate: 0.6,
            quit_rate: 0.4,
            ..SimulationParameters::default()
        };
        assert!(params.validate().is_ok());
    }
}

//! ACO configuration.

use crate::error::{check_probability, Result, RoutineError};

/// Configuration for the ant-colony solver.
///
/// # Defaults
///
/// ```
/// use u_routine::aco::AntColonyConfig;
///
/// let config = AntColonyConfig::default();
/// assert_eq!(config.num_ants, 20);
/// assert_eq!(config.iterations, 30);
/// assert!((config.q0 - 0.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntColonyConfig {
    /// Ants constructing a solution per iteration.
    pub num_ants: usize,

    /// Number of iterations. No early stop.
    pub iterations: usize,

    /// Fraction of every trail removed per iteration (0.0–1.0).
    pub evaporation_rate: f64,

    /// Pheromone exponent.
    pub alpha: f64,

    /// Heuristic exponent.
    pub beta: f64,

    /// Probability of taking the most probable option instead of sampling.
    pub q0: f64,

    /// Trail value every cell starts with.
    pub initial_pheromone: f64,

    /// Floor applied to every cell after each update.
    pub min_pheromone: f64,

    /// Heuristic value of the "no course" option.
    pub empty_heuristic: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AntColonyConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            iterations: 30,
            evaporation_rate: 0.5,
            alpha: 1.0,
            beta: 2.0,
            q0: 0.9,
            initial_pheromone: 1.0,
            min_pheromone: 0.1,
            empty_heuristic: 0.1,
            seed: None,
        }
    }
}

impl AntColonyConfig {
    /// Sets the number of ants.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the pheromone and heuristic exponents.
    pub fn with_exponents(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets the exploitation probability.
    pub fn with_q0(mut self, q0: f64) -> Self {
        self.q0 = q0.clamp(0.0, 1.0);
        self
    }

    /// Sets the pheromone floor.
    pub fn with_min_pheromone(mut self, min: f64) -> Self {
        self.min_pheromone = min;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Zero ants or iterations are allowed and yield an empty search.
    pub fn validate(&self) -> Result<()> {
        check_probability("evaporation_rate", self.evaporation_rate)?;
        check_probability("q0", self.q0)?;
        check_finite("alpha", self.alpha)?;
        check_finite("beta", self.beta)?;
        check_positive("initial_pheromone", self.initial_pheromone)?;
        check_positive("min_pheromone", self.min_pheromone)?;
        check_finite("empty_heuristic", self.empty_heuristic)?;
        if self.empty_heuristic < 0.0 {
            return Err(RoutineError::InvalidConfig(
                "empty_heuristic must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RoutineError::InvalidConfig(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(RoutineError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AntColonyConfig::default();
        assert_eq!(config.num_ants, 20);
        assert_eq!(config.iterations, 30);
        assert!((config.evaporation_rate - 0.5).abs() < 1e-12);
        assert!((config.alpha - 1.0).abs() < 1e-12);
        assert!((config.beta - 2.0).abs() < 1e-12);
        assert!((config.q0 - 0.9).abs() < 1e-12);
        assert!((config.initial_pheromone - 1.0).abs() < 1e-12);
        assert!((config.min_pheromone - 0.1).abs() < 1e-12);
        assert!((config.empty_heuristic - 0.1).abs() < 1e-12);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_clamps() {
        let config = AntColonyConfig::default()
            .with_evaporation_rate(1.7)
            .with_q0(-0.2)
            .with_num_ants(5)
            .with_iterations(3)
            .with_seed(1);
        assert_eq!(config.evaporation_rate, 1.0);
        assert_eq!(config.q0, 0.0);
        assert_eq!(config.num_ants, 5);
        assert_eq!(config.iterations, 3);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        assert!(AntColonyConfig::default()
            .with_min_pheromone(0.0)
            .validate()
            .is_err());
        assert!(AntColonyConfig::default()
            .with_exponents(f64::NAN, 2.0)
            .validate()
            .is_err());
        let config = AntColonyConfig {
            q0: 1.5,
            ..AntColonyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RoutineError::InvalidConfig(_))
        ));
        let config = AntColonyConfig {
            empty_heuristic: -1.0,
            ..AntColonyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_budgets_are_valid() {
        let config = AntColonyConfig::default()
            .with_num_ants(0)
            .with_iterations(0);
        assert!(config.validate().is_ok());
    }
}

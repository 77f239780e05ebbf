//! GA configuration.
//!
//! [`GeneticConfig`] holds all parameters that control the generation loop.

use crate::error::{check_probability, Result, RoutineError};

/// Configuration for the genetic solver.
///
/// # Defaults
///
/// ```
/// use u_routine::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 40);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_routine::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(80)
///     .with_generations(60)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Number of generations after the initial population. No early stop.
    pub generations: usize,

    /// Individuals drawn (with replacement) per tournament.
    pub tournament_size: usize,

    /// Probability that a mating pair undergoes two-point crossover.
    pub crossover_rate: f64,

    /// Probability that an offspring is passed to mutation at all.
    pub mutation_rate: f64,

    /// Per-gene probability of resampling once an offspring is mutated.
    pub gene_mutation_rate: f64,

    /// Whether random genes may also draw the "no course" allele.
    ///
    /// Off by default: genes are drawn from the course indices only.
    pub allow_empty_slots: bool,

    /// Score populations with rayon (requires the `parallel` feature).
    ///
    /// Scoring is pure, so the result does not depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 40,
            tournament_size: 3,
            crossover_rate: 0.7,
            mutation_rate: 0.2,
            gene_mutation_rate: 0.2,
            allow_empty_slots: false,
            parallel: false,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-individual mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene resampling rate.
    pub fn with_gene_mutation_rate(mut self, rate: f64) -> Self {
        self.gene_mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Lets random genes leave a slot empty.
    pub fn with_empty_slots(mut self, allow: bool) -> Self {
        self.allow_empty_slots = allow;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Zero population or generations are allowed; they degrade to an empty
    /// search rather than an error.
    pub fn validate(&self) -> Result<()> {
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("gene_mutation_rate", self.gene_mutation_rate)?;
        if self.tournament_size == 0 {
            return Err(RoutineError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

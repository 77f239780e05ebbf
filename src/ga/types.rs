//! Core definitions for the GA.
//!
//! [`Individual`] is the unit of evolution; [`GaProblem`] is the contract
//! between the generation loop and the problem-specific operators.

use rand::Rng;

use crate::error::Result;
use crate::fitness::Gene;

/// A candidate assignment: one gene per slot plus its cached fitness.
///
/// Fitness is `None` until evaluated and is cleared whenever crossover or
/// mutation touches the genes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    pub genes: Vec<Gene>,
    fitness: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Fitness, or `-inf` when not yet evaluated. Higher is better.
    pub fn fitness(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    /// Stores an evaluated fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Marks the cached fitness stale.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    /// Whether the cached fitness is current.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }
}

/// Defines a GA problem over [`Individual`]s.
///
/// The runner owns selection, pairing and the rate checks; the problem owns
/// what a random individual looks like and what crossover and mutation do.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may score a
/// population in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Individual;

    /// Scores an individual. Higher is better.
    ///
    /// Returns an error on numeric failure so a corrupted score is never
    /// ranked.
    fn evaluate(&self, individual: &Individual) -> Result<f64>;

    /// Recombines two individuals in place.
    ///
    /// The default implementation leaves both unchanged.
    fn crossover<R: Rng>(&self, _a: &mut Individual, _b: &mut Individual, _rng: &mut R) {}

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the best fitness so far.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}

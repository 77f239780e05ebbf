//! Genetic solver.
//!
//! Evolves a population of slot assignments: tournament selection,
//! two-point crossover, per-gene resampling mutation, and a hall of fame
//! holding the best individual of the whole run.
//!
//! # Key Types
//!
//! - [`GeneticSolver`]: courses + schedule in, [`OptimizedRoutine`](crate::OptimizedRoutine) out
//! - [`GeneticConfig`]: population, generations and operator rates
//! - [`GaRunner`] / [`GaResult`]: the generation loop and its statistics
//! - [`GaProblem`] / [`Individual`]: the seam between loop and problem
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod solver;
mod types;

pub use config::GeneticConfig;
pub use problem::{random_gene, RoutineGaProblem};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::tournament;
pub use solver::GeneticSolver;
pub use types::{GaProblem, Individual};

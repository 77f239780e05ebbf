//! Ant Colony Optimization.
//!
//! Ants build a routine slot by slot, choosing a course (or nothing) with
//! probability proportional to `tau^alpha * eta^beta`, where `tau` is the
//! slot's pheromone trail and `eta` the course weight. Trails evaporate each
//! iteration and are reinforced by the ants in proportion to their fitness.
//!
//! # Architecture
//!
//! - [`AntColonyConfig`]: colony size, iterations, exponents, trail limits
//! - [`PheromoneMatrix`] / [`HeuristicTable`]: per-option desirability
//! - [`AcoRunner`]: the iteration loop
//! - [`AntColonySolver`]: courses + schedule in, [`OptimizedRoutine`] out
//!
//! [`OptimizedRoutine`]: crate::solver::OptimizedRoutine

mod config;
mod pheromone;
mod runner;
mod solver;

pub use config::AntColonyConfig;
pub use pheromone::{gene_of, option_index, HeuristicTable, PheromoneMatrix};
pub use runner::{AcoResult, AcoRunner, IterationStats};
pub use solver::AntColonySolver;

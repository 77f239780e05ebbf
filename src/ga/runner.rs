//! GA generation loop.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → evaluation → {selection → crossover → mutation →
//! evaluation} × generations.
//!
//! Each generation the offspring replace the whole population; the best
//! individual ever seen is kept aside in a hall of fame of size one.

use log::{debug, info};
use rand::Rng;

use super::config::GeneticConfig;
use super::selection::tournament;
use super::types::{GaProblem, Individual};
use crate::error::Result;
use crate::random::create_rng;

/// Fitness summary of one population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
}

impl GenerationStats {
    fn of(generation: usize, population: &[Individual]) -> Self {
        let (mut best, mut worst, mut sum) = (f64::NEG_INFINITY, f64::INFINITY, 0.0);
        for ind in population {
            let f = ind.fitness();
            best = best.max(f);
            worst = worst.min(f);
            sum += f;
        }
        let mean = if population.is_empty() {
            0.0
        } else {
            sum / population.len() as f64
        };
        Self {
            generation,
            best,
            mean,
            worst,
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Hall of fame: the best individual seen in any generation.
    ///
    /// `None` only when the population size is zero.
    pub best: Option<Individual>,

    /// Fitness of `best`, or `-inf` when there is none.
    pub best_fitness: f64,

    /// Generations executed after the initial population.
    pub generations: usize,

    /// Number of fitness evaluations performed.
    pub evaluations: usize,

    /// Per-generation statistics, starting with the initial population.
    pub history: Vec<GenerationStats>,
}

/// Executes the GA generation loop.
///
/// # Usage
///
/// ```ignore
/// let problem = RoutineGaProblem::new(FitnessEvaluator::new(&domain), &config);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA for exactly `config.generations` generations.
    pub fn run<P: GaProblem>(problem: &P, config: &GeneticConfig) -> Result<GaResult> {
        config.validate()?;
        let mut rng = create_rng(config.seed);

        info!(
            "GA start: population={}, generations={}",
            config.population_size, config.generations
        );

        // 1. Initialize and evaluate population
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        let mut evaluations = evaluate_population(problem, &mut population, config.parallel)?;

        // 2. Seed the hall of fame
        let mut hall_of_fame: Option<Individual> = None;
        update_hall_of_fame(&mut hall_of_fame, &population);

        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(GenerationStats::of(0, &population));

        // 3. Generation loop
        let mut generations = 0;
        if !population.is_empty() {
            for gen in 1..=config.generations {
                let mut offspring = breed(problem, &population, config, &mut rng);
                evaluations += evaluate_population(problem, &mut offspring, config.parallel)?;

                update_hall_of_fame(&mut hall_of_fame, &offspring);
                population = offspring;

                let stats = GenerationStats::of(gen, &population);
                let best_fitness = best_fitness(&hall_of_fame);
                debug!(
                    "GA generation {gen}: best={best_fitness:.3} gen_best={:.3} mean={:.3}",
                    stats.best, stats.mean
                );
                history.push(stats);
                problem.on_generation(gen, best_fitness);
                generations = gen;
            }
        }

        let best_fitness = best_fitness(&hall_of_fame);
        info!("GA done: best={best_fitness:.3}, evaluations={evaluations}");

        Ok(GaResult {
            best: hall_of_fame,
            best_fitness,
            generations,
            evaluations,
            history,
        })
    }
}

/// Builds the next generation: select, clone, pair-wise crossover, mutate.
fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[Individual],
    config: &GeneticConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let mut offspring: Vec<Individual> = (0..population.len())
        .map(|_| population[tournament(population, config.tournament_size, rng)].clone())
        .collect();

    for pair in offspring.chunks_exact_mut(2) {
        if rng.random_bool(config.crossover_rate) {
            let (left, right) = pair.split_at_mut(1);
            problem.crossover(&mut left[0], &mut right[0], rng);
            left[0].invalidate();
            right[0].invalidate();
        }
    }

    for child in offspring.iter_mut() {
        if rng.random_bool(config.mutation_rate) {
            problem.mutate(child, rng);
            child.invalidate();
        }
    }

    offspring
}

/// Scores every individual whose fitness is stale. Returns how many were
/// scored.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [Individual],
    parallel: bool,
) -> Result<usize> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            return population
                .par_iter_mut()
                .filter(|ind| !ind.is_evaluated())
                .map(|ind| -> Result<usize> {
                    let f = problem.evaluate(ind)?;
                    ind.set_fitness(f);
                    Ok(1)
                })
                .sum();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    let mut count = 0;
    for ind in population.iter_mut().filter(|ind| !ind.is_evaluated()) {
        let f = problem.evaluate(ind)?;
        ind.set_fitness(f);
        count += 1;
    }
    Ok(count)
}

/// Replaces the hall of fame only on strict improvement, so the earliest
/// individual reaching a fitness is kept.
fn update_hall_of_fame(hall_of_fame: &mut Option<Individual>, population: &[Individual]) {
    for ind in population {
        let better = match hall_of_fame {
            Some(best) => ind.fitness() > best.fitness(),
            None => true,
        };
        if better {
            *hall_of_fame = Some(ind.clone());
        }
    }
}

fn best_fitness(hall_of_fame: &Option<Individual>) -> f64 {
    hall_of_fame
        .as_ref()
        .map_or(f64::NEG_INFINITY, Individual::fitness)
}

// ============================================================================
// Tests
// ============================================================================

//! Ant-colony iteration loop.
//!
//! Per iteration every ant walks the slots in order and picks one option per
//! slot from `tau^alpha * eta^beta`; with probability `q0` it takes the most
//! probable option, otherwise it samples. All ants are scored, trails
//! evaporate, each ant deposits its normalized fitness on the cells it used,
//! and trails are floored at `min_pheromone`.
//!
//! # References
//!
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative Learning
//!   Approach to the Traveling Salesman Problem"

use log::{debug, info};
use rand::Rng;

use super::config::AntColonyConfig;
use super::pheromone::{gene_of, option_index, HeuristicTable, PheromoneMatrix};
use crate::error::{Result, RoutineError};
use crate::fitness::{FitnessEvaluator, Gene};
use crate::random::create_rng;

/// Fitness summary of one iteration's ants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    /// Iteration number, starting at 1.
    pub iteration: usize,
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
}

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best assignment seen in any iteration; `None` if no ant ever ran.
    pub best: Option<Vec<Gene>>,

    /// Fitness of `best`, or `-inf` when there is none.
    pub best_fitness: f64,

    /// Iterations executed.
    pub iterations: usize,

    /// Number of fitness evaluations performed.
    pub evaluations: usize,

    /// Per-iteration statistics.
    pub history: Vec<IterationStats>,

    /// Trails after the final update.
    pub pheromones: PheromoneMatrix,
}

/// Executes the ACO loop.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs exactly `config.iterations` iterations of `config.num_ants` ants.
    ///
    /// The heuristic table is built once from the evaluator's weight
    /// snapshot, the same weights used for scoring.
    pub fn run(evaluator: &FitnessEvaluator<'_>, config: &AntColonyConfig) -> Result<AcoResult> {
        config.validate()?;
        let mut rng = create_rng(config.seed);

        let domain = evaluator.domain();
        let num_slots = domain.num_slots();
        let num_courses = domain.num_courses();

        let heuristic = HeuristicTable::from_weights(domain.weights(), config.empty_heuristic);
        let mut pheromones =
            PheromoneMatrix::new(num_slots, num_courses, config.initial_pheromone);

        info!(
            "ACO start: ants={}, iterations={}, slots={num_slots}, courses={num_courses}",
            config.num_ants, config.iterations
        );

        let mut best: Option<Vec<Gene>> = None;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut history = Vec::with_capacity(config.iterations);
        let mut evaluations = 0;
        let mut iterations = 0;

        if config.num_ants > 0 {
            let mut weights = vec![0.0; heuristic.values().len()];
            for iteration in 1..=config.iterations {
                // 1. Construct
                let mut solutions = Vec::with_capacity(config.num_ants);
                for _ in 0..config.num_ants {
                    solutions.push(construct_solution(
                        &pheromones,
                        &heuristic,
                        config,
                        &mut weights,
                        &mut rng,
                    )?);
                }

                // 2. Evaluate
                let fitnesses = solutions
                    .iter()
                    .map(|s| evaluator.checked_score(s))
                    .collect::<Result<Vec<f64>>>()?;
                evaluations += fitnesses.len();

                // 3. Track the best ever seen
                let (iter_best, iter_best_fitness) = first_max(&fitnesses);
                if iter_best_fitness > best_fitness {
                    best_fitness = iter_best_fitness;
                    best = Some(solutions[iter_best].clone());
                }

                // 4. Update trails
                update_pheromones(&mut pheromones, &solutions, &fitnesses, config);

                let stats = IterationStats::of(iteration, &fitnesses);
                debug!(
                    "ACO iteration {iteration}: best={best_fitness:.3} iter_best={:.3} mean={:.3}",
                    stats.best, stats.mean
                );
                history.push(stats);
                iterations = iteration;
            }
        }

        info!("ACO done: best={best_fitness:.3}, evaluations={evaluations}");

        Ok(AcoResult {
            best,
            best_fitness,
            iterations,
            evaluations,
            history,
            pheromones,
        })
    }
}

impl IterationStats {
    fn of(iteration: usize, fitnesses: &[f64]) -> Self {
        let best = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = fitnesses.iter().sum::<f64>() / fitnesses.len().max(1) as f64;
        Self {
            iteration,
            best,
            mean,
            worst,
        }
    }
}

/// One ant's walk over all slots.
///
/// `weights` is scratch space of length `num_options`.
pub(crate) fn construct_solution<R: Rng>(
    pheromones: &PheromoneMatrix,
    heuristic: &HeuristicTable,
    config: &AntColonyConfig,
    weights: &mut [f64],
    rng: &mut R,
) -> Result<Vec<Gene>> {
    let num_courses = pheromones.num_options() - 1;
    let eta = heuristic.values();

    (0..pheromones.num_slots())
        .map(|slot| {
            let tau = pheromones.row(slot);
            let mut total = 0.0;
            for (w, (&t, &e)) in weights.iter_mut().zip(tau.iter().zip(eta)) {
                *w = t.powf(config.alpha) * e.powf(config.beta);
                total += *w;
            }
            if !(total.is_finite() && total > 0.0) {
                return Err(RoutineError::DegenerateDistribution { slot });
            }

            let option = if rng.random_bool(config.q0) {
                first_max(weights).0
            } else {
                sample_index(weights, total, rng)
            };
            Ok(gene_of(option, num_courses))
        })
        .collect()
}

/// Index and value of the first maximum.
///
/// Probabilities are weights divided by one positive total, so the arg-max
/// of the weights is the arg-max of the distribution.
fn first_max(values: &[f64]) -> (usize, f64) {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, &v) in values.iter().enumerate() {
        if v > best.1 {
            best = (i, v);
        }
    }
    best
}

/// Roulette draw proportional to `weights`, whose sum is `total`.
fn sample_index<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    // floating-point fallback: last option with any weight
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}

/// Evaporates, deposits each ant's normalized fitness, then floors trails.
///
/// Deposits are `fitness / max_fitness` when the iteration maximum is
/// positive and the raw fitness otherwise, so a colony of negative
/// solutions drains the cells it used down to the floor.
pub(crate) fn update_pheromones(
    pheromones: &mut PheromoneMatrix,
    solutions: &[Vec<Gene>],
    fitnesses: &[f64],
    config: &AntColonyConfig,
) {
    pheromones.evaporate(config.evaporation_rate);

    let num_courses = pheromones.num_options() - 1;
    let max_fitness = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    for (solution, &fitness) in solutions.iter().zip(fitnesses) {
        let amount = if max_fitness > 0.0 {
            fitness / max_fitness
        } else {
            fitness
        };
        for (slot, &gene) in solution.iter().enumerate() {
            pheromones.deposit(slot, option_index(gene, num_courses), amount);
        }
    }

    pheromones.clamp_min(config.min_pheromone);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Course, ScheduleConfig, ScheduleDomain};

    fn domain(weights: &[f64], days: &[&str]) -> ScheduleDomain {
        let courses: Vec<Course> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Course::new(format!("C{i}"), w))
            .collect();
        let config = ScheduleConfig::default()
            .with_days(days.iter().copied())
            .with_dinner_hour(8);
        ScheduleDomain::new(&courses, &config)
    }

    #[test]
    fn test_exploitation_picks_heaviest_course() {
        let d = domain(&[3.0, 5.0], &["Monday"]);
        let config = AntColonyConfig::default().with_q0(1.0);
        let heuristic = HeuristicTable::from_weights(d.weights(), config.empty_heuristic);
        let pheromones = PheromoneMatrix::new(d.num_slots(), d.num_courses(), 1.0);
        let mut weights = vec![0.0; 3];
        let mut rng = create_rng(Some(1));

        let solution =
            construct_solution(&pheromones, &heuristic, &config, &mut weights, &mut rng).unwrap();
        assert_eq!(solution, vec![Some(1); 5]);
    }

    #[test]
    fn test_exploitation_tie_takes_first() {
        let d = domain(&[4.0, 4.0], &["Monday"]);
        let config = AntColonyConfig::default().with_q0(1.0);
        let heuristic = HeuristicTable::from_weights(d.weights(), config.empty_heuristic);
        let pheromones = PheromoneMatrix::new(d.num_slots(), d.num_courses(), 1.0);
        let mut weights = vec![0.0; 3];
        let mut rng = create_rng(Some(1));

        let solution =
            construct_solution(&pheromones, &heuristic, &config, &mut weights, &mut rng).unwrap();
        assert_eq!(solution, vec![Some(0); 5]);
    }

    #[test]
    fn test_exploration_follows_distribution() {
        // Weights 2 and 1 with beta = 2 -> 4 : 1 : 0.01.
        let d = domain(&[2.0, 1.0], &["Monday"]);
        let config = AntColonyConfig::default().with_q0(0.0);
        let heuristic = HeuristicTable::from_weights(d.weights(), config.empty_heuristic);
        let pheromones = PheromoneMatrix::new(d.num_slots(), d.num_courses(), 1.0);
        let mut weights = vec![0.0; 3];
        let mut rng = create_rng(Some(42));

        let mut counts = [0usize; 3];
        for _ in 0..2000 {
            let s = construct_solution(&pheromones, &heuristic, &config, &mut weights, &mut rng)
                .unwrap();
            for g in s {
                counts[option_index(g, 2)] += 1;
            }
        }
        let total = counts.iter().sum::<usize>() as f64;
        let share = counts[0] as f64 / total;
        assert!((0.75..0.85).contains(&share), "share {share}, counts {counts:?}");
        assert!(counts[1] > counts[2]);
    }

    #[test]
    fn test_nan_weight_is_degenerate() {
        let d = domain(&[f64::NAN], &["Monday"]);
        let config = AntColonyConfig::default();
        let heuristic = HeuristicTable::from_weights(d.weights(), config.empty_heuristic);
        let pheromones = PheromoneMatrix::new(d.num_slots(), d.num_courses(), 1.0);
        let mut weights = vec![0.0; 2];
        let mut rng = create_rng(Some(1));

        assert_eq!(
            construct_solution(&pheromones, &heuristic, &config, &mut weights, &mut rng),
            Err(RoutineError::DegenerateDistribution { slot: 0 })
        );
    }

    #[test]
    fn test_update_normalizes_by_positive_max() {
        let config = AntColonyConfig::default();
        let mut m = PheromoneMatrix::new(2, 1, 1.0);
        let solutions = vec![vec![Some(0), None], vec![Some(0), Some(0)]];
        update_pheromones(&mut m, &solutions, &[4.0, 2.0], &config);

        // 0.5 after evaporation, + 1.0 and + 0.5 deposits
        assert!((m.get(0, 0) - 2.0).abs() < 1e-12);
        assert!((m.get(1, 1) - 1.5).abs() < 1e-12);
        assert!((m.get(1, 0) - 1.0).abs() < 1e-12);
        assert!((m.get(0, 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_update_deposits_raw_when_max_not_positive() {
        let config = AntColonyConfig::default();
        let mut m = PheromoneMatrix::new(1, 1, 1.0);
        update_pheromones(&mut m, &[vec![Some(0)]], &[-3.0], &config);
        assert_eq!(m.get(0, 0), 0.1);
        assert_eq!(m.get(0, 1), 0.5);
    }

    #[test]
    fn test_trails_never_drop_below_floor() {
        let d = domain(&[5.0, 3.0, 1.0], &["Monday", "Tuesday"]);
        let result = AcoRunner::run(
            &FitnessEvaluator::new(&d),
            &AntColonyConfig::default().with_seed(9),
        )
        .unwrap();
        assert!(result.pheromones.min_value().unwrap() >= 0.1);
    }

    #[test]
    fn test_best_is_consistent() {
        let d = domain(&[5.0, 3.0, 2.0], &["Monday", "Tuesday", "Wednesday"]);
        let evaluator = FitnessEvaluator::new(&d);
        let result = AcoRunner::run(&evaluator, &AntColonyConfig::default().with_seed(5)).unwrap();

        assert_eq!(result.iterations, 30);
        assert_eq!(result.evaluations, 600);
        assert_eq!(result.history.len(), 30);

        let best = result.best.unwrap();
        assert_eq!(best.len(), 15);
        assert_eq!(evaluator.score(&best), result.best_fitness);
        let max_seen = result
            .history
            .iter()
            .map(|s| s.best)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.best_fitness, max_seen);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let d = domain(&[5.0, 3.0], &["Monday", "Tuesday"]);
        let evaluator = FitnessEvaluator::new(&d);
        let config = AntColonyConfig::default().with_seed(11);
        let a = AcoRunner::run(&evaluator, &config).unwrap();
        let b = AcoRunner::run(&evaluator, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
        assert_eq!(a.pheromones, b.pheromones);
    }

    #[test]
    fn test_no_ants_runs_nothing() {
        let d = domain(&[5.0], &["Monday"]);
        let result = AcoRunner::run(
            &FitnessEvaluator::new(&d),
            &AntColonyConfig::default().with_num_ants(0),
        )
        .unwrap();
        assert!(result.best.is_none());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.evaluations, 0);
    }
}

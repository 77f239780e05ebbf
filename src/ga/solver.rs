//! Genetic routine solver.

use log::warn;

use super::config::GeneticConfig;
use super::problem::RoutineGaProblem;
use super::runner::{GaResult, GaRunner};
use crate::error::Result;
use crate::fitness::FitnessEvaluator;
use crate::schedule::{Course, ScheduleConfig, ScheduleDomain, WeightedCourse};
use crate::solver::{OptimizedRoutine, RoutineOptimizer};

/// Assigns courses to evening slots with a genetic algorithm.
///
/// The solver holds the courses and the schedule; every `optimize` call
/// rebuilds the domain from the courses' current weights and evolves a fresh
/// population.
///
/// # Examples
///
/// ```
/// use u_routine::ga::GeneticSolver;
/// use u_routine::schedule::{Course, ScheduleConfig};
///
/// let courses = vec![Course::new("CSE110", 5.0), Course::new("MAT120", 3.0)];
/// let schedule = ScheduleConfig::default().with_days(["Monday"]).with_dinner_hour(8);
///
/// let solver = GeneticSolver::new(courses, schedule);
/// let result = solver.optimize(10, 5).unwrap();
/// assert!(result.fitness >= 0.0);
/// assert!(result.routine.len() <= 5);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver<C = Course> {
    courses: Vec<C>,
    schedule: ScheduleConfig,
    config: GeneticConfig,
}

impl<C: WeightedCourse> GeneticSolver<C> {
    /// Creates a solver with the default budget (population 50,
    /// 40 generations).
    pub fn new(courses: impl IntoIterator<Item = C>, schedule: ScheduleConfig) -> Self {
        Self {
            courses: courses.into_iter().collect(),
            schedule,
            config: GeneticConfig::default(),
        }
    }

    /// Replaces the algorithm configuration.
    pub fn with_config(mut self, config: GeneticConfig) -> Self {
        self.config = config;
        self
    }

    /// The algorithm configuration.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// The courses being scheduled.
    pub fn courses(&self) -> &[C] {
        &self.courses
    }

    /// Mutable access to the courses, e.g. to update weights between runs.
    pub fn courses_mut(&mut self) -> &mut [C] {
        &mut self.courses
    }

    /// The schedule configuration.
    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// Builds the domain from the courses' current weights.
    pub fn domain(&self) -> ScheduleDomain {
        ScheduleDomain::new(&self.courses, &self.schedule)
    }

    /// Runs with the given population size and generation count; other
    /// parameters come from the solver's configuration.
    pub fn optimize(&self, population_size: usize, generations: usize) -> Result<OptimizedRoutine> {
        let config = self
            .config
            .clone()
            .with_population_size(population_size)
            .with_generations(generations);
        self.run(&config)
    }

    /// Runs with an explicit configuration.
    pub fn run(&self, config: &GeneticConfig) -> Result<OptimizedRoutine> {
        self.run_detailed(config).map(|(routine, _)| routine)
    }

    /// Runs with an explicit configuration and also returns the runner's
    /// statistics. Statistics are `None` for degenerate input.
    pub fn run_detailed(
        &self,
        config: &GeneticConfig,
    ) -> Result<(OptimizedRoutine, Option<GaResult>)> {
        config.validate()?;
        let domain = self.domain();
        if domain.is_degenerate() {
            warn!(
                "nothing to schedule: {} courses, {} slots",
                domain.num_courses(),
                domain.num_slots()
            );
            return Ok((OptimizedRoutine::empty(), None));
        }

        let evaluator = FitnessEvaluator::new(&domain);
        let problem = RoutineGaProblem::new(evaluator, config);
        let result = GaRunner::run(&problem, config)?;

        let routine = match &result.best {
            Some(best) => OptimizedRoutine::from(evaluator.evaluate(&best.genes)),
            None => OptimizedRoutine::empty(),
        };
        Ok((routine, Some(result)))
    }
}

impl<C: WeightedCourse> RoutineOptimizer for GeneticSolver<C> {
    fn optimize_routine(&self) -> Result<OptimizedRoutine> {
        self.run(&self.config)
    }

    fn name(&self) -> &'static str {
        "genetic"
    }
}

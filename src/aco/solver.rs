//! Ant-colony routine solver.

use log::warn;

use super::config::AntColonyConfig;
use super::runner::{AcoResult, AcoRunner};
use crate::error::Result;
use crate::fitness::FitnessEvaluator;
use crate::schedule::{Course, ScheduleConfig, ScheduleDomain, WeightedCourse};
use crate::solver::{OptimizedRoutine, RoutineOptimizer};

/// Assigns courses to evening slots with ant-colony optimization.
///
/// Like [`GeneticSolver`](crate::ga::GeneticSolver), each call rebuilds the
/// domain from current weights and starts from uniform trails.
///
/// # Examples
///
/// ```
/// use u_routine::aco::AntColonySolver;
/// use u_routine::schedule::{Course, ScheduleConfig};
///
/// let courses = vec![Course::new("CSE110", 5.0), Course::new("MAT120", 3.0)];
/// let schedule = ScheduleConfig::default().with_days(["Monday"]).with_dinner_hour(8);
///
/// let result = AntColonySolver::new(courses, schedule).optimize(5).unwrap();
/// assert!(result.routine.len() <= 5);
/// ```
#[derive(Debug, Clone)]
pub struct AntColonySolver<C = Course> {
    courses: Vec<C>,
    schedule: ScheduleConfig,
    config: AntColonyConfig,
}

impl<C: WeightedCourse> AntColonySolver<C> {
    /// Creates a solver with the default budget (20 ants, 30 iterations).
    pub fn new(courses: impl IntoIterator<Item = C>, schedule: ScheduleConfig) -> Self {
        Self {
            courses: courses.into_iter().collect(),
            schedule,
            config: AntColonyConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AntColonyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AntColonyConfig {
        &self.config
    }

    pub fn courses(&self) -> &[C] {
        &self.courses
    }

    pub fn courses_mut(&mut self) -> &mut [C] {
        &mut self.courses
    }

    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// Builds the domain from the courses' current weights.
    pub fn domain(&self) -> ScheduleDomain {
        ScheduleDomain::new(&self.courses, &self.schedule)
    }

    /// Runs `iterations` iterations with the configured colony.
    pub fn optimize(&self, iterations: usize) -> Result<OptimizedRoutine> {
        let config = self.config.clone().with_iterations(iterations);
        self.run(&config)
    }

    /// Runs with an explicit configuration.
    pub fn run(&self, config: &AntColonyConfig) -> Result<OptimizedRoutine> {
        self.run_detailed(config).map(|(routine, _)| routine)
    }

    /// Runs and also returns the colony statistics and final trails.
    /// Statistics are `None` for degenerate input.
    pub fn run_detailed(
        &self,
        config: &AntColonyConfig,
    ) -> Result<(OptimizedRoutine, Option<AcoResult>)> {
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
        let result = AcoRunner::run(&evaluator, config)?;

        let routine = match &result.best {
            Some(best) => OptimizedRoutine::from(evaluator.evaluate(best)),
            None => OptimizedRoutine::empty(),
        };
        Ok((routine, Some(result)))
    }
}

impl<C: WeightedCourse> RoutineOptimizer for AntColonySolver<C> {
    fn optimize_routine(&self) -> Result<OptimizedRoutine> {
        self.run(&self.config)
    }

    fn name(&self) -> &'static str {
        "ant_colony"
    }
}

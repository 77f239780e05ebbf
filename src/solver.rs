//! The contract shared by both routine solvers.
//!
//! [`GeneticSolver`] and [`AntColonySolver`] take the same inputs (courses
//! plus a [`ScheduleConfig`]) and produce the same output, an
//! [`OptimizedRoutine`]. [`optimize_routine`] picks one by [`Algorithm`].

use std::fmt;
use std::str::FromStr;

use crate::aco::AntColonySolver;
use crate::error::{Result, RoutineError};
use crate::fitness::{Evaluation, Routine};
use crate::ga::GeneticSolver;
use crate::schedule::{slot_key, ScheduleConfig, WeightedCourse};

/// A solver's answer: the best routine found and its fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizedRoutine {
    /// Slot key → course code; unassigned slots are absent.
    pub routine: Routine,
    /// Included-course weight minus the consecutive-run penalty.
    pub fitness: f64,
}

impl OptimizedRoutine {
    /// The result for inputs with nothing to schedule.
    pub fn empty() -> Self {
        Self {
            routine: Routine::new(),
            fitness: 0.0,
        }
    }

    /// Course assigned to `(day, hour)`, if any.
    pub fn course_at(&self, day: &str, hour: u32) -> Option<&str> {
        self.routine.get(&slot_key(day, hour)).map(String::as_str)
    }

    /// Number of assigned slots.
    pub fn len(&self) -> usize {
        self.routine.len()
    }

    /// Returns `true` if no slot was assigned.
    pub fn is_empty(&self) -> bool {
        self.routine.is_empty()
    }

    /// Splits into `(routine, fitness)`.
    pub fn into_parts(self) -> (Routine, f64) {
        (self.routine, self.fitness)
    }
}

impl From<Evaluation> for OptimizedRoutine {
    fn from(eval: Evaluation) -> Self {
        Self {
            routine: eval.routine,
            fitness: eval.fitness,
        }
    }
}

/// Common interface of the routine solvers.
///
/// Every call re-reads the course weights and starts from fresh search
/// state, so one solver may be reused after the courses change.
pub trait RoutineOptimizer {
    /// Runs the solver with its configured budget.
    fn optimize_routine(&self) -> Result<OptimizedRoutine>;

    /// Short algorithm name for logs.
    fn name(&self) -> &'static str;
}

/// Which solver to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    #[default]
    Genetic,
    AntColony,
}

impl Algorithm {
    /// Name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Genetic => "genetic",
            Algorithm::AntColony => "ant_colony",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = RoutineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "genetic" => Ok(Algorithm::Genetic),
            "ant_colony" => Ok(Algorithm::AntColony),
            other => Err(RoutineError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Runs `algorithm` with its default budget.
///
/// Genetic: population 50, 40 generations. Ant colony: 20 ants,
/// 30 iterations.
pub fn optimize_routine<C: WeightedCourse>(
    algorithm: Algorithm,
    courses: &[C],
    schedule: &ScheduleConfig,
) -> Result<OptimizedRoutine> {
    let solver: Box<dyn RoutineOptimizer + '_> = match algorithm {
        Algorithm::Genetic => Box::new(GeneticSolver::new(courses, schedule.clone())),
        Algorithm::AntColony => Box::new(AntColonySolver::new(courses, schedule.clone())),
    };
    log::info!("optimizing routine with {}", solver.name());
    solver.optimize_routine()
}

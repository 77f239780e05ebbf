//! Weekly study-routine optimization.
//!
//! Assigns a student's courses to the evening study slots of a week so that
//! heavily weighted courses get time and no course fills a long unbroken
//! stretch of hours. Two interchangeable solvers search the assignment
//! space:
//!
//! - **Genetic Algorithm (GA)**: population-based search with tournament
//!   selection, two-point crossover and resampling mutation.
//! - **Ant Colony Optimization (ACO)**: slot-by-slot construction guided by
//!   pheromone trails and course weights.
//!
//! Both score candidates with the same [`FitnessEvaluator`] and return an
//! [`OptimizedRoutine`]: a map from slot keys such as `"Monday_6"` to course
//! codes, plus its fitness.
//!
//! # Quick Start
//!
//! ```
//! use u_routine::schedule::{Course, EventKind, ScheduleConfig};
//! use u_routine::{optimize_routine, Algorithm};
//!
//! let mut courses = vec![Course::new("CSE110", 3.0), Course::new("MAT120", 3.0)];
//! courses[0].register_event(EventKind::Quiz);
//!
//! let schedule = ScheduleConfig::default().with_days(["Monday", "Tuesday"]);
//! let result = optimize_routine(Algorithm::Genetic, &courses, &schedule).unwrap();
//! assert!(result.routine.len() <= 10);
//! ```
//!
//! # Architecture
//!
//! - [`schedule`]: courses, events and the slot grid
//! - [`fitness`]: the shared objective
//! - [`ga`] / [`aco`]: the two solvers
//! - [`solver`]: the common result type, trait and dispatch

pub mod aco;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod random;
pub mod schedule;
pub mod solver;

pub use error::{Result, RoutineError};
pub use fitness::{Evaluation, FitnessEvaluator, Gene, Routine};
pub use solver::{optimize_routine, Algorithm, OptimizedRoutine, RoutineOptimizer};

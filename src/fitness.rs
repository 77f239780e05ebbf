//! Routine fitness evaluation.
//!
//! One evaluator is shared by both solvers. Fitness is the summed weight of
//! every *distinct* course present in the routine, minus a penalty for runs
//! of consecutive slots given to the same course on the same day.
//!
//! # Run penalty
//!
//! | run length | penalty |
//! |-----------:|--------:|
//! | 1          | 0       |
//! | 2          | 4       |
//! | 3          | 6       |
//! | 4          | 8       |
//! | ≥ 5        | 10      |
//!
//! Runs are measured over each day's slot sequence, so two slots on either
//! side of the dinner hour are consecutive. An empty slot ends a run.

use std::collections::BTreeMap;

use crate::error::{Result, RoutineError};
use crate::schedule::ScheduleDomain;

/// One slot's allele: the assigned course index, or `None` for no course.
pub type Gene = Option<usize>;

/// Slot key → course code, holding only slots that received a course.
pub type Routine = BTreeMap<String, String>;

/// Penalty for a completed run of `len` same-course slots.
pub fn run_penalty(len: usize) -> f64 {
    match len {
        0 | 1 => 0.0,
        2 => 4.0,
        3 => 6.0,
        4 => 8.0,
        _ => 10.0,
    }
}

/// Fitness of an assignment together with its decoded routine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub fitness: f64,
    pub routine: Routine,
}

/// Scores slot assignments against one [`ScheduleDomain`].
///
/// Pure and deterministic; the weights come from the domain's snapshot, so
/// nothing is rebuilt per call.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'d> {
    domain: &'d ScheduleDomain,
}

impl<'d> FitnessEvaluator<'d> {
    pub fn new(domain: &'d ScheduleDomain) -> Self {
        Self { domain }
    }

    /// The domain being scored.
    pub fn domain(&self) -> &'d ScheduleDomain {
        self.domain
    }

    /// Resolves a gene to a course index, treating out-of-range as empty.
    #[inline]
    fn course_of(&self, gene: Gene) -> Option<usize> {
        gene.filter(|&c| c < self.domain.num_courses())
    }

    /// Weight of every distinct course that appears at least once.
    ///
    /// Courses are told apart by index, which equals telling them apart by
    /// code as long as codes are unique within the course list. The run
    /// scan in [`penalty`](Self::penalty) relies on the same assumption.
    pub fn included_weight(&self, genes: &[Gene]) -> f64 {
        let mut seen = vec![false; self.domain.num_courses()];
        for &gene in genes {
            if let Some(c) = self.course_of(gene) {
                seen[c] = true;
            }
        }
        let weights = self.domain.weights().as_slice();
        seen.iter()
            .zip(weights)
            .filter(|(included, _)| **included)
            .map(|(_, w)| *w)
            .sum()
    }

    /// Total consecutive-run penalty across all days.
    pub fn penalty(&self, genes: &[Gene]) -> f64 {
        let per_day = self.domain.grid().slots_per_day();
        if per_day == 0 {
            return 0.0;
        }

        let mut penalty = 0.0;
        for day in genes.chunks(per_day) {
            let mut run = 1usize;
            let mut prev: Option<usize> = None;
            for &gene in day {
                let current = self.course_of(gene);
                if current.is_some() && current == prev {
                    run += 1;
                } else {
                    penalty += run_penalty(run);
                    run = 1;
                }
                prev = current;
            }
            penalty += run_penalty(run);
        }
        penalty
    }

    /// Fitness without building the routine. Used in the search loops.
    pub fn score(&self, genes: &[Gene]) -> f64 {
        self.included_weight(genes) - self.penalty(genes)
    }

    /// Like [`score`](Self::score), but rejects NaN and infinities.
    pub fn checked_score(&self, genes: &[Gene]) -> Result<f64> {
        let value = self.score(genes);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(RoutineError::NonFiniteFitness { value })
        }
    }

    /// Maps assigned slots to course codes, omitting empty slots.
    pub fn decode(&self, genes: &[Gene]) -> Routine {
        let slots = self.domain.grid().slots();
        let codes = self.domain.course_codes();
        genes
            .iter()
            .zip(slots)
            .filter_map(|(&gene, slot)| {
                self.course_of(gene)
                    .map(|c| (slot.key.clone(), codes[c].clone()))
            })
            .collect()
    }

    /// Scores an assignment and decodes its routine.
    pub fn evaluate(&self, genes: &[Gene]) -> Evaluation {
        Evaluation {
            fitness: self.score(genes),
            routine: self.decode(genes),
        }
    }
}

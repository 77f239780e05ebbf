//! GA problem definition for study routines.
//!
//! Implements [`GaProblem`] over the shared [`FitnessEvaluator`]: one gene per
//! slot, genes drawn uniformly from the course indices (optionally also the
//! "no course" allele).
//!
//! # Operators
//!
//! - **Crossover**: two-point crossover of the slot genomes
//! - **Mutation**: independent per-gene resampling
//! - **Evaluation**: included-course weight minus consecutive-run penalty

use log::trace;
use rand::Rng;

use super::config::GeneticConfig;
use super::operators::{resample_mutation, two_point_crossover};
use super::types::{GaProblem, Individual};
use crate::error::Result;
use crate::fitness::{FitnessEvaluator, Gene};

/// Draws one random gene.
///
/// With no courses the only allele is "no course".
pub fn random_gene<R: Rng>(num_courses: usize, allow_empty: bool, rng: &mut R) -> Gene {
    if allow_empty {
        let pick = rng.random_range(0..=num_courses);
        (pick < num_courses).then_some(pick)
    } else if num_courses == 0 {
        None
    } else {
        Some(rng.random_range(0..num_courses))
    }
}

/// GA problem for assigning courses to evening slots.
pub struct RoutineGaProblem<'d> {
    evaluator: FitnessEvaluator<'d>,
    gene_mutation_rate: f64,
    allow_empty_slots: bool,
}

impl<'d> RoutineGaProblem<'d> {
    /// Creates the problem; operator rates come from `config`.
    pub fn new(evaluator: FitnessEvaluator<'d>, config: &GeneticConfig) -> Self {
        Self {
            evaluator,
            gene_mutation_rate: config.gene_mutation_rate,
            allow_empty_slots: config.allow_empty_slots,
        }
    }

    fn random_gene<R: Rng>(&self, rng: &mut R) -> Gene {
        random_gene(
            self.evaluator.domain().num_courses(),
            self.allow_empty_slots,
            rng,
        )
    }
}

impl GaProblem for RoutineGaProblem<'_> {
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Individual {
        let genes = (0..self.evaluator.domain().num_slots())
            .map(|_| self.random_gene(rng))
            .collect();
        Individual::new(genes)
    }

    fn evaluate(&self, individual: &Individual) -> Result<f64> {
        self.evaluator.checked_score(&individual.genes)
    }

    fn crossover<R: Rng>(&self, a: &mut Individual, b: &mut Individual, rng: &mut R) {
        two_point_crossover(&mut a.genes, &mut b.genes, rng);
    }

    fn mutate<R: Rng>(&self, individual: &mut Individual, rng: &mut R) {
        resample_mutation(&mut individual.genes, self.gene_mutation_rate, rng, |r| {
            self.random_gene(r)
        });
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        trace!("routine GA generation {generation}: best {best_fitness:.3}");
    }
}

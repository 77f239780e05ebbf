//! Pheromone trails and heuristic desirability.
//!
//! Both tables are indexed by *option*: option `c < num_courses` assigns
//! course `c`, option `num_courses` leaves the slot empty.

use crate::fitness::Gene;
use crate::schedule::WeightTable;

/// Option index of a gene. Out-of-range courses map to the empty option.
#[inline]
pub fn option_index(gene: Gene, num_courses: usize) -> usize {
    match gene {
        Some(c) if c < num_courses => c,
        _ => num_courses,
    }
}

/// Gene selected by an option index.
#[inline]
pub fn gene_of(option: usize, num_courses: usize) -> Gene {
    (option < num_courses).then_some(option)
}

/// Slot × option pheromone matrix, stored row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneMatrix {
    num_slots: usize,
    num_options: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates a `num_slots × (num_courses + 1)` matrix filled with `initial`.
    pub fn new(num_slots: usize, num_courses: usize, initial: f64) -> Self {
        let num_options = num_courses + 1;
        Self {
            num_slots,
            num_options,
            values: vec![initial; num_slots * num_options],
        }
    }

    /// Number of rows.
    pub fn num_slots(&self) -> usize {
        self.num_slots
    }

    /// Number of columns (courses + the empty option).
    pub fn num_options(&self) -> usize {
        self.num_options
    }

    /// Trails of one slot.
    pub fn row(&self, slot: usize) -> &[f64] {
        let start = slot * self.num_options;
        &self.values[start..start + self.num_options]
    }

    /// Trail of one cell.
    pub fn get(&self, slot: usize, option: usize) -> f64 {
        self.values[slot * self.num_options + option]
    }

    /// Multiplies every trail by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for v in &mut self.values {
            *v *= keep;
        }
    }

    /// Adds `amount` (possibly negative) to one cell.
    pub fn deposit(&mut self, slot: usize, option: usize, amount: f64) {
        self.values[slot * self.num_options + option] += amount;
    }

    /// Raises every trail to at least `min`.
    pub fn clamp_min(&mut self, min: f64) {
        for v in &mut self.values {
            *v = v.max(min);
        }
    }

    /// Smallest trail, or `None` for an empty matrix.
    pub fn min_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }
}

/// Heuristic desirability per option.
///
/// Course options carry the course weight; the empty option carries a small
/// constant. The value does not depend on the slot, so one row serves all.
///
/// All values are divided by the largest magnitude among them. Every
/// option scales alike, so selection probabilities are unchanged, but
/// `eta^beta` stays finite for any finite weight.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicTable {
    values: Vec<f64>,
}

impl HeuristicTable {
    /// Builds the table from a weight snapshot.
    pub fn from_weights(weights: &WeightTable, empty: f64) -> Self {
        let mut values = weights.as_slice().to_vec();
        values.push(empty);

        let scale = values.iter().map(|v| v.abs()).fold(0.0, f64::max);
        if scale.is_finite() && scale > 0.0 {
            for v in &mut values {
                *v /= scale;
            }
        }
        Self { values }
    }

    /// Values for every option, empty option last.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

//! The slot/course domain both solvers search over.

use super::config::ScheduleConfig;
use super::course::WeightedCourse;
use super::slot::SlotGrid;

/// Snapshot of course weights, index-aligned with the course list.
///
/// Captured at the start of every `optimize` call so a run always sees the
/// live weights, and sees the same weights from its first candidate to its
/// last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable {
    weights: Vec<f64>,
}

impl WeightTable {
    /// Reads every course's current weight.
    pub fn capture<C: WeightedCourse>(courses: &[C]) -> Self {
        Self {
            weights: courses.iter().map(WeightedCourse::current_weight).collect(),
        }
    }

    /// Weight of the course at `index`.
    pub fn weight(&self, index: usize) -> Option<f64> {
        self.weights.get(index).copied()
    }

    /// Weights in course-index order.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if there are no courses.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Slots, course identifiers and weights for one optimization run.
///
/// Course index `i` everywhere in the crate refers to `course_codes()[i]`.
#[derive(Debug, Clone)]
pub struct ScheduleDomain {
    grid: SlotGrid,
    course_codes: Vec<String>,
    weights: WeightTable,
}

impl ScheduleDomain {
    /// Builds the domain from the caller's courses and schedule.
    pub fn new<C: WeightedCourse>(courses: &[C], config: &ScheduleConfig) -> Self {
        Self {
            grid: SlotGrid::new(config),
            course_codes: courses.iter().map(|c| c.course_code().to_string()).collect(),
            weights: WeightTable::capture(courses),
        }
    }

    /// The slot grid.
    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Number of slots.
    pub fn num_slots(&self) -> usize {
        self.grid.len()
    }

    /// Course identifiers in index order.
    pub fn course_codes(&self) -> &[String] {
        &self.course_codes
    }

    /// Number of courses.
    pub fn num_courses(&self) -> usize {
        self.course_codes.len()
    }

    /// Current weight snapshot.
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Returns `true` when there is nothing to schedule.
    pub fn is_degenerate(&self) -> bool {
        self.grid.is_empty() || self.course_codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Course;

    fn courses() -> Vec<Course> {
        vec![Course::new("CSE110", 5.0), Course::new("MAT120", 3.0)]
    }

    #[test]
    fn test_domain_alignment() {
        let config = ScheduleConfig::default().with_days(["Monday"]);
        let domain = ScheduleDomain::new(&courses(), &config);
        assert_eq!(domain.num_slots(), 5);
        assert_eq!(domain.num_courses(), 2);
        assert_eq!(domain.course_codes()[1], "MAT120");
        assert_eq!(domain.weights().weight(1), Some(3.0));
        assert_eq!(domain.weights().weight(2), None);
        assert!(!domain.is_degenerate());
    }

    #[test]
    fn test_snapshot_is_taken_at_build() {
        let mut list = courses();
        let domain = ScheduleDomain::new(&list, &ScheduleConfig::default());
        list[0].set_weight(9.5);
        assert_eq!(domain.weights().weight(0), Some(5.0));
        let rebuilt = ScheduleDomain::new(&list, &ScheduleConfig::default());
        assert_eq!(rebuilt.weights().weight(0), Some(9.5));
    }

    #[test]
    fn test_degenerate_inputs() {
        let none: Vec<Course> = Vec::new();
        assert!(ScheduleDomain::new(&none, &ScheduleConfig::default()).is_degenerate());

        let no_days = ScheduleConfig::default().with_days(Vec::<String>::new());
        assert!(ScheduleDomain::new(&courses(), &no_days).is_degenerate());
    }
}

//! Course records and academic-pressure events.
//!
//! The optimizers only read courses through [`WeightedCourse`]. The concrete
//! [`Course`] record additionally models how assignments, quizzes and exams
//! raise a course's weight and how completing them lowers it again.

use std::fmt;
use std::str::FromStr;

use crate::error::RoutineError;

/// Read contract the optimizers need from a course.
///
/// Implement this for an application's own course type to optimize it
/// directly. Weights are read once at the start of every `optimize` call.
///
/// Weights must be finite, and so must the sum of all weights: a routine's
/// fitness adds them up, and a total that overflows `f64` is reported as
/// [`RoutineError::NonFiniteFitness`].
pub trait WeightedCourse {
    /// Unique course identifier.
    fn course_code(&self) -> &str;

    /// Current priority weight.
    fn current_weight(&self) -> f64;
}

/// Weight removed on completion on top of the event's own modifier.
pub const COMPLETION_BONUS: f64 = 0.5;

/// Kind of academic event that puts pressure on a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventKind {
    Assignment,
    Quiz,
    Midterm,
    Final,
}

impl EventKind {
    /// Weight added while the event is pending.
    pub fn weight_modifier(self) -> f64 {
        match self {
            EventKind::Assignment => 1.5,
            EventKind::Quiz => 2.5,
            EventKind::Midterm => 3.5,
            EventKind::Final => 4.0,
        }
    }

    /// How many days ahead of its date the event may be registered.
    pub fn max_days_ahead(self) -> u32 {
        match self {
            EventKind::Assignment => 7,
            EventKind::Quiz => 3,
            EventKind::Midterm | EventKind::Final => 5,
        }
    }

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Assignment => "assignment",
            EventKind::Quiz => "quiz",
            EventKind::Midterm => "midterm",
            EventKind::Final => "final",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = RoutineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assignment" => Ok(EventKind::Assignment),
            "quiz" => Ok(EventKind::Quiz),
            "midterm" => Ok(EventKind::Midterm),
            "final" => Ok(EventKind::Final),
            other => Err(RoutineError::UnknownEventKind(other.to_string())),
        }
    }
}

/// A student's enrolled course.
///
/// `actual_weight` is the course's baseline; `current_weight` moves with
/// pending academic events and never drops below the baseline through
/// [`complete_event`](Self::complete_event).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    pub code: String,
    pub actual_weight: f64,
    pub current_weight: f64,
}

impl Course {
    /// Creates a course whose current weight starts at its baseline.
    pub fn new(code: impl Into<String>, weight: f64) -> Self {
        Self {
            code: code.into(),
            actual_weight: weight,
            current_weight: weight,
        }
    }

    /// Raises the current weight for a newly registered event.
    pub fn register_event(&mut self, kind: EventKind) {
        self.current_weight += kind.weight_modifier();
    }

    /// Lowers the current weight for a completed event, floored at the
    /// baseline weight.
    pub fn complete_event(&mut self, kind: EventKind) {
        let reduced = self.current_weight - (kind.weight_modifier() + COMPLETION_BONUS);
        self.current_weight = reduced.max(self.actual_weight);
    }

    /// Overrides the current weight (a manual edit by the student).
    pub fn set_weight(&mut self, weight: f64) {
        self.current_weight = weight;
    }
}

impl WeightedCourse for Course {
    fn course_code(&self) -> &str {
        &self.code
    }

    fn current_weight(&self) -> f64 {
        self.current_weight
    }
}

impl<T: WeightedCourse + ?Sized> WeightedCourse for &T {
    fn course_code(&self) -> &str {
        (**self).course_code()
    }

    fn current_weight(&self) -> f64 {
        (**self).current_weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_raises_weight() {
        let mut c = Course::new("CSE110", 3.0);
        c.register_event(EventKind::Quiz);
        c.register_event(EventKind::Assignment);
        assert!((c.current_weight - 7.0).abs() < 1e-12);
        assert!((c.actual_weight - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_complete_lowers_with_bonus() {
        let mut c = Course::new("CSE110", 3.0);
        c.register_event(EventKind::Final);
        c.register_event(EventKind::Midterm);
        c.complete_event(EventKind::Midterm);
        // 3 + 4 + 3.5 - (3.5 + 0.5)
        assert!((c.current_weight - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_complete_floors_at_baseline() {
        let mut c = Course::new("MAT120", 4.0);
        c.register_event(EventKind::Assignment);
        c.complete_event(EventKind::Assignment);
        assert!((c.current_weight - 4.0).abs() < 1e-12);
        c.complete_event(EventKind::Final);
        assert!((c.current_weight - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_event_kind_parse() {
        assert_eq!("Quiz".parse::<EventKind>(), Ok(EventKind::Quiz));
        assert_eq!(" final ".parse::<EventKind>(), Ok(EventKind::Final));
        assert!(matches!(
            "lab".parse::<EventKind>(),
            Err(RoutineError::UnknownEventKind(_))
        ));
        assert_eq!(EventKind::Midterm.to_string(), "midterm");
    }

    #[test]
    fn test_max_days_ahead() {
        assert_eq!(EventKind::Assignment.max_days_ahead(), 7);
        assert_eq!(EventKind::Quiz.max_days_ahead(), 3);
        assert_eq!(EventKind::Midterm.max_days_ahead(), 5);
        assert_eq!(EventKind::Final.max_days_ahead(), 5);
    }
}

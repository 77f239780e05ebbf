//! Error type shared by every solver.

/// Errors surfaced by the routine optimizers.
///
/// Degenerate input (no courses, no slots, zero budgets) is not an error;
/// it yields an empty routine with fitness 0. Errors are reserved for
/// invalid parameters and numeric failures that would corrupt a result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutineError {
    /// An algorithm parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A candidate assignment scored NaN or an infinity.
    #[error("non-finite fitness {value} (check course weights)")]
    NonFiniteFitness { value: f64 },

    /// An ant's selection weights did not form a usable distribution.
    #[error("degenerate selection distribution at slot {slot}")]
    DegenerateDistribution { slot: usize },

    /// Algorithm name not recognised.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Academic event name not recognised.
    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, RoutineError>;

/// Rejects probabilities outside `[0, 1]`, including NaN.
pub(crate) fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RoutineError::InvalidConfig(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

//! Schedule configuration.
//!
//! [`ScheduleConfig`] holds the caller-supplied values that shape the slot
//! grid: which days are scheduled and which evening hour is kept free.

/// Evening hours considered for study, as 24-hour values `[6, 12)`.
pub const EVENING_HOURS: std::ops::Range<u32> = 6..12;

/// Default dinner hour.
pub const DEFAULT_DINNER_HOUR: u32 = 8;

/// Default scheduled week, in order.
pub const DEFAULT_DAYS: [&str; 6] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
];

/// Configuration for the slot grid.
///
/// `dinner_hour` is not range-checked: a value outside `[6, 12)` simply
/// excludes no slot.
///
/// # Examples
///
/// ```
/// use u_routine::schedule::ScheduleConfig;
///
/// let config = ScheduleConfig::default()
///     .with_days(["Monday", "Tuesday"])
///     .with_dinner_hour(7);
/// assert_eq!(config.days.len(), 2);
/// assert_eq!(config.dinner_hour, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleConfig {
    /// Day names, in scheduling order.
    pub days: Vec<String>,

    /// Hour reserved for dinner; no slot is generated for it.
    pub dinner_hour: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
            dinner_hour: DEFAULT_DINNER_HOUR,
        }
    }
}

impl ScheduleConfig {
    /// Replaces the scheduled days.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the dinner hour.
    pub fn with_dinner_hour(mut self, hour: u32) -> Self {
        self.dinner_hour = hour;
        self
    }

    /// Hours that receive a slot on every day, ascending.
    pub fn study_hours(&self) -> Vec<u32> {
        EVENING_HOURS.filter(|&h| h != self.dinner_hour).collect()
    }
}

//! Schedulable evening slots.

use super::config::ScheduleConfig;

/// One schedulable `(day, hour)` unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Position of the day in [`ScheduleConfig::days`].
    pub day: usize,
    /// 24-hour evening hour in `[6, 12)`.
    pub hour: u32,
    /// Stable identity, `"{day_name}_{hour}"`.
    pub key: String,
}

/// Formats the key of a `(day, hour)` slot.
pub fn slot_key(day: &str, hour: u32) -> String {
    format!("{day}_{hour}")
}

/// The full, ordered slot set for one schedule configuration.
///
/// Slots are day-major and hour-minor, so every day occupies one contiguous
/// run of [`slots_per_day`](Self::slots_per_day) positions. Consecutiveness is
/// measured over this reduced sequence: the dinner hour is absent, not a gap.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    days: Vec<String>,
    hours: Vec<u32>,
    slots: Vec<Slot>,
}

impl SlotGrid {
    /// Builds the grid from days × evening hours minus the dinner hour.
    pub fn new(config: &ScheduleConfig) -> Self {
        let hours = config.study_hours();
        let slots = config
            .days
            .iter()
            .enumerate()
            .flat_map(|(d, name)| {
                hours.iter().map(move |&hour| Slot {
                    day: d,
                    hour,
                    key: slot_key(name, hour),
                })
            })
            .collect();

        Self {
            days: config.days.clone(),
            hours,
            slots,
        }
    }

    /// All slots in scheduling order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot exists (e.g. no days configured).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Day names in order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Study hours present on every day, ascending.
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    /// Slots per day.
    pub fn slots_per_day(&self) -> usize {
        self.hours.len()
    }

    /// Slot keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.key.as_str())
    }
}

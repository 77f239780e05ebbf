//! Slot and course domain model.
//!
//! Derives the fixed set of schedulable evening slots from a
//! [`ScheduleConfig`] and pairs it with the caller's courses.
//!
//! # Key Types
//!
//! - [`ScheduleConfig`]: scheduled days and the dinner hour
//! - [`SlotGrid`] / [`Slot`]: ordered `(day, hour)` slots, keyed `"{day}_{hour}"`
//! - [`WeightedCourse`]: what the optimizers read from a course
//! - [`Course`] / [`EventKind`]: course record with academic-pressure events
//! - [`ScheduleDomain`] / [`WeightTable`]: per-run slots, codes and weights

mod config;
mod course;
mod domain;
mod slot;

pub use config::{ScheduleConfig, DEFAULT_DAYS, DEFAULT_DINNER_HOUR, EVENING_HOURS};
pub use course::{Course, EventKind, WeightedCourse, COMPLETION_BONUS};
pub use domain::{ScheduleDomain, WeightTable};
pub use slot::{slot_key, Slot, SlotGrid};

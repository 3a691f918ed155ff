//! Derivation of yield schedules from validated inputs.

pub mod schedule;

pub use schedule::{ScheduleError, build_schedule};

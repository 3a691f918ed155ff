//! View state: the last derived schedule and the active presentation mode.

use tracing::error;

use crate::calculations::{ScheduleError, build_schedule};
use crate::models::{ViewMode, YieldSchedule};
use crate::validation::ValidatedInputs;

/// Holds the most recent successful derivation and the selected view.
///
/// Exactly two mutation paths exist: [`ViewState::submit`] replaces the
/// schedule, [`ViewState::select_mode`] replaces the mode. Neither touches
/// the other's state. There is no way to clear a schedule back to absent;
/// a successful resubmission is the only way to change it, so consumers
/// always see the most recent successful computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    schedule: Option<YieldSchedule>,
    mode: ViewMode,
}

impl ViewState {
    /// Fresh state: no schedule, table mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent successfully derived schedule, if any.
    pub fn schedule(&self) -> Option<&YieldSchedule> {
        self.schedule.as_ref()
    }

    /// The active presentation mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Runs the derivation engine and replaces the stored schedule
    /// wholesale. The mode is left untouched.
    ///
    /// # Errors
    ///
    /// A derivation error is only reachable when the inputs bypassed
    /// validation. It is logged as a contract violation and the previously
    /// stored schedule survives unchanged.
    pub fn submit(&mut self, inputs: &ValidatedInputs) -> Result<&YieldSchedule, ScheduleError> {
        match build_schedule(inputs) {
            Ok(schedule) => Ok(self.schedule.insert(schedule)),
            Err(err) => {
                error!(%err, ?inputs, "submit refused: inputs bypassed validation");
                Err(err)
            }
        }
    }

    /// Switches the active presentation mode; the schedule is untouched.
    pub fn select_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_inputs() -> ValidatedInputs {
        ValidatedInputs {
            price: 100.0,
            revenue_per_unit: 10.0,
            periods: 5,
        }
    }

    #[test]
    fn starts_without_schedule_in_table_mode() {
        let state = ViewState::new();

        assert_eq!(state.schedule(), None);
        assert_eq!(state.mode(), ViewMode::Table);
    }

    #[test]
    fn submit_stores_the_derived_schedule() {
        let mut state = ViewState::new();

        state.submit(&valid_inputs()).unwrap();

        let schedule = state.schedule().unwrap();
        assert_eq!(schedule.len(), 6);
        assert_eq!(schedule.first().unwrap().price, 100.0);
    }

    #[test]
    fn submit_replaces_the_previous_schedule_wholesale() {
        let mut state = ViewState::new();
        state.submit(&valid_inputs()).unwrap();

        let second = ValidatedInputs {
            price: 50.0,
            revenue_per_unit: 0.5,
            periods: 2,
        };
        state.submit(&second).unwrap();

        let schedule = state.schedule().unwrap();
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.first().unwrap().price, 50.0);
    }

    #[test]
    fn submit_does_not_alter_the_mode() {
        let mut state = ViewState::new();
        state.select_mode(ViewMode::Chart);

        state.submit(&valid_inputs()).unwrap();

        assert_eq!(state.mode(), ViewMode::Chart);
    }

    #[test]
    fn failed_submit_leaves_previous_schedule_intact() {
        let mut state = ViewState::new();
        state.submit(&valid_inputs()).unwrap();
        let before = state.schedule().unwrap().clone();

        let desynced = ValidatedInputs {
            price: 100.0,
            revenue_per_unit: 10.0,
            periods: 0,
        };
        let result = state.submit(&desynced);

        assert_eq!(result, Err(ScheduleError::NoPeriods));
        assert_eq!(state.schedule(), Some(&before));
    }

    #[test]
    fn failed_submit_on_fresh_state_keeps_schedule_absent() {
        let mut state = ViewState::new();

        let desynced = ValidatedInputs {
            price: -5.0,
            revenue_per_unit: 10.0,
            periods: 5,
        };
        let _ = state.submit(&desynced);

        assert_eq!(state.schedule(), None);
    }

    #[test]
    fn select_mode_does_not_touch_the_schedule() {
        let mut state = ViewState::new();
        state.submit(&valid_inputs()).unwrap();
        let before = state.schedule().unwrap().clone();

        state.select_mode(ViewMode::Chart);
        state.select_mode(ViewMode::Table);

        assert_eq!(state.schedule(), Some(&before));
    }

    #[test]
    fn mode_can_be_selected_before_any_schedule_exists() {
        let mut state = ViewState::new();

        state.select_mode(ViewMode::Chart);

        assert_eq!(state.mode(), ViewMode::Chart);
        assert_eq!(state.schedule(), None);
    }
}

//! Submit workflow: wires the input form to the view state.

use yield_core::calculations::ScheduleError;
use yield_core::models::{InputFieldId, InputModel, ViewMode, YieldSchedule};
use yield_core::state::ViewState;

use crate::utils::parse_number;

/// A field label paired with its validation message, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub label: &'static str,
    pub message: &'static str,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// All fields were valid; the stored schedule was replaced.
    Accepted,
    /// At least one field is invalid; nothing changed.
    Rejected(Vec<FieldError>),
    /// The derivation engine refused inputs that passed validation. Not
    /// reachable through this form; already logged by the view state.
    Failed(ScheduleError),
}

/// Drives one editing session: raw edits flow into the input model, submit
/// attempts and mode selections flow into the view state.
#[derive(Debug, Clone, Default)]
pub struct ScheduleWorkflow {
    form: InputModel,
    view: ViewState,
}

impl ScheduleWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies raw text input to one field, the way a form field reports an
    /// edit. Unparseable input leaves the field absent.
    pub fn enter(&mut self, id: InputFieldId, raw: &str) {
        self.form.edit(id, parse_number(raw));
    }

    /// Reports focus leaving a field.
    pub fn blur(&mut self, id: InputFieldId) {
        self.form.blur(id);
    }

    pub fn form(&self) -> &InputModel {
        &self.form
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn schedule(&self) -> Option<&YieldSchedule> {
        self.view.schedule()
    }

    pub fn select_view(&mut self, mode: ViewMode) {
        self.view.select_mode(mode);
    }

    /// Attempts to submit the form.
    ///
    /// A no-op unless every field is valid; the rejection carries the
    /// per-field errors for display. All fields are blurred first so that
    /// fields the user never reached surface their errors too.
    pub fn submit(&mut self) -> SubmitOutcome {
        for id in InputFieldId::ALL {
            self.form.blur(id);
        }

        let Some(inputs) = self.form.validated() else {
            let errors = self
                .form
                .fields()
                .into_iter()
                .filter_map(|field| {
                    field.visible_error().map(|message| FieldError {
                        label: field.id().label(),
                        message,
                    })
                })
                .collect();
            return SubmitOutcome::Rejected(errors);
        };

        match self.view.submit(&inputs) {
            Ok(_) => SubmitOutcome::Accepted,
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled_workflow() -> ScheduleWorkflow {
        let mut workflow = ScheduleWorkflow::new();
        workflow.enter(InputFieldId::Price, "100");
        workflow.enter(InputFieldId::Revenue, "10");
        workflow.enter(InputFieldId::Periods, "5");
        workflow
    }

    #[test]
    fn valid_raw_input_is_accepted() {
        let mut workflow = filled_workflow();

        assert_eq!(workflow.submit(), SubmitOutcome::Accepted);
        assert_eq!(workflow.schedule().unwrap().len(), 6);
    }

    #[test]
    fn empty_form_is_rejected_with_all_fields_required() {
        let mut workflow = ScheduleWorkflow::new();

        let outcome = workflow.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![
                FieldError {
                    label: "price",
                    message: "Required",
                },
                FieldError {
                    label: "revenue (per unit)",
                    message: "Required",
                },
                FieldError {
                    label: "number of periods",
                    message: "Required",
                },
            ])
        );
        assert_eq!(workflow.schedule(), None);
    }

    #[test]
    fn fractional_period_count_is_rejected() {
        let mut workflow = ScheduleWorkflow::new();
        workflow.enter(InputFieldId::Price, "100");
        workflow.enter(InputFieldId::Revenue, "10");
        workflow.enter(InputFieldId::Periods, "3.5");

        let outcome = workflow.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![FieldError {
                label: "number of periods",
                message: "Must be a whole number",
            }])
        );
        assert_eq!(workflow.schedule(), None);
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut workflow = ScheduleWorkflow::new();
        workflow.enter(InputFieldId::Price, "-5");
        workflow.enter(InputFieldId::Revenue, "10");
        workflow.enter(InputFieldId::Periods, "5");

        let outcome = workflow.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![FieldError {
                label: "price",
                message: "Must be greater than 0",
            }])
        );
    }

    #[test]
    fn rejected_submit_keeps_the_previous_schedule() {
        let mut workflow = filled_workflow();
        workflow.submit();
        let before = workflow.schedule().unwrap().clone();

        workflow.enter(InputFieldId::Periods, "0");
        let outcome = workflow.submit();

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(workflow.schedule(), Some(&before));
    }

    #[test]
    fn garbage_input_reads_as_missing() {
        let mut workflow = ScheduleWorkflow::new();
        workflow.enter(InputFieldId::Price, "abc");
        workflow.enter(InputFieldId::Revenue, "10");
        workflow.enter(InputFieldId::Periods, "5");

        let outcome = workflow.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![FieldError {
                label: "price",
                message: "Required",
            }])
        );
    }

    #[test]
    fn view_selection_is_independent_of_submission() {
        let mut workflow = filled_workflow();
        workflow.select_view(ViewMode::Chart);

        workflow.submit();

        assert_eq!(workflow.mode(), ViewMode::Chart);

        workflow.select_view(ViewMode::Table);
        assert_eq!(workflow.schedule().unwrap().len(), 6);
    }
}

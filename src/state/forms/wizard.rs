//! Multi-step membership application wizard
//!
//! States are `Step(1)..=Step(K)` and the terminal `Submitted`. Moving
//! forward is gated on validating the step being left, moving back never
//! is, and only the final step can submit.

use super::field::FormField;
use super::form_state::{clamp_index, Form};
use super::record::{SubmissionRecord, MULTI_VALUE_FIELD};
use crate::sink::{FormKind, SinkError, Submission, SubmissionSink};

/// One page of the wizard
#[derive(Debug, Clone)]
pub struct FormStep {
    pub title: String,
    pub fields: Vec<FormField>,
}

impl FormStep {
    pub fn new(title: &str, fields: Vec<FormField>) -> Self {
        Self {
            title: title.to_string(),
            fields,
        }
    }

    /// Validate every required field and refresh annotations
    fn validate(&mut self) -> bool {
        // Run every field so all annotations show, not just the first failure
        self.fields
            .iter_mut()
            .filter(|f| f.required)
            .fold(true, |ok, field| field.validate(false) && ok)
    }
}

/// Where the wizard is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Showing the given step, 1-indexed
    Step(usize),
    /// Terminal success view
    Submitted,
}

/// Progress indicator mark for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMark {
    Completed,
    Active,
    Pending,
}

/// Result of a submit attempt that did not fail in the sink
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Final step has invalid fields; annotations were attached
    Invalid,
    /// Submit was attempted before reaching the final step
    NotFinalStep,
    /// Wizard was already in its terminal state
    AlreadySubmitted,
    /// Handed to the sink and now showing the success view
    Submitted(Submission),
}

/// Sequential multi-step form
#[derive(Debug, Clone)]
pub struct FormWizard {
    steps: Vec<FormStep>,
    state: WizardState,
    pub active_field_index: usize,
}

impl FormWizard {
    /// Create a wizard on its first step. Returns None when there are no steps.
    pub fn new(steps: Vec<FormStep>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self {
            steps,
            state: WizardState::Step(1),
            active_field_index: 0,
        })
    }

    pub fn is_submitted(&self) -> bool {
        self.state == WizardState::Submitted
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Current step number, or None once submitted
    pub fn current_step(&self) -> Option<usize> {
        match self.state {
            WizardState::Step(n) => Some(n),
            WizardState::Submitted => None,
        }
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step() == Some(self.steps.len())
    }

    /// Step definition by 1-indexed number
    pub fn step(&self, number: usize) -> Option<&FormStep> {
        number.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    fn step_mut(&mut self, number: usize) -> Option<&mut FormStep> {
        number.checked_sub(1).and_then(|i| self.steps.get_mut(i))
    }

    pub fn current(&self) -> Option<&FormStep> {
        self.current_step().and_then(|n| self.step(n))
    }

    /// Whether `number` is the one step being shown
    pub fn is_step_active(&self, number: usize) -> bool {
        self.current_step() == Some(number)
    }

    /// Show step `number`.
    ///
    /// Unknown step numbers are logged and ignored, leaving the wizard on
    /// its prior step. Returns true if the step changed.
    pub fn go_to_step(&mut self, number: usize) -> bool {
        if self.is_submitted() {
            tracing::debug!(step = number, "Wizard already submitted, ignoring step change");
            return false;
        }
        if self.step(number).is_none() {
            tracing::debug!(step = number, "No such form step");
            return false;
        }
        self.state = WizardState::Step(number);
        self.active_field_index = 0;
        true
    }

    /// Validate the required fields of step `number`, refreshing annotations.
    ///
    /// A step that doesn't exist has nothing to fail and validates.
    pub fn validate_step(&mut self, number: usize) -> bool {
        match self.step_mut(number) {
            Some(step) => step.validate(),
            None => true,
        }
    }

    /// Advance if the current step validates. Returns true if the step changed.
    pub fn next(&mut self) -> bool {
        let Some(current) = self.current_step() else {
            return false;
        };
        if !self.validate_step(current) {
            tracing::debug!(step = current, "Step has invalid fields");
            return false;
        }
        self.go_to_step(current + 1)
    }

    /// Go back one step without validating
    pub fn prev(&mut self) -> bool {
        match self.current_step() {
            Some(current) => self.go_to_step(current - 1),
            None => false,
        }
    }

    /// Progress indicator marks, or None while the indicator is hidden
    pub fn progress(&self) -> Option<Vec<ProgressMark>> {
        let current = self.current_step()?;
        Some(
            (1..=self.steps.len())
                .map(|n| match n.cmp(&current) {
                    std::cmp::Ordering::Less => ProgressMark::Completed,
                    std::cmp::Ordering::Equal => ProgressMark::Active,
                    std::cmp::Ordering::Greater => ProgressMark::Pending,
                })
                .collect(),
        )
    }

    /// Every field value across all steps, in document order
    pub fn entries(&self) -> Vec<(String, String)> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .flat_map(FormField::entries)
            .collect()
    }

    /// Validate the final step and aggregate all values into a record.
    ///
    /// Does not change state; call [`FormWizard::mark_submitted`] once the
    /// record has been delivered.
    pub fn prepare_submission(&mut self) -> Result<SubmissionRecord, SubmitOutcome> {
        let current = match self.state {
            WizardState::Submitted => return Err(SubmitOutcome::AlreadySubmitted),
            WizardState::Step(n) => n,
        };
        if current != self.steps.len() {
            return Err(SubmitOutcome::NotFinalStep);
        }
        if !self.validate_step(current) {
            return Err(SubmitOutcome::Invalid);
        }
        Ok(SubmissionRecord::from_entries(
            self.entries(),
            Some(MULTI_VALUE_FIELD),
        ))
    }

    /// Enter the terminal success state
    pub fn mark_submitted(&mut self) {
        self.state = WizardState::Submitted;
        self.active_field_index = 0;
    }

    /// Validate, deliver to `sink` and show the success view.
    ///
    /// A sink error leaves the wizard on its final step so the user can retry.
    pub async fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<SubmitOutcome, SinkError> {
        let record = match self.prepare_submission() {
            Ok(record) => record,
            Err(outcome) => return Ok(outcome),
        };
        let submission = Submission::new(FormKind::Membership, record);
        sink.submit(&submission).await?;
        tracing::info!(id = %submission.id, "Membership application submitted");
        self.mark_submitted();
        Ok(SubmitOutcome::Submitted(submission))
    }

    /// Find a field by name in any step
    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }

    #[cfg(test)]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.steps
            .iter_mut()
            .flat_map(|s| s.fields.iter_mut())
            .find(|f| f.name == name)
    }
}

impl Form for FormWizard {
    fn field_count(&self) -> usize {
        self.current().map(|s| s.fields.len()).unwrap_or(0)
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = clamp_index(index, self.field_count());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        let current = self.current_step()?;
        self.step_mut(current)?.fields.get_mut(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.current()?.fields.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockSubmissionSink;
    use crate::state::RecordValue;

    fn three_step_wizard() -> FormWizard {
        FormWizard::new(vec![
            FormStep::new(
                "Personal",
                vec![
                    FormField::text("first_name", "First Name").required(),
                    FormField::email("email", "Email").required(),
                    FormField::text("phone", "Phone"),
                ],
            ),
            FormStep::new(
                "Business",
                vec![
                    FormField::text("business_name", "Business Name").required(),
                    FormField::choices("interests", "Interests", &["community", "veterans", "events"]),
                ],
            ),
            FormStep::new(
                "Membership",
                vec![FormField::select("level", "Level", &["basic", "gold"]).required()],
            ),
        ])
        .unwrap()
    }

    fn set_value(w: &mut FormWizard, name: &str, value: &str) {
        w.field_mut(name).unwrap().set_text(value);
    }

    fn fill_step_one(w: &mut FormWizard) {
        set_value(w, "first_name", "Ada");
        set_value(w, "email", "ada@example.org");
    }

    fn walk_to_final(w: &mut FormWizard) {
        fill_step_one(w);
        assert!(w.next());
        set_value(w, "business_name", "Lovelace Engines");
        assert!(w.next());
    }

    fn accept_all() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().returning(|_| Ok(()));
        sink
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_no_steps_is_none() {
            assert!(FormWizard::new(Vec::new()).is_none());
        }

        #[test]
        fn test_starts_on_step_one() {
            let w = three_step_wizard();
            assert_eq!(w.current_step(), Some(1));
            assert_eq!(w.step_count(), 3);
        }
    }

    mod go_to_step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_changes_step_and_marks_progress() {
            let mut w = three_step_wizard();
            assert!(w.go_to_step(3));
            assert_eq!(
                w.progress(),
                Some(vec![
                    ProgressMark::Completed,
                    ProgressMark::Completed,
                    ProgressMark::Active
                ])
            );
        }

        #[test]
        fn test_out_of_range_is_noop() {
            let mut w = three_step_wizard();
            w.go_to_step(2);
            assert!(!w.go_to_step(0));
            assert!(!w.go_to_step(4));
            assert_eq!(w.current_step(), Some(2));
        }

        #[test]
        fn test_exactly_one_step_active() {
            let mut w = three_step_wizard();
            for n in [2, 1, 3, 7, 2] {
                w.go_to_step(n);
                let active = (1..=w.step_count()).filter(|&i| w.is_step_active(i)).count();
                assert_eq!(active, 1);
            }
        }

        #[test]
        fn test_resets_field_focus() {
            let mut w = three_step_wizard();
            w.next_field();
            w.go_to_step(2);
            assert_eq!(w.active_field(), 0);
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_required_field_fails() {
            let mut w = three_step_wizard();
            assert!(!w.validate_step(1));
            assert_eq!(
                w.field("first_name").unwrap().error.as_deref(),
                Some("This field is required")
            );
            assert_eq!(
                w.field("email").unwrap().error.as_deref(),
                Some("Please enter a valid email address")
            );
            assert!(w.field("phone").unwrap().error.is_none());
        }

        #[test]
        fn test_bad_email_fails() {
            let mut w = three_step_wizard();
            set_value(&mut w, "first_name", "Ada");
            set_value(&mut w, "email", "ada@example");
            assert!(!w.validate_step(1));
            assert!(w.field("first_name").unwrap().error.is_none());
        }

        #[test]
        fn test_filled_step_passes_and_clears_annotations() {
            let mut w = three_step_wizard();
            w.validate_step(1);
            set_value(&mut w, "first_name", "Ada");
            set_value(&mut w, "email", "ada@example.org");
            assert!(w.validate_step(1));
            assert!(w.field("first_name").unwrap().error.is_none());
            assert!(w.field("email").unwrap().error.is_none());
        }

        #[test]
        fn test_missing_step_validates() {
            let mut w = three_step_wizard();
            assert!(w.validate_step(9));
        }

        #[test]
        fn test_edit_clears_only_that_annotation() {
            let mut w = three_step_wizard();
            w.validate_step(1);
            set_value(&mut w, "first_name", "A");
            assert!(w.field("first_name").unwrap().error.is_none());
            assert!(w.field("email").unwrap().error.is_some());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_blocked_by_invalid_step() {
            let mut w = three_step_wizard();
            assert!(!w.next());
            assert!(!w.next());
            assert_eq!(w.current_step(), Some(1));
        }

        #[test]
        fn test_next_advances_when_valid() {
            let mut w = three_step_wizard();
            fill_step_one(&mut w);
            assert!(w.next());
            assert_eq!(w.current_step(), Some(2));
        }

        #[test]
        fn test_next_on_final_step_stays() {
            let mut w = three_step_wizard();
            walk_to_final(&mut w);
            w.field_mut("level").unwrap().cycle_option(true);
            assert!(!w.next());
            assert_eq!(w.current_step(), Some(3));
        }

        #[test]
        fn test_prev_skips_validation() {
            let mut w = three_step_wizard();
            walk_to_final(&mut w);
            set_value(&mut w, "business_name", "");
            assert!(w.prev());
            assert!(w.prev());
            assert_eq!(w.current_step(), Some(1));
        }

        #[test]
        fn test_prev_on_first_step_is_noop() {
            let mut w = three_step_wizard();
            assert!(!w.prev());
            assert_eq!(w.current_step(), Some(1));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_final_step_produces_nothing() {
            let mut w = three_step_wizard();
            walk_to_final(&mut w);
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit().never();

            let outcome = w.submit(&sink).await.unwrap();
            assert!(matches!(outcome, SubmitOutcome::Invalid));
            assert_eq!(w.current_step(), Some(3));
            assert!(w.field("level").unwrap().error.is_some());
        }

        #[tokio::test]
        async fn test_submit_before_final_step_is_refused() {
            let mut w = three_step_wizard();
            fill_step_one(&mut w);
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit().never();

            let outcome = w.submit(&sink).await.unwrap();
            assert!(matches!(outcome, SubmitOutcome::NotFinalStep));
            assert_eq!(w.current_step(), Some(1));
        }

        #[tokio::test]
        async fn test_valid_submission_collects_interests_and_terminates() {
            let mut w = three_step_wizard();
            walk_to_final(&mut w);
            w.field_mut("interests").unwrap().toggle_choice(0);
            w.field_mut("interests").unwrap().toggle_choice(1);
            w.field_mut("level").unwrap().cycle_option(true);

            let outcome = w.submit(&accept_all()).await.unwrap();
            let SubmitOutcome::Submitted(submission) = outcome else {
                panic!("expected submission, got {outcome:?}");
            };
            assert_eq!(submission.form, FormKind::Membership);
            assert_eq!(
                submission.data.get("interests"),
                Some(&RecordValue::Many(vec![
                    "community".to_string(),
                    "veterans".to_string()
                ]))
            );
            assert_eq!(
                submission.data.get("phone"),
                Some(&RecordValue::Single(String::new()))
            );
            assert_eq!(submission.data.get("level").and_then(RecordValue::as_single), Some("basic"));
            assert!(w.is_submitted());
            assert!(w.progress().is_none());
        }

        #[tokio::test]
        async fn test_submitted_is_terminal() {
            let mut w = three_step_wizard();
            walk_to_final(&mut w);
            w.field_mut("level").unwrap().cycle_option(true);
            w.submit(&accept_all()).await.unwrap();

            assert!(!w.go_to_step(1));
            assert!(!w.prev());
            assert!(!w.next());
            let again = w.submit(&accept_all()).await.unwrap();
            assert!(matches!(again, SubmitOutcome::AlreadySubmitted));
        }

        #[tokio::test]
        async fn test_sink_error_surfaces_and_keeps_final_step() {
            let mut w = three_step_wizard();
            walk_to_final(&mut w);
            w.field_mut("level").unwrap().cycle_option(true);
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .times(1)
                .returning(|_| Err(SinkError::Rejected("offline".to_string())));

            let result = w.submit(&sink).await;
            assert!(matches!(result, Err(SinkError::Rejected(_))));
            assert_eq!(w.current_step(), Some(3));
        }

        #[test]
        fn test_no_interests_means_absent_key() {
            let mut w = three_step_wizard();
            walk_to_final(&mut w);
            w.field_mut("level").unwrap().cycle_option(true);
            let record = w.prepare_submission().unwrap();
            assert!(record.get("interests").is_none());
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_follows_current_step() {
            let mut w = three_step_wizard();
            assert_eq!(w.field_count(), 3);
            w.go_to_step(3);
            assert_eq!(w.field_count(), 1);
        }

        #[test]
        fn test_active_field_is_in_current_step() {
            let mut w = three_step_wizard();
            w.go_to_step(2);
            assert_eq!(w.get_active_field_mut().unwrap().name, "business_name");
        }

        #[test]
        fn test_no_fields_after_submission() {
            let mut w = three_step_wizard();
            w.mark_submitted();
            assert_eq!(w.field_count(), 0);
            w.next_field();
            assert!(w.get_active_field_mut().is_none());
        }
    }
}

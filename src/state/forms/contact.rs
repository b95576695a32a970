//! Single-page contact and newsletter forms

use super::field::FormField;
use super::form_state::{clamp_index, Form};
use super::record::SubmissionRecord;
use crate::sink::{FormKind, SinkError, Submission, SubmissionSink};

/// Notice shown after the contact form is sent
pub const CONTACT_THANKS: &str = "Thank you for contacting us! We'll respond within 24 hours.";
/// Notice shown after a newsletter signup
pub const NEWSLETTER_THANKS: &str = "Thank you for subscribing!";

/// What happened to a flat form submit
#[derive(Debug, Clone)]
pub enum FlatSubmitOutcome {
    /// Nothing was sent
    Invalid,
    /// Delivered to the sink and the form was reset
    Sent(Submission),
}

/// Contact form: every required field is checked on submit
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::text("name", "Full Name").required(),
                FormField::email("email", "Email").required(),
                FormField::text("phone", "Phone"),
                FormField::select(
                    "subject",
                    "Subject",
                    &["membership", "events", "partnership", "other"],
                )
                .required(),
                FormField::textarea("message", "Message").required(),
            ],
            active_field_index: 0,
        }
    }

    /// Validate all fields, judging emptiness on trimmed values
    pub fn validate(&mut self) -> bool {
        self.fields
            .iter_mut()
            .fold(true, |ok, field| field.validate(true) && ok)
    }

    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[cfg(test)]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Empty every field and clear annotations
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(FormField::clear);
        self.active_field_index = 0;
    }

    /// Validate, deliver and reset. The form keeps its values if the sink fails.
    pub async fn submit(
        &mut self,
        sink: &dyn SubmissionSink,
    ) -> Result<FlatSubmitOutcome, SinkError> {
        if !self.validate() {
            return Ok(FlatSubmitOutcome::Invalid);
        }
        let entries = self.fields.iter().flat_map(FormField::entries);
        let record = SubmissionRecord::from_entries(entries, None);
        let submission = Submission::new(FormKind::Contact, record);
        sink.submit(&submission).await?;
        tracing::info!(id = %submission.id, "Contact form submitted");
        self.reset();
        Ok(FlatSubmitOutcome::Sent(submission))
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = clamp_index(index, self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

/// Footer newsletter signup. Problems are reported by notice, not annotation.
#[derive(Debug, Clone)]
pub struct NewsletterForm {
    pub email: FormField,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            email: FormField::email("email", "Newsletter Email").required(),
        }
    }

    /// Deliver the address if it is valid, then clear the input
    pub async fn submit(
        &mut self,
        sink: &dyn SubmissionSink,
    ) -> Result<FlatSubmitOutcome, SinkError> {
        if self.email.check(false).is_some() {
            return Ok(FlatSubmitOutcome::Invalid);
        }
        let record = SubmissionRecord::from_entries(self.email.entries(), None);
        let submission = Submission::new(FormKind::Newsletter, record);
        sink.submit(&submission).await?;
        tracing::info!(id = %submission.id, "Newsletter subscription");
        self.email.clear();
        Ok(FlatSubmitOutcome::Sent(submission))
    }
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new()
    }
}

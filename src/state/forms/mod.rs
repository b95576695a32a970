//! Form domain layer
//!
//! Field value objects, the multi-step membership wizard and the flat
//! contact/newsletter forms. Nothing here knows about the terminal.

mod contact;
mod field;
mod form_state;
mod record;
mod wizard;

pub use contact::{ContactForm, FlatSubmitOutcome, NewsletterForm, CONTACT_THANKS, NEWSLETTER_THANKS};
pub use field::{FieldKind, FormField, EMAIL_ERROR};
pub use form_state::Form;
pub use record::{SubmissionRecord, MULTI_VALUE_FIELD};
pub use wizard::{FormStep, FormWizard, ProgressMark, SubmitOutcome};

#[cfg(test)]
pub use record::RecordValue;

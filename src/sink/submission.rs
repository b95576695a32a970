//! Submission envelope sent to sinks

use crate::state::SubmissionRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Which form produced a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Membership,
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Membership => "Membership Application",
            Self::Contact => "Contact Form",
            Self::Newsletter => "Newsletter subscription",
        }
    }
}

/// A completed form, ready to be posted as JSON
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub form: FormKind,
    pub submitted_at: DateTime<Utc>,
    pub data: SubmissionRecord,
}

impl Submission {
    pub fn new(form: FormKind, data: SubmissionRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            form,
            submitted_at: Utc::now(),
            data,
        }
    }

    /// JSON body as it would be posted to the CRM webhook
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Submission::new(FormKind::Contact, SubmissionRecord::default());
        let b = Submission::new(FormKind::Contact, SubmissionRecord::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_json_shape() {
        let record = SubmissionRecord::from_entries(
            vec![("email".to_string(), "a@b.co".to_string())],
            None,
        );
        let submission = Submission::new(FormKind::Newsletter, record);
        let value: serde_json::Value = serde_json::from_str(&submission.to_json().unwrap()).unwrap();

        assert_eq!(value["form"], "newsletter");
        assert_eq!(value["data"]["email"], "a@b.co");
        assert!(value["id"].is_string());
        assert!(value["submitted_at"].is_string());
    }

    #[test]
    fn test_form_kind_labels() {
        assert_eq!(FormKind::Membership.label(), "Membership Application");
        assert_eq!(FormKind::Contact.label(), "Contact Form");
    }
}

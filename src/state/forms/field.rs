//! Form field value objects

use crate::state::email::is_valid_email;

/// Message shown under an invalid email field
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
/// Message shown under any other invalid required field
pub const REQUIRED_ERROR: &str = "This field is required";

/// Declared input type of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text { multiline: bool },
    Email,
    /// Single choice from a fixed list. An empty value is the placeholder.
    Select { options: Vec<String> },
    /// Group of checkboxes sharing one name. Every checked box submits a value.
    Choices { options: Vec<String> },
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(Vec<bool>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: FieldValue,
    /// Error annotation attached by the last failed validation
    pub error: Option<String>,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Text { multiline: false })
    }

    /// Create a new multiline text field
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Text { multiline: true })
    }

    /// Create a new email field
    pub fn email(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Email)
    }

    /// Create a new select field with an empty placeholder
    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self::with_kind(
            name,
            label,
            FieldKind::Select {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    /// Create a new checkbox group
    pub fn choices(name: &str, label: &str, options: &[&str]) -> Self {
        let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        let checked = vec![false; options.len()];
        Self {
            value: FieldValue::Checked(checked),
            ..Self::with_kind(name, label, FieldKind::Choices { options })
        }
    }

    fn with_kind(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            value: FieldValue::default(),
            error: None,
        }
    }

    /// Mark the field as mandatory
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Text { multiline: true })
    }

    pub fn is_email(&self) -> bool {
        matches!(self.kind, FieldKind::Email)
    }

    /// Get the text value (empty for checkbox groups)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Set the text value. Edits always clear the error annotation.
    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
        self.error = None;
    }

    /// Push a character to a free-text field
    pub fn push_char(&mut self, c: char) {
        if !self.accepts_typing() {
            return;
        }
        if c == '\n' && !self.is_multiline() {
            return;
        }
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
        self.error = None;
    }

    /// Remove the last character from a free-text field
    pub fn pop_char(&mut self) {
        if !self.accepts_typing() {
            return;
        }
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
        self.error = None;
    }

    /// Whether keystrokes edit the value directly
    pub fn accepts_typing(&self) -> bool {
        matches!(self.kind, FieldKind::Text { .. } | FieldKind::Email)
    }

    /// Step a select field through its options, wrapping through the placeholder
    pub fn cycle_option(&mut self, forward: bool) {
        let FieldKind::Select { options } = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| o == self.as_text());
        // Slot 0 is the placeholder, slots 1..=len are the options
        let slots = options.len() + 1;
        let slot = current.map(|i| i + 1).unwrap_or(0);
        let next = if forward {
            (slot + 1) % slots
        } else {
            (slot + slots - 1) % slots
        };
        let value = if next == 0 {
            String::new()
        } else {
            options[next - 1].clone()
        };
        self.value = FieldValue::Text(value);
        self.error = None;
    }

    /// Toggle one box of a checkbox group
    pub fn toggle_choice(&mut self, index: usize) {
        if let FieldValue::Checked(checked) = &mut self.value {
            if let Some(slot) = checked.get_mut(index) {
                *slot = !*slot;
                self.error = None;
            }
        }
    }

    /// Option labels of a select or checkbox group
    pub fn options(&self) -> &[String] {
        match &self.kind {
            FieldKind::Select { options } | FieldKind::Choices { options } => options,
            _ => &[],
        }
    }

    /// Whether the checkbox at `index` is checked
    pub fn is_checked(&self, index: usize) -> bool {
        match &self.value {
            FieldValue::Checked(checked) => checked.get(index).copied().unwrap_or(false),
            FieldValue::Text(_) => false,
        }
    }

    /// Values this field contributes to a submission, in document order.
    ///
    /// Text-like fields always contribute one entry, even when empty.
    /// Checkbox groups contribute one entry per checked box.
    pub fn entries(&self) -> Vec<(String, String)> {
        match (&self.kind, &self.value) {
            (FieldKind::Choices { options }, FieldValue::Checked(checked)) => options
                .iter()
                .zip(checked)
                .filter(|(_, on)| **on)
                .map(|(option, _)| (self.name.clone(), option.clone()))
                .collect(),
            _ => vec![(self.name.clone(), self.as_text().to_string())],
        }
    }

    /// True when the field holds nothing. `trim` ignores surrounding whitespace.
    fn is_blank(&self, trim: bool) -> bool {
        match &self.value {
            FieldValue::Text(s) if trim => s.trim().is_empty(),
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Checked(checked) => !checked.iter().any(|c| *c),
        }
    }

    /// Error message for this field's current value, if it fails its rules
    pub fn check(&self, trim: bool) -> Option<&'static str> {
        if !self.required {
            return None;
        }
        if self.is_blank(trim) || (self.is_email() && !is_valid_email(self.as_text())) {
            return Some(self.error_message());
        }
        None
    }

    /// The annotation shown for this field. Chosen by input type, not by failure reason.
    pub fn error_message(&self) -> &'static str {
        if self.is_email() {
            EMAIL_ERROR
        } else {
            REQUIRED_ERROR
        }
    }

    /// Re-run validation and update the error annotation. Returns true if valid.
    pub fn validate(&mut self, trim: bool) -> bool {
        self.error = self.check(trim).map(str::to_string);
        self.error.is_none()
    }

    /// Reset the value and drop any annotation
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Checked(checked) => checked.iter_mut().for_each(|c| *c = false),
        }
        self.error = None;
    }

    /// Text shown for text and select fields
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Select { .. } if self.as_text().is_empty() => "Select...".to_string(),
            _ => self.as_text().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_optional_empty_field_is_valid() {
            let mut field = FormField::text("phone", "Phone");
            assert!(field.validate(false));
            assert!(field.error.is_none());
        }

        #[test]
        fn test_required_empty_field_fails_with_required_message() {
            let mut field = FormField::text("first_name", "First Name").required();
            assert!(!field.validate(false));
            assert_eq!(field.error.as_deref(), Some(REQUIRED_ERROR));
        }

        #[test]
        fn test_required_email_empty_uses_email_message() {
            let mut field = FormField::email("email", "Email").required();
            assert!(!field.validate(false));
            assert_eq!(field.error.as_deref(), Some(EMAIL_ERROR));
        }

        #[test]
        fn test_malformed_email_fails() {
            let mut field = FormField::email("email", "Email").required();
            field.set_text("a@b");
            assert!(!field.validate(false));
        }

        #[test]
        fn test_whitespace_passes_untrimmed_check_only() {
            let mut field = FormField::text("name", "Name").required();
            field.set_text("   ");
            assert!(field.validate(false));
            assert!(!field.validate(true));
        }

        #[test]
        fn test_valid_value_clears_previous_error() {
            let mut field = FormField::text("name", "Name").required();
            field.validate(false);
            assert!(field.error.is_some());
            field.value = FieldValue::Text("Ada".to_string());
            assert!(field.validate(false));
            assert!(field.error.is_none());
        }

        #[test]
        fn test_required_select_placeholder_fails() {
            let mut field = FormField::select("level", "Level", &["basic", "gold"]).required();
            assert!(!field.validate(false));
            field.cycle_option(true);
            assert!(field.validate(false));
        }

        #[test]
        fn test_required_choices_need_one_checked() {
            let mut field = FormField::choices("interests", "Interests", &["a", "b"]).required();
            assert!(!field.validate(false));
            field.toggle_choice(1);
            assert!(field.validate(false));
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_char_clears_error() {
            let mut field = FormField::text("name", "Name").required();
            field.validate(false);
            field.push_char('A');
            assert!(field.error.is_none());
            assert_eq!(field.as_text(), "A");
        }

        #[test]
        fn test_newline_only_in_multiline() {
            let mut single = FormField::text("name", "Name");
            single.push_char('\n');
            assert_eq!(single.as_text(), "");

            let mut multi = FormField::textarea("message", "Message");
            multi.push_char('\n');
            assert_eq!(multi.as_text(), "\n");
        }

        #[test]
        fn test_select_ignores_typing() {
            let mut field = FormField::select("level", "Level", &["basic"]);
            field.push_char('x');
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_cycle_option_wraps_through_placeholder() {
            let mut field = FormField::select("level", "Level", &["basic", "gold"]);
            field.cycle_option(true);
            assert_eq!(field.as_text(), "basic");
            field.cycle_option(true);
            assert_eq!(field.as_text(), "gold");
            field.cycle_option(true);
            assert_eq!(field.as_text(), "");
            field.cycle_option(false);
            assert_eq!(field.as_text(), "gold");
        }

        #[test]
        fn test_select_shows_placeholder_until_chosen() {
            let mut field = FormField::select("level", "Level", &["basic"]);
            assert_eq!(field.display_value(), "Select...");
            field.cycle_option(true);
            assert_eq!(field.display_value(), "basic");
        }

        #[test]
        fn test_toggle_choice_out_of_range_is_noop() {
            let mut field = FormField::choices("interests", "Interests", &["a"]);
            field.toggle_choice(5);
            assert!(!field.is_checked(0));
        }

        #[test]
        fn test_clear_resets_value_and_error() {
            let mut field = FormField::choices("interests", "Interests", &["a", "b"]).required();
            field.toggle_choice(0);
            field.error = Some(REQUIRED_ERROR.to_string());
            field.clear();
            assert!(!field.is_checked(0));
            assert!(field.error.is_none());
        }
    }

    mod entries {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_field_contributes_even_when_empty() {
            let field = FormField::text("phone", "Phone");
            assert_eq!(
                field.entries(),
                vec![("phone".to_string(), String::new())]
            );
        }

        #[test]
        fn test_choices_contribute_checked_in_order() {
            let mut field =
                FormField::choices("interests", "Interests", &["community", "veterans", "events"]);
            field.toggle_choice(1);
            field.toggle_choice(0);
            assert_eq!(
                field.entries(),
                vec![
                    ("interests".to_string(), "community".to_string()),
                    ("interests".to_string(), "veterans".to_string()),
                ]
            );
        }
    }
}

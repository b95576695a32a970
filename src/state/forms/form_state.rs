//! Field focus handling shared by all forms

use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;

    /// Whether the focused field takes newlines
    fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field())
            .is_some_and(|f| f.is_multiline())
    }
}

/// Focus index clamped to the last field
pub(crate) fn clamp_index(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}

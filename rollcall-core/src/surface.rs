//! External collaborator surfaces.
//!
//! The input, display, and status surfaces are the only seams between the
//! core and whatever hosts it. Each trait mirrors the contract surface of
//! its collaborator and nothing more; the `Memory*` implementations back
//! the test suite and the CLI batch driver.

use crate::types::{ProfileId, RawSubmission};
use crate::validate::{Field, FieldErrors};
use crate::view::{CardView, RowView};

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Provides current field values and accepts error/reset/focus commands.
pub trait InputSurface {
    /// Current values of all fields.
    fn read(&self) -> RawSubmission;
    /// Write a message to the field's error slot.
    fn set_error(&mut self, field: Field, message: &str);
    /// Blank every error slot.
    fn clear_errors(&mut self);
    /// Reset all fields to empty.
    fn reset(&mut self);
    /// Move input focus to a field.
    fn focus(&mut self, field: Field);
}

/// Holds the two ordered view collections. Insertions go to the front so
/// the newest accepted profile appears first; removals report whether a
/// unit was present (absence is never an error).
pub trait DisplaySurface {
    fn prepend_card(&mut self, card: CardView);
    fn prepend_row(&mut self, row: RowView);
    fn remove_card(&mut self, id: &ProfileId) -> bool;
    fn remove_row(&mut self, id: &ProfileId) -> bool;
}

/// Accepts a plain status string for announcement. Fire-and-forget; the
/// latest value fully replaces the prior one.
pub trait StatusSurface {
    fn announce(&mut self, message: &str);
}

// ---------------------------------------------------------------------------
// In-memory implementations
// ---------------------------------------------------------------------------

/// Vec-backed input surface: seeded values plus recorded side effects.
#[derive(Debug, Default)]
pub struct MemoryInput {
    values: RawSubmission,
    errors: FieldErrors,
    focused: Option<Field>,
    resets: usize,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the surface with the values the next `read` should return.
    pub fn set_values(&mut self, values: RawSubmission) {
        self.values = values;
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    /// Number of times the controller reset the fields.
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl InputSurface for MemoryInput {
    fn read(&self) -> RawSubmission {
        self.values.clone()
    }

    fn set_error(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn clear_errors(&mut self) {
        self.errors.clear();
    }

    fn reset(&mut self) {
        self.values = RawSubmission::default();
        self.resets += 1;
    }

    fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }
}

/// Vec-backed display surface preserving display order (front = newest).
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    cards: Vec<CardView>,
    rows: Vec<RowView>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }
}

impl DisplaySurface for MemoryDisplay {
    fn prepend_card(&mut self, card: CardView) {
        self.cards.insert(0, card);
    }

    fn prepend_row(&mut self, row: RowView) {
        self.rows.insert(0, row);
    }

    fn remove_card(&mut self, id: &ProfileId) -> bool {
        match self.cards.iter().position(|c| c.id == *id) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    fn remove_row(&mut self, id: &ProfileId) -> bool {
        match self.rows.iter().position(|r| r.id == *id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Records the latest announcement only, like an `aria-live` region.
#[derive(Debug, Default)]
pub struct MemoryStatus {
    last: Option<String>,
}

impl MemoryStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl StatusSurface for MemoryStatus {
    fn announce(&mut self, message: &str) {
        self.last = Some(message.to_string());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_input_records_errors_and_reset() {
        let mut input = MemoryInput::new();
        input.set_error(Field::Email, "Email is required.");
        assert_eq!(input.errors().len(), 1);
        input.clear_errors();
        assert!(input.errors().is_empty());
        input.set_values(RawSubmission { first_name: "Ada".into(), ..Default::default() });
        input.reset();
        assert_eq!(input.read(), RawSubmission::default());
        assert_eq!(input.resets(), 1);
    }

    #[test]
    fn memory_status_keeps_latest_only() {
        let mut status = MemoryStatus::new();
        status.announce("first");
        status.announce("second");
        assert_eq!(status.last(), Some("second"));
    }
}

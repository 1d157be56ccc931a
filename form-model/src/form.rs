//! Change / blur / submit transitions and the validity derivation.
//!
//! Everything here is a pure function of the entry snapshot and the current
//! state maps; the frontend mirrors these transitions onto its reactive
//! state slots, tests drive `FormState` directly.

use crate::field::{Field, FieldEntries};
use crate::schema::{self, Submission, ValidationError};
use crate::state::{ErrorStates, FlagStates};

/// Outcome of one change event: full replacements for `changed` and `errors`.
pub fn change_outcome(entries: &FieldEntries) -> (FlagStates, ErrorStates) {
    (changed_snapshot(entries), errors_snapshot(entries))
}

/// `changed` is recomputed wholesale on every event: a field counts as
/// changed iff its current raw value is non-empty. Clearing a field
/// un-marks it (deliberately not a sticky "ever changed" flag).
pub fn changed_snapshot(entries: &FieldEntries) -> FlagStates {
    FlagStates::new().merge(
        entries
            .iter()
            .map(|(field, value)| (field, !value.is_empty())),
    )
}

/// Fresh `errors` mapping for the current snapshot. A successful validation
/// clears every message, even for fields not involved in the triggering
/// event; a failure merges the per-field messages onto the all-clear map.
pub fn errors_snapshot(entries: &FieldEntries) -> ErrorStates {
    match schema::validate(entries) {
        Ok(_) => ErrorStates::new(),
        Err(error) => ErrorStates::new().merge(
            error
                .issues()
                .iter()
                .map(|issue| (issue.field, Some(issue.message.clone()))),
        ),
    }
}

/// The submit button is enabled iff no field is invalid and at least one
/// field has changed.
pub fn is_valid(errors: &ErrorStates, changed: &FlagStates) -> bool {
    errors.all_clear() && changed.any_set()
}

/// Headless form component: the entry snapshot plus the three state slots,
/// with no rendering attached.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub entries: FieldEntries,
    pub errors: ErrorStates,
    pub changed: FlagStates,
    pub touched: FlagStates,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input mutation: overwrite one raw value, then recompute `changed` and
    /// `errors` from the whole snapshot. `touched` is left alone.
    pub fn on_change(&mut self, field: Field, value: impl Into<String>) {
        self.entries.set(field, value);
        let (changed, errors) = change_outcome(&self.entries);
        self.changed = changed;
        self.errors = errors;
    }

    /// Focus lost: mark the field as touched. Never reverts.
    pub fn on_blur(&mut self, field: Field) {
        self.touched = self.touched.merge([(field, true)]);
    }

    pub fn is_valid(&self) -> bool {
        is_valid(&self.errors, &self.changed)
    }

    /// Helper/error text is shown only for fields that are both touched and
    /// currently invalid.
    pub fn error_visible(&self, field: Field) -> bool {
        self.touched.is_set(field) && self.errors.message(field).is_some()
    }

    /// Terminal submit action: coerces the current snapshot into the payload
    /// handed to the observability sink. Only meaningful while `is_valid()`;
    /// callers gate on that.
    pub fn submit(&self) -> Result<Submission, ValidationError> {
        schema::validate(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_tracks_non_empty_values_only() {
        let entries = FieldEntries::new().with(Field::Name, "Alice");
        let changed = changed_snapshot(&entries);
        assert!(changed.is_set(Field::Name));
        assert!(!changed.is_set(Field::Age));
    }

    #[test]
    fn clearing_a_field_unmarks_it_as_changed() {
        let mut form = FormState::new();
        form.on_change(Field::Name, "Alice");
        assert!(form.changed.is_set(Field::Name));

        form.on_change(Field::Name, "");
        assert!(!form.changed.is_set(Field::Name));
    }

    #[test]
    fn errors_reset_entirely_once_the_snapshot_validates() {
        let mut form = FormState::new();
        form.on_change(Field::Name, "A");
        form.on_change(Field::Age, "10");
        assert!(form.errors.message(Field::Name).is_some());
        assert!(form.errors.message(Field::Age).is_some());

        form.on_change(Field::Name, "Alice");
        form.on_change(Field::Age, "30");
        assert!(form.errors.all_clear());
    }

    #[test]
    fn validity_requires_no_errors_and_at_least_one_change() {
        let errors = ErrorStates::new();
        let changed = FlagStates::new();
        assert!(!is_valid(&errors, &changed));

        let changed = changed.merge([(Field::Name, true)]);
        assert!(is_valid(&errors, &changed));

        let errors = errors.merge([(Field::Age, Some("Must be a number".to_string()))]);
        assert!(!is_valid(&errors, &changed));
    }

    #[test]
    fn blur_does_not_disturb_errors_or_changed() {
        let mut form = FormState::new();
        form.on_blur(Field::Age);
        assert!(form.touched.is_set(Field::Age));
        assert!(form.errors.all_clear());
        assert!(!form.changed.any_set());
    }
}

//! End-to-end scenarios for the headless form component, driven the same
//! way the frontend drives it: one change event per keystroke snapshot,
//! blur events per field, submit at the end.

use form_model::{Field, FormState};

#[test]
fn empty_form_stays_invalid() {
    let mut form = FormState::new();
    form.on_change(Field::Name, "");
    form.on_change(Field::Age, "");

    assert!(!form.changed.is_set(Field::Name));
    assert!(!form.changed.is_set(Field::Age));
    assert!(!form.is_valid());
}

#[test]
fn underage_input_flags_only_the_age_field() {
    let mut form = FormState::new();
    form.on_change(Field::Name, "Al");
    form.on_change(Field::Age, "10");

    assert!(form.errors.message(Field::Age).is_some());
    assert!(form.errors.message(Field::Name).is_none());
    assert!(form.changed.is_set(Field::Name));
    assert!(form.changed.is_set(Field::Age));
    assert!(!form.is_valid());
}

#[test]
fn valid_input_enables_submit_and_reports_the_coerced_payload() {
    let mut form = FormState::new();
    form.on_change(Field::Name, "Alice");
    form.on_change(Field::Age, "30");

    assert!(form.errors.all_clear());
    assert!(form.changed.is_set(Field::Name));
    assert!(form.changed.is_set(Field::Age));
    assert!(form.is_valid());

    let submission = form.submit().unwrap();
    assert_eq!(submission.name, "Alice");
    assert_eq!(submission.age, 30.0);
}

#[test]
fn blur_before_any_input_shows_no_error() {
    let mut form = FormState::new();
    form.on_blur(Field::Age);

    assert!(form.touched.is_set(Field::Age));
    // No change event has run validation yet, so nothing is visible.
    assert!(!form.error_visible(Field::Age));
}

#[test]
fn error_becomes_visible_once_touched_and_invalid() {
    let mut form = FormState::new();
    form.on_change(Field::Age, "10");
    // Invalid but not yet touched: still hidden.
    assert!(!form.error_visible(Field::Age));

    form.on_blur(Field::Age);
    assert!(form.error_visible(Field::Age));

    // Fixing the value hides the message again; touched stays set.
    form.on_change(Field::Age, "30");
    assert!(!form.error_visible(Field::Age));
    assert!(form.touched.is_set(Field::Age));
}

#[test]
fn fixing_one_field_keeps_the_other_fields_error() {
    let mut form = FormState::new();
    form.on_change(Field::Name, "A");
    form.on_change(Field::Age, "10");

    form.on_change(Field::Name, "Alice");
    assert!(form.errors.message(Field::Name).is_none());
    assert!(form.errors.message(Field::Age).is_some());
    assert!(!form.is_valid());
}

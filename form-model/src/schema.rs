//! Declarative constraints for the form fields and the validator that
//! applies them to a raw entry snapshot.

use crate::field::{Field, FieldEntries};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const AGE_MIN: f64 = 18.0;
pub const AGE_MAX: f64 = 199.0;

/// Successfully validated and coerced form payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub age: f64,
}

/// One offending field with its human-readable message.
#[derive(Clone, Debug, PartialEq)]
pub struct Issue {
    pub field: Field,
    pub message: String,
}

/// Returned when one or more fields violate their constraints.
///
/// Routine data, not an exceptional condition: the change handler turns it
/// into the `errors` mapping on every keystroke. At most one issue per field
/// (the first violated constraint wins), in field declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
    issues: SmallVec<[Issue; 2]>,
}

impl ValidationError {
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid form input:")?;
        for issue in &self.issues {
            write!(f, " {}: {};", issue.field, issue.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Validates the whole entry snapshot.
///
/// On success returns the coerced payload; on failure accumulates one issue
/// per offending field. No side effects.
pub fn validate(entries: &FieldEntries) -> Result<Submission, ValidationError> {
    let name = validate_name(entries.get(Field::Name));
    let age = validate_age(entries.get(Field::Age));
    match (name, age) {
        (Ok(name), Ok(age)) => Ok(Submission { name, age }),
        (name, age) => {
            let mut issues = SmallVec::new();
            if let Err(message) = name {
                issues.push(Issue {
                    field: Field::Name,
                    message,
                });
            }
            if let Err(message) = age {
                issues.push(Issue {
                    field: Field::Age,
                    message,
                });
            }
            Err(ValidationError { issues })
        }
    }
}

fn validate_name(raw: &str) -> Result<String, String> {
    let chars = raw.chars().count();
    if chars < NAME_MIN_CHARS {
        return Err(format!("Must be at least {NAME_MIN_CHARS} characters"));
    }
    if chars > NAME_MAX_CHARS {
        return Err(format!("Must be at most {NAME_MAX_CHARS} characters"));
    }
    Ok(raw.to_string())
}

fn validate_age(raw: &str) -> Result<f64, String> {
    let Some(age) = coerce_number(raw) else {
        return Err("Must be a number".to_string());
    };
    if age < AGE_MIN {
        return Err(format!("Must be at least {AGE_MIN}"));
    }
    if age > AGE_MAX {
        return Err(format!("Must be at most {AGE_MAX}"));
    }
    Ok(age)
}

/// Browser-style numeric coercion: surrounding whitespace is ignored, the
/// empty string coerces to 0 (and then fails the range check), anything
/// unparsable or non-finite is a coercion failure.
fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

//! Headless model for the signup form: the fixed field enumeration, the
//! schema validator, the merge-patch state stores and the event transitions.
//! Platform-free so the whole behavior is testable without a browser.

pub mod field;
pub mod form;
pub mod schema;
pub mod state;

pub use field::{Field, FieldEntries};
pub use form::FormState;
pub use schema::{Submission, ValidationError};
pub use state::{ErrorStates, FieldStates, FlagStates};

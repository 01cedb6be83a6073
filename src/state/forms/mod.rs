//! Form domain layer
//!
//! Field definitions, the draft, input filtering, validation and focus.

mod draft;
mod field;
mod focus;
mod validator;

pub use draft::FormDraft;
pub use field::{FieldInput, FieldName, FieldSet, FormVariant, InputOutcome};
pub use focus::{focus_order, ConfirmOption, FocusTarget, FormButton, FormFocus};
pub use validator::{validate, validate_field, FieldErrors};

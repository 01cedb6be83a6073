//! Field validation rules
//!
//! Validation is a pure function of the draft and the active field set.
//! Every pass recomputes the full error map; there is no incremental state.

use super::draft::FormDraft;
use super::field::{FieldName, FieldSet};
use std::collections::BTreeMap;

pub const FIRST_NAME_REQUIRED: &str = "First Name is required";
pub const LAST_NAME_REQUIRED: &str = "Last Name is required";
pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of Birth is required";
pub const SSN_INVALID: &str = "SSN must be 4 digits";
pub const HOUSEHOLD_SIZE_INVALID: &str = "Household size must be between 1 and 8";
pub const INCOME_INVALID: &str = "Valid Income is required";
pub const ADDRESS_REQUIRED: &str = "Address is required";
pub const PROGRAM_NAME_REQUIRED: &str = "Program Name is required if enrolled";

/// Per-field validation messages; a missing key means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Fields in error, in display order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub(crate) fn set(&mut self, field: FieldName, message: Option<String>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }
}

/// Validate every active field of the draft
pub fn validate(draft: &FormDraft, fields: FieldSet) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in fields.fields() {
        errors.set(field, validate_field(draft, fields, field));
    }
    errors
}

/// Validate a single field; inactive fields are always valid
pub fn validate_field(draft: &FormDraft, fields: FieldSet, field: FieldName) -> Option<String> {
    if !fields.includes(field) {
        return None;
    }

    let failed = match field {
        FieldName::FirstName => is_blank(&draft.first_name).then_some(FIRST_NAME_REQUIRED),
        FieldName::LastName => is_blank(&draft.last_name).then_some(LAST_NAME_REQUIRED),
        FieldName::DateOfBirth => draft
            .date_of_birth
            .is_empty()
            .then_some(DATE_OF_BIRTH_REQUIRED),
        FieldName::SsnLast4 => (!is_four_digits(&draft.ssn_last4)).then_some(SSN_INVALID),
        FieldName::HouseholdSize => {
            (!is_household_size(&draft.household_size)).then_some(HOUSEHOLD_SIZE_INVALID)
        }
        FieldName::Income => (!is_positive_amount(&draft.income)).then_some(INCOME_INVALID),
        FieldName::Address => is_blank(&draft.address).then_some(ADDRESS_REQUIRED),
        FieldName::IsEnrolledInProgram => None,
        FieldName::ProgramName => (draft.is_enrolled_in_program
            && is_blank(&draft.program_name))
        .then_some(PROGRAM_NAME_REQUIRED),
    };

    failed.map(str::to_string)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_four_digits(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_household_size(value: &str) -> bool {
    value
        .trim()
        .parse::<i64>()
        .is_ok_and(|size| (1..=8).contains(&size))
}

fn is_positive_amount(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|amount| amount.is_finite() && amount > 0.0)
}

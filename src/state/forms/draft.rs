//! The in-progress application draft

use super::field::{FieldInput, FieldName, FieldSet, InputOutcome};
use crate::state::ApplicationPayload;

/// User-editable form data
///
/// Numeric fields are kept as the raw text the user typed so that the
/// validator can report malformed values instead of losing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub ssn_last4: String,
    pub household_size: String,
    pub income: String,
    pub address: String,
    pub is_enrolled_in_program: bool,
    pub program_name: String,
}

impl FormDraft {
    /// Raw text of a field (empty for the checkbox)
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::DateOfBirth => &self.date_of_birth,
            FieldName::SsnLast4 => &self.ssn_last4,
            FieldName::HouseholdSize => &self.household_size,
            FieldName::Income => &self.income,
            FieldName::Address => &self.address,
            FieldName::IsEnrolledInProgram => "",
            FieldName::ProgramName => &self.program_name,
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::DateOfBirth => Some(&mut self.date_of_birth),
            FieldName::SsnLast4 => Some(&mut self.ssn_last4),
            FieldName::HouseholdSize => Some(&mut self.household_size),
            FieldName::Income => Some(&mut self.income),
            FieldName::Address => Some(&mut self.address),
            FieldName::IsEnrolledInProgram => None,
            FieldName::ProgramName => Some(&mut self.program_name),
        }
    }

    /// Apply an edit through the input boundary.
    ///
    /// Disallowed characters are dropped silently; nothing here is an error.
    pub fn apply(&mut self, field: FieldName, input: FieldInput) -> InputOutcome {
        if field.is_checkbox() {
            return match input {
                FieldInput::Toggle | FieldInput::Char(' ') => {
                    self.is_enrolled_in_program = !self.is_enrolled_in_program;
                    InputOutcome {
                        changed: true,
                        advance_focus: false,
                    }
                }
                _ => InputOutcome::default(),
            };
        }

        let max_len = field.max_len().unwrap_or(usize::MAX);
        let Some(value) = self.text_mut(field) else {
            return InputOutcome::default();
        };
        let before = value.chars().count();

        let changed = match input {
            FieldInput::Char(c) => {
                if field.accepts(c) && before < max_len {
                    value.push(c);
                    true
                } else {
                    false
                }
            }
            FieldInput::Backspace => value.pop().is_some(),
            FieldInput::Replace(raw) => {
                let filtered: String = raw
                    .chars()
                    .filter(|c| field.accepts(*c))
                    .take(max_len)
                    .collect();
                if filtered == *value {
                    false
                } else {
                    *value = filtered;
                    true
                }
            }
            FieldInput::Toggle => false,
        };

        let after = value.chars().count();
        InputOutcome {
            changed,
            advance_focus: changed
                && field.advances_when_full()
                && before < max_len
                && after == max_len,
        }
    }

    /// Text shown for a field in the form
    pub fn display_value(&self, field: FieldName) -> String {
        if field.is_checkbox() {
            if self.is_enrolled_in_program {
                "[x] Yes".to_string()
            } else {
                "[ ] No".to_string()
            }
        } else {
            self.text(field).to_string()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build the request body for the active field set
    pub fn payload(&self, fields: FieldSet) -> ApplicationPayload {
        ApplicationPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            ssn_last4: self.ssn_last4.clone(),
            household_size: fields
                .household_size
                .then(|| self.household_size.trim().parse().ok())
                .flatten(),
            income: fields
                .income
                .then(|| self.income.trim().parse().ok())
                .flatten(),
            address: self.address.clone(),
            is_enrolled_in_program: fields.program.then_some(self.is_enrolled_in_program),
            program_name: fields.program.then(|| self.program_name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn type_str(draft: &mut FormDraft, field: FieldName, text: &str) -> Vec<InputOutcome> {
        text.chars()
            .map(|c| draft.apply(field, FieldInput::Char(c)))
            .collect()
    }

    mod input_filtering {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ssn_keeps_digits_and_advances_once() {
            let mut draft = FormDraft::default();
            let outcomes = type_str(&mut draft, FieldName::SsnLast4, "1a2b3c4");

            assert_eq!(draft.ssn_last4, "1234");
            let advances: Vec<_> = outcomes
                .iter()
                .enumerate()
                .filter(|(_, o)| o.advance_focus)
                .map(|(i, _)| i)
                .collect();
            // Only the keystroke that landed the fourth digit
            assert_eq!(advances, vec![6]);
        }

        #[test]
        fn test_ssn_ignores_fifth_digit() {
            let mut draft = FormDraft::default();
            type_str(&mut draft, FieldName::SsnLast4, "1234");
            let outcome = draft.apply(FieldName::SsnLast4, FieldInput::Char('5'));
            assert_eq!(draft.ssn_last4, "1234");
            assert_eq!(outcome, InputOutcome::default());
        }

        #[test]
        fn test_ssn_advances_again_after_backspace() {
            let mut draft = FormDraft::default();
            type_str(&mut draft, FieldName::SsnLast4, "1234");
            draft.apply(FieldName::SsnLast4, FieldInput::Backspace);
            let outcome = draft.apply(FieldName::SsnLast4, FieldInput::Char('9'));
            assert!(outcome.advance_focus);
            assert_eq!(draft.ssn_last4, "1239");
        }

        #[test]
        fn test_name_rejects_digits_and_punctuation() {
            let mut draft = FormDraft::default();
            type_str(&mut draft, FieldName::FirstName, "An4a-Marie");
            assert_eq!(draft.first_name, "AnaMarie");
        }

        #[test]
        fn test_household_accepts_one_digit_from_one_to_nine() {
            let mut draft = FormDraft::default();
            type_str(&mut draft, FieldName::HouseholdSize, "0x93");
            assert_eq!(draft.household_size, "9");
        }

        #[test]
        fn test_replace_filters_whole_value() {
            let mut draft = FormDraft::default();
            let outcome = draft.apply(
                FieldName::SsnLast4,
                FieldInput::Replace("12-34-5678".to_string()),
            );
            assert_eq!(draft.ssn_last4, "1234");
            assert!(outcome.changed);
            assert!(outcome.advance_focus);
        }

        #[test]
        fn test_replace_with_same_value_is_unchanged() {
            let mut draft = FormDraft {
                address: "1 Main St".to_string(),
                ..Default::default()
            };
            let outcome = draft.apply(
                FieldName::Address,
                FieldInput::Replace("1 Main St".to_string()),
            );
            assert!(!outcome.changed);
        }

        #[test]
        fn test_backspace_on_empty_is_unchanged() {
            let mut draft = FormDraft::default();
            let outcome = draft.apply(FieldName::Address, FieldInput::Backspace);
            assert!(!outcome.changed);
        }

        #[test]
        fn test_checkbox_toggles_on_space() {
            let mut draft = FormDraft::default();
            assert!(
                draft
                    .apply(FieldName::IsEnrolledInProgram, FieldInput::Char(' '))
                    .changed
            );
            assert!(draft.is_enrolled_in_program);
            draft.apply(FieldName::IsEnrolledInProgram, FieldInput::Toggle);
            assert!(!draft.is_enrolled_in_program);
        }

        #[test]
        fn test_checkbox_ignores_text() {
            let mut draft = FormDraft::default();
            let outcome = draft.apply(FieldName::IsEnrolledInProgram, FieldInput::Char('y'));
            assert!(!outcome.changed);
            assert!(!draft.is_enrolled_in_program);
        }

        #[test]
        fn test_date_of_birth_caps_at_ten_characters() {
            let mut draft = FormDraft::default();
            type_str(&mut draft, FieldName::DateOfBirth, "1990-01-01-99");
            assert_eq!(draft.date_of_birth, "1990-01-01");
        }
    }

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_extended_payload_carries_typed_values() {
            let draft = FormDraft {
                first_name: "Ana".to_string(),
                last_name: "Li".to_string(),
                date_of_birth: "1990-01-01".to_string(),
                ssn_last4: "1234".to_string(),
                household_size: "3".to_string(),
                income: "42000.50".to_string(),
                address: "1 Main St".to_string(),
                is_enrolled_in_program: true,
                program_name: "SNAP".to_string(),
            };

            assert_eq!(
                serde_json::to_value(draft.payload(FieldSet::EXTENDED)).unwrap(),
                json!({
                    "first_name": "Ana",
                    "last_name": "Li",
                    "date_of_birth": "1990-01-01",
                    "ssn_last4": "1234",
                    "household_size": 3,
                    "income": 42000.5,
                    "address": "1 Main St",
                    "is_enrolled_in_program": true,
                    "program_name": "SNAP",
                })
            );
        }

        #[test]
        fn test_minimal_payload_ignores_extended_values() {
            let draft = FormDraft {
                household_size: "3".to_string(),
                is_enrolled_in_program: true,
                ..Default::default()
            };
            let payload = draft.payload(FieldSet::MINIMAL);
            assert!(payload.household_size.is_none());
            assert!(payload.is_enrolled_in_program.is_none());
            assert!(payload.program_name.is_none());
        }
    }

    #[test]
    fn test_display_value_for_checkbox() {
        let mut draft = FormDraft::default();
        assert_eq!(draft.display_value(FieldName::IsEnrolledInProgram), "[ ] No");
        draft.is_enrolled_in_program = true;
        assert_eq!(draft.display_value(FieldName::IsEnrolledInProgram), "[x] Yes");
    }

    #[test]
    fn test_default_is_empty() {
        assert!(FormDraft::default().is_empty());
    }
}

//! Form field identifiers, field-set policy and input filtering

use serde::{Deserialize, Serialize};

/// Every field the application form can carry, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    DateOfBirth,
    SsnLast4,
    HouseholdSize,
    Income,
    Address,
    IsEnrolledInProgram,
    ProgramName,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::DateOfBirth,
        FieldName::SsnLast4,
        FieldName::HouseholdSize,
        FieldName::Income,
        FieldName::Address,
        FieldName::IsEnrolledInProgram,
        FieldName::ProgramName,
    ];

    /// Wire key used in the JSON payload
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::DateOfBirth => "date_of_birth",
            Self::SsnLast4 => "ssn_last4",
            Self::HouseholdSize => "household_size",
            Self::Income => "income",
            Self::Address => "address",
            Self::IsEnrolledInProgram => "is_enrolled_in_program",
            Self::ProgramName => "program_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::DateOfBirth => "Date of Birth (YYYY-MM-DD)",
            Self::SsnLast4 => "Last 4 digits of SSN",
            Self::HouseholdSize => "People in Household (1-8)",
            Self::Income => "Income (in $)",
            Self::Address => "Address",
            Self::IsEnrolledInProgram => "Enrolled in a government assistance program?",
            Self::ProgramName => "Program Name",
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, Self::IsEnrolledInProgram)
    }

    /// Whether a single keystroke may enter this field
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::FirstName | Self::LastName => c.is_ascii_alphabetic() || c.is_whitespace(),
            Self::DateOfBirth => c.is_ascii_digit() || c == '-',
            Self::SsnLast4 => c.is_ascii_digit(),
            Self::HouseholdSize => ('1'..='9').contains(&c),
            Self::Income | Self::Address | Self::ProgramName => !c.is_control(),
            Self::IsEnrolledInProgram => false,
        }
    }

    /// Maximum number of characters the input boundary keeps
    pub fn max_len(self) -> Option<usize> {
        match self {
            Self::DateOfBirth => Some(10),
            Self::SsnLast4 => Some(4),
            Self::HouseholdSize => Some(1),
            _ => None,
        }
    }

    /// Focus leaves the field as soon as it is full
    pub fn advances_when_full(self) -> bool {
        matches!(self, Self::SsnLast4)
    }

    /// Fields whose rule reads this field's value
    pub fn dependents(self) -> &'static [FieldName] {
        match self {
            Self::IsEnrolledInProgram => &[FieldName::ProgramName],
            _ => &[],
        }
    }
}

/// Which optional fields a form carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSet {
    pub household_size: bool,
    pub income: bool,
    pub program: bool,
}

impl FieldSet {
    pub const MINIMAL: FieldSet = FieldSet {
        household_size: false,
        income: false,
        program: false,
    };

    pub const EXTENDED: FieldSet = FieldSet {
        household_size: true,
        income: true,
        program: true,
    };

    pub fn includes(&self, field: FieldName) -> bool {
        match field {
            FieldName::HouseholdSize => self.household_size,
            FieldName::Income => self.income,
            FieldName::IsEnrolledInProgram | FieldName::ProgramName => self.program,
            _ => true,
        }
    }

    /// Active fields in display order
    pub fn fields(self) -> impl Iterator<Item = FieldName> {
        FieldName::ALL.into_iter().filter(move |f| self.includes(*f))
    }
}

/// Form layouts the application can present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    #[default]
    Minimal,
    Extended,
    /// Minimal fields with focus auto-advance called out in the help bar
    Guided,
}

impl FormVariant {
    pub fn field_set(self) -> FieldSet {
        match self {
            Self::Minimal | Self::Guided => FieldSet::MINIMAL,
            Self::Extended => FieldSet::EXTENDED,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Application Form",
            Self::Extended => "Assistance Application",
            Self::Guided => "Guided Application",
        }
    }
}

/// A single edit intent delivered to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Char(char),
    Backspace,
    /// Replace the whole value, e.g. from a paste
    Replace(String),
    Toggle,
}

/// What an edit did to the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    pub changed: bool,
    pub advance_focus: bool,
}

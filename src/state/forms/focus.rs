//! Keyboard focus across form fields and the button row

use super::draft::FormDraft;
use super::field::{FieldName, FieldSet};

/// Something that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldName),
    Buttons,
}

/// Buttons below the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Clear,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Clear,
            Self::Clear => Self::Submit,
        };
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Clear => "Clear",
        }
    }
}

/// Options in the confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmOption {
    #[default]
    Confirm,
    Cancel,
}

impl ConfirmOption {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Confirm => Self::Cancel,
            Self::Cancel => Self::Confirm,
        };
    }
}

/// Focus order for the current draft.
///
/// The program name only takes focus while the enrolment box is ticked.
pub fn focus_order(fields: FieldSet, draft: &FormDraft) -> Vec<FocusTarget> {
    fields
        .fields()
        .filter(|f| *f != FieldName::ProgramName || draft.is_enrolled_in_program)
        .map(FocusTarget::Field)
        .chain(std::iter::once(FocusTarget::Buttons))
        .collect()
}

/// Focus cursor over [`focus_order`]
#[derive(Debug, Clone, Default)]
pub struct FormFocus {
    index: usize,
    pub selected_button: FormButton,
}

impl FormFocus {
    pub fn current(&self, fields: FieldSet, draft: &FormDraft) -> FocusTarget {
        let order = focus_order(fields, draft);
        let index = self.index.min(order.len() - 1);
        order[index]
    }

    pub fn next(&mut self, fields: FieldSet, draft: &FormDraft) {
        let count = focus_order(fields, draft).len();
        self.index = (self.index.min(count - 1) + 1) % count;
    }

    pub fn prev(&mut self, fields: FieldSet, draft: &FormDraft) {
        let count = focus_order(fields, draft).len();
        let current = self.index.min(count - 1);
        self.index = if current == 0 { count - 1 } else { current - 1 };
    }

    /// Move focus onto a field, if it can currently take focus
    pub fn focus(&mut self, target: FocusTarget, fields: FieldSet, draft: &FormDraft) {
        if let Some(index) = focus_order(fields, draft).iter().position(|t| *t == target) {
            self.index = index;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.selected_button = FormButton::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_order_ends_with_buttons() {
        let order = focus_order(FieldSet::MINIMAL, &FormDraft::default());
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], FocusTarget::Field(FieldName::FirstName));
        assert_eq!(order[5], FocusTarget::Buttons);
    }

    #[test]
    fn test_program_name_needs_enrolment() {
        let mut draft = FormDraft::default();
        let order = focus_order(FieldSet::EXTENDED, &draft);
        assert!(!order.contains(&FocusTarget::Field(FieldName::ProgramName)));

        draft.is_enrolled_in_program = true;
        let order = focus_order(FieldSet::EXTENDED, &draft);
        assert!(order.contains(&FocusTarget::Field(FieldName::ProgramName)));
    }

    #[test]
    fn test_next_wraps_around() {
        let draft = FormDraft::default();
        let mut focus = FormFocus::default();
        for _ in 0..6 {
            focus.next(FieldSet::MINIMAL, &draft);
        }
        assert_eq!(
            focus.current(FieldSet::MINIMAL, &draft),
            FocusTarget::Field(FieldName::FirstName)
        );
    }

    #[test]
    fn test_prev_wraps_to_buttons() {
        let draft = FormDraft::default();
        let mut focus = FormFocus::default();
        focus.prev(FieldSet::MINIMAL, &draft);
        assert_eq!(focus.current(FieldSet::MINIMAL, &draft), FocusTarget::Buttons);
    }

    #[test]
    fn test_current_clamps_when_order_shrinks() {
        let mut draft = FormDraft {
            is_enrolled_in_program: true,
            ..Default::default()
        };
        let mut focus = FormFocus::default();
        focus.focus(FocusTarget::Buttons, FieldSet::EXTENDED, &draft);
        draft.is_enrolled_in_program = false;
        assert_eq!(focus.current(FieldSet::EXTENDED, &draft), FocusTarget::Buttons);
    }

    #[test]
    fn test_focus_skips_unavailable_target() {
        let draft = FormDraft::default();
        let mut focus = FormFocus::default();
        focus.focus(
            FocusTarget::Field(FieldName::Income),
            FieldSet::MINIMAL,
            &draft,
        );
        assert_eq!(
            focus.current(FieldSet::MINIMAL, &draft),
            FocusTarget::Field(FieldName::FirstName)
        );
    }

    #[test]
    fn test_buttons_toggle() {
        let mut button = FormButton::default();
        button.toggle();
        assert_eq!(button, FormButton::Clear);
        button.toggle();
        assert_eq!(button, FormButton::Submit);
    }
}

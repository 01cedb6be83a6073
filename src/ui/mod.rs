//! UI module for rendering the TUI

mod components;
mod details;
mod forms;
mod layout;

use crate::app::App;
use crate::state::LifecyclePhase;
use components::render_confirm_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, details_area) = layout::create_layout(frame.area());

    forms::draw(frame, form_area, app);
    details::draw(frame, details_area, app);
    layout::draw_status_bar(frame, app);

    if app.form.phase() == LifecyclePhase::Confirming {
        render_confirm_dialog(frame, app.form.draft(), app.confirm_option);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApplicationClientTrait;
    use crate::state::{FieldInput, FieldName, FormVariant, SubmissionPolicy};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::with_client(
            Arc::new(MockApplicationClientTrait::new()),
            FormVariant::Minimal,
            SubmissionPolicy::default(),
        )
    }

    #[test]
    fn test_renders_form_fields() {
        let screen = render(&app());
        assert!(screen.contains("Application Form"));
        assert!(screen.contains("First Name"));
        assert!(screen.contains("Last 4 digits of SSN"));
        assert!(screen.contains("No submission yet"));
    }

    #[test]
    fn test_renders_validation_errors() {
        let mut app = app();
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Please fix the errors before submitting."));
        assert!(screen.contains("First Name is required"));
    }

    fn fill(app: &mut App) {
        for (field, text) in [
            (FieldName::FirstName, "Ana"),
            (FieldName::LastName, "Li"),
            (FieldName::DateOfBirth, "1990-01-01"),
            (FieldName::SsnLast4, "1234"),
            (FieldName::Address, "1 Main St"),
        ] {
            app.form.edit(field, FieldInput::Replace(text.to_string()));
        }
    }

    #[test]
    fn test_renders_pending_request_after_clear() {
        let mut app = app();
        fill(&mut app);
        app.submit();
        assert!(app.form.confirm().is_some());
        app.clear();

        let screen = render(&app);
        assert!(screen.contains("Waiting for the previous submission to finish..."));
        assert!(screen.contains("Submitting..."));
    }

    #[test]
    fn test_renders_confirm_dialog() {
        let mut app = app();
        fill(&mut app);
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Confirm Submission"));
        assert!(screen.contains("Ana Li?"));
    }
}

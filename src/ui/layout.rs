//! Layout components (panels, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, REFRESH_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FocusTarget, FormVariant, LifecyclePhase, Settlement};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form (left) and details (right)
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(44),        // Form
            Constraint::Percentage(40), // Details
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let phase = app.form.phase();
    let indicator_color = match phase {
        LifecyclePhase::Editing => Color::Gray,
        LifecyclePhase::Confirming | LifecyclePhase::Submitting => Color::Yellow,
        LifecyclePhase::Settled(Settlement::Success) => Color::Green,
        LifecyclePhase::Settled(Settlement::Failed) => Color::Red,
    };

    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(indicator_color)),
        Span::styled(phase.label(), Style::default().fg(indicator_color)),
        Span::raw(" | "),
        Span::styled(get_hints(app), Style::default().fg(Color::Gray)),
    ];

    if let Some(url) = &app.api_base_url {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(url.as_str(), Style::default().fg(Color::Blue)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current phase and focus
fn get_hints(app: &App) -> String {
    if app.form.phase() == LifecyclePhase::Confirming {
        return "←→:select  Enter:choose  y:confirm  n/Esc:cancel".to_string();
    }

    let mut hints = format!(
        "Tab:next  {SUBMIT_SHORTCUT}:submit  {CLEAR_SHORTCUT}:clear  {REFRESH_SHORTCUT}:history"
    );
    match app.current_focus() {
        FocusTarget::Field(field) if field.is_checkbox() => hints.push_str("  Space:toggle"),
        FocusTarget::Buttons => hints.push_str("  ←→:select  Enter:press"),
        FocusTarget::Field(_) => {}
    }
    if app.variant == FormVariant::Guided {
        hints.push_str("  (SSN moves on after 4 digits)");
    }
    hints
}

//! Application form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{
    focus_order, FocusTarget, FormButton, FormSnapshot, LifecyclePhase, Settlement,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw the form fields, status banner and button row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.form.snapshot();
    let focus = app.current_focus();
    let fields: Vec<_> = focus_order(app.form.fields(), &snapshot.draft)
        .into_iter()
        .filter_map(|target| match target {
            FocusTarget::Field(field) => Some(field),
            FocusTarget::Buttons => None,
        })
        .collect();

    let border_color = if snapshot.phase == LifecyclePhase::Confirming {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(format!(" {} ", app.variant.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    draw_banner(frame, chunks[0], &snapshot, app.form.is_busy());

    for (idx, field) in fields.iter().enumerate() {
        let value = snapshot.draft.display_value(*field);
        draw_field(
            frame,
            chunks[idx + 1],
            field.label(),
            &value,
            focus == FocusTarget::Field(*field),
            snapshot.field_errors.get(*field),
        );
    }

    draw_buttons(frame, chunks[fields.len() + 1], app, focus == FocusTarget::Buttons);
}

/// One-line form-level message above the fields
fn draw_banner(frame: &mut Frame, area: Rect, snapshot: &FormSnapshot, busy: bool) {
    let line = if let Some(message) = &snapshot.error_message {
        Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        match snapshot.phase {
            LifecyclePhase::Submitting => Line::from(Span::styled(
                "Submitting application...",
                Style::default().fg(Color::Yellow),
            )),
            // Cleared while a request was still out
            LifecyclePhase::Editing if busy => Line::from(Span::styled(
                "Waiting for the previous submission to finish...",
                Style::default().fg(Color::Yellow),
            )),
            LifecyclePhase::Settled(Settlement::Success) => Line::from(Span::styled(
                "Application submitted",
                Style::default().fg(Color::Green),
            )),
            _ => Line::from(""),
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, is_focused: bool) {
    let busy = app.form.is_busy();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Length(1),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .split(area);

    let submit_label = if busy {
        "Submitting..."
    } else {
        FormButton::Submit.label()
    };
    render_button(
        frame,
        chunks[0],
        submit_label,
        is_focused && app.focus.selected_button == FormButton::Submit,
        !busy,
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[2],
        FormButton::Clear.label(),
        is_focused && app.focus.selected_button == FormButton::Clear,
        true,
        None,
    );
}

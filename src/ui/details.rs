//! Submission result and history panel

use crate::app::App;
use crate::state::SubmissionResult;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the latest result above the list of stored applications
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    draw_result(frame, chunks[0], app.form.result());
    draw_history(frame, chunks[1], app);
}

fn draw_result(frame: &mut Frame, area: Rect, result: Option<&SubmissionResult>) {
    let block = Block::default()
        .title(" Submission Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(result) = result else {
        let empty = Paragraph::new(Span::styled(
            "No submission yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let lines = vec![
        labelled("Status", result.status_label().to_string()),
        labelled("Submission Date", result.submission_date_label().to_string()),
        labelled("Approval ETA", result.eta_label()),
        labelled("Estimated Approval", result.estimated_approval_label()),
        labelled("Approval Date", result.approval_date_label().to_string()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn labelled(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.history_loading {
        " Submitted Applications (loading...) ".to_string()
    } else {
        format!(" Submitted Applications ({}) ", app.history.len())
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(note) = &app.history_note {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {note} "),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|record| {
            let status_color = match record.status_label() {
                s if s.eq_ignore_ascii_case("approved") => Color::Green,
                s if s.eq_ignore_ascii_case("rejected") => Color::Red,
                _ => Color::Yellow,
            };
            ListItem::new(Line::from(vec![
                Span::raw(record.display_name()),
                Span::raw("  "),
                Span::styled(
                    record.status_label().to_string(),
                    Style::default().fg(status_color),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

//! Confirmation dialog shown before an application is sent

use crate::state::{ConfirmOption, FormDraft};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the submit confirmation dialog
pub fn render_confirm_dialog(frame: &mut Frame, draft: &FormDraft, selected: ConfirmOption) {
    let area = frame.area();

    // Dialog dimensions
    let dialog_width = 50u16.min(area.width);
    let dialog_height = 11u16.min(area.height);

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let max_display_len = dialog_width.saturating_sub(6) as usize;
    let applicant = format!("{} {}", draft.first_name.trim(), draft.last_name.trim());
    let applicant = truncate_string(&applicant, max_display_len);

    let mut content = vec![
        Line::from(Span::styled(
            "Confirm Submission",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Submit this application for",
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled(applicant, Style::default().fg(Color::Cyan)),
            Span::styled("?", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
    ];

    let options = [
        (ConfirmOption::Confirm, "Confirm", Color::Green),
        (ConfirmOption::Cancel, "Cancel", Color::White),
    ];
    for (option, label, color) in options {
        let is_selected = selected == option;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        content.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("←→", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("y", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("n/Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}

/// Truncate a string to a maximum number of characters with ellipsis
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

use crate::achievements::AchievementEngine;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the reset confirmation dialog centered in `area`
pub fn draw_reset_confirm(frame: &mut Frame, area: Rect, engine: &AchievementEngine) {
    let dialog_width = 44.min(area.width.saturating_sub(4));
    let dialog_height = 9.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(dialog_width) / 2;
    let y = area.y + area.height.saturating_sub(dialog_height) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let title = Line::from(Span::styled(
        " Reset Achievements ",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "This erases {} of {} unlocked achievements.",
                engine.unlocked_count(),
                engine.total_count()
            ),
            Style::default().fg(Color::Red),
        )),
        Line::from("It cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Y] Yes, reset",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[N] Cancel",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, dialog_area);
}

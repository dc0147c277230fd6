//! Achievement grid overlay UI.
//!
//! Shows the catalog as a square grid. Unlocked cells show icon and title,
//! locked cells next to an unlocked one show a partial hint, the rest stay dark.

use crate::achievements::{Achievement, AchievementEngine};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// How much of an achievement the grid reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellReveal {
    Unlocked,
    Hinted,
    Hidden,
    Empty,
}

pub fn cell_reveal(engine: &AchievementEngine, cell: Option<&Achievement>) -> CellReveal {
    match cell {
        None => CellReveal::Empty,
        Some(a) if a.unlocked => CellReveal::Unlocked,
        Some(a) if engine.is_hinted(a) => CellReveal::Hinted,
        Some(_) => CellReveal::Hidden,
    }
}

/// UI state for the achievement grid overlay.
pub struct AchievementGridState {
    pub showing: bool,
    pub cursor_x: usize,
    pub cursor_y: usize,
}

impl AchievementGridState {
    pub fn new() -> Self {
        Self {
            showing: false,
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    pub fn open(&mut self) {
        self.showing = true;
    }

    pub fn close(&mut self) {
        self.showing = false;
    }

    pub fn move_up(&mut self) {
        self.cursor_y = self.cursor_y.saturating_sub(1);
    }

    pub fn move_down(&mut self, grid_size: usize) {
        if self.cursor_y + 1 < grid_size {
            self.cursor_y += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_x = self.cursor_x.saturating_sub(1);
    }

    pub fn move_right(&mut self, grid_size: usize) {
        if self.cursor_x + 1 < grid_size {
            self.cursor_x += 1;
        }
    }
}

impl Default for AchievementGridState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the achievement grid overlay.
pub fn render_achievement_grid(
    frame: &mut Frame,
    area: Rect,
    engine: &AchievementEngine,
    ui_state: &AchievementGridState,
) {
    frame.render_widget(Clear, area);

    let title = if engine.is_enabled() {
        format!(
            " Achievements {}/{} ({:.0}%) ",
            engine.unlocked_count(),
            engine.total_count(),
            engine.unlock_percentage()
        )
    } else {
        " Achievements (disabled) ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Grid
            Constraint::Length(4), // Detail
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let grid = engine.grid();
    let size = engine.grid_size().max(1) as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, size); size as usize])
        .split(chunks[0]);

    for (y, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, size); size as usize])
            .split(*row_area);
        for (x, cell_area) in cols.iter().enumerate() {
            let cell = grid.get(y).and_then(|row| row.get(x)).and_then(|c| c.as_ref());
            let selected = x == ui_state.cursor_x && y == ui_state.cursor_y;
            render_cell(frame, *cell_area, cell_reveal(engine, cell), cell, selected);
        }
    }

    let selected = grid
        .get(ui_state.cursor_y)
        .and_then(|row| row.get(ui_state.cursor_x))
        .and_then(|c| c.as_ref());
    render_detail(frame, chunks[1], engine, selected);

    let help = Paragraph::new("[Arrows] Move  [Esc] Close")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn render_cell(
    frame: &mut Frame,
    area: Rect,
    reveal: CellReveal,
    cell: Option<&Achievement>,
    selected: bool,
) {
    let border = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);

    let lines = match (reveal, cell) {
        (CellReveal::Unlocked, Some(a)) => vec![
            Line::from(a.icon.clone()),
            Line::from(Span::styled(
                a.title.clone(),
                Style::default().fg(Color::Yellow),
            )),
        ],
        (CellReveal::Hinted, Some(a)) => vec![
            Line::from(Span::styled(
                a.icon.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled("? ? ?", Style::default().fg(Color::Gray))),
        ],
        (CellReveal::Hidden, _) => vec![
            Line::from(Span::styled("▒▒", Style::default().fg(Color::DarkGray))),
        ],
        _ => vec![],
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_detail(
    frame: &mut Frame,
    area: Rect,
    engine: &AchievementEngine,
    selected: Option<&Achievement>,
) {
    let lines = match selected {
        Some(a) if a.unlocked => {
            let when = a
                .unlocked_at
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            vec![
                Line::from(Span::styled(
                    format!("{} {}", a.icon, a.title),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(a.description.clone()),
                Line::from(Span::styled(
                    format!("Unlocked {}", when),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        Some(a) if engine.is_hinted(a) => vec![
            Line::from(Span::styled("???", Style::default().fg(Color::Gray))),
            Line::from(a.description.clone()),
        ],
        Some(_) => vec![Line::from(Span::styled(
            "Locked. Unlock a neighbor for a hint.",
            Style::default().fg(Color::DarkGray),
        ))],
        None => vec![],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

pub mod achievement_grid_scene;
pub mod desktop_scene;
pub mod projection;
pub mod reset_confirm;
pub mod toast;

use crate::achievements::AchievementEngine;
use crate::input::DesktopOverlay;
use achievement_grid_scene::{render_achievement_grid, AchievementGridState};
use desktop_scene::DesktopScene;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use reset_confirm::draw_reset_confirm;
use toast::{render_toast, ToastQueue};

/// Main UI drawing function
pub fn draw_ui(
    frame: &mut Frame,
    desktop: &DesktopScene,
    engine: &AchievementEngine,
    grid_state: &AchievementGridState,
    overlay: DesktopOverlay,
    toasts: &ToastQueue,
) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    desktop.draw(frame, chunks[0]);
    draw_help_bar(frame, chunks[1], engine);

    if grid_state.showing {
        let area = centered_rect(chunks[0], 70, 80);
        render_achievement_grid(frame, area, engine, grid_state);
    }
    if overlay == DesktopOverlay::ResetConfirm {
        draw_reset_confirm(frame, chunks[0], engine);
    }

    render_toast(frame, chunks[0], toasts);
}

fn draw_help_bar(frame: &mut Frame, area: Rect, engine: &AchievementEngine) {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled("[S]", key),
        Span::styled(" Shatter sphere  ", text),
        Span::styled("[W]", key),
        Span::styled(" Shatter window  ", text),
        Span::styled("[A]", key),
        Span::styled(
            format!(
                " Achievements {}/{}  ",
                engine.unlocked_count(),
                engine.total_count()
            ),
            text,
        ),
        Span::styled("[R]", key),
        Span::styled(" Reset  ", text),
        Span::styled("[T]", key),
        Span::styled(" Terminal  ", text),
        Span::styled("[V]", key),
        Span::styled(" Source  ", text),
        Span::styled("[Q]", key),
        Span::styled(" Quit", text),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// A rect of `percent_x` by `percent_y` centered in `area`.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = (area.height as u32 * percent_y.min(100) as u32 / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

//! Short-lived unlock notifications.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    remaining: Duration,
}

/// FIFO of toasts. Clones share the queue, so an unlock listener can push
/// while the frame loop ticks and draws.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Rc<RefCell<VecDeque<Toast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: impl Into<String>) {
        self.toasts.borrow_mut().push_back(Toast {
            message: message.into(),
            remaining: TOAST_DURATION,
        });
    }

    /// Counts down the front toast only; the rest wait their turn.
    pub fn tick(&self, elapsed: Duration) {
        let mut toasts = self.toasts.borrow_mut();
        if let Some(front) = toasts.front_mut() {
            front.remaining = front.remaining.saturating_sub(elapsed);
            if front.remaining.is_zero() {
                toasts.pop_front();
            }
        }
    }

    pub fn current(&self) -> Option<String> {
        self.toasts.borrow().front().map(|t| t.message.clone())
    }

    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }
}

/// Draws the front toast in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, queue: &ToastQueue) {
    let Some(message) = queue.current() else {
        return;
    };
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    let toast_area = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let text = Paragraph::new(message)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(text, toast_area);
}

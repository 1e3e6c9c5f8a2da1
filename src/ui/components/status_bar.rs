//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::controller::{FocusTarget, NotificationKind, RenderModel};
use crate::icons::IconService;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: current notification, loading indicator or key hints
    pub fn render(f: &mut Frame, area: Rect, model: &RenderModel, icons: &IconService) {
        let (status_text, status_color) = if let Some(notification) = &model.notification {
            match notification.kind {
                NotificationKind::Success => (format!("{} {}", icons.success(), notification.message), Color::Green),
                NotificationKind::Error => (format!("{} {}", icons.error(), notification.message), Color::Red),
            }
        } else if model.loading {
            (format!("{} Working...", icons.loading()), Color::Yellow)
        } else {
            let hints = match model.focus {
                FocusTarget::List => "Space: toggle • e: edit • d: delete • a: add • r: reload • ?: help • q: quit",
                FocusTarget::NewTaskInput => "Enter: create • Esc: back to list",
                FocusTarget::EditInput(_) => "Enter: save • Esc: cancel",
            };
            (hints.to_string(), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}

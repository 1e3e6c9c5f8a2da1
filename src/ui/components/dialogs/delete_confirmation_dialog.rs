//! Delete confirmation dialog component

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::DELETE_PROMPT;
use crate::controller::DeletePrompt;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;

/// Delete confirmation dialog component
pub struct DeleteConfirmationDialog;

impl DeleteConfirmationDialog {
    /// Render the delete confirmation dialog
    pub fn render(f: &mut Frame, area: Rect, prompt: &DeletePrompt, icons: &IconService) {
        let confirm_area = LayoutManager::centered_rect_lines(60, 8, area);
        f.render_widget(Clear, confirm_area);

        let task_preview = if prompt.title.chars().count() > 40 {
            format!("{}...", prompt.title.chars().take(37).collect::<String>())
        } else {
            prompt.title.clone()
        };

        let block = create_dialog_block(format!(" {} Confirm Delete ", icons.warning()), Color::Red);
        f.render_widget(block, confirm_area);

        let inner = confirm_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let message = Paragraph::new(format!("{}\n\n\"{}\"", DELETE_PROMPT, task_preview))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(message, chunks[0]);

        let instructions = create_instructions_paragraph(&[
            shortcuts::Y_CONFIRM,
            shortcuts::SEPARATOR,
            shortcuts::N_DECLINE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[1]);
    }
}

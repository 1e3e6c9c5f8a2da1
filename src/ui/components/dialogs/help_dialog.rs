//! Help dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::create_dialog_block;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;

const HELP_TEXT: &str = r"
TASK LIST
---------
j/k, ↑/↓    Move selection
Space       Toggle task completion
e, Enter    Edit task title
d           Delete task (with confirmation)
a, i        Add a new task
r           Reload tasks from the server

EDITING
-------
Enter       Save the new title
Esc         Cancel the edit
            (both locked while saving)

GENERAL
-------
I           Cycle icon theme
G           Show logs
?           Toggle this help
q, Ctrl+C   Quit
";

/// Help dialog component
pub struct HelpDialog;

impl HelpDialog {
    pub fn render(f: &mut Frame, area: Rect, icons: &IconService) {
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(area.width, area.height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, area);
        f.render_widget(Clear, help_area);

        let block = create_dialog_block(format!(" {} Help - Esc to close ", icons.info()), Color::Cyan);
        let help = Paragraph::new(HELP_TEXT)
            .block(block)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        f.render_widget(help, help_area);
    }
}

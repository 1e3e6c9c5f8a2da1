use crate::constants::NEW_TASK_PLACEHOLDER;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Single-line input for new task titles
#[derive(Default)]
pub struct InputComponent {
    text: String,
    focused: bool,
    icons: IconService,
}

impl InputComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, text: &str, focused: bool, icons: IconService) {
        self.text = text.to_string();
        self.focused = focused;
        self.icons = icons;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitNewTask,
            KeyCode::Esc => Action::BlurInput,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Char(c) => Action::InputChar(c),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" {} New task ", self.icons.new_task());

        let (border_style, line) = if self.focused {
            (
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                Line::from(vec![
                    Span::styled(self.text.clone(), Style::default().fg(Color::White)),
                    Span::styled("▏", Style::default().fg(Color::Green).add_modifier(Modifier::SLOW_BLINK)),
                ]),
            )
        } else if self.text.is_empty() {
            (
                Style::default().fg(Color::DarkGray),
                Line::styled(NEW_TASK_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            )
        } else {
            // Unsent draft kept while the list has focus
            (
                Style::default().fg(Color::DarkGray),
                Line::styled(self.text.clone(), Style::default().fg(Color::Gray)),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(border_style);

        f.render_widget(Paragraph::new(line).block(block), rect);
    }
}

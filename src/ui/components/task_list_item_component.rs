use crate::controller::{ItemMode, TaskView};
use crate::icons::IconService;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem as RatatuiListItem,
};

/// A task row in the list
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub task: TaskView,
    pub icons: IconService,
}

impl TaskItem {
    pub fn new(task: TaskView, icons: IconService) -> Self {
        Self { task, icons }
    }

    fn status_icon(&self) -> &'static str {
        match &self.task.mode {
            ItemMode::Editing { .. } => self.icons.task_editing(),
            ItemMode::Saving { .. } => self.icons.task_saving(),
            ItemMode::Viewing if self.task.completed => self.icons.task_completed(),
            ItemMode::Viewing => self.icons.task_pending(),
        }
    }

    pub fn render(&self, selected: bool) -> RatatuiListItem<'static> {
        let mut line_spans = Vec::new();

        let status_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(format!("{} ", self.status_icon()), status_style));

        match &self.task.mode {
            ItemMode::Viewing => {
                let mut content_style = Style::default().fg(Color::White);
                if self.task.completed {
                    content_style = content_style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
                }
                if selected {
                    content_style = content_style.add_modifier(Modifier::BOLD);
                }
                line_spans.push(Span::styled(self.task.title.clone(), content_style));
            }
            ItemMode::Editing { .. } => {
                line_spans.push(Span::styled(
                    format!("{}█", self.task.mode.staged().unwrap_or_default()),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
                ));
                line_spans.push(Span::styled(
                    "  Enter: save • Esc: cancel",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ItemMode::Saving { .. } => {
                line_spans.push(Span::styled(
                    self.task.mode.staged().unwrap_or_default().to_string(),
                    Style::default().fg(Color::Gray),
                ));
                line_spans.push(Span::styled(
                    "  Saving...",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
                ));
            }
        }

        let item = RatatuiListItem::new(Line::from(line_spans));
        if !self.task.mode.is_viewing() {
            item.style(Style::default().bg(Color::Rgb(20, 30, 50)))
        } else {
            item
        }
    }
}

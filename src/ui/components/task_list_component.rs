use crate::constants::EMPTY_LIST_MESSAGE;
use crate::controller::{FocusTarget, RenderModel, TaskId, TaskView};
use crate::icons::IconService;
use crate::ui::components::task_list_item_component::TaskItem;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

pub struct TaskListComponent {
    tasks: Vec<TaskView>,
    list_state: ListState,
    icons: IconService,
    loading: bool,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            list_state: ListState::default(),
            icons: IconService::default(),
            loading: false,
        }
    }

    /// Refresh from the controller, keeping the cursor on the same task.
    pub fn update_data(&mut self, model: &RenderModel, icons: IconService) {
        let previous = self.selected_task_id();
        self.tasks = model.items.clone();
        self.icons = icons;
        self.loading = model.loading;

        let target = match model.focus {
            FocusTarget::EditInput(id) => Some(id),
            _ => previous,
        };

        let index = target
            .and_then(|id| model.position(id))
            .or_else(|| self.list_state.selected().map(|i| i.min(self.tasks.len().saturating_sub(1))));

        if self.tasks.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(index.unwrap_or(0)));
        }
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.list_state
            .selected()
            .and_then(|index| self.tasks.get(index))
            .map(|task| task.id)
    }

    pub fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) if index + 1 < self.tasks.len() => index + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(0) | None => self.tasks.len() - 1,
            Some(index) => index - 1,
        };
        self.list_state.select(Some(previous));
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char(' ') => self.selected_task_id().map_or(Action::None, Action::ToggleTask),
            KeyCode::Char('e') | KeyCode::Enter => self.selected_task_id().map_or(Action::None, Action::EditTask),
            KeyCode::Char('d') => self.selected_task_id().map_or(Action::None, Action::RequestDelete),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                self.select_next();
                Action::None
            }
            Action::PreviousTask => {
                self.select_previous();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" {} Tasks ({}) ", self.icons.tasks_title(), self.tasks.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Blue));

        if self.tasks.is_empty() {
            let message = if self.loading {
                format!("{} Loading tasks...", self.icons.loading())
            } else {
                EMPTY_LIST_MESSAGE.to_string()
            };
            let empty = Paragraph::new(message)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(empty, rect);
            return;
        }

        let selected = self.list_state.selected();
        let items: Vec<_> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskItem::new(task.clone(), self.icons.clone()).render(selected == Some(index)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

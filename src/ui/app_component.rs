use crate::backend::Backend;
use crate::controller::{Command, Controller, EditKey, FocusTarget, RenderModel};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::{DialogComponent, InputComponent, StatusBar, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    input: InputComponent,
    dialog: DialogComponent,

    // Application state
    controller: Controller,
    icons: IconService,

    // Services
    backend: Arc<dyn Backend>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(controller: Controller, backend: Arc<dyn Backend>, logger: Logger, icons: IconService) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut app = Self {
            task_list: TaskListComponent::new(),
            input: InputComponent::new(),
            dialog: DialogComponent::new(logger.clone(), icons.clone()),
            controller,
            icons,
            backend,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn render_model(&self) -> RenderModel {
        self.controller.render_model()
    }

    /// Get the number of requests still running
    pub fn active_job_count(&self) -> usize {
        self.task_manager.job_count()
    }

    /// Fetch the first page of tasks on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("AppComponent: Starting initial load".to_string());
        let command = self.controller.load();
        self.spawn_command(command);
    }

    /// Update all components with current controller data
    fn sync_component_data(&mut self) {
        let model = self.controller.render_model();
        self.task_list.update_data(&model, self.icons.clone());
        self.input.update_data(
            &model.new_task_input,
            model.focus == FocusTarget::NewTaskInput,
            self.icons.clone(),
        );
        self.dialog.update_data(model.pending_delete, self.icons.clone());
    }

    /// Route a key to whoever owns input right now: the delete prompt or an
    /// open dialog, then the edit input, the new-task input, and finally the
    /// task list and global shortcuts.
    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.controller.render_model().focus {
            FocusTarget::EditInput(id) => match key.code {
                KeyCode::Enter => Action::EditKey(id, EditKey::Activate),
                KeyCode::Esc => Action::EditKey(id, EditKey::Cancel),
                KeyCode::Backspace => Action::EditBackspace,
                KeyCode::Char(c) => Action::EditChar(c),
                _ => Action::None,
            },
            FocusTarget::NewTaskInput => self.input.handle_key_events(key),
            FocusTarget::List => match self.task_list.handle_key_events(key) {
                Action::None => self.handle_global_key(key),
                action => action,
            },
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('a') | KeyCode::Char('i') => Action::FocusInput,
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Char('I') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Apply an action to the controller and components
    pub fn handle_action(&mut self, action: Action) {
        let action = self.task_list.update(action);
        let action = self.dialog.update(action);

        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::FocusInput => self.controller.focus_input(),
            Action::BlurInput => self.controller.blur_input(),
            Action::InputChar(c) => self.controller.push_input_char(c),
            Action::InputBackspace => self.controller.pop_input_char(),
            Action::SubmitNewTask => match self.controller.submit_new_task() {
                Ok(command) => self.spawn_command(command),
                Err(e) => self.logger.log(format!("Task: Create rejected: {}", e)),
            },
            Action::ToggleTask(id) => {
                self.logger.log(format!("Task: Toggling completion of task {}", id));
                if let Some(command) = self.controller.toggle_complete(id) {
                    self.spawn_command(command);
                }
            }
            Action::EditTask(id) => {
                self.logger.log(format!("Task: Editing task {}", id));
                self.controller.edit_task(id);
            }
            Action::EditChar(c) => self.controller.push_edit_char(c),
            Action::EditBackspace => self.controller.pop_edit_char(),
            Action::EditKey(id, key) => match self.controller.handle_edit_key(id, key) {
                Ok(Some(command)) => self.spawn_command(command),
                Ok(None) => {}
                Err(e) => self.logger.log(format!("Task: Edit of {} rejected: {}", id, e)),
            },
            Action::RequestDelete(id) => {
                self.controller.request_delete(id);
            }
            Action::ResolveDelete(confirmed) => {
                if let Some(command) = self.controller.resolve_delete(confirmed) {
                    self.spawn_command(command);
                }
            }
            Action::Reload => {
                self.logger.log("Data: Reloading tasks".to_string());
                let command = self.controller.load();
                self.spawn_command(command);
            }
            Action::CommandCompleted(completion) => {
                self.logger.log(format!(
                    "Background: Request finished ({})",
                    if completion.is_success() { "ok" } else { "failed" }
                ));
                self.controller.apply(completion);
                self.task_manager.cleanup_finished_jobs();
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger
                    .log(format!("UI: Icon theme switched to {:?}", self.icons.theme()));
            }
            Action::ShowDialog(_) | Action::HideDialog | Action::NextTask | Action::PreviousTask | Action::None => {}
        }

        self.sync_component_data();
    }

    /// Process results delivered by background requests, returns how many were applied
    pub fn process_background_actions(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.handle_action(action);
            processed += 1;
        }
        processed
    }

    /// Periodic housekeeping: drop finished jobs and expire the notification.
    /// Returns true when the screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.task_manager.cleanup_finished_jobs();
        let expired = self.controller.expire_notification(now);
        if expired {
            self.sync_component_data();
        }
        expired
    }

    fn spawn_command(&mut self, command: Command) {
        self.logger
            .log(format!("Background: Spawning '{}'", command.describe()));
        self.task_manager.spawn_command(command, self.backend.clone());
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);
        let model = self.controller.render_model();

        self.input.render(f, chunks[0]);
        self.task_list.render(f, chunks[1]);
        StatusBar::render(f, chunks[2], &model, &self.icons);
        self.dialog.render(f, rect);
    }
}

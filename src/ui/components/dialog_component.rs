use crate::controller::DeletePrompt;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{DeleteConfirmationDialog, HelpDialog, LogsDialog};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// Modal overlays: help, logs and the delete confirmation prompt.
///
/// The delete prompt mirrors the controller's pending delete and takes
/// precedence over the other dialogs for key handling.
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pending_delete: Option<DeletePrompt>,
    icons: IconService,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger, icons: IconService) -> Self {
        Self {
            dialog_type: None,
            pending_delete: None,
            icons,
            logger,
        }
    }

    pub fn update_data(&mut self, pending_delete: Option<DeletePrompt>, icons: IconService) {
        self.pending_delete = pending_delete;
        self.icons = icons;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some() || self.pending_delete.is_some()
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.pending_delete.is_some()
    }

    fn handle_delete_keys(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ResolveDelete(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::ResolveDelete(false),
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.pending_delete.is_some() {
            return self.handle_delete_keys(key);
        }

        match (&self.dialog_type, key.code) {
            (Some(DialogType::Help), KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) => Action::HideDialog,
            (Some(DialogType::Logs), KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')) => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::Help) => HelpDialog::render(f, rect, &self.icons),
            Some(DialogType::Logs) => LogsDialog::render(f, rect, &self.logger),
            None => {}
        }

        if let Some(prompt) = &self.pending_delete {
            DeleteConfirmationDialog::render(f, rect, prompt, &self.icons);
        }
    }
}

//! Task List Controller.
//!
//! Owns the in-memory task list, the single-slot edit/save state and the
//! transient notification. Operations are synchronous: they update local
//! interaction state and return a [`Command`] when the remote resource has to
//! be involved. The task list itself only changes inside [`Controller::apply`],
//! i.e. after the corresponding request has returned.
//!
//! Per task, the edit lifecycle is:
//!
//! ```text
//! [Viewing] --edit_task--> [Editing] --save_edit (same title)--> [Viewing]
//! [Editing] --save_edit (new title)--> [Saving]
//! [Saving]  --success--> [Viewing]
//! [Saving]  --failure--> [Editing]
//! [Editing] --cancel_edit--> [Viewing]
//! [Saving]  --cancel_edit--> [Saving] (refused)
//! ```

use log::{debug, info, warn};
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::*;

pub mod command;
pub mod notification;
pub mod render;
pub mod task;

pub use command::{Command, Completion};
pub use notification::{Notification, NotificationKind};
pub use render::{DeletePrompt, FocusTarget, ItemMode, RenderModel, TaskView};
pub use task::{EditKey, EditState, Task, TaskId};

/// Rejected user input. Reported before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    EmptyTitle(&'static str),
}

/// Every id up to `TaskId::MAX` is taken, so no local id can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IdSpaceExhausted;

pub struct Controller {
    tasks: Vec<Task>,
    next_task_id: TaskId,
    edit: Option<EditState>,
    pending_delete: Option<TaskId>,
    new_task_input: String,
    input_focused: bool,
    notification: Option<Notification>,
    notification_timeout: Duration,
    page_limit: u32,
    /// Load/create/save requests still running, drives the loading indicator
    in_flight: usize,
    revision: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, Duration::from_secs(DEFAULT_NOTIFICATION_TIMEOUT_SECS))
    }
}

impl Controller {
    pub fn new(page_limit: u32, notification_timeout: Duration) -> Self {
        Self {
            tasks: Vec::new(),
            next_task_id: 1,
            edit: None,
            pending_delete: None,
            new_task_input: String::new(),
            input_focused: false,
            notification: None,
            notification_timeout,
            page_limit,
            in_flight: 0,
            revision: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api.page_limit,
            Duration::from_secs(config.ui.notification_timeout_secs),
        )
    }

    /// Seed the list directly. The id counter is recomputed as after a load.
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        if self.replace_tasks(tasks).is_err() {
            warn!("Seed tasks rejected, id space exhausted");
        }
        self
    }

    // Accessors

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn next_task_id(&self) -> TaskId {
        self.next_task_id
    }

    pub fn edit_state(&self) -> Option<&EditState> {
        self.edit.as_ref()
    }

    pub fn editing_task_id(&self) -> Option<TaskId> {
        self.edit.as_ref().map(|e| e.task_id)
    }

    pub fn original_task_title(&self) -> Option<&str> {
        self.edit.as_ref().map(|e| e.original_title.as_str())
    }

    pub fn saving_task_id(&self) -> Option<TaskId> {
        self.edit.as_ref().filter(|e| e.saving).map(|e| e.task_id)
    }

    pub fn pending_delete(&self) -> Option<TaskId> {
        self.pending_delete
    }

    pub fn new_task_input(&self) -> &str {
        &self.new_task_input
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // Loading

    /// Request a fresh page of tasks from the remote resource.
    pub fn load(&mut self) -> Command {
        self.in_flight += 1;
        Command::Load { limit: self.page_limit }
    }

    // New task input

    pub fn focus_input(&mut self) {
        self.input_focused = true;
        self.render();
    }

    pub fn blur_input(&mut self) {
        self.input_focused = false;
        self.render();
    }

    pub fn set_new_task_input(&mut self, text: impl Into<String>) {
        self.new_task_input = text.into();
        self.render();
    }

    pub fn push_input_char(&mut self, c: char) {
        self.new_task_input.push(c);
        self.render();
    }

    pub fn pop_input_char(&mut self) {
        self.new_task_input.pop();
        self.render();
    }

    /// Create a task from whatever is in the new-task input.
    pub fn submit_new_task(&mut self) -> Result<Command, ValidationError> {
        let title = self.new_task_input.clone();
        self.create(&title)
    }

    /// Validate `title` and build the create request.
    ///
    /// A blank title never reaches the network; focus goes back to the input.
    pub fn create(&mut self, title: &str) -> Result<Command, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            self.input_focused = true;
            self.notify(Notification::error(ERROR_EMPTY_NEW_TITLE));
            self.render();
            return Err(ValidationError::EmptyTitle(ERROR_EMPTY_NEW_TITLE));
        }

        info!("Creating task '{}'", title);
        self.in_flight += 1;
        Ok(Command::Create {
            title: title.to_string(),
        })
    }

    // Editing

    /// Put `id` in edit mode.
    ///
    /// Switching away from a task whose edit is still being saved is refused
    /// until that save resolves.
    pub fn edit_task(&mut self, id: TaskId) {
        let Some(task) = self.task(id) else {
            debug!("Edit ignored, task {} not found", id);
            return;
        };
        let next = EditState::begin(task);

        match self.edit.as_ref().map(|e| (e.task_id, e.saving)) {
            Some((current, _)) if current == id => return,
            Some((current, true)) => {
                debug!("Edit of {} refused, task {} is saving", id, current);
                self.notify(Notification::error(ERROR_SAVE_IN_PROGRESS));
                return;
            }
            _ => {}
        }

        self.edit = Some(next);
        self.input_focused = false;
        self.render();
    }

    /// Replace the staged text of the current edit. Ignored while saving.
    pub fn set_staged_title(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut().filter(|e| !e.saving) {
            edit.staged_title = text.into();
            self.render();
        }
    }

    pub fn push_edit_char(&mut self, c: char) {
        if let Some(edit) = self.edit.as_mut().filter(|e| !e.saving) {
            edit.staged_title.push(c);
            self.render();
        }
    }

    pub fn pop_edit_char(&mut self) {
        if let Some(edit) = self.edit.as_mut().filter(|e| !e.saving) {
            edit.staged_title.pop();
            self.render();
        }
    }

    /// Commit the staged title of `id`.
    ///
    /// Returns `Ok(None)` when there is nothing to send: `id` is not being
    /// edited, a save is already running, or the title did not change (which
    /// behaves like [`cancel_edit`](Self::cancel_edit)).
    pub fn save_edit(&mut self, id: TaskId) -> Result<Option<Command>, ValidationError> {
        let Some((saving, staged, original)) = self
            .edit
            .as_ref()
            .filter(|e| e.task_id == id)
            .map(|e| (e.saving, e.staged_title.trim().to_string(), e.original_title.clone()))
        else {
            return Ok(None);
        };
        if saving {
            return Ok(None);
        }

        if staged.is_empty() {
            self.notify(Notification::error(ERROR_EMPTY_EDIT_TITLE));
            return Err(ValidationError::EmptyTitle(ERROR_EMPTY_EDIT_TITLE));
        }

        if staged == original {
            self.cancel_edit();
            return Ok(None);
        }

        // The update endpoint replaces the whole resource, so the real
        // completion flag has to travel with the new title.
        let completed = self.task(id).map(|t| t.completed).unwrap_or(false);
        if let Some(edit) = self.edit.as_mut() {
            edit.saving = true;
        }
        self.in_flight += 1;
        self.render();

        info!("Saving task {} as '{}'", id, staged);
        Ok(Some(Command::SaveTitle {
            id,
            title: staged,
            completed,
        }))
    }

    /// Leave edit mode without saving. Refused while the edit is being saved.
    pub fn cancel_edit(&mut self) -> bool {
        if self.edit.as_ref().is_some_and(|e| e.saving) {
            self.notify(Notification::error(ERROR_SAVE_IN_PROGRESS));
            return false;
        }

        self.edit = None;
        self.render();
        true
    }

    /// Keyboard handling for the edit input of `id`. Both keys are ignored
    /// while that edit is saving.
    pub fn handle_edit_key(&mut self, id: TaskId, key: EditKey) -> Result<Option<Command>, ValidationError> {
        let editable = self.edit.as_ref().is_some_and(|e| e.task_id == id && !e.saving);
        if !editable {
            return Ok(None);
        }

        match key {
            EditKey::Activate => self.save_edit(id),
            EditKey::Cancel => {
                self.cancel_edit();
                Ok(None)
            }
        }
    }

    // Completion

    pub fn toggle_complete(&mut self, id: TaskId) -> Option<Command> {
        let task = self.task(id)?;
        Some(Command::SetCompleted {
            id,
            title: task.title.clone(),
            completed: !task.completed,
        })
    }

    // Deletion

    /// Delete `id` once `confirm` agrees. A declined prompt is a silent no-op.
    pub fn delete_task<F>(&mut self, id: TaskId, confirm: F) -> Option<Command>
    where
        F: FnOnce(&Task) -> bool,
    {
        let task = self.task(id)?;
        if !confirm(task) {
            debug!("Delete of task {} declined", id);
            return None;
        }
        Some(Command::Delete { id })
    }

    /// Open the confirmation prompt for `id`. The answer comes back through
    /// [`resolve_delete`](Self::resolve_delete).
    pub fn request_delete(&mut self, id: TaskId) -> bool {
        if self.task(id).is_none() {
            return false;
        }
        self.pending_delete = Some(id);
        self.render();
        true
    }

    pub fn resolve_delete(&mut self, confirmed: bool) -> Option<Command> {
        let id = self.pending_delete.take()?;
        self.render();
        self.delete_task(id, |_| confirmed)
    }

    // Notifications

    /// Drop the notification once it has been shown long enough.
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now, self.notification_timeout));
        if expired {
            self.notification = None;
        }
        expired
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    // Completions

    /// Fold the result of a finished request into the local state.
    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Loaded(result) => {
                self.finish_request();
                match result {
                    Ok(remote) => match self.replace_tasks(remote.into_iter().map(Task::from).collect()) {
                        Ok(()) => {
                            info!("Loaded {} tasks, next id {}", self.tasks.len(), self.next_task_id);
                            self.render();
                            self.notify(Notification::success(SUCCESS_TASKS_LOADED));
                        }
                        Err(IdSpaceExhausted) => {
                            warn!("Load rejected, no local id left after the highest remote id");
                            self.notify(Notification::error(ERROR_LOAD_FAILED));
                        }
                    },
                    Err(e) => {
                        let message = if e.is_transport() {
                            ERROR_LOAD_NETWORK
                        } else {
                            ERROR_LOAD_FAILED
                        };
                        self.notify(Notification::error(message));
                    }
                }
            }
            Completion::Created { title, result } => {
                self.finish_request();
                match result {
                    Ok(_echo) => {
                        let id = self.next_task_id;
                        let Some(next) = id.checked_add(1) else {
                            warn!("Created task dropped locally, id space exhausted");
                            self.notify(Notification::error(ERROR_CREATE_FAILED));
                            return;
                        };
                        self.next_task_id = next;
                        self.tasks.insert(0, Task::new(id, title, false));
                        self.new_task_input.clear();
                        info!("Created task {}", id);
                        self.render();
                        self.notify(Notification::success(SUCCESS_TASK_CREATED));
                    }
                    Err(_) => self.notify(Notification::error(ERROR_CREATE_FAILED)),
                }
            }
            Completion::TitleSaved { id, title, result } => {
                self.finish_request();
                match result {
                    Ok(()) => {
                        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                            task.title = title;
                        }
                        if self.editing_task_id() == Some(id) {
                            self.edit = None;
                        }
                        self.render();
                        self.notify(Notification::success(SUCCESS_TASK_UPDATED));
                    }
                    Err(_) => {
                        if let Some(edit) = self.edit.as_mut().filter(|e| e.task_id == id) {
                            edit.saving = false;
                        }
                        self.render();
                        self.notify(Notification::error(ERROR_UPDATE_FAILED));
                    }
                }
            }
            Completion::CompletionSet { id, completed, result } => match result {
                Ok(()) => {
                    if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                        task.completed = completed;
                    }
                    self.render();
                    let message = if completed {
                        SUCCESS_TASK_MARKED_COMPLETED
                    } else {
                        SUCCESS_TASK_MARKED_INCOMPLETE
                    };
                    self.notify(Notification::success(message));
                }
                Err(_) => {
                    self.render();
                    self.notify(Notification::error(ERROR_STATUS_FAILED));
                }
            },
            Completion::Deleted { id, result } => match result {
                Ok(()) => {
                    self.tasks.retain(|t| t.id != id);
                    if self.editing_task_id() == Some(id) {
                        self.edit = None;
                    }
                    if self.pending_delete == Some(id) {
                        self.pending_delete = None;
                    }
                    self.render();
                    self.notify(Notification::success(SUCCESS_TASK_DELETED));
                }
                Err(e) => self.notify(Notification::error(format!("{}: {}", ERROR_DELETE_FAILED, e))),
            },
        }
    }

    // Rendering

    /// Snapshot of everything the display layer needs.
    pub fn render_model(&self) -> RenderModel {
        let items = self
            .tasks
            .iter()
            .map(|task| {
                let mode = match &self.edit {
                    Some(edit) if edit.task_id == task.id && edit.saving => ItemMode::Saving {
                        staged: edit.staged_title.clone(),
                    },
                    Some(edit) if edit.task_id == task.id => ItemMode::Editing {
                        staged: edit.staged_title.clone(),
                    },
                    _ => ItemMode::Viewing,
                };
                TaskView {
                    id: task.id,
                    title: task.title.clone(),
                    completed: task.completed,
                    mode,
                }
            })
            .collect();

        let focus = match (&self.edit, self.input_focused) {
            (Some(edit), _) => FocusTarget::EditInput(edit.task_id),
            (None, true) => FocusTarget::NewTaskInput,
            (None, false) => FocusTarget::List,
        };

        let pending_delete = self.pending_delete.and_then(|id| {
            self.task(id).map(|t| DeletePrompt {
                id,
                title: t.title.clone(),
            })
        });

        RenderModel {
            items,
            new_task_input: self.new_task_input.clone(),
            focus,
            pending_delete,
            loading: self.is_loading(),
            notification: self.notification.clone(),
            revision: self.revision,
        }
    }

    fn render(&mut self) {
        self.revision += 1;
    }

    fn notify(&mut self, notification: Notification) {
        debug!("Notification: {}", notification.message);
        self.notification = Some(notification);
    }

    fn finish_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Swap in a freshly loaded list. Refused, leaving state untouched, when
    /// no id above the highest loaded id is left for local creates.
    fn replace_tasks(&mut self, tasks: Vec<Task>) -> Result<(), IdSpaceExhausted> {
        let next_task_id = match tasks.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1).ok_or(IdSpaceExhausted)?,
            None => 1,
        };

        let mut seen = HashSet::new();
        self.tasks = tasks
            .into_iter()
            .filter(|t| {
                let fresh = seen.insert(t.id);
                if !fresh {
                    warn!("Dropping duplicate task id {}", t.id);
                }
                fresh
            })
            .collect();
        self.next_task_id = next_task_id;

        if let Some(id) = self.editing_task_id() {
            if self.task(id).is_none() {
                self.edit = None;
            }
        }
        if let Some(id) = self.pending_delete {
            if self.task(id).is_none() {
                self.pending_delete = None;
            }
        }
        Ok(())
    }
}

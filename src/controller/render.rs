//! Plain data snapshot of what the display layer should draw.

use super::notification::Notification;
use super::task::TaskId;

/// How a single list item is currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemMode {
    Viewing,
    Editing { staged: String },
    /// Edit submitted, waiting for the update request; input is locked
    Saving { staged: String },
}

impl ItemMode {
    pub fn is_viewing(&self) -> bool {
        matches!(self, Self::Viewing)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Saving { .. })
    }

    pub fn staged(&self) -> Option<&str> {
        match self {
            Self::Viewing => None,
            Self::Editing { staged } | Self::Saving { staged } => Some(staged),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub mode: ItemMode,
}

/// Where keyboard input should go after this render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    List,
    NewTaskInput,
    EditInput(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub id: TaskId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub items: Vec<TaskView>,
    pub new_task_input: String,
    pub focus: FocusTarget,
    pub pending_delete: Option<DeletePrompt>,
    pub loading: bool,
    pub notification: Option<Notification>,
    /// Incremented on every re-render of the controller state
    pub revision: u64,
}

impl RenderModel {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: TaskId) -> Option<&TaskView> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

use crate::controller::{Completion, EditKey, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,

    // New task input
    FocusInput,
    BlurInput,
    InputChar(char),
    InputBackspace,
    SubmitNewTask,

    // Task operations
    ToggleTask(TaskId),
    EditTask(TaskId),
    EditChar(char),
    EditBackspace,
    EditKey(TaskId, EditKey),
    RequestDelete(TaskId),
    ResolveDelete(bool),
    Reload,

    // Background request finished
    CommandCompleted(Completion),

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}

//! Constants used throughout the application
//!
//! This module centralizes notification texts, defaults and other constant
//! values to keep the controller and the UI consistent.

// Remote endpoint defaults
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/todos";
pub const DEFAULT_PAGE_LIMIT: u32 = 5;
pub const DEFAULT_USER_ID: u64 = 1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 3;

// Success Messages
pub const SUCCESS_TASKS_LOADED: &str = "Tasks loaded successfully!";
pub const SUCCESS_TASK_CREATED: &str = "Task created successfully!";
pub const SUCCESS_TASK_UPDATED: &str = "Task updated successfully!";
pub const SUCCESS_TASK_DELETED: &str = "Task deleted successfully!";
pub const SUCCESS_TASK_MARKED_COMPLETED: &str = "Task marked as completed!";
pub const SUCCESS_TASK_MARKED_INCOMPLETE: &str = "Task marked as incomplete!";

// Error Messages
pub const ERROR_LOAD_FAILED: &str = "Error loading tasks.";
pub const ERROR_LOAD_NETWORK: &str = "Network error while loading tasks.";
pub const ERROR_CREATE_FAILED: &str = "Error creating task.";
pub const ERROR_UPDATE_FAILED: &str = "Error updating task.";
pub const ERROR_STATUS_FAILED: &str = "Error updating task status.";
pub const ERROR_DELETE_FAILED: &str = "Error deleting task";
pub const ERROR_SAVE_IN_PROGRESS: &str = "Please wait while the task is being saved...";

// Validation Error Messages
pub const ERROR_EMPTY_NEW_TITLE: &str = "Please enter a task title.";
pub const ERROR_EMPTY_EDIT_TITLE: &str = "Task title cannot be empty.";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const EMPTY_LIST_MESSAGE: &str = "No tasks available. Add a new task.";
pub const NEW_TASK_PLACEHOLDER: &str = "Press 'a' to add a task...";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Height of the new-task input box in rows
pub const INPUT_HEIGHT: u16 = 3;
/// Height of the status bar in rows
pub const STATUS_HEIGHT: u16 = 1;

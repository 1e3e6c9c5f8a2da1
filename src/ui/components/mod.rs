//! Reusable UI components

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod input_component;
pub mod status_bar;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use input_component::InputComponent;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;

pub mod common;
pub mod delete_confirmation_dialog;
pub mod help_dialog;
pub mod logs_dialog;

pub use delete_confirmation_dialog::DeleteConfirmationDialog;
pub use help_dialog::HelpDialog;
pub use logs_dialog::LogsDialog;

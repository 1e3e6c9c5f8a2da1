//! Core UI functionality for the todoterm application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! actions, the component abstraction, terminal event polling and the
//! background request runner.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background execution of controller commands
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe user intents and finished requests
//! 3. **Events** are read through the [`EventHandler`]
//! 4. **Requests** run asynchronously via the [`TaskManager`] and come back as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{JobId, TaskManager};

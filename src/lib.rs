//! todoterm - A Terminal User Interface (TUI) for a remote todo list
//!
//! This library provides a terminal-based interface for viewing, creating,
//! editing, completing and deleting todos stored behind a JSONPlaceholder
//! style REST API. The list state lives in a UI-independent controller
//! whose network work runs in the background and is applied when it
//! completes.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - REST client for the remote todo collection
//! * [`config`] - Application configuration management
//! * [`controller`] - Task list state, edit/save/delete flows and notifications
//! * [`ui`] - Terminal user interface components

/// Backend abstraction over the remote todo collection
pub mod backend;

/// Command line arguments of the `todoterm` binary
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task list controller and its render model
pub mod controller;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

//! # Savedate UI Library
//!
//! Terminal save-the-date invitation: a live countdown to the event and a
//! switchable color theme, built with Ratatui and tui-realm.
//!
//! ## Modules
//!
//! - [`app`] - Application model, lifecycle and screen composition
//! - [`components`] - UI components and message types
//! - [`config`] - Layered configuration, validation and setup
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging configuration
//! - [`theme`] - Theme store, presets and style variables
//! - [`validation`] - Shared validator trait
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;

pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

// Re-export the Msg type that tests commonly need
pub use components::common::Msg;

// Re-export validation trait for broader use
pub use validation::Validator;

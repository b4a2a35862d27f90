//! # Application Module
//!
//! Application model, lifecycle and screen composition for the savedate
//! terminal invitation.
//!
//! ## Architecture
//!
//! The application follows a model-view-update architecture:
//! - **Model** - Mounted components, theme store and countdown ticker
//! - **View** - Layout of hero, countdown, palette, help bar and popups
//! - **Updates** - Message handling and state transitions
//!
//! ## Usage
//!
//! ```no_run
//! use savedate::app::application_lifecycle::ApplicationLifecycle;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut model = ApplicationLifecycle::initialize()?;
//!     ApplicationLifecycle::setup_terminal(&mut model)?;
//!     ApplicationLifecycle::run_application_loop(&mut model)?;
//!     ApplicationLifecycle::shutdown_application(model).await?;
//!     Ok(())
//! }
//! ```

/// Application lifecycle management - startup, shutdown, and main loop
pub mod application_lifecycle;
/// State tracking for the UI
pub mod managers;
/// Core application model
pub mod model;
/// One-shot countdown report for the command line
pub mod report;
/// Message processing and state update logic
pub mod updates;
/// UI rendering and view composition
pub mod view;

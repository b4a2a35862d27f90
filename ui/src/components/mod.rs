// Core components
pub mod common;
pub mod state;

// Display components
pub mod countdown_display;
pub mod help_bar;
pub mod hero;
pub mod palette;

// Popup components
pub mod error_popup;
pub mod theme_picker;

// System components
pub mod global_key_watcher;

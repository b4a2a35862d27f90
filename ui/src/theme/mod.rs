//! # Theme Store
//!
//! Five named colors (`primary`, `secondary`, `background`, `contrast`,
//! `accent`) shared by every display element of the invitation.
//!
//! ## Architecture
//!
//! - **[`ThemeProvider`]** - Created once at startup. Owns the store.
//! - **[`ThemeHandle`]** - Acquired from the provider and passed to each
//!   component constructor. All handles observe the same colors.
//! - **[`StyleProperties`]** - The `--color-<role>` variables kept in step
//!   with the structured colors, for consumers that read by variable name.
//! - **[`ThemeLoader`]** - Presets embedded in the binary or found in the
//!   `themes/` config directory.
//!
//! ## Usage
//!
//! ```no_run
//! use savedate::theme::{ThemeProvider, ThemeRole};
//!
//! let provider = ThemeProvider::default();
//! let theme = provider.use_theme()?;
//!
//! theme.update_color(ThemeRole::Accent, "#d4a5a5")?;
//! assert_eq!(theme.css_var("--color-accent").as_deref(), Some("#d4a5a5"));
//! # Ok::<(), savedate::error::AppError>(())
//! ```
//!
//! Acquiring a handle from [`ThemeProvider::uninitialized`] fails with
//! [`AppError::Config`](crate::error::AppError::Config).
//!
//! ## Preset Files
//!
//! ```toml
//! [metadata]
//! name = "sage"
//! description = "Olive greens on linen"
//!
//! [colors]
//! primary = "#6b7f6a"
//! secondary = "#b7c4a8"
//! background = "#f6f7f2"
//! contrast = "#2f3a2f"
//! accent = "#a3b18a"
//! ```

pub mod loader;
pub mod properties;
pub mod store;
pub mod types;
pub mod validation;

pub use loader::{PresetEntry, PresetSource, ThemeLoader};
pub use properties::{CssFileSink, StyleProperties, StyleSink};
pub use store::{ThemeHandle, ThemeProvider};
pub use types::{DEFAULT_PRESET, Theme, ThemeColors, ThemeConfig, ThemeRole};

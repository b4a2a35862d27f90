use crate::error::{AppError, AppResult};
use crate::theme::properties::{StyleProperties, StyleSink};
use crate::theme::types::{DEFAULT_PRESET, Theme, ThemeColors, ThemeRole};
use crate::theme::validation::{HexColorValidator, ThemeValidationError, ThemeValidator};
use crate::validation::Validator;
use std::cell::RefCell;
use std::rc::Rc;
use tuirealm::props::Color;

struct ThemeState {
    colors: ThemeColors,
    properties: StyleProperties,
    sinks: Vec<Box<dyn StyleSink>>,
    preset: String,
    revision: u64,
}

impl ThemeState {
    fn new(colors: ThemeColors) -> Self {
        Self {
            properties: StyleProperties::from_colors(&colors),
            colors,
            sinks: Vec::new(),
            preset: DEFAULT_PRESET.to_string(),
            revision: 0,
        }
    }

    fn publish(&mut self) {
        let ThemeState {
            properties, sinks, ..
        } = self;
        for sink in sinks.iter_mut() {
            if let Err(e) = sink.publish(properties) {
                log::warn!("Style sink '{}' rejected theme update: {e}", sink.name());
            }
        }
    }
}

/// Owner of the application theme.
///
/// Created once at startup and passed down to whatever builds the display
/// elements. Each element acquires its own [`ThemeHandle`] through
/// [`ThemeProvider::use_theme`]; there is no global lookup.
pub struct ThemeProvider {
    state: Option<Rc<RefCell<ThemeState>>>,
}

impl ThemeProvider {
    pub fn new(colors: ThemeColors) -> Self {
        Self {
            state: Some(Rc::new(RefCell::new(ThemeState::new(colors)))),
        }
    }

    /// A provider with no store behind it. Every acquisition fails.
    pub fn uninitialized() -> Self {
        Self { state: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn use_theme(&self) -> AppResult<ThemeHandle> {
        match &self.state {
            Some(state) => Ok(ThemeHandle {
                inner: Rc::clone(state),
            }),
            None => Err(AppError::Config(
                "Theme accessed outside of an initialized ThemeProvider".to_string(),
            )),
        }
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemeColors::default())
    }
}

/// Shared view of the theme store.
///
/// Handles are cheap to clone and all observe the same colors, so an update
/// through one is visible to every other on its next read.
#[derive(Clone)]
pub struct ThemeHandle {
    inner: Rc<RefCell<ThemeState>>,
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHandle").finish_non_exhaustive()
    }
}

impl ThemeHandle {
    /// Snapshot of all five roles
    pub fn colors(&self) -> ThemeColors {
        self.inner.borrow().colors.clone()
    }

    pub fn color(&self, role: ThemeRole) -> String {
        self.inner.borrow().colors.get(role).to_string()
    }

    pub fn tui_color(&self, role: ThemeRole) -> Color {
        self.inner.borrow().colors.color(role)
    }

    /// Replace a single role.
    ///
    /// The value must be `#rrggbb`; it is stored lowercase. A rejected value
    /// leaves the store untouched.
    pub fn update_color(&self, role: ThemeRole, value: &str) -> AppResult<()> {
        let value = value.trim();
        HexColorValidator.validate(value).map_err(|_| {
            ThemeValidationError::InvalidThemeColor {
                role,
                value: value.to_string(),
            }
        })?;
        let value = value.to_ascii_lowercase();

        let mut state = self.inner.borrow_mut();
        let previous = state.colors.set(role, value.clone());
        state.properties.set(role, &value);
        state.revision += 1;
        state.publish();

        log::debug!("Theme role '{role}' updated: {previous} -> {value}");
        Ok(())
    }

    /// Switch to a preset by applying each of its roles in turn.
    pub fn apply_theme(&self, theme: &Theme) -> AppResult<()> {
        ThemeValidator.validate(theme)?;

        for (role, value) in theme.colors.iter() {
            self.update_color(role, value)?;
        }

        self.inner.borrow_mut().preset = theme.metadata.name.clone();
        log::info!("Applied theme preset '{}'", theme.metadata.name);
        Ok(())
    }

    pub fn preset_name(&self) -> String {
        self.inner.borrow().preset.clone()
    }

    /// Number of color updates since the store was created
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Read a global style variable such as `--color-accent`
    pub fn css_var(&self, name: &str) -> Option<String> {
        self.inner.borrow().properties.get(name).map(str::to_string)
    }

    pub fn custom_properties(&self) -> StyleProperties {
        self.inner.borrow().properties.clone()
    }

    /// Attach a sink; it receives the current variables right away.
    pub fn add_sink(&self, mut sink: Box<dyn StyleSink>) -> AppResult<()> {
        let mut state = self.inner.borrow_mut();
        sink.publish(&state.properties)?;
        log::info!("Attached style sink '{}'", sink.name());
        state.sinks.push(sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};
    use std::cell::Cell;

    struct RecordingSink {
        published: Rc<RefCell<Vec<StyleProperties>>>,
        fail: Rc<Cell<bool>>,
    }

    impl StyleSink for RecordingSink {
        fn name(&self) -> &str {
            "recording"
        }

        fn publish(&mut self, properties: &StyleProperties) -> AppResult<()> {
            if self.fail.get() {
                return Err(AppError::Io("sink offline".to_string()));
            }
            self.published.borrow_mut().push(properties.clone());
            Ok(())
        }
    }

    fn handle() -> ThemeHandle {
        ThemeProvider::default().use_theme().expect("initialized provider")
    }

    #[test]
    fn test_get_colors_is_stable_without_updates() {
        let theme = handle();
        assert_eq!(theme.colors(), theme.colors());
        assert_eq!(theme.colors(), ThemeColors::default());
    }

    #[test]
    fn test_update_primary_leaves_other_roles() {
        let theme = handle();

        assert_ok!(theme.update_color(ThemeRole::Primary, "#000000"));

        let colors = theme.colors();
        assert_eq!(colors.primary, "#000000");
        assert_eq!(colors.secondary, "#e0c9b8");
        assert_eq!(colors.background, "#faf9f7");
        assert_eq!(colors.contrast, "#292524");
        assert_eq!(colors.accent, "#c5b8ac");
    }

    #[test]
    fn test_update_accent_changes_only_accent() {
        let theme = handle();
        let before = theme.colors();

        assert_ok!(theme.update_color(ThemeRole::Accent, "#D4A5A5"));

        let after = theme.colors();
        assert_eq!(after.accent, "#d4a5a5");
        for role in ThemeRole::ALL.into_iter().filter(|r| *r != ThemeRole::Accent) {
            assert_eq!(after.get(role), before.get(role));
        }
    }

    #[test]
    fn test_invalid_color_is_rejected_and_store_unchanged() {
        let theme = handle();

        let err = assert_err!(theme.update_color(ThemeRole::Background, "ivory"));

        assert_matches!(err, AppError::Config(_));
        assert_eq!(theme.colors(), ThemeColors::default());
        assert_eq!(theme.revision(), 0);
    }

    #[test]
    fn test_uninitialized_provider_fails_fast() {
        let provider = ThemeProvider::uninitialized();

        assert!(!provider.is_initialized());
        let err = assert_err!(provider.use_theme());
        assert_matches!(err, AppError::Config(_));
    }

    #[test]
    fn test_handles_share_state() {
        let provider = ThemeProvider::default();
        let writer = provider.use_theme().expect("writer");
        let reader = provider.use_theme().expect("reader");

        assert_ok!(writer.update_color(ThemeRole::Secondary, "#112233"));

        assert_eq!(reader.color(ThemeRole::Secondary), "#112233");
        assert_eq!(reader.tui_color(ThemeRole::Secondary), Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(reader.revision(), 1);
    }

    #[test]
    fn test_css_variables_follow_updates() {
        let theme = handle();
        assert_eq!(theme.css_var("--color-accent").as_deref(), Some("#c5b8ac"));

        assert_ok!(theme.update_color(ThemeRole::Accent, "#abcdef"));

        assert_eq!(theme.css_var("--color-accent").as_deref(), Some("#abcdef"));
        assert_eq!(theme.custom_properties().len(), 5);
    }

    #[test]
    fn test_sinks_receive_initial_and_updated_properties() {
        let theme = handle();
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = RecordingSink {
            published: Rc::clone(&published),
            fail: Rc::new(Cell::new(false)),
        };

        assert_ok!(theme.add_sink(Box::new(sink)));
        assert_ok!(theme.update_color(ThemeRole::Contrast, "#000000"));

        let published = published.borrow();
        assert_eq!(published.len(), 2);
        assert_eq!(published[1].get("--color-contrast"), Some("#000000"));
    }

    #[test]
    fn test_failing_sink_does_not_block_update() {
        let theme = handle();
        let fail = Rc::new(Cell::new(false));
        let sink = RecordingSink {
            published: Rc::new(RefCell::new(Vec::new())),
            fail: Rc::clone(&fail),
        };
        assert_ok!(theme.add_sink(Box::new(sink)));
        fail.set(true);

        assert_ok!(theme.update_color(ThemeRole::Primary, "#101010"));

        assert_eq!(theme.color(ThemeRole::Primary), "#101010");
    }

    #[test]
    fn test_apply_theme_replaces_all_roles() {
        let theme = handle();
        let mut preset = Theme::default();
        preset.metadata.name = "midnight".to_string();
        preset.colors.primary = "#c9b79c".to_string();
        preset.colors.background = "#1c1917".to_string();

        assert_ok!(theme.apply_theme(&preset));

        assert_eq!(theme.colors(), preset.colors);
        assert_eq!(theme.preset_name(), "midnight");
        assert_eq!(theme.revision(), 5);
    }

    #[test]
    fn test_apply_invalid_theme_changes_nothing() {
        let theme = handle();
        let mut preset = Theme::default();
        preset.colors.primary = "#c9b79c".to_string();
        preset.colors.accent = "gold".to_string();

        assert_err!(theme.apply_theme(&preset));

        assert_eq!(theme.colors(), ThemeColors::default());
        assert_eq!(theme.preset_name(), DEFAULT_PRESET);
    }
}

//! Application lifecycle management
//!
//! Startup (configuration, theme, countdown), the main loop, and shutdown.

use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg};
use crate::config::{self, AppConfig, ConfigValidationError};
use crate::error::{AppError, AppResult, ErrorReporter};
use crate::theme::{
    CssFileSink, DEFAULT_PRESET, ThemeConfig, ThemeHandle, ThemeLoader, ThemeProvider,
};

use engine::{CountdownEngine, CountdownTicker};
use log::{debug, error, info, warn};
use std::error::Error as StdError;
use tuirealm::Update;
use tuirealm::application::PollStrategy;
use tuirealm::terminal::CrosstermTerminalAdapter;

/// Result of theme initialization attempt
#[derive(Debug)]
pub enum ThemeInitializationResult {
    /// Preset, overrides and export all applied
    Success,
    /// Something was skipped or replaced by the default theme. Contains the
    /// message to show the user.
    FallbackSuccess { error_message: String },
    /// Not even the default theme could be loaded. Application should exit.
    CriticalFailure { error_message: String },
}

/// Build the theme store for `theme_config`.
///
/// The configured preset is loaded through `loader`; if it cannot be, the
/// embedded default preset is used instead. Per-role overrides are then
/// applied one at a time, and a stylesheet sink is attached when
/// `export_css` is set. Every step that fails is collected into the
/// returned [`ThemeInitializationResult`] instead of aborting startup.
pub fn prepare_theme(
    theme_config: &ThemeConfig,
    loader: &ThemeLoader,
) -> (ThemeProvider, ThemeInitializationResult) {
    let provider = ThemeProvider::default();
    let theme = match provider.use_theme() {
        Ok(theme) => theme,
        Err(e) => {
            return (
                provider,
                ThemeInitializationResult::CriticalFailure {
                    error_message: e.to_string(),
                },
            );
        }
    };

    let mut warnings = Vec::new();

    if let Err(e) = apply_preset(&theme, loader, theme_config.preset()) {
        error!(
            "Failed to load theme preset '{}': {}",
            theme_config.preset(),
            e
        );

        if let Err(default_e) = apply_preset(&theme, &ThemeLoader::embedded_only(), DEFAULT_PRESET)
        {
            error!("Failed to load the default theme preset: {default_e}");
            return (
                provider,
                ThemeInitializationResult::CriticalFailure {
                    error_message: format!(
                        "Critical theme error: Unable to load any theme.\n\nUser theme error: {e}\nDefault theme error: {default_e}"
                    ),
                },
            );
        }

        info!("Fell back to default theme preset '{DEFAULT_PRESET}'");
        warnings.push(format!(
            "Unable to load theme preset '{}': {}\n\nFalling back to the default theme ({DEFAULT_PRESET}).",
            theme_config.preset(),
            e
        ));
    }

    match theme_config.color_overrides() {
        Ok(overrides) => {
            for (role, value) in overrides {
                if let Err(e) = theme.update_color(role, value) {
                    warn!("Skipping color override for {role}: {e}");
                    warnings.push(format!("Ignoring color override for '{role}': {e}"));
                }
            }
        }
        Err(e) => {
            let message = e.user_message();
            warn!("Skipping color overrides: {message}");
            warnings.push(format!("Ignoring color overrides: {message}"));
        }
    }

    if let Some(path) = theme_config.export_css() {
        if let Err(e) = theme.add_sink(Box::new(CssFileSink::new(path))) {
            warn!("Failed to export theme to {}: {e}", path.display());
            warnings.push(format!(
                "Unable to export theme variables to '{}': {e}",
                path.display()
            ));
        }
    }

    let result = if warnings.is_empty() {
        ThemeInitializationResult::Success
    } else {
        ThemeInitializationResult::FallbackSuccess {
            error_message: warnings.join("\n\n"),
        }
    };

    (provider, result)
}

fn apply_preset(theme: &ThemeHandle, loader: &ThemeLoader, name: &str) -> AppResult<()> {
    let preset = loader.load_preset(name)?;
    theme.apply_theme(&preset)
}

/// Manages the display of configuration errors with user interaction
pub struct ConfigErrorDisplay {
    model: Model<CrosstermTerminalAdapter>,
}

impl ConfigErrorDisplay {
    /// Initialize the error display with the given validation errors
    pub fn new(validation_errors: Vec<ConfigValidationError>) -> Result<Self, Box<dyn StdError>> {
        // Built from defaults: the loaded configuration is the thing that is broken
        let mut model = Model::new(
            &AppConfig::default(),
            ThemeProvider::default(),
            ThemeLoader::embedded_only(),
        )
        .map_err(|e| format!("Failed to initialize model for error display: {e}"))?;

        // Show the first error in a popup (most critical one)
        if let Some(first_error) = validation_errors.first() {
            let error_message = first_error.user_message();
            error!("Configuration error: {error_message}");

            if let Err(e) = model.mount_error_popup(&AppError::Config(error_message)) {
                error!("Failed to mount configuration error popup: {e}");
                for validation_error in &validation_errors {
                    error!(
                        "Config validation error: {}",
                        validation_error.user_message()
                    );
                }
            }
        }

        for (i, validation_error) in validation_errors.iter().enumerate() {
            error!("Config validation error {}: {:?}", i + 1, validation_error);
        }

        Ok(Self { model })
    }

    /// Show the error popup and wait for user acknowledgment
    pub fn show_and_wait_for_acknowledgment(&mut self) -> Result<(), Box<dyn StdError>> {
        info!(
            "Configuration validation failed. Application will exit after user acknowledges the error."
        );

        ApplicationLifecycle::setup_terminal(&mut self.model)?;

        if let Err(e) = self.model.view() {
            error!("Error during error popup rendering: {e}");
        }

        while !self.model.state_manager.should_quit() {
            self.model.update_outside_msg();

            match self.model.app.tick(PollStrategy::Once) {
                Err(err) => {
                    error!("Application tick error during error display: {err}");
                    break;
                }
                Ok(messages) if !messages.is_empty() => {
                    for msg in messages.into_iter() {
                        let mut msg = Some(msg);
                        while msg.is_some() {
                            msg = self.model.update(msg);
                        }
                    }

                    if !self.model.app.mounted(&ComponentId::ErrorPopup) {
                        info!("Configuration error popup closed by user, terminating application");
                        self.model.set_quit(true);
                        break;
                    }

                    if let Err(e) = self.model.view() {
                        error!("Error during view rendering: {e}");
                        break;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    pub fn shutdown(mut self) {
        info!("Terminating application due to configuration errors");
        self.model.shutdown();
        let _ = self.model.terminal.leave_alternate_screen();
        let _ = self.model.terminal.disable_raw_mode();
        let _ = self.model.terminal.clear_screen();
    }
}

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Initialize the application and return the configured model.
    ///
    /// Must run inside a tokio runtime; the countdown ticker is spawned here.
    pub fn initialize() -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        info!("Starting savedate");

        let config = Self::load_configuration()?;
        let (theme_provider, theme_init_result) = Self::initialize_theme(&config.theme())?;
        Self::validate_configuration(config)?;

        info!("Configuration loaded and validated successfully");

        let mut model = Self::create_model(config, theme_provider)?;
        Self::start_countdown(&mut model, config)?;
        Self::handle_theme_fallback(&mut model, theme_init_result)?;

        Ok(model)
    }

    fn load_configuration() -> Result<&'static AppConfig, Box<dyn StdError>> {
        match config::get_config() {
            config::ConfigLoadResult::Success(config) => Ok(config.as_ref()),
            config::ConfigLoadResult::LoadError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.to_string()),
                    "ConfigurationLoader",
                    "load_config",
                    "Configuration loading failed. The application cannot start without a valid configuration.",
                );
                Err(error.to_string().into())
            }
            config::ConfigLoadResult::DeserializeError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.to_string()),
                    "ConfigurationParser",
                    "parse_config",
                    "Configuration parsing failed. Please fix your configuration syntax and try again.",
                );
                Err(error.to_string().into())
            }
        }
    }

    fn initialize_theme(
        theme_config: &ThemeConfig,
    ) -> Result<(ThemeProvider, ThemeInitializationResult), Box<dyn StdError>> {
        let (provider, result) = prepare_theme(theme_config, &ThemeLoader::new());

        if let ThemeInitializationResult::CriticalFailure { error_message } = &result {
            Self::report_critical_error(
                AppError::Config(error_message.clone()),
                "ThemeStore",
                "initialize",
                "Application cannot start due to theme initialization failure. Please check your theme configuration.",
            );
            return Err(error_message.clone().into());
        }

        Ok((provider, result))
    }

    fn validate_configuration(config: &AppConfig) -> Result<(), Box<dyn StdError>> {
        if let Err(validation_errors) = config.validate() {
            error!(
                "Configuration validation failed with {} errors",
                validation_errors.len()
            );
            Self::show_config_error_and_exit(validation_errors)?;
            return Err("Configuration validation failed".into());
        }
        Ok(())
    }

    fn create_model(
        config: &AppConfig,
        theme_provider: ThemeProvider,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        match Model::new(config, theme_provider, ThemeLoader::new()) {
            Ok(model) => {
                info!("Model initialized successfully");
                Ok(model)
            }
            Err(e) => {
                Self::report_critical_error(
                    e.clone(),
                    "ApplicationModel",
                    "initialize",
                    "Failed to initialize application model. The application cannot start.",
                );
                Err(e.into())
            }
        }
    }

    /// Start the ticker and mount the countdown components on top of it
    fn start_countdown(
        model: &mut Model<CrosstermTerminalAdapter>,
        config: &AppConfig,
    ) -> Result<(), Box<dyn StdError>> {
        let target = config.target().map_err(AppError::from)?;
        let engine =
            CountdownEngine::with_system_clock(target, config.countdown().elapsed_policy());
        let ticker = CountdownTicker::start(engine, config.countdown().cadence());

        model.attach_countdown(ticker, config.event(), &target)?;
        Ok(())
    }

    /// Handle theme fallback by showing a warning popup if needed
    fn handle_theme_fallback(
        model: &mut Model<CrosstermTerminalAdapter>,
        theme_init_result: ThemeInitializationResult,
    ) -> Result<(), Box<dyn StdError>> {
        if let ThemeInitializationResult::FallbackSuccess { error_message } = theme_init_result {
            if let Err(e) = model.mount_warning_popup(&error_message) {
                model.error_reporter.report_config_error("theme", &e);
            }
        }
        Ok(())
    }

    pub fn setup_terminal(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        Ok(())
    }

    pub fn run_application_loop(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Entering main application loop");

        while !model.state_manager.should_quit() {
            Self::process_single_iteration(model)?;
        }

        Ok(())
    }

    fn process_single_iteration(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        model.update_outside_msg();

        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                Self::handle_tick_error(model, err)?;
            }
            Ok(messages) if !messages.is_empty() => {
                Self::process_messages(model, messages);
            }
            _ => {}
        }

        Self::handle_redraw(model)?;

        Ok(())
    }

    fn handle_tick_error(
        model: &mut Model<CrosstermTerminalAdapter>,
        err: tuirealm::ApplicationError,
    ) -> Result<(), Box<dyn StdError>> {
        error!("Application tick error: {err:?}");

        if let Err(e) =
            model.mount_error_popup(&AppError::Component(format!("Application error: {err:?}")))
        {
            error!("Failed to mount error popup: {e}");
            return Err(format!("Failed to display error: {err:?}").into());
        }
        model.state_manager.set_redraw(true);
        Ok(())
    }

    fn process_messages(model: &mut Model<CrosstermTerminalAdapter>, messages: Vec<Msg>) {
        model.state_manager.set_redraw(true);
        for msg in messages.into_iter() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }
    }

    fn handle_redraw(model: &mut Model<CrosstermTerminalAdapter>) -> Result<(), Box<dyn StdError>> {
        if model.state_manager.needs_redraw() {
            if let Err(e) = model.view() {
                error!("Error during view rendering: {e}");
                if let Err(popup_err) = model.mount_error_popup(&e) {
                    model
                        .error_reporter
                        .report_mount_error("ErrorPopup", "mount", popup_err);
                    model
                        .error_reporter
                        .report_simple(e, "ViewRendering", "main_loop");
                }
            }
            model.state_manager.redraw_complete();
        }
        Ok(())
    }

    /// Stop the countdown ticker, waiting for it, and restore the terminal
    pub async fn shutdown_application(
        mut model: Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Application shutdown initiated");
        model.shutdown();

        if let Some(ticker) = model.take_ticker() {
            ticker.shutdown().await;
        }

        debug!("Leaving alternate screen");
        let _ = model.terminal.leave_alternate_screen();
        let _ = model.terminal.disable_raw_mode();
        let _ = model.terminal.clear_screen();

        info!("Application terminated successfully");
        Ok(())
    }

    fn show_config_error_and_exit(
        validation_errors: Vec<ConfigValidationError>,
    ) -> Result<(), Box<dyn StdError>> {
        let mut error_display = ConfigErrorDisplay::new(validation_errors)?;
        error_display.show_and_wait_for_acknowledgment()?;
        error_display.shutdown();
        Ok(())
    }

    /// Report critical error and prepare for application exit
    fn report_critical_error(
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        // No main loop yet; the reporter only logs here
        let (tx, _rx) = std::sync::mpsc::channel();
        let error_reporter = ErrorReporter::new(tx);

        error_reporter.report_critical_and_exit(error, component, operation, user_message);

        eprintln!("Critical Error: {user_message}");
    }
}

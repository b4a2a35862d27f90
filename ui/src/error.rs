use crate::components::common::{Msg, PopupActivityMsg};
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the savedate terminal invitation.
///
/// Every failure the UI can run into is classified here so it can be logged
/// and, where it matters to the guest looking at the screen, shown in the
/// error popup through the [`ErrorReporter`].
///
/// # Error Categories
///
/// - [`Config`] - Configuration, theme and target-instant errors. This also
///   covers reading the theme outside of an initialized provider.
/// - [`Component`] - UI component lifecycle and rendering errors
/// - [`State`] - Application state management issues
/// - [`Io`] - File system failures (style export, config initialization)
///
/// # Examples
///
/// ```no_run
/// use savedate::error::{AppError, AppResult};
/// use savedate::theme::ThemeProvider;
///
/// fn accent_hex(provider: &ThemeProvider) -> AppResult<String> {
///     let theme = provider.use_theme()?;
///     Ok(theme.color(savedate::theme::ThemeRole::Accent))
/// }
/// ```
///
/// [`Config`]: AppError::Config
/// [`Component`]: AppError::Component
/// [`State`]: AppError::State
/// [`Io`]: AppError::Io
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// UI component lifecycle and rendering errors.
    Component(String),

    /// Application state management issues.
    State(String),

    /// Configuration loading and validation errors.
    ///
    /// Raised for invalid color values, invalid target instants, invalid
    /// configuration files, and any attempt to read the theme from a scope
    /// without an initialized [`ThemeProvider`](crate::theme::ThemeProvider).
    /// These fail fast.
    Config(String),

    /// File system and I/O failures.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<engine::CountdownError> for AppError {
    fn from(err: engine::CountdownError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Error severity levels for appropriate UI response
#[derive(Debug, Clone)]
pub enum ErrorSeverity {
    /// Show warning popup and log
    Warning,
    /// Show error popup and log
    Error,
    /// Show error popup, log, and the application is about to exit
    Critical,
}

/// Context information for errors
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    /// Create new error context with a generic message for the component.
    /// Use [`ErrorContext::with_message`] for an explicit one.
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: format!("Something went wrong in {component}."),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Contextual error with rich information
#[derive(Debug, Clone)]
pub struct ContextualError {
    pub error: AppError,
    pub context: ErrorContext,
}

impl ContextualError {
    pub fn new(error: AppError, context: ErrorContext) -> Self {
        Self { error, context }
    }
}

impl Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.context.user_message, self.error)
    }
}

/// Central error reporting system.
///
/// Logs every report with its context and forwards a popup message to the
/// main loop, which owns the terminal and mounts the popup.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    /// Report a simple error with basic context
    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    /// Report a warning (shows warning popup)
    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation)
            .with_message(&error.to_string())
            .with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    /// Report a critical error; the caller is expected to exit afterwards
    pub fn report_critical_and_exit(
        &self,
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        let context = ErrorContext::new(component, operation)
            .with_message(user_message)
            .with_severity(ErrorSeverity::Critical)
            .with_suggestion("The application will terminate. Please fix the issue and restart.");
        self.report(error, context);
    }

    /// Report error with full context
    pub fn report(&self, error: AppError, context: ErrorContext) {
        let contextual_error = ContextualError::new(error.clone(), context.clone());

        match context.severity {
            ErrorSeverity::Warning => log::warn!(
                "[{}:{}] {}{}",
                context.component,
                context.operation,
                contextual_error,
                self.format_additional_context(&context)
            ),
            ErrorSeverity::Error => log::error!(
                "[{}:{}] {}{}",
                context.component,
                context.operation,
                contextual_error,
                self.format_additional_context(&context)
            ),
            ErrorSeverity::Critical => log::error!(
                "[CRITICAL] [{}:{}] {}{}",
                context.component,
                context.operation,
                contextual_error,
                self.format_additional_context(&context)
            ),
        }

        let popup_msg = match context.severity {
            ErrorSeverity::Warning => Msg::PopupActivity(PopupActivityMsg::ShowWarning(
                self.format_user_message(&context),
            )),
            ErrorSeverity::Error | ErrorSeverity::Critical => Msg::PopupActivity(
                PopupActivityMsg::ShowError(self.create_formatted_error(&error, &context)),
            ),
        };

        if let Err(e) = self.tx.send(popup_msg) {
            log::error!("Failed to send popup message: {e}");
        }
    }

    fn format_additional_context(&self, context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("Technical: {technical_details}"));
        }
        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    fn format_user_message(&self, context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();

        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        message
    }

    fn create_formatted_error(&self, error: &AppError, context: &ErrorContext) -> AppError {
        let mut formatted_message = self.get_error_title(error).to_string();
        formatted_message.push_str(&format!("\n\n{}", context.user_message));

        if let Some(ref technical) = context.technical_details {
            formatted_message.push_str(&format!("\n\nDetails: {technical}"));
        }
        if let Some(ref suggestion) = context.suggestion {
            formatted_message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        match error {
            AppError::Config(_) => AppError::Config(formatted_message),
            AppError::Component(_) => AppError::Component(formatted_message),
            AppError::State(_) => AppError::State(formatted_message),
            AppError::Io(_) => AppError::Io(formatted_message),
        }
    }

    fn get_error_title(&self, error: &AppError) -> &'static str {
        match error {
            AppError::Config(_) => "Configuration Error",
            AppError::Component(_) => "Component Error",
            AppError::State(_) => "Application State Error",
            AppError::Io(_) => "File Error",
        }
    }

    /// Report component mounting/unmounting errors
    pub fn report_mount_error(
        &self,
        component: &str,
        operation: &str,
        error: impl std::fmt::Display,
    ) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    /// Report theme-related errors (non-critical, use warning)
    pub fn report_theme_error(&self, operation: &str, error: impl std::fmt::Display) {
        let app_error = AppError::Config(format!("Theme {operation} failed: {error}"));
        self.report_warning(app_error, "ThemeStore", operation);
    }

    /// Report global key watcher update errors
    pub fn report_key_watcher_error(&self, error: impl std::fmt::Display) {
        let app_error =
            AppError::Component(format!("Failed to update global key watcher: {error}"));
        self.report_simple(app_error, "GlobalKeyWatcher", "update_state");
    }

    /// Report configuration errors with suggestions
    pub fn report_config_error(&self, config_type: &str, error: impl std::fmt::Display) {
        let context = ErrorContext::new("Configuration", "load_config")
            .with_message(&format!("Failed to load {config_type} configuration"))
            .with_technical_details(&error.to_string())
            .with_suggestion("Check your configuration file and restart the application");

        let app_error = AppError::Config(error.to_string());
        self.report(app_error, context);
    }
}

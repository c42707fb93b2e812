use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the Cutlass preferences layer.
///
/// None of these cross the [`Configuration`](crate::configuration::Configuration)
/// boundary: the facade absorbs them, logs them and falls back to defaults.
/// They exist so the collaborators underneath (settings store, resource
/// loading, engine) can use `?` internally.
///
/// # Error Categories
///
/// - [`Config`] - Application config loading and validation
/// - [`Store`] - Durable settings store I/O and (de)serialization
/// - [`Engine`] - Directives refused by the option engine
/// - [`Resource`] - Stylesheet and image resources
///
/// [`Config`]: AppError::Config
/// [`Store`]: AppError::Store
/// [`Engine`]: AppError::Engine
/// [`Resource`]: AppError::Resource
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    Config(String),

    /// Durable settings store failures.
    ///
    /// A store that cannot be written keeps working in memory; the values just
    /// do not survive a restart.
    Store(String),

    /// Option engine failures, e.g. an unknown color scheme.
    Engine(String),

    /// Missing or unreadable resources.
    Resource(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Store(msg) => write!(f, "Settings Store Error: {msg}"),
            AppError::Engine(msg) => write!(f, "Engine Error: {msg}"),
            AppError::Resource(msg) => write!(f, "Resource Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<engine::EngineError> for AppError {
    fn from(err: engine::EngineError) -> Self {
        AppError::Engine(err.to_string())
    }
}

impl From<crate::store::StoreError> for AppError {
    fn from(err: crate::store::StoreError) -> Self {
        AppError::Store(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Error severity levels for appropriate UI response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Log only
    Warning,
    /// Log and alert the user
    Error,
    /// Blocking alert; the process keeps running in a degraded state
    Critical,
}

/// Context information for errors
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: format!("An error occurred in {component}."),
            technical_details: None,
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

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// A user-facing alert produced by the [`ErrorReporter`].
#[derive(Debug, Clone, PartialEq)]
pub struct UserAlert {
    pub title: String,
    pub message: String,
    pub severity: ErrorSeverity,
}

/// Central error reporting.
///
/// Everything is logged; errors and critical errors are additionally sent as
/// [`UserAlert`]s to whoever owns the receiving end (a dialog layer, the CLI).
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Option<Sender<UserAlert>>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<UserAlert>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Reporter that only logs.
    pub fn log_only() -> Self {
        Self { tx: None }
    }

    /// Report a warning (logged, no alert)
    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation)
            .with_technical_details(&error.to_string())
            .with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    /// Report a critical condition the application survives in degraded form.
    pub fn report_critical(
        &self,
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        let context = ErrorContext::new(component, operation)
            .with_message(user_message)
            .with_technical_details(&error.to_string())
            .with_severity(ErrorSeverity::Critical);
        self.report(error, context);
    }

    /// Report error with full context
    pub fn report(&self, error: AppError, context: ErrorContext) {
        let details = context
            .technical_details
            .as_deref()
            .map(|details| format!(" ({details})"))
            .unwrap_or_default();

        match context.severity {
            ErrorSeverity::Warning => {
                log::warn!(
                    "[{}:{}] {}{}",
                    context.component,
                    context.operation,
                    context.user_message,
                    details
                );
                return;
            }
            ErrorSeverity::Error => {
                log::error!(
                    "[{}:{}] {}{}",
                    context.component,
                    context.operation,
                    context.user_message,
                    details
                );
            }
            ErrorSeverity::Critical => {
                log::error!(
                    "[CRITICAL] [{}:{}] {}{}",
                    context.component,
                    context.operation,
                    context.user_message,
                    details
                );
            }
        }

        let Some(tx) = &self.tx else {
            return;
        };
        let alert = UserAlert {
            title: Self::title_for(&error, context.severity),
            message: context.user_message,
            severity: context.severity,
        };
        if let Err(e) = tx.send(alert) {
            log::error!("Failed to deliver user alert: {e}");
        }
    }

    fn title_for(error: &AppError, severity: ErrorSeverity) -> String {
        if severity == ErrorSeverity::Critical {
            return "Critical!".to_string();
        }
        match error {
            AppError::Config(_) => "Configuration Error",
            AppError::Store(_) => "Settings Error",
            AppError::Engine(_) => "Engine Error",
            AppError::Resource(_) => "Resource Error",
        }
        .to_string()
    }
}

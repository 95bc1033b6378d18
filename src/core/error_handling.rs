//! Generic error handling utilities
//!
//! Provides unified error handling that can work across the stamper and
//! configuration error types while keeping a single logging pattern.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)` with a helpful, actionable message. When it returns `false`,
/// `user_message()` returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a specific message the user can act on
    ///
    /// Examples of user-actionable errors:
    /// - Missing repository directory
    /// - Repository without any tag
    /// - Invalid configuration values
    ///
    /// Examples of system errors:
    /// - IO failures
    /// - Failure to spawn the `git` executable
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// - User-actionable errors show their own message
/// - System errors show the operation context, with details at debug level
///
/// # Examples
/// ```rust,no_run
/// # use treestamp::core::error_handling::log_error_with_context;
/// # use treestamp::core::validation::ValidationError;
/// let err = ValidationError::new("Option --output must not be empty");
/// log_error_with_context(&err, "Argument validation");
/// // Logs: "FATAL: Option --output must not be empty"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    if error.is_user_actionable() {
        if let Some(user_msg) = error.user_message() {
            log::error!("FATAL: {}", user_msg);
        } else {
            log::error!("FATAL: {}", operation_context);
        }
    } else {
        log::error!("FATAL: {}: {}", operation_context, error);
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

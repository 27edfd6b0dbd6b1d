//! Error types for prettytime.
//!
//! Uses `thiserror` for structured error types.
//!
//! ## Error Taxonomy
//!
//! - **Locale**: the requested locale has no registered phrase set
//! - **Configuration**: config file parsing, validation, or missing values
//! - **Internal**: I/O failures while reading configuration
//!
//! Each error has a stable error code (e.g., `PT-L001`) for programmatic handling.
//! Formatting itself never fails; every error surfaces while constructing a
//! [`Formatter`](crate::Formatter) or resolving settings.

pub mod suggestions;

use thiserror::Error;

pub use suggestions::FixSuggestion;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Locale lookup failures.
    Locale,
    /// Configuration issues (parse errors, invalid values, missing files).
    Configuration,
    /// Internal errors (I/O, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Locale => "Locale error",
            Self::Configuration => "Configuration error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Locale => "L",
            Self::Configuration => "C",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Main error type for prettytime operations.
#[derive(Error, Debug)]
pub enum PrettyTimeError {
    // ==========================================================================
    // Locale errors (Category: Locale)
    // ==========================================================================
    /// No phrase set is registered under the requested key.
    #[error("unknown locale '{key}'")]
    UnknownLocale { key: String },

    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Configuration file not found at an explicitly requested path.
    #[error("config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    // ==========================================================================
    // I/O errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrettyTimeError {
    /// Returns the error category for classification.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownLocale { .. } => ErrorCategory::Locale,
            Self::ConfigNotFound { .. } | Self::ConfigParse { .. } | Self::ConfigInvalid { .. } => {
                ErrorCategory::Configuration
            }
            Self::Io(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `PT-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownLocale { .. } => "PT-L001",
            Self::ConfigNotFound { .. } => "PT-C001",
            Self::ConfigParse { .. } => "PT-C002",
            Self::ConfigInvalid { .. } => "PT-C003",
            Self::Io(_) => "PT-X001",
        }
    }

    /// Returns the locale key if this error is about a locale.
    #[must_use]
    pub fn locale_key(&self) -> Option<&str> {
        match self {
            Self::UnknownLocale { key } => Some(key.as_str()),
            Self::ConfigInvalid { key, value, .. } if key == "formatter.locale" => {
                Some(value.as_str())
            }
            _ => None,
        }
    }

    /// Returns actionable fix suggestions for this error.
    ///
    /// # Example
    ///
    /// ```
    /// use prettytime::error::PrettyTimeError;
    ///
    /// let err = PrettyTimeError::UnknownLocale { key: "xx-XX".to_string() };
    /// let suggestions = err.fix_suggestions();
    /// assert!(!suggestions.is_empty());
    /// ```
    #[must_use]
    pub fn fix_suggestions(&self) -> Vec<FixSuggestion> {
        match self {
            Self::UnknownLocale { key } => suggestions::unknown_locale_suggestions(key),
            Self::ConfigNotFound { path } => suggestions::config_not_found_suggestions(path),
            Self::ConfigParse { path, message } => {
                suggestions::config_parse_suggestions(path, message)
            }
            Self::ConfigInvalid {
                key,
                value,
                message,
            } => suggestions::config_invalid_suggestions(key, value, message),
            Self::Io(err) => vec![FixSuggestion::new(
                Vec::new(),
                format!("I/O error while reading configuration: {err}"),
            )],
        }
    }
}

/// Result type alias for prettytime operations.
pub type Result<T> = std::result::Result<T, PrettyTimeError>;

// =============================================================================
// Tests
// =============================================================================

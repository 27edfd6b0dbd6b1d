//! Fix suggestions for prettytime errors.
//!
//! Maps each error to actionable steps plus a short explanation.

use crate::locale;

// =============================================================================
// Fix Suggestion Types
// =============================================================================

/// A fix suggestion for an error.
#[derive(Debug, Clone)]
pub struct FixSuggestion {
    /// Concrete things to try, in order of preference.
    pub steps: Vec<String>,

    /// Explanation of why this error occurred.
    pub context: String,

    /// Tips to prevent this error in the future.
    pub prevention: Option<String>,
}

impl FixSuggestion {
    /// Creates a new fix suggestion with required fields.
    #[must_use]
    pub fn new(steps: Vec<String>, context: impl Into<String>) -> Self {
        Self {
            steps,
            context: context.into(),
            prevention: None,
        }
    }

    /// Builder: adds prevention tips.
    #[must_use]
    pub fn with_prevention(mut self, prevention: impl Into<String>) -> Self {
        self.prevention = Some(prevention.into());
        self
    }
}

// =============================================================================
// Suggestion Generators
// =============================================================================

/// Registered keys that share the language subtag of `key`.
///
/// `"de-AT"` and `"DE"` both point at `"de-DE"`.
fn same_language_locales(key: &str) -> Vec<&'static str> {
    let language = key
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if language.is_empty() {
        return Vec::new();
    }

    locale::available_locales()
        .into_iter()
        .filter(|candidate| {
            candidate
                .split('-')
                .next()
                .is_some_and(|lang| lang.eq_ignore_ascii_case(&language))
        })
        .collect()
}

/// Generates fix suggestions for unknown locale errors.
#[must_use]
pub fn unknown_locale_suggestions(key: &str) -> Vec<FixSuggestion> {
    let available = locale::available_locales().join(", ");
    let mut suggestions = Vec::new();

    let close = same_language_locales(key);
    if !close.is_empty() {
        suggestions.push(FixSuggestion::new(
            close
                .iter()
                .map(|candidate| format!("use \"{candidate}\""))
                .collect(),
            format!("No phrase set is registered for '{key}', but the same language is available."),
        ));
    }

    suggestions.push(
        FixSuggestion::new(
            vec![format!("pick one of: {available}")],
            format!(
                "'{key}' does not name a registered locale. Locale keys look like \
                 \"en-EN\"; matching ignores case and accepts '_' in place of '-'."
            ),
        )
        .with_prevention("Validate locale keys once at startup and reuse the Formatter."),
    );

    suggestions
}

/// Generates fix suggestions for config file not found errors.
#[must_use]
pub fn config_not_found_suggestions(path: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![
            format!("create {path} with a [formatter] table"),
            "unset PRETTYTIME_CONFIG to fall back to the default location".to_string(),
        ],
        format!("PRETTYTIME_CONFIG points at {path}, which does not exist."),
    )]
}

/// Generates fix suggestions for config parse errors.
#[must_use]
pub fn config_parse_suggestions(path: &str, message: &str) -> Vec<FixSuggestion> {
    vec![
        FixSuggestion::new(
            vec![format!("fix the TOML syntax in {path}")],
            format!("The config file could not be parsed: {message}"),
        )
        .with_prevention("Expected layout:\n[formatter]\nlocale = \"en-EN\""),
    ]
}

/// Generates fix suggestions for invalid config values.
#[must_use]
pub fn config_invalid_suggestions(key: &str, value: &str, message: &str) -> Vec<FixSuggestion> {
    let mut suggestions = vec![FixSuggestion::new(
        vec![format!("change '{key}' (currently \"{value}\")")],
        message.to_string(),
    )];
    if key == "formatter.locale" {
        suggestions.extend(unknown_locale_suggestions(value));
    }
    suggestions
}

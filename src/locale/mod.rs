//! Locale phrase tables and the process-wide locale registry.
//!
//! Every locale is a complete, compiled-in [`PhraseSet`]. The registry is
//! built once on first use and never mutated afterwards, so lookups are
//! lock-free and safe from any thread.
//!
//! Adding a locale means adding a module with a `PHRASES` static and listing
//! it in [`BUILTIN`]; the selector and renderer need no changes.

mod de;
mod en;
mod es;
mod fr;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::core::models::{Direction, Plurality, Unit};
use crate::error::{PrettyTimeError, Result};

/// Placeholder substituted with the count in every unit template.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Key used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en-EN";

/// Singular and plural templates for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forms {
    pub one: &'static str,
    pub other: &'static str,
}

impl Forms {
    #[must_use]
    pub const fn new(one: &'static str, other: &'static str) -> Self {
        Self { one, other }
    }

    #[must_use]
    pub const fn get(&self, plurality: Plurality) -> &'static str {
        match plurality {
            Plurality::One => self.one,
            Plurality::Other => self.other,
        }
    }
}

/// Past and future templates for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitPhrases {
    pub past: Forms,
    pub future: Forms,
}

impl UnitPhrases {
    #[must_use]
    pub const fn new(past: Forms, future: Forms) -> Self {
        Self { past, future }
    }
}

/// All phrases for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct PhraseSet {
    /// Canonical locale key, e.g. `"en-EN"`.
    pub key: &'static str,
    pub just_now: &'static str,
    pub yesterday: &'static str,
    pub tomorrow: &'static str,
    pub second: UnitPhrases,
    pub minute: UnitPhrases,
    pub hour: UnitPhrases,
    pub day: UnitPhrases,
    pub week: UnitPhrases,
    pub month: UnitPhrases,
    pub year: UnitPhrases,
}

impl PhraseSet {
    /// Templates for `unit`.
    #[must_use]
    pub const fn unit(&self, unit: Unit) -> &UnitPhrases {
        match unit {
            Unit::Second => &self.second,
            Unit::Minute => &self.minute,
            Unit::Hour => &self.hour,
            Unit::Day => &self.day,
            Unit::Week => &self.week,
            Unit::Month => &self.month,
            Unit::Year => &self.year,
        }
    }

    /// Template for a counted span, or `None` for [`Direction::Now`].
    #[must_use]
    pub const fn template(
        &self,
        unit: Unit,
        direction: Direction,
        plurality: Plurality,
    ) -> Option<&'static str> {
        let phrases = self.unit(unit);
        match direction {
            Direction::Past => Some(phrases.past.get(plurality)),
            Direction::Future => Some(phrases.future.get(plurality)),
            Direction::Now => None,
        }
    }
}

/// Compiled-in phrase sets.
static BUILTIN: &[&PhraseSet] = &[&en::PHRASES, &de::PHRASES, &fr::PHRASES, &es::PHRASES];

static REGISTRY: LazyLock<BTreeMap<String, &'static PhraseSet>> = LazyLock::new(|| {
    let registry: BTreeMap<_, _> = BUILTIN
        .iter()
        .map(|phrases| (normalize_key(phrases.key), *phrases))
        .collect();
    tracing::debug!(count = registry.len(), "Locale registry initialized");
    registry
});

/// Canonical lookup form of a locale key.
///
/// Trims whitespace, accepts `_` as a separator and ignores ASCII case.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.trim().replace('_', "-").to_ascii_lowercase()
}

/// Look up the phrase set registered under `key`.
///
/// # Errors
///
/// Returns [`PrettyTimeError::UnknownLocale`] if no phrase set matches.
/// There is no fallback locale.
pub fn resolve(key: &str) -> Result<&'static PhraseSet> {
    REGISTRY.get(&normalize_key(key)).copied().map_or_else(
        || {
            tracing::debug!(locale = key, "Unknown locale requested");
            Err(PrettyTimeError::UnknownLocale {
                key: key.to_string(),
            })
        },
        |phrases| {
            tracing::debug!(locale = phrases.key, requested = key, "Resolved locale");
            Ok(phrases)
        },
    )
}

/// Canonical keys of every registered locale, sorted.
#[must_use]
pub fn available_locales() -> Vec<&'static str> {
    REGISTRY.values().map(|phrases| phrases.key).collect()
}

/// Whether `key` names a registered locale.
#[must_use]
pub fn is_registered(key: &str) -> bool {
    REGISTRY.contains_key(&normalize_key(key))
}

//! The public formatter: a resolved locale plus a clock.

use chrono::{DateTime, TimeDelta, TimeZone};

use super::clock::{Clock, SystemClock};
use super::models::Selection;
use super::{renderer, selector};
use crate::config::ResolvedSettings;
use crate::error::Result;
use crate::locale::{self, PhraseSet};

/// Formats instants relative to "now" in one locale.
///
/// Immutable once built. Share it freely; formatting takes `&self` and never
/// fails.
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use prettytime::{FixedClock, Formatter};
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();
/// let pretty = Formatter::with_clock("en-EN", FixedClock::new(&now)).unwrap();
///
/// assert_eq!(pretty.format(&(now - TimeDelta::minutes(3))), "3 minutes ago");
/// assert_eq!(pretty.format(&(now + TimeDelta::days(1))), "tomorrow");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter<C = SystemClock> {
    phrases: &'static PhraseSet,
    clock: C,
}

impl Formatter {
    /// Build a formatter for `locale` that reads the system clock.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocale` if no phrase set is registered for `locale`.
    pub fn new(locale: &str) -> Result<Self> {
        Self::with_clock(locale, SystemClock)
    }

    /// Build a formatter from resolved settings.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocale` if the settings name an unregistered locale.
    pub fn from_settings(settings: &ResolvedSettings) -> Result<Self> {
        Self::new(&settings.locale)
    }
}

impl<C: Clock> Formatter<C> {
    /// Build a formatter for `locale` with a custom clock.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocale` if no phrase set is registered for `locale`.
    pub fn with_clock(locale: &str, clock: C) -> Result<Self> {
        let phrases = locale::resolve(locale)?;
        tracing::debug!(locale = phrases.key, "Formatter created");
        Ok(Self { phrases, clock })
    }

    /// Canonical key of the active locale.
    #[must_use]
    pub const fn locale(&self) -> &'static str {
        self.phrases.key
    }

    /// The active phrase set.
    #[must_use]
    pub const fn phrases(&self) -> &'static PhraseSet {
        self.phrases
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Describe `target` relative to the clock's current instant.
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, target: &DateTime<Tz>) -> String {
        self.format_at(target, &self.clock.now())
    }

    /// Describe `target` relative to an explicit reference instant.
    #[must_use]
    pub fn format_at<Tz: TimeZone, Now: TimeZone>(
        &self,
        target: &DateTime<Tz>,
        now: &DateTime<Now>,
    ) -> String {
        let selection = selector::select_between(now, target);
        self.render(&selection)
    }

    /// Describe a signed offset (positive = future) without calendar context.
    ///
    /// A day-sized offset is always a day count here, never "tomorrow".
    #[must_use]
    pub fn format_duration(&self, delta: TimeDelta) -> String {
        let magnitude = selector::select(selector::whole_seconds(delta));
        self.render(&Selection::Span(magnitude))
    }

    fn render(&self, selection: &Selection) -> String {
        match selection {
            Selection::Span(m) => tracing::trace!(
                locale = self.phrases.key,
                unit = %m.unit,
                count = m.count,
                direction = %m.direction,
                "Selected span"
            ),
            other => tracing::trace!(locale = self.phrases.key, selection = ?other, "Selected day"),
        }
        renderer::render(selection, self.phrases)
    }
}

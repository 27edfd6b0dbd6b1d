//! prettytime - localized relative time formatting
//!
//! Turns an instant into "3 minutes ago", "1 week from now", "gestern" and
//! the like. Build a [`Formatter`] once per locale, then format as often as
//! needed:
//!
//! ```
//! use chrono::{TimeDelta, Utc};
//!
//! let pretty = prettytime::Formatter::new("de-DE")?;
//! let target = Utc::now() - TimeDelta::days(14);
//! assert_eq!(pretty.format(&target), "2 Wochen zuvor");
//! # Ok::<(), prettytime::PrettyTimeError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod core;
pub mod error;
pub mod locale;

use chrono::{DateTime, TimeZone};

pub use crate::core::{Clock, Direction, FixedClock, Formatter, Selection, SystemClock, Unit};
pub use config::{ConfigSource, ResolvedSettings};
pub use error::{PrettyTimeError, Result};
pub use locale::{PhraseSet, available_locales};

/// One-shot formatting against the system clock.
///
/// # Errors
///
/// Returns `UnknownLocale` if no phrase set is registered for `locale`.
pub fn format<Tz: TimeZone>(locale: &str, target: &DateTime<Tz>) -> Result<String> {
    Ok(Formatter::new(locale)?.format(target))
}

//! Value types shared by the selector, renderer and locale tables.

use std::fmt;

const SECOND: u64 = 1;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Magnitude bucket used to express a duration.
///
/// Ordered by increasing length. Month and year use fixed 30 and 365 day
/// approximations rather than calendar lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: &'static [Self] = &[
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
    ];

    /// Length of one unit in seconds.
    #[must_use]
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Second => SECOND,
            Self::Minute => MINUTE,
            Self::Hour => HOUR,
            Self::Day => DAY,
            Self::Week => WEEK,
            Self::Month => MONTH,
            Self::Year => YEAR,
        }
    }

    /// Exclusive upper bound (in seconds) of this unit's bucket.
    ///
    /// `None` for `Year`, which takes everything above.
    #[must_use]
    pub const fn upper_bound(self) -> Option<u64> {
        match self {
            Self::Second => Some(MINUTE),
            Self::Minute => Some(HOUR),
            Self::Hour => Some(DAY),
            Self::Day => Some(WEEK),
            Self::Week => Some(MONTH),
            Self::Month => Some(YEAR),
            Self::Year => None,
        }
    }

    /// Lowercase English name, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the target lies before, after, or at the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Past,
    Future,
    Now,
}

impl Direction {
    /// Direction of a signed offset (target minus now).
    #[must_use]
    pub const fn of(seconds: i64) -> Self {
        if seconds > 0 {
            Self::Future
        } else if seconds < 0 {
            Self::Past
        } else {
            Self::Now
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Future => "future",
            Self::Now => "now",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Singular or plural template choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plurality {
    One,
    Other,
}

impl Plurality {
    /// `One` only for a count of exactly 1; zero is plural.
    #[must_use]
    pub const fn of(count: u64) -> Self {
        if count == 1 { Self::One } else { Self::Other }
    }
}

/// A duration expressed as a whole number of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    pub unit: Unit,
    pub count: u64,
    pub direction: Direction,
}

impl Magnitude {
    /// The zero-length magnitude, rendered as the "just now" phrase.
    pub const NOW: Self = Self {
        unit: Unit::Second,
        count: 0,
        direction: Direction::Now,
    };
}

/// What a formatter will render for a given target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A counted span in some unit (or "now").
    Span(Magnitude),
    /// Target falls on the previous calendar day.
    Yesterday,
    /// Target falls on the next calendar day.
    Tomorrow,
}

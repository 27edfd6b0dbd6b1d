//! Picks the unit and count used to express an offset.
//!
//! Buckets are half-open: a value exactly on a threshold belongs to the next
//! unit up. Counts are rounded half up, so 59m59s is "60 minutes" rather than
//! "59 minutes" or "1 hour".

use chrono::{DateTime, Days, TimeDelta, TimeZone};

use super::models::{Direction, Magnitude, Selection, Unit};

/// Round a signed offset to whole seconds, half away from zero.
///
/// A target sampled 999ms ahead counts as one second; anything under half a
/// second collapses to zero ("now").
#[must_use]
pub fn whole_seconds(delta: TimeDelta) -> i64 {
    let millis = delta.num_milliseconds();
    let seconds = millis / 1000;
    let rem = millis % 1000;
    if rem >= 500 {
        seconds + 1
    } else if rem <= -500 {
        seconds - 1
    } else {
        seconds
    }
}

/// `value / divisor`, rounded half up.
const fn round_div(value: u64, divisor: u64) -> u64 {
    let rem = value % divisor;
    value / divisor + if rem * 2 >= divisor { 1 } else { 0 }
}

/// Map a signed offset in seconds (target minus now) to a magnitude.
#[must_use]
pub fn select(seconds: i64) -> Magnitude {
    let direction = Direction::of(seconds);
    if direction == Direction::Now {
        return Magnitude::NOW;
    }

    let abs = seconds.unsigned_abs();
    let unit = Unit::ALL
        .iter()
        .copied()
        .find(|unit| unit.upper_bound().is_none_or(|bound| abs < bound))
        .unwrap_or(Unit::Year);

    Magnitude {
        unit,
        count: round_div(abs, unit.seconds()),
        direction,
    }
}

/// Hour counts this large that cross into the adjacent date read as a day.
const NEAR_DAY_HOURS: u64 = 23;

/// Whether `target` is `now` stepped one calendar day in `direction`, at the
/// same local time. Holds across 23h and 25h daylight-saving days.
fn is_calendar_day_step<Tz: TimeZone>(
    now: &DateTime<Tz>,
    target: &DateTime<Tz>,
    direction: Direction,
) -> bool {
    let stepped = match direction {
        Direction::Future => now.clone().checked_add_days(Days::new(1)),
        Direction::Past => now.clone().checked_sub_days(Days::new(1)),
        Direction::Now => None,
    };
    stepped.is_some_and(|stepped| {
        let gap = target.naive_utc().signed_duration_since(stepped.naive_utc());
        whole_seconds(gap) == 0
    })
}

/// Select what to say about `target` as seen from `now`.
///
/// Same as [`select`] on the rounded offset, except that a roughly day-sized
/// offset landing on the adjacent calendar date becomes `Tomorrow` or
/// `Yesterday`. That covers the day bucket, hour counts of 23 or more, and
/// exact one-day calendar steps on daylight-saving days. Calendar dates are
/// taken in the target's time zone.
#[must_use]
pub fn select_between<Tz: TimeZone, Now: TimeZone>(
    now: &DateTime<Now>,
    target: &DateTime<Tz>,
) -> Selection {
    let offset = target.naive_utc().signed_duration_since(now.naive_utc());
    let magnitude = select(whole_seconds(offset));

    let near_day = match magnitude.unit {
        Unit::Day => true,
        Unit::Hour => magnitude.count >= NEAR_DAY_HOURS,
        _ => false,
    };
    if !near_day && magnitude.unit > Unit::Day {
        return Selection::Span(magnitude);
    }

    let local_now = now.with_timezone(&target.timezone());
    let adjacent = near_day || is_calendar_day_step(&local_now, target, magnitude.direction);
    if adjacent {
        let calendar_days = target
            .date_naive()
            .signed_duration_since(local_now.date_naive())
            .num_days();
        match (magnitude.direction, calendar_days) {
            (Direction::Future, 1) => return Selection::Tomorrow,
            (Direction::Past, -1) => return Selection::Yesterday,
            _ => {}
        }
    }

    Selection::Span(magnitude)
}

//! Reference instants and formatter factories for integration tests.
//!
//! Every test formats against a [`FixedClock`], so expectations never depend
//! on when the suite runs.

use chrono::{DateTime, Days, Months, TimeDelta, TimeZone, Utc};

pub use prettytime::{FixedClock, Formatter};

/// Mid-May: the neighbouring months have 30 and 31 days, so one calendar
/// month either way lands in the month bucket.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
}

/// Formatter pinned to [`reference_now`].
pub fn pinned(locale: &str) -> Formatter<FixedClock> {
    Formatter::with_clock(locale, FixedClock::new(&reference_now()))
        .unwrap_or_else(|e| panic!("formatter for {locale}: {e}"))
}

/// A calendar step from the reference instant, like adding years, months and
/// days to a date.
pub fn add_date(years: i32, months: i32, days: i64) -> DateTime<Utc> {
    let total_months = years * 12 + months;
    let stepped = if total_months >= 0 {
        reference_now().checked_add_months(Months::new(total_months.unsigned_abs()))
    } else {
        reference_now().checked_sub_months(Months::new(total_months.unsigned_abs()))
    }
    .expect("month step in range");

    if days >= 0 {
        stepped.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        stepped.checked_sub_days(Days::new(days.unsigned_abs()))
    }
    .expect("day step in range")
}

/// A fixed offset from the reference instant.
pub fn add(delta: TimeDelta) -> DateTime<Utc> {
    reference_now() + delta
}

/// One named expectation.
pub struct Case {
    pub name: &'static str,
    pub target: DateTime<Utc>,
    pub want: &'static str,
}

/// Run every case through `formatter`, collecting all mismatches before failing.
pub fn check_cases(formatter: &Formatter<FixedClock>, cases: &[Case]) {
    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let got = formatter.format(&case.target);
            (got != case.want).then(|| {
                format!(
                    "[{}] {}: got {got:?}, want {:?}",
                    formatter.locale(),
                    case.name,
                    case.want
                )
            })
        })
        .collect();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

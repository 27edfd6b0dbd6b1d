//! End-to-end formatting tests against a pinned clock.

use chrono::{FixedOffset, TimeDelta, TimeZone, Utc};

use prettytime::PrettyTimeError;

mod common;
use common::fixtures::{Case, add, add_date, check_cases, pinned, reference_now};

fn hms(hours: i64, minutes: i64, seconds: i64) -> TimeDelta {
    TimeDelta::hours(hours) + TimeDelta::minutes(minutes) + TimeDelta::seconds(seconds)
}

#[test]
fn english() {
    let cases = [
        Case { name: "just now", target: reference_now(), want: "just now" },
        Case { name: "second", target: add(hms(0, 0, 1)), want: "1 second from now" },
        Case { name: "second ago", target: add(hms(0, 0, -1)), want: "1 second ago" },
        Case { name: "seconds ago", target: add(hms(0, 0, -2)), want: "2 seconds ago" },
        Case { name: "minutes", target: add(hms(0, 59, 59)), want: "60 minutes from now" },
        Case { name: "tomorrow", target: add_date(0, 0, 1), want: "tomorrow" },
        Case { name: "yesterday", target: add_date(0, 0, -1), want: "yesterday" },
        Case { name: "week", target: add_date(0, 0, 7), want: "1 week from now" },
        Case { name: "week ago", target: add_date(0, 0, -7), want: "1 week ago" },
        Case { name: "month", target: add_date(0, 1, 0), want: "1 month from now" },
        Case { name: "month ago", target: add_date(0, -1, 0), want: "1 month ago" },
        Case { name: "year", target: add_date(50, 0, 0), want: "50 years from now" },
        Case { name: "year ago", target: add_date(-2, 0, 0), want: "2 years ago" },
    ];
    check_cases(&pinned("en-EN"), &cases);
}

#[test]
fn german() {
    let cases = [
        Case { name: "just now", target: reference_now(), want: "jetzt" },
        Case { name: "second", target: add(hms(0, 0, 1)), want: "1 Sekunde ab jetzt" },
        Case { name: "second ago", target: add(hms(0, 0, -1)), want: "1 Sekunde zuvor" },
        Case { name: "seconds ago", target: add(hms(0, 0, -2)), want: "2 Sekunden zuvor" },
        Case { name: "minutes", target: add(hms(0, 59, 59)), want: "60 Minuten ab jetzt" },
        Case { name: "tomorrow", target: add_date(0, 0, 1), want: "morgen" },
        Case { name: "yesterday", target: add_date(0, 0, -1), want: "gestern" },
        Case { name: "week", target: add_date(0, 0, 7), want: "1 Woche ab jetzt" },
        Case { name: "week ago", target: add_date(0, 0, -7), want: "1 Woche zuvor" },
        Case { name: "month", target: add_date(0, 1, 0), want: "1 Monat ab jetzt" },
        Case { name: "month ago", target: add_date(0, -1, 0), want: "1 Monat zuvor" },
        Case { name: "year", target: add_date(50, 0, 0), want: "50 Jahre ab jetzt" },
        Case { name: "year ago", target: add_date(-2, 0, 0), want: "2 Jahre zuvor" },
    ];
    check_cases(&pinned("de-DE"), &cases);
}

#[test]
fn french_and_spanish() {
    check_cases(
        &pinned("fr-FR"),
        &[
            Case { name: "just now", target: reference_now(), want: "à l'instant" },
            Case { name: "minutes ago", target: add(hms(0, -5, 0)), want: "il y a 5 minutes" },
            Case { name: "tomorrow", target: add_date(0, 0, 1), want: "demain" },
            Case { name: "months", target: add_date(0, 3, 0), want: "dans 3 mois" },
        ],
    );
    check_cases(
        &pinned("es-ES"),
        &[
            Case { name: "just now", target: reference_now(), want: "justo ahora" },
            Case { name: "hour", target: add(hms(1, 0, 0)), want: "dentro de 1 hora" },
            Case { name: "yesterday", target: add_date(0, 0, -1), want: "ayer" },
            Case { name: "years ago", target: add_date(-3, 0, 0), want: "hace 3 años" },
        ],
    );
}

#[test]
fn one_year_from_now() {
    assert_eq!(pinned("en-EN").format(&add_date(1, 0, 0)), "1 year from now");
}

#[test]
fn every_unit_in_both_directions() {
    let pretty = pinned("en-EN");
    let cases = [
        (TimeDelta::seconds(30), "30 seconds"),
        (TimeDelta::minutes(5), "5 minutes"),
        (TimeDelta::hours(5), "5 hours"),
        (TimeDelta::days(3), "3 days"),
        (TimeDelta::days(14), "2 weeks"),
        (TimeDelta::days(90), "3 months"),
        (TimeDelta::days(365 * 4), "4 years"),
    ];
    for (delta, phrase) in cases {
        assert_eq!(pretty.format_duration(delta), format!("{phrase} from now"));
        assert_eq!(pretty.format_duration(-delta), format!("{phrase} ago"));
    }
}

#[test]
fn two_days_is_not_tomorrow() {
    assert_eq!(pinned("en-EN").format(&add_date(0, 0, 2)), "2 days from now");
    assert_eq!(pinned("de-DE").format(&add_date(0, 0, -2)), "2 Tage zuvor");
}

#[test]
fn targets_in_other_time_zones() {
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let target = add(TimeDelta::hours(-3)).with_timezone(&tokyo);
    assert_eq!(pinned("en-EN").format(&target), "3 hours ago");

    // Already the 16th in Tokyo, but only nine hours away.
    let local_morning = tokyo.with_ymd_and_hms(2024, 5, 16, 6, 0, 0).unwrap();
    assert_eq!(pinned("en-EN").format(&local_morning), "9 hours from now");

    // Exactly one day ahead lands on the next Tokyo date too.
    let local_evening = tokyo.with_ymd_and_hms(2024, 5, 16, 21, 0, 0).unwrap();
    assert_eq!(pinned("en-EN").format(&local_evening), "tomorrow");
}

#[test]
fn format_at_matches_pinned_clock() {
    let pretty = prettytime::Formatter::new("en-EN").unwrap();
    let target = add_date(0, 0, -7);
    assert_eq!(
        pretty.format_at(&target, &reference_now()),
        pinned("en-EN").format(&target)
    );
}

#[test]
fn unknown_locale_never_defaults() {
    for key in ["xx-XX", "", "english"] {
        let err = prettytime::Formatter::new(key).unwrap_err();
        assert!(matches!(err, PrettyTimeError::UnknownLocale { .. }), "{key:?}");
        assert!(prettytime::format(key, &Utc::now()).is_err());
    }
}

#[test]
fn one_shot_format() {
    let target = Utc::now() - TimeDelta::days(60);
    assert_eq!(prettytime::format("en-EN", &target).unwrap(), "2 months ago");
}

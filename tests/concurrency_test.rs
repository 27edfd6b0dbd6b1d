//! Shared formatters and the locale registry under concurrent use.

use std::sync::Arc;
use std::thread;

use chrono::TimeDelta;

mod common;
use common::fixtures::{add, pinned};

#[test]
fn formatter_shared_across_threads() {
    let pretty = Arc::new(pinned("de-DE"));
    let mut handles = Vec::new();

    for i in 1..=10 {
        let pretty = Arc::clone(&pretty);
        let handle = thread::spawn(move || pretty.format(&add(TimeDelta::minutes(-i))));
        handles.push((i, handle));
    }

    for (i, handle) in handles {
        let got = handle.join().expect("thread join");
        let want = if i == 1 {
            "1 Minute zuvor".to_string()
        } else {
            format!("{i} Minuten zuvor")
        };
        assert_eq!(got, want);
    }
}

#[test]
fn registry_first_use_from_many_threads() {
    let handles: Vec<_> = ["en-EN", "de-DE", "fr-FR", "es-ES"]
        .into_iter()
        .cycle()
        .take(16)
        .map(|key| thread::spawn(move || prettytime::Formatter::new(key).map(|f| f.locale())))
        .collect();

    for handle in handles {
        let locale = handle.join().expect("thread join").expect("known locale");
        assert!(prettytime::available_locales().contains(&locale));
    }
}

#[test]
fn scoped_threads_borrow_one_formatter() {
    let pretty = pinned("en-EN");
    let results: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|h| {
                let pretty = &pretty;
                scope.spawn(move || pretty.format(&add(TimeDelta::hours(h + 1))))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread join"))
            .collect()
    });

    assert_eq!(
        results,
        [
            "1 hour from now",
            "2 hours from now",
            "3 hours from now",
            "4 hours from now"
        ]
    );
}

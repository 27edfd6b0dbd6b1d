//! English phrases.

use super::{Forms, PhraseSet, UnitPhrases};

pub static PHRASES: PhraseSet = PhraseSet {
    key: "en-EN",
    just_now: "just now",
    yesterday: "yesterday",
    tomorrow: "tomorrow",
    second: UnitPhrases::new(
        Forms::new("{count} second ago", "{count} seconds ago"),
        Forms::new("{count} second from now", "{count} seconds from now"),
    ),
    minute: UnitPhrases::new(
        Forms::new("{count} minute ago", "{count} minutes ago"),
        Forms::new("{count} minute from now", "{count} minutes from now"),
    ),
    hour: UnitPhrases::new(
        Forms::new("{count} hour ago", "{count} hours ago"),
        Forms::new("{count} hour from now", "{count} hours from now"),
    ),
    day: UnitPhrases::new(
        Forms::new("{count} day ago", "{count} days ago"),
        Forms::new("{count} day from now", "{count} days from now"),
    ),
    week: UnitPhrases::new(
        Forms::new("{count} week ago", "{count} weeks ago"),
        Forms::new("{count} week from now", "{count} weeks from now"),
    ),
    month: UnitPhrases::new(
        Forms::new("{count} month ago", "{count} months ago"),
        Forms::new("{count} month from now", "{count} months from now"),
    ),
    year: UnitPhrases::new(
        Forms::new("{count} year ago", "{count} years ago"),
        Forms::new("{count} year from now", "{count} years from now"),
    ),
};

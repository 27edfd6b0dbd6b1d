//! German phrases.

use super::{Forms, PhraseSet, UnitPhrases};

pub static PHRASES: PhraseSet = PhraseSet {
    key: "de-DE",
    just_now: "jetzt",
    yesterday: "gestern",
    tomorrow: "morgen",
    second: UnitPhrases::new(
        Forms::new("{count} Sekunde zuvor", "{count} Sekunden zuvor"),
        Forms::new("{count} Sekunde ab jetzt", "{count} Sekunden ab jetzt"),
    ),
    minute: UnitPhrases::new(
        Forms::new("{count} Minute zuvor", "{count} Minuten zuvor"),
        Forms::new("{count} Minute ab jetzt", "{count} Minuten ab jetzt"),
    ),
    hour: UnitPhrases::new(
        Forms::new("{count} Stunde zuvor", "{count} Stunden zuvor"),
        Forms::new("{count} Stunde ab jetzt", "{count} Stunden ab jetzt"),
    ),
    day: UnitPhrases::new(
        Forms::new("{count} Tag zuvor", "{count} Tage zuvor"),
        Forms::new("{count} Tag ab jetzt", "{count} Tage ab jetzt"),
    ),
    week: UnitPhrases::new(
        Forms::new("{count} Woche zuvor", "{count} Wochen zuvor"),
        Forms::new("{count} Woche ab jetzt", "{count} Wochen ab jetzt"),
    ),
    month: UnitPhrases::new(
        Forms::new("{count} Monat zuvor", "{count} Monate zuvor"),
        Forms::new("{count} Monat ab jetzt", "{count} Monate ab jetzt"),
    ),
    year: UnitPhrases::new(
        Forms::new("{count} Jahr zuvor", "{count} Jahre zuvor"),
        Forms::new("{count} Jahr ab jetzt", "{count} Jahre ab jetzt"),
    ),
};

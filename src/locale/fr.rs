//! French phrases.
//!
//! The count leads the unit but follows the direction marker
//! ("il y a 3 minutes", "dans 3 minutes").

use super::{Forms, PhraseSet, UnitPhrases};

pub static PHRASES: PhraseSet = PhraseSet {
    key: "fr-FR",
    just_now: "à l'instant",
    yesterday: "hier",
    tomorrow: "demain",
    second: UnitPhrases::new(
        Forms::new("il y a {count} seconde", "il y a {count} secondes"),
        Forms::new("dans {count} seconde", "dans {count} secondes"),
    ),
    minute: UnitPhrases::new(
        Forms::new("il y a {count} minute", "il y a {count} minutes"),
        Forms::new("dans {count} minute", "dans {count} minutes"),
    ),
    hour: UnitPhrases::new(
        Forms::new("il y a {count} heure", "il y a {count} heures"),
        Forms::new("dans {count} heure", "dans {count} heures"),
    ),
    day: UnitPhrases::new(
        Forms::new("il y a {count} jour", "il y a {count} jours"),
        Forms::new("dans {count} jour", "dans {count} jours"),
    ),
    week: UnitPhrases::new(
        Forms::new("il y a {count} semaine", "il y a {count} semaines"),
        Forms::new("dans {count} semaine", "dans {count} semaines"),
    ),
    month: UnitPhrases::new(
        Forms::new("il y a {count} mois", "il y a {count} mois"),
        Forms::new("dans {count} mois", "dans {count} mois"),
    ),
    year: UnitPhrases::new(
        Forms::new("il y a {count} an", "il y a {count} ans"),
        Forms::new("dans {count} an", "dans {count} ans"),
    ),
};

//! Spanish phrases.

use super::{Forms, PhraseSet, UnitPhrases};

pub static PHRASES: PhraseSet = PhraseSet {
    key: "es-ES",
    just_now: "justo ahora",
    yesterday: "ayer",
    tomorrow: "mañana",
    second: UnitPhrases::new(
        Forms::new("hace {count} segundo", "hace {count} segundos"),
        Forms::new("dentro de {count} segundo", "dentro de {count} segundos"),
    ),
    minute: UnitPhrases::new(
        Forms::new("hace {count} minuto", "hace {count} minutos"),
        Forms::new("dentro de {count} minuto", "dentro de {count} minutos"),
    ),
    hour: UnitPhrases::new(
        Forms::new("hace {count} hora", "hace {count} horas"),
        Forms::new("dentro de {count} hora", "dentro de {count} horas"),
    ),
    day: UnitPhrases::new(
        Forms::new("hace {count} día", "hace {count} días"),
        Forms::new("dentro de {count} día", "dentro de {count} días"),
    ),
    week: UnitPhrases::new(
        Forms::new("hace {count} semana", "hace {count} semanas"),
        Forms::new("dentro de {count} semana", "dentro de {count} semanas"),
    ),
    month: UnitPhrases::new(
        Forms::new("hace {count} mes", "hace {count} meses"),
        Forms::new("dentro de {count} mes", "dentro de {count} meses"),
    ),
    year: UnitPhrases::new(
        Forms::new("hace {count} año", "hace {count} años"),
        Forms::new("dentro de {count} año", "dentro de {count} años"),
    ),
};

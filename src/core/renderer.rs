//! Turns a selection into the locale's phrase.

use super::models::{Direction, Magnitude, Plurality, Selection, Unit};
use crate::locale::{COUNT_PLACEHOLDER, PhraseSet};

/// Render a counted span.
///
/// `Direction::Now` ignores unit and count and yields the "just now" phrase.
#[must_use]
pub fn render_span(unit: Unit, count: u64, direction: Direction, phrases: &PhraseSet) -> String {
    phrases
        .template(unit, direction, Plurality::of(count))
        .map_or_else(
            || phrases.just_now.to_string(),
            |template| template.replace(COUNT_PLACEHOLDER, &count.to_string()),
        )
}

/// Render any selection.
#[must_use]
pub fn render(selection: &Selection, phrases: &PhraseSet) -> String {
    match *selection {
        Selection::Span(Magnitude {
            unit,
            count,
            direction,
        }) => render_span(unit, count, direction, phrases),
        Selection::Yesterday => phrases.yesterday.to_string(),
        Selection::Tomorrow => phrases.tomorrow.to_string(),
    }
}

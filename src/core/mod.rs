//! Relative time selection and rendering.
//!
//! [`selector`] maps an offset to a unit and count, [`renderer`] turns that
//! into a locale phrase, and [`Formatter`] ties both to a clock.

pub mod clock;
pub mod formatter;
pub mod models;
pub mod renderer;
pub mod selector;

pub use clock::{Clock, FixedClock, SystemClock};
pub use formatter::Formatter;
pub use models::{Direction, Magnitude, Plurality, Selection, Unit};
pub use renderer::{render, render_span};
pub use selector::{select, select_between, whole_seconds};

//! Compiled-in JSON translations with English fallback.
mod bundle;
mod locales;
mod render;

pub use bundle::{current_lang, set_lang};
pub use locales::{DEFAULT_LOCALE, LocaleMeta, find_locale, locales};
pub use render::{Args, t, t_or, tr};

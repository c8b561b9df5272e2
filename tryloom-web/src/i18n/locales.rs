use serde_json::Value;

/// A shipped translation: its code, its name in its own language, and the
/// raw JSON strings compiled into the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
    source: &'static str,
}

pub const DEFAULT_LOCALE: &str = "en";

static LOCALES: [LocaleMeta; 2] = [
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
        source: include_str!("../../i18n/en.json"),
    },
    LocaleMeta {
        code: "es",
        name: "Español",
        rtl: false,
        source: include_str!("../../i18n/es.json"),
    },
];

#[must_use]
pub fn locales() -> &'static [LocaleMeta] {
    &LOCALES
}

/// English, the locale every other bundle falls back to.
#[must_use]
pub fn default_locale() -> &'static LocaleMeta {
    &LOCALES[0]
}

#[must_use]
pub fn find_locale(code: &str) -> Option<&'static LocaleMeta> {
    LOCALES.iter().find(|meta| meta.code == code)
}

impl LocaleMeta {
    /// Parse the compiled strings. `None` only if the bundled JSON is broken.
    #[must_use]
    pub fn strings(&self) -> Option<Value> {
        match serde_json::from_str(self.source) {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!("locale '{}' is not valid JSON: {err}", self.code);
                None
            }
        }
    }
}

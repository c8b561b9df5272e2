use crate::i18n::locales::{LocaleMeta, default_locale, find_locale};
use serde_json::Value;
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
const LOCALE_STORAGE_KEY: &str = "tryloom.locale";

/// Active strings plus the English strings consulted for missing keys.
pub(super) struct Bundle {
    pub meta: &'static LocaleMeta,
    pub translations: Value,
    pub fallback: Value,
}

fn english() -> Value {
    default_locale()
        .strings()
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

fn bundle_for(code: &str) -> Option<Bundle> {
    let meta = find_locale(code)?;
    Some(Bundle {
        meta,
        translations: meta.strings()?,
        fallback: english(),
    })
}

fn default_bundle() -> Bundle {
    let fallback = english();
    Bundle {
        meta: default_locale(),
        translations: fallback.clone(),
        fallback,
    }
}

#[cfg(target_arch = "wasm32")]
fn stored_locale() -> Option<String> {
    crate::dom::local_storage()
        .ok()?
        .get_item(LOCALE_STORAGE_KEY)
        .ok()
        .flatten()
}

#[cfg(not(target_arch = "wasm32"))]
const fn stored_locale() -> Option<String> {
    None
}

thread_local! {
    static ACTIVE: RefCell<Bundle> = RefCell::new(
        stored_locale()
            .and_then(|code| bundle_for(&code))
            .unwrap_or_else(default_bundle)
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&Bundle) -> R) -> R {
    ACTIVE.with(|cell| f(&cell.borrow()))
}

#[cfg(target_arch = "wasm32")]
fn apply_to_document(meta: &LocaleMeta) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute("lang", meta.code);
        let _ = root.set_attribute("dir", if meta.rtl { "rtl" } else { "ltr" });
    }
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, meta.code);
    }
}

/// Switch the active language. Unknown codes are logged and ignored.
///
/// In the browser the `<html>` element's `lang`/`dir` follow the switch and
/// the choice is remembered in `localStorage`.
pub fn set_lang(code: &str) {
    let Some(bundle) = bundle_for(code) else {
        log::warn!("ignoring unsupported locale '{code}'");
        return;
    };
    #[cfg(target_arch = "wasm32")]
    apply_to_document(bundle.meta);
    ACTIVE.with(|cell| cell.replace(bundle));
}

#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.meta.code.to_string())
}

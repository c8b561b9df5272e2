// Accessibility helpers

/// Id of the polite live region rendered by the app shell. Its text tracks the try-on status.
pub const LIVE_REGION_ID: &str = "live-status";

/// Critical CSS for focus rings and screen-reader-only text, injected with the shell.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #a855f7;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Move keyboard focus back to the element with `id`, if it exists.
pub fn restore_focus(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        if let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

//! URLs for bundled assets and routes, respecting the deployment base path.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/tryloom` on GitHub Pages)
//! generated URLs are prefixed with it; local builds stay root-anchored.

const fn public_base() -> &'static str {
    match option_env!("PUBLIC_URL") {
        Some(base) => base,
        None => "",
    }
}

/// Path to a file shipped with the app.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_base())
}

/// Base path for the router, or `None` to mount at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_base())
}

/// Resolve an image reference for `<img src>`. Absolute, data and object URLs
/// pass through untouched; anything else is treated as a bundled asset.
#[must_use]
pub fn image_src(reference: &str) -> String {
    const PASSTHROUGH: [&str; 4] = ["https://", "http://", "data:", "blob:"];
    if PASSTHROUGH.iter().any(|scheme| reference.starts_with(scheme)) {
        reference.to_string()
    } else {
        asset_path(reference)
    }
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

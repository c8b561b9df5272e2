use thiserror::Error;
use tryloom_core::{ImageRef, IntakeError, PickedFile, validate_picked};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Storage, Url};

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

#[derive(Debug, Error)]
pub enum FileReadError {
    #[error(transparent)]
    Rejected(#[from] IntakeError),
    #[error("reading '{name}' failed: {message}")]
    Read { name: String, message: String },
}

fn read_failed(file: &File, err: &JsValue) -> FileReadError {
    FileReadError::Read {
        name: file.name(),
        message: js_error_message(err),
    }
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn picked_file(file: &File) -> PickedFile {
    PickedFile {
        name: file.name(),
        mime: file.type_(),
        size: file.size().max(0.0) as u64,
    }
}

/// Read a user-picked image into memory and hand back a displayable reference.
///
/// The bytes are loaded once to make sure the file is readable, then exposed to
/// `<img>` through an object URL. Nothing is uploaded or stored.
///
/// # Errors
/// Returns an error when the file is not an image, is empty, or the browser
/// refuses to read it.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn read_image_file(file: File) -> Result<ImageRef, FileReadError> {
    let picked = picked_file(&file);
    validate_picked(&picked)?;

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| read_failed(&file, &err))?;
    let byte_len = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map(|buf| buf.byte_length())
        .map_err(|err| read_failed(&file, &err))?;
    if byte_len == 0 {
        return Err(IntakeError::Empty(picked.name).into());
    }

    let src = Url::create_object_url_with_blob(&file).map_err(|err| read_failed(&file, &err))?;
    log::info!("loaded '{}' ({byte_len} bytes)", picked.name);
    Ok(ImageRef::uploaded(src, picked.name))
}

/// Release an object URL minted by [`read_image_file`]. Remote and data URLs are left alone.
pub fn release_image(image: &ImageRef) {
    if !image.src.starts_with("blob:") {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = Url::revoke_object_url(&image.src) {
            log::warn!("could not release '{}': {}", image.label, js_error_message(&err));
            return;
        }
    }
    log::debug!("released '{}'", image.label);
}

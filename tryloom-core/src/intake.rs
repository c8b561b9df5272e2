//! Image intake: user-picked files and bundled sample photos.
//!
//! Reading the bytes is platform work and happens in the front end; this module
//! owns the rules for what counts as an acceptable image and how a finished
//! read turns into a session action.
use crate::session::Action;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where an in-memory image came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageOrigin {
    Upload { file_name: String },
    Sample { id: String },
}

/// Opaque handle to an image shown on the camera screen.
///
/// `src` is whatever the renderer can put in an `<img src>`: an object URL,
/// a data URL or a remote URL. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub label: String,
    pub origin: ImageOrigin,
}

impl ImageRef {
    #[must_use]
    pub fn uploaded(src: impl Into<String>, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            src: src.into(),
            label: file_name.clone(),
            origin: ImageOrigin::Upload { file_name },
        }
    }

    #[must_use]
    pub fn sample(sample: &SampleImage) -> Self {
        Self {
            src: sample.url.to_string(),
            label: sample.label.to_string(),
            origin: ImageOrigin::Sample {
                id: sample.id.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn is_sample(&self) -> bool {
        matches!(self.origin, ImageOrigin::Sample { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleImage {
    pub id: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

pub const SAMPLE_IMAGES: [SampleImage; 3] = [
    SampleImage {
        id: "portrait-studio",
        label: "Studio portrait",
        url: "https://picsum.photos/seed/tryloom-sample-studio/640/480",
    },
    SampleImage {
        id: "portrait-outdoor",
        label: "Outdoor portrait",
        url: "https://picsum.photos/seed/tryloom-sample-outdoor/640/480",
    },
    SampleImage {
        id: "portrait-smile",
        label: "Smiling close-up",
        url: "https://picsum.photos/seed/tryloom-sample-smile/640/480",
    },
];

#[must_use]
pub fn sample_image(id: &str) -> Option<&'static SampleImage> {
    SAMPLE_IMAGES.iter().find(|sample| sample.id == id)
}

/// Metadata of a file chosen through the platform picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("'{name}' is not an image (type '{mime}')")]
    NotAnImage { name: String, mime: String },
    #[error("'{0}' is empty")]
    Empty(String),
}

/// Check that a picked file looks like something the browser can decode as an image.
///
/// # Errors
///
/// Returns an error for empty files and for MIME types outside `image/*`.
pub fn validate_picked(file: &PickedFile) -> Result<(), IntakeError> {
    if file.size == 0 {
        return Err(IntakeError::Empty(file.name.clone()));
    }
    let is_image = file
        .mime
        .split_once('/')
        .is_some_and(|(kind, sub)| kind.eq_ignore_ascii_case("image") && !sub.is_empty());
    if !is_image {
        return Err(IntakeError::NotAnImage {
            name: file.name.clone(),
            mime: file.mime.clone(),
        });
    }
    Ok(())
}

/// Result of a single-shot image read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Loaded(ImageRef),
    /// The picker closed without a file, or the read produced nothing usable.
    Cancelled,
}

impl IntakeOutcome {
    /// Session action to apply on completion; `None` leaves the state untouched.
    #[must_use]
    pub fn into_action(self) -> Option<Action> {
        match self {
            Self::Loaded(image) => Some(Action::ImageLoaded(image)),
            Self::Cancelled => None,
        }
    }
}

impl From<Option<ImageRef>> for IntakeOutcome {
    fn from(value: Option<ImageRef>) -> Self {
        value.map_or(Self::Cancelled, Self::Loaded)
    }
}

//! Simulated camera viewport. Nothing here touches a real camera: the "stream"
//! is a static figure and the try-on overlay is the product category's glyph.
use crate::i18n::{t, tr};
use crate::paths::image_src;
use std::collections::BTreeMap;
use tryloom_core::{ImageRef, Product};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub image: Option<ImageRef>,
    #[prop_or_default]
    pub streaming: bool,
    #[prop_or_default]
    pub recording: bool,
    #[prop_or_default]
    pub trying_on: Option<Product>,
}

/// Status badge text, if any badge is shown.
#[must_use]
pub fn status_key(streaming: bool, recording: bool) -> Option<&'static str> {
    if recording {
        Some("camera.recording")
    } else if streaming {
        Some("camera.live")
    } else {
        None
    }
}

fn ar_corners() -> Html {
    html! {
        <div class="ar-frame" aria-hidden="true">
            <span class="ar-corner ar-corner--tl"></span>
            <span class="ar-corner ar-corner--tr"></span>
            <span class="ar-corner ar-corner--bl"></span>
            <span class="ar-corner ar-corner--br"></span>
        </div>
    }
}

#[function_component(CameraFeed)]
pub fn camera_feed(p: &Props) -> Html {
    let subject = match (&p.image, p.streaming) {
        (Some(image), _) => {
            let mut args = BTreeMap::new();
            args.insert("name", image.label.as_str());
            html! {
                <img
                    class="camera-feed__still"
                    src={image_src(&image.src)}
                    alt={tr("camera.photo_alt", Some(&args))}
                />
            }
        }
        (None, true) => html! {
            <div class="camera-feed__figure" aria-hidden="true">{"👤"}</div>
        },
        (None, false) => {
            return html! {
                <div class="camera-feed camera-feed--idle" data-testid="camera-placeholder">
                    <span class="camera-feed__icon" aria-hidden="true">{"📷"}</span>
                    <p>{ t("camera.placeholder") }</p>
                </div>
            };
        }
    };

    let badge = status_key(p.streaming, p.recording).map(|key| {
        let class = if p.recording {
            "status-badge status-badge--recording"
        } else {
            "status-badge status-badge--live"
        };
        html! {
            <div class={class}>
                <span class="status-badge__dot" aria-hidden="true"></span>
                { t(key) }
            </div>
        }
    });

    let overlay = p.trying_on.as_ref().map(|product| {
        let mut args = BTreeMap::new();
        args.insert("name", product.name.as_str());
        html! {
            <>
                <div class="camera-feed__glyph" aria-hidden="true">
                    { product.category.overlay_glyph() }
                </div>
                <div class="camera-feed__caption">
                    { tr("camera.trying_on", Some(&args)) }
                </div>
            </>
        }
    });

    html! {
        <div class="camera-feed" data-testid="camera-feed">
            { subject }
            { ar_corners() }
            { badge.unwrap_or_default() }
            { overlay.unwrap_or_default() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_badge_wins_over_live() {
        assert_eq!(status_key(true, false), Some("camera.live"));
        assert_eq!(status_key(true, true), Some("camera.recording"));
        assert_eq!(status_key(false, true), Some("camera.recording"));
        assert_eq!(status_key(false, false), None);
    }
}

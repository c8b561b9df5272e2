use crate::components::camera_feed::CameraFeed;
use crate::i18n::t;
use tryloom_core::{ImageRef, Product, ProductId};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CameraControl {
    ToggleRecording,
    Capture,
    Reset,
}

#[derive(Properties, Clone, PartialEq)]
pub struct CameraPageProps {
    #[prop_or_default]
    pub image: Option<ImageRef>,
    pub streaming: bool,
    pub recording: bool,
    /// Items offered in the picker, already filtered for this camera session.
    pub products: Vec<Product>,
    #[prop_or_default]
    pub selected: Option<ProductId>,
    pub on_select: Callback<ProductId>,
    pub on_control: Callback<CameraControl>,
}

/// Label key for the record button in its current state.
#[must_use]
pub const fn record_label_key(recording: bool) -> &'static str {
    if recording {
        "camera.stop_recording"
    } else {
        "camera.start_recording"
    }
}

fn control_callback(
    on_control: &Callback<CameraControl>,
    control: CameraControl,
) -> Callback<MouseEvent> {
    let cb = on_control.clone();
    Callback::from(move |_| cb.emit(control))
}

fn item_button(product: &Product, selected: bool, on_select: &Callback<ProductId>) -> Html {
    let onclick = {
        let cb = on_select.clone();
        let id = product.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let class = if selected {
        "item-chip item-chip--selected"
    } else {
        "item-chip"
    };
    html! {
        <button
            key={product.id.as_str()}
            type="button"
            class={class}
            aria-pressed={selected.to_string()}
            data-product={product.id.to_string()}
            onclick={onclick}
        >
            { product.name.clone() }
        </button>
    }
}

#[function_component(CameraPage)]
pub fn camera_page(props: &CameraPageProps) -> Html {
    let trying_on = props
        .selected
        .as_ref()
        .and_then(|id| props.products.iter().find(|p| &p.id == id))
        .cloned();

    html! {
        <div class="camera-screen" data-testid="camera-screen">
            <CameraFeed
                image={props.image.clone()}
                streaming={props.streaming}
                recording={props.recording}
                trying_on={trying_on}
            />
            <section class="item-picker" aria-labelledby="item-picker-title">
                <h2 id="item-picker-title">{ t("camera.select_item") }</h2>
                if props.products.is_empty() {
                    <p class="item-picker__empty">{ t("camera.no_items") }</p>
                } else {
                    <div class="item-picker__list">
                        { for props.products.iter().map(|product| {
                            let selected = props.selected.as_ref() == Some(&product.id);
                            item_button(product, selected, &props.on_select)
                        }) }
                    </div>
                }
            </section>
            <div class="camera-controls" role="group" aria-label={t("camera.controls")}>
                <button
                    id="record-btn"
                    type="button"
                    class="btn-primary"
                    aria-pressed={props.recording.to_string()}
                    onclick={control_callback(&props.on_control, CameraControl::ToggleRecording)}
                >
                    <span aria-hidden="true">{ if props.recording { "⏸ " } else { "▶ " } }</span>
                    { t(record_label_key(props.recording)) }
                </button>
                <button
                    type="button"
                    class="btn-secondary"
                    onclick={control_callback(&props.on_control, CameraControl::Capture)}
                >
                    { t("camera.capture") }
                </button>
                <button
                    type="button"
                    class="btn-ghost"
                    onclick={control_callback(&props.on_control, CameraControl::Reset)}
                >
                    <span aria-hidden="true">{"↺ "}</span>
                    { t("camera.reset") }
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_label_follows_state() {
        assert_eq!(record_label_key(false), "camera.start_recording");
        assert_eq!(record_label_key(true), "camera.stop_recording");
    }
}

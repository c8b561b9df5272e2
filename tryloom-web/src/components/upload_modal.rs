use crate::components::modal::Modal;
use crate::i18n::t;
use tryloom_core::SAMPLE_IMAGES;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const UPLOAD_DIALOG_ID: &str = "upload-dialog";
pub const UPLOAD_INPUT_ID: &str = "upload-input";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    /// First file chosen in the picker. Not emitted when the picker closes empty.
    pub on_file: Callback<web_sys::File>,
    /// Id of the chosen sample photo.
    pub on_sample: Callback<String>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

fn sample_callback(on_sample: Callback<String>, id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| on_sample.emit(id.to_string()))
}

#[function_component(UploadModal)]
pub fn upload_modal(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_file.clone();
        Callback::from(move |e: Event| {
            let file = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) => cb.emit(file),
                None => log::debug!("file picker closed without a selection"),
            }
        })
    };

    html! {
        <Modal
            id={UPLOAD_DIALOG_ID}
            open={p.open}
            heading={t("upload.title")}
            description={Some(AttrValue::from(t("upload.description")))}
            close_label={t("upload.close")}
            on_close={p.on_close.clone()}
            return_focus_id={p.return_focus_id.clone()}
        >
            <label for={UPLOAD_INPUT_ID} class="upload-picker">
                <span>{ t("upload.choose_file") }</span>
                <input id={UPLOAD_INPUT_ID} type="file" accept="image/*" onchange={on_change} />
            </label>
            <h3 class="upload-samples-title">{ t("upload.samples") }</h3>
            <ul class="upload-samples" role="list">
                { for SAMPLE_IMAGES.iter().map(|sample| html! {
                    <li key={sample.id}>
                        <button
                            type="button"
                            class="sample-thumb"
                            data-sample={sample.id}
                            onclick={sample_callback(p.on_sample.clone(), sample.id)}
                        >
                            <img src={sample.url} alt={sample.label} loading="lazy" />
                            <span>{ sample.label }</span>
                        </button>
                    </li>
                }) }
            </ul>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn open_modal_lists_picker_and_samples() {
        crate::i18n::set_lang("en");
        let props = Props {
            open: true,
            on_close: Callback::noop(),
            on_file: Callback::noop(),
            on_sample: Callback::noop(),
            return_focus_id: None,
        };
        let html = block_on(LocalServerRenderer::<UploadModal>::with_props(props).render());
        assert!(html.contains("type=\"file\""));
        assert!(html.contains("accept=\"image/*\""));
        assert!(html.contains(UPLOAD_DIALOG_ID));
        for sample in &SAMPLE_IMAGES {
            assert!(html.contains(sample.id), "missing {}", sample.id);
        }
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let props = Props {
            open: false,
            on_close: Callback::noop(),
            on_file: Callback::noop(),
            on_sample: Callback::noop(),
            return_focus_id: None,
        };
        let html = block_on(LocalServerRenderer::<UploadModal>::with_props(props).render());
        assert!(!html.contains("type=\"file\""));
    }
}

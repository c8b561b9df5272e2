//! Accessible dialog shell: labelled by its heading, closed by Escape, the
//! close button or a click on the backdrop. Focus moves into the dialog when
//! it opens and back to `return_focus_id` when it closes.
use crate::a11y::restore_focus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Dialog element id; the heading and description ids derive from it.
    pub id: AttrValue,
    pub open: bool,
    pub heading: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or(AttrValue::from("Close dialog"))]
    pub close_label: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[hook]
fn use_dialog_focus(open: bool, dialog: NodeRef, return_to: Option<AttrValue>) {
    let was_open = use_mut_ref(|| open);
    use_effect_with(open, move |&open| {
        let closing = *was_open.borrow() && !open;
        *was_open.borrow_mut() = open;
        if open {
            if let Some(el) = dialog.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
        } else if closing && let Some(id) = return_to {
            restore_focus(&id);
        }
    });
}

#[function_component(Modal)]
pub fn modal(p: &Props) -> Html {
    let dialog = use_node_ref();
    use_dialog_focus(p.open, dialog.clone(), p.return_focus_id.clone());

    if !p.open {
        return html! {};
    }

    let heading_id = format!("{}-heading", p.id);
    let description_id = p.description.as_ref().map(|_| format!("{}-description", p.id));

    let dismiss = p.on_close.reform(|_: MouseEvent| ());
    let escape = p
        .on_close
        .filter_reform(|e: KeyboardEvent| (e.key() == "Escape").then(|| e.prevent_default()));
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={dismiss.clone()}>
            <div
                id={p.id.clone()}
                ref={dialog}
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby={heading_id.clone()}
                aria-describedby={description_id.clone()}
                tabindex="-1"
                onclick={swallow_click}
                onkeydown={escape}
            >
                <header class="modal__top">
                    <h2 id={heading_id} class="modal__heading">{ p.heading.clone() }</h2>
                    <button
                        type="button"
                        class="modal__close"
                        aria-label={p.close_label.clone()}
                        onclick={dismiss}
                    >
                        {"✕"}
                    </button>
                </header>
                if let (Some(text), Some(id)) = (&p.description, description_id) {
                    <p id={id} class="modal__lead">{ text.clone() }</p>
                }
                { for p.children.iter() }
            </div>
        </div>
    }
}

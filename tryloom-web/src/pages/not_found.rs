use crate::components::category_card::category_name;
use crate::i18n::t;
use tryloom_core::Category;
use yew::prelude::*;

/// Shown for unknown paths, including galleries for categories that do not exist.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let on_click = props.on_go_home.reform(|_: MouseEvent| ());
    let known = Category::ALL
        .iter()
        .map(|category| category_name(*category))
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <section class="not-found" data-testid="not-found" aria-labelledby="not-found-title">
            <span class="not-found__icon" aria-hidden="true">{"🧵"}</span>
            <h1 id="not-found-title">{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            <p class="not-found__hint">{ t("not_found.collections") }{" "}{ known }</p>
            <button type="button" class="btn-primary" onclick={on_click}>
                { t("not_found.back") }
            </button>
        </section>
    }
}

use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer" role="contentinfo">
            <span class="app-footer__brand">
                { t("app.title") }{" · "}{ t("app.tagline") }
            </span>
            <small class="app-footer__notice">{ t("footer.copyright") }</small>
        </footer>
    }
}

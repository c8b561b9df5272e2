mod handlers;
mod screens;

pub use handlers::{AppHandlers, control_action};
pub use screens::{live_status, render_main_view};

use crate::app::state::AppState;
use crate::components::{footer::Footer, header::Header, upload_modal::UploadModal};
use crate::pages::home::UPLOAD_BUTTON_ID;
use crate::router::Route;
use tryloom_core::ScreenKind;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Whether the header offers a way back to the home screen.
#[must_use]
pub fn shows_back(screen: ScreenKind, route: Option<&Route>) -> bool {
    screen != ScreenKind::Home || matches!(route, None | Some(Route::NotFound))
}

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let session = state.session();
    let main_view = render_main_view(state, &handlers, route);

    html! {
        <>
            <Header
                show_back={shows_back(session.current_screen(), route)}
                on_back={handlers.go_home.clone()}
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main" class="app-main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id={crate::a11y::LIVE_REGION_ID} class="sr-only" aria-live="polite" role="status">
                    { live_status(session, state.catalog()) }
                </div>
                { main_view }
            </main>
            <UploadModal
                open={session.upload_open}
                on_close={handlers.close_upload.clone()}
                on_file={handlers.pick_file.clone()}
                on_sample={handlers.pick_sample.clone()}
                return_focus_id={Some(AttrValue::from(UPLOAD_BUTTON_ID))}
            />
            <Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_button_hidden_only_on_home() {
        assert!(!shows_back(ScreenKind::Home, Some(&Route::Home)));
        assert!(shows_back(ScreenKind::Home, Some(&Route::NotFound)));
        assert!(shows_back(ScreenKind::Camera, Some(&Route::Camera)));
        assert!(shows_back(ScreenKind::Gallery, None));
    }
}

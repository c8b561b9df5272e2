use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::i18n::{t, tr};
use crate::pages::{camera::CameraPage, gallery::GalleryPage, home::HomePage, not_found::NotFound};
use crate::router::Route;
use std::collections::BTreeMap;
use tryloom_core::{CameraView, Catalog, Product, Screen, Session};
use yew::prelude::*;

/// Text for the polite live region: what is being tried on, or the recording state.
#[must_use]
pub fn live_status(session: &Session, catalog: &Catalog) -> String {
    let worn = session.selected_product().and_then(|id| catalog.find(id));
    match (worn, session.is_recording()) {
        (Some(product), _) => {
            let mut args = BTreeMap::new();
            args.insert("name", product.name.as_str());
            tr("camera.trying_on", Some(&args))
        }
        (None, true) => t("camera.recording"),
        (None, false) => String::new(),
    }
}

pub fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    let not_found = matches!(route, None | Some(Route::NotFound));
    if not_found {
        return html! { <NotFound on_go_home={handlers.go_home.clone()} /> };
    }

    let session = state.session();
    match &session.screen {
        Screen::Home => html! {
            <HomePage
                on_start_camera={handlers.start_camera.clone()}
                on_upload={handlers.open_upload.clone()}
                on_open_gallery={handlers.open_gallery.clone()}
            />
        },
        Screen::Camera(view) => render_camera(state, handlers, view),
        Screen::Gallery(category) => html! {
            <GalleryPage
                category={*category}
                products={owned(session.visible_products(state.catalog()))}
                on_try_on={handlers.try_on.clone()}
            />
        },
    }
}

fn owned(products: Vec<&Product>) -> Vec<Product> {
    products.into_iter().cloned().collect()
}

fn render_camera(state: &AppState, handlers: &AppHandlers, view: &CameraView) -> Html {
    let session = state.session();
    html! {
        <CameraPage
            image={session.uploaded_image().cloned()}
            streaming={session.is_streaming()}
            recording={view.recording}
            products={owned(session.visible_products(state.catalog()))}
            selected={view.product.clone()}
            on_select={handlers.select_product.clone()}
            on_control={handlers.camera_control.clone()}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{SessionStore, load_catalog};
    use futures::executor::block_on;
    use tryloom_core::{Action, Category, ImageRef, SAMPLE_IMAGES};
    use yew::LocalServerRenderer;

    #[derive(Properties, Clone, PartialEq)]
    struct ScreenHarnessProps {
        session: Session,
        route: Option<Route>,
    }

    #[function_component(ScreenHarness)]
    fn screen_harness(props: &ScreenHarnessProps) -> Html {
        let session = props.session.clone();
        let state = AppState {
            store: use_reducer(move || SessionStore::with_session(load_catalog(), session)),
            current_language: use_state(|| String::from("en")),
        };
        let handlers = AppHandlers::new(&state, None);
        render_main_view(&state, &handlers, props.route.as_ref())
    }

    fn render(session: Session, route: Option<Route>) -> String {
        crate::i18n::set_lang("en");
        let props = ScreenHarnessProps { session, route };
        block_on(LocalServerRenderer::<ScreenHarness>::with_props(props).render())
    }

    fn reduce(actions: &[Action]) -> Session {
        let catalog = Catalog::reference();
        actions
            .iter()
            .cloned()
            .fold(Session::default(), |session, action| session.reduce(catalog, action))
    }

    #[test]
    fn unknown_route_renders_not_found() {
        let html = render(Session::default(), Some(Route::NotFound));
        assert!(html.contains("not-found"));
        let html = render(Session::default(), None);
        assert!(html.contains("Page not found"));
    }

    #[test]
    fn home_screen_shows_hero_and_categories() {
        let html = render(Session::default(), Some(Route::Home));
        assert!(html.contains("home-screen"));
        assert!(html.contains("Start Camera"));
        assert!(html.contains("Upload Photo"));
        for category in Category::ALL {
            assert!(html.contains(&format!("data-category=\"{}\"", category.slug())));
        }
    }

    #[test]
    fn eyewear_gallery_lists_six_products() {
        let session = reduce(&[Action::OpenGallery(Category::Eyewear)]);
        let html = render(
            session,
            Some(Route::Gallery {
                category: Category::Eyewear,
            }),
        );
        assert!(html.contains("Eyewear Collection"));
        assert_eq!(html.matches("class=\"product-card\"").count(), 6);
        for product in Catalog::reference().filter(Some(Category::Eyewear)) {
            assert!(html.contains(&product.name));
        }
    }

    #[test]
    fn camera_screen_streams_with_live_badge() {
        let session = reduce(&[Action::StartCamera]);
        let html = render(session, Some(Route::Camera));
        assert!(html.contains("camera-screen"));
        assert!(html.contains("LIVE"));
        assert!(html.contains("Start Recording"));
        assert_eq!(html.matches("item-chip").count(), 6);
    }

    #[test]
    fn camera_with_sample_photo_shows_the_image() {
        let image = ImageRef::sample(&SAMPLE_IMAGES[0]);
        let session = reduce(&[Action::ImageLoaded(image)]);
        let html = render(session, Some(Route::Camera));
        assert!(html.contains(SAMPLE_IMAGES[0].url));
        assert!(!html.contains("LIVE"));
    }

    #[test]
    fn try_on_renders_overlay_and_recording_badge() {
        let catalog = Catalog::reference();
        let product = catalog.filter(Some(Category::Eyewear))[0].clone();
        let session = reduce(&[
            Action::OpenGallery(Category::Eyewear),
            Action::TryOn(product.id.clone()),
            Action::ToggleRecording,
        ]);
        let html = render(session.clone(), Some(Route::Camera));
        assert!(html.contains(&format!("Trying on: {}", product.name)));
        assert!(html.contains("RECORDING"));
        assert!(html.contains("Stop Recording"));
        assert_eq!(
            live_status(&session, catalog),
            format!("Trying on: {}", product.name)
        );
    }

    #[test]
    fn live_status_is_empty_when_idle() {
        let catalog = Catalog::reference();
        assert!(live_status(&Session::default(), catalog).is_empty());
        let recording = reduce(&[Action::StartCamera, Action::ToggleRecording]);
        crate::i18n::set_lang("en");
        assert_eq!(live_status(&recording, catalog), "RECORDING");
    }
}

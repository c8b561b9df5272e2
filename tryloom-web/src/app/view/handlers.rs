use crate::app::state::AppState;
use crate::pages::camera::CameraControl;
use crate::router::Route;
use tryloom_core::{Action, Category, ImageRef, IntakeOutcome, ProductId, sample_image};
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub go_home: Callback<()>,
    pub start_camera: Callback<()>,
    pub open_gallery: Callback<Category>,
    pub try_on: Callback<ProductId>,
    pub select_product: Callback<ProductId>,
    pub camera_control: Callback<CameraControl>,
    pub open_upload: Callback<()>,
    pub close_upload: Callback<()>,
    pub pick_file: Callback<web_sys::File>,
    pub pick_sample: Callback<String>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            go_home: build_go_home(state, navigator),
            start_camera: dispatch_unit(state, Action::StartCamera),
            open_gallery: build_open_gallery(state),
            try_on: build_product_action(state, Action::TryOn),
            select_product: build_product_action(state, Action::SelectProduct),
            camera_control: build_camera_control(state),
            open_upload: dispatch_unit(state, Action::OpenUpload),
            close_upload: dispatch_unit(state, Action::CloseUpload),
            pick_file: build_pick_file(state),
            pick_sample: build_pick_sample(state),
            lang_change: build_lang_change(state),
        }
    }
}

fn dispatch_unit(state: &AppState, action: Action) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| state.dispatch(action.clone()))
}

fn build_open_gallery(state: &AppState) -> Callback<Category> {
    let state = state.clone();
    Callback::from(move |category| state.dispatch(Action::OpenGallery(category)))
}

fn build_product_action(state: &AppState, make: fn(ProductId) -> Action) -> Callback<ProductId> {
    let state = state.clone();
    Callback::from(move |id| state.dispatch(make(id)))
}

/// Reducer action for a camera control button.
#[must_use]
pub const fn control_action(control: CameraControl) -> Action {
    match control {
        CameraControl::ToggleRecording => Action::ToggleRecording,
        CameraControl::Capture => Action::Capture,
        CameraControl::Reset => Action::ResetTryOn,
    }
}

fn build_camera_control(state: &AppState) -> Callback<CameraControl> {
    let state = state.clone();
    Callback::from(move |control| {
        if control == CameraControl::Capture {
            log::info!("capture requested; nothing is recorded");
        }
        state.dispatch(control_action(control));
    })
}

pub fn build_go_home(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        state.dispatch(Action::NavigateHome);
        // The session may already be home (e.g. on the 404 page), so move the URL explicitly.
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}

fn apply_intake(state: &AppState, outcome: IntakeOutcome) {
    if let Some(action) = outcome.into_action() {
        state.dispatch(action);
    }
}

fn build_pick_file(state: &AppState) -> Callback<web_sys::File> {
    let state = state.clone();
    Callback::from(move |file: web_sys::File| {
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match crate::dom::read_image_file(file).await {
                Ok(image) => IntakeOutcome::Loaded(image),
                Err(err) => {
                    log::warn!("image not loaded: {err}");
                    IntakeOutcome::Cancelled
                }
            };
            apply_intake(&state, outcome);
        });
    })
}

/// Reducer action for a sample photo id; unknown ids load nothing.
#[must_use]
pub fn sample_action(id: &str) -> Option<Action> {
    let image = sample_image(id).map(ImageRef::sample);
    if image.is_none() {
        log::warn!("unknown sample image '{id}'");
    }
    IntakeOutcome::from(image).into_action()
}

fn build_pick_sample(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |id: String| {
        if let Some(action) = sample_action(&id) {
            state.dispatch(action);
        }
    })
}

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}

use crate::router::Route;
use tryloom_core::{Action, Screen, Session};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// Route to push after the session moved, or `None` when the address already matches.
#[must_use]
pub fn next_route_for_session(session: &Session, current_route: Option<&Route>) -> Option<Route> {
    let desired = Route::from_session(session);
    if Some(&desired) == current_route {
        None
    } else {
        Some(desired)
    }
}

/// Action that brings the session in line with an address the user typed or
/// reached through history. `NotFound` never touches the session.
#[must_use]
pub fn next_action_for_route(session: &Session, route: Option<&Route>) -> Option<Action> {
    match (route?, &session.screen) {
        (Route::Home, Screen::Home)
        | (Route::Camera, Screen::Camera(_))
        | (Route::NotFound, _) => None,
        (Route::Gallery { category }, Screen::Gallery(current)) if category == current => None,
        (Route::Home, _) => Some(Action::NavigateHome),
        (Route::Camera, _) => Some(Action::StartCamera),
        (Route::Gallery { category }, _) => Some(Action::OpenGallery(*category)),
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_session(
    session: &Session,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let desired = Route::from_session(session);
    let pending = next_route_for_session(session, active_route.as_ref());
    let last_seen = use_mut_ref(|| None::<Route>);
    use_effect_with(desired, move |desired| {
        // The first run belongs to the incoming URL, which the route-to-session hook applies.
        let previous = last_seen.borrow_mut().replace(desired.clone());
        if previous.is_some()
            && let (Some(nav), Some(route)) = (navigator.as_ref(), pending)
        {
            nav.push(&route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_session_with_route(state: &crate::app::state::AppState, route: Option<Route>) {
    let state = state.clone();
    use_effect_with(route, move |route| {
        if let Some(action) = next_action_for_route(state.session(), route.as_ref()) {
            log::debug!("route {route:?} -> {action:?}");
            state.dispatch(action);
        }
    });
}

use tryloom_core::{Category, Screen, Session};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/camera")]
    Camera,
    #[at("/gallery/:category")]
    Gallery { category: Category },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Address that reflects the screen the session is on.
    #[must_use]
    pub const fn from_session(session: &Session) -> Self {
        match &session.screen {
            Screen::Home => Self::Home,
            Screen::Camera(_) => Self::Camera,
            Screen::Gallery(category) => Self::Gallery {
                category: *category,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tryloom_core::{Action, Catalog};

    #[test]
    fn session_screens_map_to_routes() {
        let catalog = Catalog::load_from_static();
        let home = Session::default();
        assert_eq!(Route::from_session(&home), Route::Home);

        let camera = home.reduce(&catalog, Action::StartCamera);
        assert_eq!(Route::from_session(&camera), Route::Camera);

        let gallery = home.reduce(&catalog, Action::OpenGallery(Category::Makeup));
        assert_eq!(
            Route::from_session(&gallery),
            Route::Gallery {
                category: Category::Makeup
            }
        );
    }

    #[test]
    fn gallery_paths_parse_known_categories_only() {
        assert_eq!(
            Route::recognize("/gallery/eyewear"),
            Some(Route::Gallery {
                category: Category::Eyewear
            })
        );
        assert_eq!(Route::recognize("/gallery/hats"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/camera"), Some(Route::Camera));
        assert_eq!(
            Route::Gallery {
                category: Category::Clothes
            }
            .to_path(),
            "/gallery/clothes"
        );
    }
}

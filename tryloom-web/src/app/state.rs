use std::rc::Rc;
use tryloom_core::{Action, Catalog, CatalogSource, ImageRef, Session, StaticCatalog};
use yew::prelude::*;

/// Session plus the catalog it is reduced against, shaped for `use_reducer`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    pub catalog: Rc<Catalog>,
    pub session: Session,
}

impl SessionStore {
    #[must_use]
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            session: Session::default(),
        }
    }

    #[must_use]
    pub fn with_session(catalog: Rc<Catalog>, session: Session) -> Self {
        Self { catalog, session }
    }
}

impl Reducible for SessionStore {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("session action: {action:?}");
        let next = self.session.reduce(&self.catalog, action.clone());
        if next == self.session {
            // Capture is cosmetic and going home from home is the 404 link.
            if !matches!(action, Action::Capture | Action::NavigateHome) {
                log::warn!(
                    "{action:?} ignored on the {:?} screen",
                    self.session.current_screen()
                );
            }
            return self;
        }
        if let Some(image) = dropped_upload(&self.session, &next) {
            crate::dom::release_image(image);
        }
        Rc::new(Self {
            catalog: Rc::clone(&self.catalog),
            session: next,
        })
    }
}

/// The uploaded photo `prev` shows that `next` no longer does.
#[must_use]
pub fn dropped_upload<'a>(prev: &'a Session, next: &Session) -> Option<&'a ImageRef> {
    let image = prev.uploaded_image().filter(|image| !image.is_sample())?;
    (next.uploaded_image() != Some(image)).then_some(image)
}

/// Load the bundled catalog, falling back to the reference copy if it fails validation.
#[must_use]
pub fn load_catalog() -> Rc<Catalog> {
    match StaticCatalog.load_catalog() {
        Ok(catalog) => Rc::new(catalog),
        Err(err) => {
            log::error!("bundled catalog rejected: {err}");
            Rc::new(Catalog::reference().clone())
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: UseReducerHandle<SessionStore>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        store: use_reducer(|| SessionStore::new(load_catalog())),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.store.session
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.store.catalog
    }

    pub fn dispatch(&self, action: Action) {
        self.store.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tryloom_core::{Category, SAMPLE_IMAGES, ScreenKind};

    fn with_upload(src: &str) -> Rc<SessionStore> {
        store().reduce(Action::ImageLoaded(ImageRef::uploaded(src, "me.png")))
    }

    fn store() -> Rc<SessionStore> {
        Rc::new(SessionStore::new(load_catalog()))
    }

    #[test]
    fn reducer_returns_same_rc_when_nothing_changes() {
        let start = store();
        let next = Rc::clone(&start).reduce(Action::ToggleRecording);
        assert!(Rc::ptr_eq(&start, &next));
    }

    #[test]
    fn reducer_advances_the_session() {
        let next = store().reduce(Action::OpenGallery(Category::Clothes));
        assert_eq!(next.session.current_screen(), ScreenKind::Gallery);
        let next = next.reduce(Action::StartCamera);
        assert!(next.session.is_streaming());
        assert_eq!(next.session.selected_category(), Some(Category::Clothes));
    }

    #[test]
    fn bundled_catalog_loads() {
        assert_eq!(load_catalog().len(), 18);
    }

    #[test]
    fn going_home_from_home_keeps_the_store() {
        let start = store();
        let next = Rc::clone(&start).reduce(Action::NavigateHome);
        assert!(Rc::ptr_eq(&start, &next));
    }

    #[test]
    fn uploads_are_dropped_on_every_way_out() {
        let camera = with_upload("blob:one");
        let image = camera.session.uploaded_image().cloned();
        assert!(image.is_some());

        let home = Rc::clone(&camera).reduce(Action::NavigateHome);
        assert_eq!(dropped_upload(&camera.session, &home.session), image.as_ref());

        let gallery = Rc::clone(&camera).reduce(Action::OpenGallery(Category::Makeup));
        assert_eq!(dropped_upload(&camera.session, &gallery.session), image.as_ref());

        let replaced = Rc::clone(&camera)
            .reduce(Action::ImageLoaded(ImageRef::uploaded("blob:two", "you.png")));
        assert_eq!(dropped_upload(&camera.session, &replaced.session), image.as_ref());
    }

    #[test]
    fn kept_or_sample_images_are_not_dropped() {
        let camera = with_upload("blob:one");
        let recording = Rc::clone(&camera).reduce(Action::ToggleRecording);
        assert!(dropped_upload(&camera.session, &recording.session).is_none());

        let sample = store().reduce(Action::ImageLoaded(ImageRef::sample(&SAMPLE_IMAGES[0])));
        let home = Rc::clone(&sample).reduce(Action::NavigateHome);
        assert!(dropped_upload(&sample.session, &home.session).is_none());
    }
}

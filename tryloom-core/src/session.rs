//! Session state and the reducer that moves it between screens.
//!
//! Each screen carries exactly the data that is valid on it, so a gallery
//! without a category or a selected product outside the camera cannot be built.
use crate::catalog::{Catalog, Product, ProductId};
use crate::category::Category;
use crate::intake::ImageRef;
use serde::{Deserialize, Serialize};

/// Coarse screen discriminant, handy for views and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenKind {
    Home,
    Camera,
    Gallery,
}

/// What the simulated camera shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feed {
    /// Placeholder "live" stream
    Live,
    /// An uploaded or sample photo in place of the stream
    Still(ImageRef),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraView {
    pub category: Option<Category>,
    pub feed: Feed,
    pub product: Option<ProductId>,
    pub recording: bool,
}

impl CameraView {
    #[must_use]
    pub const fn live(category: Option<Category>) -> Self {
        Self {
            category,
            feed: Feed::Live,
            product: None,
            recording: false,
        }
    }

    #[must_use]
    pub const fn still(category: Option<Category>, image: ImageRef) -> Self {
        Self {
            category,
            feed: Feed::Still(image),
            product: None,
            recording: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Home,
    Camera(CameraView),
    Gallery(Category),
}

impl Screen {
    #[must_use]
    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::Home => ScreenKind::Home,
            Self::Camera(_) => ScreenKind::Camera,
            Self::Gallery(_) => ScreenKind::Gallery,
        }
    }
}

/// User gestures and async completions that change the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    NavigateHome,
    StartCamera,
    OpenGallery(Category),
    /// "Try On" from the gallery: open the camera with the product already worn
    TryOn(ProductId),
    SelectProduct(ProductId),
    /// Completion of a file read or a sample pick
    ImageLoaded(ImageRef),
    ToggleRecording,
    Capture,
    ResetTryOn,
    OpenUpload,
    CloseUpload,
}

/// The whole mutable UI state. Values are never mutated in place by callers;
/// [`Session::reduce`] returns the next state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub screen: Screen,
    pub upload_open: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current_screen(&self) -> ScreenKind {
        self.screen.kind()
    }

    #[must_use]
    pub const fn selected_category(&self) -> Option<Category> {
        match &self.screen {
            Screen::Home => None,
            Screen::Camera(view) => view.category,
            Screen::Gallery(category) => Some(*category),
        }
    }

    #[must_use]
    pub const fn selected_product(&self) -> Option<&ProductId> {
        match &self.screen {
            Screen::Camera(view) => view.product.as_ref(),
            Screen::Home | Screen::Gallery(_) => None,
        }
    }

    #[must_use]
    pub const fn uploaded_image(&self) -> Option<&ImageRef> {
        match &self.screen {
            Screen::Camera(CameraView {
                feed: Feed::Still(image),
                ..
            }) => Some(image),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_streaming(&self) -> bool {
        matches!(
            self.screen,
            Screen::Camera(CameraView {
                feed: Feed::Live,
                ..
            })
        )
    }

    #[must_use]
    pub const fn is_recording(&self) -> bool {
        match &self.screen {
            Screen::Camera(view) => view.recording,
            Screen::Home | Screen::Gallery(_) => false,
        }
    }

    /// Products listed on the current screen: the gallery's category, or the
    /// camera's picker (fallback prefix when the camera has no category).
    #[must_use]
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        match &self.screen {
            Screen::Home => Vec::new(),
            Screen::Camera(view) => catalog.filter(view.category),
            Screen::Gallery(category) => catalog.filter(Some(*category)),
        }
    }

    /// Apply `action` and return the next state. Actions that do not apply to
    /// the current screen return an identical session.
    #[must_use]
    pub fn reduce(&self, catalog: &Catalog, action: Action) -> Self {
        match action {
            Action::NavigateHome => Self::default(),
            Action::StartCamera => self.start_camera(),
            Action::OpenGallery(category) => Self {
                screen: Screen::Gallery(category),
                upload_open: false,
            },
            Action::TryOn(id) => self
                .start_camera()
                .reduce(catalog, Action::SelectProduct(id)),
            Action::SelectProduct(id) => self.select_product(catalog, id),
            Action::ImageLoaded(image) => Self {
                screen: Screen::Camera(CameraView::still(self.selected_category(), image)),
                upload_open: false,
            },
            Action::ToggleRecording => self.map_camera(|view| view.recording = !view.recording),
            Action::ResetTryOn => self.map_camera(|view| {
                view.product = None;
                view.recording = false;
            }),
            Action::Capture => self.clone(),
            Action::OpenUpload => Self {
                upload_open: true,
                ..self.clone()
            },
            Action::CloseUpload => Self {
                upload_open: false,
                ..self.clone()
            },
        }
    }

    fn start_camera(&self) -> Self {
        let view = match &self.screen {
            Screen::Camera(CameraView {
                category,
                feed: Feed::Still(image),
                ..
            }) => CameraView::still(*category, image.clone()),
            _ => CameraView::live(self.selected_category()),
        };
        Self {
            screen: Screen::Camera(view),
            upload_open: false,
        }
    }

    fn select_product(&self, catalog: &Catalog, id: ProductId) -> Self {
        let Screen::Camera(view) = &self.screen else {
            return self.clone();
        };
        let offered = catalog
            .filter(view.category)
            .into_iter()
            .any(|product| product.id == id);
        if !offered {
            return self.clone();
        }
        self.map_camera(|view| view.product = Some(id))
    }

    fn map_camera(&self, f: impl FnOnce(&mut CameraView)) -> Self {
        let mut next = self.clone();
        if let Screen::Camera(view) = &mut next.screen {
            f(view);
        }
        next
    }
}

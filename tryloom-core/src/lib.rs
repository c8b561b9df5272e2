//! TryLoom core
//!
//! Platform-agnostic session logic for the TryLoom virtual try-on demo: the
//! static product catalog, category filtering, image intake rules and the
//! screen reducer. No UI or browser dependencies live here.

pub mod catalog;
pub mod category;
pub mod intake;
pub mod session;

pub use catalog::{
    Catalog, CatalogError, FALLBACK_PRODUCT_COUNT, Product, ProductId, filter_products,
};
pub use category::{Category, CategoryInfo, ParseCategoryError};
pub use intake::{
    ImageOrigin, ImageRef, IntakeError, IntakeOutcome, PickedFile, SAMPLE_IMAGES, SampleImage,
    sample_image, validate_picked,
};
pub use session::{Action, CameraView, Feed, Screen, ScreenKind, Session};

/// Source of the product catalog.
/// Front ends that fetch or embed their data differently provide their own implementation.
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or fails validation.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Catalog compiled into the crate from `data/catalog.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::from_json(catalog::CATALOG_JSON)
    }
}

/// JSON catalog supplied at runtime.
#[derive(Debug, Clone)]
pub struct JsonCatalog<'a>(pub &'a str);

impl CatalogSource for JsonCatalog<'_> {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::from_json(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_matches_reference_catalog() {
        let loaded = StaticCatalog.load_catalog().expect("bundled catalog parses");
        assert_eq!(&loaded, Catalog::reference());
        assert_eq!(
            loaded,
            JsonCatalog(catalog::CATALOG_JSON).load_catalog().unwrap()
        );
    }

    #[test]
    fn json_source_surfaces_errors() {
        assert!(JsonCatalog("not json").load_catalog().is_err());
        let ok = JsonCatalog(r#"{"products":[]}"#).load_catalog().unwrap();
        assert!(ok.is_empty());
    }
}

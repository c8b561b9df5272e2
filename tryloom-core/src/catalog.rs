//! Product catalog and category filtering
use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Number of products shown on the camera screen when no category is selected.
pub const FALLBACK_PRODUCT_COUNT: usize = 6;

pub(crate) const CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single item that can be tried on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Remote URL or data URL for the product photo
    pub image: String,
    /// Display price, already formatted
    pub price: String,
    pub category: Category,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate product id '{0}'")]
    DuplicateId(ProductId),
    #[error("product '{0}' has an empty name")]
    MissingName(ProductId),
}

/// The fixed list of products, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Build a catalog from already-parsed products.
    ///
    /// # Errors
    ///
    /// Returns an error if two products share an id or a product has no name.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(CatalogError::MissingName(product.id.clone()));
            }
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Load a catalog from a JSON document of the form `{ "products": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Self = serde_json::from_str(json)?;
        Self::from_products(raw.products)
    }

    /// Catalog compiled into the binary. Falls back to an empty catalog if the
    /// bundled document is invalid.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(CATALOG_JSON).unwrap_or_default()
    }

    /// Shared reference catalog, parsed once.
    #[must_use]
    pub fn reference() -> &'static Self {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products for `category`, or the fallback prefix when `category` is `None`.
    #[must_use]
    pub fn filter(&self, category: Option<Category>) -> Vec<&Product> {
        filter_products(&self.products, category)
    }
}

/// Stable subsequence of `products` tagged with `category`.
///
/// With no category this returns the first [`FALLBACK_PRODUCT_COUNT`] products
/// unfiltered, which is what the camera screen shows before a category is chosen.
pub fn filter_products<'a, I>(products: I, category: Option<Category>) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let products = products.into_iter();
    match category {
        Some(category) => products
            .filter(|product| product.category == category)
            .collect(),
        None => products.take(FALLBACK_PRODUCT_COUNT).collect(),
    }
}

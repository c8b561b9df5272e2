use crate::components::category_card::category_name;
use crate::components::product_card::ProductCard;
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use tryloom_core::{Category, Product, ProductId};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct GalleryPageProps {
    pub category: Category,
    pub products: Vec<Product>,
    pub on_try_on: Callback<ProductId>,
}

fn collection_title(category: Category) -> String {
    let name = category_name(category);
    let mut args = BTreeMap::new();
    args.insert("name", name.as_str());
    tr("gallery.collection", Some(&args))
}

fn item_count(count: usize) -> String {
    let count = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    tr("gallery.count", Some(&args))
}

#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    let try_on_label = AttrValue::from(t("gallery.try_on"));

    html! {
        <div class="gallery-screen" data-testid="gallery-screen" data-category={props.category.slug()}>
            <header class="gallery-header">
                <span class="gallery-header__icon" aria-hidden="true">{ props.category.info().icon }</span>
                <h1>{ collection_title(props.category) }</h1>
                <p class="gallery-header__count">{ item_count(props.products.len()) }</p>
            </header>
            if props.products.is_empty() {
                <p class="gallery-empty">{ t("gallery.empty") }</p>
            } else {
                <div class="product-grid">
                    { for props.products.iter().map(|product| html! {
                        <ProductCard
                            key={product.id.as_str()}
                            product={product.clone()}
                            action_label={try_on_label.clone()}
                            on_action={props.on_try_on.clone()}
                        />
                    }) }
                </div>
            }
        </div>
    }
}

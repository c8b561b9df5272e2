use crate::paths::image_src;
use tryloom_core::{Product, ProductId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Product,
    pub action_label: AttrValue,
    pub on_action: Callback<ProductId>,
}

#[function_component(ProductCard)]
pub fn product_card(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_action.clone();
        let id = p.product.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let product = &p.product;

    html! {
        <article class="product-card" data-product={product.id.to_string()}>
            <img
                class="product-card__image"
                src={image_src(&product.image)}
                alt={product.name.clone()}
                loading="lazy"
            />
            <div class="product-card__body">
                <h3 class="product-card__name">{ product.name.clone() }</h3>
                <p class="product-card__price">{ product.price.clone() }</p>
                <button type="button" class="btn-primary" onclick={onclick}>
                    { p.action_label.clone() }
                </button>
            </div>
        </article>
    }
}

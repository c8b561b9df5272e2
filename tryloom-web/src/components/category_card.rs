use crate::i18n::t_or;
use tryloom_core::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub category: Category,
    pub on_select: Callback<Category>,
}

/// Localised display name, falling back to the built-in English label.
#[must_use]
pub fn category_name(category: Category) -> String {
    t_or(
        &format!("category.{}.name", category.slug()),
        category.info().name,
    )
}

#[must_use]
pub fn category_description(category: Category) -> String {
    t_or(
        &format!("category.{}.description", category.slug()),
        category.info().description,
    )
}

#[function_component(CategoryCard)]
pub fn category_card(p: &Props) -> Html {
    let category = p.category;
    let onclick = {
        let cb = p.on_select.clone();
        Callback::from(move |_| cb.emit(category))
    };

    html! {
        <button
            type="button"
            class="category-card"
            data-category={category.slug()}
            onclick={onclick}
        >
            <span class="category-card__icon" aria-hidden="true">{ category.info().icon }</span>
            <span class="category-card__name">{ category_name(category) }</span>
            <span class="category-card__description">{ category_description(category) }</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_icon_name_and_description() {
        crate::i18n::set_lang("en");
        let props = Props {
            category: Category::Eyewear,
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CategoryCard>::with_props(props).render());
        assert!(html.contains("data-category=\"eyewear\""));
        assert!(html.contains("👓"));
        assert!(html.contains("Eyewear"));
        assert!(html.contains("prescription frames"));
    }

    #[test]
    fn names_follow_the_active_locale() {
        crate::i18n::set_lang("en");
        assert_eq!(category_name(Category::Clothes), "Clothing");
        crate::i18n::set_lang("es");
        assert_ne!(category_name(Category::Clothes), "Clothing");
        crate::i18n::set_lang("en");
    }
}

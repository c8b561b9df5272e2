use crate::components::category_card::CategoryCard;
use crate::i18n::t;
use tryloom_core::Category;
use yew::prelude::*;

/// Id of the "Upload Photo" button, used to return focus when the modal closes.
pub const UPLOAD_BUTTON_ID: &str = "upload-open-btn";

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub on_start_camera: Callback<()>,
    pub on_upload: Callback<()>,
    pub on_open_gallery: Callback<Category>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let start_camera = {
        let cb = props.on_start_camera.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let upload = {
        let cb = props.on_upload.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="home-screen" data-testid="home-screen">
            <section class="hero">
                <h1 class="hero__title">{ t("home.hero_title") }</h1>
                <p class="hero__subtitle">{ t("home.hero_subtitle") }</p>
                <div class="hero__actions">
                    <button id="start-camera-btn" type="button" class="btn-primary" onclick={start_camera}>
                        <span aria-hidden="true">{"📷 "}</span>
                        { t("home.start_camera") }
                    </button>
                    <button id={UPLOAD_BUTTON_ID} type="button" class="btn-secondary" onclick={upload}>
                        <span aria-hidden="true">{"⬆ "}</span>
                        { t("home.upload_photo") }
                    </button>
                </div>
            </section>
            <section class="categories" aria-labelledby="categories-title">
                <h2 id="categories-title">{ t("home.categories") }</h2>
                <div class="category-grid">
                    { for Category::ALL.iter().map(|category| html! {
                        <CategoryCard
                            key={category.slug()}
                            category={*category}
                            on_select={props.on_open_gallery.clone()}
                        />
                    }) }
                </div>
            </section>
        </div>
    }
}

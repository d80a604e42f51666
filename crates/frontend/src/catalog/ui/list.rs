use contracts::api::status::RequestStatus;
use contracts::domain::product::Product;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::store::use_product_store;
use crate::catalog::ui::display;
use crate::shared::api_utils::{
    product_image_or, LIST_IMAGE_ERROR, LIST_IMAGE_PLACEHOLDER,
};
use crate::shared::components::ui::Button;

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let image_src = product_image_or(product.image.as_deref(), LIST_IMAGE_PLACEHOLDER);
    let strikethrough = product.strikethrough_price();
    let detail_href = format!("/product/{}", product.id);

    view! {
        <div class="product-card">
            <img
                class="product-card__image"
                src=image_src
                alt=display::name_label(&product)
                on:error=move |ev| {
                    let img = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok());
                    if let Some(img) = img {
                        // Swap in the error placeholder once only.
                        if img.src() != LIST_IMAGE_ERROR {
                            img.set_src(LIST_IMAGE_ERROR);
                        }
                    }
                }
            />
            <div class="product-card__body">
                <div class="product-card__name">{display::name_label(&product)}</div>
                <div class="product-card__meta">
                    "Category: " {display::category_label(&product)}
                </div>
                <div class="product-card__meta">"Code: " {display::code_label(&product)}</div>
                <div class="product-card__pricing">
                    <span class="product-card__price">
                        "৳" {display::amount_label(product.price)}
                    </span>
                    {strikethrough.map(|was| view! {
                        <span class="product-card__price--was">
                            "৳" {display::amount_label(Some(was))}
                        </span>
                    })}
                </div>
                <div class="product-card__desc">{display::description_label(&product)}</div>
                <div class="product-card__meta">"Stock: " {display::stock_label(&product)}</div>
            </div>
            <a href=detail_href class="product-card__link">
                <button class="button button--primary button--full">"View Details"</button>
            </a>
        </div>
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let store = use_product_store();

    Effect::new(move |_| store.ensure_loaded());

    view! {
        {move || match store.status.get() {
            RequestStatus::Idle | RequestStatus::Loading => view! {
                <div class="loading">
                    <p class="loading__text">"Loading products..."</p>
                    <div class="loading__spinner"></div>
                </div>
            }
            .into_any(),
            RequestStatus::Failed => view! {
                <div class="error-panel">
                    <p class="error-panel__text">
                        "Error: " {move || store.error.get().unwrap_or_default()}
                    </p>
                    <Button on_click=Callback::new(move |_| store.reload())>
                        "Retry Fetching"
                    </Button>
                </div>
            }
            .into_any(),
            RequestStatus::Succeeded if store.items.with(Vec::is_empty) => view! {
                <div class="page__empty">
                    <h1 class="page__title">"Our Products"</h1>
                    <p>"No products found."</p>
                </div>
            }
            .into_any(),
            RequestStatus::Succeeded => view! {
                <div class="product-list">
                    <h1 class="page__title">"Our Products"</h1>
                    <div class="product-grid">
                        <For
                            each=move || store.items.get()
                            key=|product| product.id
                            children=move |product| view! { <ProductCard product /> }
                        />
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}

use contracts::api::status::RequestStatus;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen::JsCast;

use crate::catalog::store::use_product_store;
use crate::catalog::ui::display;
use crate::shared::api_utils::{
    product_image_or, product_image_url, DETAIL_IMAGE_ERROR, DETAIL_IMAGE_PLACEHOLDER,
};

#[component]
fn ProductView(product: Product) -> impl IntoView {
    let image_src = product_image_or(product.image.as_deref(), DETAIL_IMAGE_PLACEHOLDER);
    let strikethrough = product.strikethrough_price();
    let discount = product.discount_amount.filter(|d| *d > 0.0);
    let gallery = (product.product_images.len() > 1).then(|| {
        let name = display::name_label(&product);
        let thumbnails = product.product_images.clone();
        let thumb = move |img: contracts::domain::product::ProductImage| {
            view! {
                <img
                    class="product-detail__thumb"
                    src=product_image_url(&img.name)
                    alt=format!("{} - view {}", name, img.id)
                />
            }
        };
        view! {
            <div class="product-detail__gallery">
                <For each=move || thumbnails.clone() key=|img| img.id children=thumb />
            </div>
        }
    });

    view! {
        <div class="product-detail">
            <div class="product-detail__media">
                <img
                    class="product-detail__image"
                    src=image_src
                    alt=display::name_label(&product)
                    on:error=move |ev| {
                        let img = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok());
                        if let Some(img) = img {
                            if img.src() != DETAIL_IMAGE_ERROR {
                                img.set_src(DETAIL_IMAGE_ERROR);
                            }
                        }
                    }
                />
                {gallery}
            </div>
            <div class="product-detail__info">
                <h1 class="product-detail__name">{display::name_label(&product)}</h1>
                <div class="product-detail__meta">
                    "Category: " {display::category_label(&product)} " | Code: "
                    {display::code_label(&product)}
                </div>
                <div class="product-detail__pricing">
                    <span class="product-detail__price">
                        "৳" {display::amount_label(product.price)}
                    </span>
                    {strikethrough.map(|was| view! {
                        <span class="product-detail__price--was">
                            "৳" {display::amount_label(Some(was))}
                        </span>
                    })}
                </div>
                {discount.map(|d| view! {
                    <p class="product-detail__savings">
                        "Save ৳" {display::amount_label(Some(d))} "!"
                    </p>
                })}
                <div class="product-detail__stock">
                    "Stock:"
                    {if product.in_stock() {
                        view! {
                            <span class="stock stock--available">
                                {format!(" {} available", product.stock.unwrap_or(0))}
                            </span>
                        }
                        .into_any()
                    } else {
                        view! { <span class="stock stock--out">" Out of Stock"</span> }
                            .into_any()
                    }}
                </div>
                <h2 class="product-detail__section">"Description"</h2>
                <p class="product-detail__desc">{display::description_label(&product)}</p>
                <div class="product-detail__actions">
                    <a href="/" class="button button--secondary">"← Back to List"</a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page__empty">
            <h1 class="page__title">"Product Not Found"</h1>
            <p>"Could not find the product you were looking for."</p>
            <a href="/" class="button button--primary">"Back to Product List"</a>
        </div>
    }
}

#[component]
pub fn ProductDetail() -> impl IntoView {
    let store = use_product_store();
    let params = use_params_map();

    // Deep links land here before the catalog was ever fetched.
    Effect::new(move |_| store.ensure_loaded());

    // A non-numeric id is treated the same as an unknown one.
    let product_id = Memo::new(move |_| {
        params
            .with(|p| p.get("product_id"))
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    view! {
        {move || match store.status.get() {
            RequestStatus::Idle | RequestStatus::Loading => view! {
                <div class="loading">
                    <p class="loading__text">"Loading product details..."</p>
                    <div class="loading__spinner"></div>
                </div>
            }
            .into_any(),
            RequestStatus::Failed => view! {
                <div class="error-panel">
                    <p class="error-panel__text">
                        "Error: " {move || store.error.get().unwrap_or_default()}
                    </p>
                </div>
            }
            .into_any(),
            RequestStatus::Succeeded => {
                match product_id.get().and_then(|id| store.product_by_id(id)) {
                    Some(product) => view! { <ProductView product /> }.into_any(),
                    None => view! { <NotFound /> }.into_any(),
                }
            }
        }}
    }
}

use crate::catalog::store::ProductStore;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One shared product store for every page; the list and detail
    // views read the same fetched collection.
    provide_context(ProductStore::new());

    view! {
        <AppRoutes />
    }
}

use crate::catalog::ui::details::ProductDetail;
use crate::catalog::ui::list::ProductList;
use crate::layout::navbar::Navbar;
use crate::orders::ui::form::PlaceOrder;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="page">
                <Routes fallback=|| view! { <p class="page__empty">"Page not found."</p> }>
                    <Route path=path!("/") view=ProductList />
                    // Reached only via product cards; no nav entry.
                    <Route path=path!("/product/:product_id") view=ProductDetail />
                    <Route path=path!("/place-order") view=PlaceOrder />
                </Routes>
            </main>
        </Router>
    }
}

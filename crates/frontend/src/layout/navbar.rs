use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Class for a nav link, highlighted when its path is the current one.
fn nav_link_class(current_path: &str, link_path: &str) -> &'static str {
    if current_path == link_path {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav class="navbar">
            <a href="/" class=move || nav_link_class(&pathname.get(), "/")>
                "🛍️ Product List"
            </a>
            <a
                href="/place-order"
                class=move || nav_link_class(&pathname.get(), "/place-order")
            >
                "📝 Place Order"
            </a>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_current_path_is_highlighted() {
        assert_eq!(nav_link_class("/", "/"), "navbar__link navbar__link--active");
        assert_eq!(nav_link_class("/place-order", "/"), "navbar__link");
        assert_eq!(
            nav_link_class("/place-order", "/place-order"),
            "navbar__link navbar__link--active"
        );
        // The detail route highlights neither link.
        assert_eq!(nav_link_class("/product/5", "/"), "navbar__link");
        assert_eq!(nav_link_class("/product/5", "/place-order"), "navbar__link");
    }
}

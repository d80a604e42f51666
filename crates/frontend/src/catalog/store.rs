use contracts::api::status::RequestStatus;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::api;

/// Shared product cache provided via context.
///
/// The single data-access layer for the catalog: the list and detail
/// pages both read this store, so the collection is fetched at most
/// once per session unless the user retries. A response landing after
/// another fetch has started simply overwrites the shared state; the
/// last one to resolve wins.
#[derive(Clone, Copy)]
pub struct ProductStore {
    pub items: RwSignal<Vec<Product>>,
    pub status: RwSignal<RequestStatus>,
    pub error: RwSignal<Option<String>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            status: RwSignal::new(RequestStatus::Idle),
            error: RwSignal::new(None),
        }
    }

    /// Kick off the catalog fetch unless one already ran. A resolved
    /// status (succeeded or failed) never refetches on its own.
    pub fn ensure_loaded(&self) {
        if self.status.get_untracked().needs_initial_fetch() {
            self.reload();
        }
    }

    /// Unconditional fetch, used by the retry button.
    pub fn reload(&self) {
        let items = self.items;
        let status = self.status;
        let error = self.error;

        status.set(RequestStatus::Loading);
        error.set(None);

        spawn_local(async move {
            match api::fetch_products().await {
                Ok(products) => {
                    items.set(products);
                    status.set(RequestStatus::Succeeded);
                }
                Err(message) => {
                    log::error!("Catalog fetch failed: {}", message);
                    error.set(Some(message));
                    status.set(RequestStatus::Failed);
                }
            }
        });
    }

    /// Lookup in the already-fetched collection; no single-product
    /// endpoint exists.
    pub fn product_by_id(&self, id: i64) -> Option<Product> {
        self.items
            .with(|items| items.iter().find(|p| p.id == id).cloned())
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_product_store() -> ProductStore {
    use_context::<ProductStore>().expect("ProductStore context not found")
}

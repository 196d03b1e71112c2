//! Service wiring shared by every handler.

use std::sync::Arc;

use catalog_infra::{CatalogService, InMemoryProductStore};
use catalog_products::PageLimits;

/// Catalog service backed by the shared in-memory store.
pub type Catalog = CatalogService<Arc<InMemoryProductStore>>;

/// Application services shared across requests.
#[derive(Debug)]
pub struct AppServices {
    pub catalog: Catalog,
    pub page_limits: PageLimits,
}

impl AppServices {
    pub fn new(page_limits: PageLimits) -> Self {
        Self::with_store(Arc::new(InMemoryProductStore::new()), page_limits)
    }

    pub fn with_store(store: Arc<InMemoryProductStore>, page_limits: PageLimits) -> Self {
        Self {
            catalog: CatalogService::new(store),
            page_limits,
        }
    }
}

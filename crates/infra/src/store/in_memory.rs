use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, RwLock};

use catalog_core::{Entity, ProductId};
use catalog_products::{Product, ProductFields, ProductQuery};

use super::r#trait::{ProductStore, StoreError, StoreResult};

/// In-memory product store.
///
/// Ids come from an atomic counter starting at 1. The map lock is only taken
/// for writing when a record is added or removed; edits to an existing record
/// hold the map's read lock plus that record's own mutex, so writers on
/// different ids proceed in parallel.
#[derive(Debug)]
pub struct InMemoryProductStore {
    next_id: AtomicI64,
    records: RwLock<BTreeMap<ProductId, Mutex<Product>>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            records: RwLock::new(BTreeMap::new()),
        }
    }

    fn mint_id(&self) -> ProductId {
        ProductId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

impl ProductStore for InMemoryProductStore {
    fn insert(&self, fields: ProductFields) -> StoreResult<Product> {
        let product = Product::from_fields(self.mint_id(), fields);

        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.insert(product.id, Mutex::new(product.clone()));

        Ok(product)
    }

    fn get(&self, id: ProductId) -> StoreResult<Product> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let slot = records.get(&id).ok_or(StoreError::NotFound(id))?;
        let product = slot.lock().map_err(|_| poisoned())?;
        Ok(product.clone())
    }

    fn list(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
        let matched = {
            let records = self.records.read().map_err(|_| poisoned())?;
            let mut matched = Vec::new();
            for slot in records.values() {
                let product = slot.lock().map_err(|_| poisoned())?;
                if query.filter.matches(&product) {
                    matched.push(product.clone());
                }
            }
            matched
        };

        Ok(query.sort_and_page(matched))
    }

    fn update(&self, id: ProductId, product: Product) -> StoreResult<Product> {
        if !product.is_keyed_by(id) {
            return Err(StoreError::Backend(format!(
                "record id {} does not match key {id}",
                product.id
            )));
        }

        let records = self.records.read().map_err(|_| poisoned())?;
        let slot = records.get(&id).ok_or(StoreError::NotFound(id))?;
        let mut stored = slot.lock().map_err(|_| poisoned())?;
        *stored = product.clone();

        Ok(product)
    }

    fn remove(&self, id: ProductId) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.len())
    }
}

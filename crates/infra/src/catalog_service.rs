//! Catalog operations (application-level orchestration).
//!
//! Every write follows the same pipeline:
//!
//! ```text
//! caller input
//!   ↓
//! 1. Look up the existing record (replace/patch/delete) → NotFound
//!   ↓
//! 2. Build the candidate (strip client id / merge the patch into a working copy)
//!   ↓
//! 3. Validate the resulting record → Validation
//!   ↓
//! 4. Persist through the store
//! ```
//!
//! Nothing reaches the store before step 3 succeeds, so a rejected write
//! leaves storage untouched and a rejected create never consumes an id.

use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use catalog_core::{DomainError, DomainResult, ProductId};
use catalog_products::{Product, ProductDraft, ProductPatch, ProductQuery};

use crate::store::ProductStore;

/// Catalog service over any [`ProductStore`].
#[derive(Debug)]
pub struct CatalogService<S> {
    store: S,
}

impl<S> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

fn rejected(err: &DomainError) {
    warn!(error = %err, "product write rejected");
}

impl<S> CatalogService<S>
where
    S: ProductStore,
{
    /// Filtered, sorted, paged listing. Read-only.
    #[instrument(skip(self))]
    pub fn list_products(&self, query: &ProductQuery) -> DomainResult<Vec<Product>> {
        let products = self.store.list(query)?;
        debug!(count = products.len(), "listed products");
        Ok(products)
    }

    #[instrument(skip(self))]
    pub fn get_product(&self, id: ProductId) -> DomainResult<Product> {
        Ok(self.store.get(id)?)
    }

    /// Create a product. Any id on the draft is discarded.
    #[instrument(skip(self, draft))]
    pub fn add_product(&self, draft: ProductDraft) -> DomainResult<Product> {
        let fields = draft.without_id().into_fields().inspect_err(rejected)?;
        let product = self.store.insert(fields)?;
        info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Overwrite every field of an existing product. The id comes from the lookup.
    #[instrument(skip(self, draft))]
    pub fn replace_product(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        let existing = self.store.get(id)?;
        let fields = draft.without_id().into_fields().inspect_err(rejected)?;
        let product = self.store.update(id, Product::from_fields(existing.id, fields))?;
        info!(product_id = %product.id, "product replaced");
        Ok(product)
    }

    /// Merge a typed patch into an existing product and re-validate the result.
    #[instrument(skip(self, patch))]
    pub fn patch_product(&self, id: ProductId, patch: &ProductPatch) -> DomainResult<Product> {
        let existing = self.store.get(id)?;
        self.commit_patch(existing, patch)
    }

    /// Same as [`Self::patch_product`], starting from a JSON object of field updates.
    ///
    /// A missing id is reported before any problem with the field names.
    #[instrument(skip(self, fields))]
    pub fn patch_product_fields(
        &self,
        id: ProductId,
        fields: &Map<String, Value>,
    ) -> DomainResult<Product> {
        let existing = self.store.get(id)?;
        let patch = ProductPatch::from_json(fields).inspect_err(rejected)?;
        self.commit_patch(existing, &patch)
    }

    #[instrument(skip(self))]
    pub fn delete_product(&self, id: ProductId) -> DomainResult<()> {
        self.store.remove(id)?;
        info!(product_id = %id, "product deleted");
        Ok(())
    }

    /// Number of stored products.
    pub fn count(&self) -> DomainResult<usize> {
        Ok(self.store.count()?)
    }

    fn commit_patch(&self, existing: Product, patch: &ProductPatch) -> DomainResult<Product> {
        let mut working = existing.to_draft();
        patch.apply_to(&mut working);

        let fields = working.without_id().into_fields().inspect_err(rejected)?;
        let product = self.store.update(existing.id, Product::from_fields(existing.id, fields))?;
        info!(
            product_id = %product.id,
            fields = patch.updates().len(),
            "product patched"
        );
        Ok(product)
    }
}

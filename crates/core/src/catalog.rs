//! Product catalog with the featured-item delete protection.

use std::path::Path;

use crate::error::{Result, StoreError};
use crate::store::RecordStore;
use crate::types::{NewProduct, Product};

/// Number of leading catalog entries that are featured on the homepage.
///
/// Featured status is purely positional: the first entries in file order.
/// There is no flag on the record, so the set can drift if the file is ever
/// edited outside this API. That is an accepted limitation.
pub const FEATURED_COUNT: usize = 3;

/// Product store. Same access contract as [`RecordStore`], plus the rule
/// that the first [`FEATURED_COUNT`] products cannot be deleted.
pub struct Catalog {
    store: RecordStore<Product>,
}

impl Catalog {
    /// Create the catalog backed by `<data_dir>/products.json`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: RecordStore::new(data_dir, "products"),
        }
    }

    /// Load all products in catalog order.
    ///
    /// # Errors
    ///
    /// Fails if the products file cannot be read or parsed.
    pub async fn load(&self) -> Result<Vec<Product>> {
        self.store.load().await
    }

    /// Find one product by id.
    ///
    /// # Errors
    ///
    /// Fails if the products file cannot be read or parsed.
    pub async fn find(&self, id: &str) -> Result<Option<Product>> {
        self.store.find(id).await
    }

    /// Append a new product at the end of the catalog. Creation never
    /// re-orders, so existing featured positions are stable.
    ///
    /// # Errors
    ///
    /// Fails if the products file cannot be read or written.
    pub async fn append(&self, draft: NewProduct) -> Result<Product> {
        self.store.append(draft).await
    }

    /// Delete a product unless it currently sits in a featured position.
    ///
    /// The position check runs against the freshly loaded array, under the
    /// same lock as the write.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FeaturedProduct` (and writes nothing) when the
    /// id is at position 0..`FEATURED_COUNT`. Deleting an absent id is a
    /// no-op success.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store
            .delete_guarded(id, |products| {
                let position = products.iter().position(|p| p.id == id);
                match position {
                    Some(index) if index < FEATURED_COUNT => {
                        Err(StoreError::FeaturedProduct(id.to_string()))
                    }
                    _ => Ok(()),
                }
            })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft(title: &str) -> NewProduct {
        NewProduct {
            title: title.to_string(),
            description: format!("{title} description"),
            price: "100".to_string(),
            images: vec![format!("/uploads/{title}.jpg")],
        }
    }

    async fn seeded(catalog: &Catalog, count: usize) -> Vec<Product> {
        let mut products = Vec::new();
        for i in 0..count {
            products.push(catalog.append(draft(&format!("Pump {i}"))).await.unwrap());
        }
        products
    }

    #[tokio::test]
    async fn delete_of_featured_positions_is_forbidden() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new(dir.path());
        let products = seeded(&catalog, 4).await;

        for featured in &products[..FEATURED_COUNT] {
            let result = catalog.delete(&featured.id).await;
            assert!(matches!(result, Err(StoreError::FeaturedProduct(_))));
        }

        // Nothing was written.
        assert_eq!(catalog.load().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn delete_past_featured_positions_succeeds() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new(dir.path());
        let products = seeded(&catalog, 4).await;

        catalog.delete(&products[3].id).await.unwrap();

        let remaining = catalog.load().await.unwrap();
        assert_eq!(remaining.len(), 3);
        assert!(remaining.iter().all(|p| p.id != products[3].id));
    }

    #[tokio::test]
    async fn sole_product_is_featured_and_undeletable() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new(dir.path());

        let product = catalog.append(draft("Pump A")).await.unwrap();

        let result = catalog.delete(&product.id).await;
        assert!(matches!(result, Err(StoreError::FeaturedProduct(_))));
        assert_eq!(catalog.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new(dir.path());
        seeded(&catalog, 4).await;

        catalog.delete("no-such-id").await.unwrap();
        assert_eq!(catalog.load().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn append_keeps_catalog_order() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new(dir.path());
        seeded(&catalog, 3).await;

        let products = catalog.load().await.unwrap();
        let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Pump 0", "Pump 1", "Pump 2"]);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Product collection state container.
//!
//! The view model owns the authoritative product list and publishes every
//! refreshed snapshot on a `tokio::sync::watch` channel. Mutations go through
//! the catalog port and are followed by a re-fetch, so observers only ever
//! see what the backend reports.

use crate::application::port::ProductCatalog;
use crate::domain::{NewProduct, Product, ProductId};
use crate::error::Result;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared handle on the product collection.
#[derive(Clone)]
pub struct ProductListViewModel {
    catalog: Arc<dyn ProductCatalog>,
    products: Arc<watch::Sender<Vec<Product>>>,
}

impl fmt::Debug for ProductListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductListViewModel")
            .field("products", &self.products.borrow().len())
            .finish()
    }
}

impl ProductListViewModel {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        let (products, _) = watch::channel(Vec::new());
        Self {
            catalog,
            products: Arc::new(products),
        }
    }

    /// Returns a feed that yields every snapshot published from now on.
    #[must_use]
    pub fn feed(&self) -> ProductFeed {
        ProductFeed {
            receiver: self.products.subscribe(),
        }
    }

    /// Returns the last published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    /// Fetches the catalog and publishes the result.
    ///
    /// # Errors
    ///
    /// Propagates the catalog failure; the previous snapshot stays published.
    pub async fn get_products(&self) -> Result<()> {
        let products = self.catalog.fetch_products().await?;
        log::debug!("publishing {} products", products.len());
        self.products.send_replace(products);
        Ok(())
    }

    /// Creates a product, then refreshes the collection.
    ///
    /// # Errors
    ///
    /// Propagates the catalog failure.
    pub async fn add_product(&self, product: NewProduct) -> Result<()> {
        log::info!("adding product {:?}", product.name);
        self.catalog.create_product(product).await?;
        self.get_products().await
    }

    /// Renames a product, then refreshes the collection.
    ///
    /// # Errors
    ///
    /// Propagates the catalog failure.
    pub async fn update_product(&self, id: ProductId, new_name: String) -> Result<()> {
        log::info!("renaming product {} to {:?}", id, new_name);
        self.catalog.rename_product(id, new_name).await?;
        self.get_products().await
    }

    /// Deletes a product, then refreshes the collection.
    ///
    /// # Errors
    ///
    /// Propagates the catalog failure.
    pub async fn delete_product(&self, id: ProductId) -> Result<()> {
        log::info!("deleting product {}", id);
        self.catalog.delete_product(id).await?;
        self.get_products().await
    }
}

/// Subscription to the snapshots published by a [`ProductListViewModel`].
///
/// Each call to [`ProductFeed::next`] consumes the feed and hands it back with
/// the snapshot, so the caller can re-arm the wait.
#[derive(Debug, Clone)]
pub struct ProductFeed {
    receiver: watch::Receiver<Vec<Product>>,
}

impl ProductFeed {
    /// Waits for the next snapshot. Returns `None` once the view model is gone.
    pub async fn next(mut self) -> Option<(Vec<Product>, ProductFeed)> {
        self.receiver.changed().await.ok()?;
        let snapshot = self.receiver.borrow_and_update().clone();
        Some((snapshot, self))
    }
}

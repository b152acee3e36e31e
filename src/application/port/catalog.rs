// SPDX-License-Identifier: MPL-2.0
//! Product catalog port definition.

use crate::domain::{NewProduct, Product, ProductId};
use crate::error::Result;
use async_trait::async_trait;

/// Port for the remote product catalog.
///
/// Mutations do not return the updated collection; callers re-fetch.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns every product currently listed.
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Creates a product, uploading its photo.
    async fn create_product(&self, product: NewProduct) -> Result<()>;

    /// Replaces the name of an existing product.
    async fn rename_product(&self, id: ProductId, name: String) -> Result<()>;

    /// Removes a product.
    async fn delete_product(&self, id: ProductId) -> Result<()>;
}

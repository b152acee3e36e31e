// SPDX-License-Identifier: MPL-2.0
//! Process-local backend.
//!
//! Keeps the catalog in memory and accepts either one configured account or,
//! by default, any non-empty credentials. Used by `--offline` and by tests.

use crate::application::port::{Authenticator, ProductCatalog};
use crate::domain::{NewProduct, Product, ProductId};
use crate::error::{BackendError, Error, Result};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Catalog {
    products: Vec<Product>,
    next_id: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    catalog: Mutex<Catalog>,
    account: Option<(String, String)>,
}

impl InMemoryBackend {
    /// Creates an empty catalog accepting any non-empty credentials.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-filled with a few products.
    #[must_use]
    pub fn with_sample_catalog() -> Self {
        let backend = Self::new();
        {
            let mut catalog = backend.lock();
            for (name, description, price) in [
                ("Ultraboost Light", "Running shoe", 190),
                ("Samba OG", "Indoor classic", 100),
                ("Gazelle", "Suede trainer", 110),
            ] {
                catalog.next_id += 1;
                let id = ProductId::new(catalog.next_id);
                catalog.products.push(Product {
                    id,
                    name: name.to_string(),
                    description: description.to_string(),
                    price,
                    image: String::new(),
                });
            }
        }
        backend
    }

    /// Restricts logins to a single account.
    #[must_use]
    pub fn with_account(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.account = Some((email.into(), password.into()));
        self
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        // A panic while holding the lock leaves the catalog usable.
        self.catalog
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductCatalog for InMemoryBackend {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.lock().products.clone())
    }

    async fn create_product(&self, product: NewProduct) -> Result<()> {
        let mut catalog = self.lock();
        catalog.next_id += 1;
        let id = ProductId::new(catalog.next_id);
        catalog.products.push(Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image_file.to_string_lossy().into_owned(),
        });
        Ok(())
    }

    async fn rename_product(&self, id: ProductId, name: String) -> Result<()> {
        let mut catalog = self.lock();
        let product = catalog
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::Backend(BackendError::NotFound))?;
        product.name = name;
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        let mut catalog = self.lock();
        let before = catalog.products.len();
        catalog.products.retain(|p| p.id != id);
        if catalog.products.len() == before {
            return Err(BackendError::NotFound.into());
        }
        Ok(())
    }
}

#[async_trait]
impl Authenticator for InMemoryBackend {
    async fn login(&self, email: &str, password: &str) -> Result<bool> {
        Ok(match &self.account {
            Some((expected_email, expected_password)) => {
                email == expected_email && password == expected_password
            }
            None => !email.is_empty() && !password.is_empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn created_products_get_increasing_ids() {
        let backend = InMemoryBackend::new();
        for name in ["A", "B"] {
            backend
                .create_product(NewProduct {
                    name: name.into(),
                    description: "d".into(),
                    price: 1,
                    image_file: PathBuf::from("/tmp/a.jpg"),
                })
                .await
                .unwrap();
        }

        let products = backend.fetch_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert!(products[0].id < products[1].id);
        assert_eq!(products[0].image, "/tmp/a.jpg");
    }

    #[tokio::test]
    async fn renaming_unknown_product_is_not_found() {
        let backend = InMemoryBackend::new();
        let err = backend
            .rename_product(ProductId::new(42), "x".into())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Backend(BackendError::NotFound)));
    }

    #[tokio::test]
    async fn default_login_accepts_any_non_empty_credentials() {
        let backend = InMemoryBackend::new();
        assert!(backend.login("a@b.c", "pw").await.unwrap());
        assert!(!backend.login("", "pw").await.unwrap());
        assert!(!backend.login("a@b.c", "").await.unwrap());
    }

    #[tokio::test]
    async fn configured_account_is_enforced() {
        let backend = InMemoryBackend::new().with_account("owner@shop.test", "hunter2");
        assert!(backend.login("owner@shop.test", "hunter2").await.unwrap());
        assert!(!backend.login("owner@shop.test", "wrong").await.unwrap());
    }
}

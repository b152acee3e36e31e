// SPDX-License-Identifier: MPL-2.0
//! REST adapter for the storefront backend.
//!
//! # Endpoints
//!
//! | Operation        | Request                                   |
//! |------------------|-------------------------------------------|
//! | list products    | `GET {base}/products`                     |
//! | create product   | `POST {base}/products` (multipart)        |
//! | rename product   | `PUT {base}/products/{id}` `{"name"}`     |
//! | delete product   | `DELETE {base}/products/{id}`             |
//! | login            | `POST {base}/auth/login` `{"email","password"}` |
//!
//! A bearer token returned by the login endpoint is attached to every later
//! request.

use crate::application::port::{Authenticator, ProductCatalog};
use crate::domain::{NewProduct, Product, ProductId};
use crate::error::{BackendError, Error, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Wire representation of a product.
#[derive(Debug, Deserialize)]
struct ProductDto {
    id: i64,
    name: String,
    #[serde(default, alias = "descripcion")]
    description: String,
    #[serde(alias = "precio")]
    price: i64,
    #[serde(default, alias = "imageUrl", alias = "image_url")]
    image: String,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: ProductId::new(dto.id),
            name: dto.name,
            description: dto.description,
            price: dto.price,
            image: dto.image,
        }
    }
}

#[derive(Debug, Serialize)]
struct RenameRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    token: Mutex<Option<String>>,
}

impl HttpBackend {
    /// Builds a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Mutex::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = self.authorized(request).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            log::warn!("backend answered {status}");
            Err(BackendError::from_status(status.as_u16()).into())
        }
    }
}

#[async_trait]
impl ProductCatalog for HttpBackend {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let response = self.send(self.client.get(self.url("products"))).await?;
        let products: Vec<ProductDto> = response.json().await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn create_product(&self, product: NewProduct) -> Result<()> {
        let bytes = tokio::fs::read(&product.image_file).await?;
        let file_name = product
            .image_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.jpg".to_string());
        let image = Part::bytes(bytes).file_name(file_name).mime_str("image/jpeg")?;
        let form = Form::new()
            .text("name", product.name)
            .text("description", product.description)
            .text("price", product.price.to_string())
            .part("image", image);

        self.send(self.client.post(self.url("products")).multipart(form))
            .await?;
        Ok(())
    }

    async fn rename_product(&self, id: ProductId, name: String) -> Result<()> {
        let request = self
            .client
            .put(self.url(&format!("products/{id}")))
            .json(&RenameRequest { name: &name });
        self.send(request).await?;
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        self.send(self.client.delete(self.url(&format!("products/{id}"))))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Authenticator for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<bool> {
        let response = self
            .client
            .post(self.url("auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
            status if status.is_success() => {
                let body: LoginResponse = response.json().await.unwrap_or_default();
                *self.token.lock().unwrap_or_else(PoisonError::into_inner) = body.token;
                Ok(true)
            }
            status => Err(BackendError::from_status(status.as_u16()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let backend = HttpBackend::new("https://shop.test/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(backend.url("products"), "https://shop.test/api/products");
    }

    #[test]
    fn product_dto_accepts_alternate_field_names() {
        let dto: ProductDto = toml::from_str(
            r#"
            id = 3
            name = "Samba"
            descripcion = "Indoor"
            precio = 100
            imageUrl = "https://cdn.shop.test/samba.jpg"
            "#,
        )
        .unwrap();
        let product = Product::from(dto);
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.description, "Indoor");
        assert_eq!(product.price, 100);
        assert_eq!(product.image, "https://cdn.shop.test/samba.jpg");
    }

    #[test]
    fn product_dto_defaults_optional_fields() {
        let dto: ProductDto = toml::from_str("id = 1\nname = \"A\"\nprice = 5").unwrap();
        let product = Product::from(dto);
        assert!(product.description.is_empty());
        assert!(product.image.is_empty());
    }
}

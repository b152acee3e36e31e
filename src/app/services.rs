// SPDX-License-Identifier: MPL-2.0
//! Wiring of the view models and adapters selected at startup.

use super::config::{BackendKind, Config};
use super::Flags;
use crate::application::port::{Authenticator, Camera, PermissionGateway, ProductCatalog};
use crate::application::view_model::{LoginViewModel, ProductListViewModel};
use crate::infrastructure::{DesktopPermissions, FilePickerCamera, HttpBackend, InMemoryBackend};
use std::sync::Arc;

/// Collaborators shared with the tasks spawned by `App::update`.
#[derive(Clone)]
pub struct Services {
    pub login: LoginViewModel,
    pub products: ProductListViewModel,
    pub camera: Arc<dyn Camera>,
    pub permissions: Arc<dyn PermissionGateway>,
    /// Client for product photos; `None` when it could not be built.
    pub images: Option<reqwest::Client>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}

/// Picks the backend kind: `--offline` wins, then `--backend-url`, then the
/// config file.
#[must_use]
pub fn backend_kind(flags: &Flags, config: &Config) -> BackendKind {
    if flags.offline {
        BackendKind::Memory
    } else if flags.backend_url.is_some() {
        BackendKind::Http
    } else {
        config.backend.kind
    }
}

impl Services {
    /// Builds the collaborators for `config`, adjusted by the CLI flags.
    ///
    /// Returns a warning key when the HTTP backend could not be built and the
    /// in-memory one is used instead.
    pub fn build(flags: &Flags, config: &Config, camera_title: String) -> (Self, Option<&'static str>) {
        let mut warning = None;

        let (catalog, authenticator): (Arc<dyn ProductCatalog>, Arc<dyn Authenticator>) =
            match backend_kind(flags, config) {
                BackendKind::Http => {
                    let base_url = flags
                        .backend_url
                        .as_deref()
                        .unwrap_or(&config.backend.base_url);
                    match HttpBackend::new(base_url, config.backend.timeout()) {
                        Ok(backend) => {
                            log::info!("using HTTP backend at {base_url}");
                            let backend = Arc::new(backend);
                            (backend.clone(), backend)
                        }
                        Err(err) => {
                            log::warn!("HTTP backend unavailable, staying offline: {err}");
                            warning = Some("notification-backend-fallback");
                            offline()
                        }
                    }
                }
                BackendKind::Memory => {
                    log::info!("using in-memory backend");
                    offline()
                }
            };

        let images = match reqwest::Client::builder()
            .timeout(config.backend.timeout())
            .build()
        {
            Ok(client) => Some(client),
            Err(err) => {
                log::warn!("remote product photos disabled: {err}");
                None
            }
        };

        let services = Self {
            login: LoginViewModel::new(authenticator),
            products: ProductListViewModel::new(catalog),
            camera: Arc::new(FilePickerCamera::new(camera_title)),
            permissions: Arc::new(DesktopPermissions::granting()),
            images,
        };
        (services, warning)
    }
}

fn offline() -> (Arc<dyn ProductCatalog>, Arc<dyn Authenticator>) {
    let backend = Arc::new(InMemoryBackend::with_sample_catalog());
    (backend.clone(), backend)
}

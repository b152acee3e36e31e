// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::view_model::ProductFeed;
use crate::domain::Product;
use crate::error::Error;
use crate::ui::login;
use crate::ui::notifications;
use crate::ui::product_list;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    ProductList(product_list::Message),
    Notification(notifications::NotificationMessage),
    /// The login view model answered.
    LoginFinished(bool),
    /// A product snapshot was published, with the feed to wait on next.
    /// `None` once the view model is gone.
    ProductsPublished(Option<(Vec<Product>, ProductFeed)>),
    /// A fetch, add, rename or delete completed.
    CatalogOperationFinished {
        result: Result<(), Error>,
        /// Toast shown on success.
        success_key: Option<&'static str>,
    },
    ImageDownloaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    EscapePressed,
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (pictures, log file).
    /// Takes precedence over `STOREFRONT_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STOREFRONT_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Uses the HTTP backend at this URL whatever the config says.
    pub backend_url: Option<String>,
    /// Uses the in-memory backend whatever the config says.
    pub offline: bool,
}

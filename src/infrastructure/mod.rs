// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Storefront REST backend via `reqwest` (implements
//!   [`ProductCatalog`] and [`Authenticator`])
//! - [`memory`]: Process-local backend for offline use and tests
//! - [`desktop`]: Camera and permission adapters for desktop hosts
//!
//! [`ProductCatalog`]: crate::application::port::ProductCatalog
//! [`Authenticator`]: crate::application::port::Authenticator

pub mod desktop;
pub mod http;
pub mod memory;

pub use desktop::{DesktopPermissions, FilePickerCamera};
pub use http::HttpBackend;
pub use memory::InMemoryBackend;

// SPDX-License-Identifier: MPL-2.0
//! `storefront` is a catalog management client built with the Iced GUI framework.
//!
//! Users sign in, browse the products as a grid or a list, and add, rename or
//! delete products. New products carry a photo taken through the camera port.
//! Business state lives in view models over injected ports, so every screen
//! can be driven against the in-memory backend.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

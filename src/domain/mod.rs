// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It depends on `std` only so the rules stay testable without the GUI or
//! the network stack.
//!
//! # Modules
//!
//! - [`product`]: Catalog entities ([`Product`](product::Product),
//!   [`ProductId`](product::ProductId), [`NewProduct`](product::NewProduct))
//!   and the validation rules of the product forms
//! - [`catalog`]: Presentation value objects ([`GridColumns`](catalog::GridColumns))

pub mod catalog;
pub mod product;

pub use product::{NewProduct, Product, ProductId};

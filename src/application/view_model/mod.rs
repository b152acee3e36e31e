// SPDX-License-Identifier: MPL-2.0
//! View models: business state held outside the widget tree.
//!
//! Screens never await a view model directly. They fire an operation inside a
//! `Task` and react to the message it produces, or to the next snapshot
//! published on a [`ProductFeed`].

pub mod login;
pub mod product_list;

pub use login::LoginViewModel;
pub use product_list::{ProductFeed, ProductListViewModel};

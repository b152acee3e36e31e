// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`login`] - Credential form
//! - [`product_list`] - Catalog with its toolbar and dialog slot
//!
//! # Components
//!
//! - [`product_grid`] - Product cards as a grid or a list
//! - [`add_product`] - Add-product dialog with photo capture
//! - [`edit_product`] - Rename dialog
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod add_product;
pub mod design_tokens;
pub mod edit_product;
pub mod login;
pub mod notifications;
pub mod product_grid;
pub mod product_list;
pub mod styles;
pub mod theming;

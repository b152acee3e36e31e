// SPDX-License-Identifier: MPL-2.0
//! Application layer - View models and collaborator seams.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`view_model`]: State containers the screens observe and drive
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer holds view models and never talks to adapters directly
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront::application::view_model::ProductListViewModel;
//! use storefront::infrastructure::memory::InMemoryBackend;
//!
//! let backend = Arc::new(InMemoryBackend::with_sample_catalog());
//! let view_model = ProductListViewModel::new(backend);
//! let feed = view_model.feed();
//! ```

pub mod port;
pub mod view_model;

// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so view models and screens can be
//! exercised against in-memory fakes.
//!
//! # Available Ports
//!
//! - [`catalog`]: Product listing and mutation
//! - [`session`]: Credential checking
//! - [`camera`]: Photo capture into a provisioned file
//! - [`permission`]: Runtime permission requests
//!
//! # Design Notes
//!
//! - All traits are `Send + Sync` so adapters can be shared behind `Arc`
//! - Methods are `async` (via `async_trait`); callers wrap them in Iced `Task`s
//! - Outcomes the UI only reports as success/failure are plain `bool`s

pub mod camera;
pub mod catalog;
pub mod permission;
pub mod session;

pub use camera::{Camera, CaptureTarget};
pub use catalog::ProductCatalog;
pub use permission::{Permission, PermissionGateway, PermissionGrants};
pub use session::Authenticator;

// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::domain::catalog::grid_bounds;

// ==========================================================================
// Backend
// ==========================================================================

/// Base URL of the storefront REST backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Per-request timeout of the HTTP backend (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Catalog
// ==========================================================================

pub const DEFAULT_GRID_COLUMNS: u8 = grid_bounds::DEFAULT;

// ==========================================================================
// Capture
// ==========================================================================

/// Platform API level assumed when choosing the media-read permission.
pub const DEFAULT_PLATFORM_API_LEVEL: u32 = 34;

// ==========================================================================
// Logging
// ==========================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";

const _: () = {
    assert!(MIN_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    assert!(DEFAULT_GRID_COLUMNS >= grid_bounds::MIN);
    assert!(DEFAULT_GRID_COLUMNS <= grid_bounds::MAX);
};

// SPDX-License-Identifier: MPL-2.0
//! Camera port definition.
//!
//! Capture follows a capture-to-URI contract: the caller provisions the
//! destination file, hands the camera a shareable reference to it, and the
//! camera answers with a single success flag.

use async_trait::async_trait;
use std::path::PathBuf;

/// Destination of one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget {
    /// File the photo must be written to.
    pub file: PathBuf,
    /// Shareable reference to `file` handed to the camera.
    pub uri: String,
}

/// Port for the device camera.
#[async_trait]
pub trait Camera: Send + Sync {
    /// Takes a picture into `target`. Returns `true` when the file was written.
    async fn capture(&self, target: &CaptureTarget) -> bool;
}

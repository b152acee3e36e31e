// SPDX-License-Identifier: MPL-2.0
//! Camera and permission adapters for desktop hosts.
//!
//! Desktop systems have no runtime permission prompt and rarely a camera the
//! application may drive directly. [`DesktopPermissions`] grants what is asked
//! and, when configured to, denies it so the denial path can be exercised.
//! [`FilePickerCamera`] lets the user pick an existing photo, which is
//! re-encoded as JPEG into the provisioned capture file.

use crate::application::port::{Camera, CaptureTarget, Permission, PermissionGateway, PermissionGrants};
use async_trait::async_trait;
use std::path::Path;

/// JPEG quality used when re-encoding picked photos.
const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy)]
pub struct DesktopPermissions {
    grant: bool,
}

impl DesktopPermissions {
    /// Grants every request.
    #[must_use]
    pub fn granting() -> Self {
        Self { grant: true }
    }

    /// Denies every request.
    #[must_use]
    pub fn denying() -> Self {
        Self { grant: false }
    }
}

impl Default for DesktopPermissions {
    fn default() -> Self {
        Self::granting()
    }
}

#[async_trait]
impl PermissionGateway for DesktopPermissions {
    async fn request(&self, permissions: &[Permission]) -> PermissionGrants {
        log::debug!("permission request {permissions:?} -> {}", self.grant);
        permissions.iter().map(|p| (*p, self.grant)).collect()
    }
}

/// Photo "capture" through the native file dialog.
#[derive(Debug, Clone)]
pub struct FilePickerCamera {
    dialog_title: String,
}

impl FilePickerCamera {
    pub fn new(dialog_title: impl Into<String>) -> Self {
        Self {
            dialog_title: dialog_title.into(),
        }
    }
}

#[async_trait]
impl Camera for FilePickerCamera {
    async fn capture(&self, target: &CaptureTarget) -> bool {
        log::info!("capturing into {}", target.uri);
        let Some(handle) = rfd::AsyncFileDialog::new()
            .set_title(&self.dialog_title)
            .add_filter("image", &["jpg", "jpeg", "png", "webp"])
            .pick_file()
            .await
        else {
            log::info!("capture cancelled");
            return false;
        };

        let bytes = handle.read().await;
        let destination = target.file.clone();
        let written =
            tokio::task::spawn_blocking(move || write_jpeg(&bytes, &destination)).await;

        match written {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                log::warn!("capture failed: {err}");
                false
            }
            Err(err) => {
                log::warn!("capture task failed: {err}");
                false
            }
        }
    }
}

/// Decodes `bytes` and writes them to `destination` as JPEG.
fn write_jpeg(bytes: &[u8], destination: &Path) -> image_rs::ImageResult<()> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let file = std::fs::File::create(destination)?;
    let mut writer = std::io::BufWriter::new(file);
    let encoder =
        image_rs::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    decoded.to_rgb8().write_with_encoder(encoder)
}

// SPDX-License-Identifier: MPL-2.0
//! Capture destination provisioning.
//!
//! Each capture gets a fresh `IMG_<yyyyMMdd_HHmmss>.jpg` path in the picture
//! directory and a `file://` reference the camera writes through. The file
//! itself is left for the camera to create.

use crate::application::port::CaptureTarget;
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the file name of a capture taken at `now`.
#[must_use]
pub fn capture_file_name(now: DateTime<Local>) -> String {
    now.format("IMG_%Y%m%d_%H%M%S.jpg").to_string()
}

/// Returns the path of a capture taken at `now` inside `pictures_dir`,
/// creating the directory when missing.
///
/// # Errors
///
/// Returns [`Error::Io`] when the directory cannot be created.
pub fn create_image_file(pictures_dir: &Path, now: DateTime<Local>) -> Result<PathBuf> {
    if !pictures_dir.exists() {
        fs::create_dir_all(pictures_dir)?;
    }
    Ok(pictures_dir.join(capture_file_name(now)))
}

/// Returns a shareable `file://` reference to `path`.
///
/// # Errors
///
/// Returns [`Error::Capture`] when `path` is not absolute.
pub fn share_uri(path: &Path) -> Result<String> {
    reqwest::Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| Error::Capture(format!("not an absolute path: {}", path.display())))
}

/// Provisions the destination of a capture taken now.
///
/// # Errors
///
/// Propagates [`create_image_file`] and [`share_uri`] failures.
pub fn provision(pictures_dir: &Path) -> Result<CaptureTarget> {
    let file = create_image_file(pictures_dir, Local::now())?;
    let uri = share_uri(&file)?;
    log::debug!("capture target {uri}");
    Ok(CaptureTarget { file, uri })
}

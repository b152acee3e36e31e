// SPDX-License-Identifier: MPL-2.0
//! Product photos: capture destinations and the remote image cache.

pub mod capture;
pub mod image_cache;

pub use capture::{capture_file_name, create_image_file, provision, share_uri};
pub use image_cache::{is_remote, RemoteImageCache};

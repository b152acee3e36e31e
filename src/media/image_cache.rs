// SPDX-License-Identifier: MPL-2.0
//! Cache of product photos downloaded from the backend.
//!
//! - **LRU eviction** bounded by entry count and encoded byte size
//! - **URL-keyed**
//! - **In-flight tracking** so a URL is requested once while pending
//! - **Oversized photos** are remembered and never requested again
//!
//! Local file paths bypass the cache and load through
//! [`Handle::from_path`].

use crate::error::{BackendError, Result};
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Maximum number of cached photos.
pub const DEFAULT_MAX_IMAGES: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => unreachable!(),
};

/// Maximum total encoded size of cached photos (32 MB).
pub const DEFAULT_MAX_BYTES: usize = 32 * 1024 * 1024;

/// Returns whether `image` names a remote resource.
#[must_use]
pub fn is_remote(image: &str) -> bool {
    image.starts_with("http://") || image.starts_with("https://")
}

#[derive(Debug, Clone)]
struct CacheEntry {
    handle: Handle,
    size_bytes: usize,
}

pub struct RemoteImageCache {
    cache: LruCache<String, CacheEntry>,
    pending: HashSet<String>,
    oversized: HashSet<String>,
    max_bytes: usize,
    current_bytes: usize,
}

impl std::fmt::Debug for RemoteImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteImageCache")
            .field("entries", &self.cache.len())
            .field("pending", &self.pending.len())
            .field("oversized", &self.oversized.len())
            .field("current_bytes", &self.current_bytes)
            .finish()
    }
}

impl Default for RemoteImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGES, DEFAULT_MAX_BYTES)
    }
}

impl RemoteImageCache {
    #[must_use]
    pub fn new(max_images: NonZeroUsize, max_bytes: usize) -> Self {
        Self {
            cache: LruCache::new(max_images),
            pending: HashSet::new(),
            oversized: HashSet::new(),
            max_bytes,
            current_bytes: 0,
        }
    }

    /// Returns the cached handle without touching the LRU order.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Handle> {
        self.cache.peek(url).map(|entry| &entry.handle)
    }

    /// Returns the remote URLs among `images` that are neither cached,
    /// pending nor known to be oversized, and marks them pending.
    ///
    /// Cached URLs listed in `images` move to the front of the LRU order.
    pub fn claim_missing<'a>(&mut self, images: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut claimed = Vec::new();
        for url in images.into_iter().filter(|image| is_remote(image)) {
            if self.cache.get(url).is_some()
                || self.pending.contains(url)
                || self.oversized.contains(url)
            {
                continue;
            }
            self.pending.insert(url.to_string());
            claimed.push(url.to_string());
        }
        claimed
    }

    /// Stores a downloaded photo. Photos above half the byte budget are not
    /// kept, and their URL is not claimed again.
    pub fn insert(&mut self, url: String, bytes: Vec<u8>) -> bool {
        self.pending.remove(&url);
        let size_bytes = bytes.len();
        if size_bytes > self.max_bytes / 2 {
            log::debug!("photo {url} is {size_bytes} bytes, not caching");
            self.oversized.insert(url);
            return false;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }
        while self.current_bytes + size_bytes > self.max_bytes {
            match self.cache.pop_lru() {
                Some((_, evicted)) => {
                    self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                }
                None => break,
            }
        }

        let entry = CacheEntry {
            handle: Handle::from_bytes(bytes),
            size_bytes,
        };
        if let Some((_, evicted)) = self.cache.push(url, entry) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
        }
        self.current_bytes += size_bytes;
        true
    }

    /// Forgets a failed download so a later snapshot retries it.
    pub fn fail(&mut self, url: &str) {
        self.pending.remove(url);
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[cfg(test)]
    fn current_bytes(&self) -> usize {
        self.current_bytes
    }
}

/// Downloads the photo at `url`.
///
/// # Errors
///
/// Returns a network or backend error for transport failures and non-success
/// statuses.
pub async fn download(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::from_status(status.as_u16()).into());
    }
    Ok(response.bytes().await?.to_vec())
}

// SPDX-License-Identifier: MPL-2.0
//! Runtime permission port definition.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;

/// Platform API level from which media reads need `READ_MEDIA_IMAGES`.
pub const MEDIA_IMAGES_API_LEVEL: u32 = 33;

/// Runtime permissions needed by the capture flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Camera,
    ReadMediaImages,
    ReadExternalStorage,
}

impl Permission {
    /// Returns the platform name of the permission.
    #[must_use]
    pub fn platform_name(self) -> &'static str {
        match self {
            Permission::Camera => "android.permission.CAMERA",
            Permission::ReadMediaImages => "android.permission.READ_MEDIA_IMAGES",
            Permission::ReadExternalStorage => "android.permission.READ_EXTERNAL_STORAGE",
        }
    }

    /// Returns the media-read permission used on the given API level.
    #[must_use]
    pub fn media_read_for(api_level: u32) -> Self {
        if api_level >= MEDIA_IMAGES_API_LEVEL {
            Permission::ReadMediaImages
        } else {
            Permission::ReadExternalStorage
        }
    }

    /// Returns the full set requested before using the camera.
    #[must_use]
    pub fn capture_set(api_level: u32) -> Vec<Self> {
        vec![Permission::Camera, Self::media_read_for(api_level)]
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.platform_name())
    }
}

/// Per-permission grant map returned by a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionGrants(HashMap<Permission, bool>);

impl PermissionGrants {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one permission.
    #[must_use]
    pub fn with(mut self, permission: Permission, granted: bool) -> Self {
        self.0.insert(permission, granted);
        self
    }

    /// Returns whether `permission` was granted. Absent entries count as denied.
    #[must_use]
    pub fn is_granted(&self, permission: Permission) -> bool {
        self.0.get(&permission).copied().unwrap_or(false)
    }

    /// Returns whether every permission of `required` was granted.
    #[must_use]
    pub fn all_granted(&self, required: &[Permission]) -> bool {
        required.iter().all(|p| self.is_granted(*p))
    }
}

impl FromIterator<(Permission, bool)> for PermissionGrants {
    fn from_iter<I: IntoIterator<Item = (Permission, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Port for the host permission subsystem.
#[async_trait]
pub trait PermissionGateway: Send + Sync {
    /// Requests `permissions`, returning the grant of each one.
    async fn request(&self, permissions: &[Permission]) -> PermissionGrants;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_permission_depends_on_api_level() {
        assert_eq!(Permission::media_read_for(32), Permission::ReadExternalStorage);
        assert_eq!(Permission::media_read_for(33), Permission::ReadMediaImages);
        assert_eq!(
            Permission::capture_set(34),
            vec![Permission::Camera, Permission::ReadMediaImages]
        );
    }

    #[test]
    fn missing_entries_count_as_denied() {
        let grants = PermissionGrants::new().with(Permission::Camera, true);
        assert!(grants.is_granted(Permission::Camera));
        assert!(!grants.is_granted(Permission::ReadMediaImages));
        assert!(!grants.all_granted(&Permission::capture_set(33)));
    }

    #[test]
    fn all_granted_requires_every_entry() {
        let required = Permission::capture_set(30);
        let grants: PermissionGrants = required.iter().map(|p| (*p, true)).collect();
        assert!(grants.all_granted(&required));
    }
}

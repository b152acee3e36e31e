// SPDX-License-Identifier: MPL-2.0
//! Authentication port definition.

use crate::error::Result;
use async_trait::async_trait;

/// Port for checking user credentials.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns `Ok(true)` when the credentials are accepted and `Ok(false)`
    /// when they are rejected. Transport failures are reported as errors.
    async fn login(&self, email: &str, password: &str) -> Result<bool>;
}

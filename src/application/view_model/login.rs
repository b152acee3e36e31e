// SPDX-License-Identifier: MPL-2.0
//! Login view model.

use crate::application::port::Authenticator;
use std::sync::Arc;

/// Delegates credential checks to the authentication port.
#[derive(Clone)]
pub struct LoginViewModel {
    authenticator: Arc<dyn Authenticator>,
}

impl std::fmt::Debug for LoginViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginViewModel").finish_non_exhaustive()
    }
}

impl LoginViewModel {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }

    /// Checks the credentials and reports a single success flag.
    ///
    /// Transport failures count as a failed login.
    pub async fn login(&self, email: String, password: String) -> bool {
        match self.authenticator.login(&email, &password).await {
            Ok(true) => {
                log::info!("login accepted for {email}");
                true
            }
            Ok(false) => {
                log::info!("login rejected for {email}");
                false
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                false
            }
        }
    }
}

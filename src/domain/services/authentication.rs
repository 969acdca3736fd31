//! Login flow against the backend
//!
//! The backend verifies credentials; this only sequences the CSRF pre-fetch and the login post
//! and hands back the granted role. Session state is never touched here.

use crate::domain::models::{LoginCredentials, Role};
use crate::infrastructure::api::AuthBackend;
use crate::shared::errors::Result;
use crate::shared::logging::log_login_failure;

/// Authenticate and return the role granted by the backend
pub async fn authenticate(backend: &dyn AuthBackend, credentials: &LoginCredentials) -> Result<Role> {
    let csrf_token = match backend.fetch_csrf_token().await {
        Ok(token) => Some(token),
        Err(e) => {
            tracing::warn!(error = %e, "Could not fetch CSRF token, attempting login without it");
            None
        }
    };

    match backend.login(credentials, csrf_token.as_deref()).await {
        Ok(response) => Ok(Role::coerce(&response.role)),
        Err(e) => {
            log_login_failure(&credentials.username, &e.to_string());
            Err(e)
        }
    }
}

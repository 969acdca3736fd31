//! Role authority client
//!
//! The backend is the only source of truth for the role; the browser copy is a hint.

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::domain::models::{Role, RoleResponse};
use crate::shared::constants::ROLE_ENDPOINT;
use crate::shared::errors::Result;

#[async_trait(?Send)]
pub trait RoleAuthority {
    /// Current role as reported by the backend, unknown strings coerced to standard
    async fn fetch_role(&self) -> Result<Role>;
}

/// Decode the authority payload
pub fn role_from_body(body: &str) -> Result<Role> {
    let response: RoleResponse = serde_json::from_str(body)
        .map_err(|e| crate::shared::errors::AppError::Decode(e.to_string()))?;
    Ok(Role::coerce(&response.role))
}

/// `GET /api/user/role/` over HTTP
#[derive(Debug, Clone)]
pub struct HttpRoleAuthority {
    url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpRoleAuthority {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            url: config.endpoint(ROLE_ENDPOINT),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl RoleAuthority for HttpRoleAuthority {
    async fn fetch_role(&self) -> Result<Role> {
        use crate::shared::errors::AppError;
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let response = Request::get(&self.url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::HttpStatus {
                status: response.status(),
                message: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        role_from_body(&body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl RoleAuthority for HttpRoleAuthority {
    async fn fetch_role(&self) -> Result<Role> {
        use crate::shared::errors::AppError;

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        role_from_body(&body)
    }
}

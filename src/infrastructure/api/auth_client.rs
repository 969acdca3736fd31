//! Login and CSRF collaborators

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::domain::models::{CsrfResponse, LoginCredentials, LoginResponse};
use crate::shared::constants::{CSRF_ENDPOINT, LOGIN_ENDPOINT};
use crate::shared::errors::Result;

#[async_trait(?Send)]
pub trait AuthBackend {
    async fn fetch_csrf_token(&self) -> Result<String>;

    /// Post credentials; any non-2xx answer is `AppError::LoginRejected`
    async fn login(&self, credentials: &LoginCredentials, csrf_token: Option<&str>) -> Result<LoginResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    csrf_url: String,
    login_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpAuthBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            csrf_url: config.endpoint(CSRF_ENDPOINT),
            login_url: config.endpoint(LOGIN_ENDPOINT),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn fetch_csrf_token(&self) -> Result<String> {
        use crate::shared::errors::AppError;
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let response = Request::get(&self.csrf_url)
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

        let body: CsrfResponse = response
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(body.csrf_token)
    }

    async fn login(&self, credentials: &LoginCredentials, csrf_token: Option<&str>) -> Result<LoginResponse> {
        use crate::shared::constants::CSRF_HEADER;
        use crate::shared::errors::AppError;
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let mut request = Request::post(&self.login_url)
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json");
        if let Some(token) = csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request
            .json(credentials)
            .map_err(|e| AppError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::LoginRejected(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn fetch_csrf_token(&self) -> Result<String> {
        use crate::shared::errors::AppError;

        let response = self
            .client
            .get(&self.csrf_url)
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

        let body: CsrfResponse = response
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(body.csrf_token)
    }

    async fn login(&self, credentials: &LoginCredentials, csrf_token: Option<&str>) -> Result<LoginResponse> {
        use crate::shared::constants::CSRF_HEADER;
        use crate::shared::errors::AppError;

        let mut request = self.client.post(&self.login_url).json(credentials);
        if let Some(token) = csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::LoginRejected(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

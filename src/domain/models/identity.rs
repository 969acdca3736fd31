use serde::{Deserialize, Serialize};

use super::Role;

/// Who the user is, as far as the browser knows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    pub role: Role,
    pub username: String,
    pub is_logged_in: bool,
}

impl Identity {
    /// The logged-out triple `(standard, "", false)`
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in(username: impl Into<String>, role: Role) -> Self {
        Self {
            role,
            username: username.into(),
            is_logged_in: true,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Credentials submitted by the login form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    /// Role requested by the user; the backend decides what is granted
    pub role: Role,
}

/// Body of the role authority response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub role: String,
}

/// Body of a successful login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrfResponse {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

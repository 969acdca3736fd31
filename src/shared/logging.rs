//! Structured logging for the workspace shell
//!
//! Every state transition of the session and sidebar goes through one of these helpers so the
//! emitted events share field names. Works on both targets: the server installs a subscriber,
//! the browser build drops events unless a subscriber is attached.

use crate::domain::models::{Role, ViewportClass};

/// Log operations for the shell's state machines
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SessionHydrate,
    RoleCheck,
    Login,
    Logout,
    Viewport,
    PreferenceWrite,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SessionHydrate => "session_hydrate",
            LogOperation::RoleCheck => "role_check",
            LogOperation::Login => "login",
            LogOperation::Logout => "logout",
            LogOperation::Viewport => "viewport",
            LogOperation::PreferenceWrite => "preference_write",
        }
    }
}

pub fn log_session_hydrated(role: Role, username: &str, is_logged_in: bool) {
    tracing::debug!(
        operation = LogOperation::SessionHydrate.as_str(),
        role = role.as_str(),
        username = username,
        is_logged_in = is_logged_in,
        "Session hydrated from persisted preferences"
    );
}

pub fn log_role_check_start(generation: u64) {
    tracing::debug!(
        operation = LogOperation::RoleCheck.as_str(),
        generation = generation,
        "Requesting role from authority"
    );
}

pub fn log_role_check_applied(role: Role, generation: u64) {
    tracing::info!(
        operation = LogOperation::RoleCheck.as_str(),
        role = role.as_str(),
        generation = generation,
        "Role confirmed by authority"
    );
}

/// A newer login/logout superseded the check
pub fn log_role_check_discarded(issued: u64, current: u64) {
    tracing::info!(
        operation = LogOperation::RoleCheck.as_str(),
        issued_generation = issued,
        current_generation = current,
        "Discarded stale role check response"
    );
}

/// Transient failures (network, status, timeout, decode) are expected and logged as warnings
pub fn log_role_check_fallback(error: &str, transient: bool) {
    if transient {
        tracing::warn!(
            operation = LogOperation::RoleCheck.as_str(),
            error = error,
            "Role check failed, falling back to standard"
        );
    } else {
        tracing::error!(
            operation = LogOperation::RoleCheck.as_str(),
            error = error,
            "Role check failed unexpectedly, falling back to standard"
        );
    }
}

pub fn log_login(username: &str, role: Role) {
    tracing::info!(
        operation = LogOperation::Login.as_str(),
        username = username,
        role = role.as_str(),
        "User logged in"
    );
}

pub fn log_login_failure(username: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Login.as_str(),
        username = username,
        error = error,
        "Login rejected"
    );
}

pub fn log_logout() {
    tracing::info!(operation = LogOperation::Logout.as_str(), "User logged out");
}

pub fn log_viewport_transition(width: f64, from: ViewportClass, to: ViewportClass, minimized: bool) {
    tracing::trace!(
        operation = LogOperation::Viewport.as_str(),
        width = width,
        from = from.as_str(),
        to = to.as_str(),
        minimized = minimized,
        "Viewport evaluated"
    );
}

/// Preference writes are best-effort; failures only reach the log
pub fn log_preference_write_error(key: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::PreferenceWrite.as_str(),
        key = key,
        error = error,
        "Failed to persist preference"
    );
}

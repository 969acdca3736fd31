// Persisted preference keys (shared with the backend-issued cookies)
pub const KEY_USER_ROLE: &str = "user_role";
pub const KEY_USERNAME: &str = "username";
pub const KEY_IS_LOGGED_IN: &str = "is_logged_in";
pub const KEY_SIDEBAR_MINIMIZED: &str = "sidebar_minimized";

/// Identity keys cleared together on logout
pub const IDENTITY_KEYS: [&str; 3] = [KEY_USER_ROLE, KEY_USERNAME, KEY_IS_LOGGED_IN];

pub const PREFERENCE_TTL_DAYS: i64 = 7;

/// Viewports narrower than this are mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const ROLE_CHECK_TIMEOUT_MS: u64 = 5_000;

// Backend endpoints (relative to the configured API base)
pub const ROLE_ENDPOINT: &str = "/api/user/role/";
pub const CSRF_ENDPOINT: &str = "/api/csrf/";
pub const LOGIN_ENDPOINT: &str = "/api/login/";

pub const CSRF_HEADER: &str = "X-CSRFToken";

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed: Invalid credentials or CSRF token issue";

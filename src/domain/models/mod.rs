// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod role;
pub mod identity;
pub mod sidebar;
pub mod menu;

pub use role::Role;
pub use identity::{CsrfResponse, Identity, LoginCredentials, LoginResponse, RoleResponse};
pub use sidebar::{SidebarState, ViewportClass};
pub use menu::{MenuItem, NavLinkItem, SITE_NAV, WORKSPACE_MENU};

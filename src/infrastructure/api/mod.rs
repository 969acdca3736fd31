// Backend collaborators consumed over REST

pub mod role_authority;
pub mod auth_client;

pub use role_authority::{HttpRoleAuthority, RoleAuthority};
pub use auth_client::{AuthBackend, HttpAuthBackend};

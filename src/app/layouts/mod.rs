pub mod navbar;
pub mod workspace_sidebar;

pub use navbar::Navbar;
pub use workspace_sidebar::WorkspaceSidebar;

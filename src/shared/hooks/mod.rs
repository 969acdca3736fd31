// Custom Dioxus hooks
pub mod use_preferences;
pub mod use_session;
pub mod use_sidebar;
pub mod use_navigation;

pub use use_preferences::{use_preferences, use_preferences_provider, Preferences};
pub use use_session::{use_session, use_session_provider, SessionContext};
pub use use_sidebar::{use_sidebar, use_sidebar_provider, SidebarContext};
pub use use_navigation::use_navigation;

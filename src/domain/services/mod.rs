// Business logic services
// Framework-agnostic, 100% testable

pub mod route_classifier;
pub mod responsive_controller;
pub mod session_state;
pub mod navigation_shell;
pub mod authentication;

pub use route_classifier::{is_workspace_route, RouteClass, RouteClassifier, RouteRule};
pub use responsive_controller::{ResponsiveController, SidebarTransition};
pub use session_state::{confirm_role_from_server, reconcile_role, RoleCheckTicket, SessionState};
pub use navigation_shell::{content_offset, menu_for, project, ContentOffset, NavigationView};
pub use authentication::authenticate;

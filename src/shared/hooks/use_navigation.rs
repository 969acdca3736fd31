use crate::domain::services::{project, NavigationView, RouteClassifier};
use crate::shared::hooks::{use_session, use_sidebar};

/// Navigation projection for `path`.
/// Reads the session and sidebar signals, so the caller re-renders when either changes.
pub fn use_navigation(path: &str) -> NavigationView {
    let session = use_session();
    let sidebar = use_sidebar();

    project(
        RouteClassifier::workspace(),
        path,
        &session.identity(),
        sidebar.state(),
    )
}

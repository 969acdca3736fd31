//! Role-adaptive navigation projection
//!
//! Pure composition of route classification, identity and sidebar state. Holds no state of
//! its own and is recomputed whenever one of its inputs changes.

use crate::domain::models::{Identity, MenuItem, Role, SidebarState, WORKSPACE_MENU};
use crate::domain::services::route_classifier::{RouteClass, RouteClassifier};

/// Left margin applied to the content area and navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOffset {
    None,
    /// Minimized sidebar (4rem)
    Narrow,
    /// Expanded sidebar (16rem)
    Wide,
}

impl ContentOffset {
    pub fn css_class(&self) -> &'static str {
        match self {
            ContentOffset::None => "",
            ContentOffset::Narrow => "u-offset-narrow",
            ContentOffset::Wide => "u-offset-wide",
        }
    }
}

/// Everything the layout needs to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationView {
    pub route_class: RouteClass,
    pub show_sidebar: bool,
    pub menu_items: Vec<MenuItem>,
    pub content_offset: ContentOffset,
    pub sidebar: SidebarState,
    pub identity: Identity,
}

impl NavigationView {
    pub fn shows_admin_badge(&self) -> bool {
        self.show_sidebar && self.identity.is_admin() && self.sidebar.shows_labels()
    }
}

/// Menu entries visible to `role`, in menu order
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    WORKSPACE_MENU
        .iter()
        .filter(|item| !item.admin_only || role.is_admin())
        .copied()
        .collect()
}

pub fn content_offset(show_sidebar: bool, sidebar: SidebarState) -> ContentOffset {
    match (show_sidebar, sidebar.minimized) {
        (false, _) => ContentOffset::None,
        (true, true) => ContentOffset::Narrow,
        (true, false) => ContentOffset::Wide,
    }
}

pub fn project(
    classifier: &RouteClassifier,
    path: &str,
    identity: &Identity,
    sidebar: SidebarState,
) -> NavigationView {
    let route_class = classifier.classify(path);
    let show_sidebar = route_class.is_workspace();

    NavigationView {
        route_class,
        show_sidebar,
        menu_items: menu_for(identity.role),
        content_offset: content_offset(show_sidebar, sidebar),
        sidebar,
        identity: identity.clone(),
    }
}

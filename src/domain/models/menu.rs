/// Entry of the workspace sidebar menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub admin_only: bool,
}

/// Workspace menu in display order
pub const WORKSPACE_MENU: [MenuItem; 5] = [
    MenuItem { path: "/customers", label: "Customers", icon: "👥", admin_only: false },
    MenuItem { path: "/communications", label: "Communications", icon: "💬", admin_only: false },
    MenuItem { path: "/orders", label: "Orders", icon: "🛒", admin_only: false },
    MenuItem { path: "/finances", label: "Finances", icon: "📊", admin_only: true },
    MenuItem { path: "/reports", label: "Reports", icon: "📄", admin_only: true },
];

/// Public site links shown in the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLinkItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SITE_NAV: [NavLinkItem; 5] = [
    NavLinkItem { path: "/", label: "Home", icon: "🏠" },
    NavLinkItem { path: "/about", label: "About", icon: "👤" },
    NavLinkItem { path: "/portfolio", label: "Portfolio", icon: "💼" },
    NavLinkItem { path: "/services", label: "Services", icon: "⚙️" },
    NavLinkItem { path: "/contact", label: "Contact", icon: "✉️" },
];

use serde::{Deserialize, Serialize};

/// Viewport classification derived from the window width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportClass::Desktop => "desktop",
            ViewportClass::Mobile => "mobile",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, ViewportClass::Mobile)
    }
}

/// Sidebar layout state; `minimized` is always true on mobile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub minimized: bool,
    pub viewport_class: ViewportClass,
}

impl SidebarState {
    /// Labels, title and admin badge only show on an expanded desktop sidebar
    pub fn shows_labels(&self) -> bool {
        !self.minimized && !self.viewport_class.is_mobile()
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            minimized: false,
            viewport_class: ViewportClass::Desktop,
        }
    }
}

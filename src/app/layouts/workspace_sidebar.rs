use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant};
use crate::domain::services::NavigationView;
use crate::shared::hooks::use_sidebar;

/// Collapsible workspace sidebar, rendered only on workspace routes
#[component]
pub fn WorkspaceSidebar(view: NavigationView) -> Element {
    let sidebar = use_sidebar();
    let state = view.sidebar;
    let show_labels = state.shows_labels();

    let mut classes = vec!["c-sidebar"];
    classes.push(if state.minimized { "c-sidebar--minimized" } else { "c-sidebar--expanded" });
    if state.viewport_class.is_mobile() {
        classes.push("c-sidebar--mobile");
    }
    let class = classes.join(" ");

    let (toggle_icon, toggle_label) = if state.minimized {
        ("→", "Expand sidebar")
    } else {
        ("←", "Collapse sidebar")
    };

    rsx! {
        aside { class: "{class}",
            div { class: "c-sidebar__header",
                if show_labels {
                    h2 { class: "c-sidebar__title", "Dashboard" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: state.viewport_class.is_mobile(),
                    label: toggle_label.to_string(),
                    onclick: move |_| sidebar.toggle(),
                    "{toggle_icon}"
                }
            }
            ul { class: "c-sidebar__nav",
                for item in view.menu_items.iter() {
                    li { key: "{item.path}",
                        Link {
                            to: item.path,
                            class: "c-sidebar__item",
                            active_class: "c-sidebar__item--active",
                            span { class: "c-sidebar__icon", title: "{item.label}", "{item.icon}" }
                            if show_labels {
                                span { class: "c-sidebar__label", "{item.label}" }
                            }
                        }
                    }
                }
            }
            if view.shows_admin_badge() {
                div { class: "c-sidebar__badge", "Admin Mode" }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus::document;

use crate::app::layouts::{Navbar, WorkspaceSidebar};
use crate::app::pages::auth::{Login, Logout, Register, UserRole};
use crate::app::pages::site::{
    About, Communications, Contact, Csrf, CustomerDetail, Customers, Finances, Home, Inquiry,
    NotFound, Orders, Portfolio, ProjectDashboard, ProjectDetails, Reports, Services,
};
use crate::config::AppConfig;
use crate::shared::hooks::{use_navigation, use_preferences_provider, use_session_provider, use_sidebar_provider};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/portfolio")]
    Portfolio {},
    #[route("/services")]
    Services {},
    #[route("/contact")]
    Contact {},
    #[route("/inquiry")]
    Inquiry {},

    // Authentication
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/logout")]
    Logout {},
    #[route("/user/role")]
    UserRole {},
    #[route("/csrf")]
    Csrf {},

    // Projects
    #[route("/projects/:id")]
    ProjectDetails { id: String },
    #[route("/projects/:id/dashboard")]
    ProjectDashboard { id: String },

    // Workspace
    #[route("/customers")]
    Customers {},
    #[route("/customers/:id")]
    CustomerDetail { id: String },
    #[route("/communications")]
    Communications {},
    #[route("/orders")]
    Orders {},
    #[route("/finances")]
    Finances {},
    #[route("/reports")]
    Reports {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::load);
    let preferences = use_preferences_provider();

    // Session hydrates before the first render of any consumer
    use_session_provider(config.clone(), preferences.clone());
    use_sidebar_provider(config, preferences);

    use_effect(|| {
        tracing::info!("Portfolio app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let path = use_route::<Route>().to_string();
    let view = use_navigation(&path);
    let offset = view.content_offset;
    let offset_class = offset.css_class();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            if view.show_sidebar {
                WorkspaceSidebar { view: view.clone() }
            }
            div { class: "c-layout__body {offset_class}",
                Navbar { offset }
                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
                footer { class: "c-footer", "© Malik Azmat Abbas" }
            }
        }
    }
}

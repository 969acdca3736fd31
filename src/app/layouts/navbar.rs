use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::domain::models::SITE_NAV;
use crate::domain::services::ContentOffset;
use crate::shared::hooks::use_session;

/// Top navigation: site links plus login state
#[component]
pub fn Navbar(offset: ContentOffset) -> Element {
    let session = use_session();
    let identity = session.identity();
    let navigator = use_navigator();
    let offset_class = offset.css_class();

    let handle_logout = move |evt: MouseEvent| {
        evt.prevent_default();
        session.logout();
        navigator.push(Route::Home {});
    };

    rsx! {
        nav { class: "c-navbar {offset_class}",
            div { class: "c-navbar__inner",
                h1 { class: "c-navbar__brand", "Malik Azmat Abbas" }
                ul { class: "c-navbar__links",
                    for item in SITE_NAV {
                        li { key: "{item.path}",
                            Link {
                                to: item.path,
                                class: "c-navbar__link",
                                active_class: "c-navbar__link--active",
                                span { class: "c-navbar__icon", "{item.icon}" }
                                span { "{item.label}" }
                            }
                        }
                    }
                    if identity.is_logged_in {
                        li { class: "c-navbar__welcome", "Welcome, {identity.username}" }
                        li {
                            a {
                                href: "/",
                                class: "c-navbar__link",
                                onclick: handle_logout,
                                span { class: "c-navbar__icon", "⏏" }
                                span { "Logout" }
                            }
                        }
                    } else {
                        li {
                            Link { to: Route::Login {}, class: "c-navbar__link",
                                span { class: "c-navbar__icon", "🔑" }
                                span { "Login" }
                            }
                        }
                        li {
                            Link { to: Route::Register {}, class: "c-navbar__link",
                                span { class: "c-navbar__icon", "➕" }
                                span { "Register" }
                            }
                        }
                    }
                }
            }
        }
    }
}

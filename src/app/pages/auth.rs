//! Authentication pages
//!
//! Credential checks happen in the backend. These pages only sequence the calls and hand the
//! granted role to the session context.

use dioxus::prelude::*;

use crate::app::components::{Button, Card, ErrorMessage, LoadingText, PagePlaceholder};
use crate::app::pages::routes::Route;
use crate::config::AppConfig;
use crate::domain::models::{LoginCredentials, Role};
use crate::domain::services::authenticate;
use crate::infrastructure::api::{HttpAuthBackend, HttpRoleAuthority, RoleAuthority};
use crate::shared::constants::LOGIN_FAILED_MESSAGE;
use crate::shared::hooks::use_session;
use crate::shared::utils::with_timeout;

#[component]
pub fn Login() -> Element {
    let mut username_input = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut requested_role = use_signal(|| Role::Standard);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let session = use_session();
    let config = use_context::<AppConfig>();
    let navigator = use_navigator();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if is_submitting() {
            return;
        }

        let credentials = LoginCredentials {
            username: username_input(),
            password: password(),
            role: requested_role(),
        };
        let backend = HttpAuthBackend::new(&config);
        let session = session.clone();
        is_submitting.set(true);

        spawn(async move {
            match authenticate(&backend, &credentials).await {
                Ok(role) => {
                    session.login(&credentials.username, role);
                    error.set(None);
                    navigator.push(Route::Customers {});
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    error.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        Card { title: "Login", narrow: true,
            if let Some(message) = error() {
                ErrorMessage { message }
            }
            form { class: "c-form", onsubmit: handle_login,
                input {
                    class: "c-form__input",
                    r#type: "text",
                    placeholder: "Username",
                    autocomplete: "username",
                    value: "{username_input}",
                    oninput: move |evt| username_input.set(evt.value()),
                }
                input {
                    class: "c-form__input",
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                select {
                    class: "c-form__input",
                    value: "{requested_role().as_str()}",
                    onchange: move |evt| requested_role.set(Role::coerce(&evt.value())),
                    for role in Role::all() {
                        option { value: "{role.as_str()}", "{role.display_name()}" }
                    }
                }
                Button { submit: true, disabled: is_submitting(),
                    if is_submitting() { "Logging in..." } else { "Login" }
                }
            }
        }
    }
}

#[component]
pub fn Logout() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        session.logout();
        navigator.replace(Route::Home {});
    });

    rsx! {
        LoadingText { message: "Logging out…" }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        PagePlaceholder {
            icon: "➕",
            title: "Register",
            description: "Accounts are created by the backend registration endpoint.",
        }
    }
}

/// Fresh role-authority read, displayed without touching the session
#[component]
pub fn UserRole() -> Element {
    let config = use_context::<AppConfig>();

    let role = use_resource(move || {
        let config = config.clone();
        async move {
            let authority = HttpRoleAuthority::new(&config);
            match with_timeout(authority.fetch_role(), config.role_check_timeout()).await {
                Ok(Ok(role)) => role.as_str().to_string(),
                Ok(Err(e)) | Err(e) => {
                    tracing::warn!("Role lookup failed: {}", e);
                    "error".to_string()
                }
            }
        }
    });

    let current = role.read().clone();

    rsx! {
        Card { title: "User Role",
            match current {
                Some(role) => rsx! {
                    p { "Current role: " span { class: "c-role", "{role}" } }
                },
                None => rsx! { LoadingText { message: "Checking role..." } },
            }
        }
    }
}

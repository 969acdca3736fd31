use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Inline error (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Page served by the backend's CRUD views or static content
#[component]
pub fn PagePlaceholder(icon: String, title: String, description: String) -> Element {
    rsx! {
        div { class: "c-placeholder",
            div { class: "c-placeholder__icon", "{icon}" }
            h1 { class: "c-placeholder__title", "{title}" }
            p { class: "c-placeholder__description", "{description}" }
        }
    }
}

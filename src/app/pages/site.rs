//! Presentational pages
//!
//! Content and CRUD tables live in the backend's views; these only mark where they mount.

use dioxus::prelude::*;

use crate::app::components::PagePlaceholder;

#[component]
pub fn Home() -> Element {
    rsx! {
        PagePlaceholder {
            icon: "🏠",
            title: "Malik Azmat Abbas",
            description: "Software engineer. Portfolio, services and a client workspace.",
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! { PagePlaceholder { icon: "👤", title: "About", description: "Background, skills and experience." } }
}

#[component]
pub fn Portfolio() -> Element {
    rsx! { PagePlaceholder { icon: "💼", title: "Portfolio", description: "Selected projects." } }
}

#[component]
pub fn Services() -> Element {
    rsx! { PagePlaceholder { icon: "⚙️", title: "Services", description: "What I can build for you." } }
}

#[component]
pub fn Contact() -> Element {
    rsx! { PagePlaceholder { icon: "✉️", title: "Contact", description: "Send a message." } }
}

#[component]
pub fn Inquiry() -> Element {
    rsx! { PagePlaceholder { icon: "📝", title: "Project Inquiry", description: "Describe your project." } }
}

#[component]
pub fn Csrf() -> Element {
    rsx! { PagePlaceholder { icon: "🛡️", title: "CSRF", description: "CSRF token issued by the backend." } }
}

#[component]
pub fn ProjectDetails(id: String) -> Element {
    rsx! { PagePlaceholder { icon: "📁", title: "Project {id}", description: "Project details." } }
}

#[component]
pub fn ProjectDashboard(id: String) -> Element {
    rsx! { PagePlaceholder { icon: "📈", title: "Project {id} Dashboard", description: "Stages, tasks and change requests." } }
}

#[component]
pub fn Customers() -> Element {
    rsx! { PagePlaceholder { icon: "👥", title: "Customers", description: "Customer records." } }
}

#[component]
pub fn CustomerDetail(id: String) -> Element {
    rsx! { PagePlaceholder { icon: "👥", title: "Customer {id}", description: "Customer profile and communications." } }
}

#[component]
pub fn Communications() -> Element {
    rsx! { PagePlaceholder { icon: "💬", title: "Communications", description: "Customer communication log." } }
}

#[component]
pub fn Orders() -> Element {
    rsx! { PagePlaceholder { icon: "🛒", title: "Orders", description: "Orders and their status." } }
}

#[component]
pub fn Finances() -> Element {
    rsx! { PagePlaceholder { icon: "📊", title: "Finances", description: "Revenue and invoices." } }
}

#[component]
pub fn Reports() -> Element {
    rsx! { PagePlaceholder { icon: "📄", title: "Reports", description: "Generated reports." } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { PagePlaceholder { icon: "❓", title: "Page not found", description: "Nothing lives at /{path}." } }
}

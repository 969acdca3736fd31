use dioxus::prelude::*;

#[component]
pub fn Card(
    title: Option<String>,
    /// Narrow centered card (login form)
    narrow: Option<bool>,
    children: Element,
) -> Element {
    let narrow_class = if narrow.unwrap_or(false) { "c-card--narrow" } else { "" };

    rsx! {
        section {
            class: "c-card {narrow_class}",
            if let Some(title) = title {
                h2 { class: "c-card__title", "{title}" }
            }
            div { class: "c-card__body", {children} }
        }
    }
}

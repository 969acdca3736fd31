use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    /// Borderless icon button (sidebar toggle)
    Ghost,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    /// Render as a form submit button
    submit: Option<bool>,
    label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = match variant.unwrap_or(ButtonVariant::Primary) {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Ghost => "c-button--ghost",
    };
    let button_type = if submit.unwrap_or(false) { "submit" } else { "button" };

    rsx! {
        button {
            class: "c-button {variant_class}",
            r#type: button_type,
            disabled: disabled.unwrap_or(false),
            aria_label: label,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

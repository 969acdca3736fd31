use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::models::SidebarState;
use crate::domain::services::ResponsiveController;
use crate::shared::hooks::Preferences;

/// Sidebar state owned by the responsive controller
#[derive(Clone)]
pub struct SidebarContext {
    controller: Signal<ResponsiveController>,
    preferences: Preferences,
}

impl SidebarContext {
    pub fn state(&self) -> SidebarState {
        self.controller.read().state()
    }

    /// Collapse/expand; ignored while mobile forces minimization
    pub fn toggle(&self) {
        let mut controller = self.controller;
        if controller.write().toggle(self.preferences.store()).is_none() {
            tracing::debug!("Sidebar toggle ignored on mobile viewport");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Provide the sidebar state and keep it in sync with the window width
pub fn use_sidebar_provider(config: AppConfig, preferences: Preferences) -> SidebarContext {
    let controller = use_signal(|| ResponsiveController::new(&config));

    let context = use_context_provider(|| SidebarContext {
        controller,
        preferences: preferences.clone(),
    });

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let listener: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = use_hook(|| Rc::new(RefCell::new(None)));

        use_effect({
            let listener = Rc::clone(&listener);
            let store = preferences.shared();
            move || {
                let mut controller = controller;
                let store = Rc::clone(&store);

                // Mount evaluation
                if let Some(width) = viewport_width() {
                    controller.write().on_resize(&*store, width);
                }

                let on_resize = Closure::wrap(Box::new(move || {
                    if let Some(width) = viewport_width() {
                        controller.write().on_resize(&*store, width);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = web_sys::window() {
                    if let Err(e) = window
                        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                    {
                        tracing::error!("Failed to attach resize listener: {:?}", e);
                    }
                }
                *listener.borrow_mut() = Some(on_resize);
            }
        });

        use_drop(move || {
            if let (Some(window), Some(on_resize)) = (web_sys::window(), listener.borrow_mut().take()) {
                let _ = window
                    .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            }
        });
    }

    context
}

pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>()
}

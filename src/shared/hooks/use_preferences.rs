use dioxus::prelude::*;
use std::rc::Rc;

use crate::infrastructure::storage::{default_store, PreferenceStore};

/// Shared handle to the preference store, provided once at the app root
#[derive(Clone)]
pub struct Preferences(Rc<dyn PreferenceStore>);

impl Preferences {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self(store)
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        &*self.0
    }

    pub(crate) fn shared(&self) -> Rc<dyn PreferenceStore> {
        Rc::clone(&self.0)
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new(default_store())
    }
}

pub fn use_preferences_provider() -> Preferences {
    use_context_provider(Preferences::default)
}

pub fn use_preferences() -> Preferences {
    use_context::<Preferences>()
}

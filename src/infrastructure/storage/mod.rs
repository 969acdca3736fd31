// Preference persistence
// Memory store everywhere, cookie store in the browser

pub mod preference_store;
pub mod cookie_store;

pub use preference_store::{
    forget, persist, persist_flag, read_flag, MemoryPreferenceStore, PreferenceRecord, PreferenceStore,
};

#[cfg(target_arch = "wasm32")]
pub use cookie_store::CookiePreferenceStore;

use std::rc::Rc;

/// Store used by the running app: cookies in the browser, memory during server rendering
pub fn default_store() -> Rc<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(CookiePreferenceStore::new())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryPreferenceStore::new())
    }
}

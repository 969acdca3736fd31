//! Responsive sidebar state machine
//!
//! Two states, `Desktop` and `Mobile`, recomputed on mount and on every resize event with no
//! coalescing. Persistence is an explicit effect of each evaluation and is reported back in the
//! returned [`SidebarTransition`].

use crate::config::AppConfig;
use crate::domain::models::{SidebarState, ViewportClass};
use crate::infrastructure::storage::{persist_flag, read_flag, PreferenceStore};
use crate::shared::constants::KEY_SIDEBAR_MINIMIZED;
use crate::shared::logging::log_viewport_transition;

/// Outcome of one viewport evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarTransition {
    pub previous: SidebarState,
    pub next: SidebarState,
    /// Value written to `sidebar_minimized`, if any
    pub persisted: Option<bool>,
}

impl SidebarTransition {
    pub fn changed(&self) -> bool {
        self.previous != self.next
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveController {
    state: SidebarState,
    breakpoint: f64,
    ttl_days: i64,
    persist_forced: bool,
}

impl ResponsiveController {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: SidebarState::default(),
            breakpoint: config.mobile_breakpoint_px,
            ttl_days: config.preference_ttl_days,
            persist_forced: config.persist_forced_minimize,
        }
    }

    /// Controller after its initial evaluation at `width`
    pub fn mounted(config: &AppConfig, store: &dyn PreferenceStore, width: f64) -> Self {
        let mut controller = Self::new(config);
        controller.on_resize(store, width);
        controller
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn minimized(&self) -> bool {
        self.state.minimized
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.state.viewport_class
    }

    /// Evaluate one resize event
    pub fn on_resize(&mut self, store: &dyn PreferenceStore, width: f64) -> SidebarTransition {
        let previous = self.state;
        let viewport_class = ViewportClass::from_width(width, self.breakpoint);

        let (minimized, persisted) = match viewport_class {
            ViewportClass::Mobile => {
                if self.persist_forced {
                    persist_flag(store, KEY_SIDEBAR_MINIMIZED, true, self.ttl_days);
                    (true, Some(true))
                } else {
                    (true, None)
                }
            }
            ViewportClass::Desktop => {
                let preference = read_flag(store, KEY_SIDEBAR_MINIMIZED);
                persist_flag(store, KEY_SIDEBAR_MINIMIZED, preference, self.ttl_days);
                (preference, Some(preference))
            }
        };

        self.state = SidebarState { minimized, viewport_class };
        log_viewport_transition(width, previous.viewport_class, viewport_class, minimized);

        SidebarTransition { previous, next: self.state, persisted }
    }

    /// User collapse/expand; refused while the viewport forces minimization
    pub fn toggle(&mut self, store: &dyn PreferenceStore) -> Option<SidebarTransition> {
        if self.state.viewport_class.is_mobile() {
            return None;
        }

        let previous = self.state;
        let minimized = !previous.minimized;
        persist_flag(store, KEY_SIDEBAR_MINIMIZED, minimized, self.ttl_days);
        self.state.minimized = minimized;

        Some(SidebarTransition { previous, next: self.state, persisted: Some(minimized) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryPreferenceStore;

    fn stored(store: &MemoryPreferenceStore) -> Option<String> {
        store.get(KEY_SIDEBAR_MINIMIZED)
    }

    #[test]
    fn test_mount_on_desktop_without_preference() {
        let store = MemoryPreferenceStore::new();
        let controller = ResponsiveController::mounted(&AppConfig::default(), &store, 1024.0);

        assert!(!controller.minimized());
        assert_eq!(controller.viewport_class(), ViewportClass::Desktop);
        assert_eq!(stored(&store).as_deref(), Some("false"));
    }

    #[test]
    fn test_mount_on_desktop_restores_preference() {
        let store = MemoryPreferenceStore::seeded(&[(KEY_SIDEBAR_MINIMIZED, "true")]);
        let controller = ResponsiveController::mounted(&AppConfig::default(), &store, 1280.0);

        assert!(controller.minimized());
    }

    #[test]
    fn test_mobile_forces_minimized_regardless_of_preference() {
        for preference in ["true", "false", "garbage"] {
            for width in [0.0, 320.0, 500.0, 767.0, 767.99] {
                let store = MemoryPreferenceStore::seeded(&[(KEY_SIDEBAR_MINIMIZED, preference)]);
                let controller = ResponsiveController::mounted(&AppConfig::default(), &store, width);
                assert!(controller.minimized(), "width {} preference {}", width, preference);
                assert_eq!(controller.viewport_class(), ViewportClass::Mobile);
            }
        }
    }

    #[test]
    fn test_resize_desktop_mobile_desktop_clobbers_preference() {
        let store = MemoryPreferenceStore::new();
        let mut controller = ResponsiveController::new(&AppConfig::default());

        let sequence: Vec<bool> = [1024.0, 500.0, 1024.0]
            .into_iter()
            .map(|width| controller.on_resize(&store, width).next.minimized)
            .collect();

        assert_eq!(sequence, vec![false, true, true]);
        assert_eq!(stored(&store).as_deref(), Some("true"));
    }

    #[test]
    fn test_return_to_desktop_reads_current_storage() {
        let store = MemoryPreferenceStore::new();
        let mut controller = ResponsiveController::mounted(&AppConfig::default(), &store, 1024.0);
        controller.on_resize(&store, 500.0);

        // Another writer reset the preference while on mobile
        store.set(KEY_SIDEBAR_MINIMIZED, "false", 7).unwrap();

        let transition = controller.on_resize(&store, 1024.0);
        assert!(!transition.next.minimized);
        assert_eq!(transition.persisted, Some(false));
    }

    #[test]
    fn test_forced_minimize_kept_out_of_storage_when_disabled() {
        let config = AppConfig { persist_forced_minimize: false, ..AppConfig::default() };
        let store = MemoryPreferenceStore::new();
        let mut controller = ResponsiveController::new(&config);

        let sequence: Vec<bool> = [1024.0, 500.0, 1024.0]
            .into_iter()
            .map(|width| controller.on_resize(&store, width).next.minimized)
            .collect();

        assert_eq!(sequence, vec![false, true, false]);
        assert_eq!(stored(&store).as_deref(), Some("false"));
    }

    #[test]
    fn test_rapid_resizes_converge_to_last_event() {
        let store = MemoryPreferenceStore::seeded(&[(KEY_SIDEBAR_MINIMIZED, "false")]);
        let mut controller = ResponsiveController::new(&AppConfig::default());

        for width in [1200.0, 700.0, 900.0, 600.0, 1100.0, 400.0] {
            controller.on_resize(&store, width);
        }

        assert_eq!(controller.viewport_class(), ViewportClass::Mobile);
        assert!(controller.minimized());
        assert_eq!(stored(&store).as_deref(), Some("true"));
    }

    #[test]
    fn test_every_event_is_evaluated_even_without_class_change() {
        let store = MemoryPreferenceStore::new();
        let mut controller = ResponsiveController::mounted(&AppConfig::default(), &store, 1024.0);
        store.set(KEY_SIDEBAR_MINIMIZED, "true", 7).unwrap();

        let transition = controller.on_resize(&store, 1100.0);
        assert_eq!(transition.previous.viewport_class, transition.next.viewport_class);
        assert!(transition.changed());
        assert!(controller.minimized());
    }

    #[test]
    fn test_toggle_on_desktop_persists() {
        let store = MemoryPreferenceStore::new();
        let mut controller = ResponsiveController::mounted(&AppConfig::default(), &store, 1024.0);

        let transition = controller.toggle(&store).unwrap();
        assert!(transition.next.minimized);
        assert_eq!(stored(&store).as_deref(), Some("true"));

        controller.toggle(&store);
        assert!(!controller.minimized());
        assert_eq!(stored(&store).as_deref(), Some("false"));
    }

    #[test]
    fn test_toggled_preference_survives_next_desktop_resize() {
        let store = MemoryPreferenceStore::new();
        let mut controller = ResponsiveController::mounted(&AppConfig::default(), &store, 1024.0);
        controller.toggle(&store);

        controller.on_resize(&store, 1300.0);
        assert!(controller.minimized());
    }

    #[test]
    fn test_toggle_refused_on_mobile() {
        let store = MemoryPreferenceStore::new();
        let mut controller = ResponsiveController::mounted(&AppConfig::default(), &store, 400.0);

        assert!(controller.toggle(&store).is_none());
        assert!(controller.minimized());
    }
}

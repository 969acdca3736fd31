use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::models::{Identity, Role};
use crate::domain::services::{reconcile_role, SessionState};
use crate::infrastructure::api::HttpRoleAuthority;
use crate::shared::hooks::Preferences;

/// Read access and the only mutators for the session identity.
/// Each mutator performs a single signal write, so consumers never see a partial identity.
#[derive(Clone)]
pub struct SessionContext {
    state: Signal<SessionState>,
    preferences: Preferences,
    config: AppConfig,
}

impl SessionContext {
    pub fn identity(&self) -> Identity {
        self.state.read().identity().clone()
    }

    pub fn role(&self) -> Role {
        self.state.read().role()
    }

    pub fn login(&self, username: &str, role: Role) {
        let mut state = self.state;
        state
            .write()
            .login(self.preferences.store(), self.config.preference_ttl_days, username, role);
    }

    pub fn logout(&self) {
        let mut state = self.state;
        state.write().logout(self.preferences.store());
    }
}

/// Provide the session to the tree. The first render is anonymous on both server and client;
/// the mount effect restores the persisted identity, then starts the one role check.
pub fn use_session_provider(config: AppConfig, preferences: Preferences) -> SessionContext {
    let state = use_signal(SessionState::default);

    let context = use_context_provider(|| SessionContext {
        state,
        preferences: preferences.clone(),
        config: config.clone(),
    });

    use_effect(move || {
        let config = config.clone();
        let mut state = state;
        state.write().restore(preferences.store());
        let ticket = state.peek().begin_role_check();

        spawn(async move {
            let authority = HttpRoleAuthority::new(&config);
            reconcile_role(ticket, &authority, &config, move |ticket, role| {
                state.write().apply_role_check(ticket, role)
            })
            .await;
        });
    });

    context
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

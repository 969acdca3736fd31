//! Session identity state
//!
//! Single owner of the `(role, username, is_logged_in)` triple. Every render tree starts from
//! the anonymous default so server and client markup agree; the mounted client then restores
//! the persisted identity and reconciles it against the role authority. Every identity
//! transaction (`login`, `logout`) bumps a generation counter; a role check issued under an
//! older generation is discarded when it completes, so a completed login always wins.

use std::time::Duration;

use crate::config::AppConfig;
use crate::domain::models::{Identity, Role};
use crate::infrastructure::api::RoleAuthority;
use crate::infrastructure::storage::{forget, persist, persist_flag, read_flag, PreferenceStore};
use crate::shared::constants::{IDENTITY_KEYS, KEY_IS_LOGGED_IN, KEY_USERNAME, KEY_USER_ROLE};
use crate::shared::logging::{
    log_login, log_logout, log_role_check_applied, log_role_check_discarded, log_role_check_fallback,
    log_role_check_start, log_session_hydrated,
};
use crate::shared::utils::with_timeout;

/// Proof of which identity generation a role check was issued under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCheckTicket {
    generation: u64,
}

impl RoleCheckTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    identity: Identity,
    generation: u64,
}

impl SessionState {
    /// Read identity from persisted preferences; never fails
    pub fn hydrate(store: &dyn PreferenceStore) -> Self {
        let mut session = Self::default();
        session.restore(store);
        session
    }

    /// Replace the identity with the persisted one, keeping the generation
    pub fn restore(&mut self, store: &dyn PreferenceStore) {
        self.identity = Identity {
            role: Role::from_persisted(store.get(KEY_USER_ROLE).as_deref()),
            username: store.get(KEY_USERNAME).unwrap_or_default(),
            is_logged_in: read_flag(store, KEY_IS_LOGGED_IN),
        };
        log_session_hydrated(self.identity.role, &self.identity.username, self.identity.is_logged_in);
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn role(&self) -> Role {
        self.identity.role
    }

    pub fn username(&self) -> &str {
        &self.identity.username
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_logged_in
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark the start of a role check against the current identity
    pub fn begin_role_check(&self) -> RoleCheckTicket {
        log_role_check_start(self.generation);
        RoleCheckTicket { generation: self.generation }
    }

    /// Apply a role check result; returns false when a newer identity superseded it.
    /// Only the role is touched.
    pub fn apply_role_check(&mut self, ticket: RoleCheckTicket, role: Role) -> bool {
        if ticket.generation != self.generation {
            log_role_check_discarded(ticket.generation, self.generation);
            return false;
        }

        self.identity.role = role;
        log_role_check_applied(role, self.generation);
        true
    }

    /// Set and persist the full identity in one transaction
    pub fn login(&mut self, store: &dyn PreferenceStore, ttl_days: i64, username: &str, role: Role) {
        self.generation += 1;
        self.identity = Identity::logged_in(username, role);

        persist(store, KEY_USER_ROLE, role.as_str(), ttl_days);
        persist(store, KEY_USERNAME, username, ttl_days);
        persist_flag(store, KEY_IS_LOGGED_IN, true, ttl_days);

        log_login(username, role);
    }

    /// Remove the identity keys and reset to `(standard, "", false)` in one transaction
    pub fn logout(&mut self, store: &dyn PreferenceStore) {
        self.generation += 1;
        self.identity = Identity::anonymous();

        for key in IDENTITY_KEYS {
            forget(store, key);
        }

        log_logout();
    }
}

/// Ask the role authority, bounded by `limit`; every failure downgrades to standard
pub async fn confirm_role_from_server(authority: &dyn RoleAuthority, limit: Duration) -> Role {
    match with_timeout(authority.fetch_role(), limit).await {
        Ok(Ok(role)) => role,
        Ok(Err(e)) | Err(e) => {
            log_role_check_fallback(&e.to_string(), e.is_transient());
            Role::Standard
        }
    }
}

/// Ticketed role check: issue, await, then apply only if still current
pub async fn reconcile_role<F>(
    ticket: RoleCheckTicket,
    authority: &dyn RoleAuthority,
    config: &AppConfig,
    apply: F,
) -> bool
where
    F: FnOnce(RoleCheckTicket, Role) -> bool,
{
    let role = confirm_role_from_server(authority, config.role_check_timeout()).await;
    apply(ticket, role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryPreferenceStore;
    use crate::shared::errors::{AppError, Result};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FixedAuthority(Result<Role>);

    #[async_trait(?Send)]
    impl RoleAuthority for FixedAuthority {
        async fn fetch_role(&self) -> Result<Role> {
            match &self.0 {
                Ok(role) => Ok(*role),
                Err(e) => Err(AppError::Network(e.to_string())),
            }
        }
    }

    /// Authority whose answer is released by the test
    struct DeferredAuthority(RefCell<Option<oneshot::Receiver<Role>>>);

    impl DeferredAuthority {
        fn new() -> (Self, oneshot::Sender<Role>) {
            let (tx, rx) = oneshot::channel();
            (Self(RefCell::new(Some(rx))), tx)
        }
    }

    #[async_trait(?Send)]
    impl RoleAuthority for DeferredAuthority {
        async fn fetch_role(&self) -> Result<Role> {
            let rx = self.0.borrow_mut().take().ok_or_else(|| AppError::Network("already used".into()))?;
            rx.await.map_err(|_| AppError::Network("authority dropped".into()))
        }
    }

    /// Fails with an error that is not a transport problem
    struct MisconfiguredAuthority;

    #[async_trait(?Send)]
    impl RoleAuthority for MisconfiguredAuthority {
        async fn fetch_role(&self) -> Result<Role> {
            Err(AppError::Storage("credentials store unavailable".into()))
        }
    }

    struct HangingAuthority;

    #[async_trait(?Send)]
    impl RoleAuthority for HangingAuthority {
        async fn fetch_role(&self) -> Result<Role> {
            futures::future::pending().await
        }
    }

    #[test]
    fn test_hydrate_cold_start() {
        let store = MemoryPreferenceStore::new();
        let session = SessionState::hydrate(&store);
        assert_eq!(session.identity(), &Identity::anonymous());
    }

    #[test]
    fn test_hydrate_persisted_identity() {
        let store = MemoryPreferenceStore::seeded(&[
            (KEY_USER_ROLE, "admin"),
            (KEY_USERNAME, "alice"),
            (KEY_IS_LOGGED_IN, "true"),
        ]);
        let session = SessionState::hydrate(&store);
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(session.username(), "alice");
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_hydrate_corrupt_values_coerce_to_defaults() {
        let store = MemoryPreferenceStore::seeded(&[
            (KEY_USER_ROLE, "superadmin"),
            (KEY_IS_LOGGED_IN, "yes"),
        ]);
        let session = SessionState::hydrate(&store);
        assert_eq!(session.role(), Role::Standard);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_initial_render_state_is_store_independent() {
        // Server and client both render this before the mount restores storage
        let persisted = MemoryPreferenceStore::seeded(&[
            (KEY_USER_ROLE, "admin"),
            (KEY_USERNAME, "alice"),
            (KEY_IS_LOGGED_IN, "true"),
        ]);
        let server_render = SessionState::default();
        let client_render = SessionState::default();
        assert_eq!(server_render, client_render);
        assert_eq!(client_render.identity(), &Identity::anonymous());

        let mut mounted = client_render;
        mounted.restore(&persisted);
        assert_eq!(mounted.identity(), &Identity::logged_in("alice", Role::Admin));
        assert_eq!(mounted.generation(), 0);
    }

    #[test]
    fn test_role_check_issued_after_restore_applies() {
        let store = MemoryPreferenceStore::seeded(&[(KEY_USER_ROLE, "admin"), (KEY_USERNAME, "alice")]);
        let mut session = SessionState::default();
        session.restore(&store);

        let ticket = session.begin_role_check();
        assert!(session.apply_role_check(ticket, Role::Standard));
        assert_eq!(session.role(), Role::Standard);
        assert_eq!(session.username(), "alice");
    }

    #[test]
    fn test_login_sets_and_persists_triple() {
        let store = MemoryPreferenceStore::new();
        let mut session = SessionState::hydrate(&store);

        session.login(&store, 7, "alice", Role::Admin);

        assert_eq!(session.identity(), &Identity::logged_in("alice", Role::Admin));
        assert_eq!(store.get(KEY_USER_ROLE).as_deref(), Some("admin"));
        assert_eq!(store.get(KEY_USERNAME).as_deref(), Some("alice"));
        assert_eq!(store.get(KEY_IS_LOGGED_IN).as_deref(), Some("true"));

        let rehydrated = SessionState::hydrate(&store);
        assert_eq!(rehydrated.identity(), session.identity());
    }

    #[test]
    fn test_logout_resets_triple_and_removes_keys() {
        let store = MemoryPreferenceStore::new();
        let mut session = SessionState::hydrate(&store);
        session.login(&store, 7, "alice", Role::Admin);
        store.set("sidebar_minimized", "true", 7).unwrap();

        session.logout(&store);

        assert_eq!(session.role(), Role::Standard);
        assert_eq!(session.username(), "");
        assert!(!session.is_logged_in());
        for key in IDENTITY_KEYS {
            assert_eq!(store.get(key), None, "{} should be removed", key);
        }
        assert_eq!(store.get("sidebar_minimized").as_deref(), Some("true"));
    }

    #[test]
    fn test_role_check_overwrites_only_role() {
        let store = MemoryPreferenceStore::seeded(&[(KEY_USERNAME, "bob"), (KEY_IS_LOGGED_IN, "true")]);
        let mut session = SessionState::hydrate(&store);

        let ticket = session.begin_role_check();
        assert!(session.apply_role_check(ticket, Role::Admin));

        assert_eq!(session.role(), Role::Admin);
        assert_eq!(session.username(), "bob");
        assert!(session.is_logged_in());
        // Authority result is not written back to storage
        assert_eq!(store.get(KEY_USER_ROLE), None);
    }

    #[test]
    fn test_stale_role_check_discarded_after_login() {
        let store = MemoryPreferenceStore::new();
        let mut session = SessionState::hydrate(&store);

        let ticket = session.begin_role_check();
        session.login(&store, 7, "alice", Role::Admin);

        assert!(!session.apply_role_check(ticket, Role::Standard));
        assert_eq!(session.role(), Role::Admin);
    }

    #[test]
    fn test_stale_role_check_discarded_after_logout() {
        let store = MemoryPreferenceStore::seeded(&[(KEY_USER_ROLE, "admin")]);
        let mut session = SessionState::hydrate(&store);

        let ticket = session.begin_role_check();
        session.logout(&store);

        assert!(!session.apply_role_check(ticket, Role::Admin));
        assert_eq!(session.role(), Role::Standard);
    }

    #[tokio::test]
    async fn test_confirm_role_success() {
        let role = confirm_role_from_server(&FixedAuthority(Ok(Role::Admin)), Duration::from_secs(1)).await;
        assert_eq!(role, Role::Admin);
    }

    #[tokio::test]
    async fn test_confirm_role_failure_downgrades() {
        let authority = FixedAuthority(Err(AppError::Network("connection refused".into())));
        let role = confirm_role_from_server(&authority, Duration::from_secs(1)).await;
        assert_eq!(role, Role::Standard);
    }

    #[tokio::test]
    async fn test_confirm_role_non_transient_failure_downgrades() {
        let error = MisconfiguredAuthority.fetch_role().await.unwrap_err();
        assert!(!error.is_transient());

        let role = confirm_role_from_server(&MisconfiguredAuthority, Duration::from_secs(1)).await;
        assert_eq!(role, Role::Standard);
    }

    #[tokio::test]
    async fn test_confirm_role_timeout_downgrades() {
        let role = confirm_role_from_server(&HangingAuthority, Duration::from_millis(20)).await;
        assert_eq!(role, Role::Standard);
    }

    #[tokio::test]
    async fn test_failed_check_downgrades_persisted_admin() {
        let store = MemoryPreferenceStore::seeded(&[(KEY_USER_ROLE, "admin")]);
        let session = Rc::new(RefCell::new(SessionState::hydrate(&store)));
        let authority = FixedAuthority(Err(AppError::Network("offline".into())));

        let ticket = session.borrow().begin_role_check();
        let applied = reconcile_role(ticket, &authority, &AppConfig::default(), |ticket, role| {
            session.borrow_mut().apply_role_check(ticket, role)
        })
        .await;

        assert!(applied);
        assert_eq!(session.borrow().role(), Role::Standard);
    }

    #[tokio::test]
    async fn test_late_role_response_does_not_clobber_login() {
        let store = MemoryPreferenceStore::new();
        let session = Rc::new(RefCell::new(SessionState::hydrate(&store)));
        let (authority, release) = DeferredAuthority::new();
        let config = AppConfig::default();

        let ticket = session.borrow().begin_role_check();
        let check = reconcile_role(ticket, &authority, &config, |ticket, role| {
            session.borrow_mut().apply_role_check(ticket, role)
        });

        let user_flow = async {
            session.borrow_mut().login(&store, 7, "alice", Role::Admin);
            // Authority answers for the pre-login session
            let _ = release.send(Role::Standard);
        };

        let (applied, ()) = futures::join!(check, user_flow);

        assert!(!applied);
        let session = session.borrow();
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(session.username(), "alice");
        assert!(session.is_logged_in());
    }

    #[tokio::test]
    async fn test_delayed_admin_response_upgrades_fresh_session() {
        let store = MemoryPreferenceStore::new();
        let session = Rc::new(RefCell::new(SessionState::hydrate(&store)));
        let (authority, release) = DeferredAuthority::new();
        let config = AppConfig::default();

        let ticket = session.borrow().begin_role_check();
        let check = reconcile_role(ticket, &authority, &config, |ticket, role| {
            session.borrow_mut().apply_role_check(ticket, role)
        });

        let observer = async {
            assert_eq!(session.borrow().role(), Role::Standard);
            let _ = release.send(Role::Admin);
        };

        let (applied, ()) = futures::join!(check, observer);

        assert!(applied);
        assert_eq!(session.borrow().role(), Role::Admin);
    }
}

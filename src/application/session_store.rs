//! Session store - the single owned cell of client session state.
//!
//! Owns the [`Session`] exclusively and exposes it through read
//! projections and four lifecycle mutators: `hydrate` (once, at
//! startup), `login` (wholesale replace), `logout` (wholesale clear),
//! and `update_membership` (flag only). Consumers receive the store as
//! an injected capability rather than reaching for ambient globals.
//!
//! # Persistence
//!
//! State survives restarts via the [`StateStore`] substrate under two
//! fixed keys: the user identity as JSON and the membership flag as the
//! literal string `"true"`/`"false"`.
//!
//! # Trust model
//!
//! Hydration restores the persisted identity verbatim without
//! re-verifying it against the identity service. The persisted state is
//! local to one client, so a tampering client only misleads its own UI;
//! server-side collaborators still enforce their own checks.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::domain::session::{Session, UserIdentity};
use crate::ports::{StateStore, StateStoreError};

/// Persistence key for the signed-in user identity (JSON).
pub const USER_KEY: &str = "session.user";

/// Persistence key for the membership flag (`"true"`/`"false"`).
pub const MEMBERSHIP_KEY: &str = "session.membership_valid";

/// Process-wide session state with persistence.
pub struct SessionStore {
    state: Arc<dyn StateStore>,
    inner: RwLock<Session>,
}

impl SessionStore {
    /// Creates an empty store over the given persistence substrate.
    ///
    /// The session starts empty; call [`SessionStore::hydrate`] once at
    /// startup to restore any previously persisted state.
    pub fn new(state: Arc<dyn StateStore>) -> Self {
        Self {
            state,
            inner: RwLock::new(Session::empty()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Restores a previously persisted session, if one exists.
    ///
    /// An unparsable persisted identity is discarded: the corrupt key is
    /// removed, a warning is logged, and the session stays empty. The
    /// membership flag is restored verbatim alongside the user.
    pub fn hydrate(&self) -> Result<(), StateStoreError> {
        let membership_valid = self
            .state
            .get(MEMBERSHIP_KEY)?
            .is_some_and(|value| value == "true");

        let user = match self.state.get(USER_KEY)? {
            None => None,
            Some(raw) => match serde_json::from_str::<UserIdentity>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(error = %err, "discarding unparsable persisted session");
                    self.state.remove(USER_KEY)?;
                    None
                }
            },
        };

        let mut session = self.write();
        *session = match user {
            Some(user) => {
                debug!(user_id = %user.id, "session hydrated");
                Session::authenticated(user, membership_valid)
            }
            None => {
                let mut empty = Session::empty();
                // The flag is stored independently of the user; keep it
                // in memory so a later read of the raw flag matches disk.
                empty.set_membership_valid(membership_valid);
                empty
            }
        };
        Ok(())
    }

    /// Replaces the session wholesale for a freshly authenticated user
    /// and persists it.
    pub fn login(
        &self,
        user: UserIdentity,
        membership_valid: bool,
    ) -> Result<(), StateStoreError> {
        let serialized = serde_json::to_string(&user)
            .map_err(|e| StateStoreError::Io(e.to_string()))?;

        {
            let mut session = self.write();
            *session = Session::authenticated(user, membership_valid);
        }
        debug!("session replaced on login");

        self.state.put(USER_KEY, &serialized)?;
        self.state
            .put(MEMBERSHIP_KEY, if membership_valid { "true" } else { "false" })
    }

    /// Clears the session wholesale and removes persisted state.
    pub fn logout(&self) -> Result<(), StateStoreError> {
        {
            let mut session = self.write();
            *session = Session::empty();
        }
        debug!("session cleared on logout");

        self.state.remove(USER_KEY)?;
        self.state.remove(MEMBERSHIP_KEY)
    }

    /// Updates only the membership flag, leaving identity untouched,
    /// and persists the new flag.
    ///
    /// When no user is signed in the flag is still stored verbatim (it
    /// grants nothing: derived readers stay false without a user). A
    /// later login passes its own explicit flag and overwrites it.
    pub fn update_membership(&self, valid: bool) -> Result<(), StateStoreError> {
        {
            let mut session = self.write();
            session.set_membership_valid(valid);
        }
        debug!(valid, "membership flag updated");

        self.state
            .put(MEMBERSHIP_KEY, if valid { "true" } else { "false" })
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.read().user().cloned()
    }

    /// Returns true if a user is signed in.
    pub fn is_logged_in(&self) -> bool {
        self.read().is_logged_in()
    }

    /// Returns true if the signed-in user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.read().is_admin()
    }

    /// Returns true if a user is signed in with a valid membership.
    pub fn has_valid_membership(&self) -> bool {
        self.read().has_valid_membership()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStateStore;
    use crate::domain::foundation::UserId;
    use crate::domain::session::UserRole;

    fn member(id: &str) -> UserIdentity {
        UserIdentity::new(UserId::new(id).unwrap(), "Joan", "Clarke", UserRole::Member)
    }

    fn admin(id: &str) -> UserIdentity {
        UserIdentity::new(UserId::new(id).unwrap(), "Radia", "Perlman", UserRole::Admin)
    }

    fn store_over(state: Arc<InMemoryStateStore>) -> SessionStore {
        SessionStore::new(state)
    }

    #[test]
    fn fresh_store_is_empty() {
        let store = store_over(Arc::new(InMemoryStateStore::new()));
        assert!(!store.is_logged_in());
        assert!(!store.is_admin());
        assert!(!store.has_valid_membership());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn login_makes_all_readers_reflect_the_user() {
        let store = store_over(Arc::new(InMemoryStateStore::new()));
        let user = member("u-1");
        store.login(user.clone(), true).unwrap();

        assert!(store.is_logged_in());
        assert!(!store.is_admin());
        assert!(store.has_valid_membership());
        assert_eq!(store.current_user(), Some(user));
    }

    #[test]
    fn logout_clears_everything() {
        let store = store_over(Arc::new(InMemoryStateStore::new()));
        store.login(admin("u-2"), true).unwrap();
        store.logout().unwrap();

        assert!(!store.is_logged_in());
        assert!(!store.is_admin());
        assert!(!store.has_valid_membership());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn logout_removes_persisted_keys() {
        let state = Arc::new(InMemoryStateStore::new());
        let store = store_over(state.clone());
        store.login(member("u-3"), true).unwrap();
        store.logout().unwrap();

        assert_eq!(state.get(USER_KEY).unwrap(), None);
        assert_eq!(state.get(MEMBERSHIP_KEY).unwrap(), None);
    }

    #[test]
    fn update_membership_keeps_identity() {
        let store = store_over(Arc::new(InMemoryStateStore::new()));
        let user = member("u-4");
        store.login(user.clone(), true).unwrap();

        store.update_membership(false).unwrap();
        assert_eq!(store.current_user(), Some(user));
        assert!(!store.has_valid_membership());

        store.update_membership(true).unwrap();
        assert!(store.has_valid_membership());
    }

    #[test]
    fn update_membership_without_user_grants_nothing_but_persists() {
        let state = Arc::new(InMemoryStateStore::new());
        let store = store_over(state.clone());

        store.update_membership(true).unwrap();
        assert!(!store.is_logged_in());
        assert!(!store.has_valid_membership());
        assert_eq!(state.get(MEMBERSHIP_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn membership_flag_is_persisted_as_literal_strings() {
        let state = Arc::new(InMemoryStateStore::new());
        let store = store_over(state.clone());

        store.login(member("u-5"), true).unwrap();
        assert_eq!(state.get(MEMBERSHIP_KEY).unwrap().as_deref(), Some("true"));

        store.update_membership(false).unwrap();
        assert_eq!(state.get(MEMBERSHIP_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn hydrate_restores_a_persisted_session() {
        let state = Arc::new(InMemoryStateStore::new());
        let user = admin("u-6");
        {
            let first = store_over(state.clone());
            first.login(user.clone(), true).unwrap();
        }

        let second = store_over(state);
        second.hydrate().unwrap();
        assert!(second.is_logged_in());
        assert!(second.is_admin());
        assert!(second.has_valid_membership());
        assert_eq!(second.current_user(), Some(user));
    }

    #[test]
    fn hydrate_with_nothing_persisted_stays_empty() {
        let store = store_over(Arc::new(InMemoryStateStore::new()));
        store.hydrate().unwrap();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn hydrate_discards_corrupt_user_record() {
        let state = Arc::new(InMemoryStateStore::new());
        state.put(USER_KEY, "{not valid json").unwrap();
        state.put(MEMBERSHIP_KEY, "true").unwrap();

        let store = store_over(state.clone());
        store.hydrate().unwrap();

        assert!(!store.is_logged_in());
        assert!(!store.has_valid_membership());
        // The corrupt key is gone so the next hydrate is clean.
        assert_eq!(state.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn hydrate_treats_unexpected_flag_values_as_false() {
        let state = Arc::new(InMemoryStateStore::new());
        let user = member("u-7");
        state
            .put(USER_KEY, &serde_json::to_string(&user).unwrap())
            .unwrap();
        state.put(MEMBERSHIP_KEY, "yes please").unwrap();

        let store = store_over(state);
        store.hydrate().unwrap();
        assert!(store.is_logged_in());
        assert!(!store.has_valid_membership());
    }
}

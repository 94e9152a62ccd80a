use crate::{ClientResult, SessionStore};

use std::sync::{PoisonError, RwLock};

use log::info;
use vote_core::{Role, Session};

/// Where a client instance is in its session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

/// The session shared by every view of one client instance.
///
/// Holds at most one session; [`establish`](Self::establish) replaces the
/// previous one unconditionally.
pub struct SessionContext {
    store: Box<dyn SessionStore>,
    state: RwLock<SessionState>,
}

impl SessionContext {
    /// Start anonymous, ignoring anything the store may hold.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            store,
            state: RwLock::new(SessionState::Anonymous),
        }
    }

    /// Start from whatever session the store has persisted.
    pub fn restore(store: Box<dyn SessionStore>) -> ClientResult<Self> {
        let state = match store.load()? {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Anonymous,
        };

        Ok(Self {
            store,
            state: RwLock::new(state),
        })
    }

    /// Persist and activate `session`.
    pub fn establish(&self, session: Session) -> ClientResult<()> {
        self.store.save(&session)?;
        info!("Logged in as {}", session.role);
        *self.state.write().unwrap_or_else(PoisonError::into_inner) =
            SessionState::Authenticated(session);
        Ok(())
    }

    /// Forget the session both in memory and in the store.
    pub fn logout(&self) -> ClientResult<()> {
        self.store.clear()?;
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = SessionState::Anonymous;
        info!("Logged out");
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn session(&self) -> Option<Session> {
        match self.state() {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    pub fn role(&self) -> Option<Role> {
        self.session().map(|s| s.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            *self.state.read().unwrap_or_else(PoisonError::into_inner),
            SessionState::Authenticated(_)
        )
    }
}

use crate::ClientResult;

use vote_core::Session;

/// Durable storage for the single active session.
pub trait SessionStore: Send + Sync {
    /// The persisted session, or `None` if nothing usable is stored
    fn load(&self) -> ClientResult<Option<Session>>;

    /// Persist `session`, replacing whatever was stored before
    fn save(&self, session: &Session) -> ClientResult<()>;

    /// Forget the persisted session. Clearing an empty store is not an error.
    fn clear(&self) -> ClientResult<()>;
}

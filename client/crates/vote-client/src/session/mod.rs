pub(crate) mod file_session_store;
pub(crate) mod memory_session_store;
pub(crate) mod session_context;
pub(crate) mod session_store;

pub use file_session_store::FileSessionStore;
pub use memory_session_store::MemorySessionStore;
pub use session_context::{SessionContext, SessionState};
pub use session_store::SessionStore;

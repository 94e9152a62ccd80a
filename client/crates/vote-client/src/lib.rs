//! vote-client library
//!
//! Client side of the voting application: one HTTP client for the backend,
//! the persisted session, notifications, navigation, and the view models for
//! the auth screens and both dashboards.

pub mod app;
pub mod client;
pub mod navigation;
pub mod notification;
pub mod session;
pub mod view_scope;
pub mod views;


pub use app::App;
pub use client::{
    ApiClient, ClientError, ClientResult, GENERIC_ERROR_MESSAGE, candidates_from_value,
    vote_counts_from_value,
};
pub use navigation::{Navigator, Route};
pub use notification::{MAX_HISTORY, Notification, NotificationCenter, NotificationStatus};
pub use session::{
    FileSessionStore, MemorySessionStore, SessionContext, SessionState, SessionStore,
};
pub use view_scope::{ScopeGuard, ViewScope};
pub use views::{
    AdminDashboard, AuthFlow, PendingRedirect, ViewContext, VoterDashboard,
};

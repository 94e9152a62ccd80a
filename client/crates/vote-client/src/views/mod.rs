pub(crate) mod admin_dashboard;
pub(crate) mod auth_flow;
pub(crate) mod view_context;
pub(crate) mod voter_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use auth_flow::{AuthFlow, PendingRedirect};
pub use view_context::ViewContext;
pub use voter_dashboard::VoterDashboard;

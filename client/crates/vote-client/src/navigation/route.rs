use std::fmt;

use vote_core::Role;

/// The screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Signup,
    Login,
    VoterDashboard,
    AdminDashboard,
}

impl Route {
    pub fn path(&self) -> &str {
        match self {
            Self::Signup => "/signup",
            Self::Login => "/login",
            Self::VoterDashboard => "/VotingPage",
            Self::AdminDashboard => "/VotingPageAdmin",
        }
    }

    /// Dashboard a session with `role` lands on.
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Voter => Self::VoterDashboard,
            Role::Admin => Self::AdminDashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

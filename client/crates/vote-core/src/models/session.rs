use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session: the bearer token and the role it was issued for.
///
/// Token and role are persisted together so a restart keeps role-based routing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, role: Role) -> Self {
        Self {
            token,
            role,
            created_at: Utc::now(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Candidate,
    Recruiter,
    Admin,
}

/// User entity - an account owned by the identity service.
///
/// The services here only read users, to resolve author and candidate names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, unsaved user.
    pub fn new(email: String, name: Option<String>, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: super::UNSAVED_ID,
            email,
            name,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

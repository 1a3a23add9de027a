use super::{Profile, User};

/// Name shown for posts whose author row is gone.
pub const FALLBACK_AUTHOR_NAME: &str = "Unknown User";

/// Display fields of a user, joined from `users` and `profiles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub avatar_url: Option<String>,
}

impl Author {
    pub fn from_parts(user: &User, profile: Option<&Profile>) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            headline: profile.and_then(|p| p.headline.clone()),
            avatar_url: profile.and_then(|p| p.avatar_url.clone()),
        }
    }

    /// Stand-in used when the author row could not be resolved.
    pub fn unknown(user_id: i64) -> Self {
        Self {
            id: user_id,
            name: Some(FALLBACK_AUTHOR_NAME.to_string()),
            headline: None,
            avatar_url: None,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Like entity; at most one per (post, user).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostLike {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl PostLike {
    pub fn new(post_id: i64, user_id: i64) -> Self {
        Self {
            id: super::UNSAVED_ID,
            post_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// State of a (post, user) pair after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    NotLiked,
}

impl LikeState {
    pub fn is_liked(self) -> bool {
        matches!(self, LikeState::Liked)
    }
}

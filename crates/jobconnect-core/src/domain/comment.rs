use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Author;

/// Comment entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: i64, user_id: i64, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: super::UNSAVED_ID,
            post_id,
            user_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A comment joined with its author.
#[derive(Debug, Clone)]
pub struct CommentEntry {
    pub comment: Comment,
    pub author: Option<Author>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Author;

/// Post entity - a status update in the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(user_id: i64, content: String, image_url: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: super::UNSAVED_ID,
            user_id,
            content,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: String,
    pub image_url: Option<String>,
}

/// A post joined with its author; `author` is `None` when the user row is missing.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub post: Post,
    pub author: Option<Author>,
}

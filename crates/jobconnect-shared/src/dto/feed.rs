use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobconnect_core::domain::{Author, NewPost};
use jobconnect_core::services::{CommentView, LikeOutcome, PostView};

/// Request to publish a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub content: String,
    pub image_url: Option<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            content: req.content,
            image_url: req.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub content: String,
}

/// Author summary embedded in every post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i64,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            headline: author.headline,
            avatar_url: author.avatar_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post_id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user: AuthorResponse,
    pub likes_count: u64,
    pub comments_count: u64,
    pub is_liked: bool,
}

impl From<PostView> for PostResponse {
    fn from(view: PostView) -> Self {
        Self {
            post_id: view.post_id,
            content: view.content,
            image_url: view.image_url,
            created_at: view.created_at,
            user: view.author.into(),
            likes_count: view.likes_count,
            comments_count: view.comments_count,
            is_liked: view.liked,
        }
    }
}

/// State of a post's like after a toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub post_id: i64,
    pub liked: bool,
    pub likes_count: u64,
}

impl From<LikeOutcome> for LikeResponse {
    fn from(outcome: LikeOutcome) -> Self {
        Self {
            post_id: outcome.post_id,
            liked: outcome.liked,
            likes_count: outcome.likes_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.id,
            post_id: view.post_id,
            user_id: view.user_id,
            user_name: view.user_name,
            user_avatar: view.user_avatar,
            content: view.content,
            created_at: view.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_response_uses_camel_case() {
        let view = PostView {
            post_id: 3,
            content: "hi".into(),
            image_url: None,
            created_at: Utc::now(),
            author: Author::unknown(9),
            likes_count: 2,
            comments_count: 0,
            liked: true,
        };
        let json = serde_json::to_value(PostResponse::from(view)).unwrap();
        assert_eq!(json["postId"], 3);
        assert_eq!(json["isLiked"], true);
        assert_eq!(json["likesCount"], 2);
        assert_eq!(json["user"]["name"], "Unknown User");
    }

    #[test]
    fn missing_content_defaults_to_empty() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"imageUrl":"a.png"}"#).unwrap();
        assert!(req.content.is_empty());
        assert_eq!(req.image_url.as_deref(), Some("a.png"));
    }
}

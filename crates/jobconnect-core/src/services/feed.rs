//! Feed composition: posts with engagement counts and a per-viewer liked flag.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{Author, Comment, CommentEntry, FeedEntry, NewPost, Post, is_blank};
use crate::error::{DomainError, DomainResult};
use crate::pagination::{Page, PageRequest};
use crate::ports::{CommentRepository, PostLikeRepository, PostRepository};

/// Name shown on comments whose author row is gone.
pub const FALLBACK_COMMENTER_NAME: &str = "User";

/// A post as seen by one viewer.
#[derive(Debug, Clone)]
pub struct PostView {
    pub post_id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author: Author,
    pub likes_count: u64,
    pub comments_count: u64,
    pub liked: bool,
}

#[derive(Debug, Clone)]
pub struct CommentView {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentEntry> for CommentView {
    fn from(entry: CommentEntry) -> Self {
        let CommentEntry { comment, author } = entry;
        let (user_name, user_avatar) = match author {
            Some(author) => (
                author
                    .name
                    .unwrap_or_else(|| FALLBACK_COMMENTER_NAME.to_string()),
                author.avatar_url,
            ),
            None => (FALLBACK_COMMENTER_NAME.to_string(), None),
        };
        Self {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            user_name,
            user_avatar,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// Result of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeOutcome {
    pub post_id: i64,
    pub liked: bool,
    pub likes_count: u64,
}

pub struct FeedService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    likes: Arc<dyn PostLikeRepository>,
}

impl FeedService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        likes: Arc<dyn PostLikeRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            likes,
        }
    }

    /// Newest posts across all authors, as seen by `viewer_id`.
    pub async fn feed(&self, viewer_id: i64, page: PageRequest) -> DomainResult<Page<PostView>> {
        tracing::debug!(viewer_id, page = page.page, size = page.size, "Loading feed");
        let entries = self.posts.find_feed(page).await?;
        self.views(entries, viewer_id).await
    }

    pub async fn user_posts(
        &self,
        author_id: i64,
        viewer_id: i64,
        page: PageRequest,
    ) -> DomainResult<Page<PostView>> {
        let entries = self.posts.find_by_user_id(author_id, page).await?;
        self.views(entries, viewer_id).await
    }

    pub async fn post(&self, post_id: i64, viewer_id: i64) -> DomainResult<PostView> {
        let entry = self
            .posts
            .find_entry(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", post_id))?;
        self.view(entry, viewer_id).await
    }

    pub async fn create_post(&self, author_id: i64, input: NewPost) -> DomainResult<PostView> {
        if is_blank(Some(&input.content)) {
            return Err(DomainError::Validation("Content is required".to_string()));
        }

        let saved = self
            .posts
            .save(Post::new(author_id, input.content, input.image_url))
            .await?;
        tracing::info!(post_id = saved.id, author_id, "Post created");

        // Re-read through the join so the view carries the author.
        self.post(saved.id, author_id).await
    }

    pub async fn delete_post(&self, post_id: i64) -> DomainResult<()> {
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::not_found("Post", post_id));
        }
        self.posts.delete(post_id).await?;
        tracing::info!(post_id, "Post deleted");
        Ok(())
    }

    /// Like the post if `user_id` has not liked it yet, otherwise remove the like.
    pub async fn toggle_like(&self, post_id: i64, user_id: i64) -> DomainResult<LikeOutcome> {
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::not_found("Post", post_id));
        }

        let state = self.likes.toggle(post_id, user_id).await?;
        let likes_count = self.likes.count_by_post(post_id).await?;
        tracing::debug!(post_id, user_id, liked = state.is_liked(), likes_count, "Like toggled");

        Ok(LikeOutcome {
            post_id,
            liked: state.is_liked(),
            likes_count,
        })
    }

    pub async fn add_comment(
        &self,
        post_id: i64,
        user_id: i64,
        content: String,
    ) -> DomainResult<CommentView> {
        if is_blank(Some(&content)) {
            return Err(DomainError::Validation(
                "Comment content cannot be empty".to_string(),
            ));
        }
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::not_found("Post", post_id));
        }

        let saved = self
            .comments
            .save(Comment::new(post_id, user_id, content))
            .await?;
        tracing::info!(comment_id = saved.id, post_id, user_id, "Comment added");

        let entry = self
            .comments
            .find_entry(saved.id)
            .await?
            .unwrap_or(CommentEntry {
                comment: saved,
                author: None,
            });
        Ok(entry.into())
    }

    /// Comments on a post, newest first.
    pub async fn comments(&self, post_id: i64) -> DomainResult<Vec<CommentView>> {
        let entries = self.comments.find_by_post(post_id).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    async fn views(
        &self,
        entries: Page<FeedEntry>,
        viewer_id: i64,
    ) -> DomainResult<Page<PostView>> {
        // Counts are looked up per post; nothing here is cached.
        let mut views = Vec::with_capacity(entries.items.len());
        let Page {
            items,
            page,
            size,
            total_items,
            total_pages,
        } = entries;
        for entry in items {
            views.push(self.view(entry, viewer_id).await?);
        }
        Ok(Page {
            items: views,
            page,
            size,
            total_items,
            total_pages,
        })
    }

    async fn view(&self, entry: FeedEntry, viewer_id: i64) -> DomainResult<PostView> {
        let FeedEntry { post, author } = entry;
        let likes_count = self.likes.count_by_post(post.id).await?;
        let comments_count = self.comments.count_by_post(post.id).await?;
        let liked = self.likes.exists(post.id, viewer_id).await?;

        Ok(PostView {
            post_id: post.id,
            content: post.content,
            image_url: post.image_url,
            created_at: post.created_at,
            author: author.unwrap_or_else(|| Author::unknown(post.user_id)),
            likes_count,
            comments_count,
            liked,
        })
    }
}

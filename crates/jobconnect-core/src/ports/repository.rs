use async_trait::async_trait;

use crate::domain::{
    Application, Comment, CommentEntry, Company, FeedEntry, Job, JobFilter, LikeState, Post,
    Profile, User,
};
use crate::error::RepoError;
use crate::pagination::{Page, PageRequest};

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity: insert when it carries the unsaved id, update otherwise.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] if nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Check whether an entity with this ID exists.
    async fn exists(&self, id: ID) -> Result<bool, RepoError>;
}

/// User repository. Users are read-only from the point of view of these services.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i64> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

#[async_trait]
pub trait ProfileRepository: BaseRepository<Profile, i64> {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Profile>, RepoError>;

    async fn find_page(&self, page: PageRequest) -> Result<Page<Profile>, RepoError>;

    /// Substring search; when both criteria are given a profile must match both.
    async fn search(
        &self,
        skill: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<Profile>, RepoError>;
}

/// Post repository. Reads come back joined with the author.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// All posts, newest first.
    async fn find_feed(&self, page: PageRequest) -> Result<Page<FeedEntry>, RepoError>;

    /// Posts of one author, newest first.
    async fn find_by_user_id(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Page<FeedEntry>, RepoError>;

    async fn find_entry(&self, post_id: i64) -> Result<Option<FeedEntry>, RepoError>;
}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    async fn count_by_post(&self, post_id: i64) -> Result<u64, RepoError>;

    /// Comments on a post joined with their authors, newest first.
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<CommentEntry>, RepoError>;

    async fn find_entry(&self, comment_id: i64) -> Result<Option<CommentEntry>, RepoError>;
}

#[async_trait]
pub trait PostLikeRepository: Send + Sync {
    async fn count_by_post(&self, post_id: i64) -> Result<u64, RepoError>;

    async fn exists(&self, post_id: i64, user_id: i64) -> Result<bool, RepoError>;

    /// Remove the like if present, otherwise insert it, atomically.
    /// Returns the state the pair ends up in.
    async fn toggle(&self, post_id: i64, user_id: i64) -> Result<LikeState, RepoError>;
}

#[async_trait]
pub trait CompanyRepository: BaseRepository<Company, i64> {
    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, RepoError>;

    async fn find_all(&self) -> Result<Vec<Company>, RepoError>;
}

#[async_trait]
pub trait JobRepository: BaseRepository<Job, i64> {
    async fn find_filtered(&self, filter: &JobFilter) -> Result<Vec<Job>, RepoError>;

    async fn find_by_recruiter(&self, recruiter_id: i64) -> Result<Vec<Job>, RepoError>;

    async fn find_by_company(&self, company_id: i64) -> Result<Vec<Job>, RepoError>;

    /// Case-insensitive substring match on title or description.
    async fn search(&self, keyword: &str) -> Result<Vec<Job>, RepoError>;
}

#[async_trait]
pub trait ApplicationRepository: BaseRepository<Application, i64> {
    async fn find_by_job(&self, job_id: i64) -> Result<Vec<Application>, RepoError>;

    async fn find_by_candidate(&self, candidate_id: i64) -> Result<Vec<Application>, RepoError>;

    async fn find_by_job_and_candidate(
        &self,
        job_id: i64,
        candidate_id: i64,
    ) -> Result<Option<Application>, RepoError>;
}

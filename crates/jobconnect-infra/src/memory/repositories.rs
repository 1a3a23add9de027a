use std::cmp::Reverse;
use std::marker::PhantomData;

use async_trait::async_trait;

use jobconnect_core::domain::{
    Application, Author, Comment, CommentEntry, Company, FeedEntry, Job, JobFilter, LikeState,
    Post, PostLike, Profile, User,
};
use jobconnect_core::error::RepoError;
use jobconnect_core::pagination::{Page, PageRequest};
use jobconnect_core::ports::{
    ApplicationRepository, BaseRepository, CommentRepository, CompanyRepository, JobRepository,
    PostLikeRepository, PostRepository, ProfileRepository, UserRepository,
};

use super::store::{InMemoryDatabase, Record, Tables};

/// Generic in-memory repository over one table of an [`InMemoryDatabase`].
pub struct InMemoryRepository<T> {
    db: InMemoryDatabase,
    _record: PhantomData<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }
}

pub type InMemoryUserRepository = InMemoryRepository<User>;
pub type InMemoryProfileRepository = InMemoryRepository<Profile>;
pub type InMemoryPostRepository = InMemoryRepository<Post>;
pub type InMemoryCommentRepository = InMemoryRepository<Comment>;
pub type InMemoryPostLikeRepository = InMemoryRepository<PostLike>;
pub type InMemoryCompanyRepository = InMemoryRepository<Company>;
pub type InMemoryJobRepository = InMemoryRepository<Job>;
pub type InMemoryApplicationRepository = InMemoryRepository<Application>;

#[async_trait]
impl<T: Record> BaseRepository<T, i64> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepoError> {
        Ok(self.db.read(|t| t.get::<T>(id).cloned()).await)
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        self.db.write(|t| t.upsert(entity)).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.db.write(|t| t.remove::<T>(id)).await
    }

    async fn exists(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.db.read(|t| t.get::<T>(id).is_some()).await)
    }
}

impl<T: Record> InMemoryRepository<T> {
    async fn select(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.db
            .read(|t| t.rows::<T>().filter(|r| pred(r)).cloned().collect())
            .await
    }
}

fn author_of(tables: &Tables, user_id: i64) -> Option<Author> {
    let user = tables.get::<User>(user_id)?;
    let profile = tables.rows::<Profile>().find(|p| p.user_id == user_id);
    Some(Author::from_parts(user, profile))
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self.select(|u| u.email == email).await.into_iter().next())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Profile>, RepoError> {
        Ok(self.select(|p| p.user_id == user_id).await.into_iter().next())
    }

    async fn find_page(&self, page: PageRequest) -> Result<Page<Profile>, RepoError> {
        Ok(Page::from_all(self.select(|_| true).await, page))
    }

    async fn search(
        &self,
        skill: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<Profile>, RepoError> {
        Ok(self
            .select(|p| {
                skill.is_none_or(|s| contains_ignore_case(p.skills.as_deref(), s))
                    && location.is_none_or(|l| contains_ignore_case(p.location.as_deref(), l))
            })
            .await)
    }
}

impl InMemoryPostRepository {
    async fn entries(&self, pred: impl Fn(&Post) -> bool) -> Vec<FeedEntry> {
        self.db
            .read(|t| {
                let mut posts: Vec<&Post> = t.rows::<Post>().filter(|p| pred(p)).collect();
                posts.sort_by_key(|p| Reverse((p.created_at, p.id)));
                posts
                    .into_iter()
                    .map(|p| FeedEntry {
                        post: p.clone(),
                        author: author_of(t, p.user_id),
                    })
                    .collect()
            })
            .await
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_feed(&self, page: PageRequest) -> Result<Page<FeedEntry>, RepoError> {
        Ok(Page::from_all(self.entries(|_| true).await, page))
    }

    async fn find_by_user_id(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Page<FeedEntry>, RepoError> {
        Ok(Page::from_all(
            self.entries(|p| p.user_id == user_id).await,
            page,
        ))
    }

    async fn find_entry(&self, post_id: i64) -> Result<Option<FeedEntry>, RepoError> {
        Ok(self.entries(|p| p.id == post_id).await.pop())
    }
}

impl InMemoryCommentRepository {
    async fn entries(&self, pred: impl Fn(&Comment) -> bool) -> Vec<CommentEntry> {
        self.db
            .read(|t| {
                let mut comments: Vec<&Comment> =
                    t.rows::<Comment>().filter(|c| pred(c)).collect();
                comments.sort_by_key(|c| Reverse((c.created_at, c.id)));
                comments
                    .into_iter()
                    .map(|c| CommentEntry {
                        comment: c.clone(),
                        author: author_of(t, c.user_id),
                    })
                    .collect()
            })
            .await
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn count_by_post(&self, post_id: i64) -> Result<u64, RepoError> {
        Ok(self.select(|c| c.post_id == post_id).await.len() as u64)
    }

    async fn find_by_post(&self, post_id: i64) -> Result<Vec<CommentEntry>, RepoError> {
        Ok(self.entries(|c| c.post_id == post_id).await)
    }

    async fn find_entry(&self, comment_id: i64) -> Result<Option<CommentEntry>, RepoError> {
        Ok(self.entries(|c| c.id == comment_id).await.pop())
    }
}

#[async_trait]
impl PostLikeRepository for InMemoryPostLikeRepository {
    async fn count_by_post(&self, post_id: i64) -> Result<u64, RepoError> {
        Ok(self.select(|l| l.post_id == post_id).await.len() as u64)
    }

    async fn exists(&self, post_id: i64, user_id: i64) -> Result<bool, RepoError> {
        Ok(!self
            .select(|l| l.post_id == post_id && l.user_id == user_id)
            .await
            .is_empty())
    }

    async fn toggle(&self, post_id: i64, user_id: i64) -> Result<LikeState, RepoError> {
        // One write lock spans the check and the mutation.
        self.db
            .write(|t| -> Result<LikeState, RepoError> {
                let existing = t
                    .rows::<PostLike>()
                    .find(|l| l.post_id == post_id && l.user_id == user_id)
                    .map(|l| l.id);
                match existing {
                    Some(id) => {
                        t.remove::<PostLike>(id)?;
                        Ok(LikeState::NotLiked)
                    }
                    None => {
                        t.upsert(PostLike::new(post_id, user_id))?;
                        Ok(LikeState::Liked)
                    }
                }
            })
            .await
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, RepoError> {
        Ok(self.select(|c| c.name == name).await.into_iter().next())
    }

    async fn find_all(&self) -> Result<Vec<Company>, RepoError> {
        Ok(self.select(|_| true).await)
    }
}

impl InMemoryJobRepository {
    async fn newest_first(&self, pred: impl Fn(&Job) -> bool) -> Vec<Job> {
        let mut jobs = self.select(pred).await;
        jobs.sort_by_key(|j| Reverse((j.created_at, j.id)));
        jobs
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn find_filtered(&self, filter: &JobFilter) -> Result<Vec<Job>, RepoError> {
        Ok(self.newest_first(|j| j.matches(filter)).await)
    }

    async fn find_by_recruiter(&self, recruiter_id: i64) -> Result<Vec<Job>, RepoError> {
        Ok(self.newest_first(|j| j.recruiter_id == recruiter_id).await)
    }

    async fn find_by_company(&self, company_id: i64) -> Result<Vec<Job>, RepoError> {
        Ok(self.newest_first(|j| j.company_id == company_id).await)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Job>, RepoError> {
        Ok(self.newest_first(|j| j.mentions(keyword)).await)
    }
}

impl InMemoryApplicationRepository {
    async fn newest_first(&self, pred: impl Fn(&Application) -> bool) -> Vec<Application> {
        let mut applications = self.select(pred).await;
        applications.sort_by_key(|a| Reverse((a.applied_at, a.id)));
        applications
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn find_by_job(&self, job_id: i64) -> Result<Vec<Application>, RepoError> {
        Ok(self.newest_first(|a| a.job_id == job_id).await)
    }

    async fn find_by_candidate(&self, candidate_id: i64) -> Result<Vec<Application>, RepoError> {
        Ok(self.newest_first(|a| a.candidate_id == candidate_id).await)
    }

    async fn find_by_job_and_candidate(
        &self,
        job_id: i64,
        candidate_id: i64,
    ) -> Result<Option<Application>, RepoError> {
        Ok(self
            .select(|a| a.job_id == job_id && a.candidate_id == candidate_id)
            .await
            .into_iter()
            .next())
    }
}

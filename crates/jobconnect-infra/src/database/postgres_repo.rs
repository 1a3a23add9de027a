//! PostgreSQL repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr, OnConflict, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DbConn, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use jobconnect_core::domain::{
    Application, Author, CommentEntry, Company, FeedEntry, Job, JobFilter, LikeState, PostLike,
    Profile, User,
};
use jobconnect_core::error::RepoError;
use jobconnect_core::pagination::{Page, PageRequest};
use jobconnect_core::ports::{
    ApplicationRepository, CommentRepository, CompanyRepository, JobRepository,
    PostLikeRepository, PostRepository, ProfileRepository, UserRepository,
};

use super::entity::{application, comment, company, job, post, post_like, profile, user};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

pub type PostgresUserRepository = PostgresBaseRepository<user::Entity>;
pub type PostgresProfileRepository = PostgresBaseRepository<profile::Entity>;
pub type PostgresPostRepository = PostgresBaseRepository<post::Entity>;
pub type PostgresCommentRepository = PostgresBaseRepository<comment::Entity>;
pub type PostgresPostLikeRepository = PostgresBaseRepository<post_like::Entity>;
pub type PostgresCompanyRepository = PostgresBaseRepository<company::Entity>;
pub type PostgresJobRepository = PostgresBaseRepository<job::Entity>;
pub type PostgresApplicationRepository = PostgresBaseRepository<application::Entity>;

/// Lowercased `%needle%` pattern with `\`, `%` and `_` escaped, so the
/// needle only ever matches literally.
pub(crate) fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive substring match on a text column.
fn contains_ignore_case<C>(column: C, needle: &str) -> SimpleExpr
where
    C: ColumnTrait + 'static,
{
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(like_pattern(needle)).escape('\\'))
}

/// Turn joined user rows into authors, pulling headline and avatar from the
/// matching profiles in one extra query.
async fn load_authors(
    db: &DbConn,
    users: impl IntoIterator<Item = user::Model>,
) -> Result<HashMap<i64, Author>, RepoError> {
    let users: HashMap<i64, User> = users.into_iter().map(|u| (u.id, u.into())).collect();
    if users.is_empty() {
        return Ok(HashMap::new());
    }

    let profiles: HashMap<i64, Profile> = profile::Entity::find()
        .filter(profile::Column::UserId.is_in(users.keys().copied()))
        .all(db)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|p| (p.user_id, p.into()))
        .collect();

    Ok(users
        .iter()
        .map(|(id, user)| (*id, Author::from_parts(user, profiles.get(id))))
        .collect())
}

async fn feed_entries(
    db: &DbConn,
    rows: Vec<(post::Model, Option<user::Model>)>,
) -> Result<Vec<FeedEntry>, RepoError> {
    let users: Vec<user::Model> = rows.iter().filter_map(|(_, u)| u.clone()).collect();
    let authors = load_authors(db, users).await?;

    Ok(rows
        .into_iter()
        .map(|(p, _)| FeedEntry {
            author: authors.get(&p.user_id).cloned(),
            post: p.into(),
        })
        .collect())
}

async fn comment_entries(
    db: &DbConn,
    rows: Vec<(comment::Model, Option<user::Model>)>,
) -> Result<Vec<CommentEntry>, RepoError> {
    let users: Vec<user::Model> = rows.iter().filter_map(|(_, u)| u.clone()).collect();
    let authors = load_authors(db, users).await?;

    Ok(rows
        .into_iter()
        .map(|(c, _)| CommentEntry {
            author: authors.get(&c.user_id).cloned(),
            comment: c.into(),
        })
        .collect())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!("Finding user by email");

        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Profile>, RepoError> {
        let result = profile::Entity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_page(&self, page: PageRequest) -> Result<Page<Profile>, RepoError> {
        let paginator = profile::Entity::find()
            .order_by_asc(profile::Column::Id)
            .paginate(&*self.db, page.size);

        let total = paginator.num_items().await.map_err(map_db_err)?;
        let items = paginator.fetch_page(page.page).await.map_err(map_db_err)?;

        Ok(Page::new(
            items.into_iter().map(Into::into).collect(),
            page,
            total,
        ))
    }

    async fn search(
        &self,
        skill: Option<&str>,
        location: Option<&str>,
    ) -> Result<Vec<Profile>, RepoError> {
        let condition = Condition::all()
            .add_option(skill.map(|s| contains_ignore_case(profile::Column::Skills, s)))
            .add_option(location.map(|l| contains_ignore_case(profile::Column::Location, l)));

        let result = profile::Entity::find()
            .filter(condition)
            .order_by_asc(profile::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_feed(&self, page: PageRequest) -> Result<Page<FeedEntry>, RepoError> {
        let paginator = post::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .paginate(&*self.db, page.size);

        let total = paginator.num_items().await.map_err(map_db_err)?;
        let rows = paginator.fetch_page(page.page).await.map_err(map_db_err)?;

        Ok(Page::new(feed_entries(&*self.db, rows).await?, page, total))
    }

    async fn find_by_user_id(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Page<FeedEntry>, RepoError> {
        let paginator = post::Entity::find()
            .filter(post::Column::UserId.eq(user_id))
            .find_also_related(user::Entity)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .paginate(&*self.db, page.size);

        let total = paginator.num_items().await.map_err(map_db_err)?;
        let rows = paginator.fetch_page(page.page).await.map_err(map_db_err)?;

        Ok(Page::new(feed_entries(&*self.db, rows).await?, page, total))
    }

    async fn find_entry(&self, post_id: i64) -> Result<Option<FeedEntry>, RepoError> {
        let row = post::Entity::find_by_id(post_id)
            .find_also_related(user::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match row {
            Some(row) => Ok(feed_entries(&*self.db, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn count_by_post(&self, post_id: i64) -> Result<u64, RepoError> {
        comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn find_by_post(&self, post_id: i64) -> Result<Vec<CommentEntry>, RepoError> {
        let rows = comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .find_also_related(user::Entity)
            .order_by_desc(comment::Column::CreatedAt)
            .order_by_desc(comment::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        comment_entries(&*self.db, rows).await
    }

    async fn find_entry(&self, comment_id: i64) -> Result<Option<CommentEntry>, RepoError> {
        let row = comment::Entity::find_by_id(comment_id)
            .find_also_related(user::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match row {
            Some(row) => Ok(comment_entries(&*self.db, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl PostLikeRepository for PostgresPostLikeRepository {
    async fn count_by_post(&self, post_id: i64) -> Result<u64, RepoError> {
        post_like::Entity::find()
            .filter(post_like::Column::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn exists(&self, post_id: i64, user_id: i64) -> Result<bool, RepoError> {
        let count = post_like::Entity::find()
            .filter(post_like::Column::PostId.eq(post_id))
            .filter(post_like::Column::UserId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn toggle(&self, post_id: i64, user_id: i64) -> Result<LikeState, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let removed = post_like::Entity::delete_many()
            .filter(post_like::Column::PostId.eq(post_id))
            .filter(post_like::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let state = if removed.rows_affected > 0 {
            LikeState::NotLiked
        } else {
            // A concurrent like of the same pair lands on the unique index.
            let like: post_like::ActiveModel = PostLike::new(post_id, user_id).into();
            post_like::Entity::insert(like)
                .on_conflict(
                    OnConflict::columns([post_like::Column::PostId, post_like::Column::UserId])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
            LikeState::Liked
        };

        txn.commit().await.map_err(map_db_err)?;
        tracing::debug!(post_id, user_id, liked = state.is_liked(), "Like toggled");

        Ok(state)
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, RepoError> {
        let result = company::Entity::find()
            .filter(company::Column::Name.eq(name))
            .order_by_asc(company::Column::Id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Company>, RepoError> {
        let result = company::Entity::find()
            .order_by_asc(company::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn find_filtered(&self, filter: &JobFilter) -> Result<Vec<Job>, RepoError> {
        let condition = Condition::all()
            .add_option(
                filter
                    .status
                    .map(|s| job::Column::Status.eq(job::Status::from(s))),
            )
            .add_option(filter.location.as_deref().map(|l| job::Column::Location.eq(l)))
            .add_option(
                filter
                    .employment_type
                    .as_deref()
                    .map(|t| job::Column::EmploymentType.eq(t)),
            )
            .add_option(
                filter
                    .experience_level
                    .as_deref()
                    .map(|e| job::Column::ExperienceLevel.eq(e)),
            );

        let result = job::Entity::find()
            .filter(condition)
            .order_by_desc(job::Column::CreatedAt)
            .order_by_desc(job::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_recruiter(&self, recruiter_id: i64) -> Result<Vec<Job>, RepoError> {
        let result = job::Entity::find()
            .filter(job::Column::RecruiterId.eq(recruiter_id))
            .order_by_desc(job::Column::CreatedAt)
            .order_by_desc(job::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_company(&self, company_id: i64) -> Result<Vec<Job>, RepoError> {
        let result = job::Entity::find()
            .filter(job::Column::CompanyId.eq(company_id))
            .order_by_desc(job::Column::CreatedAt)
            .order_by_desc(job::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Job>, RepoError> {
        let result = job::Entity::find()
            .filter(
                Condition::any()
                    .add(contains_ignore_case(job::Column::Title, keyword))
                    .add(contains_ignore_case(job::Column::Description, keyword)),
            )
            .order_by_desc(job::Column::CreatedAt)
            .order_by_desc(job::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn find_by_job(&self, job_id: i64) -> Result<Vec<Application>, RepoError> {
        let result = application::Entity::find()
            .filter(application::Column::JobId.eq(job_id))
            .order_by_desc(application::Column::AppliedAt)
            .order_by_desc(application::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_candidate(&self, candidate_id: i64) -> Result<Vec<Application>, RepoError> {
        let result = application::Entity::find()
            .filter(application::Column::CandidateId.eq(candidate_id))
            .order_by_desc(application::Column::AppliedAt)
            .order_by_desc(application::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_job_and_candidate(
        &self,
        job_id: i64,
        candidate_id: i64,
    ) -> Result<Option<Application>, RepoError> {
        let result = application::Entity::find()
            .filter(application::Column::JobId.eq(job_id))
            .filter(application::Column::CandidateId.eq(candidate_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

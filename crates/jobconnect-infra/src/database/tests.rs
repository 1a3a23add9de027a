use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::{job, post, user};
use crate::database::postgres_repo::{
    like_pattern, PostgresJobRepository, PostgresPostLikeRepository, PostgresPostRepository,
    PostgresUserRepository,
};
use crate::repositories::{Repositories, StorageKind};
use jobconnect_core::domain::{Job, JobStatus, LikeState, NewJob, Post, Role};
use jobconnect_core::error::RepoError;
use jobconnect_core::ports::{BaseRepository, JobRepository, PostLikeRepository, UserRepository};

fn post_model(id: i64) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        user_id: 7,
        content: "Hello network".to_owned(),
        image_url: None,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(42)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(42).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, 42);
    assert_eq!(post.user_id, 7);
    assert_eq!(post.content, "Hello network");
}

#[tokio::test]
async fn test_save_new_post_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(1)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let saved = repo
        .save(Post::new(7, "Hello network".to_owned(), None))
        .await
        .unwrap();

    assert_eq!(saved.id, 1);
}

#[tokio::test]
async fn test_save_deleted_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let mut post = Post::new(7, "Hello network".to_owned(), None);
    post.id = 42;
    let result = repo.save(post).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<Post, i64>::delete(&repo, 99).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_user_by_email() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: 3,
            email: "ada@example.com".to_owned(),
            name: Some("Ada".to_owned()),
            role: user::Role::Recruiter,
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let user = repo.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.role, Role::Recruiter);
}

#[tokio::test]
async fn test_toggle_removes_existing_like() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostLikeRepository::new(db);

    let state = repo.toggle(1, 2).await.unwrap();
    assert_eq!(state, LikeState::NotLiked);
}

#[tokio::test]
async fn test_toggle_inserts_missing_like() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
            MockExecResult {
                last_insert_id: 5,
                rows_affected: 1,
            },
        ])
        .into_connection();

    let repo = PostgresPostLikeRepository::new(db);

    let state = repo.toggle(1, 2).await.unwrap();
    assert_eq!(state, LikeState::Liked);
}

#[tokio::test]
async fn test_job_status_round_trips_through_entity() {
    let job = Job::new(
        1,
        2,
        "Acme".to_owned(),
        NewJob {
            title: "Backend Engineer".to_owned(),
            description: "Rust services".to_owned(),
            ..Default::default()
        },
    );
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![job::Model {
            id: 10,
            recruiter_id: job.recruiter_id,
            company_id: job.company_id,
            company_name: job.company_name.clone(),
            title: job.title.clone(),
            description: job.description.clone(),
            requirements: None,
            responsibilities: None,
            employment_type: None,
            experience_level: None,
            salary_min: None,
            salary_max: None,
            location: None,
            is_remote: false,
            skills_required: None,
            status: job::Status::Closed,
            expires_at: None,
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresJobRepository::new(db);

    let jobs = repo.search("backend").await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, JobStatus::Closed);
}

#[test]
fn test_like_pattern_escapes_wildcards() {
    assert_eq!(like_pattern("Rust"), "%rust%");
    assert_eq!(like_pattern("50%"), r"%50\%%");
    assert_eq!(like_pattern("snake_case"), r"%snake\_case%");
    assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
}

#[tokio::test]
async fn test_job_search_matches_percent_literally() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<job::Model>::new()])
            .into_connection(),
    );
    let repo = PostgresJobRepository::new(db.clone());

    let jobs = repo.search("%").await.unwrap();
    assert!(jobs.is_empty());

    drop(repo);
    let log = match Arc::try_unwrap(db) {
        Ok(db) => format!("{:?}", db.into_transaction_log()),
        Err(_) => panic!("connection still shared"),
    };
    assert!(log.contains("ESCAPE"));
    assert!(log.contains(r#""%\\%%""#));
}

#[test]
fn test_postgres_repositories_share_one_connection() {
    let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let repos = Repositories::postgres(conn);

    assert_eq!(repos.kind, StorageKind::Postgres);
}

use jobconnect_core::domain::{NewPost, Post, Role, User};
use jobconnect_core::error::{DomainError, RepoError};
use jobconnect_core::pagination::PageRequest;
use jobconnect_core::ports::BaseRepository;
use jobconnect_core::services::FeedService;
use jobconnect_infra::{InMemoryDatabase, Repositories};

async fn setup() -> (FeedService, InMemoryDatabase) {
    let db = InMemoryDatabase::new();
    db.insert_user(User::new(
        "ada@example.com".into(),
        Some("Ada".into()),
        Role::Candidate,
    ))
    .await
    .unwrap();

    let repos = Repositories::in_memory(db.clone());
    let service = FeedService::new(repos.posts, repos.comments, repos.likes);
    (service, db)
}

fn post(content: &str) -> NewPost {
    NewPost {
        content: content.into(),
        image_url: None,
    }
}

#[tokio::test]
async fn feed_is_newest_first_with_authors() {
    let (service, _db) = setup().await;
    service.create_post(1, post("first")).await.unwrap();
    service.create_post(1, post("second")).await.unwrap();
    service.create_post(99, post("ghost")).await.unwrap();

    let page = service.feed(1, PageRequest::new(0, 10)).await.unwrap();
    assert_eq!(page.total_items, 3);
    let contents: Vec<_> = page.items.iter().map(|v| v.content.as_str()).collect();
    assert_eq!(contents, vec!["ghost", "second", "first"]);

    assert_eq!(page.items[1].author.name.as_deref(), Some("Ada"));
    assert_eq!(page.items[0].author.id, 99);
    assert_eq!(page.items[0].author.name.as_deref(), Some("Unknown User"));
}

#[tokio::test]
async fn blank_post_is_rejected() {
    let (service, _db) = setup().await;
    let err = service.create_post(1, post("   ")).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn like_twice_returns_to_baseline() {
    let (service, _db) = setup().await;
    let view = service.create_post(1, post("hello")).await.unwrap();
    service.toggle_like(view.post_id, 2).await.unwrap();

    let liked = service.toggle_like(view.post_id, 1).await.unwrap();
    assert!(liked.liked);
    assert_eq!(liked.likes_count, 2);

    let unliked = service.toggle_like(view.post_id, 1).await.unwrap();
    assert!(!unliked.liked);
    assert_eq!(unliked.likes_count, 1);

    let seen = service.post(view.post_id, 2).await.unwrap();
    assert_eq!(seen.likes_count, 1);
    assert!(seen.liked);
}

#[tokio::test]
async fn like_on_missing_post_is_not_found() {
    let (service, _db) = setup().await;
    let err = service.toggle_like(404, 1).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn comments_are_counted_and_listed_newest_first() {
    let (service, _db) = setup().await;
    let view = service.create_post(1, post("hello")).await.unwrap();

    let first = service
        .add_comment(view.post_id, 1, "nice".into())
        .await
        .unwrap();
    assert_eq!(first.user_name, "Ada");
    let second = service
        .add_comment(view.post_id, 55, "agreed".into())
        .await
        .unwrap();
    assert_eq!(second.user_name, "User");

    let comments = service.comments(view.post_id).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, second.id);

    let reloaded = service.post(view.post_id, 1).await.unwrap();
    assert_eq!(reloaded.comments_count, 2);
}

#[tokio::test]
async fn empty_comment_is_rejected() {
    let (service, _db) = setup().await;
    let view = service.create_post(1, post("hello")).await.unwrap();
    let err = service
        .add_comment(view.post_id, 1, "".into())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn deleting_a_post_drops_its_engagement() {
    let (service, _db) = setup().await;
    let view = service.create_post(1, post("hello")).await.unwrap();
    service.toggle_like(view.post_id, 1).await.unwrap();
    service
        .add_comment(view.post_id, 1, "bye".into())
        .await
        .unwrap();

    service.delete_post(view.post_id).await.unwrap();

    assert!(service.comments(view.post_id).await.unwrap().is_empty());
    let err = service.delete_post(view.post_id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn user_posts_are_paged() {
    let (service, _db) = setup().await;
    for i in 0..5 {
        service.create_post(1, post(&format!("post {i}"))).await.unwrap();
    }
    service.create_post(2, post("other")).await.unwrap();

    let page = service
        .user_posts(1, 1, PageRequest::new(1, 2))
        .await
        .unwrap();
    assert_eq!(page.total_items, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].content, "post 2");
}

#[tokio::test]
async fn user_posts_mark_likes_for_the_viewer() {
    let (service, _db) = setup().await;
    let view = service.create_post(1, post("hiring")).await.unwrap();
    service.toggle_like(view.post_id, 2).await.unwrap();

    let as_liker = service
        .user_posts(1, 2, PageRequest::new(0, 10))
        .await
        .unwrap();
    assert!(as_liker.items[0].liked);
    assert_eq!(as_liker.items[0].likes_count, 1);

    let as_author = service
        .user_posts(1, 1, PageRequest::new(0, 10))
        .await
        .unwrap();
    assert!(!as_author.items[0].liked);
    assert_eq!(as_author.items[0].likes_count, 1);
}

#[tokio::test]
async fn saving_a_deleted_post_is_not_found() {
    let repos = Repositories::in_memory(InMemoryDatabase::new());
    let mut saved = repos
        .posts
        .save(Post::new(1, "draft".into(), None))
        .await
        .unwrap();
    repos.posts.delete(saved.id).await.unwrap();

    saved.content = "edited".into();
    assert!(matches!(
        repos.posts.save(saved.clone()).await,
        Err(RepoError::NotFound)
    ));
    assert!(!repos.posts.exists(saved.id).await.unwrap());
}

use jobconnect_core::domain::{NewProfile, ProfileField, ProfilePatch};
use jobconnect_core::error::DomainError;
use jobconnect_core::pagination::PageRequest;
use jobconnect_core::services::ProfileService;
use jobconnect_infra::{InMemoryDatabase, Repositories};

fn service() -> ProfileService {
    let repos = Repositories::in_memory(InMemoryDatabase::new());
    ProfileService::new(repos.profiles)
}

fn new_profile(user_id: i64) -> NewProfile {
    NewProfile {
        user_id,
        headline: Some("Rust developer".into()),
        bio: Some("Writes services".into()),
        skills: Some(r#"["rust","sql"]"#.into()),
        location: Some("Lisbon".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn second_profile_for_user_conflicts() {
    let service = service();
    service.create_profile(new_profile(1)).await.unwrap();

    let err = service.create_profile(new_profile(1)).await.unwrap_err();
    match err {
        DomainError::InvalidState(msg) => assert_eq!(msg, "Profile already exists for this user"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn partial_update_keeps_missing_fields() {
    let service = service();
    let created = service.create_profile(new_profile(1)).await.unwrap();

    let updated = service
        .update_profile(
            created.id,
            ProfilePatch {
                headline: Some("Staff engineer".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.headline.as_deref(), Some("Staff engineer"));
    assert_eq!(updated.bio.as_deref(), Some("Writes services"));
    assert_eq!(updated.location.as_deref(), Some("Lisbon"));
}

#[tokio::test]
async fn field_update_can_clear() {
    let service = service();
    let created = service.create_profile(new_profile(1)).await.unwrap();

    let updated = service
        .update_field(created.id, ProfileField::Bio(None))
        .await
        .unwrap();
    assert!(updated.bio.is_none());
    assert_eq!(updated.headline.as_deref(), Some("Rust developer"));
}

#[tokio::test]
async fn lookup_by_user_and_paging() {
    let service = service();
    for user_id in 1..=3 {
        service.create_profile(new_profile(user_id)).await.unwrap();
    }

    let profile = service.profile_by_user(2).await.unwrap();
    assert_eq!(profile.user_id, 2);
    assert!(matches!(
        service.profile_by_user(9).await,
        Err(DomainError::NotFoundBy { .. })
    ));

    let page = service.profiles(PageRequest::new(1, 2)).await.unwrap();
    assert_eq!(page.total_items, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].user_id, 3);
}

#[tokio::test]
async fn search_combines_skill_and_location() {
    let service = service();
    service.create_profile(new_profile(1)).await.unwrap();
    service
        .create_profile(NewProfile {
            location: Some("Porto".into()),
            ..new_profile(2)
        })
        .await
        .unwrap();

    assert_eq!(service.profiles_by_skill("RUST").await.unwrap().len(), 2);
    assert_eq!(service.profiles_by_location("lisbon").await.unwrap().len(), 1);
    let both = service
        .search_profiles(Some("sql"), Some("Porto"))
        .await
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].user_id, 2);
}

#[tokio::test]
async fn deleting_missing_profile_is_not_found() {
    let service = service();
    assert!(matches!(
        service.delete_profile(3).await,
        Err(DomainError::NotFound { .. })
    ));
}

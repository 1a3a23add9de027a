use jobconnect_core::domain::{
    ApplicationStatus, JobFilter, JobPatch, JobStatus, NewApplication, NewCompany, NewJob, Role,
    User,
};
use jobconnect_core::error::DomainError;
use jobconnect_core::services::{ApplicationService, CompanyService, JobService};
use jobconnect_infra::{InMemoryDatabase, Repositories};

struct Services {
    jobs: JobService,
    companies: CompanyService,
    applications: ApplicationService,
}

async fn setup() -> Services {
    let db = InMemoryDatabase::new();
    db.insert_user(User::new(
        "grace@example.com".into(),
        Some("Grace".into()),
        Role::Candidate,
    ))
    .await
    .unwrap();

    let repos = Repositories::in_memory(db);
    Services {
        jobs: JobService::new(
            repos.jobs.clone(),
            repos.companies.clone(),
            repos.applications.clone(),
            repos.users.clone(),
        ),
        companies: CompanyService::new(repos.companies.clone(), repos.jobs.clone()),
        applications: ApplicationService::new(repos.applications, repos.jobs, repos.users),
    }
}

fn new_job(title: &str) -> NewJob {
    NewJob {
        company_name: Some("Acme".into()),
        title: title.into(),
        description: "Ship backend services".into(),
        location: Some("Berlin".into()),
        employment_type: Some("FULL_TIME".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn job_without_company_is_rejected() {
    let s = setup().await;
    let err = s
        .jobs
        .create_job(
            7,
            NewJob {
                title: "Engineer".into(),
                description: "Build".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn company_name_is_reused_or_auto_created() {
    let s = setup().await;
    let first = s.jobs.create_job(7, new_job("Engineer")).await.unwrap();
    let second = s.jobs.create_job(7, new_job("Designer")).await.unwrap();
    assert_eq!(first.job.company_id, second.job.company_id);
    assert_eq!(first.job.status, JobStatus::Active);
    assert!(!first.job.is_remote);

    let company = s.companies.company(first.job.company_id).await.unwrap();
    assert_eq!(company.description.as_deref(), Some("Auto-created company"));
    assert_eq!(s.companies.company_jobs(company.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_company_id_is_not_found() {
    let s = setup().await;
    let input = NewJob {
        company_id: Some(42),
        ..new_job("Engineer")
    };
    let err = s.jobs.create_job(7, input).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn job_view_carries_company_logo() {
    let s = setup().await;
    let company = s
        .companies
        .create_company(NewCompany {
            name: "Globex".into(),
            logo_url: Some("https://cdn.example.com/globex.png".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let input = NewJob {
        company_id: Some(company.id),
        company_name: None,
        ..new_job("Engineer")
    };
    let created = s.jobs.create_job(7, input).await.unwrap();
    assert_eq!(created.job.company_name, "Globex");

    let fetched = s.jobs.job(created.job.id).await.unwrap();
    assert_eq!(
        fetched.company_logo_url.as_deref(),
        Some("https://cdn.example.com/globex.png")
    );
}

#[tokio::test]
async fn filters_combine_and_search_ignores_case() {
    let s = setup().await;
    let engineer = s.jobs.create_job(7, new_job("Rust Engineer")).await.unwrap();
    s.jobs
        .create_job(
            7,
            NewJob {
                location: Some("Paris".into()),
                ..new_job("Designer")
            },
        )
        .await
        .unwrap();
    s.jobs.close_job(engineer.job.id).await.unwrap();

    let berlin_active = s
        .jobs
        .list_jobs(&JobFilter {
            status: Some(JobStatus::Active),
            location: Some("Berlin".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(berlin_active.is_empty());

    let hits = s.jobs.search_jobs("rust").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert!(matches!(
        s.jobs.search_jobs("  ").await,
        Err(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn update_applies_only_provided_fields() {
    let s = setup().await;
    let created = s.jobs.create_job(7, new_job("Engineer")).await.unwrap();
    let updated = s
        .jobs
        .update_job(
            created.job.id,
            JobPatch {
                is_remote: Some(true),
                status: Some(JobStatus::Closed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.job.is_remote);
    assert_eq!(updated.job.status, JobStatus::Closed);
    assert_eq!(updated.job.title, "Engineer");
    assert_eq!(updated.job.location.as_deref(), Some("Berlin"));
}

#[tokio::test]
async fn update_rejects_blank_title_or_description() {
    let s = setup().await;
    let created = s.jobs.create_job(7, new_job("Engineer")).await.unwrap();

    for patch in [
        JobPatch {
            title: Some("   ".into()),
            ..Default::default()
        },
        JobPatch {
            description: Some(String::new()),
            ..Default::default()
        },
    ] {
        assert!(matches!(
            s.jobs.update_job(created.job.id, patch).await,
            Err(DomainError::Validation(_))
        ));
    }

    let unchanged = s.jobs.job(created.job.id).await.unwrap();
    assert_eq!(unchanged.job.title, "Engineer");
    assert_eq!(unchanged.job.description, "Ship backend services");
}

#[tokio::test]
async fn search_treats_percent_literally() {
    let s = setup().await;
    s.jobs.create_job(7, new_job("50% remote engineer")).await.unwrap();
    s.jobs.create_job(7, new_job("Office engineer")).await.unwrap();

    let hits = s.jobs.search_jobs("%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].job.title, "50% remote engineer");
}

#[tokio::test]
async fn applying_twice_conflicts() {
    let s = setup().await;
    let job = s.jobs.create_job(7, new_job("Engineer")).await.unwrap();
    let input = NewApplication {
        job_id: job.job.id,
        candidate_id: 1,
        resume_url: None,
        cover_letter: Some("Hire me".into()),
    };

    let first = s.applications.apply(input.clone()).await.unwrap();
    assert_eq!(first.application.status, ApplicationStatus::Pending);
    assert_eq!(first.candidate_name.as_deref(), Some("Grace"));
    assert_eq!(first.job_title.as_deref(), Some("Engineer"));

    let err = s.applications.apply(input).await.unwrap_err();
    assert!(matches!(err, DomainError::Duplicate(_)));

    let listed = s.jobs.job_applications(job.job.id).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn applying_to_missing_job_is_not_found() {
    let s = setup().await;
    let err = s
        .applications
        .apply(NewApplication {
            job_id: 9,
            candidate_id: 1,
            resume_url: None,
            cover_letter: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn status_update_and_withdraw() {
    let s = setup().await;
    let job = s.jobs.create_job(7, new_job("Engineer")).await.unwrap();
    let applied = s
        .applications
        .apply(NewApplication {
            job_id: job.job.id,
            candidate_id: 1,
            resume_url: None,
            cover_letter: None,
        })
        .await
        .unwrap();
    let id = applied.application.id;

    let shortlisted = s
        .applications
        .update_status(id, ApplicationStatus::Shortlisted)
        .await
        .unwrap();
    assert_eq!(shortlisted.application.status, ApplicationStatus::Shortlisted);

    s.applications.withdraw(id).await.unwrap();
    assert!(matches!(
        s.applications.withdraw(id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn deleting_missing_rows_is_not_found() {
    let s = setup().await;
    assert!(matches!(
        s.jobs.delete_job(5).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        s.companies.delete_company(5).await,
        Err(DomainError::NotFound { .. })
    ));
}

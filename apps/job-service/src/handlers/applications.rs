//! Job application endpoints.

use actix_web::{HttpResponse, web};

use jobconnect_core::services::ApplicationView;
use jobconnect_shared::ApiResponse;
use jobconnect_shared::dto::job::{
    ApplicationResponse, CreateApplicationRequest, StatusUpdateRequest,
};
use jobconnect_web::{AppResult, ViewerId};

use crate::state::AppState;

fn application_list(views: Vec<ApplicationView>) -> Vec<ApplicationResponse> {
    views.into_iter().map(Into::into).collect()
}

/// POST /api/applications
pub async fn apply(
    state: web::Data<AppState>,
    viewer: ViewerId,
    body: web::Json<CreateApplicationRequest>,
) -> AppResult<HttpResponse> {
    let view = state
        .applications
        .apply(body.into_inner().into_new(viewer.0))
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        ApplicationResponse::from(view),
        "Application submitted successfully",
    )))
}

/// GET /api/applications/job/{job_id}
pub async fn by_job(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let views = state
        .applications
        .applications_by_job(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(application_list(views))))
}

/// GET /api/applications/candidate/{candidate_id}
pub async fn by_candidate(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let views = state
        .applications
        .applications_by_candidate(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(application_list(views))))
}

/// GET /api/applications/{id}
pub async fn application(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let view = state.applications.application(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(ApplicationResponse::from(view))))
}

/// PATCH /api/applications/{id}/status
pub async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<StatusUpdateRequest>,
) -> AppResult<HttpResponse> {
    let view = state
        .applications
        .update_status(path.into_inner(), body.status)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        ApplicationResponse::from(view),
        "Application status updated",
    )))
}

/// DELETE /api/applications/{id}
pub async fn withdraw(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.applications.withdraw(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use jobconnect_core::domain::{Role, User};
    use jobconnect_infra::{InMemoryDatabase, Repositories};
    use jobconnect_web::configure_common;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    async fn seeded_state() -> AppState {
        let db = InMemoryDatabase::new();
        db.insert_user(User::new(
            "grace@example.com".into(),
            Some("Grace".into()),
            Role::Candidate,
        ))
        .await
        .unwrap();
        AppState::new(&Repositories::in_memory(db))
    }

    macro_rules! app {
        ($state:expr) => {{
            let state = $state;
            test::init_service(
                App::new()
                    .configure(configure_common)
                    .configure(move |cfg| configure_routes(cfg, state)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn apply_once_then_conflict() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/jobs")
            .insert_header(("X-User-Id", "9"))
            .set_json(json!({
                "companyName": "Acme",
                "jobTitle": "Platform Engineer",
                "description": "Keep the lights on"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let job_id = body["data"]["jobId"].as_i64().unwrap();

        let apply = || {
            test::TestRequest::post()
                .uri("/api/applications")
                .set_json(json!({"jobId": job_id, "coverLetter": "Hello"}))
                .to_request()
        };

        let res = test::call_service(&app, apply()).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["candidateId"], 1);
        assert_eq!(body["data"]["candidateName"], "Grace");
        assert_eq!(body["data"]["candidateEmail"], "grace@example.com");
        assert_eq!(body["data"]["jobTitle"], "Platform Engineer");
        assert_eq!(body["data"]["status"], "PENDING");

        let res = test::call_service(&app, apply()).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/jobs/{job_id}/applications"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn applying_to_missing_job_is_not_found() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/applications")
            .set_json(json!({"jobId": 77}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn status_update_and_withdraw() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/jobs")
            .set_json(json!({
                "companyName": "Acme",
                "jobTitle": "QA",
                "description": "Break things"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let job_id = body["data"]["jobId"].as_i64().unwrap();

        let req = test::TestRequest::post()
            .uri("/api/applications")
            .set_json(json!({"jobId": job_id, "candidateId": 1}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let application_id = body["data"]["applicationId"].as_i64().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/applications/{application_id}/status"))
            .set_json(json!({"status": "SHORTLISTED"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["status"], "SHORTLISTED");

        let req = test::TestRequest::patch()
            .uri(&format!("/api/applications/{application_id}/status"))
            .set_json(json!({"status": "MAYBE"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );

        let req = test::TestRequest::get()
            .uri("/api/applications/candidate/1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["applicationId"], application_id);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/applications/{application_id}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::get()
            .uri(&format!("/api/applications/{application_id}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}

//! Company endpoints.

use actix_web::{HttpResponse, web};

use jobconnect_shared::ApiResponse;
use jobconnect_shared::dto::job::{
    CompanyResponse, CreateCompanyRequest, JobResponse, UpdateCompanyRequest,
};
use jobconnect_web::AppResult;

use crate::state::AppState;

/// POST /api/companies (also /api/companies/createCompany)
pub async fn create_company(
    state: web::Data<AppState>,
    body: web::Json<CreateCompanyRequest>,
) -> AppResult<HttpResponse> {
    let company = state
        .companies
        .create_company(body.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        CompanyResponse::from(company),
        "Company created successfully",
    )))
}

/// GET /api/companies
pub async fn companies(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let companies: Vec<CompanyResponse> = state
        .companies
        .companies()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(companies)))
}

/// GET /api/companies/{id}
pub async fn company(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let company = state.companies.company(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(CompanyResponse::from(company))))
}

/// PUT /api/companies/{id}
pub async fn update_company(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateCompanyRequest>,
) -> AppResult<HttpResponse> {
    let company = state
        .companies
        .update_company(path.into_inner(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        CompanyResponse::from(company),
        "Company updated successfully",
    )))
}

/// DELETE /api/companies/{id}
pub async fn delete_company(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.companies.delete_company(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/companies/{id}/jobs
pub async fn company_jobs(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let jobs: Vec<JobResponse> = state
        .companies
        .company_jobs(path.into_inner())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(jobs)))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use jobconnect_infra::{InMemoryDatabase, Repositories};
    use jobconnect_web::configure_common;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! app {
        () => {{
            let state = AppState::new(&Repositories::in_memory(InMemoryDatabase::new()));
            test::init_service(
                App::new()
                    .configure(configure_common)
                    .configure(move |cfg| configure_routes(cfg, state)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn create_alias_update_and_list_jobs() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/companies/createCompany")
            .set_json(json!({"name": "Globex", "logoUrl": "https://cdn.example.com/g.png"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        let company_id = body["data"]["companyId"].as_i64().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/api/companies/{company_id}"))
            .set_json(json!({"industry": "Energy"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["industry"], "Energy");
        assert_eq!(body["data"]["name"], "Globex");

        let req = test::TestRequest::post()
            .uri("/api/jobs")
            .set_json(json!({
                "companyId": company_id,
                "jobTitle": "Analyst",
                "description": "Numbers"
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );

        let req = test::TestRequest::get()
            .uri(&format!("/api/companies/{company_id}/jobs"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["jobTitle"], "Analyst");
        assert_eq!(
            body["data"][0]["companyLogoUrl"],
            "https://cdn.example.com/g.png"
        );
    }

    #[actix_web::test]
    async fn blank_name_is_bad_request() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/companies")
            .set_json(json!({"name": ""}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn company_with_jobs_cannot_be_deleted() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/jobs")
            .set_json(json!({
                "companyName": "Initech",
                "jobTitle": "Engineer",
                "description": "TPS reports"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let company_id = body["data"]["companyId"].as_i64().unwrap();
        let job_id = body["data"]["jobId"].as_i64().unwrap();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/companies/{company_id}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CONFLICT
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/api/jobs/{job_id}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/api/companies/{company_id}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );
    }
}

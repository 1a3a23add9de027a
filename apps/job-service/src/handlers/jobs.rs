//! Job posting endpoints.

use actix_web::{HttpResponse, web};

use jobconnect_core::domain::JobFilter;
use jobconnect_core::services::JobView;
use jobconnect_shared::ApiResponse;
use jobconnect_shared::dto::job::{
    ApplicationResponse, CreateJobRequest, JobFilterQuery, JobResponse, SearchQuery,
    UpdateJobRequest,
};
use jobconnect_web::{AppResult, ViewerId};

use crate::state::AppState;

fn job_list(views: Vec<JobView>) -> Vec<JobResponse> {
    views.into_iter().map(Into::into).collect()
}

/// POST /api/jobs
pub async fn create_job(
    state: web::Data<AppState>,
    viewer: ViewerId,
    body: web::Json<CreateJobRequest>,
) -> AppResult<HttpResponse> {
    let (recruiter_id, input) = body.into_inner().into_parts(viewer.0);
    let view = state.jobs.create_job(recruiter_id, input).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        JobResponse::from(view),
        "Job created successfully",
    )))
}

/// GET /api/jobs?status=&location=&employmentType=&experienceLevel=
pub async fn list_jobs(
    state: web::Data<AppState>,
    query: web::Query<JobFilterQuery>,
) -> AppResult<HttpResponse> {
    let filter = JobFilter::try_from(query.into_inner())?;
    let jobs = state.jobs.list_jobs(&filter).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(job_list(jobs))))
}

/// GET /api/jobs/search?keyword=
pub async fn search_jobs(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let jobs = state.jobs.search_jobs(&query.keyword).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(job_list(jobs))))
}

/// GET /api/jobs/recruiter/{recruiter_id}
pub async fn jobs_by_recruiter(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let jobs = state.jobs.jobs_by_recruiter(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(job_list(jobs))))
}

/// GET /api/jobs/{id}
pub async fn job(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let view = state.jobs.job(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(JobResponse::from(view))))
}

/// PUT /api/jobs/{id}
pub async fn update_job(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateJobRequest>,
) -> AppResult<HttpResponse> {
    let view = state
        .jobs
        .update_job(path.into_inner(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        JobResponse::from(view),
        "Job updated successfully",
    )))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.jobs.delete_job(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PATCH /api/jobs/{id}/close
pub async fn close_job(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let view = state.jobs.close_job(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        JobResponse::from(view),
        "Job closed successfully",
    )))
}

/// GET /api/jobs/{id}/applications
pub async fn job_applications(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let applications: Vec<ApplicationResponse> = state
        .jobs
        .job_applications(path.into_inner())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(applications)))
}

//! HTTP handlers and route configuration.

mod applications;
mod companies;
mod jobs;

use actix_web::web;

use crate::state::AppState;

/// Configure the `/api/jobs`, `/api/companies` and `/api/applications` routes.
///
/// Literal segments are registered ahead of `/{id}` so they win the match.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::Data::new(state))
        .service(
            web::scope("/api/jobs")
                .route("", web::post().to(jobs::create_job))
                .route("", web::get().to(jobs::list_jobs))
                .route("/", web::post().to(jobs::create_job))
                .route("/", web::get().to(jobs::list_jobs))
                .route("/search", web::get().to(jobs::search_jobs))
                .route("/recruiter/{recruiter_id}", web::get().to(jobs::jobs_by_recruiter))
                .route("/{id}", web::get().to(jobs::job))
                .route("/{id}", web::put().to(jobs::update_job))
                .route("/{id}", web::delete().to(jobs::delete_job))
                .route("/{id}/close", web::patch().to(jobs::close_job))
                .route("/{id}/applications", web::get().to(jobs::job_applications)),
        )
        .service(
            web::scope("/api/companies")
                .route("", web::post().to(companies::create_company))
                .route("", web::get().to(companies::companies))
                .route("/", web::post().to(companies::create_company))
                .route("/", web::get().to(companies::companies))
                .route("/createCompany", web::post().to(companies::create_company))
                .route("/{id}", web::get().to(companies::company))
                .route("/{id}", web::put().to(companies::update_company))
                .route("/{id}", web::delete().to(companies::delete_company))
                .route("/{id}/jobs", web::get().to(companies::company_jobs)),
        )
        .service(
            web::scope("/api/applications")
                .route("", web::post().to(applications::apply))
                .route("/", web::post().to(applications::apply))
                .route("/job/{job_id}", web::get().to(applications::by_job))
                .route(
                    "/candidate/{candidate_id}",
                    web::get().to(applications::by_candidate),
                )
                .route("/{id}", web::get().to(applications::application))
                .route("/{id}", web::delete().to(applications::withdraw))
                .route("/{id}/status", web::patch().to(applications::update_status)),
        );
}

//! Application state - shared across all handlers.

use std::sync::Arc;

use jobconnect_core::services::{ApplicationService, CompanyService, JobService};
use jobconnect_infra::Repositories;

#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<JobService>,
    pub companies: Arc<CompanyService>,
    pub applications: Arc<ApplicationService>,
}

impl AppState {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            jobs: Arc::new(JobService::new(
                repos.jobs.clone(),
                repos.companies.clone(),
                repos.applications.clone(),
                repos.users.clone(),
            )),
            companies: Arc::new(CompanyService::new(
                repos.companies.clone(),
                repos.jobs.clone(),
            )),
            applications: Arc::new(ApplicationService::new(
                repos.applications.clone(),
                repos.jobs.clone(),
                repos.users.clone(),
            )),
        }
    }
}

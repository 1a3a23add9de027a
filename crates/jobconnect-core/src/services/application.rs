use std::sync::Arc;

use crate::domain::{Application, ApplicationStatus, Job, NewApplication, User};
use crate::error::{DomainError, DomainResult, RepoError};
use crate::ports::{ApplicationRepository, JobRepository, UserRepository};

/// An application with the job and candidate details a recruiter needs.
#[derive(Debug, Clone)]
pub struct ApplicationView {
    pub application: Application,
    pub job_title: Option<String>,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
}

pub(crate) fn application_view(
    application: Application,
    job: Option<&Job>,
    candidate: Option<&User>,
) -> ApplicationView {
    ApplicationView {
        application,
        job_title: job.map(|j| j.title.clone()),
        candidate_name: candidate.and_then(|u| u.name.clone()),
        candidate_email: candidate.map(|u| u.email.clone()),
    }
}

pub struct ApplicationService {
    applications: Arc<dyn ApplicationRepository>,
    jobs: Arc<dyn JobRepository>,
    users: Arc<dyn UserRepository>,
}

impl ApplicationService {
    pub fn new(
        applications: Arc<dyn ApplicationRepository>,
        jobs: Arc<dyn JobRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            applications,
            jobs,
            users,
        }
    }

    /// Submit an application. A candidate may apply to a job only once.
    pub async fn apply(&self, input: NewApplication) -> DomainResult<ApplicationView> {
        if self.jobs.find_by_id(input.job_id).await?.is_none() {
            return Err(DomainError::not_found("Job", input.job_id));
        }
        if self
            .applications
            .find_by_job_and_candidate(input.job_id, input.candidate_id)
            .await?
            .is_some()
        {
            return Err(already_applied());
        }

        // A concurrent apply can still slip past the check above; the unique
        // (job_id, candidate_id) constraint turns it into the same conflict.
        let saved = match self.applications.save(Application::new(input)).await {
            Ok(saved) => saved,
            Err(RepoError::Constraint(_)) => return Err(already_applied()),
            Err(e) => return Err(e.into()),
        };
        tracing::info!(
            application_id = saved.id,
            job_id = saved.job_id,
            candidate_id = saved.candidate_id,
            "Application submitted"
        );
        self.view(saved).await
    }

    pub async fn applications_by_job(&self, job_id: i64) -> DomainResult<Vec<ApplicationView>> {
        let applications = self.applications.find_by_job(job_id).await?;
        self.views(applications).await
    }

    pub async fn applications_by_candidate(
        &self,
        candidate_id: i64,
    ) -> DomainResult<Vec<ApplicationView>> {
        let applications = self.applications.find_by_candidate(candidate_id).await?;
        self.views(applications).await
    }

    pub async fn application(&self, id: i64) -> DomainResult<ApplicationView> {
        let application = self.find(id).await?;
        self.view(application).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> DomainResult<ApplicationView> {
        let mut application = self.find(id).await?;
        application.set_status(status);
        let saved = self.applications.save(application).await?;
        tracing::info!(application_id = id, status = status.as_str(), "Application status updated");
        self.view(saved).await
    }

    /// Withdraw an application. The row is deleted outright.
    pub async fn withdraw(&self, id: i64) -> DomainResult<()> {
        if !self.applications.exists(id).await? {
            return Err(DomainError::not_found("Application", id));
        }
        self.applications.delete(id).await?;
        tracing::info!(application_id = id, "Application withdrawn");
        Ok(())
    }

    async fn find(&self, id: i64) -> DomainResult<Application> {
        self.applications
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Application", id))
    }

    async fn view(&self, application: Application) -> DomainResult<ApplicationView> {
        let job = self.jobs.find_by_id(application.job_id).await?;
        let candidate = self.users.find_by_id(application.candidate_id).await?;
        Ok(application_view(
            application,
            job.as_ref(),
            candidate.as_ref(),
        ))
    }

    async fn views(&self, applications: Vec<Application>) -> DomainResult<Vec<ApplicationView>> {
        let mut views = Vec::with_capacity(applications.len());
        for application in applications {
            views.push(self.view(application).await?);
        }
        Ok(views)
    }
}

fn already_applied() -> DomainError {
    DomainError::Duplicate("You have already applied for this job".to_string())
}

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Company, Job, JobFilter, JobPatch, JobStatus, NewJob, is_blank};
use crate::error::{DomainError, DomainResult};
use crate::ports::{ApplicationRepository, CompanyRepository, JobRepository, UserRepository};

use super::application::{ApplicationView, application_view};

/// A job together with the company details shown next to it.
#[derive(Debug, Clone)]
pub struct JobView {
    pub job: Job,
    pub company_logo_url: Option<String>,
}

/// Attach company details from `companies`; jobs whose company is absent keep
/// their denormalized name and get no logo.
pub(crate) fn job_views(jobs: Vec<Job>, companies: &[Company]) -> Vec<JobView> {
    let by_id: HashMap<i64, &Company> = companies.iter().map(|c| (c.id, c)).collect();
    jobs.into_iter()
        .map(|mut job| {
            let company = by_id.get(&job.company_id);
            if let Some(company) = company {
                job.company_name = company.name.clone();
            }
            JobView {
                company_logo_url: company.and_then(|c| c.logo_url.clone()),
                job,
            }
        })
        .collect()
}

pub struct JobService {
    jobs: Arc<dyn JobRepository>,
    companies: Arc<dyn CompanyRepository>,
    applications: Arc<dyn ApplicationRepository>,
    users: Arc<dyn UserRepository>,
}

impl JobService {
    pub fn new(
        jobs: Arc<dyn JobRepository>,
        companies: Arc<dyn CompanyRepository>,
        applications: Arc<dyn ApplicationRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            jobs,
            companies,
            applications,
            users,
        }
    }

    /// Post a job. The company is taken from `company_id` when given; otherwise
    /// it is looked up by `company_name` and created if unknown.
    pub async fn create_job(&self, recruiter_id: i64, input: NewJob) -> DomainResult<JobView> {
        if is_blank(Some(&input.title)) {
            return Err(DomainError::Validation("Job title is required".to_string()));
        }
        if is_blank(Some(&input.description)) {
            return Err(DomainError::Validation(
                "Job description is required".to_string(),
            ));
        }

        let company = self.resolve_company(&input).await?;
        let job = Job::new(recruiter_id, company.id, company.name.clone(), input);
        let saved = self.jobs.save(job).await?;
        tracing::info!(
            job_id = saved.id,
            company_id = company.id,
            recruiter_id,
            "Job created"
        );

        Ok(JobView {
            company_logo_url: company.logo_url,
            job: saved,
        })
    }

    async fn resolve_company(&self, input: &NewJob) -> DomainResult<Company> {
        if let Some(company_id) = input.company_id {
            return self
                .companies
                .find_by_id(company_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Company", company_id));
        }

        match input.company_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                if let Some(existing) = self.companies.find_by_name(name).await? {
                    return Ok(existing);
                }
                let created = self
                    .companies
                    .save(Company::auto_created(name.to_string()))
                    .await?;
                tracing::info!(company_id = created.id, name, "Company auto-created for job");
                Ok(created)
            }
            _ => Err(DomainError::Validation(
                "Company ID or Company Name is required".to_string(),
            )),
        }
    }

    pub async fn list_jobs(&self, filter: &JobFilter) -> DomainResult<Vec<JobView>> {
        let jobs = self.jobs.find_filtered(filter).await?;
        self.with_companies(jobs).await
    }

    pub async fn job(&self, id: i64) -> DomainResult<JobView> {
        let job = self.find(id).await?;
        self.view(job).await
    }

    pub async fn update_job(&self, id: i64, patch: JobPatch) -> DomainResult<JobView> {
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(DomainError::Validation(
                "Job title cannot be blank".to_string(),
            ));
        }
        if patch
            .description
            .as_deref()
            .is_some_and(|d| d.trim().is_empty())
        {
            return Err(DomainError::Validation(
                "Job description cannot be blank".to_string(),
            ));
        }
        let mut job = self.find(id).await?;
        job.apply(patch);
        let saved = self.jobs.save(job).await?;
        self.view(saved).await
    }

    pub async fn delete_job(&self, id: i64) -> DomainResult<()> {
        if !self.jobs.exists(id).await? {
            return Err(DomainError::not_found("Job", id));
        }
        self.jobs.delete(id).await?;
        tracing::info!(job_id = id, "Job deleted");
        Ok(())
    }

    pub async fn jobs_by_recruiter(&self, recruiter_id: i64) -> DomainResult<Vec<JobView>> {
        let jobs = self.jobs.find_by_recruiter(recruiter_id).await?;
        self.with_companies(jobs).await
    }

    pub async fn search_jobs(&self, keyword: &str) -> DomainResult<Vec<JobView>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(DomainError::Validation(
                "Search keyword is required".to_string(),
            ));
        }
        let jobs = self.jobs.search(keyword).await?;
        self.with_companies(jobs).await
    }

    /// Mark a job closed. Closing an already closed job is a no-op.
    pub async fn close_job(&self, id: i64) -> DomainResult<JobView> {
        let mut job = self.find(id).await?;
        if job.status == JobStatus::Closed {
            return self.view(job).await;
        }
        job.close();
        let saved = self.jobs.save(job).await?;
        tracing::info!(job_id = id, "Job closed");
        self.view(saved).await
    }

    pub async fn job_applications(&self, job_id: i64) -> DomainResult<Vec<ApplicationView>> {
        let job = self.find(job_id).await?;
        let applications = self.applications.find_by_job(job_id).await?;

        let mut views = Vec::with_capacity(applications.len());
        for application in applications {
            let candidate = self.users.find_by_id(application.candidate_id).await?;
            views.push(application_view(
                application,
                Some(&job),
                candidate.as_ref(),
            ));
        }
        Ok(views)
    }

    async fn find(&self, id: i64) -> DomainResult<Job> {
        self.jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job", id))
    }

    async fn view(&self, mut job: Job) -> DomainResult<JobView> {
        let company = self.companies.find_by_id(job.company_id).await?;
        if let Some(company) = &company {
            job.company_name = company.name.clone();
        }
        Ok(JobView {
            company_logo_url: company.and_then(|c| c.logo_url),
            job,
        })
    }

    async fn with_companies(&self, jobs: Vec<Job>) -> DomainResult<Vec<JobView>> {
        let mut company_ids: Vec<i64> = jobs.iter().map(|j| j.company_id).collect();
        company_ids.sort_unstable();
        company_ids.dedup();

        let mut companies = Vec::with_capacity(company_ids.len());
        for id in company_ids {
            if let Some(company) = self.companies.find_by_id(id).await? {
                companies.push(company);
            }
        }
        Ok(job_views(jobs, &companies))
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use jobconnect_core::domain::{
    ApplicationStatus, Company, CompanyPatch, JobFilter, JobPatch, JobStatus, NewApplication,
    NewCompany, NewJob,
};
use jobconnect_core::error::DomainError;
use jobconnect_core::services::{ApplicationView, JobView};

/// Request to post a job. Either `companyId` or `companyName` must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub recruiter_id: Option<i64>,
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
    #[serde(default, alias = "title")]
    pub job_title: String,
    #[serde(default)]
    pub description: String,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub skills_required: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateJobRequest {
    /// Split into the posting recruiter (falling back to the caller) and the job input.
    pub fn into_parts(self, caller_id: i64) -> (i64, NewJob) {
        let recruiter_id = self.recruiter_id.unwrap_or(caller_id);
        let job = NewJob {
            company_id: self.company_id,
            company_name: self.company_name,
            title: self.job_title,
            description: self.description,
            requirements: self.requirements,
            responsibilities: self.responsibilities,
            employment_type: self.employment_type,
            experience_level: self.experience_level,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            location: self.location,
            is_remote: self.is_remote,
            skills_required: self.skills_required,
            expires_at: self.expires_at,
        };
        (recruiter_id, job)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    #[serde(alias = "title")]
    pub job_title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub skills_required: Option<String>,
    pub status: Option<JobStatus>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<UpdateJobRequest> for JobPatch {
    fn from(req: UpdateJobRequest) -> Self {
        Self {
            title: req.job_title,
            description: req.description,
            requirements: req.requirements,
            responsibilities: req.responsibilities,
            employment_type: req.employment_type,
            experience_level: req.experience_level,
            salary_min: req.salary_min,
            salary_max: req.salary_max,
            location: req.location,
            is_remote: req.is_remote,
            skills_required: req.skills_required,
            status: req.status,
            expires_at: req.expires_at,
        }
    }
}

/// Query string of `GET /api/jobs`. All given filters must match.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilterQuery {
    pub status: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
}

impl TryFrom<JobFilterQuery> for JobFilter {
    type Error = DomainError;

    fn try_from(query: JobFilterQuery) -> Result<Self, Self::Error> {
        let status = query
            .status
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse::<JobStatus>())
            .transpose()
            .map_err(DomainError::Validation)?;

        Ok(Self {
            status,
            location: query.location,
            employment_type: query.employment_type,
            experience_level: query.experience_level,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub job_id: i64,
    pub recruiter_id: i64,
    pub company_id: i64,
    pub company_name: String,
    pub company_logo_url: Option<String>,
    pub job_title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub location: Option<String>,
    pub is_remote: bool,
    pub skills_required: Option<String>,
    pub status: JobStatus,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobView> for JobResponse {
    fn from(view: JobView) -> Self {
        let job = view.job;
        Self {
            job_id: job.id,
            recruiter_id: job.recruiter_id,
            company_id: job.company_id,
            company_name: job.company_name,
            company_logo_url: view.company_logo_url,
            job_title: job.title,
            description: job.description,
            requirements: job.requirements,
            responsibilities: job.responsibilities,
            employment_type: job.employment_type,
            experience_level: job.experience_level,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            location: job.location,
            is_remote: job.is_remote,
            skills_required: job.skills_required,
            status: job.status,
            expires_at: job.expires_at,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
}

impl From<CreateCompanyRequest> for NewCompany {
    fn from(req: CreateCompanyRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            website: req.website,
            logo_url: req.logo_url,
            industry: req.industry,
            size: req.size,
            location: req.location,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
}

impl From<UpdateCompanyRequest> for CompanyPatch {
    fn from(req: UpdateCompanyRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            website: req.website,
            logo_url: req.logo_url,
            industry: req.industry,
            size: req.size,
            location: req.location,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub company_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            company_id: company.id,
            name: company.name,
            description: company.description,
            website: company.website,
            logo_url: company.logo_url,
            industry: company.industry,
            size: company.size,
            location: company.location,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

/// Request to apply for a job. `candidateId` falls back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub job_id: i64,
    pub candidate_id: Option<i64>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
}

impl CreateApplicationRequest {
    pub fn into_new(self, caller_id: i64) -> NewApplication {
        NewApplication {
            job_id: self.job_id,
            candidate_id: self.candidate_id.unwrap_or(caller_id),
            resume_url: self.resume_url,
            cover_letter: self.cover_letter,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub application_id: i64,
    pub job_id: i64,
    pub job_title: Option<String>,
    pub candidate_id: i64,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ApplicationView> for ApplicationResponse {
    fn from(view: ApplicationView) -> Self {
        let application = view.application;
        Self {
            application_id: application.id,
            job_id: application.job_id,
            job_title: view.job_title,
            candidate_id: application.candidate_id,
            candidate_name: view.candidate_name,
            candidate_email: view.candidate_email,
            resume_url: application.resume_url,
            cover_letter: application.cover_letter,
            status: application.status,
            applied_at: application.applied_at,
            updated_at: application.updated_at,
        }
    }
}

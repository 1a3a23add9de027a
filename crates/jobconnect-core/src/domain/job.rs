use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{patch_field, patch_optional};

/// Posting state of a job. Closing is one-way; only an explicit update reopens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Active => "ACTIVE",
            JobStatus::Closed => "CLOSED",
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(JobStatus::Active),
            "CLOSED" => Ok(JobStatus::Closed),
            other => Err(format!("unknown job status: {other}")),
        }
    }
}

/// Job entity - a posting owned by a recruiter and tied to a company.
///
/// `company_name` is a denormalized copy taken at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub recruiter_id: i64,
    pub company_id: i64,
    pub company_name: String,
    pub title: String,
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

/// Input for creating a job. One of `company_id` or `company_name` must be set.
#[derive(Debug, Clone, Default)]
pub struct NewJob {
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
    pub title: String,
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

impl Job {
    /// Build an unsaved, active job for an already resolved company.
    pub fn new(recruiter_id: i64, company_id: i64, company_name: String, input: NewJob) -> Self {
        let now = Utc::now();
        Self {
            id: super::UNSAVED_ID,
            recruiter_id,
            company_id,
            company_name,
            title: input.title,
            description: input.description,
            requirements: input.requirements,
            responsibilities: input.responsibilities,
            employment_type: input.employment_type,
            experience_level: input.experience_level,
            salary_min: input.salary_min,
            salary_max: input.salary_max,
            location: input.location,
            is_remote: input.is_remote.unwrap_or(false),
            skills_required: input.skills_required,
            status: JobStatus::Active,
            expires_at: input.expires_at,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: JobPatch) {
        patch_field(&mut self.title, patch.title);
        patch_field(&mut self.description, patch.description);
        patch_optional(&mut self.requirements, patch.requirements);
        patch_optional(&mut self.responsibilities, patch.responsibilities);
        patch_optional(&mut self.employment_type, patch.employment_type);
        patch_optional(&mut self.experience_level, patch.experience_level);
        patch_optional(&mut self.salary_min, patch.salary_min);
        patch_optional(&mut self.salary_max, patch.salary_max);
        patch_optional(&mut self.location, patch.location);
        patch_field(&mut self.is_remote, patch.is_remote);
        patch_optional(&mut self.skills_required, patch.skills_required);
        patch_field(&mut self.status, patch.status);
        patch_optional(&mut self.expires_at, patch.expires_at);
        self.updated_at = Utc::now();
    }

    pub fn close(&mut self) {
        self.status = JobStatus::Closed;
        self.updated_at = Utc::now();
    }

    /// Whether the job satisfies every criterion set on the filter.
    pub fn matches(&self, filter: &JobFilter) -> bool {
        filter.status.is_none_or(|s| s == self.status)
            && filter
                .location
                .as_deref()
                .is_none_or(|l| self.location.as_deref() == Some(l))
            && filter
                .employment_type
                .as_deref()
                .is_none_or(|t| self.employment_type.as_deref() == Some(t))
            && filter
                .experience_level
                .as_deref()
                .is_none_or(|e| self.experience_level.as_deref() == Some(e))
    }

    /// Case-insensitive substring match on title or description.
    pub fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}

/// Partial job update. Status may be forced to any value.
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub title: Option<String>,
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

/// Exact-match listing filter; unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> Job {
        Job::new(
            1,
            2,
            "Acme".into(),
            NewJob {
                title: "Backend Engineer".into(),
                description: "Build REST services in Rust".into(),
                location: Some("Remote".into()),
                employment_type: Some("FULL_TIME".into()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn new_job_is_active_and_not_remote() {
        let job = job();
        assert_eq!(job.status, JobStatus::Active);
        assert!(!job.is_remote);
    }

    #[test]
    fn patch_can_force_status() {
        let mut job = job();
        job.close();
        job.apply(JobPatch {
            status: Some(JobStatus::Active),
            ..Default::default()
        });
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.title, "Backend Engineer");
    }

    #[test]
    fn filters_combine() {
        let job = job();
        let filter = JobFilter {
            status: Some(JobStatus::Active),
            location: Some("Remote".into()),
            ..Default::default()
        };
        assert!(job.matches(&filter));

        let filter = JobFilter {
            employment_type: Some("PART_TIME".into()),
            ..filter
        };
        assert!(!job.matches(&filter));
    }

    #[test]
    fn keyword_search_ignores_case() {
        let job = job();
        assert!(job.mentions("rust"));
        assert!(job.mentions("BACKEND"));
        assert!(!job.mentions("golang"));
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("closed".parse::<JobStatus>(), Ok(JobStatus::Closed));
        assert!("archived".parse::<JobStatus>().is_err());
    }
}

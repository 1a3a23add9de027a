use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review state of an application. Starts at `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Shortlisted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Reviewed => "REVIEWED",
            ApplicationStatus::Shortlisted => "SHORTLISTED",
            ApplicationStatus::Accepted => "ACCEPTED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }
}

/// Application entity - a candidate's submission to a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub candidate_id: i64,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for applying to a job.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: i64,
    pub candidate_id: i64,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
}

impl Application {
    pub fn new(input: NewApplication) -> Self {
        let now = Utc::now();
        Self {
            id: super::UNSAVED_ID,
            job_id: input.job_id,
            candidate_id: input.candidate_id,
            resume_url: input.resume_url,
            cover_letter: input.cover_letter,
            status: ApplicationStatus::Pending,
            applied_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

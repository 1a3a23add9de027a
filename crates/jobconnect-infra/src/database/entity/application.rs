//! Job application entity for SeaORM. Unique on (job_id, candidate_id).

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;

use jobconnect_core::domain::{Application, ApplicationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Status {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "REVIEWED")]
    Reviewed,
    #[sea_orm(string_value = "SHORTLISTED")]
    Shortlisted,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub job_id: i64,
    #[sea_orm(indexed)]
    pub candidate_id: i64,
    pub resume_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cover_letter: Option<String>,
    pub status: Status,
    pub applied_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job::Entity",
        from = "Column::JobId",
        to = "super::job::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Job,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Status> for ApplicationStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => ApplicationStatus::Pending,
            Status::Reviewed => ApplicationStatus::Reviewed,
            Status::Shortlisted => ApplicationStatus::Shortlisted,
            Status::Accepted => ApplicationStatus::Accepted,
            Status::Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl From<ApplicationStatus> for Status {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => Status::Pending,
            ApplicationStatus::Reviewed => Status::Reviewed,
            ApplicationStatus::Shortlisted => Status::Shortlisted,
            ApplicationStatus::Accepted => Status::Accepted,
            ApplicationStatus::Rejected => Status::Rejected,
        }
    }
}

impl From<Model> for Application {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            job_id: model.job_id,
            candidate_id: model.candidate_id,
            resume_url: model.resume_url,
            cover_letter: model.cover_letter,
            status: model.status.into(),
            applied_at: model.applied_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Application> for ActiveModel {
    fn from(application: Application) -> Self {
        Self {
            id: super::primary_key(application.id),
            job_id: Set(application.job_id),
            candidate_id: Set(application.candidate_id),
            resume_url: Set(application.resume_url),
            cover_letter: Set(application.cover_letter),
            status: Set(application.status.into()),
            applied_at: Set(application.applied_at.into()),
            updated_at: Set(application.updated_at.into()),
        }
    }
}

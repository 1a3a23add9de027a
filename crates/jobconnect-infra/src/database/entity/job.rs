//! Job posting entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;

use jobconnect_core::domain::{Job, JobStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Status {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub recruiter_id: i64,
    #[sea_orm(indexed)]
    pub company_id: i64,
    pub company_name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub responsibilities: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub salary_min: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub salary_max: Option<Decimal>,
    pub location: Option<String>,
    pub is_remote: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub skills_required: Option<String>,
    pub status: Status,
    pub expires_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Company,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Status> for JobStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Active => JobStatus::Active,
            Status::Closed => JobStatus::Closed,
        }
    }
}

impl From<JobStatus> for Status {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Active => Status::Active,
            JobStatus::Closed => Status::Closed,
        }
    }
}

impl From<Model> for Job {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            recruiter_id: model.recruiter_id,
            company_id: model.company_id,
            company_name: model.company_name,
            title: model.title,
            description: model.description,
            requirements: model.requirements,
            responsibilities: model.responsibilities,
            employment_type: model.employment_type,
            experience_level: model.experience_level,
            salary_min: model.salary_min,
            salary_max: model.salary_max,
            location: model.location,
            is_remote: model.is_remote,
            skills_required: model.skills_required,
            status: model.status.into(),
            expires_at: model.expires_at.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Job> for ActiveModel {
    fn from(job: Job) -> Self {
        Self {
            id: super::primary_key(job.id),
            recruiter_id: Set(job.recruiter_id),
            company_id: Set(job.company_id),
            company_name: Set(job.company_name),
            title: Set(job.title),
            description: Set(job.description),
            requirements: Set(job.requirements),
            responsibilities: Set(job.responsibilities),
            employment_type: Set(job.employment_type),
            experience_level: Set(job.experience_level),
            salary_min: Set(job.salary_min),
            salary_max: Set(job.salary_max),
            location: Set(job.location),
            is_remote: Set(job.is_remote),
            skills_required: Set(job.skills_required),
            status: Set(job.status.into()),
            expires_at: Set(job.expires_at.map(Into::into)),
            created_at: Set(job.created_at.into()),
            updated_at: Set(job.updated_at.into()),
        }
    }
}

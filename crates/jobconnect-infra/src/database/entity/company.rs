//! Company entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use jobconnect_core::domain::Company;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job::Entity")]
    Job,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Company {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            website: model.website,
            logo_url: model.logo_url,
            industry: model.industry,
            size: model.size,
            location: model.location,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Company> for ActiveModel {
    fn from(company: Company) -> Self {
        Self {
            id: super::primary_key(company.id),
            name: Set(company.name),
            description: Set(company.description),
            website: Set(company.website),
            logo_url: Set(company.logo_url),
            industry: Set(company.industry),
            size: Set(company.size),
            location: Set(company.location),
            created_at: Set(company.created_at.into()),
            updated_at: Set(company.updated_at.into()),
        }
    }
}

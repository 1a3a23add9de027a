//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;

use jobconnect_core::domain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Role {
    #[sea_orm(string_value = "CANDIDATE")]
    Candidate,
    #[sea_orm(string_value = "RECRUITER")]
    Recruiter,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profile::Entity")]
    Profile,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Role> for domain::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::Candidate => domain::Role::Candidate,
            Role::Recruiter => domain::Role::Recruiter,
            Role::Admin => domain::Role::Admin,
        }
    }
}

impl From<domain::Role> for Role {
    fn from(role: domain::Role) -> Self {
        match role {
            domain::Role::Candidate => Role::Candidate,
            domain::Role::Recruiter => Role::Recruiter,
            domain::Role::Admin => Role::Admin,
        }
    }
}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            role: model.role.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<domain::User> for ActiveModel {
    fn from(user: domain::User) -> Self {
        Self {
            id: super::primary_key(user.id),
            email: Set(user.email),
            name: Set(user.name),
            role: Set(user.role.into()),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}

//! Profile entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use jobconnect_core::domain::Profile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub headline: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub skills: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub experience: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub education: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            headline: model.headline,
            bio: model.bio,
            skills: model.skills,
            experience: model.experience,
            education: model.education,
            location: model.location,
            avatar_url: model.avatar_url,
            banner_url: model.banner_url,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Profile> for ActiveModel {
    fn from(profile: Profile) -> Self {
        Self {
            id: super::primary_key(profile.id),
            user_id: Set(profile.user_id),
            headline: Set(profile.headline),
            bio: Set(profile.bio),
            skills: Set(profile.skills),
            experience: Set(profile.experience),
            education: Set(profile.education),
            location: Set(profile.location),
            avatar_url: Set(profile.avatar_url),
            banner_url: Set(profile.banner_url),
            created_at: Set(profile.created_at.into()),
            updated_at: Set(profile.updated_at.into()),
        }
    }
}

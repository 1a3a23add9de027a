//! Post like entity for SeaORM. Unique on (post_id, user_id).

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use jobconnect_core::domain::PostLike;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_likes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PostLike {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            user_id: model.user_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<PostLike> for ActiveModel {
    fn from(like: PostLike) -> Self {
        Self {
            id: super::primary_key(like.id),
            post_id: Set(like.post_id),
            user_id: Set(like.user_id),
            created_at: Set(like.created_at.into()),
        }
    }
}

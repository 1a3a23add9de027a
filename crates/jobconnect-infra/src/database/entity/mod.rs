//! SeaORM entities - one module per table of the shared schema.

use sea_orm::ActiveValue::{self, NotSet, Set};

use jobconnect_core::domain::UNSAVED_ID;

pub mod application;
pub mod comment;
pub mod company;
pub mod job;
pub mod post;
pub mod post_like;
pub mod profile;
pub mod user;

/// Primary key value for an active model: left unset for unsaved entities so
/// the database assigns it, set otherwise so `save` issues an UPDATE.
pub(crate) fn primary_key(id: i64) -> ActiveValue<i64> {
    if id == UNSAVED_ID { NotSet } else { Set(id) }
}

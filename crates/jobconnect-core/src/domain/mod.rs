//! Domain entities - the core business objects.
//!
//! Every entity carries a surrogate `i64` key assigned by the store.
//! An entity built with `new` holds [`UNSAVED_ID`] until it is saved.

mod application;
mod author;
mod comment;
mod company;
mod job;
mod post;
mod post_like;
mod profile;
mod user;

pub use application::{Application, ApplicationStatus, NewApplication};
pub use author::{Author, FALLBACK_AUTHOR_NAME};
pub use comment::{Comment, CommentEntry};
pub use company::{AUTO_CREATED_DESCRIPTION, Company, CompanyPatch, NewCompany};
pub use job::{Job, JobFilter, JobPatch, JobStatus, NewJob};
pub use post::{FeedEntry, NewPost, Post};
pub use post_like::{LikeState, PostLike};
pub use profile::{NewProfile, Profile, ProfileField, ProfilePatch};
pub use user::{Role, User};

/// Id carried by entities that have not been persisted yet.
pub const UNSAVED_ID: i64 = 0;

/// Overwrite `target` only when the patch carries a value.
pub(crate) fn patch_field<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Same as [`patch_field`] for nullable columns; a `Some` value is stored as-is.
pub(crate) fn patch_optional<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

/// True for `None`, empty and whitespace-only strings.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

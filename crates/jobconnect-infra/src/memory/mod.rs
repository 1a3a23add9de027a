//! In-memory repositories - used as fallback when no database is reachable,
//! and as the backing store of the service tests.
//!
//! Data is lost on process restart. Unique constraints of the schema are
//! enforced; foreign keys are not, except for the cascades and restrictions
//! the services rely on.

mod repositories;
mod store;

pub use repositories::{
    InMemoryApplicationRepository, InMemoryCommentRepository, InMemoryCompanyRepository,
    InMemoryJobRepository, InMemoryPostLikeRepository, InMemoryPostRepository,
    InMemoryProfileRepository, InMemoryRepository, InMemoryUserRepository,
};
pub use store::{InMemoryDatabase, Record, Tables};

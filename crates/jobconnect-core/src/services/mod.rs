//! Application services - one per aggregate, each owning its business rules.
//!
//! Services hold their repositories as trait objects so the same code runs
//! over Postgres in production and over the in-memory adapter in tests.

mod application;
mod company;
mod feed;
mod job;
mod profile;

pub use application::{ApplicationService, ApplicationView};
pub use company::CompanyService;
pub use feed::{CommentView, FALLBACK_COMMENTER_NAME, FeedService, LikeOutcome, PostView};
pub use job::{JobService, JobView};
pub use profile::ProfileService;

//! Database connection management and the SeaORM adapters.

mod connections;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;

#[cfg(feature = "postgres")]
pub use postgres_base::PostgresBaseRepository;

#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresApplicationRepository, PostgresCommentRepository, PostgresCompanyRepository,
    PostgresJobRepository, PostgresPostLikeRepository, PostgresPostRepository,
    PostgresProfileRepository, PostgresUserRepository,
};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;

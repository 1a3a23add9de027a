//! The full set of repository ports, bound to one storage backend.

use std::sync::Arc;

use jobconnect_core::ports::{
    ApplicationRepository, CommentRepository, CompanyRepository, JobRepository,
    PostLikeRepository, PostRepository, ProfileRepository, UserRepository,
};

use crate::database::DatabaseConfig;
use crate::memory::{
    InMemoryApplicationRepository, InMemoryCommentRepository, InMemoryCompanyRepository,
    InMemoryDatabase, InMemoryJobRepository, InMemoryPostLikeRepository, InMemoryPostRepository,
    InMemoryProfileRepository, InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
use sea_orm::DbConn;

#[cfg(feature = "postgres")]
use crate::database::{
    DatabaseConnections, PostgresApplicationRepository, PostgresCommentRepository,
    PostgresCompanyRepository, PostgresJobRepository, PostgresPostLikeRepository,
    PostgresPostRepository, PostgresProfileRepository, PostgresUserRepository,
};

/// Which backend a [`Repositories`] bundle ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    InMemory,
}

impl StorageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Postgres => "postgres",
            StorageKind::InMemory => "in-memory",
        }
    }
}

#[derive(Clone)]
pub struct Repositories {
    pub kind: StorageKind,
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn PostLikeRepository>,
    pub companies: Arc<dyn CompanyRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
}

impl Repositories {
    pub fn in_memory(db: InMemoryDatabase) -> Self {
        Self {
            kind: StorageKind::InMemory,
            users: Arc::new(InMemoryUserRepository::new(db.clone())),
            profiles: Arc::new(InMemoryProfileRepository::new(db.clone())),
            posts: Arc::new(InMemoryPostRepository::new(db.clone())),
            comments: Arc::new(InMemoryCommentRepository::new(db.clone())),
            likes: Arc::new(InMemoryPostLikeRepository::new(db.clone())),
            companies: Arc::new(InMemoryCompanyRepository::new(db.clone())),
            jobs: Arc::new(InMemoryJobRepository::new(db.clone())),
            applications: Arc::new(InMemoryApplicationRepository::new(db)),
        }
    }

    #[cfg(feature = "postgres")]
    pub fn postgres(conn: DbConn) -> Self {
        let conn = Arc::new(conn);
        Self {
            kind: StorageKind::Postgres,
            users: Arc::new(PostgresUserRepository::new(conn.clone())),
            profiles: Arc::new(PostgresProfileRepository::new(conn.clone())),
            posts: Arc::new(PostgresPostRepository::new(conn.clone())),
            comments: Arc::new(PostgresCommentRepository::new(conn.clone())),
            likes: Arc::new(PostgresPostLikeRepository::new(conn.clone())),
            companies: Arc::new(PostgresCompanyRepository::new(conn.clone())),
            jobs: Arc::new(PostgresJobRepository::new(conn.clone())),
            applications: Arc::new(PostgresApplicationRepository::new(conn)),
        }
    }

    /// Connect to Postgres when configured, falling back to in-memory
    /// repositories when the database is missing or unreachable.
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => return Self::postgres(connections.main),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
        }

        Self::in_memory(InMemoryDatabase::new())
    }
}

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, PrimaryKeyTrait, SqlErr, TryIntoModel,
};

use jobconnect_core::error::RepoError;
use jobconnect_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
///
/// The entity-specific ports are implemented on the aliases in
/// [`super::postgres_repo`]. Repositories share one pool through an `Arc`;
/// `DbConn` itself is not `Clone` when SeaORM's `mock` feature is on.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }
}

/// Translate a SeaORM error, keeping constraint violations apart so the
/// services can turn them into conflicts.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => RepoError::Constraint(msg),
        _ if matches!(err, DbErr::RecordNotUpdated) => RepoError::NotFound,
        _ if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => {
            RepoError::Connection(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel:
        ActiveModelTrait<Entity = E> + ActiveModelBehavior + TryIntoModel<E::Model> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(&*self.db).await.map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        // Unsaved entities carry an unset primary key, so `save` inserts them.
        let active_model: E::ActiveModel = entity.into();
        let result = active_model.save(&*self.db).await.map_err(map_db_err)?;

        let model = result
            .try_into_model()
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn exists(&self, id: ID) -> Result<bool, RepoError> {
        let count = E::find_by_id(id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

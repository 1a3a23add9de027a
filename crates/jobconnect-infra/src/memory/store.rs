use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;

use jobconnect_core::domain::{
    Application, Comment, Company, Job, Post, PostLike, Profile, UNSAVED_ID, User,
};
use jobconnect_core::error::RepoError;

/// Every table of the shared schema, keyed by primary key.
#[derive(Default)]
pub struct Tables {
    users: BTreeMap<i64, User>,
    profiles: BTreeMap<i64, Profile>,
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    post_likes: BTreeMap<i64, PostLike>,
    companies: BTreeMap<i64, Company>,
    jobs: BTreeMap<i64, Job>,
    applications: BTreeMap<i64, Application>,
    sequences: HashMap<&'static str, i64>,
}

impl Tables {
    fn next_id(&mut self, table: &'static str) -> i64 {
        let seq = self.sequences.entry(table).or_insert(0);
        *seq += 1;
        *seq
    }

    pub fn rows<T: Record>(&self) -> impl Iterator<Item = &T> {
        T::table(self).values()
    }

    pub fn get<T: Record>(&self, id: i64) -> Option<&T> {
        T::table(self).get(&id)
    }

    /// Insert an unsaved row under a fresh id, or replace an existing one.
    /// Replacing a row that is no longer stored fails with `NotFound`.
    pub fn upsert<T: Record>(&mut self, mut row: T) -> Result<T, RepoError> {
        if row.id() == UNSAVED_ID {
            // Ids are consumed even when the insert is rejected, like a sequence.
            let id = self.next_id(T::TABLE);
            row.assign_id(id);
        } else if !T::table(self).contains_key(&row.id()) {
            return Err(RepoError::NotFound);
        }

        let clash = T::table(self)
            .values()
            .any(|other| other.id() != row.id() && row.collides_with(other));
        if clash {
            return Err(RepoError::Constraint(format!(
                "duplicate key value violates unique constraint on {}",
                T::TABLE
            )));
        }

        T::table_mut(self).insert(row.id(), row.clone());
        Ok(row)
    }

    pub fn remove<T: Record>(&mut self, id: i64) -> Result<(), RepoError> {
        if !T::table(self).contains_key(&id) {
            return Err(RepoError::NotFound);
        }
        T::on_delete(self, id)?;
        T::table_mut(self).remove(&id);
        Ok(())
    }
}

/// A row type stored in [`Tables`].
pub trait Record: Clone + Send + Sync + 'static {
    const TABLE: &'static str;

    fn id(&self) -> i64;

    fn assign_id(&mut self, id: i64);

    fn table(tables: &Tables) -> &BTreeMap<i64, Self>;

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<i64, Self>;

    /// Whether `self` and `other` violate a unique constraint together.
    fn collides_with(&self, _other: &Self) -> bool {
        false
    }

    /// Cascade or refuse the removal of row `id`.
    fn on_delete(_tables: &mut Tables, _id: i64) -> Result<(), RepoError> {
        Ok(())
    }
}

macro_rules! record {
    ($ty:ident, $table:literal, $field:ident) => {
        impl Record for $ty {
            const TABLE: &'static str = $table;

            fn id(&self) -> i64 {
                self.id
            }

            fn assign_id(&mut self, id: i64) {
                self.id = id;
            }

            fn table(tables: &Tables) -> &BTreeMap<i64, Self> {
                &tables.$field
            }

            fn table_mut(tables: &mut Tables) -> &mut BTreeMap<i64, Self> {
                &mut tables.$field
            }

            record!(@rules $ty);
        }
    };
    (@rules User) => {
        fn collides_with(&self, other: &Self) -> bool {
            self.email == other.email
        }
    };
    (@rules Profile) => {
        fn collides_with(&self, other: &Self) -> bool {
            self.user_id == other.user_id
        }
    };
    (@rules PostLike) => {
        fn collides_with(&self, other: &Self) -> bool {
            self.post_id == other.post_id && self.user_id == other.user_id
        }
    };
    (@rules Application) => {
        fn collides_with(&self, other: &Self) -> bool {
            self.job_id == other.job_id && self.candidate_id == other.candidate_id
        }
    };
    (@rules Post) => {
        fn on_delete(tables: &mut Tables, id: i64) -> Result<(), RepoError> {
            tables.comments.retain(|_, c| c.post_id != id);
            tables.post_likes.retain(|_, l| l.post_id != id);
            Ok(())
        }
    };
    (@rules Job) => {
        fn on_delete(tables: &mut Tables, id: i64) -> Result<(), RepoError> {
            tables.applications.retain(|_, a| a.job_id != id);
            Ok(())
        }
    };
    (@rules Company) => {
        fn on_delete(tables: &mut Tables, id: i64) -> Result<(), RepoError> {
            if tables.jobs.values().any(|j| j.company_id == id) {
                return Err(RepoError::Constraint(
                    "company is still referenced by jobs".to_string(),
                ));
            }
            Ok(())
        }
    };
    (@rules $other:ident) => {};
}

record!(User, "users", users);
record!(Profile, "profiles", profiles);
record!(Post, "posts", posts);
record!(Comment, "comments", comments);
record!(PostLike, "post_likes", post_likes);
record!(Company, "companies", companies);
record!(Job, "jobs", jobs);
record!(Application, "applications", applications);

/// Shared handle to the in-memory tables. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        let tables = self.tables.read().await;
        f(&tables)
    }

    pub async fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        let mut tables = self.tables.write().await;
        f(&mut tables)
    }

    /// Store a user row. Users are owned by the account service, so this is
    /// the only way to seed them here.
    pub async fn insert_user(&self, user: User) -> Result<User, RepoError> {
        self.write(|t| t.upsert(user)).await
    }
}

//! A builder that can be shared across threads.

use super::select::QueryBuilder;
use crate::config::BuilderConfig;
use crate::error::BuildResult;
use crate::statement::Statement;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A [`QueryBuilder`] behind one lock.
///
/// Clones share the same clauses. Every [`update`](Self::update) and every
/// [`render`](Self::render) holds the lock for its whole duration, so a
/// render never sees a half-applied update.
#[derive(Debug, Clone, Default)]
pub struct SharedQueryBuilder {
    inner: Arc<Mutex<QueryBuilder>>,
}

impl SharedQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(QueryBuilder::with_config(config))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, QueryBuilder> {
        // The builder is only mutated after validation, so a panic in a
        // caller's closure cannot leave it half-written.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a batch of mutations atomically.
    ///
    /// `f` runs against a copy of the builder; the copy replaces the shared
    /// state only if `f` returns `Ok`. On error nothing changes.
    ///
    /// # Deadlock
    /// The lock is held while `f` runs and is not reentrant. Calling any
    /// method on this builder, or on a clone of it, from inside `f` blocks
    /// forever. Other `SharedQueryBuilder` instances can be used freely.
    ///
    /// # Example
    /// ```
    /// let shared = clausekit::SharedQueryBuilder::new();
    /// shared.update(|qb| {
    ///     qb.select_all().from("users")?.where_clause("id > 5")?;
    ///     Ok(())
    /// })?;
    /// assert_eq!(shared.render(), "SELECT * FROM `users` WHERE id > 5;");
    /// # Ok::<(), clausekit::BuilderError>(())
    /// ```
    pub fn update<F>(&self, f: F) -> BuildResult<()>
    where
        F: FnOnce(&mut QueryBuilder) -> BuildResult<()>,
    {
        let mut guard = self.lock();
        let mut draft = guard.clone();
        f(&mut draft)?;
        *guard = draft;
        Ok(())
    }

    /// Render under the lock and remember the result as the current query.
    pub fn render(&self) -> Statement {
        self.lock().render()
    }

    /// Render without caching.
    pub fn to_sql(&self) -> String {
        self.lock().to_sql()
    }

    pub fn current_query(&self) -> Option<Statement> {
        self.lock().current_query().cloned()
    }

    /// Run a read-only closure against the builder.
    ///
    /// # Deadlock
    /// Same rule as [`update`](Self::update): `f` must not call back into
    /// this builder or a clone of it.
    pub fn inspect<R>(&self, f: impl FnOnce(&QueryBuilder) -> R) -> R {
        f(&self.lock())
    }
}

impl From<QueryBuilder> for SharedQueryBuilder {
    fn from(builder: QueryBuilder) -> Self {
        Self {
            inner: Arc::new(Mutex::new(builder)),
        }
    }
}

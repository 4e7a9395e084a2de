//! PostgreSQL implementation of the generic repository.
//!
//! All repositories created from one [`PgContext`] run their statements on
//! the same transaction, which is opened on first use and committed by
//! [`PgContext::commit`]. A context dropped without commit rolls back.

use std::{collections::HashMap, marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder, Transaction};
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};

use super::{
    filter::{Filter, OrderBy, ROOT_ALIAS},
    EntityRepository,
};
use crate::{
    error::{AppError, AppResult},
    models::{message::ALREADY_EXISTS_409, Entity, Relation},
};

/// Persistence context shared by the repositories of one unit of work
pub struct PgContext {
    pool: PgPool,
    tx: Mutex<Option<Transaction<'static, Postgres>>>,
}

impl PgContext {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            tx: Mutex::new(None),
        }
    }

    /// Connection of the current transaction, beginning one if needed
    pub async fn connection(&self) -> AppResult<MappedMutexGuard<'_, PgConnection>> {
        let mut guard = self.tx.lock().await;
        if guard.is_none() {
            *guard = Some(self.pool.begin().await?);
            tracing::trace!("Transaction opened");
        }
        MutexGuard::try_map(guard, |tx| tx.as_deref_mut())
            .map_err(|_| AppError::Internal("Transaction is not available".to_string()))
    }

    /// Commit pending changes. A no-op when nothing was executed.
    pub async fn commit(&self) -> AppResult<()> {
        let pending = self.tx.lock().await.take();
        if let Some(tx) = pending {
            tx.commit().await?;
            tracing::trace!("Transaction committed");
        }
        Ok(())
    }
}

/// Generic repository over one entity table
pub struct PgRepository<T> {
    context: Arc<PgContext>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> PgRepository<T> {
    pub fn new(context: Arc<PgContext>) -> Self {
        Self {
            context,
            _entity: PhantomData,
        }
    }
}

/// Split a comma-separated include list into known relations
pub fn parse_includes<T: Entity>(include: &str) -> AppResult<Vec<&'static Relation>> {
    let mut relations: Vec<&'static Relation> = Vec::new();
    for name in include.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let relation = T::relation(name).ok_or_else(|| {
            AppError::Validation(format!("{} has no relation named '{}'", T::NAME, name))
        })?;
        if !relations.contains(&relation) {
            relations.push(relation);
        }
    }
    Ok(relations)
}

/// `SELECT t.* FROM <table> AS t [LEFT JOIN ...] [WHERE ...] ORDER BY ...`
pub fn build_select<T: Entity>(
    filter: Option<&Filter>,
    order_by: Option<&OrderBy>,
) -> AppResult<QueryBuilder<'static, Postgres>> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {root}.* FROM {} AS {root}",
        T::TABLE,
        root = ROOT_ALIAS
    ));

    let referenced = filter
        .map(Filter::relations)
        .unwrap_or_default()
        .into_iter()
        .chain(order_by.map(OrderBy::relations).unwrap_or_default());

    let mut joined: Vec<&'static str> = Vec::new();
    for alias in referenced {
        if joined.contains(&alias) {
            continue;
        }
        let relation = T::relation(alias).ok_or_else(|| {
            AppError::Validation(format!("{} has no relation '{}'", T::NAME, alias))
        })?;
        builder.push(format!(
            " LEFT JOIN {table} AS {alias} ON {alias}.id = {root}.{fk}",
            table = relation.table,
            alias = relation.alias,
            root = ROOT_ALIAS,
            fk = relation.foreign_key
        ));
        joined.push(alias);
    }

    if let Some(filter) = filter {
        builder.push(" WHERE ");
        filter.push_sql(&mut builder);
    }

    match order_by {
        Some(order_by) => order_by.push_sql(&mut builder),
        None => {
            builder.push(format!(" ORDER BY {}.id ASC", ROOT_ALIAS));
        }
    }

    Ok(builder)
}

/// `INSERT INTO <table> (<columns>) VALUES (...) RETURNING *`
pub fn build_insert<T: Entity>(entity: &T) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        T::TABLE,
        T::COLUMNS.join(", ")
    ));
    for (i, value) in entity.values().iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        value.push_bind(&mut builder);
    }
    builder.push(") RETURNING *");
    builder
}

/// `UPDATE <table> SET <column> = $n, ... WHERE id = $m`
pub fn build_update<T: Entity>(entity: &T) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("UPDATE {} SET ", T::TABLE));
    for (i, (column, value)) in T::COLUMNS.iter().zip(entity.values()).enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        builder.push(format!("{} = ", column));
        value.push_bind(&mut builder);
    }
    builder.push(" WHERE id = ").push_bind(entity.id());
    builder
}

/// Unique-key violations become `Conflict`, anything else stays a database error
pub fn write_error(e: sqlx::Error) -> AppError {
    let unique = e
        .as_database_error()
        .map_or(false, |db| db.is_unique_violation());
    if unique {
        AppError::Conflict(format!("{} | {}", ALREADY_EXISTS_409, e))
    } else {
        AppError::Database(e)
    }
}

/// Fetch rows of `R` by primary key, keyed by id
pub async fn load_by_ids<R: Entity>(
    conn: &mut PgConnection,
    mut ids: Vec<i32>,
) -> AppResult<HashMap<i32, R>> {
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let sql = format!("SELECT * FROM {} WHERE id = ANY($1)", R::TABLE);
    let rows = sqlx::query_as::<_, R>(&sql)
        .bind(ids)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.into_iter().map(|r| (r.id(), r)).collect())
}

#[async_trait]
impl<T: Entity> EntityRepository<T> for PgRepository<T> {
    async fn add(&self, entity: &T) -> AppResult<T> {
        let mut builder = build_insert(entity);
        let mut conn = self.context.connection().await?;
        builder
            .build_query_as::<T>()
            .fetch_one(&mut *conn)
            .await
            .map_err(write_error)
    }

    async fn find(&self, id: i32) -> AppResult<Option<T>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
        let mut conn = self.context.connection().await?;
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn update(&self, entity: &T) -> AppResult<()> {
        let mut builder = build_update(entity);
        let mut conn = self.context.connection().await?;
        let result = builder
            .build()
            .execute(&mut *conn)
            .await
            .map_err(write_error)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} {} not found", T::NAME, entity.id())));
        }
        Ok(())
    }

    async fn delete(&self, entity: &T) -> AppResult<()> {
        self.delete_by_id(entity.id()).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let mut conn = self.context.connection().await?;
        let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} {} not found", T::NAME, id)));
        }
        Ok(())
    }

    async fn get_all(
        &self,
        filter: Option<Filter>,
        order_by: Option<OrderBy>,
        include: &str,
    ) -> AppResult<Vec<T>> {
        let includes = parse_includes::<T>(include)?;
        let mut builder = build_select::<T>(filter.as_ref(), order_by.as_ref())?;

        let mut conn = self.context.connection().await?;
        let mut rows = builder.build_query_as::<T>().fetch_all(&mut *conn).await?;
        for relation in includes {
            T::eager_load(&mut rows, relation, &mut *conn).await?;
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::{
        models::{AudioBook, Author, Book},
        repository::filter::Column,
    };

    fn author() -> Author {
        Author {
            id: 7,
            name: "Jorge".to_string(),
            last_name: "Isaacs".to_string(),
            country: "Colombia".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1836, 4, 1).unwrap(),
        }
    }

    #[test]
    fn test_select_without_filter_orders_by_id() {
        let builder = assert_ok!(build_select::<Author>(None, None));
        assert_eq!(builder.sql(), "SELECT t.* FROM authors AS t ORDER BY t.id ASC");
    }

    #[test]
    fn test_select_joins_only_referenced_relations() {
        let filter = Filter::contains(Column::of("narrator", "name"), "Ana");
        let builder = assert_ok!(build_select::<AudioBook>(Some(&filter), None));
        assert_eq!(
            builder.sql(),
            "SELECT t.* FROM audio_books AS t \
             LEFT JOIN narrators AS narrator ON narrator.id = t.narrator_id \
             WHERE strpos(lower(narrator.name), lower($1)) > 0 ORDER BY t.id ASC"
        );
    }

    #[test]
    fn test_select_joins_relation_once_for_filter_and_order() {
        let filter = Filter::eq(Column::of("author", "country"), "Colombia");
        let order = OrderBy::asc(Column::of("author", "last_name"));
        let builder = assert_ok!(build_select::<Book>(Some(&filter), Some(&order)));
        assert_eq!(builder.sql().matches("LEFT JOIN").count(), 1);
        assert!(builder.sql().ends_with("ORDER BY author.last_name ASC"));
    }

    #[test]
    fn test_select_rejects_unknown_relation() {
        let filter = Filter::eq(Column::of("narrator", "name"), "Ana");
        assert!(build_select::<Book>(Some(&filter), None).is_err());
    }

    #[test]
    fn test_write_error_keeps_non_unique_faults() {
        let err = write_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_parse_includes() {
        let relations = assert_ok!(parse_includes::<AudioBook>(" author, Narrator ,,Author"));
        let names: Vec<_> = relations.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Author", "Narrator"]);

        assert!(assert_ok!(parse_includes::<Author>("")).is_empty());
        assert_err!(parse_includes::<Author>("Books"));
    }

    #[test]
    fn test_insert_lists_columns_in_order() {
        let builder = build_insert(&author());
        assert_eq!(
            builder.sql(),
            "INSERT INTO authors (name, last_name, country, birth_date) VALUES ($1, $2, $3, $4) RETURNING *"
        );
    }

    #[test]
    fn test_update_binds_id_last() {
        let builder = build_update(&author());
        assert_eq!(
            builder.sql(),
            "UPDATE authors SET name = $1, last_name = $2, country = $3, birth_date = $4 WHERE id = $5"
        );
    }
}

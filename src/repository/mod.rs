//! Repository layer for database operations

pub mod filter;
pub mod postgres;
pub mod unit_of_work;

use async_trait::async_trait;

pub use filter::{Column, Filter, OrderBy, Value};
pub use unit_of_work::{PgUnitOfWork, UnitOfWork};

use crate::{error::AppResult, models::Entity};

/// Persistence operations for one entity type
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityRepository<T: Entity>: Send + Sync {
    /// Insert `entity` and return the stored row with its new id
    async fn add(&self, entity: &T) -> AppResult<T>;

    /// Look up by primary key; `None` when absent
    async fn find(&self, id: i32) -> AppResult<Option<T>>;

    async fn update(&self, entity: &T) -> AppResult<()>;

    async fn delete(&self, entity: &T) -> AppResult<()>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;

    /// Rows matching `filter`, sorted by `order_by` (id when `None`), with
    /// the comma-separated relations in `include` eagerly loaded. Returns an
    /// empty vector when nothing matches.
    async fn get_all(
        &self,
        filter: Option<Filter>,
        order_by: Option<OrderBy>,
        include: &str,
    ) -> AppResult<Vec<T>>;
}

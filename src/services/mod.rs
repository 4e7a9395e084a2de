//! Business logic services
//!
//! Every catalog service shares the same Index/Create/Update/Delete/get-by-id
//! behaviour, implemented once on [`EntityService`]. The per-entity modules
//! add their finders as inherent impls on the concrete instantiation.
//!
//! No operation returns an error: domain rejections and persistence faults
//! are both folded into the returned [`BaseMessage`].

pub mod audio_books;
pub mod authors;
pub mod books;
pub mod genres;
pub mod narrators;

#[cfg(test)]
pub(crate) mod testing;

use std::{future::Future, marker::PhantomData};

use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{BaseMessage, Entity},
    repository::{EntityRepository, Filter, OrderBy, PgUnitOfWork, UnitOfWork},
};

pub use audio_books::AudioBookService;
pub use authors::AuthorService;
pub use books::BookService;
pub use genres::GenreService;
pub use narrators::NarratorService;

/// Entity served through [`EntityService`]
pub trait Cataloged: Entity + Validate {
    /// This entity's repository within `uow`
    fn repository<U: UnitOfWork>(uow: &U) -> &dyn EntityRepository<Self>;

    /// Predicate matching stored records that share this record's natural key
    fn duplicate_filter(&self) -> Filter;

    /// Overwrite every mutable field with the values of `source`
    fn overwrite(&mut self, source: Self);

    /// Ordering used by listings and finders
    fn default_order() -> Option<OrderBy> {
        None
    }
}

/// Generic catalog service over one unit of work
pub struct EntityService<U, T> {
    uow: U,
    _entity: PhantomData<fn() -> T>,
}

impl<U: UnitOfWork, T: Cataloged> EntityService<U, T> {
    pub fn new(uow: U) -> Self {
        Self {
            uow,
            _entity: PhantomData,
        }
    }

    fn repository(&self) -> &dyn EntityRepository<T> {
        T::repository(&self.uow)
    }

    /// Run `work`, turning a key conflict into 409 and any other fault into 500
    async fn guard<F>(&self, operation: &'static str, work: F) -> BaseMessage<T>
    where
        F: Future<Output = AppResult<BaseMessage<T>>>,
    {
        match work.await {
            Ok(message) => message,
            Err(AppError::Conflict(detail)) => {
                tracing::debug!(entity = T::NAME, operation, %detail, "Natural key already taken");
                BaseMessage::conflict(T::ALREADY_EXISTS)
            }
            Err(e) => {
                tracing::error!(entity = T::NAME, operation, error = %e, "Catalog operation failed");
                BaseMessage::internal_error(e)
            }
        }
    }

    /// Every record; NotFound when the catalog is empty
    pub async fn index(&self) -> BaseMessage<T> {
        self.guard("index", async {
            let rows = self.repository().get_all(None, T::default_order(), "").await?;
            Ok(BaseMessage::found_or(rows, T::NOT_FOUND))
        })
        .await
    }

    /// Persist a new record unless one with the same natural key exists
    pub async fn create(&self, entity: T) -> BaseMessage<T> {
        if let Err(errors) = entity.validate() {
            tracing::debug!(entity = T::NAME, %errors, "Rejected invalid record");
            return BaseMessage::bad_request(errors);
        }

        self.guard("create", async move {
            let existing = self
                .repository()
                .get_all(Some(entity.duplicate_filter()), None, "")
                .await?;
            if !existing.is_empty() {
                tracing::debug!(entity = T::NAME, existing_id = existing[0].id(), "Duplicate record");
                return Ok(BaseMessage::conflict(T::ALREADY_EXISTS));
            }

            let created = self.repository().add(&entity).await?;
            self.uow.save().await?;
            tracing::info!(entity = T::NAME, id = created.id(), "Record created");
            Ok(BaseMessage::ok(vec![created]))
        })
        .await
    }

    /// Overwrite the record with `entity.id`
    pub async fn update(&self, entity: T) -> BaseMessage<T> {
        if let Err(errors) = entity.validate() {
            tracing::debug!(entity = T::NAME, %errors, "Rejected invalid record");
            return BaseMessage::bad_request(errors);
        }

        self.guard("update", async move {
            let Some(mut current) = self.repository().find(entity.id()).await? else {
                return Ok(BaseMessage::not_found(T::NOT_FOUND));
            };

            current.overwrite(entity);
            self.repository().update(&current).await?;
            self.uow.save().await?;
            tracing::info!(entity = T::NAME, id = current.id(), "Record updated");
            Ok(BaseMessage::ok(vec![current]))
        })
        .await
    }

    /// Remove the record with `id`; the removed record is returned
    pub async fn delete(&self, id: i32) -> BaseMessage<T> {
        self.guard("delete", async {
            let Some(current) = self.repository().find(id).await? else {
                return Ok(BaseMessage::not_found(T::NOT_FOUND));
            };

            self.repository().delete(&current).await?;
            self.uow.save().await?;
            tracing::info!(entity = T::NAME, id, "Record deleted");
            Ok(BaseMessage::ok(vec![current]))
        })
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> BaseMessage<T> {
        self.guard("get_by_id", async {
            let found = self.repository().find(id).await?;
            Ok(BaseMessage::found_or(found.into_iter().collect(), T::NOT_FOUND))
        })
        .await
    }

    /// Shared body of the per-entity finders
    async fn find_where(
        &self,
        operation: &'static str,
        filter: Filter,
        include: &str,
    ) -> BaseMessage<T> {
        self.guard(operation, async {
            let rows = self
                .repository()
                .get_all(Some(filter), T::default_order(), include)
                .await?;
            Ok(BaseMessage::found_or(rows, T::NOT_FOUND))
        })
        .await
    }
}

/// Container handing out request-scoped services
#[derive(Clone)]
pub struct Services {
    pool: PgPool,
}

impl Services {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fresh unit of work; one per request
    pub fn unit_of_work(&self) -> PgUnitOfWork {
        PgUnitOfWork::new(self.pool.clone())
    }

    pub fn authors(&self) -> AuthorService<PgUnitOfWork> {
        AuthorService::new(self.unit_of_work())
    }

    pub fn books(&self) -> BookService<PgUnitOfWork> {
        BookService::new(self.unit_of_work())
    }

    pub fn audio_books(&self) -> AudioBookService<PgUnitOfWork> {
        AudioBookService::new(self.unit_of_work())
    }

    pub fn narrators(&self) -> NarratorService<PgUnitOfWork> {
        NarratorService::new(self.unit_of_work())
    }

    pub fn genres(&self) -> GenreService<PgUnitOfWork> {
        GenreService::new(self.unit_of_work())
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

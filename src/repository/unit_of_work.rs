//! Unit of work: one repository per entity over a shared persistence context

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{
    postgres::{PgContext, PgRepository},
    EntityRepository,
};
use crate::{
    error::AppResult,
    models::{AudioBook, Author, Book, Genre, Narrator},
};

/// Aggregates the catalog repositories and commits their changes together
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn authors(&self) -> &dyn EntityRepository<Author>;
    fn books(&self) -> &dyn EntityRepository<Book>;
    fn audio_books(&self) -> &dyn EntityRepository<AudioBook>;
    fn narrators(&self) -> &dyn EntityRepository<Narrator>;
    fn genres(&self) -> &dyn EntityRepository<Genre>;

    /// Commit every pending mutation as one transaction
    async fn save(&self) -> AppResult<()>;
}

/// PostgreSQL unit of work, created once per request
pub struct PgUnitOfWork {
    context: Arc<PgContext>,
    authors: PgRepository<Author>,
    books: PgRepository<Book>,
    audio_books: PgRepository<AudioBook>,
    narrators: PgRepository<Narrator>,
    genres: PgRepository<Genre>,
}

impl PgUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        let context = Arc::new(PgContext::new(pool));
        Self {
            authors: PgRepository::new(context.clone()),
            books: PgRepository::new(context.clone()),
            audio_books: PgRepository::new(context.clone()),
            narrators: PgRepository::new(context.clone()),
            genres: PgRepository::new(context.clone()),
            context,
        }
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn authors(&self) -> &dyn EntityRepository<Author> {
        &self.authors
    }

    fn books(&self) -> &dyn EntityRepository<Book> {
        &self.books
    }

    fn audio_books(&self) -> &dyn EntityRepository<AudioBook> {
        &self.audio_books
    }

    fn narrators(&self) -> &dyn EntityRepository<Narrator> {
        &self.narrators
    }

    fn genres(&self) -> &dyn EntityRepository<Genre> {
        &self.genres
    }

    async fn save(&self) -> AppResult<()> {
        self.context.commit().await
    }
}

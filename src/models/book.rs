//! Book model

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};
use utoipa::ToSchema;
use validator::Validate;

use super::{
    author::Author,
    entity::{Entity, Relation, AUTHOR_RELATION},
    message::{BOOK_ALREADY_EXISTS, BOOK_NOT_FOUND},
};
use crate::{
    error::AppResult,
    repository::{filter::Value, postgres::load_by_ids},
};

/// Printed book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct Book {
    #[serde(default)]
    pub id: i32,
    /// Title
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// ISBN-10, hyphens allowed
    #[validate(length(min = 10, max = 13))]
    pub isbn10: String,
    /// ISBN-13, hyphens allowed
    #[validate(length(min = 13, max = 17))]
    pub isbn13: String,
    /// Publication date (YYYY-MM-DD)
    pub published: NaiveDate,
    #[validate(length(min = 1, max = 255))]
    pub edition: String,
    /// Dewey decimal classification
    #[validate(length(min = 1, max = 32))]
    pub dewey_index: String,
    pub author_id: i32,
    /// Populated when the query includes `Author`
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

#[async_trait]
impl Entity for Book {
    const NAME: &'static str = "Book";
    const TABLE: &'static str = "books";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "isbn10",
        "isbn13",
        "published",
        "edition",
        "dewey_index",
        "author_id",
    ];
    const RELATIONS: &'static [Relation] = &[AUTHOR_RELATION];
    const NOT_FOUND: &'static str = BOOK_NOT_FOUND;
    const ALREADY_EXISTS: &'static str = BOOK_ALREADY_EXISTS;

    fn id(&self) -> i32 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.isbn10.clone().into(),
            self.isbn13.clone().into(),
            self.published.into(),
            self.edition.clone().into(),
            self.dewey_index.clone().into(),
            self.author_id.into(),
        ]
    }

    async fn eager_load(
        rows: &mut [Self],
        relation: &'static Relation,
        conn: &mut PgConnection,
    ) -> AppResult<()> {
        if relation.alias != AUTHOR_RELATION.alias {
            return Ok(());
        }
        let ids = rows.iter().map(|b| b.author_id).collect();
        let authors = load_by_ids::<Author>(conn, ids).await?;
        for book in rows.iter_mut() {
            book.author = authors.get(&book.author_id).cloned();
        }
        Ok(())
    }
}

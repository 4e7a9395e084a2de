//! Audiobook model

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};
use utoipa::ToSchema;
use validator::Validate;

use super::{
    author::Author,
    entity::{Entity, Relation, AUTHOR_RELATION, NARRATOR_RELATION},
    message::{AUDIOBOOK_ALREADY_EXISTS, AUDIOBOOK_NOT_FOUND},
    narrator::Narrator,
};
use crate::{
    error::AppResult,
    repository::{filter::Value, postgres::load_by_ids},
};

/// Audiobook record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct AudioBook {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 10, max = 13))]
    pub isbn10: String,
    #[validate(length(min = 13, max = 17))]
    pub isbn13: String,
    pub published: NaiveDate,
    #[validate(length(min = 1, max = 255))]
    pub edition: String,
    #[validate(length(min = 1, max = 255))]
    pub genre: String,
    /// Duration in seconds
    #[validate(range(min = 0))]
    pub length_in_seconds: i32,
    /// Media location
    #[validate(length(min = 1))]
    pub path: String,
    pub author_id: i32,
    pub narrator_id: i32,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrator: Option<Narrator>,
}

#[async_trait]
impl Entity for AudioBook {
    const NAME: &'static str = "AudioBook";
    const TABLE: &'static str = "audio_books";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "isbn10",
        "isbn13",
        "published",
        "edition",
        "genre",
        "length_in_seconds",
        "path",
        "author_id",
        "narrator_id",
    ];
    const RELATIONS: &'static [Relation] = &[AUTHOR_RELATION, NARRATOR_RELATION];
    const NOT_FOUND: &'static str = AUDIOBOOK_NOT_FOUND;
    const ALREADY_EXISTS: &'static str = AUDIOBOOK_ALREADY_EXISTS;

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
            self.genre.clone().into(),
            self.length_in_seconds.into(),
            self.path.clone().into(),
            self.author_id.into(),
            self.narrator_id.into(),
        ]
    }

    async fn eager_load(
        rows: &mut [Self],
        relation: &'static Relation,
        conn: &mut PgConnection,
    ) -> AppResult<()> {
        match relation.alias {
            "author" => {
                let ids = rows.iter().map(|a| a.author_id).collect();
                let authors = load_by_ids::<Author>(conn, ids).await?;
                for audio_book in rows.iter_mut() {
                    audio_book.author = authors.get(&audio_book.author_id).cloned();
                }
            }
            "narrator" => {
                let ids = rows.iter().map(|a| a.narrator_id).collect();
                let narrators = load_by_ids::<Narrator>(conn, ids).await?;
                for audio_book in rows.iter_mut() {
                    audio_book.narrator = narrators.get(&audio_book.narrator_id).cloned();
                }
            }
            _ => {}
        }
        Ok(())
    }
}

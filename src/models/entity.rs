//! Shared contract of catalog entities

use async_trait::async_trait;
use sqlx::{postgres::PgRow, FromRow, PgConnection};

use crate::{error::AppResult, repository::filter::Value};

/// Many-to-one relation an entity can join or eagerly load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    /// Name used in include lists (`"Author"`)
    pub name: &'static str,
    /// SQL alias used by filter columns (`"author"`)
    pub alias: &'static str,
    /// Related table
    pub table: &'static str,
    /// Foreign key column on the owning table
    pub foreign_key: &'static str,
}

/// A persisted catalog record with an integer surrogate key.
///
/// `COLUMNS` lists the writable columns (everything but `id`) and
/// [`Entity::values`] yields their values in the same order; the generic
/// repository builds its INSERT and UPDATE statements from the pair.
#[async_trait]
pub trait Entity: for<'r> FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    /// Display name used in envelope messages
    const NAME: &'static str;
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    const RELATIONS: &'static [Relation] = &[];

    /// `404 <Entity> Not Found`
    const NOT_FOUND: &'static str;
    /// `409 <Entity> Already Exist`
    const ALREADY_EXISTS: &'static str;

    fn id(&self) -> i32;

    fn values(&self) -> Vec<Value>;

    /// Resolve a relation by its include name (case-insensitive) or alias
    fn relation(name: &str) -> Option<&'static Relation> {
        Self::RELATIONS
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name) || r.alias == name)
    }

    /// Populate `relation` on every row from the related table
    async fn eager_load(
        _rows: &mut [Self],
        _relation: &'static Relation,
        _conn: &mut PgConnection,
    ) -> AppResult<()> {
        Ok(())
    }
}

/// `author_id` → `authors`
pub const AUTHOR_RELATION: Relation = Relation {
    name: "Author",
    alias: "author",
    table: "authors",
    foreign_key: "author_id",
};

/// `narrator_id` → `narrators`
pub const NARRATOR_RELATION: Relation = Relation {
    name: "Narrator",
    alias: "narrator",
    table: "narrators",
    foreign_key: "narrator_id",
};

//! Audiobook service

use chrono::NaiveDate;

use super::{Cataloged, EntityService};
use crate::{
    models::{AudioBook, BaseMessage},
    repository::{Column, EntityRepository, Filter, OrderBy, UnitOfWork},
};

pub type AudioBookService<U> = EntityService<U, AudioBook>;

const AUTHOR: &str = "Author";
const NARRATOR: &str = "Narrator";

impl Cataloged for AudioBook {
    fn repository<U: UnitOfWork>(uow: &U) -> &dyn EntityRepository<Self> {
        uow.audio_books()
    }

    fn duplicate_filter(&self) -> Filter {
        Filter::eq(Column::own("isbn10"), self.isbn10.as_str())
            .or(Filter::eq(Column::own("isbn13"), self.isbn13.as_str()))
    }

    fn overwrite(&mut self, source: Self) {
        self.name = source.name;
        self.isbn10 = source.isbn10;
        self.isbn13 = source.isbn13;
        self.published = source.published;
        self.edition = source.edition;
        self.genre = source.genre;
        self.length_in_seconds = source.length_in_seconds;
        self.path = source.path;
        self.author_id = source.author_id;
        self.narrator_id = source.narrator_id;
        self.author = None;
        self.narrator = None;
    }

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::asc(Column::own("name")).then_asc(Column::own("id")))
    }
}

impl<U: UnitOfWork> EntityService<U, AudioBook> {
    pub async fn by_name(&self, name: &str) -> BaseMessage<AudioBook> {
        self.find_where("by_name", Filter::contains(Column::own("name"), name), "")
            .await
    }

    pub async fn by_isbn10(&self, isbn10: &str) -> BaseMessage<AudioBook> {
        self.find_where("by_isbn10", Filter::eq(Column::own("isbn10"), isbn10), "")
            .await
    }

    pub async fn by_isbn13(&self, isbn13: &str) -> BaseMessage<AudioBook> {
        self.find_where("by_isbn13", Filter::eq(Column::own("isbn13"), isbn13), "")
            .await
    }

    pub async fn by_published(&self, start: NaiveDate, end: NaiveDate) -> BaseMessage<AudioBook> {
        self.find_where(
            "by_published",
            Filter::between(Column::own("published"), start, end),
            "",
        )
        .await
    }

    pub async fn by_edition(&self, edition: &str) -> BaseMessage<AudioBook> {
        self.find_where("by_edition", Filter::contains(Column::own("edition"), edition), "")
            .await
    }

    pub async fn by_genre(&self, genre: &str) -> BaseMessage<AudioBook> {
        self.find_where("by_genre", Filter::contains(Column::own("genre"), genre), "")
            .await
    }

    pub async fn by_length_in_seconds(&self, seconds: i32) -> BaseMessage<AudioBook> {
        self.find_where(
            "by_length_in_seconds",
            Filter::eq(Column::own("length_in_seconds"), seconds),
            "",
        )
        .await
    }

    pub async fn by_narrator_id(&self, narrator_id: i32) -> BaseMessage<AudioBook> {
        self.find_where(
            "by_narrator_id",
            Filter::eq(Column::own("narrator_id"), narrator_id),
            NARRATOR,
        )
        .await
    }

    pub async fn by_narrator_name(&self, name: &str) -> BaseMessage<AudioBook> {
        self.find_where(
            "by_narrator_name",
            Filter::contains(Column::of("narrator", "name"), name),
            NARRATOR,
        )
        .await
    }

    pub async fn by_narrator_last_name(&self, last_name: &str) -> BaseMessage<AudioBook> {
        self.find_where(
            "by_narrator_last_name",
            Filter::contains(Column::of("narrator", "last_name"), last_name),
            NARRATOR,
        )
        .await
    }

    pub async fn by_narrator_full_name(&self, name: &str, last_name: &str) -> BaseMessage<AudioBook> {
        let filter = Filter::contains(Column::of("narrator", "name"), name)
            .and(Filter::contains(Column::of("narrator", "last_name"), last_name));
        self.find_where("by_narrator_full_name", filter, NARRATOR).await
    }

    /// Matches the narrator's genre, not the audiobook's
    pub async fn by_narrator_genre(&self, genre: &str) -> BaseMessage<AudioBook> {
        self.find_where(
            "by_narrator_genre",
            Filter::contains(Column::of("narrator", "genre"), genre),
            NARRATOR,
        )
        .await
    }

    pub async fn by_author_id(&self, author_id: i32) -> BaseMessage<AudioBook> {
        self.find_where("by_author_id", Filter::eq(Column::own("author_id"), author_id), AUTHOR)
            .await
    }

    pub async fn by_author_name(&self, name: &str) -> BaseMessage<AudioBook> {
        self.find_where(
            "by_author_name",
            Filter::contains(Column::of("author", "name"), name),
            AUTHOR,
        )
        .await
    }
}

//! Book service

use chrono::NaiveDate;

use super::{Cataloged, EntityService};
use crate::{
    models::{BaseMessage, Book},
    repository::{Column, EntityRepository, Filter, OrderBy, UnitOfWork},
};

pub type BookService<U> = EntityService<U, Book>;

const AUTHOR: &str = "Author";

impl Cataloged for Book {
    fn repository<U: UnitOfWork>(uow: &U) -> &dyn EntityRepository<Self> {
        uow.books()
    }

    /// Either ISBN identifies a book
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
        self.dewey_index = source.dewey_index;
        self.author_id = source.author_id;
        self.author = None;
    }

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::asc(Column::own("name")).then_asc(Column::own("id")))
    }
}

impl<U: UnitOfWork> EntityService<U, Book> {
    pub async fn by_name(&self, name: &str) -> BaseMessage<Book> {
        self.find_where("by_name", Filter::contains(Column::own("name"), name), "")
            .await
    }

    pub async fn by_isbn10(&self, isbn10: &str) -> BaseMessage<Book> {
        self.find_where("by_isbn10", Filter::eq(Column::own("isbn10"), isbn10), "")
            .await
    }

    pub async fn by_isbn13(&self, isbn13: &str) -> BaseMessage<Book> {
        self.find_where("by_isbn13", Filter::eq(Column::own("isbn13"), isbn13), "")
            .await
    }

    pub async fn by_published(&self, start: NaiveDate, end: NaiveDate) -> BaseMessage<Book> {
        self.find_where(
            "by_published",
            Filter::between(Column::own("published"), start, end),
            "",
        )
        .await
    }

    pub async fn by_edition(&self, edition: &str) -> BaseMessage<Book> {
        self.find_where("by_edition", Filter::contains(Column::own("edition"), edition), "")
            .await
    }

    pub async fn by_dewey_index(&self, dewey_index: &str) -> BaseMessage<Book> {
        self.find_where(
            "by_dewey_index",
            Filter::eq(Column::own("dewey_index"), dewey_index),
            "",
        )
        .await
    }

    pub async fn by_author_id(&self, author_id: i32) -> BaseMessage<Book> {
        self.find_where("by_author_id", Filter::eq(Column::own("author_id"), author_id), AUTHOR)
            .await
    }

    pub async fn by_author_name(&self, name: &str) -> BaseMessage<Book> {
        self.find_where(
            "by_author_name",
            Filter::contains(Column::of("author", "name"), name),
            AUTHOR,
        )
        .await
    }

    pub async fn by_author_last_name(&self, last_name: &str) -> BaseMessage<Book> {
        self.find_where(
            "by_author_last_name",
            Filter::contains(Column::of("author", "last_name"), last_name),
            AUTHOR,
        )
        .await
    }

    pub async fn by_author_country(&self, country: &str) -> BaseMessage<Book> {
        self.find_where(
            "by_author_country",
            Filter::contains(Column::of("author", "country"), country),
            AUTHOR,
        )
        .await
    }

    /// Both parts must match
    pub async fn by_author_full_name(&self, name: &str, last_name: &str) -> BaseMessage<Book> {
        let filter = Filter::contains(Column::of("author", "name"), name)
            .and(Filter::contains(Column::of("author", "last_name"), last_name));
        self.find_where("by_author_full_name", filter, AUTHOR).await
    }

    pub async fn by_author_birth_date(&self, start: NaiveDate, end: NaiveDate) -> BaseMessage<Book> {
        self.find_where(
            "by_author_birth_date",
            Filter::between(Column::of("author", "birth_date"), start, end),
            AUTHOR,
        )
        .await
    }
}

//! Author service

use chrono::NaiveDate;

use super::{Cataloged, EntityService};
use crate::{
    models::{Author, BaseMessage},
    repository::{Column, EntityRepository, Filter, OrderBy, UnitOfWork},
};

pub type AuthorService<U> = EntityService<U, Author>;

impl Cataloged for Author {
    fn repository<U: UnitOfWork>(uow: &U) -> &dyn EntityRepository<Self> {
        uow.authors()
    }

    fn duplicate_filter(&self) -> Filter {
        Filter::eq(Column::own("name"), self.name.as_str())
            .and(Filter::eq(Column::own("last_name"), self.last_name.as_str()))
    }

    fn overwrite(&mut self, source: Self) {
        self.name = source.name;
        self.last_name = source.last_name;
        self.country = source.country;
        self.birth_date = source.birth_date;
    }

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::asc(Column::own("last_name")).then_asc(Column::own("name")))
    }
}

impl<U: UnitOfWork> EntityService<U, Author> {
    pub async fn by_name(&self, name: &str) -> BaseMessage<Author> {
        self.find_where("by_name", Filter::contains(Column::own("name"), name), "")
            .await
    }

    pub async fn by_last_name(&self, last_name: &str) -> BaseMessage<Author> {
        self.find_where(
            "by_last_name",
            Filter::contains(Column::own("last_name"), last_name),
            "",
        )
        .await
    }

    pub async fn by_country(&self, country: &str) -> BaseMessage<Author> {
        self.find_where("by_country", Filter::contains(Column::own("country"), country), "")
            .await
    }

    /// Authors born within `[start, end]`
    pub async fn by_birth_date(&self, start: NaiveDate, end: NaiveDate) -> BaseMessage<Author> {
        self.find_where(
            "by_birth_date",
            Filter::between(Column::own("birth_date"), start, end),
            "",
        )
        .await
    }
}

//! Narrator service

use super::{Cataloged, EntityService};
use crate::{
    models::{BaseMessage, Narrator},
    repository::{Column, EntityRepository, Filter, OrderBy, UnitOfWork},
};

pub type NarratorService<U> = EntityService<U, Narrator>;

impl Cataloged for Narrator {
    fn repository<U: UnitOfWork>(uow: &U) -> &dyn EntityRepository<Self> {
        uow.narrators()
    }

    fn duplicate_filter(&self) -> Filter {
        Filter::eq(Column::own("name"), self.name.as_str())
            .and(Filter::eq(Column::own("last_name"), self.last_name.as_str()))
    }

    fn overwrite(&mut self, source: Self) {
        self.name = source.name;
        self.last_name = source.last_name;
        self.genre = source.genre;
    }

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::asc(Column::own("last_name")).then_asc(Column::own("name")))
    }
}

impl<U: UnitOfWork> EntityService<U, Narrator> {
    pub async fn by_name(&self, name: &str) -> BaseMessage<Narrator> {
        self.find_where("by_name", Filter::contains(Column::own("name"), name), "")
            .await
    }

    pub async fn by_last_name(&self, last_name: &str) -> BaseMessage<Narrator> {
        self.find_where(
            "by_last_name",
            Filter::contains(Column::own("last_name"), last_name),
            "",
        )
        .await
    }

    pub async fn by_genre(&self, genre: &str) -> BaseMessage<Narrator> {
        self.find_where("by_genre", Filter::contains(Column::own("genre"), genre), "")
            .await
    }
}

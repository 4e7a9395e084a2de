//! Genre service

use super::{Cataloged, EntityService};
use crate::{
    models::{BaseMessage, Genre},
    repository::{Column, EntityRepository, Filter, OrderBy, UnitOfWork},
};

pub type GenreService<U> = EntityService<U, Genre>;

impl Cataloged for Genre {
    fn repository<U: UnitOfWork>(uow: &U) -> &dyn EntityRepository<Self> {
        uow.genres()
    }

    fn duplicate_filter(&self) -> Filter {
        Filter::eq(Column::own("name"), self.name.as_str())
    }

    fn overwrite(&mut self, source: Self) {
        self.name = source.name;
        self.description = source.description;
    }

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::asc(Column::own("name")))
    }
}

impl<U: UnitOfWork> EntityService<U, Genre> {
    pub async fn by_name(&self, name: &str) -> BaseMessage<Genre> {
        self.find_where("by_name", Filter::contains(Column::own("name"), name), "")
            .await
    }

    pub async fn by_description(&self, description: &str) -> BaseMessage<Genre> {
        self.find_where(
            "by_description",
            Filter::contains(Column::own("description"), description),
            "",
        )
        .await
    }
}

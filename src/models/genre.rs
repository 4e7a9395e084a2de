//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    entity::Entity,
    message::{GENRE_ALREADY_EXISTS, GENRE_NOT_FOUND},
};
use crate::repository::filter::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct Genre {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 4000))]
    pub description: String,
}

impl Entity for Genre {
    const NAME: &'static str = "Genre";
    const TABLE: &'static str = "genres";
    const COLUMNS: &'static [&'static str] = &["name", "description"];
    const NOT_FOUND: &'static str = GENRE_NOT_FOUND;
    const ALREADY_EXISTS: &'static str = GENRE_ALREADY_EXISTS;

    fn id(&self) -> i32 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![self.name.clone().into(), self.description.clone().into()]
    }
}

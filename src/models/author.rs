//! Author model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    entity::Entity,
    message::{AUTHOR_ALREADY_EXISTS, AUTHOR_NOT_FOUND},
};
use crate::repository::filter::Value;

/// Author record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct Author {
    /// Ignored on create
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,
    #[validate(length(min = 1, max = 255))]
    pub country: String,
    /// Birth date (YYYY-MM-DD)
    pub birth_date: NaiveDate,
}

impl Entity for Author {
    const NAME: &'static str = "Author";
    const TABLE: &'static str = "authors";
    const COLUMNS: &'static [&'static str] = &["name", "last_name", "country", "birth_date"];
    const NOT_FOUND: &'static str = AUTHOR_NOT_FOUND;
    const ALREADY_EXISTS: &'static str = AUTHOR_ALREADY_EXISTS;

    fn id(&self) -> i32 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.last_name.clone().into(),
            self.country.clone().into(),
            self.birth_date.into(),
        ]
    }
}

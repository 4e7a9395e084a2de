//! Narrator model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    entity::Entity,
    message::{NARRATOR_ALREADY_EXISTS, NARRATOR_NOT_FOUND},
};
use crate::repository::filter::Value;

/// Audiobook narrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct Narrator {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,
    /// Genre the narrator usually performs
    #[validate(length(min = 1, max = 255))]
    pub genre: String,
}

impl Entity for Narrator {
    const NAME: &'static str = "Narrator";
    const TABLE: &'static str = "narrators";
    const COLUMNS: &'static [&'static str] = &["name", "last_name", "genre"];
    const NOT_FOUND: &'static str = NARRATOR_NOT_FOUND;
    const ALREADY_EXISTS: &'static str = NARRATOR_ALREADY_EXISTS;

    fn id(&self) -> i32 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.last_name.clone().into(),
            self.genre.clone().into(),
        ]
    }
}

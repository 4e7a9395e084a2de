//! HTTP handlers for the catalog REST endpoints

pub mod audio_books;
pub mod authors;
pub mod books;
pub mod genres;
pub mod health;
pub mod narrators;
pub mod openapi;

use axum::{http::StatusCode, routing::get, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::IntoParams;

use crate::{
    models::{message::NOT_FOUND_404, BaseMessage},
    AppState,
};

/// Inclusive date range (`?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`)
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Case-insensitive substring
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LastNameQuery {
    /// Case-insensitive substring
    pub last_name: String,
}

/// Both parts must match
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FullNameQuery {
    pub name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountryQuery {
    pub country: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenreQuery {
    pub genre: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EditionQuery {
    pub edition: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Isbn10Query {
    /// Exact match
    pub isbn10: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Isbn13Query {
    /// Exact match
    pub isbn13: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeweyIndexQuery {
    /// Exact match
    pub dewey_index: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DescriptionQuery {
    pub description: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LengthQuery {
    /// Exact duration in seconds
    pub length_in_seconds: i32,
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/authors", authors::routes())
        .nest("/books", books::routes())
        .nest("/audio-books", audio_books::routes())
        .nest("/narrators", narrators::routes())
        .nest("/genres", genres::routes())
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn fallback() -> BaseMessage<()> {
    BaseMessage::new(StatusCode::NOT_FOUND, NOT_FOUND_404, Vec::new())
}

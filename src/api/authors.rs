//! Author API endpoints

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::{CountryQuery, DateRange, LastNameQuery, NameQuery};
use crate::{
    models::{Author, BaseMessage},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors).post(create_author).put(update_author))
        .route("/by-name", get(authors_by_name))
        .route("/by-last-name", get(authors_by_last_name))
        .route("/by-country", get(authors_by_country))
        .route("/by-birth-date", get(authors_by_birth_date))
        .route("/:id", get(get_author).delete(delete_author))
}

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Authors", body = AuthorMessage),
        (status = 404, description = "No authors", body = AuthorMessage)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> BaseMessage<Author> {
    state.services.authors().index().await
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author", body = AuthorMessage),
        (status = 404, description = "Author not found", body = AuthorMessage)
    )
)]
pub async fn get_author(State(state): State<AppState>, Path(id): Path<i32>) -> BaseMessage<Author> {
    state.services.authors().get_by_id(id).await
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = Author,
    responses(
        (status = 200, description = "Author created", body = AuthorMessage),
        (status = 400, description = "Invalid author", body = AuthorMessage),
        (status = 409, description = "Author already exists", body = AuthorMessage)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(author): Json<Author>,
) -> BaseMessage<Author> {
    state.services.authors().create(author).await
}

/// Update an author
#[utoipa::path(
    put,
    path = "/authors",
    tag = "authors",
    request_body = Author,
    responses(
        (status = 200, description = "Author updated", body = AuthorMessage),
        (status = 404, description = "Author not found", body = AuthorMessage)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Json(author): Json<Author>,
) -> BaseMessage<Author> {
    state.services.authors().update(author).await
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Removed author", body = AuthorMessage),
        (status = 404, description = "Author not found", body = AuthorMessage)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> BaseMessage<Author> {
    state.services.authors().delete(id).await
}

#[utoipa::path(
    get,
    path = "/authors/by-name",
    tag = "authors",
    params(NameQuery),
    responses((status = 200, description = "Matching authors", body = AuthorMessage))
)]
pub async fn authors_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> BaseMessage<Author> {
    state.services.authors().by_name(&query.name).await
}

#[utoipa::path(
    get,
    path = "/authors/by-last-name",
    tag = "authors",
    params(LastNameQuery),
    responses((status = 200, description = "Matching authors", body = AuthorMessage))
)]
pub async fn authors_by_last_name(
    State(state): State<AppState>,
    Query(query): Query<LastNameQuery>,
) -> BaseMessage<Author> {
    state.services.authors().by_last_name(&query.last_name).await
}

#[utoipa::path(
    get,
    path = "/authors/by-country",
    tag = "authors",
    params(CountryQuery),
    responses((status = 200, description = "Matching authors", body = AuthorMessage))
)]
pub async fn authors_by_country(
    State(state): State<AppState>,
    Query(query): Query<CountryQuery>,
) -> BaseMessage<Author> {
    state.services.authors().by_country(&query.country).await
}

/// Authors born within the range, bounds included
#[utoipa::path(
    get,
    path = "/authors/by-birth-date",
    tag = "authors",
    params(DateRange),
    responses((status = 200, description = "Matching authors", body = AuthorMessage))
)]
pub async fn authors_by_birth_date(
    State(state): State<AppState>,
    Query(range): Query<DateRange>,
) -> BaseMessage<Author> {
    state
        .services
        .authors()
        .by_birth_date(range.start_date, range.end_date)
        .await
}

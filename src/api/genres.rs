//! Genre API endpoints

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::{DescriptionQuery, NameQuery};
use crate::{
    models::{BaseMessage, Genre},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_genres).post(create_genre).put(update_genre))
        .route("/by-name", get(genres_by_name))
        .route("/by-description", get(genres_by_description))
        .route("/:id", get(get_genre).delete(delete_genre))
}

#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    responses(
        (status = 200, description = "Genres", body = GenreMessage),
        (status = 404, description = "No genres", body = GenreMessage)
    )
)]
pub async fn list_genres(State(state): State<AppState>) -> BaseMessage<Genre> {
    state.services.genres().index().await
}

#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre", body = GenreMessage),
        (status = 404, description = "Genre not found", body = GenreMessage)
    )
)]
pub async fn get_genre(State(state): State<AppState>, Path(id): Path<i32>) -> BaseMessage<Genre> {
    state.services.genres().get_by_id(id).await
}

#[utoipa::path(
    post,
    path = "/genres",
    tag = "genres",
    request_body = Genre,
    responses(
        (status = 200, description = "Genre created", body = GenreMessage),
        (status = 409, description = "Genre already exists", body = GenreMessage)
    )
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(genre): Json<Genre>,
) -> BaseMessage<Genre> {
    state.services.genres().create(genre).await
}

#[utoipa::path(
    put,
    path = "/genres",
    tag = "genres",
    request_body = Genre,
    responses(
        (status = 200, description = "Genre updated", body = GenreMessage),
        (status = 404, description = "Genre not found", body = GenreMessage)
    )
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Json(genre): Json<Genre>,
) -> BaseMessage<Genre> {
    state.services.genres().update(genre).await
}

#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Removed genre", body = GenreMessage),
        (status = 404, description = "Genre not found", body = GenreMessage)
    )
)]
pub async fn delete_genre(State(state): State<AppState>, Path(id): Path<i32>) -> BaseMessage<Genre> {
    state.services.genres().delete(id).await
}

#[utoipa::path(
    get,
    path = "/genres/by-name",
    tag = "genres",
    params(NameQuery),
    responses((status = 200, description = "Matching genres", body = GenreMessage))
)]
pub async fn genres_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> BaseMessage<Genre> {
    state.services.genres().by_name(&query.name).await
}

#[utoipa::path(
    get,
    path = "/genres/by-description",
    tag = "genres",
    params(DescriptionQuery),
    responses((status = 200, description = "Matching genres", body = GenreMessage))
)]
pub async fn genres_by_description(
    State(state): State<AppState>,
    Query(query): Query<DescriptionQuery>,
) -> BaseMessage<Genre> {
    state.services.genres().by_description(&query.description).await
}

//! Narrator API endpoints

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::{GenreQuery, LastNameQuery, NameQuery};
use crate::{
    models::{BaseMessage, Narrator},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_narrators).post(create_narrator).put(update_narrator))
        .route("/by-name", get(narrators_by_name))
        .route("/by-last-name", get(narrators_by_last_name))
        .route("/by-genre", get(narrators_by_genre))
        .route("/:id", get(get_narrator).delete(delete_narrator))
}

/// List all narrators
#[utoipa::path(
    get,
    path = "/narrators",
    tag = "narrators",
    responses(
        (status = 200, description = "Narrators", body = NarratorMessage),
        (status = 404, description = "No narrators", body = NarratorMessage)
    )
)]
pub async fn list_narrators(State(state): State<AppState>) -> BaseMessage<Narrator> {
    state.services.narrators().index().await
}

#[utoipa::path(
    get,
    path = "/narrators/{id}",
    tag = "narrators",
    params(("id" = i32, Path, description = "Narrator ID")),
    responses(
        (status = 200, description = "Narrator", body = NarratorMessage),
        (status = 404, description = "Narrator not found", body = NarratorMessage)
    )
)]
pub async fn get_narrator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> BaseMessage<Narrator> {
    state.services.narrators().get_by_id(id).await
}

#[utoipa::path(
    post,
    path = "/narrators",
    tag = "narrators",
    request_body = Narrator,
    responses(
        (status = 200, description = "Narrator created", body = NarratorMessage),
        (status = 409, description = "Narrator already exists", body = NarratorMessage)
    )
)]
pub async fn create_narrator(
    State(state): State<AppState>,
    Json(narrator): Json<Narrator>,
) -> BaseMessage<Narrator> {
    state.services.narrators().create(narrator).await
}

#[utoipa::path(
    put,
    path = "/narrators",
    tag = "narrators",
    request_body = Narrator,
    responses(
        (status = 200, description = "Narrator updated", body = NarratorMessage),
        (status = 404, description = "Narrator not found", body = NarratorMessage)
    )
)]
pub async fn update_narrator(
    State(state): State<AppState>,
    Json(narrator): Json<Narrator>,
) -> BaseMessage<Narrator> {
    state.services.narrators().update(narrator).await
}

#[utoipa::path(
    delete,
    path = "/narrators/{id}",
    tag = "narrators",
    params(("id" = i32, Path, description = "Narrator ID")),
    responses(
        (status = 200, description = "Removed narrator", body = NarratorMessage),
        (status = 404, description = "Narrator not found", body = NarratorMessage)
    )
)]
pub async fn delete_narrator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> BaseMessage<Narrator> {
    state.services.narrators().delete(id).await
}

#[utoipa::path(
    get,
    path = "/narrators/by-name",
    tag = "narrators",
    params(NameQuery),
    responses((status = 200, description = "Matching narrators", body = NarratorMessage))
)]
pub async fn narrators_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> BaseMessage<Narrator> {
    state.services.narrators().by_name(&query.name).await
}

#[utoipa::path(
    get,
    path = "/narrators/by-last-name",
    tag = "narrators",
    params(LastNameQuery),
    responses((status = 200, description = "Matching narrators", body = NarratorMessage))
)]
pub async fn narrators_by_last_name(
    State(state): State<AppState>,
    Query(query): Query<LastNameQuery>,
) -> BaseMessage<Narrator> {
    state.services.narrators().by_last_name(&query.last_name).await
}

#[utoipa::path(
    get,
    path = "/narrators/by-genre",
    tag = "narrators",
    params(GenreQuery),
    responses((status = 200, description = "Matching narrators", body = NarratorMessage))
)]
pub async fn narrators_by_genre(
    State(state): State<AppState>,
    Query(query): Query<GenreQuery>,
) -> BaseMessage<Narrator> {
    state.services.narrators().by_genre(&query.genre).await
}

//! Audiobook API endpoints

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::{
    DateRange, EditionQuery, FullNameQuery, GenreQuery, Isbn10Query, Isbn13Query, LastNameQuery,
    LengthQuery, NameQuery,
};
use crate::{
    models::{AudioBook, BaseMessage},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_audio_books).post(create_audio_book).put(update_audio_book))
        .route("/by-name", get(audio_books_by_name))
        .route("/by-isbn10", get(audio_books_by_isbn10))
        .route("/by-isbn13", get(audio_books_by_isbn13))
        .route("/by-published", get(audio_books_by_published))
        .route("/by-edition", get(audio_books_by_edition))
        .route("/by-genre", get(audio_books_by_genre))
        .route("/by-length", get(audio_books_by_length))
        .route("/by-narrator/:narrator_id", get(audio_books_by_narrator_id))
        .route("/by-narrator-name", get(audio_books_by_narrator_name))
        .route("/by-narrator-last-name", get(audio_books_by_narrator_last_name))
        .route("/by-narrator-full-name", get(audio_books_by_narrator_full_name))
        .route("/by-narrator-genre", get(audio_books_by_narrator_genre))
        .route("/by-author/:author_id", get(audio_books_by_author_id))
        .route("/by-author-name", get(audio_books_by_author_name))
        .route("/:id", get(get_audio_book).delete(delete_audio_book))
}

/// List all audiobooks
#[utoipa::path(
    get,
    path = "/audio-books",
    tag = "audio-books",
    responses(
        (status = 200, description = "Audiobooks", body = AudioBookMessage),
        (status = 404, description = "No audiobooks", body = AudioBookMessage)
    )
)]
pub async fn list_audio_books(State(state): State<AppState>) -> BaseMessage<AudioBook> {
    state.services.audio_books().index().await
}

/// Get audiobook by ID
#[utoipa::path(
    get,
    path = "/audio-books/{id}",
    tag = "audio-books",
    params(("id" = i32, Path, description = "Audiobook ID")),
    responses(
        (status = 200, description = "Audiobook", body = AudioBookMessage),
        (status = 404, description = "Audiobook not found", body = AudioBookMessage)
    )
)]
pub async fn get_audio_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().get_by_id(id).await
}

/// Create an audiobook
#[utoipa::path(
    post,
    path = "/audio-books",
    tag = "audio-books",
    request_body = AudioBook,
    responses(
        (status = 200, description = "Audiobook created", body = AudioBookMessage),
        (status = 400, description = "Invalid audiobook", body = AudioBookMessage),
        (status = 409, description = "ISBN already catalogued", body = AudioBookMessage)
    )
)]
pub async fn create_audio_book(
    State(state): State<AppState>,
    Json(audio_book): Json<AudioBook>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().create(audio_book).await
}

/// Update an audiobook
#[utoipa::path(
    put,
    path = "/audio-books",
    tag = "audio-books",
    request_body = AudioBook,
    responses(
        (status = 200, description = "Audiobook updated", body = AudioBookMessage),
        (status = 404, description = "Audiobook not found", body = AudioBookMessage)
    )
)]
pub async fn update_audio_book(
    State(state): State<AppState>,
    Json(audio_book): Json<AudioBook>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().update(audio_book).await
}

/// Delete an audiobook
#[utoipa::path(
    delete,
    path = "/audio-books/{id}",
    tag = "audio-books",
    params(("id" = i32, Path, description = "Audiobook ID")),
    responses(
        (status = 200, description = "Removed audiobook", body = AudioBookMessage),
        (status = 404, description = "Audiobook not found", body = AudioBookMessage)
    )
)]
pub async fn delete_audio_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().delete(id).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-name",
    tag = "audio-books",
    params(NameQuery),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_name(&query.name).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-isbn10",
    tag = "audio-books",
    params(Isbn10Query),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_isbn10(
    State(state): State<AppState>,
    Query(query): Query<Isbn10Query>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_isbn10(&query.isbn10).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-isbn13",
    tag = "audio-books",
    params(Isbn13Query),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_isbn13(
    State(state): State<AppState>,
    Query(query): Query<Isbn13Query>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_isbn13(&query.isbn13).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-published",
    tag = "audio-books",
    params(DateRange),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_published(
    State(state): State<AppState>,
    Query(range): Query<DateRange>,
) -> BaseMessage<AudioBook> {
    state
        .services
        .audio_books()
        .by_published(range.start_date, range.end_date)
        .await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-edition",
    tag = "audio-books",
    params(EditionQuery),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_edition(
    State(state): State<AppState>,
    Query(query): Query<EditionQuery>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_edition(&query.edition).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-genre",
    tag = "audio-books",
    params(GenreQuery),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_genre(
    State(state): State<AppState>,
    Query(query): Query<GenreQuery>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_genre(&query.genre).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-length",
    tag = "audio-books",
    params(LengthQuery),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_length(
    State(state): State<AppState>,
    Query(query): Query<LengthQuery>,
) -> BaseMessage<AudioBook> {
    state
        .services
        .audio_books()
        .by_length_in_seconds(query.length_in_seconds)
        .await
}

/// Audiobooks read by the narrator, with the narrator loaded
#[utoipa::path(
    get,
    path = "/audio-books/by-narrator/{narrator_id}",
    tag = "audio-books",
    params(("narrator_id" = i32, Path, description = "Narrator ID")),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_narrator_id(
    State(state): State<AppState>,
    Path(narrator_id): Path<i32>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_narrator_id(narrator_id).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-narrator-name",
    tag = "audio-books",
    params(NameQuery),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_narrator_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_narrator_name(&query.name).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-narrator-last-name",
    tag = "audio-books",
    params(LastNameQuery),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_narrator_last_name(
    State(state): State<AppState>,
    Query(query): Query<LastNameQuery>,
) -> BaseMessage<AudioBook> {
    state
        .services
        .audio_books()
        .by_narrator_last_name(&query.last_name)
        .await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-narrator-full-name",
    tag = "audio-books",
    params(FullNameQuery),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_narrator_full_name(
    State(state): State<AppState>,
    Query(query): Query<FullNameQuery>,
) -> BaseMessage<AudioBook> {
    state
        .services
        .audio_books()
        .by_narrator_full_name(&query.name, &query.last_name)
        .await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-narrator-genre",
    tag = "audio-books",
    params(GenreQuery),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_narrator_genre(
    State(state): State<AppState>,
    Query(query): Query<GenreQuery>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_narrator_genre(&query.genre).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-author/{author_id}",
    tag = "audio-books",
    params(("author_id" = i32, Path, description = "Author ID")),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_author_id(
    State(state): State<AppState>,
    Path(author_id): Path<i32>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_author_id(author_id).await
}

#[utoipa::path(
    get,
    path = "/audio-books/by-author-name",
    tag = "audio-books",
    params(NameQuery),
    responses((status = 200, description = "Matching audiobooks", body = AudioBookMessage))
)]
pub async fn audio_books_by_author_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> BaseMessage<AudioBook> {
    state.services.audio_books().by_author_name(&query.name).await
}

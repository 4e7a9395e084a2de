//! Book API endpoints

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::{
    CountryQuery, DateRange, DeweyIndexQuery, EditionQuery, FullNameQuery, Isbn10Query,
    Isbn13Query, LastNameQuery, NameQuery,
};
use crate::{
    models::{BaseMessage, Book},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book).put(update_book))
        .route("/by-name", get(books_by_name))
        .route("/by-isbn10", get(books_by_isbn10))
        .route("/by-isbn13", get(books_by_isbn13))
        .route("/by-published", get(books_by_published))
        .route("/by-edition", get(books_by_edition))
        .route("/by-dewey-index", get(books_by_dewey_index))
        .route("/by-author/:author_id", get(books_by_author_id))
        .route("/by-author-name", get(books_by_author_name))
        .route("/by-author-last-name", get(books_by_author_last_name))
        .route("/by-author-country", get(books_by_author_country))
        .route("/by-author-full-name", get(books_by_author_full_name))
        .route("/by-author-birth-date", get(books_by_author_birth_date))
        .route("/:id", get(get_book).delete(delete_book))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Books", body = BookMessage),
        (status = 404, description = "No books", body = BookMessage)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> BaseMessage<Book> {
    state.services.books().index().await
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book", body = BookMessage),
        (status = 404, description = "Book not found", body = BookMessage)
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> BaseMessage<Book> {
    state.services.books().get_by_id(id).await
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book created", body = BookMessage),
        (status = 400, description = "Invalid book", body = BookMessage),
        (status = 409, description = "ISBN already catalogued", body = BookMessage)
    )
)]
pub async fn create_book(State(state): State<AppState>, Json(book): Json<Book>) -> BaseMessage<Book> {
    state.services.books().create(book).await
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = BookMessage),
        (status = 404, description = "Book not found", body = BookMessage)
    )
)]
pub async fn update_book(State(state): State<AppState>, Json(book): Json<Book>) -> BaseMessage<Book> {
    state.services.books().update(book).await
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Removed book", body = BookMessage),
        (status = 404, description = "Book not found", body = BookMessage)
    )
)]
pub async fn delete_book(State(state): State<AppState>, Path(id): Path<i32>) -> BaseMessage<Book> {
    state.services.books().delete(id).await
}

#[utoipa::path(
    get,
    path = "/books/by-name",
    tag = "books",
    params(NameQuery),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> BaseMessage<Book> {
    state.services.books().by_name(&query.name).await
}

#[utoipa::path(
    get,
    path = "/books/by-isbn10",
    tag = "books",
    params(Isbn10Query),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_isbn10(
    State(state): State<AppState>,
    Query(query): Query<Isbn10Query>,
) -> BaseMessage<Book> {
    state.services.books().by_isbn10(&query.isbn10).await
}

#[utoipa::path(
    get,
    path = "/books/by-isbn13",
    tag = "books",
    params(Isbn13Query),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_isbn13(
    State(state): State<AppState>,
    Query(query): Query<Isbn13Query>,
) -> BaseMessage<Book> {
    state.services.books().by_isbn13(&query.isbn13).await
}

/// Books published within the range, bounds included
#[utoipa::path(
    get,
    path = "/books/by-published",
    tag = "books",
    params(DateRange),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_published(
    State(state): State<AppState>,
    Query(range): Query<DateRange>,
) -> BaseMessage<Book> {
    state
        .services
        .books()
        .by_published(range.start_date, range.end_date)
        .await
}

#[utoipa::path(
    get,
    path = "/books/by-edition",
    tag = "books",
    params(EditionQuery),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_edition(
    State(state): State<AppState>,
    Query(query): Query<EditionQuery>,
) -> BaseMessage<Book> {
    state.services.books().by_edition(&query.edition).await
}

#[utoipa::path(
    get,
    path = "/books/by-dewey-index",
    tag = "books",
    params(DeweyIndexQuery),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_dewey_index(
    State(state): State<AppState>,
    Query(query): Query<DeweyIndexQuery>,
) -> BaseMessage<Book> {
    state.services.books().by_dewey_index(&query.dewey_index).await
}

/// Books written by the author, with the author loaded
#[utoipa::path(
    get,
    path = "/books/by-author/{author_id}",
    tag = "books",
    params(("author_id" = i32, Path, description = "Author ID")),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_author_id(
    State(state): State<AppState>,
    Path(author_id): Path<i32>,
) -> BaseMessage<Book> {
    state.services.books().by_author_id(author_id).await
}

#[utoipa::path(
    get,
    path = "/books/by-author-name",
    tag = "books",
    params(NameQuery),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_author_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> BaseMessage<Book> {
    state.services.books().by_author_name(&query.name).await
}

#[utoipa::path(
    get,
    path = "/books/by-author-last-name",
    tag = "books",
    params(LastNameQuery),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_author_last_name(
    State(state): State<AppState>,
    Query(query): Query<LastNameQuery>,
) -> BaseMessage<Book> {
    state.services.books().by_author_last_name(&query.last_name).await
}

#[utoipa::path(
    get,
    path = "/books/by-author-country",
    tag = "books",
    params(CountryQuery),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_author_country(
    State(state): State<AppState>,
    Query(query): Query<CountryQuery>,
) -> BaseMessage<Book> {
    state.services.books().by_author_country(&query.country).await
}

#[utoipa::path(
    get,
    path = "/books/by-author-full-name",
    tag = "books",
    params(FullNameQuery),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_author_full_name(
    State(state): State<AppState>,
    Query(query): Query<FullNameQuery>,
) -> BaseMessage<Book> {
    state
        .services
        .books()
        .by_author_full_name(&query.name, &query.last_name)
        .await
}

#[utoipa::path(
    get,
    path = "/books/by-author-birth-date",
    tag = "books",
    params(DateRange),
    responses((status = 200, description = "Matching books", body = BookMessage))
)]
pub async fn books_by_author_birth_date(
    State(state): State<AppState>,
    Query(range): Query<DateRange>,
) -> BaseMessage<Book> {
    state
        .services
        .books()
        .by_author_birth_date(range.start_date, range.end_date)
        .await
}

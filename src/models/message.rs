//! Uniform response envelope returned by every catalog operation

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

use super::{AudioBook, Author, Book, Genre, Narrator};

pub const OK_200: &str = "200 OK";
pub const BAD_REQUEST_400: &str = "400 Bad Request";
pub const INTERNAL_SERVER_ERROR_500: &str = "500 Internal Server Error";

// Not Found 404
pub const NOT_FOUND_404: &str = "404 Not Found";
pub const BOOK_NOT_FOUND: &str = "404 Book Not Found";
pub const AUTHOR_NOT_FOUND: &str = "404 Author Not Found";
pub const AUDIOBOOK_NOT_FOUND: &str = "404 AudioBook Not Found";
pub const NARRATOR_NOT_FOUND: &str = "404 Narrator Not Found";
pub const GENRE_NOT_FOUND: &str = "404 Genre Not Found";

// Already Exist 409
pub const ALREADY_EXISTS_409: &str = "409 Already Exist";
pub const BOOK_ALREADY_EXISTS: &str = "409 Book Already Exist";
pub const AUTHOR_ALREADY_EXISTS: &str = "409 Author Already Exist";
pub const AUDIOBOOK_ALREADY_EXISTS: &str = "409 AudioBook Already Exist";
pub const NARRATOR_ALREADY_EXISTS: &str = "409 Narrator Already Exist";
pub const GENRE_ALREADY_EXISTS: &str = "409 Genre Already Exist";

/// Envelope: message, status code, element count and elements
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[aliases(
    AuthorMessage = BaseMessage<Author>,
    BookMessage = BaseMessage<Book>,
    AudioBookMessage = BaseMessage<AudioBook>,
    NarratorMessage = BaseMessage<Narrator>,
    GenreMessage = BaseMessage<Genre>
)]
pub struct BaseMessage<T> {
    pub message: String,
    #[serde(serialize_with = "serialize_status")]
    #[schema(value_type = u16, example = 200)]
    pub status_code: StatusCode,
    pub total_elements: usize,
    pub response_elements: Vec<T>,
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

impl<T> BaseMessage<T> {
    pub fn new(status_code: StatusCode, message: impl Into<String>, elements: Vec<T>) -> Self {
        Self {
            message: message.into(),
            status_code,
            total_elements: elements.len(),
            response_elements: elements,
        }
    }

    pub fn ok(elements: Vec<T>) -> Self {
        Self::new(StatusCode::OK, OK_200, elements)
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, Vec::new())
    }

    pub fn conflict(message: &str) -> Self {
        Self::new(StatusCode::CONFLICT, message, Vec::new())
    }

    pub fn bad_request(detail: impl std::fmt::Display) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("{} | {}", BAD_REQUEST_400, detail),
            Vec::new(),
        )
    }

    /// `500 Internal Server Error | <fault>`
    pub fn internal_error(fault: impl std::fmt::Display) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{} | {}", INTERNAL_SERVER_ERROR_500, fault),
            Vec::new(),
        )
    }

    /// OK with `elements`, or NotFound with `not_found` when there are none
    pub fn found_or(elements: Vec<T>, not_found: &str) -> Self {
        if elements.is_empty() {
            Self::not_found(not_found)
        } else {
            Self::ok(elements)
        }
    }
}

impl<T: Serialize> IntoResponse for BaseMessage<T> {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

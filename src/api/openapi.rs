//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{audio_books, authors, books, genres, health, narrators},
    models::message::{AudioBookMessage, AuthorMessage, BookMessage, GenreMessage, NarratorMessage},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Katio API",
        version = "1.0.0",
        description = "Library catalog REST API: books, audiobooks, authors, narrators and genres"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        authors::authors_by_name,
        authors::authors_by_last_name,
        authors::authors_by_country,
        authors::authors_by_birth_date,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::books_by_name,
        books::books_by_isbn10,
        books::books_by_isbn13,
        books::books_by_published,
        books::books_by_edition,
        books::books_by_dewey_index,
        books::books_by_author_id,
        books::books_by_author_name,
        books::books_by_author_last_name,
        books::books_by_author_country,
        books::books_by_author_full_name,
        books::books_by_author_birth_date,
        // Audiobooks
        audio_books::list_audio_books,
        audio_books::get_audio_book,
        audio_books::create_audio_book,
        audio_books::update_audio_book,
        audio_books::delete_audio_book,
        audio_books::audio_books_by_name,
        audio_books::audio_books_by_isbn10,
        audio_books::audio_books_by_isbn13,
        audio_books::audio_books_by_published,
        audio_books::audio_books_by_edition,
        audio_books::audio_books_by_genre,
        audio_books::audio_books_by_length,
        audio_books::audio_books_by_narrator_id,
        audio_books::audio_books_by_narrator_name,
        audio_books::audio_books_by_narrator_last_name,
        audio_books::audio_books_by_narrator_full_name,
        audio_books::audio_books_by_narrator_genre,
        audio_books::audio_books_by_author_id,
        audio_books::audio_books_by_author_name,
        // Narrators
        narrators::list_narrators,
        narrators::get_narrator,
        narrators::create_narrator,
        narrators::update_narrator,
        narrators::delete_narrator,
        narrators::narrators_by_name,
        narrators::narrators_by_last_name,
        narrators::narrators_by_genre,
        // Genres
        genres::list_genres,
        genres::get_genre,
        genres::create_genre,
        genres::update_genre,
        genres::delete_genre,
        genres::genres_by_name,
        genres::genres_by_description,
    ),
    components(
        schemas(
            crate::models::Author,
            crate::models::Book,
            crate::models::AudioBook,
            crate::models::Narrator,
            crate::models::Genre,
            AuthorMessage,
            BookMessage,
            AudioBookMessage,
            NarratorMessage,
            GenreMessage,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author catalog"),
        (name = "books", description = "Printed book catalog"),
        (name = "audio-books", description = "Audiobook catalog"),
        (name = "narrators", description = "Narrator catalog"),
        (name = "genres", description = "Genre catalog")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/health",
            "/authors",
            "/authors/by-birth-date",
            "/books/by-author/{author_id}",
            "/audio-books/by-narrator/{narrator_id}",
            "/narrators/{id}",
            "/genres/by-description",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }
}

//! In-memory unit of work and fixtures for service tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{AudioBook, Author, Book, Genre, Narrator},
    repository::{EntityRepository, MockEntityRepository, UnitOfWork},
};

/// Unit of work whose repositories are mockall mocks.
///
/// A mock without expectations panics when called, so tests only set up the
/// calls they expect. `saves` counts commits.
pub struct FakeUnitOfWork {
    pub authors: MockEntityRepository<Author>,
    pub books: MockEntityRepository<Book>,
    pub audio_books: MockEntityRepository<AudioBook>,
    pub narrators: MockEntityRepository<Narrator>,
    pub genres: MockEntityRepository<Genre>,
    pub saves: AtomicUsize,
    save_fault: Option<String>,
}

impl Default for FakeUnitOfWork {
    fn default() -> Self {
        Self {
            authors: MockEntityRepository::new(),
            books: MockEntityRepository::new(),
            audio_books: MockEntityRepository::new(),
            narrators: MockEntityRepository::new(),
            genres: MockEntityRepository::new(),
            saves: AtomicUsize::new(0),
            save_fault: None,
        }
    }
}

impl FakeUnitOfWork {
    /// Unit of work whose commit fails with `reason`
    pub fn failing_save(reason: &str) -> Self {
        Self {
            save_fault: Some(reason.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl UnitOfWork for FakeUnitOfWork {
    fn authors(&self) -> &dyn EntityRepository<Author> {
        &self.authors
    }

    fn books(&self) -> &dyn EntityRepository<Book> {
        &self.books
    }

    fn audio_books(&self) -> &dyn EntityRepository<AudioBook> {
        &self.audio_books
    }

    fn narrators(&self) -> &dyn EntityRepository<Narrator> {
        &self.narrators
    }

    fn genres(&self) -> &dyn EntityRepository<Genre> {
        &self.genres
    }

    async fn save(&self) -> AppResult<()> {
        if let Some(reason) = &self.save_fault {
            return Err(AppError::Internal(reason.clone()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn fault() -> AppError {
    AppError::Internal("Repository error".to_string())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn authors() -> Vec<Author> {
    vec![
        Author {
            id: 1,
            name: "Gabriel".to_string(),
            last_name: "García Márquez".to_string(),
            country: "Colombia".to_string(),
            birth_date: date(1940, 3, 3),
        },
        Author {
            id: 2,
            name: "Jorge".to_string(),
            last_name: "Isaacs".to_string(),
            country: "Colombia".to_string(),
            birth_date: date(1836, 4, 1),
        },
    ]
}

pub fn narrators() -> Vec<Narrator> {
    vec![
        Narrator {
            id: 1,
            name: "Ana".to_string(),
            last_name: "Sánchez".to_string(),
            genre: "Novel".to_string(),
        },
        Narrator {
            id: 2,
            name: "Luis".to_string(),
            last_name: "Pardo".to_string(),
            genre: "Poetry".to_string(),
        },
    ]
}

pub fn genres() -> Vec<Genre> {
    vec![
        Genre {
            id: 1,
            name: "Novel".to_string(),
            description: "Long-form narrative fiction".to_string(),
        },
        Genre {
            id: 2,
            name: "Poetry".to_string(),
            description: "Verse".to_string(),
        },
    ]
}

pub fn books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            name: "Cien años de soledad".to_string(),
            isbn10: "8497592204".to_string(),
            isbn13: "978-8497592208".to_string(),
            published: date(1967, 5, 30),
            edition: "Primera".to_string(),
            dewey_index: "863".to_string(),
            author_id: 1,
            author: None,
        },
        Book {
            id: 2,
            name: "María".to_string(),
            isbn10: "8437604176".to_string(),
            isbn13: "978-8437604176".to_string(),
            published: date(1867, 1, 1),
            edition: "Cátedra".to_string(),
            dewey_index: "863.5".to_string(),
            author_id: 2,
            author: None,
        },
    ]
}

pub fn audio_books() -> Vec<AudioBook> {
    vec![
        AudioBook {
            id: 1,
            name: "Cien años de soledad".to_string(),
            isbn10: "0307350487".to_string(),
            isbn13: "978-0307350480".to_string(),
            published: date(2008, 9, 16),
            edition: "Unabridged".to_string(),
            genre: "Novel".to_string(),
            length_in_seconds: 86_400,
            path: "/media/audio/cien-anos.mp3".to_string(),
            author_id: 1,
            narrator_id: 1,
            author: None,
            narrator: None,
        },
        AudioBook {
            id: 2,
            name: "María".to_string(),
            isbn10: "1234567890".to_string(),
            isbn13: "978-1234567897".to_string(),
            published: date(2015, 2, 1),
            edition: "Abridged".to_string(),
            genre: "Novel".to_string(),
            length_in_seconds: 36_000,
            path: "/media/audio/maria.mp3".to_string(),
            author_id: 2,
            narrator_id: 2,
            author: None,
            narrator: None,
        },
    ]
}

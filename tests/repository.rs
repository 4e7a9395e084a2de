//! Repository and unit-of-work behaviour against a migrated PostgreSQL database

use anyhow::Result;
use axum::http::StatusCode;
use chrono::NaiveDate;
use sqlx::PgPool;

use katio_server::{
    models::{
        message::{BOOK_ALREADY_EXISTS, GENRE_ALREADY_EXISTS, OK_200},
        AudioBook, Author, Book, Genre, Narrator,
    },
    repository::{Column, Filter, PgUnitOfWork, UnitOfWork},
    services::Services,
    AppError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn author(name: &str, last_name: &str, birth_date: NaiveDate) -> Author {
    Author {
        id: 0,
        name: name.to_string(),
        last_name: last_name.to_string(),
        country: "Colombia".to_string(),
        birth_date,
    }
}

fn book(name: &str, isbn10: &str, isbn13: &str, author_id: i32) -> Book {
    Book {
        id: 0,
        name: name.to_string(),
        isbn10: isbn10.to_string(),
        isbn13: isbn13.to_string(),
        published: date(1967, 5, 30),
        edition: "Primera".to_string(),
        dewey_index: "863".to_string(),
        author_id,
        author: None,
    }
}

fn genre(name: &str) -> Genre {
    Genre {
        id: 0,
        name: name.to_string(),
        description: "Long prose fiction".to_string(),
    }
}

/// Gabriel García Márquez and Jorge Isaacs, committed
async fn seed_authors(pool: &PgPool) -> Result<(Author, Author)> {
    let uow = PgUnitOfWork::new(pool.clone());
    let gabriel = uow
        .authors()
        .add(&author("Gabriel", "García Márquez", date(1927, 3, 6)))
        .await?;
    let jorge = uow
        .authors()
        .add(&author("Jorge", "Isaacs", date(1837, 4, 1)))
        .await?;
    uow.save().await?;
    Ok((gabriel, jorge))
}

#[sqlx::test(migrations = "./migrations")]
async fn pending_writes_are_shared_within_unit_of_work(pool: PgPool) -> Result<()> {
    let uow = PgUnitOfWork::new(pool.clone());
    let outsider = PgUnitOfWork::new(pool.clone());

    let gabriel = uow
        .authors()
        .add(&author("Gabriel", "García Márquez", date(1927, 3, 6)))
        .await?;
    // The foreign key only holds because both inserts share one transaction
    let stored = uow
        .books()
        .add(&book("Cien años de soledad", "8497592204", "978-8497592208", gabriel.id))
        .await?;

    let rows = uow
        .books()
        .get_all(Some(Filter::eq(Column::own("id"), stored.id)), None, "Author")
        .await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].author.as_ref().map(|a| a.id), Some(gabriel.id));

    assert!(outsider.authors().find(gabriel.id).await?.is_none());
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn dropping_unit_of_work_rolls_back(pool: PgPool) -> Result<()> {
    {
        let uow = PgUnitOfWork::new(pool.clone());
        uow.genres().add(&genre("Novel")).await?;
    }

    let rows = PgUnitOfWork::new(pool.clone())
        .genres()
        .get_all(None, None, "")
        .await?;
    assert!(rows.is_empty());
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn save_commits_every_repository(pool: PgPool) -> Result<()> {
    let (gabriel, _) = seed_authors(&pool).await?;

    let uow = PgUnitOfWork::new(pool.clone());
    let stored = uow
        .books()
        .add(&book("Cien años de soledad", "8497592204", "978-8497592208", gabriel.id))
        .await?;
    uow.genres().add(&genre("Novel")).await?;
    uow.save().await?;

    let reader = PgUnitOfWork::new(pool.clone());
    assert_eq!(reader.books().find(stored.id).await?, Some(stored));
    assert_eq!(reader.genres().get_all(None, None, "").await?.len(), 1);
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn update_and_delete_of_missing_rows_are_not_found(pool: PgPool) -> Result<()> {
    let uow = PgUnitOfWork::new(pool.clone());
    let mut ghost = genre("Essay");
    ghost.id = 404;

    assert!(matches!(uow.genres().update(&ghost).await, Err(AppError::NotFound(_))));
    assert!(matches!(uow.genres().delete_by_id(404).await, Err(AppError::NotFound(_))));
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn eager_load_fills_author_and_narrator(pool: PgPool) -> Result<()> {
    let (gabriel, _) = seed_authors(&pool).await?;

    let uow = PgUnitOfWork::new(pool.clone());
    let ana = uow
        .narrators()
        .add(&Narrator {
            id: 0,
            name: "Ana".to_string(),
            last_name: "Sánchez".to_string(),
            genre: "Novel".to_string(),
        })
        .await?;
    uow.audio_books()
        .add(&AudioBook {
            id: 0,
            name: "Cien años de soledad".to_string(),
            isbn10: "8497592204".to_string(),
            isbn13: "978-8497592208".to_string(),
            published: date(2017, 1, 1),
            edition: "Audio".to_string(),
            genre: "Novel".to_string(),
            length_in_seconds: 86_400,
            path: "/audio/cien.mp3".to_string(),
            author_id: gabriel.id,
            narrator_id: ana.id,
            author: None,
            narrator: None,
        })
        .await?;
    uow.save().await?;

    let reader = PgUnitOfWork::new(pool.clone());
    let rows = reader.audio_books().get_all(None, None, "Author, Narrator").await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].author, Some(gabriel));
    assert_eq!(rows[0].narrator, Some(ana));

    let bare = reader.audio_books().get_all(None, None, "").await?;
    assert!(bare[0].author.is_none());
    assert!(bare[0].narrator.is_none());
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_include_is_validation_error(pool: PgPool) -> Result<()> {
    let err = PgUnitOfWork::new(pool)
        .books()
        .get_all(None, None, "Narrator")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("Book has no relation named 'Narrator'"));
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn birth_date_range_includes_both_authors(pool: PgPool) -> Result<()> {
    seed_authors(&pool).await?;
    let services = Services::new(pool);

    let result = services
        .authors()
        .by_birth_date(date(1830, 1, 1), date(1950, 12, 31))
        .await;

    assert_eq!(result.status_code, StatusCode::OK);
    assert_eq!(result.message, OK_200);
    assert_eq!(result.total_elements, 2);

    let none = services
        .authors()
        .by_birth_date(date(1951, 1, 1), date(2000, 12, 31))
        .await;
    assert_eq!(none.status_code, StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn unique_keys_surface_as_conflict(pool: PgPool) -> Result<()> {
    let uow = PgUnitOfWork::new(pool.clone());
    uow.genres().add(&genre("Novel")).await?;

    let err = uow.genres().add(&genre("Novel")).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    drop(uow);

    let services = Services::new(pool.clone());
    assert_eq!(services.genres().create(genre("Novel")).await.message, OK_200);
    let duplicate = services.genres().create(genre("Novel")).await;
    assert_eq!(duplicate.status_code, StatusCode::CONFLICT);
    assert_eq!(duplicate.message, GENRE_ALREADY_EXISTS);
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn update_onto_taken_isbn_is_conflict(pool: PgPool) -> Result<()> {
    let (gabriel, jorge) = seed_authors(&pool).await?;
    let services = Services::new(pool.clone());

    let cien = services
        .books()
        .create(book("Cien años de soledad", "8497592204", "978-8497592208", gabriel.id))
        .await;
    let maria = services
        .books()
        .create(book("María", "8437604753", "978-8437604756", jorge.id))
        .await;
    assert_eq!(cien.status_code, StatusCode::OK);
    assert_eq!(maria.status_code, StatusCode::OK);

    let mut changes = maria.response_elements[0].clone();
    changes.isbn13 = cien.response_elements[0].isbn13.clone();
    let result = services.books().update(changes).await;

    assert_eq!(result.status_code, StatusCode::CONFLICT);
    assert_eq!(result.message, BOOK_ALREADY_EXISTS);
    let stored = services.books().get_by_id(maria.response_elements[0].id).await;
    assert_eq!(stored.response_elements[0].isbn13, "978-8437604756");
    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_referenced_author_is_internal_error(pool: PgPool) -> Result<()> {
    let (gabriel, _) = seed_authors(&pool).await?;
    let services = Services::new(pool.clone());
    services
        .books()
        .create(book("Cien años de soledad", "8497592204", "978-8497592208", gabriel.id))
        .await;

    let result = services.authors().delete(gabriel.id).await;

    assert_eq!(result.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(result.message.contains("violates foreign key constraint"));
    assert_eq!(services.authors().get_by_id(gabriel.id).await.status_code, StatusCode::OK);
    Ok(())
}

//! Data models for Katio

pub mod audio_book;
pub mod author;
pub mod book;
pub mod entity;
pub mod genre;
pub mod message;
pub mod narrator;

// Re-export commonly used types
pub use audio_book::AudioBook;
pub use author::Author;
pub use book::Book;
pub use entity::{Entity, Relation};
pub use genre::Genre;
pub use message::BaseMessage;
pub use narrator::Narrator;

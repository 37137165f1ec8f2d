use crate::input::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookstoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Book not found.")]
    BookNotFound(String),

    #[error("Book does not exist in the specified store.")]
    BalanceNotFound { store_id: i32, isbn13: String },

    #[error("Author {0} not found.")]
    AuthorNotFound(i32),

    #[error("A book with ISBN-13 {0} already exists.")]
    DuplicateIsbn(String),

    #[error("Author with the same ID already exists: {0}")]
    AuthorExists(i32),

    #[error("Book {isbn13} is still stocked in {stores} store(s) and cannot be deleted.")]
    BookInStock { isbn13: String, stores: i64 },

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl BookstoreError {
    /// Returns `true` for failures the caller can report and move on from:
    /// bad input, missing records, or refused operations.
    ///
    /// Database, configuration and I/O failures abort the operation and
    /// return `false`.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            BookstoreError::Db(_)
                | BookstoreError::Config(_)
                | BookstoreError::Io(_)
                | BookstoreError::Other(_)
        )
    }
}

pub type BookstoreResult<T> = Result<T, BookstoreError>;

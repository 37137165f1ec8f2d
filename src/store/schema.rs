use crate::error::BookstoreError;
use sqlx::SqlitePool;

/// Creates the `authors`, `books` and `inventory_balances` tables if they
/// are missing.
///
/// A balance row references its book with `ON DELETE RESTRICT`, and its
/// count is constrained to be positive.
pub async fn ensure(pool: &SqlitePool) -> Result<(), BookstoreError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS authors (
            author_id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            date_of_birth TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS books (
            isbn13 TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            price INTEGER NOT NULL,
            language TEXT,
            release_date TEXT NOT NULL,
            author_no INTEGER REFERENCES authors(author_id)
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS inventory_balances (
            store_id INTEGER NOT NULL,
            isbn13 TEXT NOT NULL REFERENCES books(isbn13) ON DELETE RESTRICT,
            no_of_products INTEGER NOT NULL CHECK (no_of_products > 0),
            PRIMARY KEY (store_id, isbn13)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

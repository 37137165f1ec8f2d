use crate::domain::{Author, Book};
use crate::error::BookstoreError;
use crate::input::{NewAuthor, NewBook};
use sqlx::SqliteConnection;

const BOOK_COLUMNS: &str = "isbn13, title, price, language, release_date, author_no";

/// All books in insertion order. Selection indices are positions in this list.
pub async fn list_books(conn: &mut SqliteConnection) -> Result<Vec<Book>, BookstoreError> {
    let sql = format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY rowid");
    let books = sqlx::query_as::<_, Book>(&sql).fetch_all(&mut *conn).await?;
    Ok(books)
}

/// Looks a book up by exact ISBN-13.
pub async fn find_book(
    conn: &mut SqliteConnection,
    isbn13: &str,
) -> Result<Option<Book>, BookstoreError> {
    let sql = format!("SELECT {BOOK_COLUMNS} FROM books WHERE isbn13 = ?");
    let book = sqlx::query_as::<_, Book>(&sql)
        .bind(isbn13)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(book)
}

pub async fn insert_book(conn: &mut SqliteConnection, book: &NewBook) -> Result<Book, BookstoreError> {
    sqlx::query(
        "INSERT INTO books (isbn13, title, price, language, release_date, author_no)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&book.isbn13)
    .bind(&book.title)
    .bind(book.price)
    .bind(&book.language)
    .bind(book.release_date)
    .bind(book.author_no)
    .execute(&mut *conn)
    .await?;

    Ok(Book {
        isbn13: book.isbn13.clone(),
        title: book.title.clone(),
        price: book.price,
        language: book.language.clone(),
        release_date: book.release_date,
        author_no: book.author_no,
    })
}

/// Writes every mutable column of `book` back to its row.
pub async fn update_book(conn: &mut SqliteConnection, book: &Book) -> Result<bool, BookstoreError> {
    let res = sqlx::query(
        "UPDATE books SET title = ?, price = ?, language = ?, release_date = ?
         WHERE isbn13 = ?",
    )
    .bind(&book.title)
    .bind(book.price)
    .bind(&book.language)
    .bind(book.release_date)
    .bind(&book.isbn13)
    .execute(&mut *conn)
    .await?;

    Ok(res.rows_affected() > 0)
}

pub async fn delete_book(conn: &mut SqliteConnection, isbn13: &str) -> Result<bool, BookstoreError> {
    let res = sqlx::query("DELETE FROM books WHERE isbn13 = ?")
        .bind(isbn13)
        .execute(&mut *conn)
        .await?;

    Ok(res.rows_affected() > 0)
}

pub async fn list_authors(conn: &mut SqliteConnection) -> Result<Vec<Author>, BookstoreError> {
    let authors = sqlx::query_as::<_, Author>(
        "SELECT author_id, first_name, last_name, date_of_birth FROM authors ORDER BY author_id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(authors)
}

pub async fn find_author(
    conn: &mut SqliteConnection,
    author_id: i32,
) -> Result<Option<Author>, BookstoreError> {
    let author = sqlx::query_as::<_, Author>(
        "SELECT author_id, first_name, last_name, date_of_birth FROM authors WHERE author_id = ?",
    )
    .bind(author_id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(author)
}

pub async fn insert_author(
    conn: &mut SqliteConnection,
    author: &NewAuthor,
) -> Result<Author, BookstoreError> {
    sqlx::query(
        "INSERT INTO authors (author_id, first_name, last_name, date_of_birth)
         VALUES (?, ?, ?, ?)",
    )
    .bind(author.author_id)
    .bind(&author.first_name)
    .bind(&author.last_name)
    .bind(author.date_of_birth)
    .execute(&mut *conn)
    .await?;

    Ok(Author {
        author_id: author.author_id,
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        date_of_birth: author.date_of_birth,
    })
}

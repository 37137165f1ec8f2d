use crate::domain::{BalanceEntry, InventoryBalance};
use crate::error::BookstoreError;
use sqlx::{Row, SqliteConnection};

/// Balances joined with their book titles, in storage order.
///
/// Inner join: a balance whose book is missing does not appear.
pub async fn list_entries(conn: &mut SqliteConnection) -> Result<Vec<BalanceEntry>, BookstoreError> {
    let entries = sqlx::query_as::<_, BalanceEntry>(
        "SELECT ib.store_id, ib.isbn13, ib.no_of_products, b.title
         FROM inventory_balances ib
         JOIN books b ON b.isbn13 = ib.isbn13
         ORDER BY ib.rowid",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(entries)
}

pub async fn find_balance(
    conn: &mut SqliteConnection,
    store_id: i32,
    isbn13: &str,
) -> Result<Option<InventoryBalance>, BookstoreError> {
    let balance = sqlx::query_as::<_, InventoryBalance>(
        "SELECT store_id, isbn13, no_of_products FROM inventory_balances
         WHERE store_id = ? AND isbn13 = ?",
    )
    .bind(store_id)
    .bind(isbn13)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(balance)
}

/// Inserts the first copy of a book at a store.
pub async fn insert_balance(
    conn: &mut SqliteConnection,
    store_id: i32,
    isbn13: &str,
) -> Result<InventoryBalance, BookstoreError> {
    sqlx::query(
        "INSERT INTO inventory_balances (store_id, isbn13, no_of_products) VALUES (?, ?, 1)",
    )
    .bind(store_id)
    .bind(isbn13)
    .execute(&mut *conn)
    .await?;

    Ok(InventoryBalance {
        store_id,
        isbn13: isbn13.to_owned(),
        no_of_products: 1,
    })
}

pub async fn set_count(
    conn: &mut SqliteConnection,
    balance: &InventoryBalance,
) -> Result<(), BookstoreError> {
    sqlx::query(
        "UPDATE inventory_balances SET no_of_products = ?
         WHERE store_id = ? AND isbn13 = ?",
    )
    .bind(balance.no_of_products)
    .bind(balance.store_id)
    .bind(&balance.isbn13)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn delete_balance(
    conn: &mut SqliteConnection,
    store_id: i32,
    isbn13: &str,
) -> Result<bool, BookstoreError> {
    let res = sqlx::query("DELETE FROM inventory_balances WHERE store_id = ? AND isbn13 = ?")
        .bind(store_id)
        .bind(isbn13)
        .execute(&mut *conn)
        .await?;

    Ok(res.rows_affected() > 0)
}

/// Number of stores holding at least one copy of the book.
pub async fn stores_stocking(conn: &mut SqliteConnection, isbn13: &str) -> Result<i64, BookstoreError> {
    let row = sqlx::query("SELECT COUNT(*) FROM inventory_balances WHERE isbn13 = ?")
        .bind(isbn13)
        .fetch_one(&mut *conn)
        .await?;

    Ok(row.get(0))
}

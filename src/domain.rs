use chrono::NaiveDate;
use sqlx::FromRow;

/// A catalog entry, keyed by its ISBN-13.
///
/// `price` is held in the smallest currency unit. `author_no` is optional
/// and, when set, refers to an [`Author`] by id.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    pub isbn13: String,
    pub title: String,
    pub price: i32,
    pub language: Option<String>,
    pub release_date: NaiveDate,
    pub author_no: Option<i32>,
}

/// Stock level of one book at one store.
///
/// A persisted balance always has `no_of_products >= 1`; a balance that
/// would drop to zero is deleted instead.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct InventoryBalance {
    pub store_id: i32,
    pub isbn13: String,
    pub no_of_products: i32,
}

/// One row of the balance listing: a balance joined with its book title.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BalanceEntry {
    pub store_id: i32,
    pub isbn13: String,
    pub no_of_products: i32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Author {
    pub author_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

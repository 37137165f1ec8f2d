use crate::domain::{Author, Book, InventoryBalance};
use crate::error::BookstoreError;
use crate::input::{AuthorForm, BookPatch, NewBook, NewBookForm, ValidationError};
use crate::inventory::report::{BalanceReport, CatalogListing};
use crate::store::{Database, balances, catalog};
use sqlx::SqliteConnection;
use tracing::{debug, info, instrument, warn};

/// Which book a copy is being added for.
#[derive(Debug, Clone)]
pub enum BookSelection {
    /// 1-based position in the listing returned by
    /// [`InventoryService::list_catalog`].
    Existing(usize),
    /// A book that is not in the catalog yet; it is created with the copy.
    New(NewBookForm),
}

/// A [`BookSelection`] after its form, if any, has been validated.
enum Target {
    Listed(usize),
    Create(NewBook),
}

/// What [`InventoryService::remove_copy`] did to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// One copy fewer; `remaining` copies are left.
    Decremented { remaining: i32 },
    /// The last copy went, and the balance row with it.
    Removed,
}

/// A manager providing the inventory operations over a single [`Database`].
///
/// Holds the database by reference; it never opens or closes connections
/// on its own behalf beyond borrowing one from the pool per call.
pub struct InventoryService<'a> {
    db: &'a Database,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a Database) -> Self {
        InventoryService { db }
    }

    /// Lists every balance together with its book's title.
    ///
    /// Balances whose book is missing are left out. Reading twice without a
    /// write in between returns the same report.
    ///
    /// # Errors
    /// Returns [`BookstoreError::Db`] if the query fails.
    #[instrument(skip(self))]
    pub async fn list_balances(&self) -> Result<BalanceReport, BookstoreError> {
        let mut conn = self.db.pool.acquire().await?;
        let entries = balances::list_entries(&mut *conn).await?;

        debug!(count = entries.len(), "listed inventory balances");
        Ok(BalanceReport::new(entries))
    }

    /// Lists the catalog in the order used by [`BookSelection::Existing`].
    #[instrument(skip(self))]
    pub async fn list_catalog(&self) -> Result<CatalogListing, BookstoreError> {
        let mut conn = self.db.pool.acquire().await?;
        let books = catalog::list_books(&mut *conn).await?;
        Ok(CatalogListing::new(books))
    }

    /// Adds one copy of a book to a store.
    ///
    /// - `Existing(n)` picks the n-th catalog entry (1-based).
    /// - `New(form)` validates the form, inserts the book, then adds the copy.
    ///
    /// The store's balance for the book is incremented, or created with a
    /// count of 1. The book insert and the balance write commit together.
    /// `store_id` is not checked against anything.
    ///
    /// # Errors
    /// - [`BookstoreError::Validation`] for a malformed form or an index
    ///   outside `1..=catalog length`
    /// - [`BookstoreError::DuplicateIsbn`] if a new book's ISBN is taken
    /// - [`BookstoreError::AuthorNotFound`] if a new book names an unknown author
    /// - [`BookstoreError::Db`] if the transaction fails
    #[instrument(skip(self, selection))]
    pub async fn add_copy(
        &self,
        store_id: i32,
        selection: BookSelection,
    ) -> Result<InventoryBalance, BookstoreError> {
        let target = match selection {
            BookSelection::Existing(position) => Target::Listed(position),
            BookSelection::New(form) => Target::Create(form.validate()?),
        };

        let mut tx = self.db.pool.begin().await?;

        let isbn13 = match target {
            Target::Create(book) => Self::create_book(&mut *tx, &book).await?.isbn13,
            Target::Listed(position) => {
                let listing = CatalogListing::new(catalog::list_books(&mut *tx).await?);
                match listing.get(position) {
                    Some(book) => book.isbn13.clone(),
                    None => {
                        warn!(position, catalog_len = listing.len(), "book choice out of range");
                        return Err(ValidationError::InvalidBookChoice.into());
                    }
                }
            }
        };

        let balance = match balances::find_balance(&mut *tx, store_id, &isbn13).await? {
            Some(mut balance) => {
                balance.no_of_products += 1;
                balances::set_count(&mut *tx, &balance).await?;
                balance
            }
            None => balances::insert_balance(&mut *tx, store_id, &isbn13).await?,
        };

        tx.commit().await?;

        info!(
            store_id,
            isbn13 = %balance.isbn13,
            no_of_products = balance.no_of_products,
            "book added to store"
        );
        Ok(balance)
    }

    /// Removes one copy of a book from a store.
    ///
    /// A balance above 1 is decremented; a balance of exactly 1 is deleted.
    ///
    /// # Errors
    /// - [`BookstoreError::BalanceNotFound`] if the store holds no copy
    /// - [`BookstoreError::Db`] if the transaction fails
    #[instrument(skip(self))]
    pub async fn remove_copy(&self, store_id: i32, isbn13: &str) -> Result<Removal, BookstoreError> {
        let mut tx = self.db.pool.begin().await?;

        let Some(mut balance) = balances::find_balance(&mut *tx, store_id, isbn13).await? else {
            warn!(store_id, isbn13, "book does not exist in store");
            return Err(BookstoreError::BalanceNotFound {
                store_id,
                isbn13: isbn13.to_owned(),
            });
        };

        let removal = if balance.no_of_products > 1 {
            balance.no_of_products -= 1;
            balances::set_count(&mut *tx, &balance).await?;
            Removal::Decremented {
                remaining: balance.no_of_products,
            }
        } else {
            balances::delete_balance(&mut *tx, store_id, isbn13).await?;
            Removal::Removed
        };

        tx.commit().await?;

        info!(store_id, isbn13, ?removal, "book removed from store");
        Ok(removal)
    }

    /// Edits a book's title, language, price and release date.
    ///
    /// Blank patch fields keep their current value. Fields are validated in
    /// the order title, language, price, release date; the first bad one
    /// fails the whole update and nothing is written.
    ///
    /// # Errors
    /// - [`BookstoreError::BookNotFound`] if no book has exactly this ISBN-13
    /// - [`BookstoreError::Validation`] if a present field is malformed
    /// - [`BookstoreError::Db`] if the transaction fails
    #[instrument(skip(self, patch))]
    pub async fn update_book(&self, isbn13: &str, patch: BookPatch) -> Result<Book, BookstoreError> {
        let mut tx = self.db.pool.begin().await?;

        let mut book = catalog::find_book(&mut *tx, isbn13)
            .await?
            .ok_or_else(|| BookstoreError::BookNotFound(isbn13.to_owned()))?;

        let patch = patch.validate()?;
        if patch.is_empty() {
            debug!(isbn13, "update left every field unchanged");
            return Ok(book);
        }

        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(language) = patch.language {
            book.language = Some(language);
        }
        if let Some(price) = patch.price {
            book.price = price;
        }
        if let Some(release_date) = patch.release_date {
            book.release_date = release_date;
        }

        catalog::update_book(&mut *tx, &book).await?;
        tx.commit().await?;

        info!(isbn13, "book updated");
        Ok(book)
    }

    /// Adds a book to the catalog without stocking it anywhere.
    ///
    /// # Errors
    /// Same as the `New` branch of [`InventoryService::add_copy`].
    #[instrument(skip(self, form))]
    pub async fn add_book(&self, form: NewBookForm) -> Result<Book, BookstoreError> {
        let new_book = form.validate()?;

        let mut tx = self.db.pool.begin().await?;
        let book = Self::create_book(&mut *tx, &new_book).await?;
        tx.commit().await?;

        Ok(book)
    }

    /// Deletes a book from the catalog.
    ///
    /// A book still held by any store is refused rather than cascading the
    /// delete into the balances.
    ///
    /// # Errors
    /// - [`BookstoreError::BookNotFound`] if no book has this ISBN-13
    /// - [`BookstoreError::BookInStock`] if any balance references it
    /// - [`BookstoreError::Db`] if the transaction fails
    #[instrument(skip(self))]
    pub async fn delete_book(&self, isbn13: &str) -> Result<(), BookstoreError> {
        let mut tx = self.db.pool.begin().await?;

        if catalog::find_book(&mut *tx, isbn13).await?.is_none() {
            return Err(BookstoreError::BookNotFound(isbn13.to_owned()));
        }

        let stores = balances::stores_stocking(&mut *tx, isbn13).await?;
        if stores > 0 {
            warn!(isbn13, stores, "refusing to delete a stocked book");
            return Err(BookstoreError::BookInStock {
                isbn13: isbn13.to_owned(),
                stores,
            });
        }

        catalog::delete_book(&mut *tx, isbn13).await?;
        tx.commit().await?;

        info!(isbn13, "book deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_authors(&self) -> Result<Vec<Author>, BookstoreError> {
        let mut conn = self.db.pool.acquire().await?;
        catalog::list_authors(&mut *conn).await
    }

    /// Registers a new author.
    ///
    /// # Errors
    /// - [`BookstoreError::Validation`] for a malformed id, name or date of birth
    /// - [`BookstoreError::AuthorExists`] if the id is taken
    /// - [`BookstoreError::Db`] if the transaction fails
    #[instrument(skip(self, form))]
    pub async fn add_author(&self, form: AuthorForm) -> Result<Author, BookstoreError> {
        let new_author = form.validate()?;

        let mut tx = self.db.pool.begin().await?;

        if catalog::find_author(&mut *tx, new_author.author_id)
            .await?
            .is_some()
        {
            return Err(BookstoreError::AuthorExists(new_author.author_id));
        }

        let author = catalog::insert_author(&mut *tx, &new_author).await?;
        tx.commit().await?;

        info!(author_id = author.author_id, name = %author.full_name(), "author added");
        Ok(author)
    }

    /// Inserts a validated book after checking its key and author reference.
    async fn create_book(conn: &mut SqliteConnection, book: &NewBook) -> Result<Book, BookstoreError> {
        if catalog::find_book(&mut *conn, &book.isbn13).await?.is_some() {
            return Err(BookstoreError::DuplicateIsbn(book.isbn13.clone()));
        }

        if let Some(author_id) = book.author_no {
            if catalog::find_author(&mut *conn, author_id).await?.is_none() {
                return Err(BookstoreError::AuthorNotFound(author_id));
            }
        }

        let book = catalog::insert_book(&mut *conn, book).await?;
        info!(isbn13 = %book.isbn13, title = %book.title, "book added to catalog");
        Ok(book)
    }
}

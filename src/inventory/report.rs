use crate::domain::{BalanceEntry, Book};
use crate::input::{self, BookChoice, ValidationError};
use std::fmt;

/// The result of listing inventory balances.
///
/// `Display` renders the console text: one block per balance, or a single
/// line when there are none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceReport {
    entries: Vec<BalanceEntry>,
}

impl BalanceReport {
    pub fn new(entries: Vec<BalanceEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BalanceEntry> {
        self.entries.iter()
    }
}

impl IntoIterator for BalanceReport {
    type Item = BalanceEntry;
    type IntoIter = std::vec::IntoIter<BalanceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No inventory balances found.");
        }

        for entry in &self.entries {
            writeln!(f, "Store ID: {}", entry.store_id)?;
            writeln!(f, "ISBN-13: {}", entry.isbn13)?;
            writeln!(f, "No. of Products: {}", entry.no_of_products)?;
            writeln!(f, "Title: {}", entry.title)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The catalog as shown to someone picking a book, numbered from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogListing {
    books: Vec<Book>,
}

impl CatalogListing {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the book at 1-based `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Book> {
        position.checked_sub(1).and_then(|i| self.books.get(i))
    }

    /// Interprets a raw answer to "which book?" against this listing.
    pub fn choose(&self, raw: &str) -> Result<BookChoice, ValidationError> {
        input::parse_book_choice(raw, self.books.len())
    }
}

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.books.is_empty() {
            return writeln!(f, "No books found in the assortment.");
        }

        for (i, book) in self.books.iter().enumerate() {
            writeln!(f, "{}. {} (ISBN-13: {})", i + 1, book.title, book.isbn13)?;
        }
        Ok(())
    }
}

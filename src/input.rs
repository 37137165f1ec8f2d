//! Validation of raw user input.
//!
//! Everything a console front end reads arrives as text. The helpers here
//! turn that text into typed values or a [`ValidationError`] naming the
//! offending field, without touching the database. The service runs them
//! before it issues any write, so a rejected request never leaves a trace.

use chrono::NaiveDate;
use thiserror::Error;

/// Accepted format for release dates and dates of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of characters in an ISBN-13.
pub const ISBN13_LEN: usize = 13;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid store ID.")]
    InvalidStoreId,

    #[error("Invalid book choice.")]
    InvalidBookChoice,

    #[error("Invalid price.")]
    InvalidPrice,

    #[error("Invalid release date.")]
    InvalidReleaseDate,

    #[error("Invalid author ID.")]
    InvalidAuthorId,

    #[error("Invalid date of birth.")]
    InvalidDateOfBirth,

    #[error("ISBN-13 must be exactly 13 characters.")]
    InvalidIsbn,

    #[error("{0} cannot be empty.")]
    EmptyField(&'static str),
}

/// What a numeric answer to the "which book?" prompt selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookChoice {
    /// `0`: the caller will describe a new book.
    CreateNew,
    /// `1..=n`: the 1-based position in the current catalog listing.
    Existing(usize),
}

pub fn parse_store_id(raw: &str) -> Result<i32, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidStoreId)
}

pub fn parse_price(raw: &str) -> Result<i32, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::InvalidPrice)
}

pub fn parse_author_id(raw: &str) -> Result<i32, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAuthorId)
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidReleaseDate)
}

/// Interprets an answer to the book selection prompt against a catalog
/// of `catalog_len` books.
///
/// `0` means "create a new book", `1..=catalog_len` picks an existing
/// entry; anything else, including `catalog_len + 1`, is rejected.
pub fn parse_book_choice(raw: &str, catalog_len: usize) -> Result<BookChoice, ValidationError> {
    let choice: usize = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidBookChoice)?;

    match choice {
        0 => Ok(BookChoice::CreateNew),
        n if n <= catalog_len => Ok(BookChoice::Existing(n)),
        _ => Err(ValidationError::InvalidBookChoice),
    }
}

/// Trims a required text field, rejecting it when nothing is left.
fn required(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}

/// Trims an optional field; blank input counts as absent.
fn optional(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn valid_isbn(raw: &str) -> Result<String, ValidationError> {
    let isbn = required(raw, "ISBN-13")?;
    if isbn.chars().count() != ISBN13_LEN {
        return Err(ValidationError::InvalidIsbn);
    }
    Ok(isbn)
}

/// Raw answers describing a book that is not in the catalog yet.
#[derive(Debug, Clone, Default)]
pub struct NewBookForm {
    pub title: String,
    pub isbn13: String,
    pub price: String,
    pub language: String,
    pub release_date: String,
    pub author_no: Option<String>,
}

/// A [`NewBookForm`] whose fields all parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub isbn13: String,
    pub price: i32,
    pub language: Option<String>,
    pub release_date: NaiveDate,
    pub author_no: Option<i32>,
}

impl NewBookForm {
    /// Validates the form in prompt order: title, ISBN-13, price,
    /// language, release date, author.
    pub fn validate(&self) -> Result<NewBook, ValidationError> {
        let title = required(&self.title, "Title")?;
        let isbn13 = valid_isbn(&self.isbn13)?;
        let price = parse_price(&self.price)?;
        let language = optional(Some(self.language.as_str())).map(str::to_owned);
        let release_date = parse_release_date(&self.release_date)?;
        let author_no = optional(self.author_no.as_deref())
            .map(parse_author_id)
            .transpose()?;

        Ok(NewBook {
            title,
            isbn13,
            price,
            language,
            release_date,
            author_no,
        })
    }
}

/// Raw answers to the "update book" prompts.
///
/// `None` or a blank string leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub language: Option<String>,
    pub price: Option<String>,
    pub release_date: Option<String>,
}

/// A [`BookPatch`] whose present fields all parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidBookPatch {
    pub title: Option<String>,
    pub language: Option<String>,
    pub price: Option<i32>,
    pub release_date: Option<NaiveDate>,
}

impl BookPatch {
    /// Validates title, language, price and release date in that order.
    ///
    /// The first malformed field fails the whole patch, even when fields
    /// before it were fine.
    pub fn validate(&self) -> Result<ValidBookPatch, ValidationError> {
        let title = optional(self.title.as_deref()).map(str::to_owned);
        let language = optional(self.language.as_deref()).map(str::to_owned);
        let price = optional(self.price.as_deref())
            .map(parse_price)
            .transpose()?;
        let release_date = optional(self.release_date.as_deref())
            .map(parse_release_date)
            .transpose()?;

        Ok(ValidBookPatch {
            title,
            language,
            price,
            release_date,
        })
    }
}

impl ValidBookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.language.is_none()
            && self.price.is_none()
            && self.release_date.is_none()
    }
}

/// Raw answers describing a new author.
#[derive(Debug, Clone, Default)]
pub struct AuthorForm {
    pub author_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub author_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl AuthorForm {
    pub fn validate(&self) -> Result<NewAuthor, ValidationError> {
        let author_id = parse_author_id(&self.author_id)?;
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let date_of_birth = NaiveDate::parse_from_str(self.date_of_birth.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDateOfBirth)?;

        Ok(NewAuthor {
            author_id,
            first_name,
            last_name,
            date_of_birth,
        })
    }
}

//! # bookstore_core
//!
//! Inventory management for a chain of bookstores: per-store stock levels
//! over a shared book catalog, persisted in SQLite.
//!
//! ## Features
//!
//! - **Stock levels**: List every store's balances, add a copy of a book to a
//!   store, remove a copy again
//! - **Catalog maintenance**: Create books (on their own or while stocking
//!   them), edit their metadata, delete unstocked titles
//! - **Authors**: Register authors and link new books to them
//! - **Input validation**: Turn raw console answers into typed values with
//!   one message per bad field
//! - **Atomic writes**: Every operation commits in a single transaction or not
//!   at all
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bookstore_core::config::InventoryConfig;
//! use bookstore_core::input::{BookPatch, NewBookForm};
//! use bookstore_core::inventory::{BookSelection, InventoryService};
//! use bookstore_core::store::Database;
//!
//! # async fn run() -> Result<(), bookstore_core::BookstoreError> {
//! bookstore_core::logging::init();
//!
//! let db = Database::connect(&InventoryConfig::from_env()?).await?;
//! let service = InventoryService::new(&db);
//!
//! // Stock a brand-new title at store 1
//! let form = NewBookForm {
//!     title: "The Rust Programming Language".into(),
//!     isbn13: "9781718503106".into(),
//!     price: "399".into(),
//!     language: "English".into(),
//!     release_date: "2023-02-28".into(),
//!     author_no: None,
//! };
//! service.add_copy(1, BookSelection::New(form)).await?;
//!
//! // Reprice it
//! let patch = BookPatch {
//!     price: Some("349".into()),
//!     ..Default::default()
//! };
//! service.update_book("9781718503106", patch).await?;
//!
//! print!("{}", service.list_balances().await?);
//!
//! db.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`domain`]**: Books, authors, balances and the listing row
//! - **[`input`]**: Parsing and validation of raw user input
//! - **[`inventory`]**: The inventory service and its console reports
//! - **[`store`]**: The database handle, schema and SQL
//! - **[`config`]**: Where the database lives
//! - **[`logging`]**: `tracing` subscriber setup
//! - **[`error`]**: Unified error handling throughout the library
//!
//! ## Error Handling
//!
//! All operations return [`BookstoreResult<T>`] which wraps the unified
//! [`BookstoreError`] type. Validation errors and database errors convert
//! automatically, so `?` works throughout. Use
//! [`BookstoreError::is_recoverable`] to tell a bad request apart from a
//! failing database.
//!
//! ```rust,no_run
//! use bookstore_core::BookstoreResult;
//! use bookstore_core::inventory::{InventoryService, Removal};
//!
//! async fn sell_one(service: &InventoryService<'_>, isbn13: &str) -> BookstoreResult<()> {
//!     match service.remove_copy(1, isbn13).await {
//!         Ok(Removal::Decremented { remaining }) => println!("{remaining} left"),
//!         Ok(Removal::Removed) => println!("sold out"),
//!         Err(e) if e.is_recoverable() => println!("{e}"),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod inventory;
pub mod logging;
pub mod store;

/// Re-exports the most commonly used types for convenience.
pub use error::{BookstoreError, BookstoreResult};

//! Store inventory operations.
//!
//! [`InventoryService`] exposes the stock operations (list balances, add a
//! copy, remove a copy, update a book) plus the catalog and author
//! maintenance around them. Each call validates its input first, then
//! performs all of its writes inside one transaction, so a rejected call
//! leaves the database exactly as it was.
//!
//! ```rust,no_run
//! use bookstore_core::config::InventoryConfig;
//! use bookstore_core::inventory::{BookSelection, InventoryService};
//! use bookstore_core::store::Database;
//!
//! # async fn run() -> Result<(), bookstore_core::BookstoreError> {
//! let db = Database::connect(&InventoryConfig::from_env()?).await?;
//! let service = InventoryService::new(&db);
//!
//! service.add_copy(1, BookSelection::Existing(1)).await?;
//! print!("{}", service.list_balances().await?);
//!
//! db.close().await;
//! # Ok(())
//! # }
//! ```

pub mod report;
pub mod service;

pub use report::{BalanceReport, CatalogListing};
pub use service::{BookSelection, InventoryService, Removal};

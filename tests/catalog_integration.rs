use bookstore_core::config::InventoryConfig;
use bookstore_core::error::BookstoreError;
use bookstore_core::input::{AuthorForm, BookChoice, NewBookForm, ValidationError};
use bookstore_core::inventory::{BookSelection, InventoryService};
use bookstore_core::store::Database;
use chrono::NaiveDate;
use tempfile::TempDir;

async fn open(dir: &TempDir) -> Result<Database, BookstoreError> {
    Database::connect(&InventoryConfig::for_path(&dir.path().join("inventory.db"))).await
}

fn book_form(title: &str, isbn13: &str) -> NewBookForm {
    NewBookForm {
        title: title.into(),
        isbn13: isbn13.into(),
        price: "120".into(),
        language: "".into(),
        release_date: "1815-12-23".into(),
        author_no: None,
    }
}

fn author_form(id: &str) -> AuthorForm {
    AuthorForm {
        author_id: id.into(),
        first_name: "Jane".into(),
        last_name: "Austen".into(),
        date_of_birth: "1775-12-16".into(),
    }
}

#[tokio::test]
async fn catalog_lists_books_in_insertion_order() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);

    // isbn order differs from insertion order on purpose
    service.add_book(book_form("Persuasion", "9780141439686")).await?;
    service.add_book(book_form("Emma", "9780141439587")).await?;

    let listing = service.list_catalog().await?;
    assert_eq!(listing.get(1).unwrap().title, "Persuasion");
    assert_eq!(listing.get(2).unwrap().title, "Emma");
    assert!(listing.get(0).is_none());
    assert!(listing.get(3).is_none());

    assert_eq!(
        listing.to_string(),
        "1. Persuasion (ISBN-13: 9780141439686)\n2. Emma (ISBN-13: 9780141439587)\n"
    );

    Ok(())
}

#[tokio::test]
async fn choosing_from_listing_drives_add_copy() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);

    service.add_book(book_form("Persuasion", "9780141439686")).await?;
    service.add_book(book_form("Emma", "9780141439587")).await?;

    let listing = service.list_catalog().await?;
    assert_eq!(listing.choose("0")?, BookChoice::CreateNew);
    assert!(matches!(
        listing.choose("3"),
        Err(ValidationError::InvalidBookChoice)
    ));

    let BookChoice::Existing(position) = listing.choose("2")? else {
        panic!("expected an existing book");
    };
    let balance = service
        .add_copy(9, BookSelection::Existing(position))
        .await?;
    assert_eq!(balance.isbn13, "9780141439587");

    Ok(())
}

#[tokio::test]
async fn empty_catalog_says_so() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);

    let listing = service.list_catalog().await?;
    assert!(listing.is_empty());
    assert_eq!(listing.to_string(), "No books found in the assortment.\n");
    assert_eq!(listing.choose("0")?, BookChoice::CreateNew);
    assert!(listing.choose("1").is_err());

    Ok(())
}

#[tokio::test]
async fn blank_language_is_stored_as_none() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);

    let book = service.add_book(book_form("Emma", "9780141439587")).await?;
    assert_eq!(book.language, None);
    assert_eq!(service.list_catalog().await?.books()[0].language, None);

    Ok(())
}

#[tokio::test]
async fn delete_unstocked_book() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);

    service.add_book(book_form("Emma", "9780141439587")).await?;
    service.delete_book("9780141439587").await?;
    assert!(service.list_catalog().await?.is_empty());

    let err = service.delete_book("9780141439587").await.unwrap_err();
    assert!(matches!(err, BookstoreError::BookNotFound(_)));

    Ok(())
}

#[tokio::test]
async fn stocked_book_cannot_be_deleted() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);

    service
        .add_copy(1, BookSelection::New(book_form("Emma", "9780141439587")))
        .await?;
    service.add_copy(2, BookSelection::Existing(1)).await?;

    let err = service.delete_book("9780141439587").await.unwrap_err();
    assert!(matches!(err, BookstoreError::BookInStock { stores: 2, .. }));
    assert!(err.is_recoverable());

    assert_eq!(service.list_catalog().await?.len(), 1);
    assert_eq!(service.list_balances().await?.len(), 2);

    // once sold out everywhere it can go
    service.remove_copy(1, "9780141439587").await?;
    service.remove_copy(2, "9780141439587").await?;
    service.delete_book("9780141439587").await?;

    Ok(())
}

#[tokio::test]
async fn authors_can_be_added_and_linked() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);

    let author = service.add_author(author_form("12")).await?;
    assert_eq!(author.author_id, 12);
    assert_eq!(author.full_name(), "Jane Austen");
    assert_eq!(
        author.date_of_birth,
        NaiveDate::from_ymd_opt(1775, 12, 16).unwrap()
    );

    let mut form = book_form("Emma", "9780141439587");
    form.author_no = Some("12".into());
    let book = service.add_book(form).await?;
    assert_eq!(book.author_no, Some(12));

    let authors = service.list_authors().await?;
    assert_eq!(authors, vec![author]);

    Ok(())
}

#[tokio::test]
async fn duplicate_author_id_is_refused() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);

    service.add_author(author_form("3")).await?;
    let err = service.add_author(author_form("3")).await.unwrap_err();
    assert!(matches!(err, BookstoreError::AuthorExists(3)));
    assert_eq!(service.list_authors().await?.len(), 1);

    let mut bad = author_form("4");
    bad.date_of_birth = "yesterday".into();
    let err = service.add_author(bad).await.unwrap_err();
    assert!(matches!(
        err,
        BookstoreError::Validation(ValidationError::InvalidDateOfBirth)
    ));

    Ok(())
}

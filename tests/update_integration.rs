use bookstore_core::config::InventoryConfig;
use bookstore_core::domain::Book;
use bookstore_core::error::BookstoreError;
use bookstore_core::input::{BookPatch, NewBookForm, ValidationError};
use bookstore_core::inventory::InventoryService;
use bookstore_core::store::Database;
use chrono::NaiveDate;
use tempfile::TempDir;

async fn open(dir: &TempDir) -> Result<Database, BookstoreError> {
    Database::connect(&InventoryConfig::for_path(&dir.path().join("inventory.db"))).await
}

async fn seed(service: &InventoryService<'_>) -> Result<Book, BookstoreError> {
    service
        .add_book(NewBookForm {
            title: "Dune".into(),
            isbn13: "9780441172719".into(),
            price: "199".into(),
            language: "English".into(),
            release_date: "1965-08-01".into(),
            author_no: None,
        })
        .await
}

async fn stored(service: &InventoryService<'_>) -> Result<Book, BookstoreError> {
    Ok(service.list_catalog().await?.books()[0].clone())
}

#[tokio::test]
async fn update_changes_only_provided_fields() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);
    let original = seed(&service).await?;

    let patch = BookPatch {
        title: Some("Dune Messiah".into()),
        language: Some("".into()),
        price: Some("249".into()),
        release_date: None,
    };
    let updated = service.update_book("9780441172719", patch).await?;

    assert_eq!(updated.title, "Dune Messiah");
    assert_eq!(updated.price, 249);
    assert_eq!(updated.language, original.language);
    assert_eq!(updated.release_date, original.release_date);
    assert_eq!(stored(&service).await?, updated);

    Ok(())
}

#[tokio::test]
async fn update_release_date_and_language() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);
    seed(&service).await?;

    let patch = BookPatch {
        language: Some("Swedish".into()),
        release_date: Some("2021-10-22".into()),
        ..Default::default()
    };
    service.update_book("9780441172719", patch).await?;

    let book = stored(&service).await?;
    assert_eq!(book.language.as_deref(), Some("Swedish"));
    assert_eq!(book.release_date, NaiveDate::from_ymd_opt(2021, 10, 22).unwrap());

    Ok(())
}

#[tokio::test]
async fn empty_patch_leaves_book_alone() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);
    let original = seed(&service).await?;

    let patch = BookPatch {
        title: Some("   ".into()),
        ..Default::default()
    };
    let returned = service.update_book("9780441172719", patch).await?;

    assert_eq!(returned, original);
    assert_eq!(stored(&service).await?, original);

    Ok(())
}

#[tokio::test]
async fn malformed_price_aborts_even_after_valid_title() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);
    let original = seed(&service).await?;

    let patch = BookPatch {
        title: Some("Dune Messiah".into()),
        language: Some("Swedish".into()),
        price: Some("abc".into()),
        release_date: Some("2021-10-22".into()),
    };
    let err = service
        .update_book("9780441172719", patch)
        .await
        .unwrap_err();

    assert!(matches!(err, BookstoreError::Validation(ValidationError::InvalidPrice)));
    assert_eq!(stored(&service).await?, original);

    Ok(())
}

#[tokio::test]
async fn malformed_release_date_aborts_update() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);
    let original = seed(&service).await?;

    let patch = BookPatch {
        price: Some("10".into()),
        release_date: Some("2021-02-30".into()),
        ..Default::default()
    };
    let err = service
        .update_book("9780441172719", patch)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BookstoreError::Validation(ValidationError::InvalidReleaseDate)
    ));
    assert_eq!(stored(&service).await?, original);

    Ok(())
}

#[tokio::test]
async fn unknown_isbn_is_not_found() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);
    seed(&service).await?;

    // no prefix or fuzzy matching
    for isbn in ["978044117271", "9780441172710", ""] {
        let err = service
            .update_book(isbn, BookPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BookstoreError::BookNotFound(_)));
        assert_eq!(err.to_string(), "Book not found.");
    }

    Ok(())
}

#[tokio::test]
async fn not_found_wins_over_bad_fields() -> Result<(), BookstoreError> {
    let tmpdir = TempDir::new().unwrap();
    let db = open(&tmpdir).await?;
    let service = InventoryService::new(&db);

    let patch = BookPatch {
        price: Some("abc".into()),
        ..Default::default()
    };
    let err = service.update_book("9780441172719", patch).await.unwrap_err();
    assert!(matches!(err, BookstoreError::BookNotFound(_)));

    Ok(())
}

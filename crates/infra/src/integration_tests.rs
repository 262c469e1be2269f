//! Integration tests for the full cross-context pipeline.
//!
//! Tests: Command → repositories → event bus → handler in the other context.
//!
//! Verifies:
//! - Adding a catalog book materializes a lending record with the same id
//! - Duplicate event delivery stays idempotent
//! - Borrow/return enforce the loan invariants and fine rule end to end

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use biblios_catalog::application::{
    AddBookToCatalog, AddBookToCatalogHandler, GetCategories, SearchCatalogBooks,
};
use biblios_catalog::{AuthorRepository, CatalogBookRepository, Category, CategoryRepository, Isbn};
use biblios_core::{AuthorId, BookId, CategoryId, DomainError, UserId};
use biblios_events::EventBus;
use biblios_lending::application::{
    BorrowBook, BorrowBookHandler, GetAvailableBooks, GetLoanDetails, GetUserLoans, ReturnBook,
    ReturnBookHandler,
};
use biblios_lending::{
    Email, LendingBookRepository, LoanRepository, MAX_ACTIVE_LOANS, User, UserRepository,
};

use crate::book_info::CatalogBookInfoProvider;
use crate::event_bus::{
    CatalogEventPublisher, IntegrationEvent, LendingEventPublisher, SharedEventBus,
    shared_event_bus,
};
use crate::projections::{CreateLendingBookOnBookAdded, IncreasePopularityOnBookBorrowed};
use crate::repositories::{
    InMemoryAuthorRepository, InMemoryCatalogBookRepository, InMemoryCategoryRepository,
    InMemoryLendingBookRepository, InMemoryLoanRepository, InMemoryUserRepository,
};

struct TestApp {
    catalog_books: Arc<InMemoryCatalogBookRepository>,
    authors: Arc<InMemoryAuthorRepository>,
    categories: Arc<InMemoryCategoryRepository>,
    lending_books: Arc<InMemoryLendingBookRepository>,
    users: Arc<InMemoryUserRepository>,
    loans: Arc<InMemoryLoanRepository>,
    bus: SharedEventBus,
    add_book: AddBookToCatalogHandler<
        Arc<InMemoryCatalogBookRepository>,
        Arc<InMemoryAuthorRepository>,
        CatalogEventPublisher,
    >,
    borrow_book: BorrowBookHandler<
        Arc<InMemoryLendingBookRepository>,
        Arc<InMemoryUserRepository>,
        Arc<InMemoryLoanRepository>,
        LendingEventPublisher,
    >,
    return_book: ReturnBookHandler<
        Arc<InMemoryLendingBookRepository>,
        Arc<InMemoryUserRepository>,
        Arc<InMemoryLoanRepository>,
    >,
}

fn setup() -> TestApp {
    biblios_observability::init();

    let catalog_books = Arc::new(InMemoryCatalogBookRepository::new());
    let authors = Arc::new(InMemoryAuthorRepository::new());
    let categories = Arc::new(InMemoryCategoryRepository::new());
    let lending_books = Arc::new(InMemoryLendingBookRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let loans = Arc::new(InMemoryLoanRepository::new());

    let bus = shared_event_bus();
    bus.subscribe(Arc::new(CreateLendingBookOnBookAdded::new(
        lending_books.clone(),
    )));
    bus.subscribe(Arc::new(IncreasePopularityOnBookBorrowed::new(
        catalog_books.clone(),
    )));

    let add_book = AddBookToCatalogHandler::new(
        catalog_books.clone(),
        authors.clone(),
        CatalogEventPublisher::new(bus.clone()),
    );
    let borrow_book = BorrowBookHandler::new(
        lending_books.clone(),
        users.clone(),
        loans.clone(),
        LendingEventPublisher::new(bus.clone()),
    );
    let return_book = ReturnBookHandler::new(lending_books.clone(), users.clone(), loans.clone());

    TestApp {
        catalog_books,
        authors,
        categories,
        lending_books,
        users,
        loans,
        bus,
        add_book,
        borrow_book,
        return_book,
    }
}

fn add_book(app: &TestApp, title: &str) -> BookId {
    let book_id = BookId::new();
    app.add_book
        .handle(AddBookToCatalog {
            book_id,
            title: title.to_string(),
            isbn: "978-0156027595".to_string(),
            author_id: AuthorId::new(),
            author_first_name: "Stanisław".to_string(),
            author_last_name: "Lem".to_string(),
            description: Some("A classic.".to_string()),
            published_at: Utc::now(),
            occurred_at: Utc::now(),
        })
        .unwrap();
    book_id
}

fn register_user(app: &TestApp, name: &str, email: &str) -> UserId {
    let user = User::new(UserId::new(), name, Email::new(email).unwrap(), Utc::now()).unwrap();
    app.users.save(&user).unwrap();
    user.id()
}

fn borrow_at(app: &TestApp, user_id: UserId, book_id: BookId, occurred_at: DateTime<Utc>) {
    app.borrow_book
        .handle(BorrowBook {
            user_id,
            book_id,
            occurred_at,
        })
        .unwrap();
}

#[test]
fn adding_a_catalog_book_materializes_a_lending_record() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");

    let lending = app.lending_books.find_by_id(book_id).unwrap().unwrap();
    assert_eq!(lending.id(), book_id);
    assert!(lending.is_available());
    assert_eq!(lending.title(), "Solaris");
    assert_eq!(lending.author(), "Stanisław Lem");

    // Catalog's own record exists independently.
    assert!(app.catalog_books.find_by_id(book_id).unwrap().is_some());
    assert_eq!(app.authors.find_all().unwrap().len(), 1);
}

#[test]
fn redelivered_book_added_event_creates_no_duplicate() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");

    // Simulate at-least-once delivery by replaying the event verbatim.
    let catalog = app.catalog_books.find_by_id(book_id).unwrap().unwrap();
    app.bus.publish(IntegrationEvent::Catalog(
        biblios_catalog::CatalogEvent::BookAdded(biblios_catalog::BookAddedToCatalog {
            book_id,
            title: catalog.title().to_string(),
            author_name: "Stanisław Lem".to_string(),
            isbn: catalog.isbn().value().to_string(),
            published_at: catalog.published_at(),
            occurred_at: Utc::now(),
        }),
    ));

    assert_eq!(app.lending_books.find_all().unwrap().len(), 1);
}

#[test]
fn borrowing_flips_availability_and_creates_an_active_loan() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");

    let loan = app
        .borrow_book
        .handle(BorrowBook {
            user_id,
            book_id,
            occurred_at: Utc::now(),
        })
        .unwrap();

    assert!(loan.is_active());
    assert_eq!(loan.user_id(), user_id);
    assert_eq!(loan.book_id(), book_id);

    let book = app.lending_books.find_by_id(book_id).unwrap().unwrap();
    assert!(!book.is_available());

    let user = app.users.find_by_id(user_id).unwrap().unwrap();
    assert_eq!(user.active_loan_count(), 1);

    let active = app.loans.find_active_by_user(user_id).unwrap();
    assert_eq!(active.len(), 1);
}

#[test]
fn borrowing_bumps_catalog_popularity() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");

    borrow_at(&app, user_id, book_id, Utc::now());

    let catalog = app.catalog_books.find_by_id(book_id).unwrap().unwrap();
    assert_eq!(catalog.popularity(), 1);
}

#[test]
fn borrowing_an_unavailable_book_fails_without_state_change() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");
    let first = register_user(&app, "Anna Nowak", "anna@example.com");
    let second = register_user(&app, "Jan Kowalski", "jan@example.com");

    borrow_at(&app, first, book_id, Utc::now());

    let err = app
        .borrow_book
        .handle(BorrowBook {
            user_id: second,
            book_id,
            occurred_at: Utc::now(),
        })
        .unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));

    let user = app.users.find_by_id(second).unwrap().unwrap();
    assert_eq!(user.active_loan_count(), 0);
    assert!(app.loans.find_active_by_user(second).unwrap().is_empty());
}

#[test]
fn loan_limit_is_enforced_across_commands() {
    let app = setup();
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");

    for i in 0..MAX_ACTIVE_LOANS {
        let book_id = add_book(&app, &format!("Volume {i}"));
        borrow_at(&app, user_id, book_id, Utc::now());
    }

    let extra = add_book(&app, "One Too Many");
    let err = app
        .borrow_book
        .handle(BorrowBook {
            user_id,
            book_id: extra,
            occurred_at: Utc::now(),
        })
        .unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));

    // The fourth book stays on the shelf and no loan was written.
    assert!(app.lending_books.find_by_id(extra).unwrap().unwrap().is_available());
    assert_eq!(
        app.loans.find_active_by_user(user_id).unwrap().len(),
        MAX_ACTIVE_LOANS as usize
    );
}

#[test]
fn returning_on_time_costs_nothing() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");

    let borrowed_at = Utc::now();
    borrow_at(&app, user_id, book_id, borrowed_at);

    let fine = app
        .return_book
        .handle(ReturnBook {
            user_id,
            book_id,
            occurred_at: borrowed_at + Duration::days(10),
        })
        .unwrap();

    assert_eq!(fine, 0);
    assert!(app.lending_books.find_by_id(book_id).unwrap().unwrap().is_available());
    assert_eq!(
        app.users.find_by_id(user_id).unwrap().unwrap().active_loan_count(),
        0
    );
    assert!(app.loans.find_active_by_user(user_id).unwrap().is_empty());
}

#[test]
fn returning_twenty_days_after_borrowing_fines_six_days() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");

    let borrowed_at = Utc::now() - Duration::days(20);
    borrow_at(&app, user_id, book_id, borrowed_at);

    let overdue = app.loans.find_overdue(Utc::now()).unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].book_id(), book_id);

    let active = GetUserLoans::new(app.loans.clone()).execute(user_id).unwrap();
    assert_eq!(active.len(), 1);

    let fine = app
        .return_book
        .handle(ReturnBook {
            user_id,
            book_id,
            occurred_at: Utc::now(),
        })
        .unwrap();

    // 14-day period, 6 days late, 50 cents a day.
    assert_eq!(fine, 300);
    assert!(app.loans.find_overdue(Utc::now()).unwrap().is_empty());
}

#[test]
fn returning_without_an_active_loan_fails() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");

    let err = app
        .return_book
        .handle(ReturnBook {
            user_id,
            book_id,
            occurred_at: Utc::now(),
        })
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn borrowing_unknown_user_or_book_misses() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");

    let err = app
        .borrow_book
        .handle(BorrowBook {
            user_id: UserId::new(),
            book_id,
            occurred_at: Utc::now(),
        })
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = app
        .borrow_book
        .handle(BorrowBook {
            user_id,
            book_id: BookId::new(),
            occurred_at: Utc::now(),
        })
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn available_books_query_tracks_circulation() {
    let app = setup();
    let solaris = add_book(&app, "Solaris");
    let fiasco = add_book(&app, "Fiasco");
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");

    let query = GetAvailableBooks::new(app.lending_books.clone());
    assert_eq!(query.execute().unwrap().len(), 2);

    borrow_at(&app, user_id, solaris, Utc::now());

    let available = query.execute().unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id(), fiasco);
}

#[test]
fn catalog_search_works_through_categories_and_titles() {
    let app = setup();
    let solaris = add_book(&app, "Solaris");
    add_book(&app, "Fiasco");

    let genre = Category::new(CategoryId::new(), "Science Fiction", "science-fiction").unwrap();
    let mut subgenre = Category::new(CategoryId::new(), "First Contact", "first-contact").unwrap();
    subgenre.set_parent(Some(genre.id())).unwrap();
    app.categories.save(&genre).unwrap();
    app.categories.save(&subgenre).unwrap();

    let mut book = app.catalog_books.find_by_id(solaris).unwrap().unwrap();
    book.add_category(subgenre.id());
    app.catalog_books.save(&book).unwrap();

    let search = SearchCatalogBooks::new(app.catalog_books.clone(), app.categories.clone());
    let by_title = search.by_title("sol").unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id(), solaris);

    // Both books share the fixture ISBN; lookup ignores hyphenation.
    let by_isbn = search.by_isbn(&Isbn::new("9780156027595").unwrap()).unwrap();
    assert!(by_isbn.is_some());

    let in_subgenre = search.by_category("first-contact").unwrap();
    assert_eq!(in_subgenre.len(), 1);
    assert_eq!(in_subgenre[0].id(), solaris);
    assert!(search.by_category("no-such-slug").unwrap().is_empty());

    let tree = GetCategories::new(app.categories.clone());
    assert_eq!(
        tree.path("first-contact").unwrap().as_deref(),
        Some("Science Fiction / First Contact")
    );
    assert_eq!(tree.roots().unwrap().len(), 1);
}

#[test]
fn most_popular_ranking_follows_borrow_counts() {
    let app = setup();
    let quiet = add_book(&app, "Rarely Read");
    let favorite = add_book(&app, "Crowd Favorite");

    // The single copy circulates: three borrow/return cycles for the
    // favorite, one open loan on the other.
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");
    for _ in 0..3 {
        let now = Utc::now();
        borrow_at(&app, user_id, favorite, now);
        app.return_book
            .handle(ReturnBook {
                user_id,
                book_id: favorite,
                occurred_at: now,
            })
            .unwrap();
    }
    borrow_at(&app, user_id, quiet, Utc::now());

    let ranked = app.catalog_books.find_most_popular(2).unwrap();
    assert_eq!(ranked[0].id(), favorite);
    assert_eq!(ranked[0].popularity(), 3);
    assert_eq!(ranked[1].id(), quiet);
}

#[test]
fn loan_details_are_enriched_through_the_shared_contract() {
    let app = setup();
    let book_id = add_book(&app, "Solaris");
    let user_id = register_user(&app, "Anna Nowak", "anna@example.com");
    borrow_at(&app, user_id, book_id, Utc::now());

    let provider = CatalogBookInfoProvider::new(app.catalog_books.clone(), app.authors.clone());
    let query = GetLoanDetails::new(app.loans.clone(), provider);

    let details = query.execute(user_id).unwrap();
    assert_eq!(details.len(), 1);

    let book = details[0].book.as_ref().unwrap();
    assert_eq!(book.id, book_id);
    assert_eq!(book.title, "Solaris");
    assert_eq!(book.author, "Stanisław Lem");
}

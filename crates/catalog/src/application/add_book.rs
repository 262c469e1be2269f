//! Command: add a book to the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use biblios_core::{AuthorId, BookId, DomainResult};
use biblios_events::EventPublisher;

use crate::author::Author;
use crate::book::CatalogBook;
use crate::events::{BookAddedToCatalog, CatalogEvent};
use crate::isbn::Isbn;
use crate::repository::{AuthorRepository, CatalogBookRepository};

/// Command: a librarian adds a new book.
///
/// Carries the author's details so the handler can create the author on first
/// sight; on later books by the same author only the id is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBookToCatalog {
    pub book_id: BookId,
    pub title: String,
    pub isbn: String,
    pub author_id: AuthorId,
    pub author_first_name: String,
    pub author_last_name: String,
    pub description: Option<String>,
    pub published_at: DateTime<Utc>,
    pub occurred_at: DateTime<Utc>,
}

/// Handler: find-or-create the author, persist the book, publish the event.
///
/// The event is published only after both aggregates are saved; the Lending
/// context reacts to it and builds its own record. Catalog never learns who
/// listened.
pub struct AddBookToCatalogHandler<B, A, P> {
    books: B,
    authors: A,
    publisher: P,
}

impl<B, A, P> AddBookToCatalogHandler<B, A, P>
where
    B: CatalogBookRepository,
    A: AuthorRepository,
    P: EventPublisher<CatalogEvent>,
{
    pub fn new(books: B, authors: A, publisher: P) -> Self {
        Self {
            books,
            authors,
            publisher,
        }
    }

    pub fn handle(&self, command: AddBookToCatalog) -> DomainResult<CatalogBook> {
        let author = match self.authors.find_by_id(command.author_id)? {
            Some(author) => author,
            None => {
                let author = Author::new(
                    command.author_id,
                    command.author_first_name.clone(),
                    command.author_last_name.clone(),
                )?;
                self.authors.save(&author)?;
                author
            }
        };

        let isbn = Isbn::new(command.isbn.clone())?;
        let mut book = CatalogBook::new(
            command.book_id,
            command.title.clone(),
            isbn,
            command.author_id,
            command.published_at,
            command.occurred_at,
        )?;

        if let Some(description) = &command.description {
            book.update_description(description.clone());
        }

        self.books.save(&book)?;

        tracing::info!(book_id = %command.book_id, title = %command.title, "book added to catalog");

        self.publisher
            .publish(CatalogEvent::BookAdded(BookAddedToCatalog {
                book_id: command.book_id,
                title: command.title,
                author_name: author.full_name(),
                isbn: command.isbn,
                published_at: command.published_at,
                occurred_at: command.occurred_at,
            }));

        Ok(book)
    }
}

//! Cross-context read contract for basic book information.
//!
//! The contract lives in the shared kernel because Lending *uses* it (loan
//! details need a title and author) while Catalog *implements* it (it owns the
//! descriptive data). Neither context owns the other's half, and neither
//! depends on the other's types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::id::BookId;

/// Basic, read-only book data exchanged between contexts.
///
/// Plain data, no behavior. `author` is a display string, not a reference into
/// the Catalog model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookBasicInfo {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Port: supply basic book information to whichever context asks.
pub trait BookInfoProvider: Send + Sync {
    fn book_info(&self, book_id: BookId) -> DomainResult<Option<BookBasicInfo>>;
}

impl<P> BookInfoProvider for Arc<P>
where
    P: BookInfoProvider + ?Sized,
{
    fn book_info(&self, book_id: BookId) -> DomainResult<Option<BookBasicInfo>> {
        (**self).book_info(book_id)
    }
}

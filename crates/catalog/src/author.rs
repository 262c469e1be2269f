//! Author entity.

use biblios_core::{AuthorId, DomainError, DomainResult, Entity};

/// An author of catalog books.
///
/// The book-to-author relation is one-directional: books reference the author
/// by id, the author does not track its books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    first_name: String,
    last_name: String,
    biography: Option<String>,
}

impl Author {
    pub fn new(
        id: AuthorId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> DomainResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(DomainError::validation("author name cannot be empty"));
        }

        Ok(Self {
            id,
            first_name,
            last_name,
            biography: None,
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Display name used in events and read models ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn biography(&self) -> Option<&str> {
        self.biography.as_deref()
    }

    pub fn update_biography(&mut self, biography: impl Into<String>) {
        self.biography = Some(biography.into());
    }
}

impl Entity for Author {
    type Id = AuthorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

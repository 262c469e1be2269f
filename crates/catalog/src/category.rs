//! Category entity (hierarchical).

use biblios_core::{CategoryId, DomainError, DomainResult, Entity};

/// A book category.
///
/// Categories form a tree via `parent_id`, e.g. "Programming" → "Rust" → "Web".
/// The parent is held by id, not by reference; walking the tree is a repository
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    slug: String,
    parent_id: Option<CategoryId>,
}

impl Category {
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let slug = slug.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        if slug.trim().is_empty() {
            return Err(DomainError::validation("category slug cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            slug,
            parent_id: None,
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn parent_id(&self) -> Option<CategoryId> {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Attach (or detach, with `None`) this category to a parent.
    pub fn set_parent(&mut self, parent_id: Option<CategoryId>) -> DomainResult<()> {
        if parent_id == Some(self.id) {
            return Err(DomainError::invariant("category cannot be its own parent"));
        }

        self.parent_id = parent_id;
        Ok(())
    }

    pub fn rename(&mut self, name: impl Into<String>, slug: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        let slug = slug.into();

        if name.trim().is_empty() || slug.trim().is_empty() {
            return Err(DomainError::validation("category name/slug cannot be empty"));
        }

        self.name = name;
        self.slug = slug;
        Ok(())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cannot_be_its_own_parent() {
        let mut category = Category::new(CategoryId::new(), "Programming", "programming").unwrap();
        let own_id = category.id();

        let err = category.set_parent(Some(own_id)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(category.is_root());
    }

    #[test]
    fn set_parent_links_and_unlinks() {
        let parent = Category::new(CategoryId::new(), "Programming", "programming").unwrap();
        let mut child = Category::new(CategoryId::new(), "Rust", "rust").unwrap();

        child.set_parent(Some(parent.id())).unwrap();
        assert_eq!(child.parent_id(), Some(parent.id()));
        assert!(!child.is_root());

        child.set_parent(None).unwrap();
        assert!(child.is_root());
    }

    #[test]
    fn rename_rejects_blank_slug() {
        let mut category = Category::new(CategoryId::new(), "Programming", "programming").unwrap();
        let err = category.rename("Software", " ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(category.slug(), "programming");
    }
}

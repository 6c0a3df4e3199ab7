//! Mock content source for testing.
//!
//! Provides [`MockContent`] for unit testing without a real content layer.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::frontmatter::Frontmatter;
use crate::source::{ContentEntry, ContentError, ContentErrorKind, ContentSource};

/// Mock content source for testing.
///
/// Stores entries in memory, per collection, in insertion order. Use the
/// builder methods to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use lectern_content::{ContentSource, MockContent};
///
/// let content = MockContent::new()
///     .with_page("docs", "index.md", "Home")
///     .with_page("docs", "fr/index.md", "Accueil");
///
/// let entries = content.load_collection("docs").unwrap();
/// assert_eq!(entries.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockContent {
    collections: RwLock<HashMap<String, Vec<ContentEntry>>>,
    failures: RwLock<HashMap<String, ContentErrorKind>>,
    loads: RwLock<Vec<String>>,
}

impl MockContent {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to its collection.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_entry(self, entry: ContentEntry) -> Self {
        self.collections
            .write()
            .unwrap()
            .entry(entry.collection.clone())
            .or_default()
            .push(entry);
        self
    }

    /// Add an entry with the given id and frontmatter.
    #[must_use]
    pub fn with_frontmatter(
        self,
        collection: &str,
        id: &str,
        data: Frontmatter,
    ) -> Self {
        self.with_entry(ContentEntry::new(collection, id, data))
    }

    /// Add an entry with only a title.
    #[must_use]
    pub fn with_page(self, collection: &str, id: &str, title: &str) -> Self {
        self.with_frontmatter(collection, id, Frontmatter::titled(title))
    }

    /// Register an existing but empty collection.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_collection(self, collection: &str) -> Self {
        self.collections
            .write()
            .unwrap()
            .entry(collection.to_owned())
            .or_default();
        self
    }

    /// Make loading a collection fail with the given kind.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, collection: &str, kind: ContentErrorKind) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(collection.to_owned(), kind);
        self
    }

    /// Collections requested so far, in request order.
    #[must_use]
    pub fn loads(&self) -> Vec<String> {
        self.loads
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ContentSource for MockContent {
    fn load_collection(&self, name: &str) -> Result<Vec<ContentEntry>, ContentError> {
        self.loads
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.to_owned());

        if let Some(kind) = self
            .failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
        {
            return Err(ContentError::new(kind)
                .with_collection(name)
                .with_backend("Mock"));
        }

        self.collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| ContentError::not_found(name).with_backend("Mock"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_keeps_insertion_order() {
        let content = MockContent::new()
            .with_page("docs", "b.md", "B")
            .with_page("docs", "a.md", "A")
            .with_page("api", "index.md", "API");

        let slugs: Vec<_> = content
            .load_collection("docs")
            .unwrap()
            .into_iter()
            .map(|e| e.slug)
            .collect();

        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn test_unknown_collection_is_not_found() {
        let content = MockContent::new();

        let err = content.load_collection("missing").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.backend, Some("Mock"));
    }

    #[test]
    fn test_empty_collection() {
        let content = MockContent::new().with_collection("docs");

        assert!(content.load_collection("docs").unwrap().is_empty());
    }

    #[test]
    fn test_failure_is_returned_once() {
        let content = MockContent::new()
            .with_collection("docs")
            .with_failure("docs", ContentErrorKind::Unavailable);

        let err = content.load_collection("docs").unwrap_err();
        assert_eq!(err.kind, ContentErrorKind::Unavailable);
        assert!(content.load_collection("docs").is_ok());
        assert_eq!(content.loads(), vec!["docs", "docs"]);
    }
}

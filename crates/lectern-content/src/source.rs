//! Content source trait, entries, and error types.
//!
//! Provides the [`ContentSource`] trait the route table builder loads
//! collections through, the [`ContentEntry`] it yields, and
//! [`ContentError`] for unified error handling across sources.
//!
//! # Identifier Convention
//!
//! Entry ids are source paths relative to the collection directory, slugs
//! are the URL-path-like form derived from them:
//! - `"index.md"` -> `"index"`
//! - `"guides/setup.md"` -> `"guides/setup"`
//! - `"fr/guides/index.mdx"` -> `"fr/guides"`

use crate::frontmatter::Frontmatter;

/// One authored document of a content collection.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentEntry {
    /// Source path relative to the collection directory (e.g. `fr/guide.md`).
    pub id: String,
    /// Name of the collection the entry belongs to.
    pub collection: String,
    /// Slug derived from the id, or set explicitly by the source.
    pub slug: String,
    /// Authored frontmatter.
    pub data: Frontmatter,
}

impl ContentEntry {
    /// Create an entry whose slug is derived from its id.
    #[must_use]
    pub fn new(collection: impl Into<String>, id: impl Into<String>, data: Frontmatter) -> Self {
        let id = id.into();
        Self {
            slug: slug_from_id(&id),
            id,
            collection: collection.into(),
            data,
        }
    }

    /// Override the derived slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
}

/// Derive a slug from an entry id.
///
/// Drops the file extension, lowercases each segment, replaces whitespace
/// with `-`, and removes a trailing `/index` segment. A top-level `index`
/// stays `index`; the route builder maps it to the empty slug.
#[must_use]
pub fn slug_from_id(id: &str) -> String {
    let trimmed = id.trim_matches('/');
    let without_ext = match trimmed.rfind('.') {
        Some(dot) if !trimmed[dot..].contains('/') && dot > 0 => &trimmed[..dot],
        _ => trimmed,
    };

    let slug = without_ext
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
                .to_lowercase()
        })
        .collect::<Vec<_>>()
        .join("/");

    match slug.strip_suffix("/index") {
        Some(parent) => parent.to_owned(),
        None => slug,
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentErrorKind {
    /// Collection does not exist.
    NotFound,
    /// An entry could not be parsed (e.g. malformed frontmatter).
    InvalidEntry,
    /// Source is temporarily unavailable.
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Content error with semantic kind and source-specific cause.
#[derive(Debug)]
pub struct ContentError {
    /// Semantic error category.
    pub kind: ContentErrorKind,
    /// Collection being loaded (if applicable).
    pub collection: Option<String>,
    /// Entry id (if applicable).
    pub entry: Option<String>,
    /// Source identifier (e.g., "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContentError {
    /// Create a new content error.
    #[must_use]
    pub fn new(kind: ContentErrorKind) -> Self {
        Self {
            kind,
            collection: None,
            entry: None,
            backend: None,
            source: None,
        }
    }

    /// Attach collection context.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Attach entry context.
    #[must_use]
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error for a collection.
    #[must_use]
    pub fn not_found(collection: impl Into<String>) -> Self {
        Self::new(ContentErrorKind::NotFound).with_collection(collection)
    }

    /// Create an invalid entry error from a frontmatter parse failure.
    #[must_use]
    pub fn invalid_frontmatter(
        collection: impl Into<String>,
        entry: impl Into<String>,
        err: serde_yaml::Error,
    ) -> Self {
        Self::new(ContentErrorKind::InvalidEntry)
            .with_collection(collection)
            .with_entry(entry)
            .with_source(err)
    }

    /// Check if the collection simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == ContentErrorKind::NotFound
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (collection: docs, entry: guide.md)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            ContentErrorKind::NotFound => "Collection not found",
            ContentErrorKind::InvalidEntry => "Invalid entry",
            ContentErrorKind::Unavailable => "Unavailable",
            ContentErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        match (&self.collection, &self.entry) {
            (Some(collection), Some(entry)) => {
                write!(f, " (collection: {collection}, entry: {entry})")?;
            }
            (Some(collection), None) => write!(f, " (collection: {collection})")?,
            (None, Some(entry)) => write!(f, " (entry: {entry})")?,
            (None, None) => {}
        }

        Ok(())
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Source of content collections.
///
/// Implemented by the host's content layer. Entries must be returned in a
/// stable order: route order, and with it pagination adjacency, follows it.
pub trait ContentSource: Send + Sync {
    /// Load every entry of a collection, in load order.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] with [`ContentErrorKind::NotFound`] if the
    /// collection does not exist, or another kind if loading fails.
    fn load_collection(&self, name: &str) -> Result<Vec<ContentEntry>, ContentError>;
}

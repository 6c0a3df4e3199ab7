//! Build and page-data errors.

use lectern_content::ContentError;
use lectern_vcs::VcsError;

use crate::hooks::{HookError, HookKind};

/// Error returned when building the route table fails.
///
/// Any of these aborts the build; no partial route table is exposed.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A collection failed to load.
    #[error("Failed to load collection \"{collection}\": {source}")]
    Content {
        /// Collection name.
        collection: String,
        /// Underlying content error.
        #[source]
        source: ContentError,
    },
    /// Commit history produced an unusable date.
    #[error(transparent)]
    CommitDate(#[from] VcsError),
    /// A build-time hook failed.
    #[error("{kind} hook failed: {source}")]
    Hook {
        /// Which hook failed.
        kind: HookKind,
        /// Error returned by the hook.
        #[source]
        source: HookError,
    },
    /// Two routes resolve to the same URL.
    #[error("Duplicate route slug \"{slug}\" (routes {first} and {second})")]
    DuplicateSlug {
        /// Conflicting slug.
        slug: String,
        /// Id of the first route.
        first: String,
        /// Id of the second route.
        second: String,
    },
    /// A route extension shadows a core field.
    #[error("Route \"{slug}\" uses reserved extension key \"{key}\"")]
    ReservedExtension {
        /// Route slug.
        slug: String,
        /// Offending key.
        key: String,
    },
    /// The sidebar config references a page that does not exist.
    #[error("Sidebar entry \"{slug}\" does not match any page")]
    UnknownSidebarSlug {
        /// Slug as written in the sidebar config.
        slug: String,
    },
}

/// Error returned when resolving one page's route data fails.
///
/// Affects that page only; the route table stays valid.
#[derive(Debug, thiserror::Error)]
pub enum RouteDataError {
    /// A page-time hook failed.
    #[error("{kind} hook failed for \"{slug}\": {source}")]
    Hook {
        /// Which hook failed.
        kind: HookKind,
        /// Route slug.
        slug: String,
        /// Error returned by the hook.
        #[source]
        source: HookError,
    },
    /// Merged frontmatter no longer matches the frontmatter schema.
    #[error("Invalid frontmatter for {entry}: {source}")]
    Frontmatter {
        /// Entry id.
        entry: String,
        /// Deserialization error.
        #[source]
        source: serde_json::Error,
    },
    /// The edit link could not be parsed as a URL.
    #[error("Invalid edit URL for {entry}: {url:?}: {source}")]
    InvalidEditUrl {
        /// Entry id.
        entry: String,
        /// Offending URL.
        url: String,
        /// Parse error.
        #[source]
        source: url::ParseError,
    },
    /// A route data extension shadows a core field.
    #[error("Route data for \"{slug}\" uses reserved extension key \"{key}\"")]
    ReservedExtension {
        /// Route slug.
        slug: String,
        /// Offending key.
        key: String,
    },
}

//! Content abstraction for Lectern.
//!
//! This crate provides a [`ContentSource`] trait for loading content
//! collections from the host's content layer. This enables:
//!
//! - **Unit testing** without a real content pipeline
//! - **Host flexibility** (any layer that can list entries with frontmatter)
//! - **Clean separation** between route building and content storage
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentSource`] trait with `load_collection()`
//! - [`ContentEntry`] and typed [`Frontmatter`]
//! - [`MockContent`] for testing (behind `mock` feature flag)

mod frontmatter;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use frontmatter::{
    DateSetting, EditUrlSetting, Frontmatter, PaginationLink, PaginationOverride, SidebarMeta,
    Template, TocCustom, TocOverride,
};
#[cfg(feature = "mock")]
pub use mock::MockContent;
pub use source::{ContentEntry, ContentError, ContentErrorKind, ContentSource, slug_from_id};

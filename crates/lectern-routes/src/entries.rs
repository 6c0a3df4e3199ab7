//! Loading content entries and resolving their dates.

use std::path::Path;

use chrono::{DateTime, Utc};
use lectern_config::Config;
use lectern_content::{ContentEntry, ContentSource, DateSetting, Frontmatter};
use lectern_vcs::{CommitAge, CommitDateSource};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::BuildError;
use crate::slugs::normalize_index_slug;

/// A content entry prepared for routing.
///
/// Immutable once built; routes share it through an `Arc`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsEntry {
    /// Source path relative to the collection directory.
    pub id: String,
    /// Collection the entry was loaded from.
    pub collection: String,
    /// Route slug: `index` normalized to `""`, prefixed with the collection
    /// name outside the primary collection.
    pub slug: String,
    /// Route id: the entry id, prefixed with the collection name outside the
    /// primary collection.
    pub route_id: String,
    /// Authored frontmatter.
    pub data: Frontmatter,
    /// Date of the commit that added the source file, or the authored date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_published: Option<DateTime<Utc>>,
    /// Date of the latest commit touching the source file, or the authored date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Load every configured collection and prepare its entries.
///
/// Collections load in parallel; the result is in configured collection
/// order, then load order inside each collection.
pub(crate) fn load_docs_entries(
    config: &Config,
    content: &dyn ContentSource,
    dates: &dyn CommitDateSource,
) -> Result<Vec<DocsEntry>, BuildError> {
    let loaded: Vec<Vec<ContentEntry>> = config
        .collections
        .par_iter()
        .map(|collection| load_collection(content, collection))
        .collect::<Result<_, _>>()?;

    let primary = config.collections.first().map(String::as_str);
    let raw: Vec<ContentEntry> = loaded.into_iter().flatten().collect();

    raw.into_par_iter()
        .map(|entry| {
            let is_primary = primary == Some(entry.collection.as_str());
            to_docs_entry(config, dates, entry, is_primary)
        })
        .collect()
}

fn load_collection(
    content: &dyn ContentSource,
    collection: &str,
) -> Result<Vec<ContentEntry>, BuildError> {
    match content.load_collection(collection) {
        Ok(entries) => {
            tracing::debug!(collection, entries = entries.len(), "Loaded collection");
            Ok(entries)
        }
        Err(e) if e.is_not_found() => {
            tracing::warn!(collection, "Collection not found, skipping");
            Ok(Vec::new())
        }
        Err(source) => Err(BuildError::Content {
            collection: collection.to_owned(),
            source,
        }),
    }
}

fn to_docs_entry(
    config: &Config,
    dates: &dyn CommitDateSource,
    entry: ContentEntry,
    is_primary: bool,
) -> Result<DocsEntry, BuildError> {
    let slug = normalize_index_slug(&entry.slug);
    let (slug, route_id) = if is_primary {
        (slug.to_owned(), entry.id.clone())
    } else if slug.is_empty() {
        (
            entry.collection.clone(),
            format!("{}/{}", entry.collection, entry.id),
        )
    } else {
        (
            format!("{}/{slug}", entry.collection),
            format!("{}/{}", entry.collection, entry.id),
        )
    };

    let source_path = config
        .project_resolved
        .collection_dir(&entry.collection)
        .join(&entry.id);
    let resolve = |setting: Option<&DateSetting>, age| {
        resolve_date(setting, config.publication_dates, &source_path, age, dates)
    };
    let first_published = resolve(entry.data.first_published.as_ref(), CommitAge::Oldest)?;
    let last_updated = resolve(entry.data.last_updated.as_ref(), CommitAge::Newest)?;

    Ok(DocsEntry {
        id: entry.id,
        collection: entry.collection,
        slug,
        route_id,
        data: entry.data,
        first_published,
        last_updated,
    })
}

/// Resolve one date of an entry.
///
/// An authored flag wins over the site default. A literal date is used as
/// written. Otherwise the commit date source is asked; recoverable lookup
/// failures leave the date unset.
fn resolve_date(
    setting: Option<&DateSetting>,
    site_default: bool,
    path: &Path,
    age: CommitAge,
    dates: &dyn CommitDateSource,
) -> Result<Option<DateTime<Utc>>, BuildError> {
    if !setting.map_or(site_default, DateSetting::is_enabled) {
        return Ok(None);
    }
    if let Some(date) = setting.and_then(DateSetting::literal) {
        return Ok(Some(date));
    }

    match dates.commit_date(path, age) {
        Ok(date) => Ok(Some(date)),
        Err(e) if e.is_recoverable() => {
            tracing::debug!(path = %path.display(), ?age, error = %e, "No commit date");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

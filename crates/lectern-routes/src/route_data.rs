//! Per-page data handed to templates.

use std::sync::Arc;

use lectern_config::Config;
use lectern_content::{EditUrlSetting, Frontmatter};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::entries::DocsEntry;
use crate::error::RouteDataError;
use crate::navigation::{PrevNextLinks, SidebarEntry};
use crate::path::ensure_trailing_slash;
use crate::routing::{RESERVED_ROUTE_KEYS, Route};
use crate::toc::{Heading, Toc};
use crate::translations::Labels;

/// Route data fields plugins may not shadow with extensions, on top of
/// [`RESERVED_ROUTE_KEYS`].
pub const RESERVED_ROUTE_DATA_KEYS: &[&str] = &[
    "headings",
    "sidebar",
    "hasSidebar",
    "pagination",
    "toc",
    "editUrl",
    "labels",
];

/// What the host framework passes for one page render.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProps {
    /// Route being rendered.
    #[serde(flatten)]
    pub route: Route,
    /// Headings extracted from the rendered content.
    pub headings: Vec<Heading>,
    /// Frontmatter fields computed while rendering the content.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub remark_plugin_frontmatter: Map<String, Value>,
}

impl PageProps {
    /// Props for a route with no headings.
    #[must_use]
    pub fn new(route: Route) -> Self {
        Self {
            route,
            headings: Vec::new(),
            remark_plugin_frontmatter: Map::new(),
        }
    }

    /// Set the extracted headings.
    #[must_use]
    pub fn with_headings(mut self, headings: Vec<Heading>) -> Self {
        self.headings = headings;
        self
    }

    /// Set the computed frontmatter fields.
    #[must_use]
    pub fn with_remark_frontmatter(mut self, fields: Map<String, Value>) -> Self {
        self.remark_plugin_frontmatter = fields;
        self
    }
}

/// Everything a template needs to render one page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    /// Route with merged frontmatter.
    #[serde(flatten)]
    pub route: Route,
    /// Headings extracted from the rendered content.
    pub headings: Vec<Heading>,
    /// Sidebar with the current page marked.
    pub sidebar: Vec<SidebarEntry>,
    /// False for splash pages.
    pub has_sidebar: bool,
    /// Previous/next links.
    pub pagination: PrevNextLinks,
    /// Table of contents, if enabled for the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc: Option<Toc>,
    /// Edit link, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<Url>,
    /// UI strings in the page language.
    pub labels: Arc<Labels>,
}

/// Merge computed frontmatter fields into the authored frontmatter.
///
/// Authored keys win; authored keys left unset do not hide computed ones.
pub(crate) fn merge_frontmatter(
    entry: &DocsEntry,
    computed: &Map<String, Value>,
) -> Result<Frontmatter, RouteDataError> {
    if computed.is_empty() {
        return Ok(entry.data.clone());
    }

    let invalid = |source| RouteDataError::Frontmatter {
        entry: entry.id.clone(),
        source,
    };
    let mut merged = computed.clone();
    if let Value::Object(authored) = serde_json::to_value(&entry.data).map_err(invalid)? {
        merged.extend(authored);
    }
    serde_json::from_value(Value::Object(merged)).map_err(invalid)
}

/// Resolve the edit link of a page.
///
/// Generated links point at the authored source file, which for fallback
/// routes is the default-locale document.
pub(crate) fn edit_url(
    config: &Config,
    route: &Route,
    data: &Frontmatter,
) -> Result<Option<Url>, RouteDataError> {
    let raw = match data.edit_url {
        Some(EditUrlSetting::Enabled(false)) => return Ok(None),
        Some(EditUrlSetting::Url(ref url)) => url.clone(),
        None | Some(EditUrlSetting::Enabled(true)) => {
            let Some(ref base_url) = config.edit_link.base_url else {
                return Ok(None);
            };
            let entry = &route.entry;
            format!(
                "{}{}content/{}/{}",
                ensure_trailing_slash(base_url),
                config.project_resolved.relative_src_dir(),
                entry.collection,
                entry.id,
            )
        }
    };

    Url::parse(&raw)
        .map(Some)
        .map_err(|source| RouteDataError::InvalidEditUrl {
            entry: route.entry.id.clone(),
            url: raw,
            source,
        })
}

/// Check that hook-added fields do not shadow core fields.
pub(crate) fn validate_route_data(data: &RouteData) -> Result<(), RouteDataError> {
    match data.route.extensions.keys().find(|key| {
        RESERVED_ROUTE_KEYS.contains(&key.as_str())
            || RESERVED_ROUTE_DATA_KEYS.contains(&key.as_str())
    }) {
        Some(key) => Err(RouteDataError::ReservedExtension {
            slug: data.route.slug.clone(),
            key: key.clone(),
        }),
        None => Ok(()),
    }
}

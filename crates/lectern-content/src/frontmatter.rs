//! Typed frontmatter of content entries.
//!
//! Known keys are typed; anything else lands in [`Frontmatter::extra`].
//! Keys use camelCase on the wire, the way authors write them:
//!
//! ```yaml
//! title: Install
//! template: splash
//! lastUpdated: 2024-03-01
//! editUrl: false
//! prev: Back to basics
//! next: { link: /reference/, label: Reference }
//! tableOfContents: { maxHeadingLevel: 4 }
//! sidebar: { order: 2 }
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Authored frontmatter of a content entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Page layout template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    /// Page-level table of contents override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_of_contents: Option<TocOverride>,
    /// Edit link override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<EditUrlSetting>,
    /// Last-updated date, or whether to resolve one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateSetting>,
    /// First-published date, or whether to resolve one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_published: Option<DateSetting>,
    /// Previous-page link override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<PaginationOverride>,
    /// Next-page link override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationOverride>,
    /// Sidebar placement of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<SidebarMeta>,
    /// Every other authored key.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Frontmatter {
    /// Parse frontmatter from a YAML document.
    ///
    /// An empty document yields default frontmatter.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the document is malformed or a known key
    /// has the wrong shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Frontmatter with only a title set.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Page title, empty when unset.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Effective template.
    #[must_use]
    pub fn template(&self) -> Template {
        self.template.unwrap_or_default()
    }

    /// True when the page asked to be left out of the sidebar.
    #[must_use]
    pub fn is_hidden_from_sidebar(&self) -> bool {
        self.sidebar.as_ref().is_some_and(|meta| meta.hidden)
    }
}

/// Page layout template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Regular documentation page with sidebar and table of contents.
    #[default]
    Doc,
    /// Landing page without sidebar or table of contents.
    Splash,
}

/// Page-level table of contents setting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TocOverride {
    /// `true` enables the table of contents with the site levels or the
    /// default 2..=3, `false` disables it.
    Enabled(bool),
    /// Explicit heading range and overview label.
    Custom(TocCustom),
}

/// Explicit page-level table of contents settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocCustom {
    /// Shallowest heading depth included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_heading_level: Option<u8>,
    /// Deepest heading depth included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heading_level: Option<u8>,
    /// Label of the synthetic overview item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview_label: Option<String>,
}

/// Edit link setting: a flag or a verbatim URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditUrlSetting {
    /// `false` removes the edit link, `true` keeps the site default.
    Enabled(bool),
    /// URL used as-is.
    Url(String),
}

/// Date setting for `lastUpdated` / `firstPublished`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateSetting {
    /// `true` resolves the date from version control, `false` disables it.
    Flag(bool),
    /// Full timestamp (RFC 3339).
    Timestamp(DateTime<Utc>),
    /// Calendar day, interpreted as midnight UTC.
    Day(NaiveDate),
}

impl DateSetting {
    /// The literal date, if the setting is one.
    #[must_use]
    pub fn literal(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Flag(_) => None,
            Self::Timestamp(at) => Some(*at),
            Self::Day(day) => Some(day.and_time(chrono::NaiveTime::MIN).and_utc()),
        }
    }

    /// Whether the date is wanted at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Flag(false))
    }
}

/// Previous/next link override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaginationOverride {
    /// `false` hides the link, `true` shows it even when pagination is off.
    Enabled(bool),
    /// Replacement label for the computed link.
    Label(String),
    /// Replacement link and/or label.
    Link(PaginationLink),
}

/// Explicit previous/next link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLink {
    /// Link target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Link label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Sidebar placement of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarMeta {
    /// Label override for autogenerated entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Sort key inside autogenerated groups. Lower sorts first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Leave the page out of autogenerated groups.
    #[serde(default)]
    pub hidden: bool,
}

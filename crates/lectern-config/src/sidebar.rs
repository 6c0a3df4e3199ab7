//! Sidebar navigation configuration.
//!
//! The `[[sidebar]]` array in `lectern.toml` describes the navigation tree.
//! Items are untagged: the keys present decide the item kind.
//!
//! ```toml
//! [[sidebar]]
//! label = "Start here"
//! items = [
//!     "getting-started",                                  # slug shorthand
//!     { slug = "guides/install", label = "Install" },      # internal page
//!     { label = "Changelog", link = "https://example.com/changelog" },
//! ]
//!
//! [[sidebar]]
//! label = "Reference"
//! autogenerate = { directory = "reference" }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

/// One entry of the configured sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Bare string: slug of an internal page, labeled with the page title.
    Slug(String),
    /// Explicit link to an arbitrary URL or root-relative path.
    Link(SidebarLink),
    /// Internal page referenced by slug, localized per locale.
    Page(SidebarPage),
    /// Group whose children are generated from a content directory.
    Autogenerate(SidebarAutogenerate),
    /// Group with explicitly listed children.
    Group(SidebarGroup),
}

/// Link item with a fixed target.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarLink {
    /// Label in the default language.
    pub label: String,
    /// Link target, used verbatim.
    pub link: String,
    /// Label translations keyed by language tag.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

/// Internal page item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarPage {
    /// Page slug in the default locale (e.g. `guides/install`).
    pub slug: String,
    /// Label override. Defaults to the page title.
    #[serde(default)]
    pub label: Option<String>,
    /// Label translations keyed by language tag.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

/// Group generated from every page below a directory.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarAutogenerate {
    /// Group label.
    pub label: String,
    /// Label translations keyed by language tag.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    /// Whether the group starts collapsed.
    #[serde(default)]
    pub collapsed: bool,
    /// Directory selection.
    pub autogenerate: AutogenerateConfig,
}

/// Directory selection for an autogenerated group.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AutogenerateConfig {
    /// Directory relative to the locale root (e.g. `reference`).
    pub directory: String,
    /// Collapse nested subgroups. Defaults to the parent group's setting.
    #[serde(default)]
    pub collapsed: Option<bool>,
}

/// Group with explicit children.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarGroup {
    /// Group label.
    pub label: String,
    /// Label translations keyed by language tag.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    /// Whether the group starts collapsed.
    #[serde(default)]
    pub collapsed: bool,
    /// Child items.
    pub items: Vec<SidebarItem>,
}

//! Routing and page data for Lectern documentation sites.
//!
//! This crate provides:
//! - [`DocsSite`]: Route table, static paths and per-page [`RouteData`]
//! - [`Hooks`]: Plugin extension points for routes, sidebars and page data
//! - Slug, locale and path helpers shared with templates
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use lectern_config::Config;
//! use lectern_content::MockContent;
//! use lectern_routes::{DocsSite, PageProps};
//!
//! let config = Arc::new(Config::load(None)?);
//! let content = Arc::new(MockContent::new().with_page("docs", "index.md", "Home"));
//! let site = DocsSite::builder(config, content).build()?;
//!
//! let origin = url::Url::parse("https://example.com/")?;
//! let mut titles = Vec::new();
//! for path in site.paths() {
//!     let url = origin.join(&lectern_routes::slug_to_pathname(&path.props.slug))?;
//!     let data = site.generate_route_data(&PageProps::new(path.props.clone()), &url)?;
//!     titles.push(data.route.entry.data.title().to_owned());
//! }
//! # Ok(())
//! # }
//! ```

mod entries;
mod error;
mod hooks;
mod index;
mod navigation;
mod path;
mod route_data;
mod routing;
mod site;
mod slugs;
mod toc;
mod translations;

pub use entries::DocsEntry;
pub use error::{BuildError, RouteDataError};
pub use hooks::{
    AllRoutesHook, HookError, HookKind, HookResult, Hooks, RouteDataHook, RouteHook,
    RouteHookOutcome, SidebarHook, define_all_routes_hook, define_route_data_hook,
    define_route_hook, define_sidebar_hook,
};
pub use index::{RouteIndex, RouteKey, StaticPath, StaticPathParams};
pub use navigation::{
    PrevNextLinks, SidebarEntry, SidebarGroupEntry, SidebarLinkEntry, flatten_sidebar,
    prev_next_links,
};
pub use path::{
    ensure_leading_slash, ensure_trailing_slash, file_with_base, path_with_base,
    strip_leading_and_trailing_slashes, strip_leading_slash, strip_trailing_slash,
};
pub use route_data::{PageProps, RESERVED_ROUTE_DATA_KEYS, RouteData};
pub use routing::{RESERVED_ROUTE_KEYS, Route};
pub use site::{DocsSite, DocsSiteBuilder};
pub use slugs::{
    LocaleData, locale_to_dir, locale_to_lang, localized_id, localized_slug,
    normalize_index_slug, slug_to_locale, slug_to_locale_data, slug_to_param, slug_to_pathname,
};
pub use toc::{Heading, PAGE_TITLE_ID, Toc, TocItem, generate_toc};
pub use translations::{Labels, Translations};

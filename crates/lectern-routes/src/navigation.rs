//! Sidebar navigation and previous/next links.
//!
//! The configured sidebar is resolved once per locale into a skeleton with
//! localized slugs and translated labels. Per page the skeleton is copied and
//! the entry matching the request pathname is marked current.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use lectern_config::{I18nConfig, SidebarAutogenerate, SidebarItem};
use lectern_content::PaginationOverride;
use serde::Serialize;

use crate::error::BuildError;
use crate::path::{path_with_base, paths_match, strip_leading_and_trailing_slashes};
use crate::routing::Route;
use crate::slugs::{localized_slug, normalize_index_slug, slug_to_pathname};

/// One entry of a page's sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SidebarEntry {
    /// Link to a page or URL.
    Link(SidebarLinkEntry),
    /// Labeled group of entries.
    Group(SidebarGroupEntry),
}

impl SidebarEntry {
    /// Link entry that is not current.
    #[must_use]
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link(SidebarLinkEntry::new(label, href))
    }
}

/// Sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarLinkEntry {
    /// Link label.
    pub label: String,
    /// Link target.
    pub href: String,
    /// True when the link points at the page being rendered.
    pub is_current: bool,
}

impl SidebarLinkEntry {
    /// Link that is not current.
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            is_current: false,
        }
    }
}

/// Sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroupEntry {
    /// Group label.
    pub label: String,
    /// Child entries.
    pub entries: Vec<SidebarEntry>,
    /// Whether the group starts collapsed.
    pub collapsed: bool,
}

/// Previous and next page links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrevNextLinks {
    /// Link to the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<SidebarLinkEntry>,
    /// Link to the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<SidebarLinkEntry>,
}

/// Inputs for resolving the sidebar of one locale.
pub(crate) struct SidebarContext<'a> {
    pub(crate) i18n: &'a I18nConfig,
    pub(crate) base: &'a str,
    pub(crate) locale: Option<&'a str>,
    pub(crate) lang: &'a str,
    pub(crate) routes: Vec<&'a Route>,
}

impl SidebarContext<'_> {
    fn route_by_slug(&self) -> HashMap<&str, &Route> {
        self.routes.iter().map(|r| (r.slug.as_str(), *r)).collect()
    }

    fn translate(&self, label: &str, translations: &BTreeMap<String, String>) -> String {
        translations
            .get(self.lang)
            .or_else(|| {
                self.lang
                    .split_once('-')
                    .and_then(|(base, _)| translations.get(base))
            })
            .map_or_else(|| label.to_owned(), Clone::clone)
    }

    fn route_link(&self, route: &Route, label: Option<String>) -> SidebarEntry {
        let data = &route.entry.data;
        let label = label
            .or_else(|| data.sidebar.as_ref().and_then(|s| s.label.clone()))
            .unwrap_or_else(|| data.title().to_owned());
        SidebarEntry::link(label, path_with_base(self.base, &slug_to_pathname(&route.slug)))
    }
}

/// Resolve configured sidebar items for one locale.
pub(crate) fn build_sidebar(items: &[SidebarItem], ctx: &SidebarContext<'_>) -> Vec<SidebarEntry> {
    let by_slug = ctx.route_by_slug();
    items
        .iter()
        .filter_map(|item| resolve_item(item, ctx, &by_slug))
        .collect()
}

fn resolve_item(
    item: &SidebarItem,
    ctx: &SidebarContext<'_>,
    by_slug: &HashMap<&str, &Route>,
) -> Option<SidebarEntry> {
    match item {
        SidebarItem::Link(link) => Some(SidebarEntry::link(
            ctx.translate(&link.label, &link.translations),
            link_href(ctx.base, &link.link),
        )),
        SidebarItem::Slug(slug) => resolve_page(slug, None, ctx, by_slug),
        SidebarItem::Page(page) => {
            let label = page
                .label
                .as_deref()
                .map(|label| ctx.translate(label, &page.translations));
            resolve_page(&page.slug, label, ctx, by_slug)
        }
        SidebarItem::Group(group) => Some(SidebarEntry::Group(SidebarGroupEntry {
            label: ctx.translate(&group.label, &group.translations),
            entries: group
                .items
                .iter()
                .filter_map(|child| resolve_item(child, ctx, by_slug))
                .collect(),
            collapsed: group.collapsed,
        })),
        SidebarItem::Autogenerate(auto) => Some(autogenerate(auto, ctx)),
    }
}

fn resolve_page(
    slug: &str,
    label: Option<String>,
    ctx: &SidebarContext<'_>,
    by_slug: &HashMap<&str, &Route>,
) -> Option<SidebarEntry> {
    let localized = localized_slug(config_slug(slug), ctx.locale, ctx.i18n);
    match by_slug.get(localized.as_str()) {
        Some(route) => Some(ctx.route_link(route, label)),
        None => {
            tracing::warn!(slug, locale = ?ctx.locale, "Sidebar slug has no route, skipping");
            None
        }
    }
}

/// Normalize a slug as written in the sidebar config.
fn config_slug(slug: &str) -> &str {
    normalize_index_slug(strip_leading_and_trailing_slashes(slug))
}

/// External links are kept; site paths get the base prefix.
fn link_href(base: &str, link: &str) -> String {
    let has_scheme = link
        .split_once(':')
        .is_some_and(|(scheme, _)| {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        });
    if has_scheme || link.starts_with("//") || link.starts_with('#') {
        link.to_owned()
    } else {
        path_with_base(base, link)
    }
}

/// Directory tree of autogenerated routes, keyed by id segments.
#[derive(Default)]
struct DirTree<'a> {
    pages: Vec<(&'a str, &'a Route)>,
    dirs: IndexMap<&'a str, DirTree<'a>>,
}

impl<'a> DirTree<'a> {
    fn insert(&mut self, segments: &[&'a str], route: &'a Route) {
        match segments {
            [] => {}
            [file] => self.pages.push((*file, route)),
            [dir, rest @ ..] => self.dirs.entry(*dir).or_default().insert(rest, route),
        }
    }

    fn min_order(&self) -> i64 {
        self.pages
            .iter()
            .map(|(_, route)| sidebar_order(route))
            .chain(self.dirs.values().map(DirTree::min_order))
            .min()
            .unwrap_or(i64::MAX)
    }

    fn into_entries(self, collapsed: bool, ctx: &SidebarContext<'_>) -> Vec<SidebarEntry> {
        let mut keyed: Vec<(i64, String, SidebarEntry)> = Vec::new();

        for (file, route) in self.pages {
            keyed.push((
                sidebar_order(route),
                file.to_lowercase(),
                ctx.route_link(route, None),
            ));
        }
        for (name, dir) in self.dirs {
            let order = dir.min_order();
            keyed.push((
                order,
                name.to_lowercase(),
                SidebarEntry::Group(SidebarGroupEntry {
                    label: name.to_owned(),
                    entries: dir.into_entries(collapsed, ctx),
                    collapsed,
                }),
            ));
        }

        keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        keyed.into_iter().map(|(_, _, entry)| entry).collect()
    }
}

fn sidebar_order(route: &Route) -> i64 {
    route
        .entry
        .data
        .sidebar
        .as_ref()
        .and_then(|s| s.order)
        .unwrap_or(i64::MAX)
}

/// Expand an autogenerated group from the routes below its directory.
///
/// Pages are sorted by `sidebar.order` (unordered last), then file name.
/// Subdirectories become groups ordered by their lowest page order.
fn autogenerate(auto: &SidebarAutogenerate, ctx: &SidebarContext<'_>) -> SidebarEntry {
    let directory = localized_slug(
        strip_leading_and_trailing_slashes(&auto.autogenerate.directory),
        ctx.locale,
        ctx.i18n,
    );
    let prefix = if directory.is_empty() {
        String::new()
    } else {
        format!("{directory}/")
    };

    let mut tree = DirTree::default();
    for route in ctx.routes.iter().copied() {
        if route.entry.data.is_hidden_from_sidebar() {
            continue;
        }
        let Some(relative) = route.id.strip_prefix(prefix.as_str()) else {
            continue;
        };
        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        tree.insert(&segments, route);
    }

    let nested_collapsed = auto.autogenerate.collapsed.unwrap_or(auto.collapsed);
    SidebarEntry::Group(SidebarGroupEntry {
        label: ctx.translate(&auto.label, &auto.translations),
        entries: tree.into_entries(nested_collapsed, ctx),
        collapsed: auto.collapsed,
    })
}

/// Mark links matching `pathname` as current.
pub(crate) fn mark_current(entries: &mut [SidebarEntry], pathname: &str) {
    for entry in entries {
        match entry {
            SidebarEntry::Link(link) => link.is_current = paths_match(&link.href, pathname),
            SidebarEntry::Group(group) => mark_current(&mut group.entries, pathname),
        }
    }
}

/// All links of a sidebar, depth first.
#[must_use]
pub fn flatten_sidebar(entries: &[SidebarEntry]) -> Vec<&SidebarLinkEntry> {
    let mut links = Vec::new();
    collect_links(entries, &mut links);
    links
}

fn collect_links<'a>(entries: &'a [SidebarEntry], links: &mut Vec<&'a SidebarLinkEntry>) {
    for entry in entries {
        match entry {
            SidebarEntry::Link(link) => links.push(link),
            SidebarEntry::Group(group) => collect_links(&group.entries, links),
        }
    }
}

/// Previous/next links around the current sidebar entry.
///
/// Without a current entry there are no computed links; explicit
/// `{link, label}` overrides still apply.
#[must_use]
pub fn prev_next_links(
    sidebar: &[SidebarEntry],
    pagination: bool,
    prev: Option<&PaginationOverride>,
    next: Option<&PaginationOverride>,
) -> PrevNextLinks {
    let links = flatten_sidebar(sidebar);
    let current = links.iter().position(|link| link.is_current);

    let prev_link = current
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| links.get(i))
        .map(|link| (*link).clone());
    let next_link = current
        .and_then(|i| links.get(i + 1))
        .map(|link| (*link).clone());

    PrevNextLinks {
        prev: apply_override(prev_link, pagination, prev),
        next: apply_override(next_link, pagination, next),
    }
}

fn apply_override(
    link: Option<SidebarLinkEntry>,
    pagination: bool,
    setting: Option<&PaginationOverride>,
) -> Option<SidebarLinkEntry> {
    match (setting, link) {
        (Some(PaginationOverride::Enabled(false)), _) => None,
        (Some(PaginationOverride::Enabled(true)), link) => link,
        (Some(PaginationOverride::Label(label)), Some(link)) => Some(SidebarLinkEntry {
            label: label.clone(),
            ..link
        }),
        (Some(PaginationOverride::Link(custom)), Some(link)) => Some(SidebarLinkEntry {
            label: custom.label.clone().unwrap_or(link.label),
            href: custom.link.clone().unwrap_or(link.href),
            is_current: false,
        }),
        (Some(PaginationOverride::Link(custom)), None) => match (&custom.link, &custom.label) {
            (Some(href), Some(label)) => Some(SidebarLinkEntry::new(label, href)),
            _ => None,
        },
        (_, link) => link.filter(|_| pagination),
    }
}

/// Check that every page the sidebar names exists in the default locale.
pub(crate) fn validate_sidebar(
    items: &[SidebarItem],
    routes: &[Route],
    i18n: &I18nConfig,
) -> Result<(), BuildError> {
    let default_locale = i18n.default_locale.locale();
    for item in items {
        let slug = match item {
            SidebarItem::Slug(slug) => slug,
            SidebarItem::Page(page) => &page.slug,
            SidebarItem::Group(group) => {
                validate_sidebar(&group.items, routes, i18n)?;
                continue;
            }
            SidebarItem::Link(_) | SidebarItem::Autogenerate(_) => continue,
        };
        let localized = localized_slug(config_slug(slug), default_locale, i18n);
        if !routes.iter().any(|route| route.slug == localized) {
            return Err(BuildError::UnknownSidebarSlug { slug: slug.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use lectern_config::{AutogenerateConfig, SidebarGroup, SidebarLink, SidebarPage};
    use lectern_content::{Frontmatter, PaginationLink, SidebarMeta};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entries::DocsEntry;
    use crate::routing::tests::entry;
    use crate::slugs::slug_to_locale_data;
    use crate::slugs::tests::multilingual;

    fn page(id: &str, slug: &str, title: &str, data: Frontmatter, i18n: &I18nConfig) -> Route {
        let entry = DocsEntry {
            id: id.to_owned(),
            slug: slug.to_owned(),
            route_id: id.to_owned(),
            data: Frontmatter {
                title: Some(title.to_owned()),
                ..data
            },
            ..entry(slug)
        };
        Route::new(entry, slug_to_locale_data(slug, i18n))
    }

    fn ordered(order: i64) -> Frontmatter {
        Frontmatter {
            sidebar: Some(SidebarMeta {
                order: Some(order),
                ..SidebarMeta::default()
            }),
            ..Frontmatter::default()
        }
    }

    fn ctx<'a>(routes: &'a [Route], i18n: &'a I18nConfig, locale: Option<&'a str>) -> SidebarContext<'a> {
        SidebarContext {
            i18n,
            base: "/docs",
            locale,
            lang: locale.unwrap_or("en"),
            routes: routes.iter().collect(),
        }
    }

    fn labels(entries: &[SidebarEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| match e {
                SidebarEntry::Link(l) => l.label.clone(),
                SidebarEntry::Group(g) => format!("[{}]", g.label),
            })
            .collect()
    }

    fn links(labels: &[&str]) -> Vec<SidebarEntry> {
        labels
            .iter()
            .map(|l| SidebarEntry::link(*l, format!("/{l}/")))
            .collect()
    }

    #[test]
    fn test_build_sidebar_resolves_items() {
        let i18n = I18nConfig::default();
        let routes = vec![
            page("index.md", "", "Home", Frontmatter::default(), &i18n),
            page("guides/setup.md", "guides/setup", "Setup", Frontmatter::default(), &i18n),
        ];
        let items = vec![
            SidebarItem::Slug("/index/".to_owned()),
            SidebarItem::Group(SidebarGroup {
                label: "Guides".to_owned(),
                translations: BTreeMap::new(),
                collapsed: true,
                items: vec![
                    SidebarItem::Page(SidebarPage {
                        slug: "guides/setup".to_owned(),
                        label: Some("Install".to_owned()),
                        translations: BTreeMap::new(),
                    }),
                    SidebarItem::Link(SidebarLink {
                        label: "GitHub".to_owned(),
                        link: "https://github.com/acme".to_owned(),
                        translations: BTreeMap::new(),
                    }),
                ],
            }),
        ];

        let sidebar = build_sidebar(&items, &ctx(&routes, &i18n, None));

        assert_eq!(
            sidebar,
            vec![
                SidebarEntry::link("Home", "/docs/"),
                SidebarEntry::Group(SidebarGroupEntry {
                    label: "Guides".to_owned(),
                    entries: vec![
                        SidebarEntry::link("Install", "/docs/guides/setup/"),
                        SidebarEntry::link("GitHub", "https://github.com/acme"),
                    ],
                    collapsed: true,
                }),
            ]
        );
    }

    #[test]
    fn test_build_sidebar_localizes_slugs_and_labels() {
        let i18n = multilingual();
        let routes = vec![
            page("guide.md", "guide", "Guide", Frontmatter::default(), &i18n),
            page("fr/guide.md", "fr/guide", "Guide FR", Frontmatter::default(), &i18n),
        ];
        let mut translations = BTreeMap::new();
        translations.insert("fr".to_owned(), "Aide".to_owned());
        let items = vec![
            SidebarItem::Slug("guide".to_owned()),
            SidebarItem::Link(SidebarLink {
                label: "Help".to_owned(),
                link: "/help/".to_owned(),
                translations,
            }),
        ];

        let sidebar = build_sidebar(&items, &ctx(&routes, &i18n, Some("fr")));

        assert_eq!(
            sidebar,
            vec![
                SidebarEntry::link("Guide FR", "/docs/fr/guide/"),
                SidebarEntry::link("Aide", "/docs/help/"),
            ]
        );
    }

    #[test]
    fn test_missing_slug_is_skipped() {
        let i18n = I18nConfig::default();
        let items = vec![SidebarItem::Slug("nowhere".to_owned())];

        assert!(build_sidebar(&items, &ctx(&[], &i18n, None)).is_empty());
    }

    #[test]
    fn test_autogenerate_orders_and_nests() {
        let i18n = I18nConfig::default();
        let hidden = Frontmatter {
            sidebar: Some(SidebarMeta {
                hidden: true,
                ..SidebarMeta::default()
            }),
            ..Frontmatter::default()
        };
        let routes = vec![
            page("reference/zeta.md", "reference/zeta", "Zeta", Frontmatter::default(), &i18n),
            page("reference/alpha.md", "reference/alpha", "Alpha", Frontmatter::default(), &i18n),
            page("reference/first.md", "reference/first", "First", ordered(1), &i18n),
            page("reference/cli/run.md", "reference/cli/run", "Run", ordered(5), &i18n),
            page("reference/secret.md", "reference/secret", "Secret", hidden, &i18n),
            page("guides/other.md", "guides/other", "Other", Frontmatter::default(), &i18n),
        ];
        let items = vec![SidebarItem::Autogenerate(SidebarAutogenerate {
            label: "Reference".to_owned(),
            translations: BTreeMap::new(),
            collapsed: false,
            autogenerate: AutogenerateConfig {
                directory: "/reference/".to_owned(),
                collapsed: Some(true),
            },
        })];

        let sidebar = build_sidebar(&items, &ctx(&routes, &i18n, None));

        let SidebarEntry::Group(group) = &sidebar[0] else {
            panic!("Expected group, got {:?}", sidebar[0]);
        };
        assert!(!group.collapsed);
        assert_eq!(labels(&group.entries), vec!["First", "[cli]", "Alpha", "Zeta"]);
        let SidebarEntry::Group(cli) = &group.entries[1] else {
            panic!("Expected cli group");
        };
        assert!(cli.collapsed);
        assert_eq!(labels(&cli.entries), vec!["Run"]);
    }

    #[test]
    fn test_autogenerate_uses_locale_routes() {
        let i18n = multilingual();
        let routes = vec![
            page("fr/reference/a.md", "fr/reference/a", "A FR", Frontmatter::default(), &i18n),
            page("reference/a.md", "reference/a", "A", Frontmatter::default(), &i18n),
        ];
        let items = vec![SidebarItem::Autogenerate(SidebarAutogenerate {
            label: "Reference".to_owned(),
            translations: BTreeMap::new(),
            collapsed: false,
            autogenerate: AutogenerateConfig {
                directory: "reference".to_owned(),
                collapsed: None,
            },
        })];

        let sidebar = build_sidebar(&items, &ctx(&routes, &i18n, Some("fr")));

        let SidebarEntry::Group(group) = &sidebar[0] else {
            panic!("Expected group");
        };
        assert_eq!(labels(&group.entries), vec!["A FR"]);
    }

    #[test]
    fn test_sidebar_label_from_frontmatter() {
        let i18n = I18nConfig::default();
        let data = Frontmatter {
            sidebar: Some(SidebarMeta {
                label: Some("Short".to_owned()),
                ..SidebarMeta::default()
            }),
            ..Frontmatter::default()
        };
        let routes = vec![page("long.md", "long", "A Very Long Title", data, &i18n)];

        let sidebar = build_sidebar(&[SidebarItem::Slug("long".to_owned())], &ctx(&routes, &i18n, None));

        assert_eq!(labels(&sidebar), vec!["Short"]);
    }

    #[test]
    fn test_link_href() {
        assert_eq!(link_href("/docs", "/guide/"), "/docs/guide/");
        assert_eq!(link_href("/docs", "https://x.dev"), "https://x.dev");
        assert_eq!(link_href("/docs", "mailto:a@b.c"), "mailto:a@b.c");
        assert_eq!(link_href("/docs", "//cdn.x.dev/a"), "//cdn.x.dev/a");
    }

    #[test]
    fn test_mark_current_in_groups() {
        let mut sidebar = vec![
            SidebarEntry::link("Home", "/"),
            SidebarEntry::Group(SidebarGroupEntry {
                label: "G".to_owned(),
                entries: links(&["a", "b"]),
                collapsed: false,
            }),
        ];

        mark_current(&mut sidebar, "/b");

        let flat = flatten_sidebar(&sidebar);
        let current: Vec<_> = flat.iter().filter(|l| l.is_current).map(|l| &l.label).collect();
        assert_eq!(current, vec!["b"]);
        assert_eq!(flat.len(), 3);
    }

    #[test]
    fn test_pagination_adjacency() {
        let mut sidebar = links(&["p1", "p2", "p3"]);

        mark_current(&mut sidebar, "/p2/");
        let middle = prev_next_links(&sidebar, true, None, None);
        assert_eq!(middle.prev.map(|l| l.label).as_deref(), Some("p1"));
        assert_eq!(middle.next.map(|l| l.label).as_deref(), Some("p3"));

        mark_current(&mut sidebar, "/p1/");
        let first = prev_next_links(&sidebar, true, None, None);
        assert_eq!(first.prev, None);
        assert_eq!(first.next.map(|l| l.label).as_deref(), Some("p2"));

        mark_current(&mut sidebar, "/p3/");
        let last = prev_next_links(&sidebar, true, None, None);
        assert_eq!(last.prev.map(|l| l.label).as_deref(), Some("p2"));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_pagination_without_current_page() {
        let sidebar = links(&["p1", "p2"]);

        assert_eq!(prev_next_links(&sidebar, true, None, None), PrevNextLinks::default());
    }

    #[test]
    fn test_pagination_disabled_unless_forced() {
        let mut sidebar = links(&["p1", "p2", "p3"]);
        mark_current(&mut sidebar, "/p2/");

        let links = prev_next_links(&sidebar, false, Some(&PaginationOverride::Enabled(true)), None);

        assert_eq!(links.prev.map(|l| l.label).as_deref(), Some("p1"));
        assert_eq!(links.next, None);
    }

    #[test]
    fn test_pagination_overrides() {
        let mut sidebar = links(&["p1", "p2", "p3"]);
        mark_current(&mut sidebar, "/p2/");
        let hide = PaginationOverride::Enabled(false);
        let relabel = PaginationOverride::Label("Onward".to_owned());

        let result = prev_next_links(&sidebar, true, Some(&hide), Some(&relabel));

        assert_eq!(result.prev, None);
        assert_eq!(result.next, Some(SidebarLinkEntry::new("Onward", "/p3/")));
    }

    #[test]
    fn test_pagination_custom_link() {
        let mut sidebar = links(&["p1", "p2"]);
        mark_current(&mut sidebar, "/p2/");
        let retarget = PaginationOverride::Link(PaginationLink {
            link: Some("/elsewhere/".to_owned()),
            label: None,
        });
        let create = PaginationOverride::Link(PaginationLink {
            link: Some("/next/".to_owned()),
            label: Some("Next up".to_owned()),
        });

        let result = prev_next_links(&sidebar, true, Some(&retarget), Some(&create));

        assert_eq!(result.prev, Some(SidebarLinkEntry::new("p1", "/elsewhere/")));
        assert_eq!(result.next, Some(SidebarLinkEntry::new("Next up", "/next/")));
    }

    #[test]
    fn test_validate_sidebar() {
        let i18n = multilingual();
        let routes = vec![page("guide.md", "guide", "Guide", Frontmatter::default(), &i18n)];
        let ok = vec![SidebarItem::Group(SidebarGroup {
            label: "G".to_owned(),
            translations: BTreeMap::new(),
            collapsed: false,
            items: vec![SidebarItem::Slug("guide/".to_owned())],
        })];
        let bad = vec![SidebarItem::Slug("gone".to_owned())];

        assert!(validate_sidebar(&ok, &routes, &i18n).is_ok());
        let err = validate_sidebar(&bad, &routes, &i18n).unwrap_err();
        assert_eq!(err.to_string(), "Sidebar entry \"gone\" does not match any page");
    }

    #[test]
    fn test_sidebar_entry_serialization() {
        let entry = SidebarEntry::link("Home", "/");

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "type": "link", "label": "Home", "href": "/", "isCurrent": false })
        );
    }
}

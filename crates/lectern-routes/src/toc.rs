//! Table of contents generation.

use lectern_config::TocConfig;
use lectern_content::{Frontmatter, Template, TocOverride};
use serde::{Deserialize, Serialize};

/// Anchor id of the synthetic overview item.
pub const PAGE_TITLE_ID: &str = "_top";

/// A heading extracted from the rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1 to 6.
    pub depth: u8,
    /// Anchor id.
    pub slug: String,
    /// Heading text.
    pub text: String,
}

/// One entry of the table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocItem {
    /// Heading level.
    pub depth: u8,
    /// Anchor id.
    pub slug: String,
    /// Heading text.
    pub text: String,
    /// Deeper headings nested below this one.
    pub children: Vec<TocItem>,
}

/// Resolved table of contents of a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toc {
    /// Shallowest heading depth included.
    pub min_heading_level: u8,
    /// Deepest heading depth included.
    pub max_heading_level: u8,
    /// Overview item followed by the nested headings.
    pub items: Vec<TocItem>,
}

/// Resolve a page's table of contents.
///
/// `None` for splash pages and when the page or site setting disables it.
/// The page setting replaces the site setting; levels it leaves out come
/// from the site setting, or the defaults when the site disables it.
pub(crate) fn resolve_toc(
    data: &Frontmatter,
    site: Option<&TocConfig>,
    headings: &[Heading],
    overview_label: &str,
) -> Option<Toc> {
    if data.template() == Template::Splash {
        return None;
    }

    let (levels, label) = match data.table_of_contents {
        None => (site?.clone(), None),
        Some(TocOverride::Enabled(true)) => (site.cloned().unwrap_or_default(), None),
        Some(TocOverride::Enabled(false)) => return None,
        Some(TocOverride::Custom(ref custom)) => {
            let base = site.cloned().unwrap_or_default();
            let levels = TocConfig {
                min_heading_level: custom.min_heading_level.unwrap_or(base.min_heading_level),
                max_heading_level: custom.max_heading_level.unwrap_or(base.max_heading_level),
            };
            (levels, custom.overview_label.as_deref())
        }
    };

    let items = generate_toc(
        headings,
        levels.min_heading_level,
        levels.max_heading_level,
        label.unwrap_or(overview_label),
    );
    Some(Toc {
        min_heading_level: levels.min_heading_level,
        max_heading_level: levels.max_heading_level,
        items,
    })
}

/// Build the nested item list: the overview item, then headings within
/// `min..=max` in document order, each nested under the closest preceding
/// shallower item.
#[must_use]
pub fn generate_toc(headings: &[Heading], min: u8, max: u8, title: &str) -> Vec<TocItem> {
    let mut items = vec![TocItem {
        depth: 2,
        slug: PAGE_TITLE_ID.to_owned(),
        text: title.to_owned(),
        children: Vec::new(),
    }];

    for heading in headings.iter().filter(|h| (min..=max).contains(&h.depth)) {
        inject_child(
            &mut items,
            TocItem {
                depth: heading.depth,
                slug: heading.slug.clone(),
                text: heading.text.clone(),
                children: Vec::new(),
            },
        );
    }

    items
}

fn inject_child(items: &mut Vec<TocItem>, item: TocItem) {
    match items.last_mut() {
        Some(last) if last.depth < item.depth => inject_child(&mut last.children, item),
        _ => items.push(item),
    }
}

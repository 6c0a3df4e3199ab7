//! Route records, base routes, and locale fallback routes.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use lectern_config::{I18nConfig, ROOT_LOCALE, TextDirection};
use serde::Serialize;
use serde_json::Value;

use crate::entries::DocsEntry;
use crate::error::BuildError;
use crate::index::RouteKey;
use crate::slugs::{LocaleData, localized_id, localized_slug};

/// Route fields plugins may not shadow with extensions.
pub const RESERVED_ROUTE_KEYS: &[&str] = &[
    "entry",
    "entryMeta",
    "slug",
    "id",
    "lang",
    "dir",
    "locale",
    "firstPublished",
    "lastUpdated",
    "isFallback",
];

/// One servable page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Content shown on the page. Fallback routes carry the default-locale entry.
    pub entry: Arc<DocsEntry>,
    /// Locale the content was authored in.
    pub entry_meta: LocaleData,
    /// Language the page is served in.
    pub lang: String,
    /// Locale the page is served in; `None` is the root locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Text direction the page is served in.
    pub dir: TextDirection,
    /// Unique page slug.
    pub slug: String,
    /// Route id (localized entry id for fallback routes).
    pub id: String,
    /// First-published date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_published: Option<DateTime<Utc>>,
    /// Last-updated date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// True for routes synthesized for a locale without its own translation.
    pub is_fallback: bool,
    /// Fields added by plugins.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl Route {
    /// Route serving an entry in the locale derived from its slug.
    #[must_use]
    pub fn new(entry: DocsEntry, locale_data: LocaleData) -> Self {
        Self {
            lang: locale_data.lang.clone(),
            locale: locale_data.locale.clone(),
            dir: locale_data.dir,
            entry_meta: locale_data,
            slug: entry.slug.clone(),
            id: entry.route_id.clone(),
            first_published: entry.first_published,
            last_updated: entry.last_updated,
            is_fallback: false,
            extensions: BTreeMap::new(),
            entry: Arc::new(entry),
        }
    }

    /// Locale the page is served in.
    #[must_use]
    pub fn locale_data(&self) -> LocaleData {
        LocaleData {
            lang: self.lang.clone(),
            locale: self.locale.clone(),
            dir: self.dir,
        }
    }

    /// Attach a plugin field.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }
}

/// Check if a slug belongs to a locale.
///
/// A configured locale owns its index slug and everything below it. Any other
/// locale (including `None`) owns, when a root locale exists, every slug not
/// owned by a prefixed locale. Without configured locales everything matches.
pub(crate) fn slug_in_locale(slug: &str, locale: Option<&str>, i18n: &I18nConfig) -> bool {
    if i18n.locales.is_empty() {
        return true;
    }
    if let Some(locale) = locale.filter(|l| i18n.locales.contains_key(*l)) {
        return slug == locale
            || slug
                .strip_prefix(locale)
                .is_some_and(|rest| rest.starts_with('/'));
    }
    if i18n.has_root() {
        let first = slug.split('/').next().unwrap_or_default();
        return !i18n.prefixed_keys().any(|key| key == first);
    }
    true
}

/// Routes belonging to a locale, in table order.
pub(crate) fn filter_by_locale<'a>(
    routes: &'a [Route],
    locale: Option<&str>,
    i18n: &I18nConfig,
) -> Vec<&'a Route> {
    routes
        .iter()
        .filter(|route| slug_in_locale(&route.slug, locale, i18n))
        .collect()
}

/// Synthesize routes for locales missing a translation of a default-locale page.
///
/// Runs only for multilingual sites. Locales are visited in declaration
/// order, default-locale routes in table order. Fallback routes keep the
/// default-locale entry and its dates.
pub(crate) fn fallback_routes(
    routes: &[Route],
    i18n: &I18nConfig,
    locale_data: impl Fn(&str) -> LocaleData,
) -> Vec<Route> {
    if !i18n.is_multilingual() {
        return Vec::new();
    }

    let default_key = i18n.default_locale.key.as_deref();
    let default_routes = filter_by_locale(routes, i18n.default_locale.locale(), i18n);
    let mut fallbacks = Vec::new();

    for (key, config) in &i18n.locales {
        if Some(key.as_str()) == default_key {
            continue;
        }
        let locale = (key != ROOT_LOCALE).then_some(key.as_str());
        let existing: HashSet<&str> = filter_by_locale(routes, locale, i18n)
            .into_iter()
            .map(|route| route.slug.as_str())
            .collect();

        for route in &default_routes {
            let slug = localized_slug(&route.slug, locale, i18n);
            if existing.contains(slug.as_str()) {
                continue;
            }
            fallbacks.push(Route {
                entry: Arc::clone(&route.entry),
                entry_meta: locale_data(&route.slug),
                lang: config.lang.clone(),
                locale: locale.map(str::to_owned),
                dir: config.dir,
                id: localized_id(&route.id, locale, i18n),
                slug,
                first_published: route.entry.first_published,
                last_updated: route.entry.last_updated,
                is_fallback: true,
                extensions: BTreeMap::new(),
            });
        }
    }

    fallbacks
}

/// Check the final route table: one route per URL, no shadowed core fields.
pub(crate) fn validate_routes(routes: &[Route]) -> Result<(), BuildError> {
    let mut seen: HashMap<RouteKey, &Route> = HashMap::with_capacity(routes.len());

    for route in routes {
        if let Some(key) = route
            .extensions
            .keys()
            .find(|key| RESERVED_ROUTE_KEYS.contains(&key.as_str()))
        {
            return Err(BuildError::ReservedExtension {
                slug: route.slug.clone(),
                key: key.clone(),
            });
        }

        if let Some(first) = seen.insert(RouteKey::from_slug(&route.slug), route) {
            return Err(BuildError::DuplicateSlug {
                slug: route.slug.clone(),
                first: first.id.clone(),
                second: route.id.clone(),
            });
        }
    }

    Ok(())
}

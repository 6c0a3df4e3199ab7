//! Slug and locale utilities.
//!
//! Slugs are URL-path-like identifiers without leading or trailing slashes.
//! The first slug segment names the locale when it matches a configured
//! locale key; slugs of the root locale carry no prefix.

use lectern_config::{I18nConfig, ROOT_LOCALE, TextDirection};
use serde::Serialize;

use crate::path::strip_trailing_slash;

/// Language, locale key, and text direction of a slug.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LocaleData {
    /// BCP-47 language tag.
    pub lang: String,
    /// Locale key; `None` is the root (unprefixed) locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Text direction.
    pub dir: TextDirection,
}

/// Map the bare `index` slug to the empty root slug.
#[must_use]
pub fn normalize_index_slug(slug: &str) -> &str {
    if slug == "index" { "" } else { slug }
}

/// Locale key a slug belongs to, if its first segment is a prefixed locale.
#[must_use]
pub fn slug_to_locale<'a>(slug: &'a str, i18n: &I18nConfig) -> Option<&'a str> {
    let first = slug.split('/').next().filter(|segment| !segment.is_empty())?;
    (first != ROOT_LOCALE && i18n.locales.contains_key(first)).then_some(first)
}

/// Language tag of a locale, falling back to the root and default locales.
#[must_use]
pub fn locale_to_lang(locale: Option<&str>, i18n: &I18nConfig) -> String {
    i18n.locales
        .get(locale.unwrap_or(ROOT_LOCALE))
        .map_or_else(|| i18n.default_locale.lang.clone(), |l| l.lang.clone())
}

/// Text direction of a locale, falling back to the root and default locales.
#[must_use]
pub fn locale_to_dir(locale: Option<&str>, i18n: &I18nConfig) -> TextDirection {
    i18n.locales
        .get(locale.unwrap_or(ROOT_LOCALE))
        .map_or(i18n.default_locale.dir, |l| l.dir)
}

/// Locale data derived from a slug.
#[must_use]
pub fn slug_to_locale_data(slug: &str, i18n: &I18nConfig) -> LocaleData {
    let locale = slug_to_locale(slug, i18n);
    LocaleData {
        lang: locale_to_lang(locale, i18n),
        locale: locale.map(str::to_owned),
        dir: locale_to_dir(locale, i18n),
    }
}

/// URL parameter of a slug; `None` for the root page.
///
/// ```
/// use lectern_routes::slug_to_param;
///
/// assert_eq!(slug_to_param(""), None);
/// assert_eq!(slug_to_param("fr/guide"), Some("fr/guide"));
/// ```
#[must_use]
pub fn slug_to_param(slug: &str) -> Option<&str> {
    match slug {
        "" | "/" => None,
        _ => Some(slug),
    }
}

/// Pathname of a slug, relative to the site base.
///
/// ```
/// use lectern_routes::slug_to_pathname;
///
/// assert_eq!(slug_to_pathname(""), "/");
/// assert_eq!(slug_to_pathname("fr/guide"), "/fr/guide/");
/// ```
#[must_use]
pub fn slug_to_pathname(slug: &str) -> String {
    slug_to_param(slug).map_or_else(|| "/".to_owned(), |param| format!("/{param}/"))
}

/// Rewrite a slug's locale prefix for another locale.
///
/// `None` targets the root locale.
#[must_use]
pub fn localized_slug(slug: &str, locale: Option<&str>, i18n: &I18nConfig) -> String {
    let slug_locale = slug_to_locale(slug, i18n);
    if slug_locale == locale {
        return slug.to_owned();
    }
    let target = locale.unwrap_or_default();

    match slug_locale {
        Some(current) if current == slug => target.to_owned(),
        Some(current) => {
            let rest = &slug[current.len() + 1..];
            let rewritten = if target.is_empty() {
                rest.to_owned()
            } else {
                format!("{target}/{rest}")
            };
            strip_trailing_slash(&rewritten).to_owned()
        }
        None if slug.is_empty() => target.to_owned(),
        None => format!("{target}/{slug}"),
    }
}

/// Rewrite an entry id's locale prefix for another locale.
///
/// `None` targets the root locale.
#[must_use]
pub fn localized_id(id: &str, locale: Option<&str>, i18n: &I18nConfig) -> String {
    match (slug_to_locale(id, i18n), locale) {
        (Some(current), target) => match id.strip_prefix(current).and_then(|r| r.strip_prefix('/')) {
            Some(rest) => match target {
                Some(target) => format!("{target}/{rest}"),
                None => rest.to_owned(),
            },
            None => id.to_owned(),
        },
        (None, Some(target)) => format!("{target}/{id}"),
        (None, None) => id.to_owned(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use indexmap::IndexMap;
    use lectern_config::{DefaultLocale, LocaleConfig};
    use pretty_assertions::assert_eq;

    use super::*;

    fn locale(lang: &str, dir: TextDirection) -> LocaleConfig {
        LocaleConfig {
            label: lang.to_owned(),
            lang: lang.to_owned(),
            dir,
        }
    }

    /// Locales `root` (en, default), `fr`, and `ar` (rtl).
    pub(crate) fn multilingual() -> I18nConfig {
        let mut locales = IndexMap::new();
        locales.insert("root".to_owned(), locale("en", TextDirection::Ltr));
        locales.insert("fr".to_owned(), locale("fr", TextDirection::Ltr));
        locales.insert("ar".to_owned(), locale("ar", TextDirection::Rtl));
        I18nConfig {
            locales,
            default_locale: DefaultLocale {
                key: Some("root".to_owned()),
                label: "en".to_owned(),
                lang: "en".to_owned(),
                dir: TextDirection::Ltr,
            },
        }
    }

    /// Locales `en` (default) and `fr`, no root locale.
    pub(crate) fn prefixed() -> I18nConfig {
        let mut locales = IndexMap::new();
        locales.insert("en".to_owned(), locale("en-US", TextDirection::Ltr));
        locales.insert("fr".to_owned(), locale("fr", TextDirection::Ltr));
        I18nConfig {
            locales,
            default_locale: DefaultLocale {
                key: Some("en".to_owned()),
                label: "en-US".to_owned(),
                lang: "en-US".to_owned(),
                dir: TextDirection::Ltr,
            },
        }
    }

    #[test]
    fn test_normalize_index_slug() {
        assert_eq!(normalize_index_slug("index"), "");
        assert_eq!(normalize_index_slug(""), "");
        assert_eq!(normalize_index_slug("guide"), "guide");
        assert_eq!(normalize_index_slug("guide/index"), "guide/index");
    }

    #[test]
    fn test_normalize_index_slug_is_idempotent() {
        for slug in ["index", "", "guide", "fr", "fr/index"] {
            let once = normalize_index_slug(slug);
            assert_eq!(normalize_index_slug(once), once);
        }
    }

    #[test]
    fn test_slug_to_locale() {
        let i18n = multilingual();

        assert_eq!(slug_to_locale("fr/guide", &i18n), Some("fr"));
        assert_eq!(slug_to_locale("fr", &i18n), Some("fr"));
        assert_eq!(slug_to_locale("guide", &i18n), None);
        assert_eq!(slug_to_locale("root/guide", &i18n), None);
        assert_eq!(slug_to_locale("", &i18n), None);
        assert_eq!(slug_to_locale("french/guide", &i18n), None);
    }

    #[test]
    fn test_slug_to_locale_data() {
        let i18n = multilingual();

        assert_eq!(
            slug_to_locale_data("ar/guide", &i18n),
            LocaleData {
                lang: "ar".to_owned(),
                locale: Some("ar".to_owned()),
                dir: TextDirection::Rtl,
            }
        );
        assert_eq!(
            slug_to_locale_data("guide", &i18n),
            LocaleData {
                lang: "en".to_owned(),
                locale: None,
                dir: TextDirection::Ltr,
            }
        );
    }

    #[test]
    fn test_locale_to_lang_without_root_uses_default() {
        let i18n = prefixed();

        assert_eq!(locale_to_lang(None, &i18n), "en-US");
        assert_eq!(locale_to_lang(Some("fr"), &i18n), "fr");
        assert_eq!(locale_to_lang(Some("de"), &i18n), "en-US");
    }

    #[test]
    fn test_monolingual_defaults() {
        let i18n = I18nConfig::default();

        assert_eq!(slug_to_locale_data("guide", &i18n).lang, "en");
        assert_eq!(locale_to_dir(None, &i18n), TextDirection::Ltr);
    }

    #[test]
    fn test_slug_to_param_and_pathname() {
        assert_eq!(slug_to_param("/"), None);
        assert_eq!(slug_to_param("index"), Some("index"));
        assert_eq!(slug_to_pathname("fr"), "/fr/");
    }

    #[test]
    fn test_localized_slug_root_to_prefixed() {
        let i18n = multilingual();

        assert_eq!(localized_slug("guide", Some("fr"), &i18n), "fr/guide");
        assert_eq!(localized_slug("", Some("fr"), &i18n), "fr");
        assert_eq!(localized_slug("guide", None, &i18n), "guide");
    }

    #[test]
    fn test_localized_slug_prefixed_to_other() {
        let i18n = multilingual();

        assert_eq!(localized_slug("fr/guide", Some("ar"), &i18n), "ar/guide");
        assert_eq!(localized_slug("fr/guide", None, &i18n), "guide");
        assert_eq!(localized_slug("fr", None, &i18n), "");
        assert_eq!(localized_slug("fr", Some("ar"), &i18n), "ar");
        assert_eq!(localized_slug("fr/guide", Some("fr"), &i18n), "fr/guide");
    }

    #[test]
    fn test_localized_slug_between_prefixed_locales() {
        let i18n = prefixed();

        assert_eq!(localized_slug("en/guide", Some("fr"), &i18n), "fr/guide");
        assert_eq!(localized_slug("en", Some("fr"), &i18n), "fr");
    }

    #[test]
    fn test_localized_id() {
        let i18n = multilingual();

        assert_eq!(localized_id("guide.md", Some("fr"), &i18n), "fr/guide.md");
        assert_eq!(localized_id("fr/guide.md", Some("ar"), &i18n), "ar/guide.md");
        assert_eq!(localized_id("fr/guide.md", None, &i18n), "guide.md");
        assert_eq!(localized_id("guide.md", None, &i18n), "guide.md");
        assert_eq!(localized_id("fr", Some("ar"), &i18n), "fr");
    }
}

//! Localized UI strings.
//!
//! Built-in English strings are overlaid with `[translations.<lang>]` from
//! the config. A language resolves through its base language (`pt-BR` ->
//! `pt`) to English; an unknown key resolves to itself.

use std::collections::BTreeMap;

use serde::Serialize;

const FALLBACK_LANG: &str = "en";

const BUILT_IN: &[(&str, &str)] = &[
    ("skipLink.label", "Skip to content"),
    ("search.label", "Search"),
    ("search.ctrlKey", "Ctrl"),
    ("search.cancelLabel", "Cancel"),
    ("themeSelect.accessibleLabel", "Select theme"),
    ("themeSelect.dark", "Dark"),
    ("themeSelect.light", "Light"),
    ("themeSelect.auto", "Auto"),
    ("languageSelect.accessibleLabel", "Select language"),
    ("menuButton.accessibleLabel", "Menu"),
    ("sidebarNav.accessibleLabel", "Main"),
    ("tableOfContents.onThisPage", "On this page"),
    ("tableOfContents.overview", "Overview"),
    (
        "i18n.untranslatedContent",
        "This content is not available in your language yet.",
    ),
    ("page.editLink", "Edit page"),
    ("page.lastUpdated", "Last updated:"),
    ("page.previousLink", "Previous"),
    ("page.nextLink", "Next"),
    ("404.text", "Page not found. Check the URL or try using the search bar."),
    ("aside.note", "Note"),
    ("aside.tip", "Tip"),
    ("aside.caution", "Caution"),
    ("aside.danger", "Danger"),
];

/// UI strings for one language.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    /// String for `key`, or the key itself when there is none.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.0.get(key).map_or(key, String::as_str)
    }

    /// All strings, by key.
    #[must_use]
    pub fn all(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

/// Translation store: built-in strings plus user overrides.
#[derive(Clone, Debug, Default)]
pub struct Translations {
    overrides: BTreeMap<String, BTreeMap<String, String>>,
}

impl Translations {
    /// Store with user overrides keyed by language tag.
    #[must_use]
    pub fn new(overrides: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { overrides }
    }

    /// Resolve every string for `lang`.
    #[must_use]
    pub fn labels(&self, lang: &str) -> Labels {
        let mut labels: BTreeMap<String, String> = BUILT_IN
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();

        for tag in lookup_chain(lang).iter().rev() {
            if let Some(strings) = self.overrides.get(tag) {
                labels.extend(strings.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }

        Labels(labels)
    }
}

/// Language tags to consult, most specific first, ending with English.
fn lookup_chain(lang: &str) -> Vec<String> {
    let mut chain = vec![lang.to_owned()];
    if let Some((base, _)) = lang.split_once('-') {
        chain.push(base.to_owned());
    }
    if !chain.iter().any(|tag| tag == FALLBACK_LANG) {
        chain.push(FALLBACK_LANG.to_owned());
    }
    chain
}

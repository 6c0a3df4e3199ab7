//! Configuration management for Lectern.
//!
//! Parses `lectern.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Raw values are deserialized first, then resolved into the forms the
//! routing layer consumes: absolute project paths, a normalized locale map
//! with a designated default locale, and an optional table-of-contents
//! setting.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `base`
//! - `edit_link.base_url`

mod expand;
mod sidebar;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

pub use sidebar::{
    AutogenerateConfig, SidebarAutogenerate, SidebarGroup, SidebarItem, SidebarLink, SidebarPage,
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lectern.toml";

/// Locale key designating the unprefixed locale.
pub const ROOT_LOCALE: &str = "root";

/// Smallest and largest heading depth a table of contents may include.
const HEADING_LEVELS: std::ops::RangeInclusive<u8> = 1..=6;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site title.
    pub title: String,
    /// Base path the site is served under (e.g. `/docs`).
    pub base: String,
    /// Content collections, primary first. The primary collection's routes
    /// are unprefixed; every other collection's routes are prefixed with its name.
    pub collections: Vec<String>,
    /// Show previous/next links derived from the sidebar.
    pub pagination: bool,
    /// Resolve first-published and last-updated dates from git history.
    pub publication_dates: bool,
    /// Edit link configuration.
    pub edit_link: EditLinkConfig,
    /// Sidebar navigation tree. `None` means no sidebar was configured.
    pub sidebar: Option<Vec<SidebarItem>>,
    /// UI string overrides keyed by language tag, then by string key.
    pub translations: BTreeMap<String, BTreeMap<String, String>>,

    default_locale: Option<String>,
    locales: IndexMap<String, LocaleConfigRaw>,
    table_of_contents: TocSetting,
    project: ProjectConfigRaw,

    /// Resolved locale configuration (set after loading).
    #[serde(skip)]
    pub i18n: I18nConfig,
    /// Resolved site-wide table of contents setting (set after loading).
    #[serde(skip)]
    pub toc: Option<TocConfig>,
    /// Resolved project paths (set after loading).
    #[serde(skip)]
    pub project_resolved: ProjectConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Edit link configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditLinkConfig {
    /// Base URL that source paths are appended to (e.g. a repository edit URL).
    pub base_url: Option<String>,
}

/// Text direction of a locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Raw locale entry as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocaleConfigRaw {
    label: Option<String>,
    lang: Option<String>,
    dir: Option<TextDirection>,
}

/// Resolved locale settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Human-readable locale name.
    pub label: String,
    /// BCP-47 language tag.
    pub lang: String,
    /// Text direction.
    pub dir: TextDirection,
}

/// The locale unprefixed or untranslated content is authored in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultLocale {
    /// Key in the locale map (`root` or a prefix). `None` when no locales are configured.
    pub key: Option<String>,
    /// Human-readable locale name.
    pub label: String,
    /// BCP-47 language tag.
    pub lang: String,
    /// Text direction.
    pub dir: TextDirection,
}

impl DefaultLocale {
    /// Slug prefix of the default locale, `None` for the root locale.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| *key != ROOT_LOCALE)
    }
}

impl Default for DefaultLocale {
    fn default() -> Self {
        Self {
            key: None,
            label: "English".to_owned(),
            lang: "en".to_owned(),
            dir: TextDirection::Ltr,
        }
    }
}

/// Resolved locale map.
#[derive(Clone, Debug, Default)]
pub struct I18nConfig {
    /// Locales in declaration order, keyed by slug prefix or `root`.
    pub locales: IndexMap<String, LocaleConfig>,
    /// Default locale.
    pub default_locale: DefaultLocale,
}

impl I18nConfig {
    /// True when more than one locale is configured.
    #[must_use]
    pub fn is_multilingual(&self) -> bool {
        self.locales.len() > 1
    }

    /// True when a `root` locale is configured.
    #[must_use]
    pub fn has_root(&self) -> bool {
        self.locales.contains_key(ROOT_LOCALE)
    }

    /// Look up a locale by key.
    #[must_use]
    pub fn locale(&self, key: &str) -> Option<&LocaleConfig> {
        self.locales.get(key)
    }

    /// Prefixed locale keys (every key except `root`).
    pub fn prefixed_keys(&self) -> impl Iterator<Item = &str> {
        self.locales
            .keys()
            .map(String::as_str)
            .filter(|key| *key != ROOT_LOCALE)
    }
}

/// Table of contents setting as written in TOML: a flag or explicit levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum TocSetting {
    Enabled(bool),
    Levels(TocLevels),
}

impl Default for TocSetting {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct TocLevels {
    min_heading_level: u8,
    max_heading_level: u8,
}

impl Default for TocLevels {
    fn default() -> Self {
        Self {
            min_heading_level: 2,
            max_heading_level: 3,
        }
    }
}

/// Resolved table of contents heading range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocConfig {
    /// Shallowest heading depth included.
    pub min_heading_level: u8,
    /// Deepest heading depth included.
    pub max_heading_level: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        let levels = TocLevels::default();
        Self {
            min_heading_level: levels.min_heading_level,
            max_heading_level: levels.max_heading_level,
        }
    }
}

/// Raw project paths as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectConfigRaw {
    root: Option<String>,
    src_dir: Option<String>,
}

/// Resolved project paths.
#[derive(Debug, Default)]
pub struct ProjectConfig {
    /// Project root directory.
    pub root: PathBuf,
    /// Source directory, relative to `root` (e.g. `src`).
    pub src_dir: PathBuf,
}

impl ProjectConfig {
    /// Directory holding a collection's source files.
    #[must_use]
    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(&self.src_dir).join("content").join(collection)
    }

    /// Source directory relative to the project root, with `/` separators
    /// and a trailing slash (`src/`), or empty when sources live at the root.
    #[must_use]
    pub fn relative_src_dir(&self) -> String {
        let parts: Vec<_> = self
            .src_dir
            .components()
            .filter_map(|c| match c {
                std::path::Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            String::new()
        } else {
            format!("{}/", parts.join("/"))
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`edit_link.base_url`").
        field: String,
        /// Error message (e.g., "${`EDIT_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lectern.toml` in current directory and parents,
    /// falling back to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the loaded values are invalid.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default_with_cwd())
        }
    }

    /// Parse and resolve configuration from a TOML string.
    ///
    /// Relative paths resolve against `base_dir`. Used by hosts that embed
    /// the configuration instead of shipping a `lectern.toml`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, env expansion, or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve(base_dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_from(&std::env::current_dir().ok()?)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            title: String::new(),
            base: "/".to_owned(),
            collections: vec!["docs".to_owned()],
            pagination: true,
            publication_dates: false,
            edit_link: EditLinkConfig::default(),
            sidebar: None,
            translations: BTreeMap::new(),
            default_locale: None,
            locales: IndexMap::new(),
            table_of_contents: TocSetting::default(),
            project: ProjectConfigRaw::default(),
            i18n: I18nConfig::default(),
            toc: Some(TocConfig::default()),
            project_resolved: ProjectConfig {
                root: base.to_path_buf(),
                src_dir: PathBuf::from("src"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_collections()?;
        self.validate_locales()?;
        self.validate_toc()?;

        if let Some(ref base_url) = self.edit_link.base_url {
            require_non_empty(base_url, "edit_link.base_url")?;
            require_http_url(base_url, "edit_link.base_url")?;
        }

        Ok(())
    }

    fn validate_collections(&self) -> Result<(), ConfigError> {
        if self.collections.is_empty() {
            return Err(ConfigError::Validation(
                "collections must list at least one collection".to_owned(),
            ));
        }
        for (i, name) in self.collections.iter().enumerate() {
            require_non_empty(name, "collections")?;
            if self.collections[..i].contains(name) {
                return Err(ConfigError::Validation(format!(
                    "collection \"{name}\" is listed twice"
                )));
            }
        }
        Ok(())
    }

    fn validate_locales(&self) -> Result<(), ConfigError> {
        for key in self.i18n.locales.keys() {
            require_non_empty(key, "locales")?;
            if key.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "locale key \"{key}\" cannot contain '/'"
                )));
            }
        }
        Ok(())
    }

    fn validate_toc(&self) -> Result<(), ConfigError> {
        let Some(ref toc) = self.toc else {
            return Ok(());
        };
        for (level, field) in [
            (toc.min_heading_level, "table_of_contents.min_heading_level"),
            (toc.max_heading_level, "table_of_contents.max_heading_level"),
        ] {
            if !HEADING_LEVELS.contains(&level) {
                return Err(ConfigError::Validation(format!(
                    "{field} must be between 1 and 6"
                )));
            }
        }
        if toc.min_heading_level > toc.max_heading_level {
            return Err(ConfigError::Validation(
                "table_of_contents.min_heading_level cannot exceed max_heading_level".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.base = expand::expand_env(&self.base, "base")?;

        if let Some(ref url) = self.edit_link.base_url {
            self.edit_link.base_url = Some(expand::expand_env(url, "edit_link.base_url")?);
        }

        Ok(())
    }

    /// Resolve raw values: project paths, locales, and the ToC setting.
    fn resolve(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let root = match self.project.root {
            Some(ref root) => config_dir.join(root),
            None => config_dir.to_path_buf(),
        };
        self.project_resolved = ProjectConfig {
            root,
            src_dir: PathBuf::from(self.project.src_dir.as_deref().unwrap_or("src")),
        };

        self.toc = match self.table_of_contents {
            TocSetting::Enabled(false) => None,
            TocSetting::Enabled(true) => Some(TocConfig::default()),
            TocSetting::Levels(levels) => Some(TocConfig {
                min_heading_level: levels.min_heading_level,
                max_heading_level: levels.max_heading_level,
            }),
        };

        self.i18n = self.resolve_i18n()?;
        Ok(())
    }

    fn resolve_i18n(&self) -> Result<I18nConfig, ConfigError> {
        if self.locales.is_empty() {
            if let Some(ref key) = self.default_locale {
                return Err(ConfigError::Validation(format!(
                    "default_locale \"{key}\" requires a [locales] table"
                )));
            }
            return Ok(I18nConfig::default());
        }

        let locales: IndexMap<String, LocaleConfig> = self
            .locales
            .iter()
            .map(|(key, raw)| {
                let lang = raw.lang.clone().unwrap_or_else(|| {
                    if key == ROOT_LOCALE {
                        "en".to_owned()
                    } else {
                        key.clone()
                    }
                });
                let locale = LocaleConfig {
                    label: raw.label.clone().unwrap_or_else(|| lang.clone()),
                    lang,
                    dir: raw.dir.unwrap_or_default(),
                };
                (key.clone(), locale)
            })
            .collect();

        let default_key = match self.default_locale {
            Some(ref key) if locales.contains_key(key) => key.clone(),
            Some(ref key) => {
                return Err(ConfigError::Validation(format!(
                    "default_locale \"{key}\" is not a configured locale"
                )));
            }
            None if locales.contains_key(ROOT_LOCALE) => ROOT_LOCALE.to_owned(),
            None => locales
                .keys()
                .next()
                .cloned()
                .unwrap_or_else(|| ROOT_LOCALE.to_owned()),
        };

        let default_locale = locales
            .get(&default_key)
            .map(|locale| DefaultLocale {
                key: Some(default_key.clone()),
                label: locale.label.clone(),
                lang: locale.lang.clone(),
                dir: locale.dir,
            })
            .unwrap_or_default();

        Ok(I18nConfig {
            locales,
            default_locale,
        })
    }
}

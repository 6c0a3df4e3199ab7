//! Route table construction and page data resolution.
//!
//! [`DocsSite`] is built once per process from a [`Config`] and a
//! [`ContentSource`]. Building runs the whole route pipeline:
//!
//! 1. Load every collection and resolve entry dates
//! 2. Create one route per entry
//! 3. Add fallback routes for locales missing a translation
//! 4. Apply the all-routes hook and validate the result
//! 5. Index routes by URL parameter and derive static paths
//!
//! After that the site is read-only apart from its memo cache, and
//! [`DocsSite::generate_route_data`] may be called from many threads.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lectern_config::Config;
//! use lectern_routes::{DocsSite, PageProps};
//!
//! let config = Arc::new(Config::load(None)?);
//! let site = DocsSite::builder(config, content).build()?;
//!
//! let route = site.route_by_slug_param(Some("guides/setup")).unwrap();
//! let url = url::Url::parse("https://example.com/guides/setup/")?;
//! let data = site.generate_route_data(&PageProps::new(route.clone()), &url)?;
//! ```

use std::sync::Arc;

use lectern_cache::{MemoBucket, MemoCache};
use lectern_config::Config;
use lectern_content::{ContentSource, Template};
use lectern_vcs::{CommitDateSource, GitCommitDates};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::entries::{DocsEntry, load_docs_entries};
use crate::error::{BuildError, RouteDataError};
use crate::hooks::Hooks;
use crate::index::{RouteIndex, StaticPath, static_paths};
use crate::navigation::{
    SidebarContext, SidebarEntry, build_sidebar, mark_current, prev_next_links, validate_sidebar,
};
use crate::route_data::{PageProps, RouteData, edit_url, merge_frontmatter, validate_route_data};
use crate::routing::{Route, fallback_routes, filter_by_locale, validate_routes};
use crate::slugs::{LocaleData, locale_to_lang, slug_to_locale_data};
use crate::toc::resolve_toc;
use crate::translations::{Labels, Translations};

/// Builder for [`DocsSite`].
pub struct DocsSiteBuilder {
    config: Arc<Config>,
    content: Arc<dyn ContentSource>,
    commit_dates: Option<Arc<dyn CommitDateSource>>,
    hooks: Hooks,
}

impl DocsSiteBuilder {
    /// Use a specific commit date source instead of the `git` CLI.
    #[must_use]
    pub fn commit_dates(mut self, commit_dates: Arc<dyn CommitDateSource>) -> Self {
        self.commit_dates = Some(commit_dates);
        self
    }

    /// Register plugin hooks.
    #[must_use]
    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Build the route table.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if a collection fails to load, commit history
    /// yields a malformed date, the all-routes or route hook fails, or the
    /// final table or sidebar config is inconsistent.
    pub fn build(self) -> Result<DocsSite, BuildError> {
        let Self {
            config,
            content,
            commit_dates,
            hooks,
        } = self;
        let commit_dates = commit_dates.unwrap_or_else(|| Arc::new(GitCommitDates::new()));

        let memo = MemoCache::new();
        let locale_data = memo.bucket::<LocaleData>("locale_data");
        let labels = memo.bucket::<Arc<Labels>>("labels");
        let sidebars = memo.bucket::<Arc<Vec<SidebarEntry>>>("sidebar");

        let entries = load_docs_entries(&config, content.as_ref(), commit_dates.as_ref())?;
        let slug_locale =
            |slug: &str| locale_data.get_or_compute(&[slug], || slug_to_locale_data(slug, &config.i18n));

        let mut routes: Vec<Route> = entries
            .into_iter()
            .map(|entry| {
                let data = slug_locale(&entry.slug);
                Route::new(entry, data)
            })
            .collect();
        let fallbacks = fallback_routes(&routes, &config.i18n, slug_locale);
        tracing::info!(
            routes = routes.len(),
            fallbacks = fallbacks.len(),
            locales = config.i18n.locales.len(),
            "Built route table"
        );
        routes.extend(fallbacks);

        let routes = hooks.run_all_routes(routes)?;
        validate_routes(&routes)?;
        if let Some(ref items) = config.sidebar {
            validate_sidebar(items, &routes, &config.i18n)?;
        }

        let index = RouteIndex::new(&routes);
        let paths = static_paths(&routes, &hooks)?;
        tracing::debug!(routes = routes.len(), paths = paths.len(), "Indexed routes");

        Ok(DocsSite {
            translations: Translations::new(config.translations.clone()),
            config,
            hooks,
            routes,
            index,
            paths,
            memo,
            locale_data,
            labels,
            sidebars,
        })
    }
}

/// A built documentation site: its route table and page data resolution.
///
/// # Thread Safety
///
/// The route table, index and static paths are immutable after
/// [`DocsSiteBuilder::build`]. Memoized values live behind `RwLock`s inside
/// the site's own [`MemoCache`], so concurrent page renders need no
/// external locking.
pub struct DocsSite {
    config: Arc<Config>,
    hooks: Hooks,
    translations: Translations,
    routes: Vec<Route>,
    index: RouteIndex,
    paths: Vec<StaticPath>,
    memo: MemoCache,
    locale_data: Arc<MemoBucket<LocaleData>>,
    labels: Arc<MemoBucket<Arc<Labels>>>,
    sidebars: Arc<MemoBucket<Arc<Vec<SidebarEntry>>>>,
}

impl DocsSite {
    /// Start building a site.
    #[must_use]
    pub fn builder(config: Arc<Config>, content: Arc<dyn ContentSource>) -> DocsSiteBuilder {
        DocsSiteBuilder {
            config,
            content,
            commit_dates: None,
            hooks: Hooks::default(),
        }
    }

    /// Site configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every route, in table order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Pages to generate, in table order.
    #[must_use]
    pub fn paths(&self) -> &[StaticPath] {
        &self.paths
    }

    /// Route serving a URL parameter. `None` or `""` is the root page.
    #[must_use]
    pub fn route_by_slug_param(&self, param: Option<&str>) -> Option<&Route> {
        self.index.get(param).and_then(|i| self.routes.get(i))
    }

    /// Routes whose entry comes from `collection`, in table order.
    #[must_use]
    pub fn collection_routes(&self, collection: &str) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|route| route.entry.collection == collection)
            .collect()
    }

    /// Routes served in `locale` (`None` for the root locale), in table order.
    #[must_use]
    pub fn locale_routes(&self, locale: Option<&str>) -> Vec<&Route> {
        filter_by_locale(&self.routes, locale, &self.config.i18n)
    }

    /// Language, locale and direction of a slug.
    #[must_use]
    pub fn slug_to_locale_data(&self, slug: &str) -> LocaleData {
        self.locale_data
            .get_or_compute(&[slug], || slug_to_locale_data(slug, &self.config.i18n))
    }

    /// UI strings for a language.
    #[must_use]
    pub fn labels(&self, lang: &str) -> Arc<Labels> {
        self.labels
            .get_or_compute(&[lang], || Arc::new(self.translations.labels(lang)))
    }

    /// Drop every memoized value.
    pub fn clear_memoized(&self) {
        self.memo.clear();
    }

    /// Assemble the data a template needs to render one page.
    ///
    /// # Errors
    ///
    /// Returns [`RouteDataError`] if a hook fails, merged frontmatter is
    /// invalid, the edit URL does not parse, or the route-data hook adds a
    /// reserved field.
    pub fn generate_route_data(
        &self,
        props: &PageProps,
        url: &Url,
    ) -> Result<RouteData, RouteDataError> {
        let pathname = percent_decode_str(url.path()).decode_utf8_lossy();
        let sidebar = self.sidebar_for(&pathname, props.route.locale.as_deref());
        let sidebar = self.hooks.run_sidebar(props, sidebar)?;

        let data = merge_frontmatter(&props.route.entry, &props.remark_plugin_frontmatter)?;
        let has_sidebar = data.template() != Template::Splash;
        let pagination = prev_next_links(
            &sidebar,
            self.config.pagination,
            data.prev.as_ref(),
            data.next.as_ref(),
        );
        let labels = self.labels(&props.route.lang);
        let toc = resolve_toc(
            &data,
            self.config.toc.as_ref(),
            &props.headings,
            labels.get("tableOfContents.overview"),
        );
        let edit_url = edit_url(&self.config, &props.route, &data)?;

        let mut route = props.route.clone();
        if data != route.entry.data {
            route.entry = Arc::new(DocsEntry {
                data,
                ..DocsEntry::clone(&route.entry)
            });
        }

        let route_data = self.hooks.run_route_data(RouteData {
            route,
            headings: props.headings.clone(),
            sidebar,
            has_sidebar,
            pagination,
            toc,
            edit_url,
            labels,
        })?;
        validate_route_data(&route_data)?;
        Ok(route_data)
    }

    /// Sidebar of a locale with the entry for `pathname` marked current.
    ///
    /// Empty when no sidebar is configured.
    fn sidebar_for(&self, pathname: &str, locale: Option<&str>) -> Vec<SidebarEntry> {
        let Some(ref items) = self.config.sidebar else {
            return Vec::new();
        };

        let skeleton = self
            .sidebars
            .get_or_compute(&[locale.unwrap_or_default()], || {
                let lang = locale_to_lang(locale, &self.config.i18n);
                let ctx = SidebarContext {
                    i18n: &self.config.i18n,
                    base: &self.config.base,
                    locale,
                    lang: &lang,
                    routes: self.locale_routes(locale),
                };
                Arc::new(build_sidebar(items, &ctx))
            });

        let mut sidebar = Vec::clone(&skeleton);
        mark_current(&mut sidebar, pathname);
        sidebar
    }
}

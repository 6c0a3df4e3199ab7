//! Extension points for plugins.
//!
//! Four hooks let plugins rewrite what the site produces:
//!
//! | Hook | Runs | Unregistered |
//! |------|------|--------------|
//! | all-routes | once per build, after fallback routes are added | identity |
//! | route | per route, while deriving static paths | [`RouteHookOutcome::Keep`] |
//! | sidebar | per page, before route data is assembled | identity |
//! | route-data | per page, last step | identity |
//!
//! Hook errors are never swallowed: build-time failures abort the build,
//! page-time failures fail that page.
//!
//! # Example
//!
//! ```
//! use lectern_routes::{Hooks, define_all_routes_hook};
//!
//! let drop_drafts = define_all_routes_hook(|routes| {
//!     Ok(routes
//!         .into_iter()
//!         .filter(|route| !route.entry.data.extra.contains_key("draft"))
//!         .collect())
//! });
//! let hooks = Hooks::new().with_all_routes(drop_drafts);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{BuildError, RouteDataError};
use crate::navigation::SidebarEntry;
use crate::route_data::{PageProps, RouteData};
use crate::routing::Route;

/// Error returned by a hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Result returned by a hook.
pub type HookResult<T> = Result<T, HookError>;

/// Rewrites the complete route list.
pub type AllRoutesHook = Arc<dyn Fn(Vec<Route>) -> HookResult<Vec<Route>> + Send + Sync>;

/// Decides the fate of one route.
pub type RouteHook = Arc<dyn Fn(&Route) -> HookResult<RouteHookOutcome> + Send + Sync>;

/// Rewrites the sidebar of one page.
pub type SidebarHook =
    Arc<dyn Fn(&PageProps, Vec<SidebarEntry>) -> HookResult<Vec<SidebarEntry>> + Send + Sync>;

/// Rewrites the assembled data of one page.
pub type RouteDataHook = Arc<dyn Fn(RouteData) -> HookResult<RouteData> + Send + Sync>;

/// Result of the route hook.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteHookOutcome {
    /// Leave the route unchanged.
    Keep,
    /// Use this route instead.
    Replace(Route),
    /// Leave the route out of the static paths.
    Drop,
}

/// Hook names, for error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookKind {
    /// All-routes hook.
    AllRoutes,
    /// Route hook.
    Route,
    /// Sidebar hook.
    Sidebar,
    /// Route-data hook.
    RouteData,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AllRoutes => "all-routes",
            Self::Route => "route",
            Self::Sidebar => "sidebar",
            Self::RouteData => "route-data",
        })
    }
}

/// Register an all-routes hook. Returns its argument.
pub fn define_all_routes_hook<F>(hook: F) -> F
where
    F: Fn(Vec<Route>) -> HookResult<Vec<Route>> + Send + Sync + 'static,
{
    hook
}

/// Register a route hook. Returns its argument.
pub fn define_route_hook<F>(hook: F) -> F
where
    F: Fn(&Route) -> HookResult<RouteHookOutcome> + Send + Sync + 'static,
{
    hook
}

/// Register a sidebar hook. Returns its argument.
pub fn define_sidebar_hook<F>(hook: F) -> F
where
    F: Fn(&PageProps, Vec<SidebarEntry>) -> HookResult<Vec<SidebarEntry>> + Send + Sync + 'static,
{
    hook
}

/// Register a route-data hook. Returns its argument.
pub fn define_route_data_hook<F>(hook: F) -> F
where
    F: Fn(RouteData) -> HookResult<RouteData> + Send + Sync + 'static,
{
    hook
}

/// The hooks registered for a site.
#[derive(Clone, Default)]
pub struct Hooks {
    all_routes: Option<AllRoutesHook>,
    route: Option<RouteHook>,
    sidebar: Option<SidebarHook>,
    route_data: Option<RouteDataHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("all_routes", &self.all_routes.is_some())
            .field("route", &self.route.is_some())
            .field("sidebar", &self.sidebar.is_some())
            .field("route_data", &self.route_data.is_some())
            .finish()
    }
}

impl Hooks {
    /// No hooks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the all-routes hook.
    #[must_use]
    pub fn with_all_routes<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<Route>) -> HookResult<Vec<Route>> + Send + Sync + 'static,
    {
        self.all_routes = Some(Arc::new(hook));
        self
    }

    /// Set the route hook.
    #[must_use]
    pub fn with_route<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Route) -> HookResult<RouteHookOutcome> + Send + Sync + 'static,
    {
        self.route = Some(Arc::new(hook));
        self
    }

    /// Set the sidebar hook.
    #[must_use]
    pub fn with_sidebar<F>(mut self, hook: F) -> Self
    where
        F: Fn(&PageProps, Vec<SidebarEntry>) -> HookResult<Vec<SidebarEntry>>
            + Send
            + Sync
            + 'static,
    {
        self.sidebar = Some(Arc::new(hook));
        self
    }

    /// Set the route-data hook.
    #[must_use]
    pub fn with_route_data<F>(mut self, hook: F) -> Self
    where
        F: Fn(RouteData) -> HookResult<RouteData> + Send + Sync + 'static,
    {
        self.route_data = Some(Arc::new(hook));
        self
    }

    pub(crate) fn run_all_routes(&self, routes: Vec<Route>) -> Result<Vec<Route>, BuildError> {
        match self.all_routes {
            Some(ref hook) => hook(routes).map_err(|source| BuildError::Hook {
                kind: HookKind::AllRoutes,
                source,
            }),
            None => Ok(routes),
        }
    }

    pub(crate) fn run_route(&self, route: &Route) -> Result<RouteHookOutcome, BuildError> {
        match self.route {
            Some(ref hook) => hook(route).map_err(|source| BuildError::Hook {
                kind: HookKind::Route,
                source,
            }),
            None => Ok(RouteHookOutcome::Keep),
        }
    }

    pub(crate) fn run_sidebar(
        &self,
        props: &PageProps,
        sidebar: Vec<SidebarEntry>,
    ) -> Result<Vec<SidebarEntry>, RouteDataError> {
        match self.sidebar {
            Some(ref hook) => hook(props, sidebar).map_err(|source| RouteDataError::Hook {
                kind: HookKind::Sidebar,
                slug: props.route.slug.clone(),
                source,
            }),
            None => Ok(sidebar),
        }
    }

    pub(crate) fn run_route_data(&self, data: RouteData) -> Result<RouteData, RouteDataError> {
        match self.route_data {
            Some(ref hook) => {
                let slug = data.route.slug.clone();
                hook(data).map_err(|source| RouteDataError::Hook {
                    kind: HookKind::RouteData,
                    slug,
                    source,
                })
            }
            None => Ok(data),
        }
    }
}

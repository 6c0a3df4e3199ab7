//! Route lookup by URL parameter and static path derivation.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::BuildError;
use crate::hooks::{Hooks, RouteHookOutcome};
use crate::path::strip_trailing_slash;
use crate::routing::Route;
use crate::slugs::slug_to_param;

/// Index key: the root page, or a URL parameter.
///
/// The root page never collides with a page whose parameter is literally
/// `index`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RouteKey {
    /// Root page of the site.
    Index,
    /// Any other page.
    Param(String),
}

impl RouteKey {
    /// Key of a route slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        slug_to_param(slug).map_or(Self::Index, |param| Self::Param(param.to_owned()))
    }

    /// Key of a requested URL parameter.
    ///
    /// A single trailing `/` is ignored; an absent or empty parameter is the
    /// root page.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(strip_trailing_slash) {
            None | Some("") => Self::Index,
            Some(param) => Self::Param(param.to_owned()),
        }
    }
}

/// O(1) lookup from URL parameter to route position.
#[derive(Clone, Debug, Default)]
pub struct RouteIndex {
    positions: HashMap<RouteKey, usize>,
}

impl RouteIndex {
    /// Index a validated route table.
    #[must_use]
    pub fn new(routes: &[Route]) -> Self {
        let positions = routes
            .iter()
            .enumerate()
            .map(|(i, route)| (RouteKey::from_slug(&route.slug), i))
            .collect();
        Self { positions }
    }

    /// Position of the route serving `param`.
    #[must_use]
    pub fn get(&self, param: Option<&str>) -> Option<usize> {
        self.positions.get(&RouteKey::from_param(param)).copied()
    }

    /// Number of indexed routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if no routes are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Parameters of a static path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticPathParams {
    /// URL parameter; `None` for the root page.
    pub slug: Option<String>,
}

/// One page the host framework should generate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StaticPath {
    /// Route parameters.
    pub params: StaticPathParams,
    /// Route passed to the page.
    pub props: Route,
}

impl StaticPath {
    fn new(route: Route) -> Self {
        Self {
            params: StaticPathParams {
                slug: slug_to_param(&route.slug).map(str::to_owned),
            },
            props: route,
        }
    }
}

/// Derive static paths in table order, applying the route hook.
pub(crate) fn static_paths(routes: &[Route], hooks: &Hooks) -> Result<Vec<StaticPath>, BuildError> {
    let mut paths = Vec::with_capacity(routes.len());
    for route in routes {
        match hooks.run_route(route)? {
            RouteHookOutcome::Keep => paths.push(StaticPath::new(route.clone())),
            RouteHookOutcome::Replace(replacement) => paths.push(StaticPath::new(replacement)),
            RouteHookOutcome::Drop => {
                tracing::debug!(slug = %route.slug, "Route dropped by route hook");
            }
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::routing::tests::route;

    #[test]
    fn test_route_key_from_param() {
        assert_eq!(RouteKey::from_param(None), RouteKey::Index);
        assert_eq!(RouteKey::from_param(Some("")), RouteKey::Index);
        assert_eq!(RouteKey::from_param(Some("/")), RouteKey::Index);
        assert_eq!(
            RouteKey::from_param(Some("guide/")),
            RouteKey::Param("guide".to_owned())
        );
        assert_eq!(
            RouteKey::from_param(Some("index")),
            RouteKey::Param("index".to_owned())
        );
    }

    #[test]
    fn test_lookup_round_trips() {
        let routes = vec![route(""), route("guide"), route("fr/setup")];
        let index = RouteIndex::new(&routes);

        for (i, r) in routes.iter().enumerate() {
            let param = slug_to_param(&r.slug);
            assert_eq!(index.get(param), Some(i));
            let with_slash = param.map(|p| format!("{p}/"));
            assert_eq!(index.get(with_slash.as_deref()), Some(i));
        }
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_lookup_misses() {
        let index = RouteIndex::new(&[route("guide")]);

        assert_eq!(index.get(None), None);
        assert_eq!(index.get(Some("guide//")), None);
        assert_eq!(index.get(Some("index")), None);
    }

    #[test]
    fn test_static_paths_follow_table_order() {
        let routes = vec![route(""), route("guide")];

        let paths = static_paths(&routes, &Hooks::new()).unwrap();

        assert_eq!(paths[0].params.slug, None);
        assert_eq!(paths[1].params.slug.as_deref(), Some("guide"));
        assert_eq!(paths[1].props, routes[1]);
    }

    #[test]
    fn test_static_paths_apply_route_hook() {
        let routes = vec![route("a"), route("b"), route("c")];
        let hooks = Hooks::new().with_route(|route| {
            Ok(match route.slug.as_str() {
                "a" => RouteHookOutcome::Drop,
                "b" => RouteHookOutcome::Replace(route.clone().with_extension("seen", json!(true))),
                _ => RouteHookOutcome::Keep,
            })
        });

        let paths = static_paths(&routes, &hooks).unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].props.extensions["seen"], json!(true));
        assert_eq!(paths[1].props, routes[2]);
    }

    #[test]
    fn test_static_path_serialization() {
        let path = StaticPath::new(route(""));

        let value = serde_json::to_value(&path).unwrap();

        assert_eq!(value["params"], json!({ "slug": null }));
        assert_eq!(value["props"]["slug"], json!(""));
    }
}

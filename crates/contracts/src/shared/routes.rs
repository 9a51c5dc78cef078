//! Route definition tree.
//!
//! The same tree drives the sidebar menu, the breadcrumb, tab titles and
//! the authority check, so it lives in `contracts` and derives `PartialEq`
//! (the locale transformer memoizes on deep equality).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Path parameters captured by `:name` segments.
pub type PathParams = BTreeMap<String, String>;

fn default_closable() -> bool {
    true
}

/// One node of the route definition tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDef {
    pub path: String,
    /// Raw name token; routes without one never show up in menus or tabs.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub authority: Option<Vec<String>>,
    #[serde(default)]
    pub hide_in_menu: bool,
    #[serde(default = "default_closable")]
    pub closable: bool,
    #[serde(default)]
    pub routes: Vec<RouteDef>,
}

impl RouteDef {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            icon: None,
            authority: None,
            hide_in_menu: false,
            closable: true,
            routes: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn authority<I, S>(mut self, authority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authority = Some(authority.into_iter().map(Into::into).collect());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide_in_menu = true;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.closable = false;
        self
    }

    pub fn routes(mut self, routes: Vec<RouteDef>) -> Self {
        self.routes = routes;
        self
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Matches `pathname` against a route pattern.
///
/// Supported segments: literals, `:param` (exactly one non-empty segment)
/// and a trailing `*` (any remainder, including nothing). Trailing slashes
/// are ignored.
pub fn match_path(pattern: &str, pathname: &str) -> Option<PathParams> {
    let mut params = PathParams::new();
    let mut actual = segments(pathname);

    for expected in segments(pattern) {
        if expected == "*" {
            return Some(params);
        }
        let segment = actual.next()?;
        if let Some(param) = expected.strip_prefix(':') {
            params.insert(param.to_string(), segment.to_string());
        } else if expected != segment {
            return None;
        }
    }

    match actual.next() {
        Some(_) => None,
        None => Some(params),
    }
}

/// Chain of route definitions from a root to the deepest route matching
/// `pathname`. Empty when nothing matches.
///
/// Children are tried before their parent so `/admin/sub-page` resolves to
/// the nested route even though `/admin` is declared first.
pub fn route_chain<'a>(routes: &'a [RouteDef], pathname: &str) -> Vec<&'a RouteDef> {
    for route in routes {
        let nested = route_chain(&route.routes, pathname);
        if !nested.is_empty() {
            let mut chain = Vec::with_capacity(nested.len() + 1);
            chain.push(route);
            chain.extend(nested);
            return chain;
        }
        if match_path(&route.path, pathname).is_some() {
            return vec![route];
        }
    }
    Vec::new()
}

/// Authority required to open `pathname`: the innermost declaration along
/// the matching chain. `None` means the route is public (or unknown).
pub fn authority_for_path<'a>(routes: &'a [RouteDef], pathname: &str) -> Option<&'a [String]> {
    route_chain(routes, pathname)
        .into_iter()
        .rev()
        .find_map(|route| route.authority.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RouteDef> {
        vec![
            RouteDef::new("/welcome").name("welcome"),
            RouteDef::new("/admin")
                .name("admin")
                .authority(["admin"])
                .routes(vec![RouteDef::new("/admin/sub-page").name("sub-page")]),
            RouteDef::new("/list").name("list").routes(vec![
                RouteDef::new("/list/:id").name("detail").hidden(),
                RouteDef::new("/list/:id/audit")
                    .name("audit")
                    .hidden()
                    .authority(["auditor"]),
            ]),
        ]
    }

    #[test]
    fn test_match_literal_and_params() {
        assert!(match_path("/welcome", "/welcome").is_some());
        assert!(match_path("/welcome", "/welcome/").is_some());
        assert!(match_path("/welcome", "/admin").is_none());
        assert!(match_path("/list", "/list/3").is_none());

        let params = match_path("/list/:id", "/list/42").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert!(match_path("/list/:id", "/list").is_none());
    }

    #[test]
    fn test_match_wildcard() {
        assert!(match_path("/docs/*", "/docs").is_some());
        assert!(match_path("/docs/*", "/docs/a/b").is_some());
        assert!(match_path("/", "/").is_some());
    }

    #[test]
    fn test_route_chain_prefers_nested() {
        let routes = sample();
        let chain = route_chain(&routes, "/admin/sub-page");
        let paths: Vec<_> = chain.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/admin", "/admin/sub-page"]);

        let chain = route_chain(&routes, "/admin");
        assert_eq!(chain.len(), 1);
        assert!(route_chain(&routes, "/missing").is_empty());
    }

    #[test]
    fn test_authority_inherited_from_ancestor() {
        let routes = sample();
        assert_eq!(
            authority_for_path(&routes, "/admin/sub-page"),
            Some(&["admin".to_string()][..])
        );
        assert_eq!(authority_for_path(&routes, "/welcome"), None);
        assert_eq!(authority_for_path(&routes, "/list/7"), None);
        assert_eq!(
            authority_for_path(&routes, "/list/7/audit"),
            Some(&["auditor".to_string()][..])
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"path":"/welcome","name":"welcome","hideInMenu":true}"#;
        let route: RouteDef = serde_json::from_str(json).unwrap();
        assert!(route.hide_in_menu);
        assert!(route.closable);
        assert!(route.routes.is_empty());
        assert_eq!(route.authority, None);
    }
}

//! Static route table resolver
//!
//! A [`RouteTable`] is a ready-made [`Resolver`] for hosts that know their
//! routes up front (static sites, the CLI, tests). Patterns use the
//! file-based syntax: `about`, `[id]`, `[id?]`, `[...slug]`, `[[...slug]]`.
//!
//! ```
//! use rhtmx_breadcrumbs::{derive_breadcrumbs, RouteRecord, RouteTable};
//!
//! let table = RouteTable::new()
//!     .with_route(RouteRecord::new("/").with_name("index"))
//!     .with_route(RouteRecord::new("/docs/[...slug]").with_name("docs-slug"));
//!
//! let trail = derive_breadcrumbs("/docs/getting-started", &table).unwrap();
//! assert_eq!(trail.root().unwrap().label, "Home");
//! assert_eq!(trail.current().unwrap().label, "Getting Started");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::resolve::{Reachability, Resolver};

pub mod parser;
pub mod pattern;

pub use parser::{calculate_priority, parse_pattern, ParsedPattern};
pub use pattern::{classify_segment, PatternSegmentType};

/// A route as declared by the host
///
/// `name` and `title` are carried through to matches for the host's own use;
/// breadcrumb labels never read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Route pattern like "/docs/[...slug]"
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Reachability for RouteRecord {
    fn is_reachable(&self) -> bool {
        true
    }
}

impl RouteRecord {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            name: None,
            title: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A compiled route in a [`RouteTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// The declaration this route was compiled from
    pub record: RouteRecord,
    /// Compiled pattern like "/docs/*slug"
    pub pattern: String,
    /// Parameter names
    pub params: Vec<String>,
    /// Priority for matching (lower = higher priority)
    pub priority: usize,
}

impl Route {
    pub fn from_record(record: RouteRecord) -> Self {
        let parsed = parse_pattern(&record.pattern);
        let priority = calculate_priority(&parsed);

        Self {
            record,
            pattern: parsed.pattern,
            params: parsed.params,
            priority,
        }
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path, extracting parameters
    ///
    /// Walks pattern and path segments together, handling catch-all,
    /// optional, required and static segments.
    pub fn matches_with_options(
        &self,
        path: &str,
        case_insensitive: bool,
    ) -> Option<HashMap<String, String>> {
        let pattern_segments: Vec<&str> =
            self.pattern.split('/').filter(|s| !s.is_empty()).collect();
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match_segments(
            &pattern_segments,
            &path_segments,
            HashMap::new(),
            case_insensitive,
        )
    }
}

fn segment_eq(pattern: &str, segment: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        pattern.eq_ignore_ascii_case(segment)
    } else {
        pattern == segment
    }
}

fn match_segments(
    pattern: &[&str],
    path: &[&str],
    mut params: HashMap<String, String>,
    case_insensitive: bool,
) -> Option<HashMap<String, String>> {
    let Some((&pattern_seg, pattern_rest)) = pattern.split_first() else {
        return path.is_empty().then_some(params);
    };

    match pattern_seg.chars().next() {
        // Catch-all: *slug or *slug?
        Some('*') => {
            let (name, is_optional) = match pattern_seg[1..].strip_suffix('?') {
                Some(name) => (name, true),
                None => (&pattern_seg[1..], false),
            };

            // Longest capture first; whatever follows the catch-all must
            // still match the tail of the path.
            let min_taken = if is_optional { 0 } else { 1 };
            (min_taken..=path.len()).rev().find_map(|taken| {
                let (captured, path_rest) = path.split_at(taken);
                let mut candidate = params.clone();
                candidate.insert(name.to_string(), captured.join("/"));
                match_segments(pattern_rest, path_rest, candidate, case_insensitive)
            })
        }
        // Optional parameter: :id?
        Some(':') if pattern_seg.ends_with('?') => {
            let name = &pattern_seg[1..pattern_seg.len() - 1];

            if let Some((&segment, path_rest)) = path.split_first() {
                let should_consume = match pattern_rest.first() {
                    Some(next) if next.starts_with(':') || next.starts_with('*') => true,
                    Some(next) => !segment_eq(next, segment, case_insensitive),
                    None => true,
                };

                if should_consume {
                    let mut consumed = params.clone();
                    consumed.insert(name.to_string(), segment.to_string());
                    if let Some(found) =
                        match_segments(pattern_rest, path_rest, consumed, case_insensitive)
                    {
                        return Some(found);
                    }
                }
            }

            match_segments(pattern_rest, path, params, case_insensitive)
        }
        // Required parameter: :id
        Some(':') => {
            let (&segment, path_rest) = path.split_first()?;
            params.insert(pattern_seg[1..].to_string(), segment.to_string());
            match_segments(pattern_rest, path_rest, params, case_insensitive)
        }
        // Static segment
        _ => {
            let (&segment, path_rest) = path.split_first()?;
            if !segment_eq(pattern_seg, segment, case_insensitive) {
                return None;
            }
            match_segments(pattern_rest, path_rest, params, case_insensitive)
        }
    }
}

/// Result of resolving a path against a [`RouteTable`]
///
/// A match with no `matched` records claims nothing, the way host routers
/// report "no route" without returning `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Every route matching the path, highest priority first
    pub matched: Vec<RouteRecord>,
    /// Parameters extracted by the highest priority route
    pub params: HashMap<String, String>,
}

impl Reachability for RouteMatch {
    fn is_reachable(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// An ordered set of routes that resolves paths
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    case_insensitive: bool,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from route declarations
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RouteRecord>,
    {
        records
            .into_iter()
            .fold(Self::new(), |table, record| table.with_route(record))
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_route(mut self, record: RouteRecord) -> Self {
        self.add_route(record);
        self
    }

    /// Adds a route, keeping routes ordered by priority
    ///
    /// Routes with equal priority keep their insertion order.
    pub fn add_route(&mut self, record: RouteRecord) {
        let route = Route::from_record(record);
        let index = self
            .routes
            .partition_point(|existing| existing.priority <= route.priority);
        self.routes.insert(index, route);
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Finds every route matching `path`, highest priority first
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let mut hits = self.routes.iter().filter_map(|route| {
            route
                .matches_with_options(path, self.case_insensitive)
                .map(|params| (route, params))
        });

        let (first, params) = hits.next()?;
        let matched = std::iter::once(first.record.clone())
            .chain(hits.map(|(route, _)| route.record.clone()))
            .collect();

        Some(RouteMatch { matched, params })
    }
}

impl Resolver for RouteTable {
    type Match = RouteMatch;

    fn resolve(&self, path: &str) -> Result<Option<RouteMatch>, ResolveError> {
        Ok(self.match_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs_table() -> RouteTable {
        RouteTable::from_records([
            RouteRecord::new("/").with_name("index").with_title("Home"),
            RouteRecord::new("/docs/[...slug]").with_name("docs-slug"),
            RouteRecord::new("/docs/intro").with_name("docs-intro"),
            RouteRecord::new("/users/[id]").with_name("user"),
        ])
    }

    #[test]
    fn test_routes_sorted_by_priority() {
        let table = docs_table();
        let patterns: Vec<&str> = table.routes().iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["/", "/docs/intro", "/users/:id", "/docs/*slug"]);
    }

    #[test]
    fn test_match_static_before_catch_all() {
        let table = docs_table();
        let found = table.match_path("/docs/intro").unwrap();
        let names: Vec<Option<&str>> = found.matched.iter().map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec![Some("docs-intro"), Some("docs-slug")]);
        assert!(found.params.is_empty());
    }

    #[test]
    fn test_match_catch_all_params() {
        let table = docs_table();
        let found = table.match_path("/docs/seo-utils/getting-started").unwrap();
        assert_eq!(found.matched.len(), 1);
        assert_eq!(
            found.params.get("slug"),
            Some(&"seo-utils/getting-started".to_string())
        );
    }

    #[test]
    fn test_required_catch_all_needs_a_segment() {
        let table = docs_table();
        assert!(table.match_path("/docs").is_none());
    }

    #[test]
    fn test_optional_catch_all_matches_base() {
        let table = RouteTable::new().with_route(RouteRecord::new("/docs/[[...slug]]"));
        assert!(table.match_path("/docs").is_some());
        assert!(table.match_path("/docs/a/b").is_some());
    }

    #[test]
    fn test_catch_all_respects_trailing_segments() {
        let route = Route::from_record(RouteRecord::new("/docs/[...slug]/edit"));
        assert_eq!(route.matches("/docs/a"), None);
        assert_eq!(route.matches("/docs/edit"), None);
        assert_eq!(
            route.matches("/docs/a/b/edit").and_then(|p| p.get("slug").cloned()),
            Some("a/b".to_string())
        );
    }

    #[test]
    fn test_optional_catch_all_with_suffix_does_not_claim_root() {
        let table = RouteTable::from_records([RouteRecord::new("/[[...slug]]/edit")]);
        assert_eq!(table.match_path("/"), None);
        assert_eq!(
            table.match_path("/edit").map(|found| found.params),
            Some(HashMap::from([("slug".to_string(), String::new())]))
        );
        assert!(table.match_path("/posts/1/edit").is_some());
    }

    #[test]
    fn test_empty_route_match_is_unreachable() {
        let empty = RouteMatch {
            matched: vec![],
            params: HashMap::new(),
        };
        assert!(!empty.is_reachable());
        assert!(docs_table().match_path("/").unwrap().is_reachable());
    }

    #[test]
    fn test_optional_param() {
        let route = Route::from_record(RouteRecord::new("/posts/[id?]"));
        assert_eq!(route.matches("/posts"), Some(HashMap::new()));
        assert_eq!(
            route.matches("/posts/42").and_then(|p| p.get("id").cloned()),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_optional_param_before_static() {
        let route = Route::from_record(RouteRecord::new("/shop/[category?]/items"));
        assert!(route.matches("/shop/items").is_some());
        assert_eq!(
            route
                .matches("/shop/books/items")
                .and_then(|p| p.get("category").cloned()),
            Some("books".to_string())
        );
    }

    #[test]
    fn test_required_param() {
        let table = docs_table();
        let found = table.match_path("/users/123").unwrap();
        assert_eq!(found.params.get("id"), Some(&"123".to_string()));
        assert!(table.match_path("/users").is_none());
        assert!(table.match_path("/users/123/edit").is_none());
    }

    #[test]
    fn test_case_insensitive() {
        let table = docs_table();
        assert!(table.match_path("/DOCS/intro").is_none());

        let table = docs_table().with_case_insensitive(true);
        let found = table.match_path("/DOCS/Intro").unwrap();
        assert_eq!(found.matched[0].name.as_deref(), Some("docs-intro"));
    }

    #[test]
    fn test_unmatched_resolves_to_none() {
        let table = docs_table();
        assert_eq!(table.resolve("/pricing"), Ok(None));
    }

    #[test]
    fn test_empty_table_resolves_nothing() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert_eq!(table.resolve("/"), Ok(None));
    }
}

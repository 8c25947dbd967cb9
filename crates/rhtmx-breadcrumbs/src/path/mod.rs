//! Path utilities for segmenting, validation and normalization
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod prefixes;
pub use prefixes::{PathPrefixes, Prefix};

/// Splits an absolute path into its cumulative prefixes, root first
///
/// Trailing slashes and empty segments are ignored, so the result always
/// has `1 + number of non-empty segments` entries.
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::path::segment_prefixes;
///
/// assert_eq!(segment_prefixes("/"), vec!["/"]);
/// assert_eq!(
///     segment_prefixes("/docs/seo-utils/"),
///     vec!["/", "/docs", "/docs/seo-utils"]
/// );
/// ```
pub fn segment_prefixes(path: &str) -> Vec<String> {
    PathPrefixes::new(path).map(|prefix| prefix.path).collect()
}

/// Validates if a path is in canonical form
///
/// **Pure function**: No side effects, deterministic output.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/docs/getting-started"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("docs")); // Missing leading /
/// assert!(!is_valid_path("/docs/")); // Trailing /
/// assert!(!is_valid_path("/docs//intro")); // Double //
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical and
/// `Cow::Owned` otherwise.
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/docs"), Cow::Borrowed("/docs")));
/// assert_eq!(normalize_path("/docs/"), "/docs");
/// assert_eq!(normalize_path("\\docs\\intro"), "/docs/intro");
/// assert_eq!(normalize_path("/docs//seo-utils///intro"), "/docs/seo-utils/intro");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

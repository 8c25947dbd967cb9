use std::str::Split;

/// One ancestor level of an active path
///
/// `path` is the cumulative prefix (`/docs/seo-utils`), `segment` the last
/// raw segment of that prefix (`seo-utils`). The root prefix has no segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix<'a> {
    pub path: String,
    pub segment: Option<&'a str>,
}

impl<'a> Prefix<'a> {
    /// The `/` prefix
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            segment: None,
        }
    }
}

/// Lazy iterator over the cumulative prefixes of a path, root first
///
/// For path `/a/b/c`, yields: `/` → `/a` → `/a/b` → `/a/b/c`
///
/// Empty segments (trailing or doubled slashes) are skipped, so every
/// yielded prefix is in canonical form. Segments are borrowed from the
/// input; only the cumulative prefix string is allocated.
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::path::PathPrefixes;
///
/// let paths: Vec<String> = PathPrefixes::new("/a/b/c").map(|p| p.path).collect();
/// assert_eq!(paths, vec!["/", "/a", "/a/b", "/a/b/c"]);
///
/// let segments: Vec<Option<&str>> = PathPrefixes::new("/a/b").map(|p| p.segment).collect();
/// assert_eq!(segments, vec![None, Some("a"), Some("b")]);
/// ```
#[derive(Clone)]
pub struct PathPrefixes<'a> {
    segments: Split<'a, char>,
    current: String,
    root_pending: bool,
}

impl<'a> PathPrefixes<'a> {
    /// Creates a prefix iterator for the given absolute path
    pub fn new(path: &'a str) -> Self {
        Self {
            segments: path.split('/'),
            current: String::with_capacity(path.len()),
            root_pending: true,
        }
    }
}

impl<'a> Iterator for PathPrefixes<'a> {
    type Item = Prefix<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.root_pending {
            self.root_pending = false;
            return Some(Prefix::root());
        }

        let segment = self.segments.by_ref().find(|s| !s.is_empty())?;
        self.current.push('/');
        self.current.push_str(segment);

        Some(Prefix {
            path: self.current.clone(),
            segment: Some(segment),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_only() {
        let prefixes: Vec<Prefix<'_>> = PathPrefixes::new("/").collect();
        assert_eq!(prefixes, vec![Prefix::root()]);
        assert_eq!(prefixes[0].segment, None);
    }

    #[test]
    fn test_prefix_segments_are_borrowed_tokens() {
        let prefixes: Vec<Prefix<'_>> = PathPrefixes::new("/docs/seo-utils").collect();
        assert_eq!(prefixes.len(), 3);
        assert_eq!(prefixes[1].path, "/docs");
        assert_eq!(prefixes[1].segment, Some("docs"));
        assert_eq!(prefixes[2].path, "/docs/seo-utils");
        assert_eq!(prefixes[2].segment, Some("seo-utils"));
    }

    #[test]
    fn test_clone_restarts_from_same_state() {
        let mut iter = PathPrefixes::new("/a/b");
        iter.next();
        let rest: Vec<String> = iter.clone().map(|p| p.path).collect();
        assert_eq!(rest, vec!["/a", "/a/b"]);
        assert_eq!(iter.count(), 2);
    }
}

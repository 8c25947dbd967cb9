//! Pattern parsing and priority calculation for routes
//!
//! Pure functional parsers that transform route patterns into their compiled form.

use super::pattern::{classify_segment, PatternSegmentType};

/// Compiled form of a route pattern
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPattern {
    /// Compiled pattern like "/docs/*slug"
    pub pattern: String,
    /// Parameter names in order of appearance
    pub params: Vec<String>,
    /// Names of optional parameters
    pub optional_params: Vec<String>,
    /// Priority scoring for dynamic segments
    pub dynamic_count: usize,
    /// Whether the pattern contains a catch-all
    pub has_catch_all: bool,
    /// Whether that catch-all may match zero segments
    pub optional_catch_all: bool,
}

impl ParsedPattern {
    fn with_static_segment(mut self, segment: String) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(&segment);
        self
    }

    fn with_required_param(mut self, name: String) -> Self {
        self.pattern.push_str("/:");
        self.pattern.push_str(&name);
        self.params.push(name);
        self.dynamic_count += 1;
        self
    }

    fn with_optional_param(mut self, name: String) -> Self {
        self.pattern.push_str("/:");
        self.pattern.push_str(&name);
        self.pattern.push('?');
        self.params.push(name.clone());
        self.optional_params.push(name);
        self.dynamic_count += 1;
        self
    }

    fn with_catch_all(mut self, name: String) -> Self {
        self.pattern.push_str("/*");
        self.pattern.push_str(&name);
        self.params.push(name);
        self.has_catch_all = true;
        self.dynamic_count += 100;
        self
    }

    fn with_optional_catch_all(mut self, name: String) -> Self {
        self.pattern.push_str("/*");
        self.pattern.push_str(&name);
        self.pattern.push('?');
        self.params.push(name.clone());
        self.optional_params.push(name);
        self.has_catch_all = true;
        self.optional_catch_all = true;
        self.dynamic_count += 99;
        self
    }

    fn finalize(mut self) -> Self {
        if self.pattern.is_empty() {
            self.pattern = "/".to_string();
        }
        self
    }

    /// Number of `/`-separated levels in the compiled pattern
    pub fn depth(&self) -> usize {
        if self.pattern == "/" {
            0
        } else {
            self.pattern.matches('/').count()
        }
    }
}

/// Segments that never contribute to the URL
///
/// `index` pages and `(group)` folders are organisational only.
fn should_skip_segment(segment: &str) -> bool {
    segment.is_empty()
        || segment == "index"
        || (segment.starts_with('(') && segment.ends_with(')'))
}

fn process_segment(state: ParsedPattern, segment: &str) -> ParsedPattern {
    if should_skip_segment(segment) {
        return state;
    }

    match classify_segment(segment) {
        PatternSegmentType::CatchAll(name) => state.with_catch_all(name),
        PatternSegmentType::OptionalCatchAll(name) => state.with_optional_catch_all(name),
        PatternSegmentType::Optional(name) => state.with_optional_param(name),
        PatternSegmentType::Required(name) => state.with_required_param(name),
        PatternSegmentType::Static(segment) => state.with_static_segment(segment),
    }
}

/// Parses a route pattern into its compiled form
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::routes::parser::parse_pattern;
///
/// let parsed = parse_pattern("/about");
/// assert_eq!(parsed.pattern, "/about");
/// assert!(parsed.params.is_empty());
///
/// let parsed = parse_pattern("/users/[id]");
/// assert_eq!(parsed.pattern, "/users/:id");
/// assert_eq!(parsed.params, vec!["id".to_string()]);
///
/// let parsed = parse_pattern("/docs/[...slug]");
/// assert_eq!(parsed.pattern, "/docs/*slug");
/// assert!(parsed.has_catch_all);
/// ```
pub fn parse_pattern(path: &str) -> ParsedPattern {
    path.split('/')
        .fold(ParsedPattern::default(), process_segment)
        .finalize()
}

/// Calculates route priority for matching order
///
/// Lower number = higher priority (matched first).
///
/// 1. **Static routes** → 0
/// 2. **Dynamic routes** → 1-999
/// 3. **Required catch-all** → 1000+
/// 4. **Optional catch-all** → 2000+
///
/// Optional parameters elsewhere in the pattern never move a required
/// catch-all into the optional band.
///
/// ```
/// use rhtmx_breadcrumbs::routes::parser::{calculate_priority, parse_pattern};
///
/// assert_eq!(calculate_priority(&parse_pattern("/docs/intro")), 0);
/// assert_eq!(calculate_priority(&parse_pattern("/users/[id]")), 4);
/// assert_eq!(calculate_priority(&parse_pattern("/docs/[...slug]")), 1002);
/// assert_eq!(calculate_priority(&parse_pattern("/docs/[[...slug]]")), 2002);
/// ```
pub fn calculate_priority(parsed: &ParsedPattern) -> usize {
    let depth = parsed.depth();

    if parsed.optional_catch_all {
        2000 + depth
    } else if parsed.has_catch_all {
        1000 + depth
    } else if parsed.dynamic_count > 0 {
        let optional_bonus = if parsed.optional_params.is_empty() { 1 } else { 0 };
        parsed.dynamic_count + depth + optional_bonus
    } else {
        0
    }
}

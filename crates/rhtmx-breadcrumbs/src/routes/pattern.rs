//! Segment classification for route patterns
//!
//! Pure functional parsing of file-based route segments into typed segments.

/// Represents the different kinds of route pattern segments
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::routes::pattern::{classify_segment, PatternSegmentType};
///
/// assert!(matches!(classify_segment("docs"), PatternSegmentType::Static(_)));
/// assert!(matches!(classify_segment("[id]"), PatternSegmentType::Required(_)));
/// assert!(matches!(classify_segment("[id?]"), PatternSegmentType::Optional(_)));
/// assert!(matches!(classify_segment("[...slug]"), PatternSegmentType::CatchAll(_)));
/// assert!(matches!(classify_segment("[[...slug]]"), PatternSegmentType::OptionalCatchAll(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// Catch-all segment: [...slug]
    CatchAll(String),
    /// Optional catch-all segment: [[...slug]]
    OptionalCatchAll(String),
    /// Optional parameter: [id?]
    Optional(String),
    /// Required parameter: [id]
    Required(String),
    /// Static text segment
    Static(String),
}

/// Classifies a segment into a pattern type
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional catch-all**: `[[...name]]`
/// 2. **Catch-all**: `[...name]`
/// 3. **Optional param**: `[name?]`
/// 4. **Required param**: `[name]`
/// 5. **Static**: Any other text
///
/// Already-compiled segments (`:id`, `:id?`, `*slug`, `*slug?`) are accepted
/// too, so a pattern can be written in either form.
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    if let Some(inner) = segment
        .strip_prefix("[[...")
        .and_then(|s| s.strip_suffix("]]"))
    {
        return PatternSegmentType::OptionalCatchAll(inner.to_string());
    }

    if let Some(inner) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if let Some(name) = inner.strip_prefix("...") {
            return PatternSegmentType::CatchAll(name.to_string());
        }
        if let Some(name) = inner.strip_suffix('?') {
            return PatternSegmentType::Optional(name.to_string());
        }
        return PatternSegmentType::Required(inner.to_string());
    }

    if let Some(name) = segment.strip_prefix('*') {
        return match name.strip_suffix('?') {
            Some(name) => PatternSegmentType::OptionalCatchAll(name.to_string()),
            None => PatternSegmentType::CatchAll(name.to_string()),
        };
    }

    if let Some(name) = segment.strip_prefix(':') {
        return match name.strip_suffix('?') {
            Some(name) => PatternSegmentType::Optional(name.to_string()),
            None => PatternSegmentType::Required(name.to_string()),
        };
    }

    PatternSegmentType::Static(segment.to_string())
}

//! Label derivation from raw path segments
//!
//! Labels always come from the URL segment itself, never from route metadata.

/// Characters that separate words inside a path segment
const WORD_SEPARATORS: &[char] = &['-', '_'];

/// Turns a raw path segment into a human-readable label
///
/// Splits on `-` and `_`, capitalizes the first character of each word,
/// lowercases the rest and joins the words with single spaces. Empty words
/// (from doubled or leading separators) are dropped.
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::humanize_segment;
///
/// assert_eq!(humanize_segment("seo-utils"), "Seo Utils");
/// assert_eq!(humanize_segment("getting_started"), "Getting Started");
/// assert_eq!(humanize_segment("installation"), "Installation");
/// assert_eq!(humanize_segment("API-v2"), "Api V2");
/// ```
pub fn humanize_segment(segment: &str) -> String {
    segment
        .split(WORD_SEPARATORS)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

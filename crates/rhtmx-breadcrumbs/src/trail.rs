//! Breadcrumb trail types and assembly

use serde::{Deserialize, Serialize};

use crate::label::humanize_segment;
use crate::path::Prefix;

/// One entry of a breadcrumb trail
///
/// Serializes as `{ "label", "ariaLabel", "to", "current" }`, the shape
/// breadcrumb components consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbItem {
    /// Display text
    pub label: String,
    /// Accessibility text (same as `label`)
    pub aria_label: String,
    /// Absolute path this entry links to
    pub to: String,
    /// Whether this entry is the active page
    pub current: bool,
}

impl BreadcrumbItem {
    /// Creates a non-current item whose aria label mirrors its label
    pub fn new(label: impl Into<String>, to: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            aria_label: label.clone(),
            label,
            to: to.into(),
            current: false,
        }
    }
}

/// Ordered breadcrumb entries, root first, active page last
///
/// Built only by [`assemble`] (and the `derive_*` entry points), so a trail
/// produced from a path always holds the root entry and exactly one
/// `current` entry at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BreadcrumbTrail {
    items: Vec<BreadcrumbItem>,
}

impl BreadcrumbTrail {
    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The root (`/`) entry
    pub fn root(&self) -> Option<&BreadcrumbItem> {
        self.items.first()
    }

    /// The entry for the active page
    pub fn current(&self) -> Option<&BreadcrumbItem> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BreadcrumbItem> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<BreadcrumbItem> {
        self.items
    }
}

impl IntoIterator for BreadcrumbTrail {
    type Item = BreadcrumbItem;
    type IntoIter = std::vec::IntoIter<BreadcrumbItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'t> IntoIterator for &'t BreadcrumbTrail {
    type Item = &'t BreadcrumbItem;
    type IntoIter = std::slice::Iter<'t, BreadcrumbItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Builds a trail from root-first prefixes
///
/// The root prefix takes `root_label`; every other prefix is labelled from
/// its final segment. The last entry is marked `current`.
///
/// ```
/// use rhtmx_breadcrumbs::{assemble, path::PathPrefixes};
///
/// let trail = assemble(PathPrefixes::new("/docs/seo-utils"), "Home");
/// let labels: Vec<&str> = trail.iter().map(|item| item.label.as_str()).collect();
/// assert_eq!(labels, vec!["Home", "Docs", "Seo Utils"]);
/// assert!(trail.current().unwrap().current);
/// ```
pub fn assemble<'a, I>(prefixes: I, root_label: &str) -> BreadcrumbTrail
where
    I: IntoIterator<Item = Prefix<'a>>,
{
    let mut items: Vec<BreadcrumbItem> = prefixes
        .into_iter()
        .map(|prefix| {
            let label = match prefix.segment {
                Some(segment) => humanize_segment(segment),
                None => root_label.to_string(),
            };
            tracing::trace!(to = %prefix.path, label = %label, "assembled breadcrumb");
            BreadcrumbItem::new(label, prefix.path)
        })
        .collect();

    if let Some(last) = items.last_mut() {
        last.current = true;
    }

    BreadcrumbTrail { items }
}

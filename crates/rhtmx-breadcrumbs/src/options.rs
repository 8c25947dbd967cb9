//! Derivation options

use serde::{Deserialize, Serialize};

/// Options for [`derive_breadcrumbs_with`](crate::derive_breadcrumbs_with)
///
/// Deserializes from a `[breadcrumbs]` table with every field optional:
///
/// ```
/// use rhtmx_breadcrumbs::BreadcrumbOptions;
///
/// let options: BreadcrumbOptions = serde_json::from_str(r#"{ "root_label": "Start" }"#).unwrap();
/// assert_eq!(options.root_label, "Start");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbOptions {
    /// Label of the root entry when the resolver claims `/` (default: "Home")
    pub root_label: String,
}

impl BreadcrumbOptions {
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }
}

impl Default for BreadcrumbOptions {
    fn default() -> Self {
        Self {
            root_label: default_root_label(),
        }
    }
}

fn default_root_label() -> String {
    "Home".to_string()
}

// File: src/config.rs
// Purpose: Configuration parsing from crumbs.toml

use anyhow::{Context, Result};
use rhtmx_breadcrumbs::{BreadcrumbOptions, RouteRecord, RouteTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "crumbs.toml";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub breadcrumbs: BreadcrumbsConfig,

    /// Routes the preview resolves against
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

/// `[breadcrumbs]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreadcrumbsConfig {
    /// Label of the root entry when a route claims `/`
    #[serde(default = "default_root_label")]
    pub root_label: String,

    /// Normalize the active path before deriving (trailing/double slashes, backslashes)
    #[serde(default = "default_false")]
    pub normalize: bool,

    /// Whether route patterns match case-insensitively
    #[serde(default = "default_false")]
    pub case_insensitive: bool,
}

fn default_root_label() -> String {
    BreadcrumbOptions::default().root_label
}

fn default_false() -> bool {
    false
}

impl Default for BreadcrumbsConfig {
    fn default() -> Self {
        Self {
            root_label: default_root_label(),
            normalize: false,
            case_insensitive: false,
        }
    }
}

impl BreadcrumbsConfig {
    pub fn options(&self) -> BreadcrumbOptions {
        BreadcrumbOptions::default().with_root_label(self.root_label.clone())
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Builds the route table described by `[[routes]]`
    pub fn route_table(&self) -> RouteTable {
        RouteTable::from_records(self.routes.iter().cloned())
            .with_case_insensitive(self.breadcrumbs.case_insensitive)
    }
}

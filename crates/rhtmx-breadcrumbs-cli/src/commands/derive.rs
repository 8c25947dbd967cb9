use std::borrow::Cow;

use anyhow::{Context, Result};
use colored::Colorize;
use rhtmx_breadcrumbs::{derive_breadcrumbs_with, normalize_path, BreadcrumbTrail};

use crate::config::Config;
use crate::OutputFormat;

/// Shown in text output for an entry whose label is empty
const EMPTY_LABEL: &str = "(no label)";

pub fn execute(config: &Config, path: &str, format: OutputFormat, normalize: bool) -> Result<()> {
    let path = if normalize || config.breadcrumbs.normalize {
        normalize_path(path)
    } else {
        Cow::Borrowed(path)
    };

    let table = config.route_table();
    let trail = derive_breadcrumbs_with(&path, &table, &config.breadcrumbs.options())
        .with_context(|| format!("Cannot derive breadcrumbs for {:?}", path))?;

    match format {
        OutputFormat::Json => println!("{}", render_json(&trail)?),
        OutputFormat::Text => print_text(&trail),
    }

    Ok(())
}

pub fn render_json(trail: &BreadcrumbTrail) -> Result<String> {
    serde_json::to_string_pretty(trail).context("Failed to serialize breadcrumb trail")
}

/// One `to  label` line per entry, current entry marked with `>`
pub fn render_text(trail: &BreadcrumbTrail) -> Vec<String> {
    let width = trail.iter().map(|item| item.to.len()).max().unwrap_or(0);

    trail
        .iter()
        .map(|item| {
            let marker = if item.current { '>' } else { ' ' };
            let label = if item.label.is_empty() {
                EMPTY_LABEL
            } else {
                item.label.as_str()
            };
            format!("{} {:<width$}  {}", marker, item.to, label, width = width)
        })
        .collect()
}

fn print_text(trail: &BreadcrumbTrail) {
    for (item, line) in trail.iter().zip(render_text(trail)) {
        if item.current {
            println!("{}", line.green().bold());
        } else if item.label.is_empty() {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rhtmx_breadcrumbs::derive_breadcrumbs;

    #[test]
    fn test_render_text() {
        let resolver = |_: &str| Some(());
        let trail = derive_breadcrumbs("/docs/seo-utils", &resolver).unwrap();

        assert_eq!(
            render_text(&trail),
            vec![
                "  /                Home".to_string(),
                "  /docs            Docs".to_string(),
                "> /docs/seo-utils  Seo Utils".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_text_empty_root_label() {
        let resolver = |_: &str| None::<()>;
        let trail = derive_breadcrumbs("/", &resolver).unwrap();

        assert_eq!(render_text(&trail), vec!["> /  (no label)".to_string()]);
    }

    #[test]
    fn test_render_json() {
        let resolver = |_: &str| Some(());
        let trail = derive_breadcrumbs("/", &resolver).unwrap();

        let json: serde_json::Value = serde_json::from_str(&render_json(&trail).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "label": "Home", "ariaLabel": "Home", "to": "/", "current": true }])
        );
    }

    #[test]
    fn test_execute_rejects_relative_path() {
        let err = execute(&Config::default(), "docs", OutputFormat::Json, false).unwrap_err();
        assert!(err.to_string().contains("Cannot derive breadcrumbs"));
    }

    #[test]
    fn test_execute_normalizes_relative_path() {
        assert!(execute(&Config::default(), "docs//intro/", OutputFormat::Json, true).is_ok());
    }
}

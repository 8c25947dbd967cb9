//! # RHTMX Breadcrumbs
//!
//! Derives a breadcrumb trail from the active route path:
//! - Cumulative prefixes of the path (`/`, `/docs`, `/docs/seo-utils`)
//! - Labels humanized from each segment (`seo-utils` → `Seo Utils`)
//! - A root entry labelled "Home" when the router claims `/`, empty otherwise
//! - The last entry flagged as the current page
//!
//! The router is never called directly: hosts pass anything implementing
//! [`Resolver`], so tests substitute a closure and static sites use a
//! [`RouteTable`]. Route metadata (names, titles) is never used for labels;
//! labels always come from the URL.
//!
//! ## Example
//!
//! ```
//! use rhtmx_breadcrumbs::derive_breadcrumbs;
//!
//! let resolver = |path: &str| (path == "/").then_some(());
//! let trail = derive_breadcrumbs("/docs/seo-utils/getting-started", &resolver).unwrap();
//!
//! let labels: Vec<&str> = trail.iter().map(|item| item.label.as_str()).collect();
//! assert_eq!(labels, vec!["Home", "Docs", "Seo Utils", "Getting Started"]);
//! assert_eq!(trail.current().unwrap().to, "/docs/seo-utils/getting-started");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod label;
mod options;
pub mod path;
pub mod resolve;
pub mod routes;
mod trail;

pub use error::{BreadcrumbError, ResolveError};
pub use label::humanize_segment;
pub use options::BreadcrumbOptions;
pub use path::{is_valid_path, normalize_path, segment_prefixes, PathPrefixes, Prefix};
pub use resolve::{
    root_reachable, root_reachable_async, AsyncResolver, Fallible, Reachability, Resolver,
};
pub use routes::{Route, RouteMatch, RouteRecord, RouteTable};
pub use trail::{assemble, BreadcrumbItem, BreadcrumbTrail};

// ============================================================================
// Entry Points
// ============================================================================

/// Derives the breadcrumb trail for `active_path` with default options
///
/// # Errors
///
/// [`BreadcrumbError::InvalidPath`] when `active_path` is empty or not
/// absolute. Resolver failures never error; the root label degrades to "".
pub fn derive_breadcrumbs<R>(
    active_path: &str,
    resolver: &R,
) -> Result<BreadcrumbTrail, BreadcrumbError>
where
    R: Resolver + ?Sized,
{
    derive_breadcrumbs_with(active_path, resolver, &BreadcrumbOptions::default())
}

/// Derives the breadcrumb trail for `active_path`
///
/// Only `/` is resolved; every other entry is labelled from its segment.
pub fn derive_breadcrumbs_with<R>(
    active_path: &str,
    resolver: &R,
    options: &BreadcrumbOptions,
) -> Result<BreadcrumbTrail, BreadcrumbError>
where
    R: Resolver + ?Sized,
{
    validate_active_path(active_path)?;

    let root_label = root_label_for(root_reachable(resolver), options);
    Ok(finish(active_path, root_label))
}

/// Async variant of [`derive_breadcrumbs`] for routers that resolve asynchronously
pub async fn derive_breadcrumbs_async<R>(
    active_path: &str,
    resolver: &R,
) -> Result<BreadcrumbTrail, BreadcrumbError>
where
    R: AsyncResolver + ?Sized + Sync,
{
    derive_breadcrumbs_async_with(active_path, resolver, &BreadcrumbOptions::default()).await
}

/// Async variant of [`derive_breadcrumbs_with`]
///
/// Awaits exactly one resolution (the root) before assembling.
pub async fn derive_breadcrumbs_async_with<R>(
    active_path: &str,
    resolver: &R,
    options: &BreadcrumbOptions,
) -> Result<BreadcrumbTrail, BreadcrumbError>
where
    R: AsyncResolver + ?Sized + Sync,
{
    validate_active_path(active_path)?;

    let root_label = root_label_for(root_reachable_async(resolver).await, options);
    Ok(finish(active_path, root_label))
}

fn validate_active_path(active_path: &str) -> Result<(), BreadcrumbError> {
    if active_path.starts_with('/') {
        Ok(())
    } else {
        Err(BreadcrumbError::InvalidPath(active_path.to_string()))
    }
}

fn root_label_for(reachable: bool, options: &BreadcrumbOptions) -> &str {
    if reachable {
        &options.root_label
    } else {
        ""
    }
}

fn finish(active_path: &str, root_label: &str) -> BreadcrumbTrail {
    let trail = assemble(PathPrefixes::new(active_path), root_label);
    tracing::debug!(path = %active_path, len = trail.len(), "derived breadcrumb trail");
    trail
}

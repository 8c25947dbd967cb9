//! Route resolution seam
//!
//! The engine never talks to a concrete router. Hosts hand it anything that
//! implements [`Resolver`] (or [`AsyncResolver`]); only reachability of the
//! root path is ever asked for.

use async_trait::async_trait;

use crate::error::ResolveError;

/// Path of the site root
pub const ROOT_PATH: &str = "/";

/// Whether a resolved match actually claims the path
///
/// Some routers never return "nothing": they hand back a match object and
/// signal "no route" by leaving its matched records empty. Such a match must
/// count as unreachable.
///
/// ```
/// use rhtmx_breadcrumbs::Reachability;
///
/// assert!(().is_reachable());
/// assert!(vec!["index"].is_reachable());
/// assert!(!Vec::<&str>::new().is_reachable());
/// assert!(!"".is_reachable());
/// ```
pub trait Reachability {
    fn is_reachable(&self) -> bool;
}

impl Reachability for () {
    fn is_reachable(&self) -> bool {
        true
    }
}

impl Reachability for bool {
    fn is_reachable(&self) -> bool {
        *self
    }
}

impl Reachability for str {
    fn is_reachable(&self) -> bool {
        !self.is_empty()
    }
}

impl Reachability for String {
    fn is_reachable(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Reachability for [T] {
    fn is_reachable(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Reachability for Vec<T> {
    fn is_reachable(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Reachability> Reachability for Option<T> {
    fn is_reachable(&self) -> bool {
        self.as_ref().is_some_and(|matched| matched.is_reachable())
    }
}

impl<T: Reachability + ?Sized> Reachability for &T {
    fn is_reachable(&self) -> bool {
        (**self).is_reachable()
    }
}

impl<T: Reachability + ?Sized> Reachability for Box<T> {
    fn is_reachable(&self) -> bool {
        (**self).is_reachable()
    }
}

/// Maps a path to a route match, or `None` when no route claims it
///
/// Any `Fn(&str) -> Option<M>` is a resolver, which keeps test doubles cheap:
///
/// ```
/// use rhtmx_breadcrumbs::{root_reachable, Resolver};
///
/// let resolver = |path: &str| (path == "/").then_some("index");
/// assert_eq!(resolver.resolve("/").unwrap(), Some("index"));
/// assert!(root_reachable(&resolver));
/// ```
pub trait Resolver {
    /// Whatever the host's router returns for a match
    ///
    /// Only [`Reachability`] is consulted; its fields are never read.
    type Match: Reachability;

    fn resolve(&self, path: &str) -> Result<Option<Self::Match>, ResolveError>;
}

impl<F, M> Resolver for F
where
    F: Fn(&str) -> Option<M>,
    M: Reachability,
{
    type Match = M;

    fn resolve(&self, path: &str) -> Result<Option<M>, ResolveError> {
        Ok(self(path))
    }
}

/// Adapts a resolver function that can fail
///
/// ```
/// use rhtmx_breadcrumbs::{root_reachable, Fallible, ResolveError};
///
/// let broken = Fallible(|path: &str| -> Result<Option<()>, ResolveError> {
///     Err(ResolveError::new(path, "router not mounted"))
/// });
/// assert!(!root_reachable(&broken));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, M> Resolver for Fallible<F>
where
    F: Fn(&str) -> Result<Option<M>, ResolveError>,
    M: Reachability,
{
    type Match = M;

    fn resolve(&self, path: &str) -> Result<Option<M>, ResolveError> {
        (self.0)(path)
    }
}

/// Asynchronous counterpart of [`Resolver`] for hosts whose router awaits
///
/// Every `Resolver + Sync` is also an `AsyncResolver`.
#[async_trait]
pub trait AsyncResolver {
    type Match: Reachability + Send;

    async fn resolve(&self, path: &str) -> Result<Option<Self::Match>, ResolveError>;
}

#[async_trait]
impl<R> AsyncResolver for R
where
    R: Resolver + Sync,
    R::Match: Send,
{
    type Match = R::Match;

    async fn resolve(&self, path: &str) -> Result<Option<Self::Match>, ResolveError> {
        Resolver::resolve(self, path)
    }
}

/// Whether the resolver claims the root path
///
/// A resolver failure, `None` and an empty match all count as unreachable.
pub fn root_reachable<R>(resolver: &R) -> bool
where
    R: Resolver + ?Sized,
{
    reachable(Resolver::resolve(resolver, ROOT_PATH))
}

/// Async variant of [`root_reachable`]; awaits exactly one resolution
pub async fn root_reachable_async<R>(resolver: &R) -> bool
where
    R: AsyncResolver + ?Sized + Sync,
{
    reachable(AsyncResolver::resolve(resolver, ROOT_PATH).await)
}

fn reachable<M: Reachability>(resolution: Result<Option<M>, ResolveError>) -> bool {
    match resolution {
        Ok(Some(matched)) => {
            let claimed = matched.is_reachable();
            if !claimed {
                tracing::debug!("resolver returned an empty match, treating path as unreachable");
            }
            claimed
        }
        Ok(None) => false,
        Err(err) => {
            tracing::warn!(path = %err.path, error = %err, "resolver failed, treating path as unreachable");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_resolver_reachable() {
        let resolver = |_: &str| Some(());
        assert!(root_reachable(&resolver));
    }

    #[test]
    fn test_closure_resolver_unreachable() {
        let resolver = |_: &str| None::<()>;
        assert!(!root_reachable(&resolver));
    }

    #[test]
    fn test_failure_is_unreachable() {
        let resolver = Fallible(|path: &str| -> Result<Option<()>, ResolveError> {
            Err(ResolveError::new(path, "boom"))
        });
        assert!(!root_reachable(&resolver));
    }

    #[test]
    fn test_empty_match_is_unreachable() {
        let resolver = |_: &str| Some(Vec::<&str>::new());
        assert!(!root_reachable(&resolver));

        let resolver = |_: &str| Some(vec!["index"]);
        assert!(root_reachable(&resolver));
    }

    #[test]
    fn test_fallible_empty_match_is_unreachable() {
        let resolver = Fallible(|_: &str| -> Result<Option<String>, ResolveError> {
            Ok(Some(String::new()))
        });
        assert!(!root_reachable(&resolver));
    }

    #[test]
    fn test_only_root_is_queried() {
        let calls = RefCell::new(Vec::new());
        let resolver = |path: &str| {
            calls.borrow_mut().push(path.to_string());
            Some(())
        };
        root_reachable(&resolver);
        assert_eq!(calls.into_inner(), vec!["/".to_string()]);
    }
}

//! Error types for breadcrumb derivation and route resolution

use thiserror::Error;

/// Errors returned by the derivation entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreadcrumbError {
    /// The active path was empty or did not start with `/`
    #[error("invalid active path {0:?}: must be an absolute path starting with '/'")]
    InvalidPath(String),
}

/// Failure reported by a resolver for a single path
///
/// Never surfaces from the derivation entry points: a failed resolution is
/// logged and treated as "no route claims this path".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to resolve {path}: {message}")]
pub struct ResolveError {
    pub path: String,
    pub message: String,
}

impl ResolveError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_message() {
        let err = BreadcrumbError::InvalidPath("docs".to_string());
        assert_eq!(
            err.to_string(),
            "invalid active path \"docs\": must be an absolute path starting with '/'"
        );
    }

    #[test]
    fn test_resolve_error_message() {
        let err = ResolveError::new("/", "router not ready");
        assert_eq!(err.to_string(), "failed to resolve /: router not ready");
    }
}

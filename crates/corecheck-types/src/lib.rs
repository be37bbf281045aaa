//! Shared types, errors, and transformation context for the corecheck pipeline.
//!
//! This crate provides the foundational types used across all other corecheck crates:
//! - `CorecheckError` — unified error taxonomy
//! - `TransformContext` — thread-safe key-value store shared across pipeline steps

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Unified error type for all corecheck subsystems.
#[derive(Debug, thiserror::Error)]
pub enum CorecheckError {
    // === Compatibility Errors ===
    #[error("{root} depends on {dependency}, which does not match the required Maven versionrange of {range}")]
    IncompatibleVersion {
        root: String,
        dependency: String,
        range: String,
    },

    // === Parse Errors ===
    #[error("Invalid version range '{input}': {message}")]
    InvalidRange { input: String, message: String },

    #[error("Invalid artifact coordinates '{input}': {message}")]
    InvalidCoordinates { input: String, message: String },

    // === Generic ===
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl CorecheckError {
    /// Returns `true` if the error reports an incompatible core dependency
    /// rather than a problem with the inputs themselves.
    pub fn is_incompatibility(&self) -> bool {
        matches!(self, CorecheckError::IncompatibleVersion { .. })
    }

    /// Maps the error to a process exit code for CLI mode: 1 for an
    /// incompatible dependency, 2 for anything wrong with the inputs.
    pub fn exit_code(&self) -> u8 {
        match self {
            CorecheckError::IncompatibleVersion { .. } => 1,
            _ => 2,
        }
    }
}

/// A convenience alias for `Result<T, CorecheckError>`.
pub type Result<T> = std::result::Result<T, CorecheckError>;

// ---------------------------------------------------------------------------
// TransformContext — shared key-value store for pipeline state
// ---------------------------------------------------------------------------

/// Thread-safe key-value store shared across graph transformation steps.
///
/// Cloning a `TransformContext` yields another handle to the **same** inner
/// state. Transformers that carry no state of their own (the compatibility
/// checker among them) accept the context and ignore it.
#[derive(Clone, Default)]
pub struct TransformContext {
    inner: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl TransformContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key.
    pub fn set(&self, key: impl Into<String>, value: serde_json::Value) {
        self.write().insert(key.into(), value);
    }

    /// Read a value by key (cloned).
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.read().get(key).cloned()
    }

    /// Convenience accessor that returns a `String`. Falls back to `default`
    /// when the key is absent or not a JSON string.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.read()
            .get(key)
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_else(|| default.to_owned())
    }

    /// Shallow copy of the current values map.
    pub fn snapshot(&self) -> HashMap<String, serde_json::Value> {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, serde_json::Value>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, serde_json::Value>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_incompatible_version() {
        let err = CorecheckError::IncompatibleVersion {
            root: "o.a.m.p:plugin:jar:1.0".into(),
            dependency: "org.apache.maven:maven-core:jar:2.0".into(),
            range: "[3.0,)".into(),
        };
        assert_eq!(
            err.to_string(),
            "o.a.m.p:plugin:jar:1.0 depends on org.apache.maven:maven-core:jar:2.0, \
             which does not match the required Maven versionrange of [3.0,)"
        );
    }

    #[test]
    fn error_display_invalid_range() {
        let err = CorecheckError::InvalidRange {
            input: "3.0".into(),
            message: "range must start with [ or (".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid version range '3.0': range must start with [ or ("
        );
    }

    #[test]
    fn error_display_invalid_coordinates() {
        let err = CorecheckError::InvalidCoordinates {
            input: "only-one-segment".into(),
            message: "expected <groupId>:<artifactId>[:<extension>[:<classifier>]]:<version>".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid artifact coordinates 'only-one-segment': \
             expected <groupId>:<artifactId>[:<extension>[:<classifier>]]:<version>"
        );
    }

    #[test]
    fn error_display_other() {
        let err = CorecheckError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CorecheckError = io_err.into();
        assert!(matches!(err, CorecheckError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CorecheckError = json_err.into();
        assert!(matches!(err, CorecheckError::Json(_)));
    }

    // --- classification helpers ---

    #[test]
    fn incompatibility_is_flagged() {
        let err = CorecheckError::IncompatibleVersion {
            root: "a:b:jar:1".into(),
            dependency: "c:d:jar:2".into(),
            range: "[3,)".into(),
        };
        assert!(err.is_incompatibility());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn input_errors_exit_with_2() {
        let err = CorecheckError::InvalidRange {
            input: "nope".into(),
            message: "bad".into(),
        };
        assert!(!err.is_incompatibility());
        assert_eq!(err.exit_code(), 2);

        let err = CorecheckError::Other("misc".into());
        assert_eq!(err.exit_code(), 2);
    }

    // --- Result alias ---

    #[test]
    fn result_alias_works() {
        fn example() -> Result<u32> {
            Ok(42)
        }
        assert_eq!(example().unwrap(), 42);
    }

    // --- TransformContext ---

    #[test]
    fn context_set_and_get_round_trip() {
        let ctx = TransformContext::new();
        ctx.set("key", serde_json::json!("hello"));
        assert_eq!(ctx.get("key"), Some(serde_json::json!("hello")));
    }

    #[test]
    fn context_get_string_returns_default_when_missing() {
        let ctx = TransformContext::new();
        assert_eq!(ctx.get_string("missing", "fallback"), "fallback");
    }

    #[test]
    fn context_clones_share_state() {
        let ctx = TransformContext::new();
        let handle = ctx.clone();
        handle.set("a", serde_json::json!(1));
        assert_eq!(ctx.get("a"), Some(serde_json::json!(1)));
    }

    #[test]
    fn context_snapshot_returns_current_values() {
        let ctx = TransformContext::new();
        ctx.set("x", serde_json::json!(10));
        ctx.set("y", serde_json::json!(20));

        let snap = ctx.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.get("x"), Some(&serde_json::json!(10)));
        assert_eq!(snap.get("y"), Some(&serde_json::json!(20)));
    }
}

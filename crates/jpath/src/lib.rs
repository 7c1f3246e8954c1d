//! Dotted path lookups of scalar values in JSON documents.
//!
//! A path such as `foo.*.bar[1]` walks object keys (`foo`), the first entry of an
//! object (`*`), and array elements under a key (`bar[1]`). Each lookup ends in a
//! string, number, or boolean, or in no value at all when the path reaches `null`.
//! A lookup that cannot be carried out is an error, never an absent value.
//!
//! The byte-level accessors decode the document on every call. Callers doing many
//! lookups against one document should `decode` once and use the `*_at` functions.

pub mod ast;
pub mod config;
pub mod engine;
pub mod error;
mod parser;
pub mod value;

// --- Public API ---
pub use ast::{Path, PathSegment};
pub use config::{ResolverOptions, TerminalPolicy};
pub use engine::{Resolver, ResolverBuilder, decode};
pub use error::JPathError;
pub use parser::{classify_segment, parse_path, split_head};
pub use value::{JsonKind, Scalar, ScalarKind};

use serde_json::Value;

/// Resolves `path` against a decoded tree with the default options.
pub fn resolve<'v>(path: &str, tree: &'v Value) -> Result<Option<Scalar<'v>>, JPathError> {
    Resolver::new().resolve(path, tree)
}

/// Resolves an already parsed `path` against a decoded tree with the default options.
pub fn resolve_path<'v>(path: &Path, tree: &'v Value) -> Result<Option<Scalar<'v>>, JPathError> {
    Resolver::new().resolve_path(path, tree)
}

pub fn string_at(path: &str, tree: &Value) -> Result<Option<String>, JPathError> {
    Resolver::new().string_at(path, tree)
}

pub fn number_at(path: &str, tree: &Value) -> Result<Option<f64>, JPathError> {
    Resolver::new().number_at(path, tree)
}

pub fn bool_at(path: &str, tree: &Value) -> Result<Option<bool>, JPathError> {
    Resolver::new().bool_at(path, tree)
}

/// Returns the string at `path` in a JSON document.
///
/// Given `{"foo":{"123":{"bar":["41","42"]}}}`, the path `foo.*.bar[1]` returns `"42"`.
pub fn get_string(path: &str, document: &[u8]) -> Result<Option<String>, JPathError> {
    Resolver::new().get_string(path, document)
}

/// Returns the number at `path` in a JSON document.
///
/// Given `{"foo":{"123":{"bar":[41,42]}}}`, the path `foo.*.bar[1]` returns `42.0`.
pub fn get_number(path: &str, document: &[u8]) -> Result<Option<f64>, JPathError> {
    Resolver::new().get_number(path, document)
}

/// Returns the boolean at `path` in a JSON document.
///
/// Given `{"foo":{"123":{"bar":[true,false]}}}`, the path `foo.*.bar[1]` returns `false`.
pub fn get_bool(path: &str, document: &[u8]) -> Result<Option<bool>, JPathError> {
    Resolver::new().get_bool(path, document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_string_through_wildcard_and_index() {
        let doc = br#"{"foo":{"123":{"bar":["41","42"]}}}"#;
        assert_eq!(get_string("foo.*.bar[1]", doc).unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn test_get_number_through_wildcard_and_index() {
        let doc = br#"{"foo":{"123":{"bar":[41,42]}}}"#;
        assert_eq!(get_number("foo.*.bar[1]", doc).unwrap(), Some(42.0));
    }

    #[test]
    fn test_get_bool_through_wildcard_and_index() {
        let doc = br#"{"foo":{"123":{"bar":[true,false]}}}"#;
        assert_eq!(get_bool("foo.*.bar[1]", doc).unwrap(), Some(false));
    }

    #[test]
    fn test_parsed_path_is_reusable() {
        let path: Path = "item.price".parse().unwrap();
        let first = json!({ "item": { "price": 3 } });
        let second = json!({ "item": { "price": 4.25 } });
        assert_eq!(resolve_path(&path, &first).unwrap(), Some(Scalar::Number(3.0)));
        assert_eq!(resolve_path(&path, &second).unwrap(), Some(Scalar::Number(4.25)));
    }

    #[test]
    fn test_empty_path() {
        assert!(matches!(resolve("", &json!({})), Err(JPathError::EmptyPath)));
        assert!(matches!(resolve("", &json!(null)), Err(JPathError::EmptyPath)));
    }
}

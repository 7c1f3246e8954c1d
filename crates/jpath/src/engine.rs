//! The resolution engine: walks a decoded JSON tree along a parsed `Path`.
use super::ast::{Path, PathSegment};
use super::config::{ResolverOptions, TerminalPolicy};
use crate::error::JPathError;
use crate::value::{JsonKind, Scalar, ScalarKind};
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Decodes a JSON document into a generic value tree.
pub fn decode(document: &[u8]) -> Result<Value, JPathError> {
    serde_json::from_slice(document).map_err(|e| {
        log::debug!("Failed to decode JSON document: {}", e);
        JPathError::Decode(e)
    })
}

/// Resolves paths against decoded JSON trees.
///
/// A `Resolver` holds only its options, so one instance can be shared freely
/// between threads resolving against the same tree.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    options: ResolverOptions,
}

impl Resolver {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Parses `path` and resolves it against `tree`.
    ///
    /// Returns `Ok(None)` when the path ends on null, on a missing key, or on a
    /// wildcard over an empty object.
    pub fn resolve<'v>(&self, path: &str, tree: &'v Value) -> Result<Option<Scalar<'v>>, JPathError> {
        let path = Path::parse(path)?;
        self.resolve_path(&path, tree)
    }

    /// Resolves an already parsed path against `tree`.
    pub fn resolve_path<'v>(
        &self,
        path: &Path,
        tree: &'v Value,
    ) -> Result<Option<Scalar<'v>>, JPathError> {
        let (head, rest) = path.segments().split_first().ok_or(JPathError::EmptyPath)?;
        match tree {
            Value::Object(root) => self.descend(head, rest, root),
            other => Err(JPathError::ExpectedObject {
                key: None,
                actual: JsonKind::of(other),
            }),
        }
    }

    fn descend<'v>(
        &self,
        head: &PathSegment,
        rest: &[PathSegment],
        object: &'v Map<String, Value>,
    ) -> Result<Option<Scalar<'v>>, JPathError> {
        log::trace!("Resolving '{}' ({} segments remaining)", head, rest.len());

        let (value, matched_key) = match head {
            PathSegment::Wildcard => match object.iter().next() {
                None => {
                    log::debug!("Wildcard matched an empty object");
                    return Ok(None);
                }
                Some((k, v)) if v.is_object() => (v, Some(k.as_str())),
                Some((k, v)) => {
                    return Err(JPathError::ExpectedObjectAfterWildcard {
                        key: k.clone(),
                        actual: JsonKind::of(v),
                    });
                }
            },
            PathSegment::Indexed { key, index } => (element_at(object, key, *index)?, None),
            PathSegment::Key(key) => (object.get(key).unwrap_or(&NULL), None),
        };
        let label = || matched_key.map_or_else(|| head.to_string(), str::to_string);

        match rest.split_first() {
            None => self.terminal(value, label),
            Some((next, rest)) => match value {
                Value::Object(inner) => self.descend(next, rest, inner),
                other => Err(JPathError::ExpectedObject {
                    key: Some(label()),
                    actual: JsonKind::of(other),
                }),
            },
        }
    }

    fn terminal<'v>(
        &self,
        value: &'v Value,
        label: impl FnOnce() -> String,
    ) -> Result<Option<Scalar<'v>>, JPathError> {
        if let Some(scalar) = Scalar::from_value(value) {
            return Ok(Some(scalar));
        }
        let actual = JsonKind::of(value);
        match (self.options.terminal_policy, actual) {
            (TerminalPolicy::Strict, JsonKind::Object | JsonKind::Array) => {
                Err(JPathError::NonScalarTerminal {
                    key: label(),
                    actual,
                })
            }
            _ => {
                log::debug!("Path ends at '{}' without a scalar ({})", label(), actual);
                Ok(None)
            }
        }
    }

    // --- Typed accessors over a decoded tree ---

    pub fn string_at(&self, path: &str, tree: &Value) -> Result<Option<String>, JPathError> {
        self.extract(path, tree, ScalarKind::String, |s| s.as_str().map(str::to_string))
    }

    pub fn number_at(&self, path: &str, tree: &Value) -> Result<Option<f64>, JPathError> {
        self.extract(path, tree, ScalarKind::Number, |s| s.as_f64())
    }

    pub fn bool_at(&self, path: &str, tree: &Value) -> Result<Option<bool>, JPathError> {
        self.extract(path, tree, ScalarKind::Bool, |s| s.as_bool())
    }

    fn extract<T>(
        &self,
        path: &str,
        tree: &Value,
        expected: ScalarKind,
        unwrap: impl FnOnce(Scalar<'_>) -> Option<T>,
    ) -> Result<Option<T>, JPathError> {
        let Some(scalar) = self.resolve(path, tree)? else {
            return Ok(None);
        };
        unwrap(scalar)
            .map(Some)
            .ok_or_else(|| JPathError::TypeMismatch {
                path: path.to_string(),
                expected,
                actual: scalar.kind(),
            })
    }

    // --- Typed accessors over raw document bytes ---

    pub fn get_string(&self, path: &str, document: &[u8]) -> Result<Option<String>, JPathError> {
        self.string_at(path, &decode(document)?)
    }

    pub fn get_number(&self, path: &str, document: &[u8]) -> Result<Option<f64>, JPathError> {
        self.number_at(path, &decode(document)?)
    }

    pub fn get_bool(&self, path: &str, document: &[u8]) -> Result<Option<bool>, JPathError> {
        self.bool_at(path, &decode(document)?)
    }
}

/// Looks up `key` in `object` and returns its element at `index`.
fn element_at<'v>(
    object: &'v Map<String, Value>,
    key: &str,
    index: usize,
) -> Result<&'v Value, JPathError> {
    match object.get(key) {
        Some(Value::Array(items)) => items.get(index).ok_or_else(|| JPathError::IndexOutOfBounds {
            key: key.to_string(),
            index,
            len: items.len(),
        }),
        other => Err(JPathError::NotAnArray {
            key: key.to_string(),
            actual: other.map_or(JsonKind::Null, JsonKind::of),
        }),
    }
}

/// A builder for creating a `Resolver`.
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    options: ResolverOptions,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_terminal_policy(mut self, policy: TerminalPolicy) -> Self {
        self.options.terminal_policy = policy;
        self
    }

    pub fn build(self) -> Resolver {
        Resolver::with_options(self.options)
    }
}

use dotpath_jpath::{JPathError, Path, Resolver, Scalar, decode};
use serde_json::Value;

/// A JSON document decoded once and queried many times.
///
/// The decoded tree is never mutated, so a `Document` can be shared across threads
/// behind an `Arc` and queried concurrently.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Value,
    resolver: Resolver,
}

impl Document {
    /// Decodes `bytes` with the default resolver options.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, JPathError> {
        Self::with_resolver(bytes, Resolver::default())
    }

    pub fn with_resolver(bytes: &[u8], resolver: Resolver) -> Result<Self, JPathError> {
        let tree = decode(bytes)?;
        log::debug!("Decoded document of {} bytes", bytes.len());
        Ok(Self { tree, resolver })
    }

    /// Wraps a tree decoded elsewhere.
    pub fn from_value(tree: Value) -> Self {
        Self {
            tree,
            resolver: Resolver::default(),
        }
    }

    pub fn tree(&self) -> &Value {
        &self.tree
    }

    pub fn resolve(&self, path: &str) -> Result<Option<Scalar<'_>>, JPathError> {
        self.resolver.resolve(path, &self.tree)
    }

    pub fn resolve_path(&self, path: &Path) -> Result<Option<Scalar<'_>>, JPathError> {
        self.resolver.resolve_path(path, &self.tree)
    }

    pub fn string(&self, path: &str) -> Result<Option<String>, JPathError> {
        self.resolver.string_at(path, &self.tree)
    }

    pub fn number(&self, path: &str) -> Result<Option<f64>, JPathError> {
        self.resolver.number_at(path, &self.tree)
    }

    pub fn bool(&self, path: &str) -> Result<Option<bool>, JPathError> {
        self.resolver.bool_at(path, &self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotpath_jpath::TerminalPolicy;
    use serde_json::json;

    #[test]
    fn test_document_answers_repeated_queries() {
        let doc = Document::from_slice(br#"{"a":{"b":[1,2]},"c":"x"}"#).unwrap();
        assert_eq!(doc.number("a.b[1]").unwrap(), Some(2.0));
        assert_eq!(doc.number("a.b[1]").unwrap(), Some(2.0));
        assert_eq!(doc.string("c").unwrap().as_deref(), Some("x"));
        assert_eq!(doc.bool("missing").unwrap(), None);
    }

    #[test]
    fn test_document_uses_its_resolver() {
        let strict = Resolver::builder()
            .with_terminal_policy(TerminalPolicy::Strict)
            .build();
        let doc = Document::with_resolver(br#"{"a":{}}"#, strict).unwrap();
        assert!(matches!(
            doc.resolve("a"),
            Err(JPathError::NonScalarTerminal { .. })
        ));
    }

    #[test]
    fn test_document_from_value() {
        let doc = Document::from_value(json!({ "n": 7 }));
        let path: Path = "n".parse().unwrap();
        assert_eq!(doc.resolve_path(&path).unwrap(), Some(Scalar::Number(7.0)));
    }

    #[test]
    fn test_malformed_bytes() {
        assert!(matches!(
            Document::from_slice(b"{not json"),
            Err(JPathError::Decode(_))
        ));
    }
}

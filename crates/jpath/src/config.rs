//! Resolver configuration.
use crate::error::JPathError;
use serde::Deserialize;

/// How a path that ends on an object or an array is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalPolicy {
    /// Non-scalar terminals resolve to no value.
    #[default]
    Permissive,
    /// Non-scalar terminals are a `NonScalarTerminal` error.
    Strict,
}

/// Options controlling path resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    pub terminal_policy: TerminalPolicy,
}

impl ResolverOptions {
    /// Loads options from a JSON object such as `{"terminal_policy": "strict"}`.
    /// Missing fields take their defaults.
    pub fn from_json(config: &str) -> Result<Self, JPathError> {
        Ok(serde_json::from_str(config)?)
    }
}

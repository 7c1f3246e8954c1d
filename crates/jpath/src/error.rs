use std::num::ParseIntError;

use thiserror::Error;

use crate::value::{JsonKind, ScalarKind};

#[derive(Error, Debug)]
pub enum JPathError {
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected end of path")]
    EmptyPath,

    #[error("Invalid array index in '{segment}': {source}")]
    IndexParse {
        segment: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Expected object for {}, got {actual}", .key.as_deref().map_or("document root".to_string(), |k| format!("'{}'", k)))]
    ExpectedObject { key: Option<String>, actual: JsonKind },

    #[error("* in path matched key '{key}', which is {actual} rather than an object")]
    ExpectedObjectAfterWildcard { key: String, actual: JsonKind },

    #[error("'{key}' did not point to an array but {actual}")]
    NotAnArray { key: String, actual: JsonKind },

    #[error("Index {index} out of bounds for '{key}' (had {len} elements)")]
    IndexOutOfBounds { key: String, index: usize, len: usize },

    #[error("Expected path '{path}' to point to {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: ScalarKind,
        actual: ScalarKind,
    },

    #[error("Path ends at '{key}', which is {actual} rather than a scalar")]
    NonScalarTerminal { key: String, actual: JsonKind },
}

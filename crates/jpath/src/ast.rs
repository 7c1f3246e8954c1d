//! Defines the parsed form of a dotted path expression.
use std::fmt;
use std::str::FromStr;

use crate::error::JPathError;
use crate::parser::parse_path;

/// A single segment of a dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object key (e.g., `name`).
    Key(String),
    /// The first entry of an object, whatever its key (`*`).
    Wildcard,
    /// An array element under an object key (e.g., `orders[1]`).
    Indexed { key: String, index: usize },
}

impl PathSegment {
    /// The object key this segment looks up, if it names one.
    pub fn key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(k) | PathSegment::Indexed { key: k, .. } => Some(k),
            PathSegment::Wildcard => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{}", k),
            PathSegment::Wildcard => write!(f, "*"),
            PathSegment::Indexed { key, index } => write!(f, "{}[{}]", key, index),
        }
    }
}

/// A parsed path: one or more segments, applied left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Parses a dotted path such as `foo.*.bar[1]`.
    pub fn parse(input: &str) -> Result<Self, JPathError> {
        parse_path(input)
    }

    pub(crate) fn from_segments(segments: Vec<PathSegment>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a parsed path holds at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for Path {
    type Err = JPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

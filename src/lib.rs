//! Read string, number, and boolean values out of JSON documents with dotted paths.
//!
//! ```
//! let doc = br#"{"foo":{"123":{"bar":["41","42"]}}}"#;
//! assert_eq!(dotpath::get_string("foo.*.bar[1]", doc).unwrap().as_deref(), Some("42"));
//! ```
//!
//! The path engine lives in `dotpath-jpath`; this crate re-exports it and adds
//! [`Document`] for running many lookups against one decoded document.

pub mod document;

pub use document::Document;
pub use dotpath_jpath::{
    JPathError, JsonKind, Path, PathSegment, Resolver, ResolverBuilder, ResolverOptions, Scalar,
    ScalarKind, TerminalPolicy, bool_at, decode, get_bool, get_number, get_string, number_at,
    resolve, resolve_path, string_at,
};

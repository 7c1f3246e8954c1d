//! A `nom`-based parser for dotted path expressions.
use super::ast::{Path, PathSegment};
use crate::error::JPathError;
use nom::{
    IResult, Parser,
    bytes::complete::take_while,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize},
    sequence::{delimited, pair},
};

// --- Main Public Parser ---

/// Parses a full path into its segments.
///
/// A trailing `.` adds no segment, so `foo.` and `foo` are the same path. An interior
/// empty segment (`a..b`) is the key `""`.
pub fn parse_path(input: &str) -> Result<Path, JPathError> {
    let mut segments = Vec::new();
    let mut rest = input;
    loop {
        let (head, tail) = split_head(rest)?;
        segments.push(if head == "*" {
            PathSegment::Wildcard
        } else {
            classify_segment(head)?
        });
        if tail.is_empty() {
            break;
        }
        rest = tail;
    }
    Ok(Path::from_segments(segments))
}

/// Splits `path` on its first `.` into the head segment and the remaining path.
pub fn split_head(path: &str) -> Result<(&str, &str), JPathError> {
    if path.is_empty() {
        return Err(JPathError::EmptyPath);
    }
    Ok(path.split_once('.').unwrap_or((path, "")))
}

/// Classifies one segment as an indexed key (`name[3]`) or a plain key.
///
/// Anything that is not exactly `<name>[<digits>]` is a plain key, brackets included.
pub fn classify_segment(head: &str) -> Result<PathSegment, JPathError> {
    match indexed_key(head) {
        Ok((_, (key, digits))) => {
            let index = digits
                .parse::<usize>()
                .map_err(|source| JPathError::IndexParse {
                    segment: head.to_string(),
                    source,
                })?;
            Ok(PathSegment::Indexed {
                key: key.to_string(),
                index,
            })
        }
        Err(_) => Ok(PathSegment::Key(head.to_string())),
    }
}

// --- Combinators ---

// The sign is accepted here so that `a[-1]` reports a bad index instead of becoming a key.
fn index_digits(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1)).parse(input)
}

fn indexed_key(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(pair(
        take_while(|c: char| c != '['),
        delimited(char('['), index_digits, char(']')),
    ))
    .parse(input)
}

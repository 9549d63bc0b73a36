/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod sanitize;
pub use sanitize::{
    BRANCH_PREFIX, branch_path, collapse_empty_buckets, sanitize_all, statsd_sanitize,
    strip_dots,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid graphic char: {0}")]
    InvalidGraphic(char),
    #[error("not allowed char: {0:?}")]
    NotAllowed(char),
}

#[inline]
fn char_allowed_in_bucket(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.')
}

fn chars_allowed_in_bucket(s: &str) -> Result<(), ParseError> {
    for c in s.chars() {
        if char_allowed_in_bucket(c) {
            continue;
        }
        return if c.is_ascii_graphic() {
            Err(ParseError::InvalidGraphic(c))
        } else {
            Err(ParseError::NotAllowed(c))
        };
    }
    Ok(())
}

/// A dot delimited statsd bucket name.
///
/// Only ASCII letters, digits, `_`, `-` and `.` may appear in it, which is the
/// key charset a statsd collector keeps after its own sanitization.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct BucketPath(String);

impl BucketPath {
    /// Caller must make sure that every char passes `char_allowed_in_bucket`.
    pub(crate) fn from_sanitized(s: String) -> Self {
        debug_assert!(chars_allowed_in_bucket(&s).is_ok());
        BucketPath(s)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for BucketPath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chars_allowed_in_bucket(s)?;
        Ok(BucketPath(s.to_string()))
    }
}

impl AsRef<str> for BucketPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BucketPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ok() {
        let path = BucketPath::from_str("pipeline.team-a.app_1").unwrap();
        assert_eq!(path.as_str(), "pipeline.team-a.app_1");
        assert_eq!(path.to_string(), "pipeline.team-a.app_1");

        let path = BucketPath::from_str("").unwrap();
        assert!(path.is_empty());
        assert_eq!(path, BucketPath::default());
    }

    #[test]
    fn parse_err() {
        assert_eq!(
            BucketPath::from_str("team/app"),
            Err(ParseError::InvalidGraphic('/'))
        );
        assert_eq!(
            BucketPath::from_str("a:b"),
            Err(ParseError::InvalidGraphic(':'))
        );
        assert_eq!(
            BucketPath::from_str("sub job"),
            Err(ParseError::NotAllowed(' '))
        );
        assert_eq!(
            BucketPath::from_str("caf\u{e9}"),
            Err(ParseError::NotAllowed('\u{e9}'))
        );
    }

    #[test]
    fn into_string() {
        let path = BucketPath::from_str("a.b").unwrap();
        assert_eq!(path.into_string(), "a.b".to_string());
    }
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

//! Conversion of a hierarchical job path like `team/app/main` into a statsd
//! bucket name like `team.app.main`.
//!
//! The stages must run in order: dots from the input are removed before `/`
//! is turned into the bucket delimiter, and empty buckets are only collapsed
//! after that.

use super::{BucketPath, char_allowed_in_bucket};

/// Root bucket of every job path.
pub const BRANCH_PREFIX: &str = "pipeline.";

/// Same set as the `\s` regex class.
#[inline]
fn is_key_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn strip_dots(key: &str) -> String {
    key.replace('.', "")
}

/// Sanitize a key the same way a statsd collector does, except that `/` is
/// kept as a bucket delimiter.
///
/// Each whitespace run becomes a single `_`, `/` becomes `.`, and any other
/// char outside `[A-Za-z0-9_\-.]` is dropped.
pub fn statsd_sanitize(key: &str) -> String {
    let mut s = String::with_capacity(key.len());
    let mut in_whitespace = false;
    for c in key.chars() {
        if is_key_whitespace(c) {
            if !in_whitespace {
                s.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        match c {
            '/' => s.push('.'),
            c if char_allowed_in_bucket(c) => s.push(c),
            _ => {}
        }
    }
    s
}

pub fn collapse_empty_buckets(key: &str) -> String {
    let mut s = String::with_capacity(key.len());
    for c in key.chars() {
        if c == '.' && s.ends_with('.') {
            continue;
        }
        s.push(c);
    }
    s
}

pub fn sanitize_all(key: &str) -> String {
    collapse_empty_buckets(&statsd_sanitize(&strip_dots(key)))
}

/// Get the bucket path of a job, rooted at [`BRANCH_PREFIX`].
///
/// A job path that is empty or made only of separators yields `pipeline.`.
pub fn branch_path(full_job_path: &str) -> BucketPath {
    let sanitized = sanitize_all(full_job_path);
    let mut path = String::with_capacity(BRANCH_PREFIX.len() + sanitized.len());
    path.push_str(BRANCH_PREFIX);
    path.push_str(&sanitized);
    // a leading delimiter in the job path must not add an empty bucket
    BucketPath::from_sanitized(collapse_empty_buckets(&path))
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Tag filter expressions

/// Separator between the terms of a tag expression.
const AND: &str = "&&";
/// Prefix negating a term of a tag expression.
const NOT: &str = "!";

/// Builds the boolean tag expression understood by the `tags` search filter.
///
/// Included tags are joined with `&&` in their given order, then every
/// excluded tag is appended as `!tag`. If there are no included tags, the
/// expression starts directly with the first negated term.
///
/// Tag names are inserted verbatim, without escaping or validation.
///
/// ```
/// use misp_api::chain;
///
/// assert_eq!(chain(&["a", "c"], &["b"]), "a&&c&&!b");
/// assert_eq!(chain::<&str>(&[], &["b"]), "!b");
/// assert_eq!(chain::<&str>(&[], &[]), "");
/// ```
pub fn chain<S: AsRef<str>>(include: &[S], exclude: &[S]) -> String {
    let mut expr = String::new();

    for tag in include {
        if !expr.is_empty() {
            expr.push_str(AND);
        }
        expr.push_str(tag.as_ref());
    }

    for (i, tag) in exclude.iter().enumerate() {
        if i > 0 || !expr.is_empty() {
            expr.push_str(AND);
        }
        expr.push_str(NOT);
        expr.push_str(tag.as_ref());
    }

    expr
}

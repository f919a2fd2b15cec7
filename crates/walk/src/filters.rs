//! Built-in filter implementations.
//!
//! Registered in this order by [`install`], catch-all last:
//!
//! | Token      | Filter                                          |
//! |------------|-------------------------------------------------|
//! | `*`        | every entry of a map, every element otherwise   |
//! | `[...]`    | restricted subscript expression                 |
//! | `~regex`   | map values whose key matches `regex`            |
//! | `12`       | element at a non-negative index                 |
//! | anything   | map lookup, or integer index with wrap-around   |
use crate::error::WalkError;
use crate::registry::{Filter, Registry, Transform, compile_prefix};
use crate::subscript;
use amble_node::Node;
use regex::Regex;
use std::sync::{Arc, LazyLock};

static WILDCARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*]").expect("BUG: invalid WILDCARD_RE regex literal"));

static SUBSCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.*\]$").expect("BUG: invalid SUBSCRIPT_RE regex literal"));

static KEY_REGEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^~").expect("BUG: invalid KEY_REGEX_RE regex literal"));

static INDEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("BUG: invalid INDEX_RE regex literal"));

pub(crate) static CATCH_ALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^").expect("BUG: invalid CATCH_ALL_RE regex literal"));

/// Registers the built-in filters on `registry`.
pub fn install<N: Node + 'static>(registry: &mut Registry<N>) {
    registry.push(builtin("[*]", &WILDCARD_RE, wildcard::<N>));
    registry.push(builtin(r"\[.*\]$", &SUBSCRIPT_RE, by_subscript::<N>));
    registry.push(builtin("~", &KEY_REGEX_RE, by_key_regex::<N>));
    registry.push(builtin("[0-9]+$", &INDEX_RE, by_index::<N>));
    registry.set_fallback(Arc::new(by_key::<N>));
}

fn builtin<N, F>(pattern: &str, matcher: &Regex, transform: F) -> Filter<N>
where
    F: Fn(&N, &str) -> Result<Vec<N>, WalkError> + Send + Sync + 'static,
{
    let transform: Transform<N> = Arc::new(transform);
    Filter::with_matcher(pattern, matcher.clone(), transform)
}

/// Converts a possibly negative index into a position, counting negative
/// indices back from the end.
pub(crate) fn resolve_index(index: i64, len: usize) -> Result<usize, WalkError> {
    let position = if index < 0 {
        i64::try_from(len).ok().and_then(|l| l.checked_add(index))
    } else {
        Some(index)
    };
    position
        .and_then(|p| usize::try_from(p).ok())
        .filter(|&p| p < len)
        .ok_or(WalkError::IndexOutOfRange { index, len })
}

fn element_at<N: Node>(node: &N, index: i64) -> Result<N, WalkError> {
    let len = node.len();
    let position = resolve_index(index, len)?;
    node.get_index(position)
        .ok_or(WalkError::IndexOutOfRange { index, len })
}

// --- Built-in Filter Implementations ---

fn wildcard<N: Node>(node: &N, _token: &str) -> Result<Vec<N>, WalkError> {
    if node.is_keyed() {
        return Ok(node
            .entries()
            .into_iter()
            .map(|(key, value)| N::entry(&key, value))
            .collect());
    }
    if node.is_iterable() {
        return Ok(node.elements().collect());
    }
    Ok(Vec::new())
}

fn by_subscript<N: Node>(node: &N, token: &str) -> Result<Vec<N>, WalkError> {
    Ok(subscript::evaluate(node, token)?.into_iter().collect())
}

fn by_key_regex<N: Node>(node: &N, token: &str) -> Result<Vec<N>, WalkError> {
    if !node.is_keyed() {
        return Ok(Vec::new());
    }
    let pattern = token.strip_prefix('~').unwrap_or(token);
    let re = compile_prefix(pattern)?;
    Ok(node
        .entries()
        .into_iter()
        .filter(|(key, _)| re.is_match(key))
        .map(|(_, value)| value)
        .collect())
}

fn by_index<N: Node>(node: &N, token: &str) -> Result<Vec<N>, WalkError> {
    if !node.is_indexed() {
        return Ok(Vec::new());
    }
    let index: i64 = token.parse().map_err(|_| WalkError::IndexOutOfRange {
        index: i64::MAX,
        len: node.len(),
    })?;
    Ok(vec![element_at(node, index)?])
}

fn by_key<N: Node>(node: &N, token: &str) -> Result<Vec<N>, WalkError> {
    if node.is_keyed() {
        return node
            .get_key(token)
            .map(|value| vec![value])
            .ok_or_else(|| WalkError::key_not_found(token));
    }
    if node.is_indexed() {
        return match token.parse::<i64>() {
            Ok(index) => Ok(vec![element_at(node, index)?]),
            Err(_) => Ok(Vec::new()),
        };
    }
    Ok(Vec::new())
}

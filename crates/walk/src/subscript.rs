//! A `nom`-based parser and interpreter for bracket subscripts.
//!
//! The grammar is deliberately small: integer indices, slices and quoted keys,
//! chained left to right. Nothing in an expression can reach outside the node
//! it is applied to.
//!
//! ```text
//! subscripts := subscript+
//! subscript  := "[" (slice | index | key) "]"
//! slice      := index? ":" index? (":" index?)?
//! index      := "-"? digits
//! key        := "'" [^']* "'" | '"' [^"]* '"'
//! ```
use crate::error::WalkError;
use crate::filters::resolve_index;
use amble_node::Node;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, i64 as nom_i64, multispace0},
    combinator::{map, opt},
    multi::many1,
    sequence::{delimited, preceded},
};

/// One bracketed access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscript {
    /// `[2]`, `[-1]`
    Index(i64),
    /// `[1:3]`, `[::-1]`
    Slice {
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    },
    /// `['name']`
    Key(String),
}

// --- Main Public Parser ---

pub fn parse_subscripts(input: &str) -> Result<Vec<Subscript>, WalkError> {
    match subscripts(input.trim()) {
        Ok(("", parsed)) => Ok(parsed),
        Ok((rem, _)) => Err(WalkError::unsupported(
            input,
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(WalkError::unsupported(input, e.to_string())),
    }
}

// --- Combinators ---

fn subscripts(input: &str) -> IResult<&str, Vec<Subscript>> {
    many1(ws(subscript)).parse(input)
}

fn subscript(input: &str) -> IResult<&str, Subscript> {
    delimited(char('['), ws(alt((slice, index, key))), char(']')).parse(input)
}

fn integer(input: &str) -> IResult<&str, i64> {
    ws(nom_i64).parse(input)
}

fn index(input: &str) -> IResult<&str, Subscript> {
    map(integer, Subscript::Index).parse(input)
}

fn slice(input: &str) -> IResult<&str, Subscript> {
    map(
        (
            opt(integer),
            char(':'),
            opt(integer),
            opt(preceded(char(':'), opt(integer))),
        ),
        |(start, _, stop, step)| Subscript::Slice {
            start,
            stop,
            step: step.flatten(),
        },
    )
    .parse(input)
}

fn key(input: &str) -> IResult<&str, Subscript> {
    map(
        alt((
            delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
            delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        )),
        |s: &str| Subscript::Key(s.to_string()),
    )
    .parse(input)
}

/// A combinator that takes a parser `inner` and produces a parser that consumes surrounding whitespace.
fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

// --- Evaluation ---

/// Parses `expression` and applies it to `node`.
///
/// Returns `Ok(None)` when some subscript meets a node lacking the capability
/// it needs (a key on a sequence, an index on a scalar).
pub fn evaluate<N: Node>(node: &N, expression: &str) -> Result<Option<N>, WalkError> {
    let parsed = parse_subscripts(expression)?;
    apply_all(node, &parsed, expression)
}

pub fn apply_all<N: Node>(
    node: &N,
    subscripts: &[Subscript],
    expression: &str,
) -> Result<Option<N>, WalkError> {
    let mut current = node.clone();
    for subscript in subscripts {
        match apply(&current, subscript, expression)? {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

fn apply<N: Node>(
    node: &N,
    subscript: &Subscript,
    expression: &str,
) -> Result<Option<N>, WalkError> {
    match subscript {
        Subscript::Index(index) => {
            if !node.is_indexed() {
                return Ok(None);
            }
            let len = node.len();
            let position = resolve_index(*index, len)?;
            node.get_index(position)
                .map(Some)
                .ok_or(WalkError::IndexOutOfRange { index: *index, len })
        }
        Subscript::Slice { start, stop, step } => {
            if !node.is_indexed() {
                return Ok(None);
            }
            let positions = slice_positions(node.len(), *start, *stop, *step)
                .ok_or_else(|| WalkError::unsupported(expression, "slice step cannot be zero"))?;
            let items = positions
                .into_iter()
                .filter_map(|p| node.get_index(p))
                .collect();
            Ok(Some(N::sequence(items)))
        }
        Subscript::Key(key) => {
            if !node.is_keyed() {
                return Ok(None);
            }
            node.get_key(key)
                .map(Some)
                .ok_or_else(|| WalkError::key_not_found(key.as_str()))
        }
    }
}

/// Positions selected by a slice over a sequence of length `len`. Bounds are
/// clamped and negative bounds count from the end. `None` for a zero step.
fn slice_positions(
    len: usize,
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> Option<Vec<usize>> {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let step = step.unwrap_or(1);
    if step == 0 {
        return None;
    }

    let mut positions = Vec::new();
    if step > 0 {
        let clamp = |v: i64| if v < 0 { v.saturating_add(len).max(0) } else { v.min(len) };
        let mut i = start.map(clamp).unwrap_or(0);
        let stop = stop.map(clamp).unwrap_or(len);
        while i < stop {
            positions.push(i as usize);
            i = match i.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
    } else {
        let clamp = |v: i64| {
            if v < 0 {
                v.saturating_add(len).max(-1)
            } else {
                v.min(len - 1)
            }
        };
        let mut i = start.map(clamp).unwrap_or(len - 1);
        let stop = stop.map(clamp).unwrap_or(-1);
        while i > stop {
            positions.push(i as usize);
            i = match i.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
    }
    Some(positions)
}

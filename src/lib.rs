//! Composable path queries over maps, sequences and scalars.
//!
//! ```
//! use amble::{Registry, Step, walk};
//! use serde_json::json;
//!
//! let data = json!({ "clients": [ { "likes": ["bacon", "egg", "coffee"] } ] });
//! let registry = Registry::default();
//! let found = walk(&registry, &data, &["clients".into(), "0".into(), "likes/1".into()]).unwrap();
//! assert_eq!(found, vec![json!("egg")]);
//! ```
//!
//! This crate re-exports the member crates:
//! - `amble-node`: the [`Node`] capability model and its `serde_json` implementation
//! - `amble-walk`: the filter [`Registry`], the tokenizer and the [`Walker`]

pub use amble_node::{Node, NodeKind};
pub use amble_walk::{
    Callable, Filter, FilterApplication, Registry, Step, Subscript, Transform, WalkError,
    WalkOptions, Walker, filters, parse_subscripts, tokenize, walk,
};

/// Walks `steps` from a JSON value using the built-in filters.
///
/// Builds a fresh registry per call; hold a [`Registry`] and a [`Walker`]
/// when running many queries.
pub fn walk_json(
    root: &serde_json::Value,
    steps: &[Step<serde_json::Value>],
    options: WalkOptions,
) -> Result<Vec<serde_json::Value>, WalkError> {
    let registry = Registry::with_builtins();
    log::trace!("walk_json with delimiter '{}'", options.delimiter);
    Walker::new(&registry).with_options(options).walk(root, steps)
}

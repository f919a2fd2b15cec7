//! A small path-query engine over capability-polymorphic trees.
//!
//! A query is a list of [`Step`]s. Path strings are split on a delimiter and
//! every token is dispatched to the first matching filter of a [`Registry`];
//! callables and the `Sequence`, `Branch` and `Guard` combinators compose
//! those lookups per item. Values are reached only through the
//! [`amble_node::Node`] trait.

pub mod error;
pub mod filters;
pub mod registry;
pub mod step;
pub mod subscript;
pub mod tokenizer;
pub mod walker;

// --- Public API ---
pub use error::WalkError;
pub use registry::{Filter, Registry, Transform};
pub use step::{Callable, Step};
pub use subscript::{Subscript, parse_subscripts};
pub use tokenizer::{FilterApplication, tokenize};
pub use walker::{WalkOptions, Walker, walk};

#[cfg(test)]
mod tests {
    use super::*;
    use amble_node::Node;
    use serde_json::{Value, json};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn data() -> Value {
        json!({
            "clients": [
                { "name": "Paul", "age": 28, "likes": ["bacon", "egg", "coffee"] },
                { "name": "Louis", "age": 18, "likes": ["toast", "jam", "juice"] },
                { "name": "Suzane", "age": 35, "likes": ["bacon", "pancake", "tea"] }
            ]
        })
    }

    #[test]
    fn test_sequence_drills_down_per_item() {
        init();
        let registry = Registry::default();
        let steps = [
            Step::path("clients"),
            Step::path("*"),
            Step::sequence(["likes".into(), Step::path("[-1]")]),
        ];
        let out = walk(&registry, &data(), &steps).unwrap();
        assert_eq!(out, vec![json!("coffee"), json!("juice"), json!("tea")]);
    }

    #[test]
    fn test_branch_fans_out_per_item() {
        init();
        let registry = Registry::default();
        let steps = [
            Step::path("clients/*"),
            Step::branch(["name".into(), "age".into()]),
        ];
        let out = walk(&registry, &data(), &steps).unwrap();
        assert_eq!(
            out,
            vec![
                json!("Paul"),
                json!(28),
                json!("Louis"),
                json!(18),
                json!("Suzane"),
                json!(35)
            ]
        );
    }

    #[test]
    fn test_guard_keeps_passing_items_only() {
        init();
        let registry = Registry::default();
        let likes_bacon = Step::call(|client: &Value| {
            let likes = client.get_key("likes").unwrap_or(Value::Null);
            if likes.elements().any(|l| l == json!("bacon")) {
                vec![likes]
            } else {
                Vec::new()
            }
        });
        let steps = [
            Step::path("clients/*"),
            Step::guard([(likes_bacon, Step::path("name"))]),
        ];
        let out = walk(&registry, &data(), &steps).unwrap();
        assert_eq!(out, vec![json!("Paul"), json!("Suzane")]);
    }

    #[test]
    fn test_try_call_errors_abort() {
        init();
        let registry = Registry::default();
        let steps = [
            Step::path("clients"),
            Step::try_call(|_: &Value| Err(WalkError::filter("custom", "boom"))),
        ];
        assert_eq!(
            walk(&registry, &data(), &steps).unwrap_err(),
            WalkError::filter("custom", "boom")
        );
    }
}

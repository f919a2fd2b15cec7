//! [`Node`] implementation for `serde_json::Value`.
//!
//! Objects are maps, arrays are sequences, everything else is a scalar.
//! Strings are scalars: they are neither indexed nor iterable.
use crate::node::{Node, NodeKind};
use serde_json::Value;

impl Node for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Object(_) => NodeKind::Map,
            Value::Array(_) => NodeKind::Sequence,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                NodeKind::Scalar
            }
        }
    }

    fn get_key(&self, key: &str) -> Option<Self> {
        self.as_object().and_then(|map| map.get(key)).cloned()
    }

    fn get_index(&self, index: usize) -> Option<Self> {
        self.as_array().and_then(|arr| arr.get(index)).cloned()
    }

    fn len(&self) -> usize {
        self.as_array().map(Vec::len).unwrap_or(0)
    }

    fn entries(&self) -> Vec<(String, Self)> {
        self.as_object()
            .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }

    fn elements(&self) -> Box<dyn Iterator<Item = Self> + '_> {
        match self {
            Value::Array(arr) => Box::new(arr.iter().cloned()),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// A map entry is rendered as the two-element array `[key, value]`.
    fn entry(key: &str, value: Self) -> Self {
        Value::Array(vec![Value::String(key.to_string()), value])
    }

    fn sequence(items: Vec<Self>) -> Self {
        Value::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kinds_follow_json_shape() {
        assert_eq!(json!({}).kind(), NodeKind::Map);
        assert_eq!(json!([]).kind(), NodeKind::Sequence);
        assert_eq!(json!("text").kind(), NodeKind::Scalar);
        assert_eq!(json!(3).kind(), NodeKind::Scalar);
        assert_eq!(json!(null).kind(), NodeKind::Scalar);
    }

    #[test]
    fn test_capabilities_of_map_and_sequence() {
        let map = json!({ "a": 1 });
        assert!(map.is_keyed());
        assert!(!map.is_indexed());
        assert!(!map.is_iterable());

        let seq = json!([1, 2]);
        assert!(!seq.is_keyed());
        assert!(seq.is_indexed());
        assert!(seq.is_iterable());
    }

    #[test]
    fn test_strings_are_not_indexable() {
        let s = json!("bacon");
        assert!(!s.is_indexed());
        assert_eq!(s.get_index(0), None);
        assert_eq!(s.len(), 0);
        assert_eq!(s.elements().count(), 0);
    }

    #[test]
    fn test_accessors() {
        let data = json!({ "likes": ["bacon", "egg"] });
        let likes = data.get_key("likes").unwrap();
        assert_eq!(likes.len(), 2);
        assert_eq!(likes.get_index(1), Some(json!("egg")));
        assert_eq!(likes.get_index(2), None);
        assert_eq!(data.get_key("missing"), None);
        assert_eq!(likes.get_key("likes"), None);
    }

    #[test]
    fn test_entries_and_constructors() {
        let data = json!({ "age": 28, "name": "Paul" });
        let entries = data.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains(&("name".to_string(), json!("Paul"))));

        assert_eq!(Value::entry("age", json!(28)), json!(["age", 28]));
        assert_eq!(Value::sequence(vec![json!(1), json!(2)]), json!([1, 2]));
    }
}

#![allow(dead_code)]

pub mod fixtures;

use amble::{Registry, Step, WalkError, walk};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Walks `steps` with the built-in registry.
pub fn query(data: &Value, steps: &[Step<Value>]) -> Result<Vec<Value>, WalkError> {
    init_logger();
    let registry = Registry::default();
    walk(&registry, data, steps)
}

/// Sorts by serialized form so results can be compared as multisets.
pub fn sorted(mut values: Vec<Value>) -> Vec<Value> {
    values.sort_by_key(|v| v.to_string());
    values
}

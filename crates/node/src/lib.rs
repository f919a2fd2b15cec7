//! The capability contract for values an amble walk can traverse.
//!
//! Filters never inspect concrete types. They ask a [`Node`] what it can do
//! (keyed access, indexed access, iteration) and degrade to an empty result
//! when a capability is missing, which lets heterogeneous trees be queried
//! without per-branch type checks.

pub mod json;
pub mod node;

pub use node::{Node, NodeKind};

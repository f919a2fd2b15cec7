//! Defines the [`Node`] trait and its [`NodeKind`] tag.
use std::fmt;

/// The shape of a node, used by filters to decide which capabilities apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Keyed access by string key.
    Map,
    /// Indexed access by position, iterable in order.
    Sequence,
    /// A leaf value: string, number, boolean, null.
    Scalar,
    /// Anything else. Implementations choose its capabilities explicitly.
    Other,
}

/// The universal contract for a node in a read-only structured value tree.
///
/// The walk engine is written exclusively against this trait. Capability
/// predicates default to what [`Node::kind`] implies; a type reporting
/// [`NodeKind::Other`] can override them individually (an iterable but
/// unindexed collection, for example).
///
/// Accessors return owned nodes. Trees that hold children behind shared
/// pointers or references can make this a cheap copy.
pub trait Node: Clone + fmt::Debug {
    /// The shape of this node.
    fn kind(&self) -> NodeKind;

    /// True when [`Node::get_key`] and [`Node::entries`] are meaningful.
    fn is_keyed(&self) -> bool {
        self.kind() == NodeKind::Map
    }

    /// True when [`Node::get_index`] and [`Node::len`] are meaningful.
    fn is_indexed(&self) -> bool {
        self.kind() == NodeKind::Sequence
    }

    /// True when [`Node::elements`] yields the node's members.
    fn is_iterable(&self) -> bool {
        self.kind() == NodeKind::Sequence
    }

    /// The child stored under `key`, or `None` when the key is absent or the
    /// node is not keyed.
    fn get_key(&self, key: &str) -> Option<Self>;

    /// The child at position `index`, or `None` when out of bounds or the node
    /// is not indexed.
    fn get_index(&self, index: usize) -> Option<Self>;

    /// Number of indexable children. Zero for nodes that are not indexed.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All `(key, child)` pairs of a keyed node, in the node's own order.
    /// Empty for nodes that are not keyed.
    fn entries(&self) -> Vec<(String, Self)>;

    /// The members of an iterable node, in order.
    fn elements(&self) -> Box<dyn Iterator<Item = Self> + '_>;

    /// Builds the node representing one `(key, value)` pair of a map.
    fn entry(key: &str, value: Self) -> Self;

    /// Builds a sequence node holding `items`.
    fn sequence(items: Vec<Self>) -> Self;
}

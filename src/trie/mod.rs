pub mod iter;
mod keys;
mod node;

pub use iter::Matches;

/// Anything that can be walked through the trie one character at a time.
pub trait Key {
    fn code_points(&self) -> impl Iterator<Item = char> + '_;
}

/// A single position in the trie.
///
/// Children are kept in the order their characters were first inserted,
/// lookups depend on that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<V> {
    pub(crate) value: Option<V>,
    pub(crate) children: Vec<(char, Node<V>)>,
}

/// Prefix index mapping strings to values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<V> {
    root: Node<V>,
    length: usize,
}

/// One match returned by a prefix lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry<'a, V> {
    pub key: String,
    pub value: &'a V,
}

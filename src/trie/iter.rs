use smallvec::SmallVec;

use super::{Entry, Key, Node, Trie};

/// Depth-first walk below a prefix node.
///
/// Children are pushed in insertion order, so the most recently inserted
/// sibling subtree is explored first.
#[must_use]
#[derive(Debug, Clone)]
pub struct Matches<'a, V> {
    stack: SmallVec<[(String, &'a Node<V>); 16]>,
}

impl<'a, V> Matches<'a, V> {
    pub(super) fn new(prefix: String, node: &'a Node<V>) -> Self {
        let mut stack = SmallVec::new();
        stack.push((prefix, node));
        Self { stack }
    }

    pub(super) fn empty() -> Self {
        Self {
            stack: SmallVec::new(),
        }
    }
}

impl<'a, V> Iterator for Matches<'a, V> {
    type Item = Entry<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            for (c, child) in &node.children {
                let mut path = String::with_capacity(key.len() + c.len_utf8());
                path.push_str(&key);
                path.push(*c);
                self.stack.push((path, child));
            }
            if let Some(value) = node.value.as_ref() {
                return Some(Entry { key, value });
            }
        }
        None
    }
}

impl<K: Key, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: Key, V> Extend<(K, V)> for Trie<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}

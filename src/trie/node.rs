use super::{Entry, Key, Matches, Node, Trie};

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node {
            value: None,
            children: Vec::new(),
        }
    }
}

impl<V> Node<V> {
    fn child(&self, c: char) -> Option<&Node<V>> {
        self.children
            .iter()
            .find_map(|(k, child)| (*k == c).then_some(child))
    }

    fn child_or_insert(&mut self, c: char) -> &mut Node<V> {
        let index = match self.children.iter().position(|(k, _)| *k == c) {
            Some(index) => index,
            None => {
                self.children.push((c, Node::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }

    fn descend<K: Key + ?Sized>(&self, key: &K) -> Option<&Node<V>> {
        let mut current_node = self;
        for c in key.code_points() {
            current_node = current_node.child(c)?;
        }
        Some(current_node)
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Trie {
            root: Node::default(),
            length: 0,
        }
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Stores `value` under `key`, replacing any value already there.
    ///
    /// Every call counts towards [`Trie::len`], including overwrites.
    pub fn insert<K: Key + ?Sized>(&mut self, key: &K, value: V) -> &mut Self {
        let mut current_node = &mut self.root;
        for c in key.code_points() {
            current_node = current_node.child_or_insert(c);
        }
        current_node.value = Some(value);
        self.length += 1;
        self
    }

    pub fn get<K: Key + ?Sized>(&self, key: &K) -> Option<&V> {
        self.root.descend(key)?.value.as_ref()
    }

    pub fn contains_key<K: Key + ?Sized>(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Every entry whose key starts with `prefix`.
    ///
    /// An empty prefix matches the whole trie.
    pub fn lookup(&self, prefix: &str) -> Vec<Entry<'_, V>> {
        self.matches(prefix).collect()
    }

    /// Lazy form of [`Trie::lookup`].
    pub fn matches(&self, prefix: &str) -> Matches<'_, V> {
        match self.root.descend(prefix) {
            Some(node) => Matches::new(prefix.to_owned(), node),
            None => Matches::empty(),
        }
    }

    /// Number of insertions performed, not the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

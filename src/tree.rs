//! The radix tree engine.
//!
//! This module contains the public [`RadixTree`] and the four tree
//! algorithms: insert with edge splitting, search, in-place update, and
//! delete with bottom-up edge merging.

use crate::keys::VectorKey;
use crate::label::Label;
use crate::node::Node;
use crate::Error;

/// A mutable radix tree mapping byte-sequence keys to values of `V`.
///
/// Chains of single-child nodes are compressed into one edge carrying a
/// multi-symbol label, so a set of keys sharing a prefix stores that
/// prefix once. Every operation walks from the root, consuming the key
/// and picking the next edge through a per-node dispatch table in O(1).
///
/// ## Examples
///
/// ```rust
/// use radix_map::RadixTree;
///
/// let mut tree = RadixTree::new();
/// tree.insert("rubens", 4);
/// tree.insert("ruber", 5);
/// tree.insert("rubicon", 6);
///
/// assert_eq!(tree.get("ruber"), Some(&5));
/// assert_eq!(tree.remove("ruber"), Some(5));
/// assert_eq!(tree.get("ruber"), None);
/// assert_eq!(tree.get("rubicon"), Some(&6));
/// ```
///
/// Keys are anything convertible into [`VectorKey`]: string slices,
/// `String`s, byte slices, or unsigned integers (stored big-endian). The
/// empty key is not storable; inserting it is a no-op.
///
/// The tree is single-threaded by design: no internal locking, and no
/// operation suspends or blocks.
pub struct RadixTree<V> {
    root: Node<V>,
    size: usize,
}

/// What a finished level of the delete recursion tells its caller: keep
/// the child node as-is (possibly mutated), or prune the edge leading to
/// it because nothing is left below.
enum Pruning {
    Keep,
    Prune,
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RadixTree<V> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            size: 0,
        }
    }

    /// Insert a key-value pair (generic version).
    ///
    /// If the key is already present its value is overwritten; otherwise
    /// the minimal new structure is created, splitting an existing edge
    /// when the new key shares a partial prefix with it.
    ///
    /// # Returns
    ///
    /// - `Some(old_value)` if a previous value was replaced
    /// - `None` if this was a new key
    #[inline]
    pub fn insert<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: Into<VectorKey>,
    {
        self.insert_k(&key.into(), value)
    }

    /// Insert a key-value pair using a key reference (direct version).
    #[inline]
    pub fn insert_k(&mut self, key: &VectorKey, value: V) -> Option<V> {
        let suffix = key.as_slice();
        if suffix.is_empty() {
            // The root is never terminal; the empty key is not storable.
            return None;
        }
        let replaced = Self::insert_recurse(&mut self.root, suffix, value);
        if replaced.is_none() {
            self.size += 1;
        }
        replaced
    }

    /// Get a value by key (generic version).
    #[inline]
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: Into<VectorKey>,
    {
        self.get_k(&key.into())
    }

    /// Get a value by key reference (direct version).
    ///
    /// Returns `None` both for keys that were never inserted and for keys
    /// that are only a prefix of longer stored keys.
    pub fn get_k(&self, key: &VectorKey) -> Option<&V> {
        let mut cur_node = &self.root;
        let mut suffix = key.as_slice();
        while !suffix.is_empty() {
            let edge = cur_node.edges.seek(suffix[0])?;
            if !suffix.starts_with(edge.label.as_ref()) {
                return None;
            }
            suffix = &suffix[edge.label.len()..];
            cur_node = &edge.target;
        }
        // Exact consumption is not enough: the landing node must be
        // terminal, or the key was never itself inserted.
        cur_node.value.as_ref()
    }

    /// Get a mutable reference to a value by key (generic version).
    #[inline]
    pub fn get_mut<K>(&mut self, key: K) -> Option<&mut V>
    where
        K: Into<VectorKey>,
    {
        self.get_mut_k(&key.into())
    }

    /// Get a mutable reference to a value by key reference (direct
    /// version).
    pub fn get_mut_k(&mut self, key: &VectorKey) -> Option<&mut V> {
        let mut cur_node = &mut self.root;
        let mut suffix = key.as_slice();
        while !suffix.is_empty() {
            let edge = cur_node.edges.seek_mut(suffix[0])?;
            if !suffix.starts_with(edge.label.as_ref()) {
                return None;
            }
            suffix = &suffix[edge.label.len()..];
            cur_node = &mut edge.target;
        }
        cur_node.value.as_mut()
    }

    /// Overwrite the value of an existing key (generic version).
    ///
    /// Same traversal as [`get`](Self::get); unlike
    /// [`insert`](Self::insert) it never creates new structure.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is not present; the tree is left
    /// unchanged.
    #[inline]
    pub fn update<K>(&mut self, key: K, value: V) -> Result<(), Error>
    where
        K: Into<VectorKey>,
    {
        self.update_k(&key.into(), value)
    }

    /// Overwrite the value of an existing key using a key reference
    /// (direct version).
    pub fn update_k(&mut self, key: &VectorKey, value: V) -> Result<(), Error> {
        match self.get_mut_k(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::KeyNotFound),
        }
    }

    /// Remove a key-value pair (generic version).
    ///
    /// Removing an absent key is a no-op. Compaction is restored on the
    /// way back up: no non-root, non-terminal node is left with fewer
    /// than two children.
    ///
    /// # Returns
    ///
    /// The removed value, or `None` if the key was not present.
    #[inline]
    pub fn remove<K>(&mut self, key: K) -> Option<V>
    where
        K: Into<VectorKey>,
    {
        self.remove_k(&key.into())
    }

    /// Remove a key-value pair using a key reference (direct version).
    pub fn remove_k(&mut self, key: &VectorKey) -> Option<V> {
        // The root is kept no matter what the recursion reports.
        let (removed, _) = Self::remove_recurse(&mut self.root, key.as_slice());
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

// Internals implementation
impl<V> RadixTree<V> {
    fn insert_recurse(cur_node: &mut Node<V>, suffix: &[u8], value: V) -> Option<V> {
        let Some(edge) = cur_node.edges.seek_mut(suffix[0]) else {
            // No edge starts with this symbol: the whole remaining suffix
            // becomes one new edge to a terminal node.
            cur_node.add_edge(Label::from_slice(suffix), Node::terminal(value));
            return None;
        };

        // The first symbol already matched by way of the dispatch slot, so
        // the mismatch scan effectively starts at index 1.
        let common = edge.label.common_prefix_len(suffix);

        if common == edge.label.len() {
            if common == suffix.len() {
                // Exact key: the edge's target becomes (or stays) terminal.
                return edge.target.value.replace(value);
            }
            // Label fully consumed; keep walking with what's left.
            return Self::insert_recurse(&mut edge.target, &suffix[common..], value);
        }

        // The suffix diverges inside the label, or ends inside it. Split
        // the edge at the matched prefix, then decide what the interposed
        // node is.
        edge.split_at(common);
        if common == suffix.len() {
            // The key ends exactly at the split point; the fresh node is
            // its terminal.
            return edge.target.value.replace(value);
        }
        edge.target
            .add_edge(Label::from_slice(&suffix[common..]), Node::terminal(value));
        None
    }

    fn remove_recurse(cur_node: &mut Node<V>, suffix: &[u8]) -> (Option<V>, Pruning) {
        if suffix.is_empty() {
            // The key ends here. Taking the value clears the terminal
            // flag; a now-childless node asks its parent to prune the
            // edge leading to it.
            let removed = cur_node.value.take();
            if removed.is_some() && cur_node.edges.is_empty() {
                return (removed, Pruning::Prune);
            }
            return (removed, Pruning::Keep);
        }

        let Some(edge) = cur_node.edges.seek_mut(suffix[0]) else {
            return (None, Pruning::Keep);
        };
        if !suffix.starts_with(edge.label.as_ref()) {
            // The key was never present.
            return (None, Pruning::Keep);
        }

        let rest = &suffix[edge.label.len()..];
        let (removed, pruning) = Self::remove_recurse(&mut edge.target, rest);
        if removed.is_none() {
            return (None, Pruning::Keep);
        }

        match pruning {
            Pruning::Prune => {
                cur_node.edges.remove(suffix[0]);
                if cur_node.edges.is_empty() && !cur_node.is_terminal() {
                    // Nothing left below and no key ends here either;
                    // propagate the prune upward.
                    return (removed, Pruning::Prune);
                }
            }
            Pruning::Keep => {
                // The child survived. If the delete left it as a
                // non-terminal pass-through with a single edge, collapse
                // it into this edge to restore maximal compression.
                if !edge.target.is_terminal() && edge.target.edges.len() == 1 {
                    edge.merge_child();
                }
            }
        }
        (removed, Pruning::Keep)
    }
}

//! A mutable radix tree (compressed prefix trie, sometimes called a
//! patricia trie): a string-keyed map optimized for sets of keys that
//! share prefixes.
//!
//! Runs of keys with a common prefix share a single path through the tree;
//! each edge carries a multi-symbol label, and every node dispatches on the
//! first symbol of the remaining key in O(1). Lookups, inserts, updates and
//! removals all run in time bounded by the key length, and removals restore
//! maximal compression as they unwind.
//!
//! ```rust
//! use radix_map::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("romane", 1);
//! tree.insert("romanus", 2);
//!
//! assert_eq!(tree.get("romane"), Some(&1));
//! // "roman" is a shared prefix of stored keys, not itself a key.
//! assert_eq!(tree.get("roman"), None);
//!
//! assert_eq!(tree.remove("romane"), Some(1));
//! assert_eq!(tree.get("romanus"), Some(&2));
//! ```
//!
//! The tree is a single-owner, in-process structure: no internal locking,
//! no iteration or range scans, no persistence.

mod dispatch;
pub mod keys;
mod label;
mod node;
pub mod tree;

pub use crate::keys::VectorKey;
pub use crate::tree::RadixTree;

/// Errors reported by tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key is not present in the tree.
    KeyNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key not found"),
        }
    }
}

impl std::error::Error for Error {}

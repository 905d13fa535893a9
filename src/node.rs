use crate::dispatch::DispatchTable;
use crate::label::Label;

/// A tree node: a termination point for at most one inserted key, plus the
/// outgoing edges.
///
/// `value` is `Some` iff some inserted key ends exactly at this node; a
/// node reached by exact symbol consumption but holding `None` is a shared
/// prefix of longer keys, never itself a key.
pub(crate) struct Node<V> {
    pub(crate) value: Option<V>,
    pub(crate) edges: DispatchTable<V>,
}

impl<V> Node<V> {
    pub fn new() -> Self {
        Self {
            value: None,
            edges: DispatchTable::new(),
        }
    }

    pub fn terminal(value: V) -> Self {
        Self {
            value: Some(value),
            edges: DispatchTable::new(),
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Attach `target` below this node under `label`.
    pub fn add_edge(&mut self, label: Label, target: Node<V>) {
        self.edges.add_edge(Edge::new(label, target));
    }
}

/// A labeled transition exclusively owning the node it leads to.
pub(crate) struct Edge<V> {
    pub(crate) label: Label,
    pub(crate) target: Box<Node<V>>,
}

impl<V> Edge<V> {
    pub fn new(label: Label, target: Node<V>) -> Self {
        debug_assert!(!label.is_empty(), "edge labels are never empty");
        Self {
            label,
            target: Box::new(target),
        }
    }

    /// The symbol this edge is filed under in its node's dispatch table.
    #[inline]
    pub fn first_symbol(&self) -> u8 {
        self.label.at(0)
    }

    /// Split this edge at `at`: keep the first `at` label symbols here,
    /// interpose a fresh non-terminal node, and hang the old target below
    /// it under the label tail. `at` must fall strictly inside the label.
    pub fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());
        let tail = self.label.after(at);
        self.label = self.label.before(at);
        let detached = std::mem::replace(&mut self.target, Box::new(Node::new()));
        self.target.edges.add_edge(Edge {
            label: tail,
            target: detached,
        });
    }

    /// Collapse a single-child, non-terminal target into this edge: the
    /// grandchild edge is adopted here under the concatenated label,
    /// restoring maximal compression. Caller must have checked the target
    /// qualifies.
    pub fn merge_child(&mut self) {
        debug_assert!(!self.target.is_terminal() && self.target.edges.len() == 1);
        let Some(grandchild) = self.target.edges.take_only() else {
            unreachable!("merge_child on a childless node");
        };
        self.label = self.label.extended_with(&grandchild.label);
        self.target = grandchild.target;
    }
}

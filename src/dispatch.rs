use crate::node::Edge;

/// Number of distinct symbols an edge label can begin with: one slot per
/// byte, which also makes big-endian integer keys valid symbol sequences.
pub(crate) const ALPHABET: usize = 256;

/// Dense symbol-to-edge table owned by each node.
///
/// One slot per symbol, so at most one outgoing edge can begin with any
/// given symbol (the radix invariant), and selecting the next edge during
/// traversal is a single index. Dropping the table drops every edge and,
/// transitively, every descendant node.
pub(crate) struct DispatchTable<V> {
    slots: Box<[Option<Edge<V>>]>,
    len: usize,
}

impl<V> Default for DispatchTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DispatchTable<V> {
    pub fn new() -> Self {
        Self {
            slots: (0..ALPHABET).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Attach `edge` under its leading symbol. The slot must be free.
    #[inline]
    pub fn add_edge(&mut self, edge: Edge<V>) {
        let slot = &mut self.slots[edge.first_symbol() as usize];
        debug_assert!(slot.is_none(), "two edges sharing a first symbol");
        *slot = Some(edge);
        self.len += 1;
    }

    #[inline]
    pub fn seek(&self, symbol: u8) -> Option<&Edge<V>> {
        self.slots[symbol as usize].as_ref()
    }

    #[inline]
    pub fn seek_mut(&mut self, symbol: u8) -> Option<&mut Edge<V>> {
        self.slots[symbol as usize].as_mut()
    }

    /// Detach and return the edge for `symbol`, pruning its whole subtree
    /// from the node unless the caller re-attaches it.
    #[inline]
    pub fn remove(&mut self, symbol: u8) -> Option<Edge<V>> {
        let edge = self.slots[symbol as usize].take();
        if edge.is_some() {
            self.len -= 1;
        }
        edge
    }

    /// Number of live edges; drives the compaction decisions after a
    /// delete.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Detach the sole remaining edge. Caller must have checked
    /// `len() == 1`.
    pub fn take_only(&mut self) -> Option<Edge<V>> {
        debug_assert_eq!(self.len, 1);
        for slot in self.slots.iter_mut() {
            if slot.is_some() {
                self.len -= 1;
                return slot.take();
            }
        }
        None
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Edge<V>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(symbol, slot)| slot.as_ref().map(|edge| (symbol as u8, edge)))
    }
}

#[cfg(test)]
mod tests {
    use super::DispatchTable;
    use crate::label::Label;
    use crate::node::{Edge, Node};

    #[test]
    fn dispatch_table_test() {
        let mut table = DispatchTable::new();
        for i in 0..=255u8 {
            table.add_edge(Edge::new(Label::from_slice(&[i, b'x']), Node::terminal(i)));
            assert_eq!(table.len(), 1);
            assert_eq!(table.seek(i).unwrap().target.value, Some(i));
            assert!(table.remove(i).is_some());
            assert!(table.seek(i).is_none());
            assert_eq!(table.len(), 0);
        }
    }

    #[test]
    fn take_only_detaches_last_edge() {
        let mut table = DispatchTable::new();
        table.add_edge(Edge::new(Label::from_slice(b"icon"), Node::terminal(6)));
        let edge = table.take_only().unwrap();
        assert_eq!(edge.label.to_slice(), b"icon");
        assert!(table.is_empty());
    }

    #[test]
    fn iter_yields_live_slots_in_symbol_order() {
        let mut table = DispatchTable::new();
        table.add_edge(Edge::new(Label::from_slice(b"b"), Node::terminal(2)));
        table.add_edge(Edge::new(Label::from_slice(b"a"), Node::terminal(1)));
        let symbols: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![b'a', b'b']);
    }
}

use std::cmp::min;

/// A compressed edge label: the key fragment consumed in full when
/// traversing one edge. The concatenation of labels along any
/// root-to-node path is the key reaching that node.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Label {
    data: Box<[u8]>,
}

impl Label {
    pub fn from_slice(src: &[u8]) -> Self {
        Self {
            data: Box::from(src),
        }
    }

    /// The label truncated to its first `length` symbols.
    pub fn before(&self, length: usize) -> Self {
        assert!(length <= self.data.len());
        Label::from_slice(&self.data[..length])
    }

    /// The label from `start` onwards.
    pub fn after(&self, start: usize) -> Self {
        assert!(start <= self.data.len());
        Label::from_slice(&self.data[start..])
    }

    /// This label followed by `other`, as a single fragment. Used when a
    /// pass-through node is collapsed into its parent edge.
    pub fn extended_with(&self, other: &Self) -> Self {
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Self {
            data: data.into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn at(&self, pos: usize) -> u8 {
        self.data[pos]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of the common prefix of this label and `slice`, i.e. the
    /// index of the first mismatching symbol.
    pub fn common_prefix_len(&self, slice: &[u8]) -> usize {
        let len = min(self.data.len(), slice.len());
        let mut idx = 0;
        while idx < len {
            if self.data[idx] != slice[idx] {
                break;
            }
            idx += 1;
        }
        idx
    }

    pub fn to_slice(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

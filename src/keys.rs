//! Key types for the tree.
//!
//! A key is a plain sequence of symbols (bytes). String keys use their
//! UTF-8 bytes as-is; integer keys use their big-endian encoding. No
//! terminator is appended: the tree marks key ends with terminal nodes,
//! so a key that is a prefix of another needs no sentinel.

use num_traits::{ToBytes, Unsigned};

/// Owns variable sized key data.
#[derive(Clone, Eq, PartialEq, PartialOrd, Ord, Debug)]
pub struct VectorKey {
    data: Box<[u8]>,
}

impl VectorKey {
    pub fn new_from_str(s: &str) -> Self {
        Self {
            data: Box::from(s.as_bytes()),
        }
    }

    pub fn new_from_slice(data: &[u8]) -> Self {
        Self {
            data: Box::from(data),
        }
    }

    pub fn new_from_vec(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    pub fn from_unsigned<T: Unsigned + ToBytes>(un: T) -> Self {
        Self::new_from_slice(un.to_be_bytes().as_ref())
    }

    #[inline]
    pub fn at(&self, pos: usize) -> u8 {
        self.data[pos]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for VectorKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&str> for VectorKey {
    fn from(data: &str) -> Self {
        Self::new_from_str(data)
    }
}

impl From<String> for VectorKey {
    fn from(data: String) -> Self {
        Self::new_from_str(&data)
    }
}

impl From<&String> for VectorKey {
    fn from(data: &String) -> Self {
        Self::new_from_str(data)
    }
}

impl From<&[u8]> for VectorKey {
    fn from(data: &[u8]) -> Self {
        Self::new_from_slice(data)
    }
}

impl From<Vec<u8>> for VectorKey {
    fn from(data: Vec<u8>) -> Self {
        Self::new_from_vec(data)
    }
}

macro_rules! impl_from_unsigned {
    ( $($t:ty),* ) => {
    $(
    impl From< $t > for VectorKey
    {
        fn from(data: $t) -> Self {
            VectorKey::from_unsigned(data)
        }
    }
    impl From< &$t > for VectorKey
    {
        fn from(data: &$t) -> Self {
            (*data).into()
        }
    }
    ) *
    }
}
impl_from_unsigned!(u8, u16, u32, u64, usize, u128);

//! Solidity fixed bytes type.

use crate::{
    fmt::Hex,
    primitive::{Primitive, Word},
};
use std::{
    fmt::{self, Debug, Formatter},
    ops::Deref,
};

/// A fixed byte array length.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ByteLength(usize);

impl ByteLength {
    /// Checked byte-length creation.
    ///
    /// Byte lengths must be between 1 and 32.
    pub fn new(len: usize) -> Option<Self> {
        match len {
            1..=32 => Some(Self(len)),
            _ => None,
        }
    }
}

impl Deref for ByteLength {
    type Target = usize;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A statically sized byte array value, the equivalent of a Solidity
/// `bytesN`.
///
/// The bytes are stored left-aligned in a word with the unused tail zeroed.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct FixedBytes(ByteLength, Word);

impl FixedBytes {
    /// Creates a new fixed byte value. Returns `None` if the slice is empty or
    /// longer than 32 bytes.
    pub fn new(bytes: &[u8]) -> Option<Self> {
        let len = ByteLength::new(bytes.len())?;
        let mut word = Word::default();
        word[..*len].copy_from_slice(bytes);
        Some(Self(len, word))
    }

    /// Returns the byte length of the fixed bytes.
    pub fn byte_length(&self) -> ByteLength {
        self.0
    }

    /// Returns the bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.1[..*self.0]
    }
}

impl Debug for FixedBytes {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("FixedBytes")
            .field(&Hex(self.as_bytes()))
            .finish()
    }
}

impl AsRef<[u8]> for FixedBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Deref for FixedBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl Primitive for FixedBytes {
    fn to_word(&self) -> Word {
        self.1
    }
}

macro_rules! impl_from_array_for_fixed_bytes {
    ($($n:literal,)*) => {$(
        impl From<[u8; $n]> for FixedBytes {
            fn from(bytes: [u8; $n]) -> Self {
                let mut word = Word::default();
                word[..$n].copy_from_slice(&bytes);
                Self(ByteLength($n), word)
            }
        }
    )*};
}

impl_from_array_for_fixed_bytes! {
     1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
}

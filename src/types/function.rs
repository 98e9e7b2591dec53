//! Solidity ABI function pointer type.

use crate::{
    fmt::Hex,
    primitive::{Primitive, Word},
    types::address::Address,
};
use std::fmt::{self, Debug, Formatter};

/// A function selector type.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Selector(pub [u8; 4]);

impl AsRef<[u8]> for Selector {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl Debug for Selector {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Selector").field(&Hex(&self.0)).finish()
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

/// Recent Solidity ABI version support function pointers. They are encoded as
/// a contract address and a selector packed into a `bytes24`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ExternalFunction {
    /// The contract address that will be used when calling this function
    /// pointer.
    pub address: Address,
    /// The selector of the contract function getting called.
    pub selector: Selector,
}

impl ExternalFunction {
    /// Returns the `bytes24` representation of the function pointer.
    pub fn to_bytes(&self) -> [u8; 24] {
        let mut bytes = [0; 24];
        bytes[..20].copy_from_slice(self.address.as_ref());
        bytes[20..].copy_from_slice(self.selector.as_ref());
        bytes
    }
}

impl Primitive for ExternalFunction {
    fn to_word(&self) -> Word {
        let mut word = Word::default();
        word[..24].copy_from_slice(&self.to_bytes());
        word
    }
}

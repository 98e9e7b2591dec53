//! Solidity primitive type trait and implementations.

use ethnum::{AsU256 as _, I256, U256};

/// An Ethereum 32-byte word.
pub type Word = [u8; 32];

/// Trait representing any type that is packed into exactly one Ethereum 32-byte
/// word.
pub trait Primitive {
    /// Converts a primitive type to an Ethereum 32-byte word.
    fn to_word(&self) -> Word;
}

macro_rules! impl_primitive_for_as_u256 {
    ($($t:ty,)*) => {$(
        impl Primitive for $t {
            fn to_word(&self) -> Word {
                self.as_u256().to_be_bytes()
            }
        }
    )*};
}

impl_primitive_for_as_u256! {
    i8, i16, i32, i64, i128, I256, isize,
    u8, u16, u32, u64, u128, U256, usize,
    bool,
}

/// Pads the specified size to a 32-byte boundary. Returns `None` on overflow.
pub(crate) fn pad32(value: usize) -> Option<usize> {
    Some(value.checked_add(31)? / 32 * 32)
}

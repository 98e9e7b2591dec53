//! Arbitrary-precision integer handle.

use crate::fmt::Hex;
use ethnum::{AsU256 as _, I256, U256};
use std::fmt::{self, Debug, Formatter};

/// An owned arbitrary-precision integer in sign-magnitude form.
///
/// Values are not limited to 256 bits. When packed, they are reduced modulo
/// 2^256 the same way the fixed-width Solidity word would wrap.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct BigInt {
    negative: bool,
    magnitude: Vec<u8>,
}

impl BigInt {
    /// Creates an integer from its sign and big-endian magnitude.
    ///
    /// Leading zero bytes are stripped and zero is never negative.
    pub fn from_be_bytes(negative: bool, magnitude: &[u8]) -> Self {
        let start = magnitude
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(magnitude.len());
        let magnitude = magnitude[start..].to_vec();
        Self {
            negative: negative && !magnitude.is_empty(),
            magnitude,
        }
    }

    /// Returns `true` if the integer is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the minimal big-endian magnitude bytes. Zero is empty.
    pub fn magnitude(&self) -> &[u8] {
        &self.magnitude
    }

    /// Returns the integer reduced modulo 2^256 in two's complement.
    pub fn to_u256_wrapping(&self) -> U256 {
        let mut word = [0; 32];
        let low = &self.magnitude[self.magnitude.len().saturating_sub(32)..];
        word[32 - low.len()..].copy_from_slice(low);

        let value = U256::from_be_bytes(word);
        if self.negative {
            value.wrapping_neg()
        } else {
            value
        }
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.negative)
            .field("magnitude", &Hex(&self.magnitude))
            .finish()
    }
}

impl From<U256> for BigInt {
    fn from(value: U256) -> Self {
        Self::from_be_bytes(false, &value.to_be_bytes())
    }
}

impl From<I256> for BigInt {
    fn from(value: I256) -> Self {
        // `wrapping_neg` on the unsigned bits gives the correct magnitude for
        // `I256::MIN` as well.
        let bits = value.as_u256();
        let magnitude = if value.is_negative() {
            bits.wrapping_neg()
        } else {
            bits
        };
        Self::from_be_bytes(value.is_negative(), &magnitude.to_be_bytes())
    }
}

macro_rules! impl_from_primitive_for_bigint {
    ($($t:ty => $via:ty,)*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from(<$via>::from(value))
            }
        }
    )*};
}

impl_from_primitive_for_bigint! {
    u8 => U256, u16 => U256, u32 => U256, u64 => U256, u128 => U256,
    i8 => I256, i16 => I256, i32 => I256, i64 => I256, i128 => I256,
}

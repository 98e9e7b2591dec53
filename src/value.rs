//! Module containing dynamic Solidity values and their kinds.

use crate::types::{
    address::Address, bigint::BigInt, bytes::ByteLength, bytes::FixedBytes,
    function::ExternalFunction,
};
use ethnum::{AsI256 as _, AsU256 as _, I256, U256};
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
    ops::Deref,
};

/// An application value to be packed.
///
/// This is a closed set of the input shapes the packer understands. Values of
/// other application types are converted into one of these variants with the
/// provided `From` implementations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Uint(U256),
    Int(I256),
    BigInt(BigInt),
    Bool(bool),
    Address(Address),
    FixedBytes(FixedBytes),
    Bytes(Vec<u8>),
    /// UTF-8 text. Also used for decimal numeric strings.
    String(String),
    Function(ExternalFunction),
}

impl Value {
    /// Returns a short name describing the shape of the value, used for
    /// diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Uint(_) => "unsigned integer",
            Self::Int(_) => "signed integer",
            Self::BigInt(_) => "big integer",
            Self::Bool(_) => "boolean",
            Self::Address(_) => "address",
            Self::FixedBytes(_) => "fixed bytes",
            Self::Bytes(_) => "bytes",
            Self::String(_) => "string",
            Self::Function(_) => "function",
        }
    }

    /// Returns the value as a slice of bytes if it is byte-shaped.
    ///
    /// Statically sized values (fixed bytes, addresses and function pointers)
    /// are normalized to a slice with identical contents and order, so that
    /// they can be used interchangeably with dynamic byte sequences.
    pub fn as_byte_slice(&self) -> Option<Cow<'_, [u8]>> {
        match self {
            Self::FixedBytes(value) => Some(Cow::Borrowed(value.as_bytes())),
            Self::Bytes(value) => Some(Cow::Borrowed(value.as_slice())),
            Self::Address(value) => Some(Cow::Borrowed(value.as_ref())),
            Self::Function(value) => Some(Cow::Owned(value.to_bytes().to_vec())),
            _ => None,
        }
    }
}

macro_rules! impl_from_unsigned_for_value {
    ($($t:ty,)*) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Self::Uint(value.as_u256())
            }
        }
    )*};
}

impl_from_unsigned_for_value! {
    u8, u16, u32, u64, u128, usize, U256,
}

macro_rules! impl_from_signed_for_value {
    ($($t:ty,)*) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Self::Int(value.as_i256())
            }
        }
    )*};
}

impl_from_signed_for_value! {
    i8, i16, i32, i64, i128, isize, I256,
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Address> for Value {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

impl From<ethaddr::Address> for Value {
    fn from(value: ethaddr::Address) -> Self {
        Self::Address(value.into())
    }
}

impl From<FixedBytes> for Value {
    fn from(value: FixedBytes) -> Self {
        Self::FixedBytes(value)
    }
}

impl<const N: usize> From<[u8; N]> for Value
where
    FixedBytes: From<[u8; N]>,
{
    fn from(value: [u8; N]) -> Self {
        Self::FixedBytes(value.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&'_ [u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&'_ str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<ExternalFunction> for Value {
    fn from(value: ExternalFunction) -> Self {
        Self::Function(value)
    }
}

/// The kind of a Solidity value, i.e. its declared ABI type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    Int(BitWidth),
    Uint(BitWidth),
    Address,
    Bool,
    FixedBytes(ByteLength),
    Function,
    FixedArray(usize, Box<ValueKind>),
    Bytes,
    String,
    Array(Box<ValueKind>),
    Tuple(Vec<ValueKind>),
}

/// Formats the kind as its canonical Solidity type name.
impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Int(bit_width) => write!(f, "int{}", **bit_width),
            Self::Uint(bit_width) => write!(f, "uint{}", **bit_width),
            Self::Address => f.write_str("address"),
            Self::Bool => f.write_str("bool"),
            Self::FixedBytes(len) => write!(f, "bytes{}", **len),
            Self::Function => f.write_str("function"),
            Self::FixedArray(len, kind) => write!(f, "{kind}[{len}]"),
            Self::Bytes => f.write_str("bytes"),
            Self::String => f.write_str("string"),
            Self::Array(kind) => write!(f, "{kind}[]"),
            Self::Tuple(kinds) => {
                f.write_str("(")?;
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{kind}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// An integer bit width.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitWidth(u32);

impl BitWidth {
    /// Checked bit-width creation.
    ///
    /// Bitwidths must be multiple of 8s between 8 and 256.
    pub fn new(bit_width: u32) -> Option<Self> {
        match bit_width {
            n @ 8..=256 if n % 8 == 0 => Some(Self(bit_width)),
            _ => None,
        }
    }
}

impl Default for BitWidth {
    fn default() -> Self {
        Self(256)
    }
}

impl Deref for BitWidth {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

//! Module implementing ABI element packing.
//!
//! Packing produces the canonical, word-aligned encoding of a single ABI
//! element. Static types pack into exactly one word, while `bytes` and
//! `string` pack into a length word followed by their zero-padded data.
//! Assembling packed elements into a full call frame, including head/tail
//! offsets for dynamic types, happens outside of this module.

use crate::{
    error::PackError,
    primitive::{pad32, Primitive as _, Word},
    types::address::Address,
    value::{Value, ValueKind},
};
use ethnum::{AsU256 as _, U256};

/// The textual zero address. It is accepted as-is without checksum
/// validation.
const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Packs a number into a 32-byte two's-complement big-endian word.
///
/// Numbers are reduced modulo 2^256, so values that do not fit in 256 bits
/// silently wrap around instead of causing an error. String values are parsed
/// as base-10 integers with an optional leading sign.
pub fn pack_number(value: &Value) -> Result<Word, PackError> {
    let number = match value {
        Value::Uint(value) => *value,
        Value::Int(value) => value.as_u256(),
        Value::BigInt(value) => value.to_u256_wrapping(),
        Value::String(value) => parse_decimal(value)?,
        _ => return Err(PackError::UnsupportedNumericType(value.type_name())),
    };
    Ok(number.to_word())
}

/// Packs a payload as a length word followed by the payload data right-padded
/// with zeros to a multiple of 32 bytes.
///
/// # Notes
///
/// The logical length `len` is written to the length word, while the data is
/// taken from the physical `payload`. Callers must ensure that
/// `len == payload.len()` for the output to be a sound encoding. A payload
/// longer than `len` is never truncated; it is padded to its own word
/// boundary instead.
///
/// A `len` whose padded encoding cannot be allocated results in a
/// [`PackError::LengthOverflow`] error.
pub fn pack_length_prefixed(payload: &[u8], len: usize) -> Result<Vec<u8>, PackError> {
    let overflow = || PackError::LengthOverflow(len);

    let len_word = pack_number(&Value::from(len))?;
    let data_len = pad32(len)
        .zip(pad32(payload.len()))
        .map(|(logical, physical)| logical.max(physical))
        .ok_or_else(overflow)?;
    let total_len = data_len
        .checked_add(len_word.len())
        .ok_or_else(overflow)?;

    let mut packed = Vec::new();
    packed
        .try_reserve_exact(total_len)
        .map_err(|_| overflow())?;
    packed.extend_from_slice(&len_word);
    packed.extend_from_slice(payload);
    packed.resize(total_len, 0);
    Ok(packed)
}

/// Packs a single value according to its declared ABI type.
///
/// Only leaf elements can be packed; arrays and tuples result in an
/// [`PackError::UnsupportedElementType`] error.
pub fn pack_element(kind: &ValueKind, value: &Value) -> Result<Vec<u8>, PackError> {
    let mismatch = || PackError::TypeMismatch {
        expected: kind.clone(),
        found: value.type_name(),
    };

    let packed = match kind {
        ValueKind::Int(_) | ValueKind::Uint(_) => pack_number(value)?.to_vec(),
        ValueKind::String => match value {
            Value::String(value) => pack_length_prefixed(value.as_bytes(), value.len())?,
            _ => return Err(mismatch()),
        },
        ValueKind::Address => {
            let address = match value {
                Value::String(value) => parse_address(value)?,
                _ => match value.as_byte_slice() {
                    Some(bytes) if bytes.len() <= 20 => {
                        let mut address = Address::default();
                        address[20 - bytes.len()..].copy_from_slice(&bytes);
                        address
                    }
                    _ => return Err(mismatch()),
                },
            };
            address.to_word().to_vec()
        }
        ValueKind::Bool => match value {
            Value::Bool(value) => value.to_word().to_vec(),
            _ => return Err(mismatch()),
        },
        ValueKind::Bytes => {
            let bytes = value.as_byte_slice().ok_or_else(mismatch)?;
            pack_length_prefixed(&bytes, bytes.len())?
        }
        ValueKind::FixedBytes(_) | ValueKind::Function => {
            let bytes = value
                .as_byte_slice()
                .filter(|bytes| bytes.len() <= 32)
                .ok_or_else(mismatch)?;
            let mut word = Word::default();
            word[..bytes.len()].copy_from_slice(&bytes);
            word.to_vec()
        }
        ValueKind::FixedArray(..) | ValueKind::Array(_) | ValueKind::Tuple(_) => {
            return Err(PackError::UnsupportedElementType(kind.clone()))
        }
    };

    tracing::trace!(%kind, len = packed.len(), "packed element");
    Ok(packed)
}

/// Parses a base-10 integer, wrapping modulo 2^256.
fn parse_decimal(s: &str) -> Result<U256, PackError> {
    let invalid = || PackError::InvalidNumericString(s.to_owned());

    let (negative, digits) = match s.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() {
        return Err(invalid());
    }

    let mut value = U256::ZERO;
    for c in digits.bytes() {
        if !c.is_ascii_digit() {
            return Err(invalid());
        }
        value = value
            .wrapping_mul(U256::new(10))
            .wrapping_add(U256::from(c - b'0'));
    }

    Ok(if negative { value.wrapping_neg() } else { value })
}

/// Parses a textual address, requiring it to exactly match its checksummed
/// representation.
fn parse_address(s: &str) -> Result<Address, PackError> {
    if s == ZERO_ADDRESS {
        return Ok(Address::ZERO);
    }
    match s.parse::<Address>() {
        Ok(address) if address.to_string() == s => Ok(address),
        _ => Err(PackError::InvalidAddress(s.to_owned())),
    }
}

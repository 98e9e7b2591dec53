//! Solidity ABI element packing implementation.
//!
//! This crate produces the canonical, 32-byte word aligned encoding of a
//! single ABI element from its declared type and an application value.

#[cfg(test)]
#[macro_use]
mod testutil;

pub mod error;
mod fmt;
pub mod pack;
pub mod primitive;
pub mod types;
pub mod value;

pub use self::{
    error::PackError,
    pack::{pack_element, pack_length_prefixed, pack_number},
    primitive::Word,
    value::{Value, ValueKind},
};

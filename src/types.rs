//! Solidity ABI specific types.

pub mod address;
pub mod bigint;
pub mod bytes;
pub mod function;

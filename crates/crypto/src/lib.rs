//! Hash primitives used when adapting Starknet data.
//!
//! The field element itself comes from `starknet-types-core`; this crate only
//! exposes the handful of hash constructions the rest of the workspace needs.

/// Contains hash functions such as Pedersen, Poseidon and Starknet Keccak.
pub mod hash;

pub use starknet_types_core::felt::Felt;

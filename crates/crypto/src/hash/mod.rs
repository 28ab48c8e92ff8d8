/// Pedersen hash function.
mod pedersen;

/// Poseidon hash function.
mod poseidon;

mod keccak;

pub use keccak::{starknet_keccak, truncated_keccak};
pub use pedersen::{pedersen_hash, HashChain};
pub use poseidon::poseidon_hash_many;

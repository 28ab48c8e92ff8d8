use starknet_types_core::felt::Felt;
use starknet_types_core::hash::{Poseidon, StarkHash};

/// Computes the Starknet Poseidon hash of an arbitrary number of field
/// elements, using the `1, 0, 0, ...` padding of the sponge construction.
pub fn poseidon_hash_many(elems: &[Felt]) -> Felt {
    Poseidon::hash_array(elems)
}

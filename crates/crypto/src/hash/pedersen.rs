use starknet_types_core::felt::Felt;
use starknet_types_core::hash::{Pedersen, StarkHash};

/// Computes the Starknet Pedersen hash of two field elements.
pub fn pedersen_hash(a: Felt, b: Felt) -> Felt {
    Pedersen::hash(&a, &b)
}

/// HashChain is the structure used over at cairo side to represent the hash
/// construction needed for computing contract addresses.
///
/// Empty hash chained value equals `H(0, 0)` where `H` is the
/// [`pedersen_hash()`] function, and the second value is the number of values
/// hashed together in this chain. For other values, the accumulator is on each
/// update replaced with the `H(hash, value)` and the number of count
/// incremented by one.
#[derive(Default)]
pub struct HashChain {
    hash: Felt,
    count: u64,
}

impl HashChain {
    pub fn update(&mut self, value: Felt) {
        self.hash = pedersen_hash(self.hash, value);
        self.count += 1;
    }

    pub fn chain_update(mut self, value: Felt) -> Self {
        self.update(value);
        self
    }

    pub fn finalize(self) -> Felt {
        pedersen_hash(self.hash, Felt::from(self.count))
    }
}

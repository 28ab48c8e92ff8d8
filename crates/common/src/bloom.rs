use bloomfilter::Bloom;

use crate::receipt::Receipt;
use crate::{ContractAddress, EventKey, Felt};

// We're using the upper 4 bits of the 32 byte representation of a felt
// to store the index of the key in the values set in the Bloom filter.
// This allows for the maximum of 16 keys per event to be stored in the
// filter.
pub const EVENT_KEY_FILTER_LIMIT: usize = 16;

/// A Bloom filter over the emitting addresses and keys of every event in a
/// block.
#[derive(Clone)]
pub struct EventsBloom(Bloom<[u8; 32]>);

impl EventsBloom {
    // The size of the bitmap used by the Bloom filter (in bytes).
    const BITMAP_BYTES: usize = 2048;
    // The maximal number of items anticipated to be inserted into the Bloom filter.
    const ITEMS_COUNT: usize = 1024;
    // The number of hash functions the parameters above result in.
    const K_NUM: u32 = 12;
    // The seed used by the hash functions of the filter.
    // This is a randomly generated vector of 32 bytes.
    const SEED: [u8; 32] = [
        0xef, 0x51, 0x88, 0x74, 0xef, 0x08, 0x3d, 0xf6, 0x7d, 0x7a, 0x93, 0xb7, 0xb3, 0x13, 0x1f,
        0x87, 0xd3, 0x26, 0xbd, 0x49, 0xc7, 0x18, 0xcc, 0xe5, 0xd7, 0xe8, 0xa0, 0xdb, 0xea, 0x80,
        0x67, 0x52,
    ];

    pub fn new() -> Self {
        let bloom = Bloom::new_with_seed(Self::BITMAP_BYTES, Self::ITEMS_COUNT, &Self::SEED);
        debug_assert_eq!(bloom.number_of_hash_functions(), Self::K_NUM);

        Self(bloom)
    }

    /// Builds the filter of a block from its receipts, in order.
    pub fn from_receipts(receipts: &[Receipt]) -> Self {
        let mut bloom = Self::new();
        for event in receipts.iter().flat_map(|r| r.events.iter()) {
            bloom.set_address(&event.from_address);
            bloom.set_keys(&event.keys);
        }
        bloom
    }

    pub fn set_address(&mut self, address: &ContractAddress) {
        self.0.set(&address.0.to_bytes_be());
    }

    pub fn set_keys(&mut self, keys: &[EventKey]) {
        for (i, key) in keys.iter().take(EVENT_KEY_FILTER_LIMIT).enumerate() {
            self.0.set(&indexed_key(&key.0, i));
        }
    }

    pub fn check_address(&self, address: &ContractAddress) -> bool {
        self.0.check(&address.0.to_bytes_be())
    }

    /// Checks the filter against a key pattern: position `i` of the pattern
    /// matches if any of its alternatives was set at that position. An empty
    /// position matches anything.
    pub fn check_keys(&self, keys: &[Vec<EventKey>]) -> bool {
        keys.iter().enumerate().all(|(idx, keys)| {
            if keys.is_empty() {
                return true;
            };

            keys.iter().any(|key| {
                tracing::trace!(%idx, key=%key.0, "Checking key in filter");
                self.0.check(&indexed_key(&key.0, idx))
            })
        })
    }

    pub fn bitmap(&self) -> Vec<u8> {
        self.0.bitmap()
    }
}

fn indexed_key(key: &Felt, idx: usize) -> [u8; 32] {
    let mut bytes = key.to_bytes_be();
    bytes[0] |= (idx as u8) << 4;
    bytes
}

impl Default for EventsBloom {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for EventsBloom {
    fn eq(&self, other: &Self) -> bool {
        self.bitmap() == other.bitmap()
    }
}

impl Eq for EventsBloom {}

impl std::fmt::Debug for EventsBloom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let set_bits: u32 = self.bitmap().iter().map(|b| b.count_ones()).sum();
        f.debug_struct("EventsBloom")
            .field("set_bits", &set_bits)
            .finish()
    }
}

impl<T> fake::Dummy<T> for EventsBloom {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &T, _: &mut R) -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "full-serde"))]
impl serde::Serialize for EventsBloom {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.bitmap())
    }
}

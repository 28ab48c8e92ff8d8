//! Contains the strict Starknet domain model produced by the adapter.
//!
//! This includes many trivial wrappers around [Felt] which help by providing
//! additional type safety, plus the block, transaction, receipt, class and
//! state diff types.
use fake::Dummy;
use primitive_types::H160;
use serde::{Deserialize, Serialize};
pub use sncore_crypto::Felt;
use sncore_crypto::hash::{starknet_keccak, HashChain};

pub mod block;
pub mod bloom;
pub mod class;
pub mod event;
mod macros;
pub mod pre_confirmed;
pub mod prelude;
pub mod receipt;
pub mod state_update;
pub mod transaction;

pub use block::{Block, BlockHeader, BlockHeaderBuilder};
pub use bloom::EventsBloom;
pub use pre_confirmed::PreConfirmed;
pub use state_update::{StateDiff, StateUpdate};

impl ContractAddress {
    /// Computes the address of a contract deployed by the zero deployer,
    /// i.e. by a `DEPLOY` or `DEPLOY_ACCOUNT` transaction.
    ///
    /// See: <https://docs.starknet.io/architecture-and-concepts/smart-contracts/contract-address/>
    pub fn deployed_contract_address(
        constructor_calldata: impl Iterator<Item = CallParam>,
        contract_address_salt: &ContractAddressSalt,
        class_hash: &ClassHash,
    ) -> Self {
        let constructor_calldata_hash = constructor_calldata
            .fold(HashChain::default(), |hh, param| hh.chain_update(param.0))
            .finalize();

        let contract_address = [
            felt_bytes!(b"STARKNET_CONTRACT_ADDRESS"),
            // The deployer address is always zero for these transactions.
            Felt::ZERO,
            contract_address_salt.0,
            class_hash.0,
            constructor_calldata_hash,
        ]
        .into_iter()
        .fold(HashChain::default(), |hh, e| hh.chain_update(e))
        .finalize();

        // Contract addresses are _less than_ 2**251 - 256
        let max_address = felt!("0x7ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff00");
        if contract_address >= max_address {
            Self(contract_address - max_address)
        } else {
            Self(contract_address)
        }
    }
}

impl EntryPoint {
    /// Returns a new EntryPoint which has been truncated to fit from Keccak256 digest of input.
    ///
    /// See: <https://docs.starknet.io/architecture-and-concepts/smart-contracts/contract-abi/#function_selector>
    pub fn hashed(input: &[u8]) -> Self {
        EntryPoint(starknet_keccak(input))
    }
}

/// A Starknet block number.
#[derive(Copy, Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Dummy)]
pub struct BlockNumber(u64);

macros::u64_backed::new_get_partialeq!(BlockNumber);

impl BlockNumber {
    pub const GENESIS: BlockNumber = BlockNumber::new(0);
}

impl From<BlockNumber> for Felt {
    fn from(x: BlockNumber) -> Self {
        Felt::from(x.0)
    }
}

/// The timestamp of a Starknet block.
#[derive(Copy, Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Dummy)]
pub struct BlockTimestamp(u64);

macros::u64_backed::new_get_partialeq!(BlockTimestamp);

/// Starknet gas price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize, Default, Dummy)]
pub struct GasPrice(pub u128);

impl GasPrice {
    pub const ZERO: GasPrice = GasPrice(0u128);

    /// Returns the big-endian representation of this [GasPrice].
    pub fn to_be_bytes(&self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    /// Constructs [GasPrice] from an array of bytes. Big endian byte order is assumed.
    pub fn from_be_bytes(src: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(src))
    }
}

impl From<u64> for GasPrice {
    fn from(src: u64) -> Self {
        Self(u128::from(src))
    }
}

/// A gas price quoted in both fee units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(Serialize))]
pub struct GasPrices {
    pub price_in_wei: GasPrice,
    pub price_in_fri: GasPrice,
}

/// How a block publishes its state diff on L1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(Serialize))]
pub enum L1DataAvailabilityMode {
    #[default]
    Calldata,
    Blob,
}

/// Starknet transaction version.
///
/// Versions of query-only transactions have `QUERY_VERSION_BASE` added.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
pub struct TransactionVersion(pub Felt);

impl TransactionVersion {
    pub const ZERO: Self = Self(Felt::ZERO);
    pub const ONE: Self = Self(Felt::ONE);
    pub const TWO: Self = Self(Felt::TWO);
    pub const THREE: Self = Self(Felt::THREE);

    /// Checks if version is zero, handling QUERY_VERSION_BASE.
    pub fn is_zero(&self) -> bool {
        self.without_query_version() == 0
    }

    /// Returns the transaction version without QUERY_VERSION_BASE.
    ///
    /// QUERY_VERSION_BASE (2**128) is a large constant that gets
    /// added to the real version to make sure transactions constructed for
    /// call or estimateFee cannot be submitted for inclusion on the chain.
    pub fn without_query_version(&self) -> u128 {
        let bytes = self.0.to_bytes_be();
        let mut lower = [0u8; 16];
        lower.copy_from_slice(&bytes[16..]);
        u128::from_be_bytes(lower)
    }

    pub fn has_query_version(&self) -> bool {
        self.0.to_bytes_be()[15] & 0b0000_0001 != 0
    }
}

impl<T> Dummy<T> for TransactionVersion {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
        Self(Felt::from(rng.gen_range(0u64..=3)))
    }
}

/// An Ethereum address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct EthereumAddress(pub H160);

impl<T> Dummy<T> for EthereumAddress {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
        Self(H160::random_using(rng))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Dummy)]
pub struct StarknetVersion(String);

impl StarknetVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        StarknetVersion(format!("{major}.{minor}.{patch}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StarknetVersion {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An amount of a resource (gas units), as bounded by a fee-market transaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Dummy)]
pub struct ResourceAmount(pub u64);

/// A fee-market transaction's tip.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Dummy)]
pub struct Tip(pub u64);

macros::felt_newtypes!([
    AccountDeploymentDataElem,
    BlockCommitmentSignatureElem,
    BlockHash,
    ByteCodeOffset,
    CallParam,
    CasmHash,
    ClassHash,
    ConstructorParam,
    ContractAddress,
    ContractAddressSalt,
    ContractNonce,
    EntryPoint,
    EventData,
    EventKey,
    Fee,
    L1ToL2MessageNonce,
    L1ToL2MessagePayloadElem,
    L2ToL1MessagePayloadElem,
    PaymasterDataElem,
    ResourcePricePerUnit,
    SequencerAddress,
    SierraHash,
    StateCommitment,
    StorageAddress,
    StorageValue,
    TransactionHash,
    TransactionNonce,
    TransactionSignatureElem,
]);

macros::fmt::thin_display!(BlockNumber);
macros::fmt::thin_display!(BlockTimestamp);

/// Generates a random felt below 2**250, which is always a valid field element.
#[doc(hidden)]
pub fn random_felt<R: rand::Rng + ?Sized>(rng: &mut R) -> Felt {
    let mut bytes: [u8; 32] = rng.gen();
    bytes[0] &= 0x03;
    Felt::from_bytes_be(&bytes)
}

#[cfg(test)]
mod tests {
    use crate::macro_prelude::*;
    use crate::{CallParam, ContractAddress, EntryPoint, Felt, TransactionVersion};

    #[test]
    fn constructor_entry_point() {
        let expected =
            entry_point!("0x028FFE4FF0F226A9107253E17A904099AA4F63A02A5621DE0576E5AA71BC5194");

        assert_eq!(EntryPoint::hashed(b"constructor"), expected);
    }

    #[test]
    fn felt_bytes_is_a_short_string() {
        assert_eq!(felt_bytes!(b"0.1.0"), felt!("0x302e312e30"));
    }

    mod deployed_contract_address {
        use super::*;

        #[test]
        fn is_below_the_address_bound() {
            let bound = felt!("0x7ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff00");
            let address = ContractAddress::deployed_contract_address(
                [call_param!("0x1"), call_param!("0x2")].into_iter(),
                &contract_address_salt!("0x1234"),
                &class_hash!("0xdeadbeef"),
            );

            assert!(address.0 < bound);
        }

        #[test]
        fn depends_on_every_input() {
            let calldata = || [call_param!("0x1"), call_param!("0x2")].into_iter();
            let salt = contract_address_salt!("0x1234");
            let class = class_hash!("0xdeadbeef");

            let base = ContractAddress::deployed_contract_address(calldata(), &salt, &class);

            assert_eq!(
                ContractAddress::deployed_contract_address(calldata(), &salt, &class),
                base
            );
            assert_ne!(
                ContractAddress::deployed_contract_address(
                    calldata(),
                    &contract_address_salt!("0x1235"),
                    &class
                ),
                base
            );
            assert_ne!(
                ContractAddress::deployed_contract_address(
                    calldata(),
                    &salt,
                    &class_hash!("0xdeadbeee")
                ),
                base
            );
            assert_ne!(
                ContractAddress::deployed_contract_address(
                    std::iter::empty::<CallParam>(),
                    &salt,
                    &class
                ),
                base
            );
        }
    }

    mod transaction_version {
        use super::*;

        #[test]
        fn query_version_is_stripped() {
            let query_v3 = TransactionVersion(felt!("0x100000000000000000000000000000003"));

            assert!(query_v3.has_query_version());
            assert_eq!(query_v3.without_query_version(), 3);
            assert!(!TransactionVersion::THREE.has_query_version());
        }

        #[test]
        fn zero() {
            assert!(TransactionVersion::ZERO.is_zero());
            assert!(TransactionVersion(Felt::from(1u128 << 127)).without_query_version() != 0);
        }
    }
}

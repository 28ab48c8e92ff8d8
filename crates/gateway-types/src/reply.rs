//! Structures used for deserializing replies from the Starknet feeder gateway.
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sncore_common::{
    BlockCommitmentSignatureElem, BlockHash, BlockNumber, BlockTimestamp, GasPrice,
    SequencerAddress, StarknetVersion, StateCommitment,
};
use sncore_serde::GasPriceAsHexStr;

/// Used to deserialize replies to Starknet block requests.
///
/// Commitment fields served by newer gateways are not part of the domain
/// model and are skipped.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Block {
    /// Missing for blocks which are not finalized.
    #[serde(default)]
    pub block_hash: Option<BlockHash>,
    pub block_number: BlockNumber,
    /// ETH-denominated L1 gas price. Excluded in blocks prior to Starknet 0.9
    /// and replaced by [Block::l1_gas_price] in 0.13.
    #[serde_as(as = "Option<GasPriceAsHexStr>")]
    #[serde(default)]
    pub gas_price: Option<GasPrice>,
    /// STRK-denominated L1 gas price, between its introduction and 0.13.
    #[serde_as(as = "Option<GasPriceAsHexStr>")]
    #[serde(default)]
    pub strk_l1_gas_price: Option<GasPrice>,
    #[serde(default)]
    pub l1_gas_price: Option<GasPrices>,
    #[serde(default)]
    pub l1_data_gas_price: Option<GasPrices>,
    #[serde(default)]
    pub l2_gas_price: Option<GasPrices>,
    #[serde(default)]
    pub l1_da_mode: L1DataAvailabilityMode,
    pub parent_block_hash: BlockHash,
    /// Excluded in blocks prior to Starknet 0.8
    #[serde(default)]
    pub sequencer_address: Option<SequencerAddress>,
    // Newer gateways call this `state_commitment`.
    #[serde(default, alias = "state_commitment")]
    pub state_root: Option<StateCommitment>,
    pub status: Status,
    pub timestamp: BlockTimestamp,
    pub transaction_receipts: Vec<Option<transaction::Receipt>>,
    pub transactions: Vec<transaction::Transaction>,
    /// Version metadata introduced in 0.9.1, older blocks will not have it.
    #[serde(default)]
    pub starknet_version: StarknetVersion,
}

impl Block {
    /// The L1 gas price in wei: the structured price if present, otherwise
    /// the legacy flat field, otherwise zero.
    pub fn l1_gas_price_eth(&self) -> GasPrice {
        self.l1_gas_price
            .map(|p| p.price_in_wei)
            .or(self.gas_price)
            .unwrap_or(GasPrice::ZERO)
    }

    /// The L1 gas price in fri: the structured price if present, otherwise
    /// the legacy flat field, otherwise zero.
    pub fn l1_gas_price_strk(&self) -> GasPrice {
        self.l1_gas_price
            .map(|p| p.price_in_fri)
            .or(self.strk_l1_gas_price)
            .unwrap_or(GasPrice::ZERO)
    }
}

/// A block which is still being built by the sequencer.
///
/// `transaction_state_diffs[i]` is the diff of `transactions[i]` and is
/// `null` for transactions which have not been executed yet. The same holds
/// for the receipts.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PreConfirmedBlock {
    pub status: Status,
    /// Version metadata introduced in 0.9.1, older blocks will not have it.
    #[serde(default)]
    pub starknet_version: StarknetVersion,
    pub l1_gas_price: GasPrices,
    #[serde(default)]
    pub l1_data_gas_price: Option<GasPrices>,
    #[serde(default)]
    pub l2_gas_price: Option<GasPrices>,
    pub timestamp: BlockTimestamp,
    #[serde(default)]
    pub sequencer_address: Option<SequencerAddress>,
    #[serde(default)]
    pub l1_da_mode: L1DataAvailabilityMode,
    pub transactions: Vec<transaction::Transaction>,
    pub transaction_receipts: Vec<Option<transaction::Receipt>>,
    pub transaction_state_diffs: Vec<Option<state_update::StateDiff>>,
}

/// A gas price quoted in both fee units.
#[serde_as]
#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GasPrices {
    #[serde_as(as = "GasPriceAsHexStr")]
    pub price_in_wei: GasPrice,
    #[serde_as(as = "GasPriceAsHexStr")]
    pub price_in_fri: GasPrice,
}

impl From<GasPrices> for sncore_common::GasPrices {
    fn from(value: GasPrices) -> Self {
        Self {
            price_in_wei: value.price_in_wei,
            price_in_fri: value.price_in_fri,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum L1DataAvailabilityMode {
    #[default]
    Calldata,
    Blob,
}

impl From<L1DataAvailabilityMode> for sncore_common::L1DataAvailabilityMode {
    fn from(value: L1DataAvailabilityMode) -> Self {
        match value {
            L1DataAvailabilityMode::Calldata => Self::Calldata,
            L1DataAvailabilityMode::Blob => Self::Blob,
        }
    }
}

/// Block and transaction status values.
#[derive(Copy, Clone, Default, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub enum Status {
    #[serde(rename = "NOT_RECEIVED")]
    NotReceived,
    #[serde(rename = "RECEIVED")]
    Received,
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "PRE_CONFIRMED")]
    PreConfirmed,
    #[serde(rename = "REJECTED")]
    Rejected,
    #[serde(rename = "ACCEPTED_ON_L1")]
    AcceptedOnL1,
    #[serde(rename = "ACCEPTED_ON_L2")]
    #[default]
    AcceptedOnL2,
    #[serde(rename = "REVERTED")]
    Reverted,
    #[serde(rename = "ABORTED")]
    Aborted,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NotReceived => write!(f, "NOT_RECEIVED"),
            Status::Received => write!(f, "RECEIVED"),
            Status::Pending => write!(f, "PENDING"),
            Status::PreConfirmed => write!(f, "PRE_CONFIRMED"),
            Status::Rejected => write!(f, "REJECTED"),
            Status::AcceptedOnL1 => write!(f, "ACCEPTED_ON_L1"),
            Status::AcceptedOnL2 => write!(f, "ACCEPTED_ON_L2"),
            Status::Reverted => write!(f, "REVERTED"),
            Status::Aborted => write!(f, "ABORTED"),
        }
    }
}

/// Types used when deserializing L2 transaction related data.
pub mod transaction {
    use std::collections::HashMap;

    use fake::{Dummy, Fake, Faker};
    use rand::Rng;
    use serde::{Deserialize, Serialize};
    use serde_with::serde_as;
    use sncore_common::{
        AccountDeploymentDataElem, CallParam, CasmHash, ClassHash, ConstructorParam,
        ContractAddress, ContractAddressSalt, EntryPoint, EthereumAddress, EventData, EventKey,
        Fee, Felt, L1ToL2MessageNonce, L1ToL2MessagePayloadElem, L2ToL1MessagePayloadElem,
        PaymasterDataElem, ResourcePricePerUnit, TransactionHash, TransactionNonce,
        TransactionSignatureElem, TransactionVersion,
    };
    use sncore_serde::{DecimalOrHexFelt, EthereumAddressAsHexStr};

    /// The `type` tag of a transaction.
    ///
    /// Unrecognised tags are kept so that the adapter can reject them with a
    /// meaningful error instead of failing the whole reply at deserialization.
    #[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
    #[serde(from = "String", into = "String")]
    pub enum TransactionType {
        Declare,
        Deploy,
        DeployAccount,
        #[default]
        Invoke,
        L1Handler,
        Unknown(String),
    }

    impl From<String> for TransactionType {
        fn from(value: String) -> Self {
            match value.as_str() {
                "DECLARE" => Self::Declare,
                "DEPLOY" => Self::Deploy,
                "DEPLOY_ACCOUNT" => Self::DeployAccount,
                "INVOKE_FUNCTION" | "INVOKE" => Self::Invoke,
                "L1_HANDLER" => Self::L1Handler,
                _ => Self::Unknown(value),
            }
        }
    }

    impl From<TransactionType> for String {
        fn from(value: TransactionType) -> Self {
            value.to_string()
        }
    }

    impl std::fmt::Display for TransactionType {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                TransactionType::Declare => f.write_str("DECLARE"),
                TransactionType::Deploy => f.write_str("DEPLOY"),
                TransactionType::DeployAccount => f.write_str("DEPLOY_ACCOUNT"),
                TransactionType::Invoke => f.write_str("INVOKE_FUNCTION"),
                TransactionType::L1Handler => f.write_str("L1_HANDLER"),
                TransactionType::Unknown(other) => f.write_str(other),
            }
        }
    }

    /// Represents deserialized L2 transaction data of any kind.
    ///
    /// Which fields are present depends on both the kind and the version of
    /// the transaction.
    #[serde_as]
    #[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
    pub struct Transaction {
        pub transaction_hash: TransactionHash,
        pub r#type: TransactionType,
        #[serde(default)]
        pub version: Option<TransactionVersion>,
        #[serde(default)]
        pub contract_address: Option<ContractAddress>,
        #[serde(default)]
        pub contract_address_salt: Option<ContractAddressSalt>,
        #[serde(default)]
        pub class_hash: Option<ClassHash>,
        #[serde_as(as = "Option<Vec<DecimalOrHexFelt>>")]
        #[serde(default)]
        pub constructor_calldata: Option<Vec<ConstructorParam>>,
        #[serde(default)]
        pub sender_address: Option<ContractAddress>,
        #[serde(default)]
        pub entry_point_selector: Option<EntryPoint>,
        #[serde_as(as = "Option<Vec<DecimalOrHexFelt>>")]
        #[serde(default)]
        pub calldata: Option<Vec<CallParam>>,
        #[serde_as(as = "Option<Vec<DecimalOrHexFelt>>")]
        #[serde(default)]
        pub signature: Option<Vec<TransactionSignatureElem>>,
        #[serde(default)]
        pub max_fee: Option<Fee>,
        #[serde(default)]
        pub nonce: Option<TransactionNonce>,
        #[serde(default)]
        pub compiled_class_hash: Option<CasmHash>,
        #[serde(default)]
        pub resource_bounds: Option<HashMap<Resource, ResourceBound>>,
        #[serde(default)]
        pub tip: Option<Felt>,
        #[serde(default)]
        pub nonce_data_availability_mode: Option<DataAvailabilityMode>,
        #[serde(default)]
        pub fee_data_availability_mode: Option<DataAvailabilityMode>,
        #[serde_as(as = "Option<Vec<DecimalOrHexFelt>>")]
        #[serde(default)]
        pub paymaster_data: Option<Vec<PaymasterDataElem>>,
        #[serde_as(as = "Option<Vec<DecimalOrHexFelt>>")]
        #[serde(default)]
        pub account_deployment_data: Option<Vec<AccountDeploymentDataElem>>,
    }

    impl<T> Dummy<T> for Transaction {
        fn dummy_with_rng<R: Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
            let r#type = match rng.gen_range(0..5) {
                0 => TransactionType::Declare,
                1 => TransactionType::Deploy,
                2 => TransactionType::DeployAccount,
                3 => TransactionType::Invoke,
                _ => TransactionType::L1Handler,
            };

            // Every field a kind may require is present, for any version.
            Self {
                transaction_hash: Faker.fake_with_rng(rng),
                r#type,
                version: Some(TransactionVersion::THREE),
                contract_address: Some(Faker.fake_with_rng(rng)),
                contract_address_salt: Some(Faker.fake_with_rng(rng)),
                class_hash: Some(Faker.fake_with_rng(rng)),
                constructor_calldata: Some(Faker.fake_with_rng(rng)),
                sender_address: Some(Faker.fake_with_rng(rng)),
                entry_point_selector: Some(Faker.fake_with_rng(rng)),
                calldata: Some(Faker.fake_with_rng(rng)),
                signature: Some(Faker.fake_with_rng(rng)),
                max_fee: None,
                nonce: Some(Faker.fake_with_rng(rng)),
                compiled_class_hash: Some(Faker.fake_with_rng(rng)),
                resource_bounds: Some(HashMap::from([
                    (Resource::L1Gas, Faker.fake_with_rng(rng)),
                    (Resource::L2Gas, Faker.fake_with_rng(rng)),
                    (Resource::L1DataGas, Faker.fake_with_rng(rng)),
                ])),
                tip: Some(Felt::from(rng.gen::<u64>())),
                nonce_data_availability_mode: Some(DataAvailabilityMode::L1),
                fee_data_availability_mode: Some(DataAvailabilityMode::L1),
                paymaster_data: Some(vec![]),
                account_deployment_data: Some(vec![]),
            }
        }
    }

    #[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum Resource {
        L1Gas,
        L2Gas,
        L1DataGas,
    }

    impl From<Resource> for sncore_common::transaction::Resource {
        fn from(value: Resource) -> Self {
            match value {
                Resource::L1Gas => Self::L1Gas,
                Resource::L2Gas => Self::L2Gas,
                Resource::L1DataGas => Self::L1DataGas,
            }
        }
    }

    #[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
    #[serde(deny_unknown_fields)]
    pub struct ResourceBound {
        /// Served as a felt, but only the low 64 bits are meaningful.
        pub max_amount: Felt,
        pub max_price_per_unit: ResourcePricePerUnit,
    }

    impl<T> Dummy<T> for ResourceBound {
        fn dummy_with_rng<R: Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
            Self {
                max_amount: Felt::from(rng.gen::<u64>()),
                max_price_per_unit: Faker.fake_with_rng(rng),
            }
        }
    }

    #[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
    pub enum DataAvailabilityMode {
        L1,
        L2,
    }

    impl From<DataAvailabilityMode> for sncore_common::transaction::DataAvailabilityMode {
        fn from(value: DataAvailabilityMode) -> Self {
            match value {
                DataAvailabilityMode::L1 => Self::L1,
                DataAvailabilityMode::L2 => Self::L2,
            }
        }
    }

    /// Represents execution resources for L2 transaction.
    #[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
    #[serde(deny_unknown_fields)]
    pub struct ExecutionResources {
        pub builtin_instance_counter: BuiltinCounters,
        pub n_steps: u64,
        #[serde(default)]
        pub n_memory_holes: u64,
        // Introduced in v0.13.1
        #[serde(default)]
        pub data_availability: Option<L1Gas>,
        // Introduced in v0.13.2
        #[serde(default)]
        pub total_gas_consumed: Option<GasConsumed>,
    }

    impl<T> Dummy<T> for ExecutionResources {
        fn dummy_with_rng<R: Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
            Self {
                builtin_instance_counter: Faker.fake_with_rng(rng),
                n_steps: rng.next_u32() as u64,
                n_memory_holes: rng.next_u32() as u64,
                data_availability: Some(Faker.fake_with_rng(rng)),
                total_gas_consumed: Some(Faker.fake_with_rng(rng)),
            }
        }
    }

    #[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Dummy)]
    #[serde(default)]
    pub struct L1Gas {
        pub l1_gas: u64,
        pub l1_data_gas: u64,
    }

    #[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Dummy)]
    #[serde(default)]
    pub struct GasConsumed {
        pub l1_gas: u64,
        pub l1_data_gas: u64,
        pub l2_gas: u64,
    }

    // This struct purposefully allows for unknown fields as it is not critical to
    // store these counters perfectly. Failure would be far more costly than simply
    // ignoring them.
    #[derive(Copy, Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq, Dummy)]
    #[serde(default)]
    pub struct BuiltinCounters {
        pub output_builtin: u64,
        pub pedersen_builtin: u64,
        pub range_check_builtin: u64,
        pub ecdsa_builtin: u64,
        pub bitwise_builtin: u64,
        pub ec_op_builtin: u64,
        pub keccak_builtin: u64,
        pub poseidon_builtin: u64,
        pub segment_arena_builtin: u64,
        pub add_mod_builtin: u64,
        pub mul_mod_builtin: u64,
        pub range_check96_builtin: u64,
    }

    /// Represents a deserialized event.
    #[serde_as]
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Dummy)]
    #[serde(deny_unknown_fields)]
    pub struct Event {
        #[serde_as(as = "Vec<DecimalOrHexFelt>")]
        pub data: Vec<EventData>,
        pub from_address: ContractAddress,
        #[serde_as(as = "Vec<DecimalOrHexFelt>")]
        pub keys: Vec<EventKey>,
    }

    /// Represents deserialized L1 to L2 message.
    #[serde_as]
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
    #[serde(deny_unknown_fields)]
    pub struct L1ToL2Message {
        #[serde_as(as = "EthereumAddressAsHexStr")]
        pub from_address: EthereumAddress,
        #[serde_as(as = "Vec<DecimalOrHexFelt>")]
        pub payload: Vec<L1ToL2MessagePayloadElem>,
        pub selector: EntryPoint,
        pub to_address: ContractAddress,
        #[serde(default)]
        pub nonce: Option<L1ToL2MessageNonce>,
    }

    impl<T> Dummy<T> for L1ToL2Message {
        fn dummy_with_rng<R: Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
            // Nonces were missing in very old messages, we don't care about it
            Self {
                from_address: Faker.fake_with_rng(rng),
                payload: Faker.fake_with_rng(rng),
                selector: Faker.fake_with_rng(rng),
                to_address: Faker.fake_with_rng(rng),
                nonce: Some(Faker.fake_with_rng(rng)),
            }
        }
    }

    /// Represents deserialized L2 to L1 message.
    #[serde_as]
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Dummy)]
    #[serde(deny_unknown_fields)]
    pub struct L2ToL1Message {
        pub from_address: ContractAddress,
        #[serde_as(as = "Vec<DecimalOrHexFelt>")]
        pub payload: Vec<L2ToL1MessagePayloadElem>,
        #[serde_as(as = "EthereumAddressAsHexStr")]
        pub to_address: EthereumAddress,
    }

    #[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq, Dummy)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum ExecutionStatus {
        // This must be the default as pre v0.12.1 receipts did not contain this value and
        // were always success as reverted did not exist.
        #[default]
        Succeeded,
        Reverted,
        Rejected,
    }

    /// Represents deserialized L2 transaction receipt data.
    #[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
    pub struct Receipt {
        #[serde(default)]
        pub actual_fee: Option<Fee>,
        #[serde(default)]
        pub events: Option<Vec<Event>>,
        #[serde(default)]
        pub execution_resources: Option<ExecutionResources>,
        #[serde(default)]
        pub l1_to_l2_consumed_message: Option<L1ToL2Message>,
        #[serde(default)]
        pub l2_to_l1_messages: Option<Vec<L2ToL1Message>>,
        pub transaction_hash: TransactionHash,
        #[serde(default)]
        pub transaction_index: Option<u64>,
        // Introduced in v0.12.1
        #[serde(default)]
        pub execution_status: ExecutionStatus,
        // Introduced in v0.12.1
        /// Only present if status is [ExecutionStatus::Reverted].
        #[serde(default)]
        pub revert_error: Option<String>,
    }

    impl<T> Dummy<T> for Receipt {
        fn dummy_with_rng<R: Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
            let execution_status = Faker.fake_with_rng(rng);
            let revert_error =
                (execution_status == ExecutionStatus::Reverted).then(|| Faker.fake_with_rng(rng));

            // Those fields that were missing in very old receipts are always present
            Self {
                actual_fee: Some(Faker.fake_with_rng(rng)),
                events: Some(Faker.fake_with_rng(rng)),
                execution_resources: Some(Faker.fake_with_rng(rng)),
                l1_to_l2_consumed_message: Faker.fake_with_rng(rng),
                l2_to_l1_messages: Some(Faker.fake_with_rng(rng)),
                transaction_hash: Faker.fake_with_rng(rng),
                transaction_index: Some(rng.gen_range(0..1000)),
                execution_status,
                revert_error,
            }
        }
    }
}

/// Used to deserialize replies to Starknet state update requests.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StateUpdate {
    /// Missing for state updates of blocks which are not finalized.
    #[serde(default)]
    pub block_hash: Option<BlockHash>,
    /// Missing for state updates of blocks which are not finalized.
    #[serde(default)]
    pub new_root: Option<StateCommitment>,
    #[serde(default)]
    pub old_root: Option<StateCommitment>,
    pub state_diff: state_update::StateDiff,
}

/// Types used when deserializing state update related data.
pub mod state_update {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};
    use sncore_common::{
        CasmHash, ClassHash, ContractAddress, ContractNonce, SierraHash, StorageAddress,
        StorageValue,
    };

    /// L2 state diff.
    ///
    /// The keys of `storage_diffs` and `nonces` are contract addresses as
    /// served, and are only validated when adapted.
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
    pub struct StateDiff {
        #[serde(default)]
        pub storage_diffs: HashMap<String, Vec<StorageDiff>>,
        #[serde(default)]
        pub deployed_contracts: Vec<DeployedContract>,
        #[serde(default)]
        pub old_declared_contracts: Vec<ClassHash>,
        #[serde(default)]
        pub declared_classes: Vec<DeclaredSierraClass>,
        #[serde(default)]
        pub nonces: HashMap<String, ContractNonce>,
        #[serde(default)]
        pub replaced_classes: Vec<ReplacedClass>,
    }

    /// L2 storage diff.
    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
    #[serde(deny_unknown_fields)]
    pub struct StorageDiff {
        pub key: StorageAddress,
        pub value: StorageValue,
    }

    /// L2 contract data within state diff.
    #[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
    #[serde(deny_unknown_fields)]
    pub struct DeployedContract {
        pub address: ContractAddress,
        /// `class_hash` is the field name from cairo 0.9.0 onwards
        /// `contract_hash` is the name from cairo before 0.9.0
        #[serde(alias = "contract_hash")]
        pub class_hash: ClassHash,
    }

    /// Describes a newly declared class. Maps Sierra class hash to a Casm hash.
    #[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
    #[serde(deny_unknown_fields)]
    pub struct DeclaredSierraClass {
        pub class_hash: SierraHash,
        pub compiled_class_hash: CasmHash,
    }

    /// Describes a newly replaced class. Maps contract address to a new class.
    #[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
    #[serde(deny_unknown_fields)]
    pub struct ReplacedClass {
        pub address: ContractAddress,
        pub class_hash: ClassHash,
    }

}

/// The sequencer's signature over a block.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct BlockSignature {
    #[serde(default)]
    pub block_hash: Option<BlockHash>,
    pub signature: Vec<BlockCommitmentSignatureElem>,
}

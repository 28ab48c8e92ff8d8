pub use crate::{
    AccountDeploymentDataElem, BlockCommitmentSignatureElem, BlockHash, BlockHeader, BlockNumber,
    BlockTimestamp, ByteCodeOffset, CallParam, CasmHash, ClassHash, ConstructorParam,
    ContractAddress, ContractAddressSalt, ContractNonce, EntryPoint, EthereumAddress, EventData,
    EventKey, Fee, GasPrice, GasPrices, L1DataAvailabilityMode, L1ToL2MessageNonce,
    L1ToL2MessagePayloadElem, L2ToL1MessagePayloadElem, PaymasterDataElem, ResourceAmount,
    ResourcePricePerUnit, SequencerAddress, SierraHash, StarknetVersion, StateCommitment,
    StateDiff, StateUpdate, StorageAddress, StorageValue, Tip, TransactionHash, TransactionNonce,
    TransactionSignatureElem, TransactionVersion,
};

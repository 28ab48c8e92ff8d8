use fake::Dummy;

use crate::receipt::Receipt;
use crate::transaction::Transaction;
use crate::{
    BlockCommitmentSignatureElem, BlockHash, BlockNumber, BlockTimestamp, EventsBloom, GasPrices,
    L1DataAvailabilityMode, SequencerAddress, StarknetVersion, StateCommitment,
};

/// The header of a block.
///
/// The hash, parent hash and state commitment are `None` for blocks which
/// have not been finalized yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct BlockHeader {
    pub hash: Option<BlockHash>,
    pub parent_hash: Option<BlockHash>,
    pub number: BlockNumber,
    pub state_commitment: Option<StateCommitment>,
    pub timestamp: BlockTimestamp,
    pub starknet_version: StarknetVersion,
    pub sequencer_address: Option<SequencerAddress>,
    pub transaction_count: u64,
    pub event_count: u64,
    pub events_bloom: EventsBloom,
    pub l1_gas_price: GasPrices,
    pub l1_data_gas_price: Option<GasPrices>,
    pub l2_gas_price: Option<GasPrices>,
    pub l1_da_mode: L1DataAvailabilityMode,
    /// `None` until signatures can be known. `Some` of an empty list means
    /// the block is final but no signature has been recorded (yet).
    pub signatures: Option<Vec<Vec<BlockCommitmentSignatureElem>>>,
}

pub struct BlockHeaderBuilder(BlockHeader);

impl BlockHeader {
    /// Creates a [builder](BlockHeaderBuilder) with all fields initialized to default values.
    pub fn builder() -> BlockHeaderBuilder {
        BlockHeaderBuilder(BlockHeader::default())
    }

    pub fn is_finalized(&self) -> bool {
        self.hash.is_some()
    }
}

impl BlockHeaderBuilder {
    pub fn with_number(mut self, number: BlockNumber) -> Self {
        self.0.number = number;
        self
    }

    pub fn with_parent_hash(mut self, parent_hash: BlockHash) -> Self {
        self.0.parent_hash = Some(parent_hash);
        self
    }

    pub fn with_state_commitment(mut self, state_commitment: StateCommitment) -> Self {
        self.0.state_commitment = Some(state_commitment);
        self
    }

    pub fn with_timestamp(mut self, timestamp: BlockTimestamp) -> Self {
        self.0.timestamp = timestamp;
        self
    }

    pub fn with_starknet_version(mut self, starknet_version: StarknetVersion) -> Self {
        self.0.starknet_version = starknet_version;
        self
    }

    pub fn with_sequencer_address(mut self, sequencer_address: SequencerAddress) -> Self {
        self.0.sequencer_address = Some(sequencer_address);
        self
    }

    pub fn with_transaction_count(mut self, transaction_count: u64) -> Self {
        self.0.transaction_count = transaction_count;
        self
    }

    pub fn with_event_count(mut self, event_count: u64) -> Self {
        self.0.event_count = event_count;
        self
    }

    pub fn with_events_bloom(mut self, events_bloom: EventsBloom) -> Self {
        self.0.events_bloom = events_bloom;
        self
    }

    pub fn with_l1_gas_price(mut self, l1_gas_price: GasPrices) -> Self {
        self.0.l1_gas_price = l1_gas_price;
        self
    }

    pub fn with_l1_data_gas_price(mut self, l1_data_gas_price: GasPrices) -> Self {
        self.0.l1_data_gas_price = Some(l1_data_gas_price);
        self
    }

    pub fn with_l2_gas_price(mut self, l2_gas_price: GasPrices) -> Self {
        self.0.l2_gas_price = Some(l2_gas_price);
        self
    }

    pub fn with_l1_da_mode(mut self, l1_da_mode: L1DataAvailabilityMode) -> Self {
        self.0.l1_da_mode = l1_da_mode;
        self
    }

    pub fn with_signatures(mut self, signatures: Vec<Vec<BlockCommitmentSignatureElem>>) -> Self {
        self.0.signatures = Some(signatures);
        self
    }

    /// Finishes a header which has no hash yet, i.e. a pre-confirmed one.
    pub fn finalize(self) -> BlockHeader {
        self.0
    }

    pub fn finalize_with_hash(mut self, hash: BlockHash) -> BlockHeader {
        self.0.hash = Some(hash);
        self.0
    }
}

/// A block with its transactions and their receipts.
///
/// `receipts[i]` belongs to `transactions[i]`. A finalized block has exactly
/// one receipt per transaction; a pre-confirmed block only carries the
/// transactions which have been executed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
    pub receipts: Vec<Receipt>,
}

impl Block {
    pub fn event_count(&self) -> usize {
        self.receipts.iter().map(|r| r.events.len()).sum()
    }

    pub fn transaction_data(&self) -> impl Iterator<Item = (&Transaction, &Receipt)> {
        self.transactions.iter().zip(self.receipts.iter())
    }
}

#[cfg(test)]
mod tests {
    use fake::{Fake, Faker};

    use super::*;

    #[test]
    fn event_count_sums_receipts() {
        let mut block: Block = Faker.fake();
        let expected: usize = block.receipts.iter().map(|r| r.events.len()).sum();
        assert_eq!(block.event_count(), expected);

        block.receipts.clear();
        assert_eq!(block.event_count(), 0);
    }
}

use crate::transaction::Transaction;
use crate::{Block, StateDiff, StateUpdate};

/// A snapshot of a block which is still being built.
///
/// Its transactions are split into the ones which have been executed, found
/// in [PreConfirmed::block] together with their receipts and individual state
/// diffs, and the candidates which are queued behind them but not executed
/// yet. The [state update](PreConfirmed::state_update) is the squash of the
/// executed transactions' diffs.
///
/// A new snapshot is built for every poll of the upstream source; a snapshot
/// is never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct PreConfirmed {
    block: Block,
    state_update: StateUpdate,
    transaction_state_diffs: Vec<StateDiff>,
    candidate_transactions: Vec<Transaction>,
}

impl PreConfirmed {
    /// `transaction_state_diffs[i]` must be the diff of `block.transactions[i]`.
    pub fn new(
        block: Block,
        state_update: StateUpdate,
        transaction_state_diffs: Vec<StateDiff>,
        candidate_transactions: Vec<Transaction>,
    ) -> Self {
        debug_assert_eq!(block.transactions.len(), transaction_state_diffs.len());
        debug_assert_eq!(block.transactions.len(), block.receipts.len());

        Self {
            block,
            state_update,
            transaction_state_diffs,
            candidate_transactions,
        }
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn state_update(&self) -> &StateUpdate {
        &self.state_update
    }

    pub fn transaction_state_diffs(&self) -> &[StateDiff] {
        &self.transaction_state_diffs
    }

    pub fn candidate_transactions(&self) -> &[Transaction] {
        &self.candidate_transactions
    }

    pub fn executed_count(&self) -> usize {
        self.block.transactions.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidate_transactions.len()
    }

    /// Every transaction of the block in order, executed ones first.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.block
            .transactions
            .iter()
            .chain(self.candidate_transactions.iter())
    }
}

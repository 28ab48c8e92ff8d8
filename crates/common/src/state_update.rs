use std::collections::{HashMap, HashSet};

use fake::Dummy;

use crate::{
    BlockHash, CasmHash, ClassHash, ContractAddress, ContractNonce, SierraHash, StateCommitment,
    StorageAddress, StorageValue,
};

/// The state changes of a block, together with the roots it moves between.
///
/// The roots and block hash are `None` for blocks which are not finalized.
#[derive(Default, Debug, Clone, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct StateUpdate {
    pub block_hash: Option<BlockHash>,
    pub new_root: Option<StateCommitment>,
    pub old_root: Option<StateCommitment>,
    pub state_diff: StateDiff,
}

impl StateUpdate {
    pub fn with_block_hash(mut self, block_hash: BlockHash) -> Self {
        self.block_hash = Some(block_hash);
        self
    }

    pub fn with_state_commitment(mut self, state_commitment: StateCommitment) -> Self {
        self.new_root = Some(state_commitment);
        self
    }

    pub fn with_parent_state_commitment(
        mut self,
        parent_state_commitment: StateCommitment,
    ) -> Self {
        self.old_root = Some(parent_state_commitment);
        self
    }

    pub fn with_state_diff(mut self, state_diff: StateDiff) -> Self {
        self.state_diff = state_diff;
        self
    }
}

/// The changes to global state made by a block or a single transaction.
///
/// Each map holds at most one entry per key. [StateDiff::merge] combines two
/// consecutive diffs into one.
#[derive(Default, Debug, Clone, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct StateDiff {
    pub storage_diffs: HashMap<ContractAddress, HashMap<StorageAddress, StorageValue>>,
    pub nonces: HashMap<ContractAddress, ContractNonce>,
    pub deployed_contracts: HashMap<ContractAddress, ClassHash>,
    pub declared_v0_classes: HashSet<ClassHash>,
    pub declared_v1_classes: HashMap<SierraHash, CasmHash>,
    pub replaced_classes: HashMap<ContractAddress, ClassHash>,
}

impl StateDiff {
    /// Applies `other` on top of `self`.
    ///
    /// Every map is unioned with the entries of `other` taking precedence on
    /// key collisions. Storage is merged per contract, so `other` only
    /// overrides the individual keys it sets.
    ///
    /// This is associative and the empty diff is its identity, so a sequence of
    /// diffs can be folded into one with [StateDiff::squash].
    pub fn merge(mut self, other: StateDiff) -> Self {
        for (contract, storage) in other.storage_diffs {
            self.storage_diffs
                .entry(contract)
                .or_default()
                .extend(storage);
        }
        self.nonces.extend(other.nonces);
        self.deployed_contracts.extend(other.deployed_contracts);
        self.declared_v0_classes.extend(other.declared_v0_classes);
        self.declared_v1_classes.extend(other.declared_v1_classes);
        self.replaced_classes.extend(other.replaced_classes);
        self
    }

    /// Merges the diffs in order, starting from the empty diff.
    pub fn squash(diffs: impl IntoIterator<Item = StateDiff>) -> Self {
        diffs.into_iter().fold(StateDiff::default(), StateDiff::merge)
    }

    pub fn with_contract_nonce(mut self, contract: ContractAddress, nonce: ContractNonce) -> Self {
        self.nonces.insert(contract, nonce);
        self
    }

    pub fn with_storage_update(
        mut self,
        contract: ContractAddress,
        key: StorageAddress,
        value: StorageValue,
    ) -> Self {
        self.storage_diffs
            .entry(contract)
            .or_default()
            .insert(key, value);
        self
    }

    pub fn with_deployed_contract(mut self, contract: ContractAddress, class: ClassHash) -> Self {
        self.deployed_contracts.insert(contract, class);
        self
    }

    pub fn with_replaced_class(mut self, contract: ContractAddress, class: ClassHash) -> Self {
        self.replaced_classes.insert(contract, class);
        self
    }

    pub fn with_declared_sierra_class(mut self, sierra: SierraHash, casm: CasmHash) -> Self {
        self.declared_v1_classes.insert(sierra, casm);
        self
    }

    pub fn with_declared_cairo_class(mut self, cairo: ClassHash) -> Self {
        self.declared_v0_classes.insert(cairo);
        self
    }

    /// The number of individual changes in this diff.
    ///
    /// The total amount of:
    /// - contract storage updates
    /// - contract nonce updates
    /// - contract deployments
    /// - contract class replacements
    /// - class declarations
    pub fn change_count(&self) -> usize {
        self.storage_diffs.values().map(HashMap::len).sum::<usize>()
            + self.nonces.len()
            + self.deployed_contracts.len()
            + self.replaced_classes.len()
            + self.declared_v0_classes.len()
            + self.declared_v1_classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.change_count() == 0
    }

    /// Returns the contract's new [nonce](ContractNonce) value if it exists in
    /// this diff.
    ///
    /// Note that this will return [Some(ContractNonce::ZERO)] for a contract
    /// that has been deployed, but without an explicit nonce update.
    pub fn contract_nonce(&self, contract: ContractAddress) -> Option<ContractNonce> {
        self.nonces.get(&contract).copied().or_else(|| {
            self.deployed_contracts
                .contains_key(&contract)
                .then_some(ContractNonce::ZERO)
        })
    }

    /// A contract's new class hash, if it was deployed or replaced in this
    /// diff.
    pub fn contract_class(&self, contract: ContractAddress) -> Option<ClassHash> {
        self.replaced_classes
            .get(&contract)
            .or_else(|| self.deployed_contracts.get(&contract))
            .copied()
    }

    /// Returns true if the class was declared as either a cairo 0 or sierra
    /// class.
    pub fn class_is_declared(&self, class: ClassHash) -> bool {
        self.declared_v0_classes.contains(&class)
            || self.declared_v1_classes.contains_key(&SierraHash(class.0))
    }

    /// The new storage value if it exists in this diff.
    ///
    /// Note that this will also return the default zero value for a contract
    /// that has been deployed, but without an explicit storage update.
    pub fn storage_value(
        &self,
        contract: ContractAddress,
        key: StorageAddress,
    ) -> Option<StorageValue> {
        self.storage_diffs
            .get(&contract)
            .and_then(|storage| storage.get(&key).copied())
            .or_else(|| {
                // Deployed in this diff but the key has not been set yet.
                self.deployed_contracts
                    .contains_key(&contract)
                    .then_some(StorageValue::ZERO)
            })
    }
}

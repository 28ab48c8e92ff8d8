use fake::Dummy;

use crate::event::Event;
use crate::prelude::*;

#[derive(Clone, Default, Debug, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct Receipt {
    pub transaction_hash: TransactionHash,
    pub actual_fee: Fee,
    pub fee_unit: FeeUnit,
    pub events: Vec<Event>,
    pub execution_resources: Option<ExecutionResources>,
    pub l1_to_l2_message: Option<L1ToL2Message>,
    pub l2_to_l1_messages: Vec<L2ToL1Message>,
    pub execution_status: ExecutionStatus,
}

impl Receipt {
    pub fn is_reverted(&self) -> bool {
        matches!(self.execution_status, ExecutionStatus::Reverted { .. })
    }

    pub fn revert_reason(&self) -> Option<&str> {
        match &self.execution_status {
            ExecutionStatus::Succeeded => None,
            ExecutionStatus::Reverted { reason } => Some(reason.as_str()),
        }
    }
}

/// The unit the [Receipt::actual_fee] is denominated in.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub enum FeeUnit {
    #[default]
    Wei,
    Fri,
}

#[derive(Clone, Debug, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct L1ToL2Message {
    pub from_address: EthereumAddress,
    pub to_address: ContractAddress,
    pub selector: EntryPoint,
    pub payload: Vec<L1ToL2MessagePayloadElem>,
    /// Missing in very old messages.
    pub nonce: Option<L1ToL2MessageNonce>,
}

#[derive(Clone, Debug, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct L2ToL1Message {
    pub from_address: ContractAddress,
    pub payload: Vec<L2ToL1MessagePayloadElem>,
    pub to_address: EthereumAddress,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct ExecutionResources {
    pub builtins: BuiltinCounters,
    pub n_steps: u64,
    pub n_memory_holes: u64,
    /// Introduced in v0.13.1.
    pub data_availability: Option<L1Gas>,
    /// Introduced in v0.13.2.
    pub total_gas_consumed: Option<GasConsumed>,
}

/// Gas spent on publishing data to L1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct L1Gas {
    pub l1_gas: u64,
    pub l1_data_gas: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct GasConsumed {
    pub l1_gas: u64,
    pub l1_data_gas: u64,
    pub l2_gas: u64,
}

/// Instance counts per builtin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct BuiltinCounters {
    pub output: u64,
    pub pedersen: u64,
    pub range_check: u64,
    pub ecdsa: u64,
    pub bitwise: u64,
    pub ec_op: u64,
    pub keccak: u64,
    pub poseidon: u64,
    pub segment_arena: u64,
    pub add_mod: u64,
    pub mul_mod: u64,
    pub range_check96: u64,
}

#[derive(Clone, Default, Debug, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub enum ExecutionStatus {
    // This must be the default as pre v0.12.1 receipts did not contain this value and
    // were always success as reverted did not exist.
    #[default]
    Succeeded,
    Reverted {
        reason: String,
    },
}

//! Conversion of string keyed gateway state diffs into felt keyed ones.
use std::collections::HashMap;

use sncore_common::{ContractAddress, StateDiff, StateUpdate};
use sncore_gateway_types::reply::{self, state_update as gw};
use sncore_serde::felt_from_dec_or_hex_str;

use crate::AdaptError;

pub fn adapt_state_update(update: reply::StateUpdate) -> Result<StateUpdate, AdaptError> {
    Ok(StateUpdate {
        block_hash: update.block_hash,
        new_root: update.new_root,
        old_root: update.old_root,
        state_diff: adapt_state_diff(update.state_diff)?,
    })
}

/// Every contract address key must parse as a felt, otherwise this fails
/// with [AdaptError::InvalidAddress].
pub fn adapt_state_diff(diff: gw::StateDiff) -> Result<StateDiff, AdaptError> {
    let storage_diffs = diff
        .storage_diffs
        .into_iter()
        .map(|(address, updates)| {
            let updates = updates
                .into_iter()
                .map(|update| (update.key, update.value))
                .collect::<HashMap<_, _>>();
            Ok((parse_address(&address)?, updates))
        })
        .collect::<Result<HashMap<_, _>, AdaptError>>()?;

    let nonces = diff
        .nonces
        .into_iter()
        .map(|(address, nonce)| Ok((parse_address(&address)?, nonce)))
        .collect::<Result<HashMap<_, _>, AdaptError>>()?;

    Ok(StateDiff {
        storage_diffs,
        nonces,
        deployed_contracts: diff
            .deployed_contracts
            .into_iter()
            .map(|deployed| (deployed.address, deployed.class_hash))
            .collect(),
        declared_v0_classes: diff.old_declared_contracts.into_iter().collect(),
        declared_v1_classes: diff
            .declared_classes
            .into_iter()
            .map(|declared| (declared.class_hash, declared.compiled_class_hash))
            .collect(),
        replaced_classes: diff
            .replaced_classes
            .into_iter()
            .map(|replaced| (replaced.address, replaced.class_hash))
            .collect(),
    })
}

fn parse_address(address: &str) -> Result<ContractAddress, AdaptError> {
    felt_from_dec_or_hex_str(address)
        .map(ContractAddress)
        .map_err(|source| AdaptError::InvalidAddress {
            address: address.to_owned(),
            source,
        })
}

//! Assembly of finalized and pre-confirmed blocks.
use sncore_common::receipt::Receipt;
use sncore_common::transaction::Transaction;
use sncore_common::{
    Block, BlockHeader, BlockNumber, EventsBloom, GasPrices, PreConfirmed, StateDiff, StateUpdate,
};
use sncore_gateway_types::reply::{self, transaction as gw, Status};

use crate::receipt::adapt_receipt;
use crate::state_diff::adapt_state_diff;
use crate::transaction::adapt_transaction;
use crate::AdaptError;

/// Adapts a block and its transactions and receipts.
///
/// The header's signatures hold the sequencer's signature if one is given,
/// and are empty otherwise.
pub fn adapt_block(
    block: Option<reply::Block>,
    signature: Option<reply::BlockSignature>,
) -> Result<Block, AdaptError> {
    let block = block.ok_or(AdaptError::NilInput("block"))?;

    if block.transactions.len() != block.transaction_receipts.len() {
        return Err(AdaptError::ReceiptCountMismatch {
            transactions: block.transactions.len(),
            receipts: block.transaction_receipts.len(),
        });
    }

    let l1_gas_price = GasPrices {
        price_in_wei: block.l1_gas_price_eth(),
        price_in_fri: block.l1_gas_price_strk(),
    };

    let transactions = adapt_transactions(block.transactions)?;
    let receipts = adapt_executed_receipts(block.transaction_receipts)?;
    let event_count = event_count(&receipts);

    let mut header = BlockHeader::builder()
        .with_number(block.block_number)
        .with_parent_hash(block.parent_block_hash)
        .with_timestamp(block.timestamp)
        .with_starknet_version(block.starknet_version)
        .with_transaction_count(transactions.len() as u64)
        .with_event_count(event_count)
        .with_events_bloom(EventsBloom::from_receipts(&receipts))
        .with_l1_gas_price(l1_gas_price)
        .with_l1_da_mode(block.l1_da_mode.into())
        .with_signatures(signature.map(|s| vec![s.signature]).unwrap_or_default());
    if let Some(state_root) = block.state_root {
        header = header.with_state_commitment(state_root);
    }
    if let Some(sequencer_address) = block.sequencer_address {
        header = header.with_sequencer_address(sequencer_address);
    }
    if let Some(price) = block.l1_data_gas_price {
        header = header.with_l1_data_gas_price(price.into());
    }
    if let Some(price) = block.l2_gas_price {
        header = header.with_l2_gas_price(price.into());
    }
    let header = match block.block_hash {
        Some(hash) => header.finalize_with_hash(hash),
        None => header.finalize(),
    };

    tracing::debug!(
        number=%header.number,
        transactions=%header.transaction_count,
        events=%header.event_count,
        "Adapted block"
    );

    Ok(Block {
        header,
        transactions,
        receipts,
    })
}

/// Adapts a block which the sequencer is still building.
///
/// The transactions with a state diff have been executed; the diffs are
/// contiguous from the start, so the first missing diff marks the first
/// candidate transaction. The block has no hash, parent hash, state
/// commitment or signatures yet, and its counts only cover the executed
/// transactions.
pub fn adapt_pre_confirmed_block(
    block: Option<reply::PreConfirmedBlock>,
    number: BlockNumber,
) -> Result<PreConfirmed, AdaptError> {
    let block = block.ok_or(AdaptError::NilInput("pre-confirmed block"))?;

    if block.status != Status::PreConfirmed {
        return Err(AdaptError::InvalidStatus(block.status));
    }

    let executed = block
        .transaction_state_diffs
        .iter()
        .take_while(|diff| diff.is_some())
        .count()
        .min(block.transactions.len());

    let mut transactions = block.transactions;
    let candidates = transactions.split_off(executed);
    let transactions = adapt_transactions(transactions)?;
    let candidate_transactions = adapt_transactions(candidates)?;

    let receipts = block
        .transaction_receipts
        .into_iter()
        .take(executed)
        .collect::<Vec<_>>();
    if receipts.len() != executed {
        return Err(AdaptError::NilInput("receipt"));
    }
    let receipts = adapt_executed_receipts(receipts)?;

    let transaction_state_diffs = block
        .transaction_state_diffs
        .into_iter()
        .take(executed)
        .flatten()
        .map(adapt_state_diff)
        .collect::<Result<Vec<_>, _>>()?;
    let state_diff = StateDiff::squash(transaction_state_diffs.iter().cloned());
    tracing::trace!(
        diffs=%transaction_state_diffs.len(),
        changes=%state_diff.change_count(),
        "Squashed transaction state diffs"
    );

    let event_count = event_count(&receipts);

    let mut header = BlockHeader::builder()
        .with_number(number)
        .with_timestamp(block.timestamp)
        .with_starknet_version(block.starknet_version)
        .with_transaction_count(transactions.len() as u64)
        .with_event_count(event_count)
        .with_events_bloom(EventsBloom::from_receipts(&receipts))
        .with_l1_gas_price(block.l1_gas_price.into())
        .with_l1_da_mode(block.l1_da_mode.into());
    if let Some(sequencer_address) = block.sequencer_address {
        header = header.with_sequencer_address(sequencer_address);
    }
    if let Some(price) = block.l1_data_gas_price {
        header = header.with_l1_data_gas_price(price.into());
    }
    if let Some(price) = block.l2_gas_price {
        header = header.with_l2_gas_price(price.into());
    }
    let header = header.finalize();

    tracing::debug!(
        %number,
        executed=%transactions.len(),
        candidates=%candidate_transactions.len(),
        events=%event_count,
        "Adapted pre-confirmed block"
    );

    let block = Block {
        header,
        transactions,
        receipts,
    };

    Ok(PreConfirmed::new(
        block,
        StateUpdate::default().with_state_diff(state_diff),
        transaction_state_diffs,
        candidate_transactions,
    ))
}

fn adapt_transactions(transactions: Vec<gw::Transaction>) -> Result<Vec<Transaction>, AdaptError> {
    transactions.into_iter().map(adapt_transaction).collect()
}

/// Every executed transaction has a receipt.
fn adapt_executed_receipts(
    receipts: Vec<Option<gw::Receipt>>,
) -> Result<Vec<Receipt>, AdaptError> {
    receipts
        .into_iter()
        .map(|receipt| adapt_receipt(receipt).ok_or(AdaptError::NilInput("receipt")))
        .collect()
}

fn event_count(receipts: &[Receipt]) -> u64 {
    receipts.iter().map(|r| r.events.len() as u64).sum()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions_sorted::assert_eq;
    use sncore_common::macro_prelude::*;
    use sncore_common::transaction::TransactionKind;
    use sncore_common::{GasPrice, L1DataAvailabilityMode, StarknetVersion};
    use sncore_gateway_test_fixtures::{old, v0_13_2, v0_14_0};

    use super::*;

    fn block_100() -> reply::Block {
        serde_json::from_str(v0_13_2::block::NUMBER_100).unwrap()
    }

    fn signature_100() -> reply::BlockSignature {
        serde_json::from_str(v0_13_2::signature::NUMBER_100).unwrap()
    }

    fn pre_confirmed() -> reply::PreConfirmedBlock {
        serde_json::from_str(v0_14_0::block::PRE_CONFIRMED).unwrap()
    }

    mod finalized {
        use pretty_assertions_sorted::assert_eq;

        use super::*;

        #[test_log::test]
        fn counts() {
            let block = adapt_block(Some(block_100()), None).unwrap();

            assert_eq!(block.header.transaction_count, 2);
            assert_eq!(block.header.event_count, 3);
            assert_eq!(block.receipts[0].events.len(), 3);
            assert!(block.receipts[1].events.is_empty());
            assert_eq!(block.event_count(), 3);
        }

        #[test]
        fn header() {
            let block = adapt_block(Some(block_100()), None).unwrap();
            let header = block.header;

            assert_eq!(
                header.hash,
                Some(block_hash!(
                    "0x2e59a5adbdf53e00fd282a007b59771067870c1c7664ca7878327adfff398b4"
                ))
            );
            assert_eq!(
                header.parent_hash,
                Some(block_hash!(
                    "0x7fbc6d2a5b0e3c1f8a3b3ac4d3e0b5f6b3a40d8a64fd2c81b2e2d4b3f6b2a11"
                ))
            );
            assert_eq!(header.number, BlockNumber::new(100));
            assert!(header.state_commitment.is_some());
            assert_eq!(header.starknet_version, StarknetVersion::new(0, 13, 2));
            assert_eq!(
                header.l1_gas_price,
                GasPrices {
                    price_in_wei: GasPrice(0x3b9aca0e),
                    price_in_fri: GasPrice(0x5d21dba000),
                }
            );
            assert_eq!(
                header.l1_data_gas_price,
                Some(GasPrices {
                    price_in_wei: GasPrice(1),
                    price_in_fri: GasPrice(2),
                })
            );
            assert!(header.l2_gas_price.is_some());
            assert_eq!(header.l1_da_mode, L1DataAvailabilityMode::Blob);
            assert!(header.is_finalized());
        }

        #[test]
        fn signatures() {
            let unsigned = adapt_block(Some(block_100()), None).unwrap();
            assert_eq!(unsigned.header.signatures, Some(vec![]));

            let signature = signature_100();
            let signed = adapt_block(Some(block_100()), Some(signature.clone())).unwrap();
            assert_eq!(
                signed.header.signatures,
                Some(vec![signature.signature])
            );
        }

        #[test]
        fn receipts_follow_transactions() {
            let block = adapt_block(Some(block_100()), None).unwrap();

            for (transaction, receipt) in block.transaction_data() {
                assert_eq!(transaction.hash(), receipt.transaction_hash);
            }
            assert_eq!(block.transactions[0].kind(), TransactionKind::Invoke);
            assert_eq!(block.transactions[1].kind(), TransactionKind::L1Handler);
            assert!(block.receipts[1].is_reverted());
            assert!(block.receipts[1].l1_to_l2_message.is_some());
        }

        #[test]
        fn bloom_covers_events() {
            let block = adapt_block(Some(block_100()), None).unwrap();
            let bloom = &block.header.events_bloom;

            for event in block.receipts.iter().flat_map(|r| r.events.iter()) {
                assert!(bloom.check_address(&event.from_address));
            }
            assert_eq!(*bloom, EventsBloom::from_receipts(&block.receipts));
        }

        #[test]
        fn legacy_block() {
            let raw: reply::Block = serde_json::from_str(old::block::LEGACY_GAS_PRICE).unwrap();

            let block = adapt_block(Some(raw), None).unwrap();

            assert_eq!(
                block.header.l1_gas_price,
                GasPrices {
                    price_in_wei: GasPrice(0x174876e800),
                    price_in_fri: GasPrice::ZERO,
                }
            );
            assert_eq!(block.header.l1_data_gas_price, None);
            assert_eq!(block.header.l1_da_mode, L1DataAvailabilityMode::Calldata);
            assert_eq!(block.header.starknet_version, StarknetVersion::default());
            assert_eq!(block.header.event_count, 1);

            let deploy = assert_matches!(&block.transactions[0], Transaction::Deploy(d) => d);
            assert_eq!(
                deploy.contract_address,
                contract_address!("0x20cfa74ee3564b4cd5435cdace0f9c4d43b939620e4a0bb5076105df0a626c6")
            );
            assert_eq!(deploy.constructor_calldata[1], constructor_param!("0x1"));

            let invoke = assert_matches!(&block.transactions[1], Transaction::Invoke(i) => i);
            assert_eq!(invoke.sender_address, deploy.contract_address);
            assert!(invoke.entry_point_selector.is_some());

            assert_eq!(block.receipts[0].actual_fee, fee!("0x0"));
            assert_eq!(block.receipts[1].events[0].data, vec![event_data!("0x4d2")]);
        }

        #[test]
        fn missing_block() {
            assert_matches!(adapt_block(None, None), Err(AdaptError::NilInput("block")));
        }

        #[test]
        fn missing_receipt() {
            let mut raw = block_100();
            raw.transaction_receipts[1] = None;

            assert_matches!(
                adapt_block(Some(raw), None),
                Err(AdaptError::NilInput("receipt"))
            );
        }

        #[test]
        fn receipt_count_mismatch() {
            let mut raw = block_100();
            raw.transaction_receipts.pop();

            assert_matches!(
                adapt_block(Some(raw), None),
                Err(AdaptError::ReceiptCountMismatch {
                    transactions: 2,
                    receipts: 1
                })
            );
        }

        #[test]
        fn unknown_transaction_rejects_the_block() {
            let mut raw = block_100();
            raw.transactions[1].r#type = gw::TransactionType::Unknown("MYSTERY".to_owned());

            assert_matches!(
                adapt_block(Some(raw), None),
                Err(AdaptError::UnknownTransactionKind(_))
            );
        }
    }

    mod pre_confirmed {
        use pretty_assertions_sorted::assert_eq;

        use super::*;

        /// Keeps the first `executed` diffs and receipts of the fixture and
        /// drops the rest.
        fn with_executed(executed: usize) -> reply::PreConfirmedBlock {
            let mut block = pre_confirmed();
            let diff = block.transaction_state_diffs[0].clone();
            let receipt = block.transaction_receipts[0].clone();

            for i in 0..block.transactions.len() {
                let is_executed = i < executed;
                block.transaction_state_diffs[i] = is_executed.then(|| diff.clone().unwrap());
                block.transaction_receipts[i] = is_executed.then(|| receipt.clone().unwrap());
            }
            block
        }

        #[test_log::test]
        fn fixture() {
            let pre_confirmed =
                adapt_pre_confirmed_block(Some(pre_confirmed()), BlockNumber::new(101)).unwrap();

            assert_eq!(pre_confirmed.executed_count(), 2);
            assert_eq!(pre_confirmed.candidate_count(), 1);

            let header = &pre_confirmed.block().header;
            assert_eq!(header.number, BlockNumber::new(101));
            assert_eq!(header.hash, None);
            assert_eq!(header.parent_hash, None);
            assert_eq!(header.state_commitment, None);
            assert_eq!(header.signatures, None);
            assert_eq!(header.transaction_count, 2);
            assert_eq!(header.event_count, 1);
            assert_eq!(header.starknet_version, StarknetVersion::new(0, 14, 0));
            assert_eq!(
                header.l1_gas_price,
                GasPrices {
                    price_in_wei: GasPrice(0x2bd7ec7a1),
                    price_in_fri: GasPrice(0x4b8c9e2d3f0),
                }
            );
            assert!(header.sequencer_address.is_some());

            let state_update = pre_confirmed.state_update();
            assert_eq!(state_update.block_hash, None);
            assert_eq!(state_update.new_root, None);
            assert_eq!(state_update.old_root, None);

            let token = contract_address!(
                "0x4718f5a0fc34cc1af16a1cdee98ffb20c31f5cd61d6ab07201858f4287c938d"
            );
            let balance = storage_address!(
                "0x3a7b9e1d5f2c8a4e6b0d3f9c1a5e7b2d8f4c6a0e3b9d1f5c7a2e8b4d6f0c3a9"
            );
            // The second transaction's write overrides the first's.
            assert_eq!(
                state_update.state_diff.storage_value(token, balance),
                Some(storage_value!("0x1a1b0c"))
            );
            let account = contract_address!(
                "0x47c6b1a5e3d9f2c8b4a7e1d5c9f3b6a2e8d4c1f7b5a9e3d6c2f8b4a1e7d5c9f"
            );
            assert_eq!(
                state_update.state_diff.contract_class(account),
                Some(class_hash!(
                    "0x61dac032f228abef9c6626f995015233097ae253a7f72d68552db02f2971b8f"
                ))
            );
            assert_eq!(
                state_update.state_diff,
                StateDiff::squash(pre_confirmed.transaction_state_diffs().iter().cloned())
            );

            assert_eq!(
                pre_confirmed.candidate_transactions()[0].hash(),
                transaction_hash!(
                    "0x3c6f9b2e5a8d1c4f7b0e3a6d9c2f5b8e1a4d7c0f3b6e9a2d5c8f1b4e7a0d3c6"
                )
            );
        }

        #[test]
        fn order_is_kept() {
            let raw = pre_confirmed();
            let expected: Vec<_> = raw.transactions.iter().map(|t| t.transaction_hash).collect();

            let pre_confirmed =
                adapt_pre_confirmed_block(Some(raw), BlockNumber::new(101)).unwrap();

            let actual: Vec<_> = pre_confirmed.transactions().map(Transaction::hash).collect();
            assert_eq!(actual, expected);
        }

        #[rstest::rstest]
        #[case::none(0)]
        #[case::some(1)]
        #[case::most(2)]
        #[case::all(3)]
        fn partition(#[case] executed: usize) {
            let pre_confirmed =
                adapt_pre_confirmed_block(Some(with_executed(executed)), BlockNumber::new(1))
                    .unwrap();

            assert_eq!(pre_confirmed.executed_count(), executed);
            assert_eq!(pre_confirmed.candidate_count(), 3 - executed);
            assert_eq!(pre_confirmed.transaction_state_diffs().len(), executed);
            assert_eq!(pre_confirmed.block().receipts.len(), executed);
            assert_eq!(
                pre_confirmed.block().header.transaction_count,
                executed as u64
            );
        }

        #[test]
        fn nothing_executed_is_empty() {
            let pre_confirmed =
                adapt_pre_confirmed_block(Some(with_executed(0)), BlockNumber::new(1)).unwrap();

            assert!(pre_confirmed.state_update().state_diff.is_empty());
            assert_eq!(pre_confirmed.block().header.event_count, 0);
        }

        #[rstest::rstest]
        #[case::one(1)]
        #[case::two(2)]
        fn diff_list_shorter_than_transactions(#[case] diffs: usize) {
            let mut raw = with_executed(diffs);
            raw.transaction_state_diffs.truncate(diffs);

            let pre_confirmed = adapt_pre_confirmed_block(Some(raw), BlockNumber::new(1)).unwrap();

            assert_eq!(pre_confirmed.executed_count(), diffs);
            assert_eq!(pre_confirmed.candidate_count(), 3 - diffs);
        }

        #[test]
        fn diffs_after_a_gap_are_ignored() {
            let mut raw = with_executed(1);
            raw.transaction_state_diffs[2] = raw.transaction_state_diffs[0].clone();

            let pre_confirmed = adapt_pre_confirmed_block(Some(raw), BlockNumber::new(1)).unwrap();

            assert_eq!(pre_confirmed.executed_count(), 1);
            assert_eq!(pre_confirmed.candidate_count(), 2);
        }

        #[test]
        fn executed_transaction_without_receipt() {
            let mut raw = pre_confirmed();
            raw.transaction_receipts[1] = None;

            assert_matches!(
                adapt_pre_confirmed_block(Some(raw), BlockNumber::new(1)),
                Err(AdaptError::NilInput("receipt"))
            );
        }

        #[rstest::rstest]
        #[case::accepted(Status::AcceptedOnL2)]
        #[case::pending(Status::Pending)]
        fn wrong_status(#[case] status: Status) {
            let raw = reply::PreConfirmedBlock {
                status,
                ..pre_confirmed()
            };

            assert_matches!(
                adapt_pre_confirmed_block(Some(raw), BlockNumber::new(1)),
                Err(AdaptError::InvalidStatus(s)) => assert_eq!(s, status)
            );
        }

        #[test]
        fn missing_block() {
            assert_matches!(
                adapt_pre_confirmed_block(None, BlockNumber::new(1)),
                Err(AdaptError::NilInput(_))
            );
        }

        #[test]
        fn malformed_diff_rejects_the_block() {
            let mut raw = pre_confirmed();
            if let Some(diff) = raw.transaction_state_diffs[0].as_mut() {
                diff.nonces.insert("0xnope".to_owned(), contract_nonce!("0x1"));
            }

            assert_matches!(
                adapt_pre_confirmed_block(Some(raw), BlockNumber::new(1)),
                Err(AdaptError::InvalidAddress { .. })
            );
        }
    }
}

//! Conversion of the gateway's flat transaction record into one of the five
//! transaction kinds.
use sncore_common::transaction::{
    DeclareTransaction, DeployAccountTransaction, DeployTransaction, InvokeTransaction,
    L1HandlerTransaction, Transaction,
};
use sncore_common::{TransactionNonce, TransactionVersion};
use sncore_gateway_types::reply::transaction::{self as gw, TransactionType};

use crate::resource::adapt_fee_market;
use crate::AdaptError;

/// Fails with [AdaptError::UnknownTransactionKind] for unrecognised type tags
/// and with [AdaptError::NilInput] if a field the kind requires is missing.
///
/// A missing version is version zero, and a missing nonce is zero.
pub fn adapt_transaction(tx: gw::Transaction) -> Result<Transaction, AdaptError> {
    match tx.r#type.clone() {
        TransactionType::Declare => adapt_declare(tx).map(Transaction::Declare),
        TransactionType::Deploy => adapt_deploy(tx).map(Transaction::Deploy),
        TransactionType::DeployAccount => {
            adapt_deploy_account(tx).map(Transaction::DeployAccount)
        }
        TransactionType::Invoke => adapt_invoke(tx).map(Transaction::Invoke),
        TransactionType::L1Handler => adapt_l1_handler(tx).map(Transaction::L1Handler),
        TransactionType::Unknown(kind) => Err(AdaptError::UnknownTransactionKind(kind)),
    }
}

fn version(tx: &gw::Transaction) -> TransactionVersion {
    tx.version.unwrap_or(TransactionVersion::ZERO)
}

fn nonce(tx: &gw::Transaction) -> TransactionNonce {
    tx.nonce.unwrap_or(TransactionNonce::ZERO)
}

fn adapt_declare(tx: gw::Transaction) -> Result<DeclareTransaction, AdaptError> {
    Ok(DeclareTransaction {
        transaction_hash: tx.transaction_hash,
        version: version(&tx),
        class_hash: tx.class_hash.ok_or(AdaptError::NilInput("class_hash"))?,
        sender_address: tx
            .sender_address
            .ok_or(AdaptError::NilInput("sender_address"))?,
        max_fee: tx.max_fee,
        nonce: nonce(&tx),
        compiled_class_hash: tx.compiled_class_hash,
        fee_market: adapt_fee_market(&tx),
        signature: tx.signature.unwrap_or_default(),
        account_deployment_data: tx.account_deployment_data.unwrap_or_default(),
    })
}

/// Derives the contract address if the gateway did not serve it.
fn adapt_deploy(tx: gw::Transaction) -> Result<DeployTransaction, AdaptError> {
    let mut deploy = DeployTransaction {
        transaction_hash: tx.transaction_hash,
        version: version(&tx),
        contract_address: tx.contract_address.unwrap_or_default(),
        contract_address_salt: tx
            .contract_address_salt
            .ok_or(AdaptError::NilInput("contract_address_salt"))?,
        class_hash: tx.class_hash.ok_or(AdaptError::NilInput("class_hash"))?,
        constructor_calldata: tx.constructor_calldata.unwrap_or_default(),
    };

    if tx.contract_address.is_none() {
        deploy.contract_address = deploy.derived_contract_address();
        tracing::trace!(
            transaction_hash=%deploy.transaction_hash,
            contract_address=%deploy.contract_address,
            "Derived deployed contract address"
        );
    }

    Ok(deploy)
}

fn adapt_deploy_account(tx: gw::Transaction) -> Result<DeployAccountTransaction, AdaptError> {
    let max_fee = tx.max_fee;
    let nonce = nonce(&tx);
    let fee_market = adapt_fee_market(&tx);
    let signature = tx.signature.clone().unwrap_or_default();

    // Older deploy account transactions name the account `contract_address`.
    let tx = gw::Transaction {
        contract_address: tx.contract_address.or(tx.sender_address),
        ..tx
    };

    Ok(DeployAccountTransaction {
        deploy: adapt_deploy(tx)?,
        max_fee,
        signature,
        nonce,
        fee_market,
    })
}

fn adapt_invoke(tx: gw::Transaction) -> Result<InvokeTransaction, AdaptError> {
    Ok(InvokeTransaction {
        transaction_hash: tx.transaction_hash,
        version: version(&tx),
        // Version zero names the account `contract_address`.
        sender_address: tx
            .sender_address
            .or(tx.contract_address)
            .ok_or(AdaptError::NilInput("sender_address"))?,
        entry_point_selector: tx.entry_point_selector,
        nonce: tx.nonce,
        max_fee: tx.max_fee,
        fee_market: adapt_fee_market(&tx),
        calldata: tx.calldata.unwrap_or_default(),
        signature: tx.signature.unwrap_or_default(),
        account_deployment_data: tx.account_deployment_data.unwrap_or_default(),
    })
}

fn adapt_l1_handler(tx: gw::Transaction) -> Result<L1HandlerTransaction, AdaptError> {
    Ok(L1HandlerTransaction {
        transaction_hash: tx.transaction_hash,
        version: version(&tx),
        contract_address: tx
            .contract_address
            .ok_or(AdaptError::NilInput("contract_address"))?,
        entry_point_selector: tx
            .entry_point_selector
            .ok_or(AdaptError::NilInput("entry_point_selector"))?,
        nonce: nonce(&tx),
        calldata: tx.calldata.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use fake::{Fake, Faker};
    use pretty_assertions_sorted::assert_eq;
    use sncore_common::macro_prelude::*;
    use sncore_common::transaction::{DataAvailabilityMode, Resource, TransactionKind};
    use sncore_common::{ContractAddress, ResourceAmount, Tip};

    use super::*;

    fn wire(r#type: TransactionType) -> gw::Transaction {
        gw::Transaction {
            r#type,
            ..Faker.fake()
        }
    }

    #[rstest::rstest]
    #[case::declare(TransactionType::Declare, TransactionKind::Declare)]
    #[case::deploy(TransactionType::Deploy, TransactionKind::Deploy)]
    #[case::deploy_account(TransactionType::DeployAccount, TransactionKind::DeployAccount)]
    #[case::invoke(TransactionType::Invoke, TransactionKind::Invoke)]
    #[case::l1_handler(TransactionType::L1Handler, TransactionKind::L1Handler)]
    fn dispatches_on_type(#[case] r#type: TransactionType, #[case] expected: TransactionKind) {
        let tx = wire(r#type);
        let hash = tx.transaction_hash;

        let adapted = adapt_transaction(tx).unwrap();

        assert_eq!(adapted.kind(), expected);
        assert_eq!(adapted.hash(), hash);
        assert_eq!(adapted.version(), TransactionVersion::THREE);
    }

    #[test]
    fn unknown_kind() {
        let tx = wire(TransactionType::Unknown("DEPLOY_SYSTEM".to_owned()));

        assert_matches!(
            adapt_transaction(tx),
            Err(AdaptError::UnknownTransactionKind(kind)) => assert_eq!(kind, "DEPLOY_SYSTEM")
        );
    }

    #[test]
    fn declare_requires_class_hash() {
        let tx = gw::Transaction {
            class_hash: None,
            ..wire(TransactionType::Declare)
        };

        assert_matches!(
            adapt_transaction(tx),
            Err(AdaptError::NilInput("class_hash"))
        );
    }

    #[test_log::test]
    fn deploy_address_is_derived_when_missing() {
        let tx = gw::Transaction {
            contract_address: None,
            ..wire(TransactionType::Deploy)
        };
        let expected = ContractAddress::deployed_contract_address(
            tx.constructor_calldata
                .iter()
                .flatten()
                .map(|p| sncore_common::CallParam(p.0)),
            tx.contract_address_salt.as_ref().unwrap(),
            tx.class_hash.as_ref().unwrap(),
        );

        let deploy = assert_matches!(adapt_transaction(tx), Ok(Transaction::Deploy(d)) => d);

        assert_eq!(deploy.contract_address, expected);
        assert_eq!(deploy.contract_address, deploy.derived_contract_address());
    }

    #[test]
    fn served_deploy_address_is_kept() {
        let tx = gw::Transaction {
            contract_address: Some(contract_address!("0x1234")),
            ..wire(TransactionType::Deploy)
        };

        let deploy = assert_matches!(adapt_transaction(tx), Ok(Transaction::Deploy(d)) => d);

        assert_eq!(deploy.contract_address, contract_address!("0x1234"));
    }

    #[test]
    fn deploy_account_is_a_deploy_with_fees() {
        let tx = gw::Transaction {
            contract_address: None,
            sender_address: None,
            ..wire(TransactionType::DeployAccount)
        };
        let salt = tx.contract_address_salt.unwrap();
        let signature = tx.signature.clone().unwrap();

        let deploy_account =
            assert_matches!(adapt_transaction(tx), Ok(Transaction::DeployAccount(d)) => d);

        assert_eq!(deploy_account.deploy.contract_address_salt, salt);
        assert_eq!(
            deploy_account.deploy.contract_address,
            deploy_account.deploy.derived_contract_address()
        );
        assert_eq!(deploy_account.signature, signature);
        assert!(deploy_account.fee_market.resource_bounds.is_some());
    }

    #[test]
    fn invoke_v0_sender_is_the_contract_address() {
        let tx = gw::Transaction {
            version: None,
            sender_address: None,
            contract_address: Some(contract_address!("0xabc")),
            nonce: None,
            resource_bounds: None,
            tip: None,
            nonce_data_availability_mode: None,
            fee_data_availability_mode: None,
            paymaster_data: None,
            account_deployment_data: None,
            max_fee: Some(fee!("0x10")),
            ..wire(TransactionType::Invoke)
        };
        let selector = tx.entry_point_selector;

        let invoke = assert_matches!(adapt_transaction(tx), Ok(Transaction::Invoke(i)) => i);

        assert_eq!(invoke.version, TransactionVersion::ZERO);
        assert_eq!(invoke.sender_address, contract_address!("0xabc"));
        assert_eq!(invoke.entry_point_selector, selector);
        assert_eq!(invoke.nonce, None);
        assert_eq!(invoke.max_fee, Some(fee!("0x10")));
        assert_eq!(invoke.fee_market.resource_bounds, None);
        assert_eq!(invoke.fee_market.tip, Tip(0));
        assert_eq!(
            invoke.fee_market.nonce_data_availability_mode,
            DataAvailabilityMode::L1
        );
        assert!(invoke.fee_market.paymaster_data.is_empty());
    }

    #[test]
    fn v3_fee_market() {
        let tx = gw::Transaction {
            tip: Some(felt!("0xa")),
            fee_data_availability_mode: Some(gw::DataAvailabilityMode::L2),
            paymaster_data: Some(vec![paymaster_data_elem!("0x7")]),
            ..wire(TransactionType::Invoke)
        };
        let l2_amount = tx.resource_bounds.as_ref().unwrap()[&gw::Resource::L2Gas].max_amount;

        let adapted = adapt_transaction(tx).unwrap();
        let fee_market = adapted.fee_market().unwrap();

        assert_eq!(fee_market.tip, Tip(10));
        assert_eq!(
            fee_market.fee_data_availability_mode,
            DataAvailabilityMode::L2
        );
        assert_eq!(fee_market.paymaster_data, vec![paymaster_data_elem!("0x7")]);
        assert_eq!(
            fee_market
                .resource_bounds
                .as_ref()
                .unwrap()
                .get(Resource::L2Gas)
                .unwrap()
                .max_amount,
            ResourceAmount(crate::numeric::felt_to_u64_lossy(Some(&l2_amount)))
        );
    }

    #[test]
    fn l1_handler() {
        let tx = gw::Transaction {
            version: Some(TransactionVersion::ZERO),
            nonce: None,
            ..wire(TransactionType::L1Handler)
        };
        let contract = tx.contract_address.unwrap();

        let handler = assert_matches!(adapt_transaction(tx), Ok(Transaction::L1Handler(h)) => h);

        assert_eq!(handler.contract_address, contract);
        assert_eq!(handler.nonce, TransactionNonce::ZERO);
        assert_eq!(handler.version, TransactionVersion::ZERO);
    }

    #[test]
    fn l1_handler_requires_selector() {
        let tx = gw::Transaction {
            entry_point_selector: None,
            ..wire(TransactionType::L1Handler)
        };

        assert_matches!(
            adapt_transaction(tx),
            Err(AdaptError::NilInput("entry_point_selector"))
        );
    }
}

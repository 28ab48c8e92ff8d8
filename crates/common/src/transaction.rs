use std::collections::BTreeMap;

use fake::Dummy;

use crate::prelude::*;

/// A transaction of any kind.
///
/// Fields that only exist for some versions of a kind are optional or
/// default to empty/zero; see the individual variants.
#[derive(Clone, Debug, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub enum Transaction {
    Declare(DeclareTransaction),
    Deploy(DeployTransaction),
    DeployAccount(DeployAccountTransaction),
    Invoke(InvokeTransaction),
    L1Handler(L1HandlerTransaction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    Declare,
    Deploy,
    DeployAccount,
    Invoke,
    L1Handler,
}

impl Transaction {
    pub fn hash(&self) -> TransactionHash {
        match self {
            Transaction::Declare(tx) => tx.transaction_hash,
            Transaction::Deploy(tx) => tx.transaction_hash,
            Transaction::DeployAccount(tx) => tx.deploy.transaction_hash,
            Transaction::Invoke(tx) => tx.transaction_hash,
            Transaction::L1Handler(tx) => tx.transaction_hash,
        }
    }

    pub fn version(&self) -> TransactionVersion {
        match self {
            Transaction::Declare(tx) => tx.version,
            Transaction::Deploy(tx) => tx.version,
            Transaction::DeployAccount(tx) => tx.deploy.version,
            Transaction::Invoke(tx) => tx.version,
            Transaction::L1Handler(tx) => tx.version,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Declare(_) => TransactionKind::Declare,
            Transaction::Deploy(_) => TransactionKind::Deploy,
            Transaction::DeployAccount(_) => TransactionKind::DeployAccount,
            Transaction::Invoke(_) => TransactionKind::Invoke,
            Transaction::L1Handler(_) => TransactionKind::L1Handler,
        }
    }

    /// The account sending the transaction, or the contract it targets for
    /// deploys and L1 handlers.
    pub fn sender_address(&self) -> ContractAddress {
        match self {
            Transaction::Declare(tx) => tx.sender_address,
            Transaction::Deploy(tx) => tx.contract_address,
            Transaction::DeployAccount(tx) => tx.deploy.contract_address,
            Transaction::Invoke(tx) => tx.sender_address,
            Transaction::L1Handler(tx) => tx.contract_address,
        }
    }

    /// The fee market fields, if this kind of transaction can carry them.
    pub fn fee_market(&self) -> Option<&FeeMarket> {
        match self {
            Transaction::Declare(tx) => Some(&tx.fee_market),
            Transaction::DeployAccount(tx) => Some(&tx.fee_market),
            Transaction::Invoke(tx) => Some(&tx.fee_market),
            Transaction::Deploy(_) | Transaction::L1Handler(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct DeclareTransaction {
    pub transaction_hash: TransactionHash,
    pub version: TransactionVersion,
    pub class_hash: ClassHash,
    pub sender_address: ContractAddress,
    /// Absent from v3 onwards.
    pub max_fee: Option<Fee>,
    pub signature: Vec<TransactionSignatureElem>,
    pub nonce: TransactionNonce,
    /// Only present for Sierra class declarations (v2 onwards).
    pub compiled_class_hash: Option<CasmHash>,
    pub fee_market: FeeMarket,
    pub account_deployment_data: Vec<AccountDeploymentDataElem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct DeployTransaction {
    pub transaction_hash: TransactionHash,
    pub version: TransactionVersion,
    pub contract_address: ContractAddress,
    pub contract_address_salt: ContractAddressSalt,
    pub class_hash: ClassHash,
    pub constructor_calldata: Vec<ConstructorParam>,
}

impl DeployTransaction {
    /// The address this deployment results in, as derived from its inputs.
    pub fn derived_contract_address(&self) -> ContractAddress {
        ContractAddress::deployed_contract_address(
            self.constructor_calldata.iter().map(|d| CallParam(d.0)),
            &self.contract_address_salt,
            &self.class_hash,
        )
    }
}

/// A [DeployTransaction] paid for by the account it deploys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct DeployAccountTransaction {
    pub deploy: DeployTransaction,
    /// Absent from v3 onwards.
    pub max_fee: Option<Fee>,
    pub signature: Vec<TransactionSignatureElem>,
    pub nonce: TransactionNonce,
    pub fee_market: FeeMarket,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct InvokeTransaction {
    pub transaction_hash: TransactionHash,
    pub version: TransactionVersion,
    /// The called contract for v0, the sending account otherwise.
    pub sender_address: ContractAddress,
    /// Only present for v0.
    pub entry_point_selector: Option<EntryPoint>,
    /// Absent for v0.
    pub nonce: Option<TransactionNonce>,
    pub calldata: Vec<CallParam>,
    pub signature: Vec<TransactionSignatureElem>,
    /// Absent from v3 onwards.
    pub max_fee: Option<Fee>,
    pub fee_market: FeeMarket,
    pub account_deployment_data: Vec<AccountDeploymentDataElem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct L1HandlerTransaction {
    pub transaction_hash: TransactionHash,
    pub version: TransactionVersion,
    pub contract_address: ContractAddress,
    pub entry_point_selector: EntryPoint,
    /// Zero for very old transactions which did not record one.
    pub nonce: TransactionNonce,
    pub calldata: Vec<CallParam>,
}

/// Fields introduced with the v3 fee market.
///
/// Older transactions carry the defaults: no resource bounds, a zero tip, no
/// paymaster data and L1 data availability for both nonce and fee.
#[derive(Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct FeeMarket {
    /// `None` means no bounds table was recorded, which is distinct from a
    /// recorded but empty table.
    pub resource_bounds: Option<ResourceBounds>,
    pub tip: Tip,
    pub paymaster_data: Vec<PaymasterDataElem>,
    pub nonce_data_availability_mode: DataAvailabilityMode,
    pub fee_data_availability_mode: DataAvailabilityMode,
}

/// Per-resource fee bounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct ResourceBounds(pub BTreeMap<Resource, ResourceBound>);

impl ResourceBounds {
    pub fn get(&self, resource: Resource) -> Option<&ResourceBound> {
        self.0.get(&resource)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Resource, ResourceBound)> for ResourceBounds {
    fn from_iter<I: IntoIterator<Item = (Resource, ResourceBound)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub enum Resource {
    L1Gas,
    L2Gas,
    L1DataGas,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct ResourceBound {
    pub max_amount: ResourceAmount,
    pub max_price_per_unit: ResourcePricePerUnit,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Dummy)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub enum DataAvailabilityMode {
    #[default]
    L1,
    L2,
}

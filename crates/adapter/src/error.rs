use sncore_gateway_types::reply::Status;
use sncore_serde::FeltParseError;

/// Reasons a gateway reply cannot be converted into the domain model.
///
/// Any of these rejects the whole containing record: a partially converted
/// block, class or state diff is never returned.
#[derive(Debug, thiserror::Error)]
pub enum AdaptError {
    /// A record which must be present is absent.
    #[error("{0} is missing")]
    NilInput(&'static str),
    #[error("unknown transaction kind {0:?}")]
    UnknownTransactionKind(String),
    #[error("invalid contract address {address:?}")]
    InvalidAddress {
        address: String,
        #[source]
        source: FeltParseError,
    },
    #[error("invalid prime {0:?}")]
    InvalidPrime(String),
    #[error("sierra program of {len} words is too short")]
    MalformedProgram { len: usize },
    #[error("expected a pre-confirmed block, got status {0}")]
    InvalidStatus(Status),
    #[error("program compression failed")]
    EncodingError(#[from] std::io::Error),
    #[error("block has {transactions} transactions but {receipts} receipts")]
    ReceiptCountMismatch { transactions: usize, receipts: usize },
}

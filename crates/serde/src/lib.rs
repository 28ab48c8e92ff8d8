//! Serialization utilities for Starknet feeder gateway data.
mod felt;
mod hex;
mod newtype;

pub use felt::{felt_from_dec_or_hex_str, DecimalOrHexFelt, FeltParseError};
pub use hex::{
    bytes_as_hex_str, bytes_from_hex_str, EthereumAddressAsHexStr, GasPriceAsHexStr,
    HexParseError,
};
pub use newtype::NewType;

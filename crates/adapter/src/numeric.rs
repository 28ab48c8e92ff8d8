//! Conversions between the gateway's textual numbers and native integers.
use num_bigint::BigUint;
use num_traits::Num;
use sncore_crypto::Felt;

/// Keeps the low 64 bits of `felt`. A missing value is zero.
pub fn felt_to_u64_lossy(felt: Option<&Felt>) -> u64 {
    let Some(felt) = felt else {
        return 0;
    };

    let bytes = felt.to_bytes_be();
    let mut low = [0u8; 8];
    low.copy_from_slice(&bytes[24..]);
    u64::from_be_bytes(low)
}

/// Parses an unsigned integer, picking the radix from its prefix: `0x` hex,
/// `0b` binary, `0o` or a bare leading zero octal, decimal otherwise.
///
/// Only bare digits follow the prefix. A leading `+` or `-` and `_` digit
/// separators are rejected, so inputs like `-0x11` or `1_000` yield `None`.
pub fn parse_big_uint(s: &str) -> Option<BigUint> {
    let lower = s.to_ascii_lowercase();
    let (digits, radix) = if let Some(hex) = lower.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(binary) = lower.strip_prefix("0b") {
        (binary, 2)
    } else if let Some(octal) = lower.strip_prefix("0o") {
        (octal, 8)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    } else {
        (lower.as_str(), 10)
    };

    // from_str_radix tolerates a sign and separators, the gateway never sends either.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    BigUint::from_str_radix(digits, radix).ok()
}

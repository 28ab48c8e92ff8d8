use sha3::{Digest, Keccak256};
use starknet_types_core::felt::Felt;

/// Starknet flavoured Keccak: Keccak-256 of `input`, truncated to 250 bits.
pub fn starknet_keccak(input: &[u8]) -> Felt {
    truncated_keccak(<[u8; 32]>::from(Keccak256::digest(input)))
}

/// See:
/// <https://github.com/starkware-libs/cairo-lang/blob/64a7f6aed9757d3d8d6c28bd972df73272b0cb0a/src/starkware/starknet/public/abi.py#L21-L26>
pub fn truncated_keccak(mut plain: [u8; 32]) -> Felt {
    // python code masks with (2**250 - 1) which starts 0x03 and is followed by 31 0xff in be
    // truncation is needed not to overflow the field element.
    plain[0] &= 0x03;
    Felt::from_bytes_be(&plain)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::constructor(
        b"constructor",
        "0x028ffe4ff0f226a9107253e17a904099aa4f63a02a5621de0576e5aa71bc5194"
    )]
    #[case::transfer(
        b"transfer",
        "0x0083afd3f4caedc6eebf44246fe54e38c95e3179a5ec9ea81740eca5b482d12e"
    )]
    fn selectors(#[case] input: &[u8], #[case] expected: &str) {
        assert_eq!(starknet_keccak(input), Felt::from_hex(expected).unwrap());
    }

    #[test]
    fn top_bits_are_cleared() {
        let felt = truncated_keccak([0xff; 32]);
        assert_eq!(felt.to_bytes_be()[0], 0x03);
    }
}

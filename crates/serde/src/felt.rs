use serde::de::Visitor;
use serde_with::{DeserializeAs, SerializeAs};
use sncore_crypto::Felt;

use crate::newtype::NewType;

/// Felts which the gateway encodes as either decimal or `0x`-prefixed hex
/// strings, depending on the age of the data.
///
/// Serializes as hex.
pub struct DecimalOrHexFelt;

impl<'de, T> DeserializeAs<'de, T> for DecimalOrHexFelt
where
    T: NewType<Felt>,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FeltVisitor;

        impl Visitor<'_> for FeltVisitor {
            type Value = Felt;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a decimal string or a '0x' prefixed hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                felt_from_dec_or_hex_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(FeltVisitor).map(T::from_inner)
    }
}

impl<T> SerializeAs<T> for DecimalOrHexFelt
where
    T: NewType<Felt> + Clone,
{
    fn serialize_as<S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let felt = value.clone().into_inner();
        serializer.serialize_str(&format!("{felt:#x}"))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid felt string: {0:?}")]
pub struct FeltParseError(String);

/// Parses a felt from either a `0x`-prefixed hex string or a decimal string.
pub fn felt_from_dec_or_hex_str(s: &str) -> Result<Felt, FeltParseError> {
    let parsed = if s.starts_with("0x") || s.starts_with("0X") {
        Felt::from_hex(s)
    } else {
        Felt::from_dec_str(s)
    };

    parsed.map_err(|_| FeltParseError(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions_sorted::assert_eq;
    use serde_with::serde_as;
    use sncore_common::CallParam;

    use super::*;

    #[serde_as]
    #[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq)]
    struct Calldata(#[serde_as(as = "Vec<DecimalOrHexFelt>")] Vec<CallParam>);

    #[rstest::rstest]
    #[case::decimal("\"81985529205931230\"")]
    #[case::hex("\"0x1234567890abcde\"")]
    fn both_encodings_parse(#[case] json: &str) {
        let json = format!("[{json}]");
        let Calldata(parsed) = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, vec![CallParam(Felt::from(0x1234567890abcdeu64))]);
    }

    #[test]
    fn serializes_as_hex() {
        let calldata = Calldata(vec![CallParam(Felt::from(255u64)), CallParam(Felt::ZERO)]);

        let json = serde_json::to_string(&calldata).unwrap();

        assert_eq!(json, r#"["0xff","0x0"]"#);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(felt_from_dec_or_hex_str("not a number").is_err());
        assert!(serde_json::from_str::<Calldata>(r#"["0xzz"]"#).is_err());
    }
}

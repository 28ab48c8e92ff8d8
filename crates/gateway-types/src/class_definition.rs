//! Class definitions as served by the feeder gateway's `get_class_by_hash` and
//! `get_compiled_class_by_class_hash` endpoints.
use fake::{Dummy, Fake, Faker};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_with::serde_as;
use sncore_common::{ByteCodeOffset, EntryPoint};
use sncore_crypto::Felt;

/// Either flavour of class definition, as served by `get_class_by_hash`.
///
/// Only a Sierra definition has a `sierra_program`. Deserializing requires a
/// JSON deserializer as the Cairo program is kept as raw JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ClassDefinition {
    Sierra(Sierra),
    Cairo(Cairo),
}

impl<'de> Deserialize<'de> for ClassDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, IgnoredAny};

        #[derive(Deserialize)]
        struct Flavour {
            #[serde(default)]
            sierra_program: Option<IgnoredAny>,
        }

        // Untagged enums buffer their input, which RawValue does not support.
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let flavour: Flavour = serde_json::from_str(raw.get()).map_err(D::Error::custom)?;

        if flavour.sierra_program.is_some() {
            serde_json::from_str(raw.get()).map(Self::Sierra)
        } else {
            serde_json::from_str(raw.get()).map(Self::Cairo)
        }
        .map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Sierra {
    /// Contract ABI, as a JSON string.
    #[serde(default)]
    pub abi: String,

    /// Main program definition.
    pub sierra_program: Vec<Felt>,

    // Version
    pub contract_class_version: String,

    /// The contract entry points
    #[serde(default)]
    pub entry_points_by_type: SierraEntryPoints,
}

impl<T> Dummy<T> for Sierra {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
        Self {
            abi: "[]".into(),
            sierra_program: (0..rng.gen_range(3..16))
                .map(|_| sncore_common::random_felt(rng))
                .collect(),
            contract_class_version: "0.1.0".into(),
            entry_points_by_type: Faker.fake_with_rng(rng),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Cairo {
    /// Contract ABI, which has no schema definition.
    #[serde(default)]
    pub abi: serde_json::Value,

    /// Main program definition. __We assume that this is valid JSON.__
    pub program: Box<RawValue>,

    /// The contract entry points.
    pub entry_points_by_type: CairoEntryPoints,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, Dummy)]
pub struct SierraEntryPoints {
    #[serde(rename = "EXTERNAL", default)]
    pub external: Vec<SelectorAndFunctionIndex>,
    #[serde(rename = "L1_HANDLER", default)]
    pub l1_handler: Vec<SelectorAndFunctionIndex>,
    #[serde(rename = "CONSTRUCTOR", default)]
    pub constructor: Vec<SelectorAndFunctionIndex>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, Dummy)]
pub struct CairoEntryPoints {
    #[serde(rename = "EXTERNAL", default)]
    pub external: Vec<SelectorAndOffset>,
    #[serde(rename = "L1_HANDLER", default)]
    pub l1_handler: Vec<SelectorAndOffset>,
    #[serde(rename = "CONSTRUCTOR", default)]
    pub constructor: Vec<SelectorAndOffset>,
}

#[serde_as]
#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SelectorAndOffset {
    pub selector: EntryPoint,
    #[serde_as(as = "OffsetSerde")]
    pub offset: ByteCodeOffset,
}

/// Older classes serve offsets as decimal numbers, newer ones as hex strings.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
pub enum OffsetSerde {
    HexStr(Felt),
    Decimal(u64),
}

impl serde_with::SerializeAs<ByteCodeOffset> for OffsetSerde {
    fn serialize_as<S>(source: &ByteCodeOffset, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Felt::serialize(&source.0, serializer)
    }
}

impl<'de> serde_with::DeserializeAs<'de, ByteCodeOffset> for OffsetSerde {
    fn deserialize_as<D>(deserializer: D) -> Result<ByteCodeOffset, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let offset = match OffsetSerde::deserialize(deserializer)? {
            OffsetSerde::HexStr(felt) => felt,
            OffsetSerde::Decimal(decimal) => Felt::from(decimal),
        };
        Ok(ByteCodeOffset(offset))
    }
}

impl<T> Dummy<T> for SelectorAndOffset {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
        Self {
            selector: Faker.fake_with_rng(rng),
            offset: ByteCodeOffset(Felt::from(rng.gen::<u64>())),
        }
    }
}

/// Descriptor of an entry point in a Sierra class.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Dummy)]
#[serde(deny_unknown_fields)]
pub struct SelectorAndFunctionIndex {
    pub selector: EntryPoint,
    pub function_idx: u64,
}

/// The CASM a Sierra class compiles to.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CompiledClass {
    /// The field prime, as a radix prefixed string.
    pub prime: String,
    pub bytecode: Vec<Felt>,
    #[serde(default)]
    pub hints: serde_json::Value,
    #[serde(default)]
    pub pythonic_hints: Option<serde_json::Value>,
    #[serde(default)]
    pub compiler_version: String,
    pub entry_points_by_type: CompiledEntryPoints,
    /// Missing for classes compiled before bytecode segmentation.
    #[serde(default)]
    pub bytecode_segment_lengths: Option<NestedIntList>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CompiledEntryPoints {
    #[serde(rename = "EXTERNAL", default)]
    pub external: Vec<CompiledEntryPoint>,
    #[serde(rename = "L1_HANDLER", default)]
    pub l1_handler: Vec<CompiledEntryPoint>,
    #[serde(rename = "CONSTRUCTOR", default)]
    pub constructor: Vec<CompiledEntryPoint>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CompiledEntryPoint {
    pub selector: EntryPoint,
    pub offset: u64,
    #[serde(default)]
    pub builtins: Vec<String>,
}

/// A tree of segment lengths: either a single length or a list of subtrees.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum NestedIntList {
    Leaf(u64),
    Node(Vec<NestedIntList>),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use sncore_common::macro_prelude::*;

    use super::*;

    #[test]
    fn offsets_in_either_encoding() {
        let decimal: SelectorAndOffset =
            serde_json::from_str(r#"{"selector":"0x1","offset":17}"#).unwrap();
        let hex: SelectorAndOffset =
            serde_json::from_str(r#"{"selector":"0x1","offset":"0x11"}"#).unwrap();

        assert_eq!(decimal, hex);
        assert_eq!(decimal.offset, byte_code_offset!("0x11"));
    }

    #[test]
    fn nested_int_list() {
        let list: NestedIntList = serde_json::from_str("[1, [2, 3], 4]").unwrap();

        assert_eq!(
            list,
            NestedIntList::Node(vec![
                NestedIntList::Leaf(1),
                NestedIntList::Node(vec![NestedIntList::Leaf(2), NestedIntList::Leaf(3)]),
                NestedIntList::Leaf(4),
            ])
        );
    }

    #[test]
    fn definition_flavour() {
        let sierra = serde_json::to_string(&Faker.fake::<Sierra>()).unwrap();
        assert_matches!(
            serde_json::from_str::<ClassDefinition>(&sierra).unwrap(),
            ClassDefinition::Sierra(_)
        );

        let cairo = r#"{"abi":[],"program":{"data":[]},"entry_points_by_type":{"EXTERNAL":[],"L1_HANDLER":[],"CONSTRUCTOR":[]}}"#;
        assert_matches!(
            serde_json::from_str::<ClassDefinition>(cairo).unwrap(),
            ClassDefinition::Cairo(_)
        );
    }

    #[test]
    fn compiled_class_without_segments() {
        let casm: CompiledClass = serde_json::from_str(
            r#"{
                "prime": "0x800000000000011000000000000000000000000000000000000000000000001",
                "compiler_version": "2.1.0",
                "bytecode": ["0x1", "0x2"],
                "hints": [],
                "entry_points_by_type": {
                    "EXTERNAL": [{"selector": "0x5", "offset": 0, "builtins": ["range_check"]}],
                    "L1_HANDLER": [],
                    "CONSTRUCTOR": []
                }
            }"#,
        )
        .unwrap();

        assert_eq!(casm.bytecode_segment_lengths, None);
        assert_eq!(casm.pythonic_hints, None);
        assert_eq!(casm.entry_points_by_type.external[0].builtins, vec!["range_check"]);
    }
}

use num_bigint::BigUint;
use sncore_crypto::hash::{poseidon_hash_many, starknet_keccak};

use crate::{felt_bytes, ByteCodeOffset, EntryPoint, Felt};

/// A contract class, either legacy Cairo 0 or Sierra.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub enum Class {
    Cairo0(Cairo0Class),
    Cairo1(Cairo1Class),
}

impl Class {
    pub fn version(&self) -> u8 {
        match self {
            Class::Cairo0(_) => 0,
            Class::Cairo1(_) => 1,
        }
    }
}

/// A legacy Cairo 0 class.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct Cairo0Class {
    pub abi: serde_json::Value,
    pub externals: Vec<SelectorAndOffset>,
    pub l1_handlers: Vec<SelectorAndOffset>,
    pub constructors: Vec<SelectorAndOffset>,
    /// The program JSON, gzip compressed and base64 encoded.
    pub program: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct SelectorAndOffset {
    pub selector: EntryPoint,
    pub offset: ByteCodeOffset,
}

/// A Sierra class, optionally together with its compiled form.
///
/// The program and ABI hashes are always computed from the program and ABI
/// themselves, which is why they are only exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct Cairo1Class {
    pub semantic_version: String,
    pub program: Vec<Felt>,
    program_hash: Felt,
    pub abi: String,
    abi_hash: Felt,
    pub entry_points: SierraEntryPoints,
    pub compiled: Option<CompiledClass>,
}

impl Cairo1Class {
    /// Sierra programs starting with this word are encoded in the 0.1.0
    /// format, which may be shorter than the usual three word version header.
    pub fn sierra_version_0_1_0() -> Felt {
        felt_bytes!(b"0.1.0")
    }

    pub fn new(
        semantic_version: String,
        program: Vec<Felt>,
        abi: String,
        entry_points: SierraEntryPoints,
        compiled: Option<CompiledClass>,
    ) -> Self {
        let program_hash = poseidon_hash_many(&program);
        let abi_hash = starknet_keccak(abi.as_bytes());

        Self {
            semantic_version,
            program,
            program_hash,
            abi,
            abi_hash,
            entry_points,
            compiled,
        }
    }

    /// Poseidon hash over the program words.
    pub fn program_hash(&self) -> Felt {
        self.program_hash
    }

    /// Starknet keccak over the ABI string.
    pub fn abi_hash(&self) -> Felt {
        self.abi_hash
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct SierraEntryPoints {
    pub constructor: Vec<SierraEntryPoint>,
    pub external: Vec<SierraEntryPoint>,
    pub l1_handler: Vec<SierraEntryPoint>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct SierraEntryPoint {
    /// Index of the function in the Sierra program.
    pub index: u64,
    pub selector: EntryPoint,
}

/// The CASM a Sierra class compiles to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct CompiledClass {
    pub prime: BigUint,
    pub bytecode: Vec<Felt>,
    pub pythonic_hints: Option<serde_json::Value>,
    pub hints: serde_json::Value,
    pub compiler_version: String,
    /// Absent for classes compiled before segmentation was introduced.
    pub bytecode_segment_lengths: Option<SegmentLengths>,
    pub external: Vec<CompiledEntryPoint>,
    pub l1_handler: Vec<CompiledEntryPoint>,
    pub constructor: Vec<CompiledEntryPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub struct CompiledEntryPoint {
    pub offset: u64,
    pub selector: EntryPoint,
    pub builtins: Vec<String>,
}

/// The segmentation of a bytecode.
///
/// A leaf is a segment of that many words. A node's segments are its
/// children, in bytecode order; an empty node is kept as such.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "full-serde"), derive(serde::Serialize))]
pub enum SegmentLengths {
    Leaf(u64),
    Node(Vec<SegmentLengths>),
}

impl SegmentLengths {
    pub fn is_leaf(&self) -> bool {
        matches!(self, SegmentLengths::Leaf(_))
    }

    pub fn children(&self) -> &[SegmentLengths] {
        match self {
            SegmentLengths::Leaf(_) => &[],
            SegmentLengths::Node(children) => children,
        }
    }

    /// The number of bytecode words covered by this tree.
    pub fn total_length(&self) -> u64 {
        match self {
            SegmentLengths::Leaf(length) => *length,
            SegmentLengths::Node(children) => {
                children.iter().map(SegmentLengths::total_length).sum()
            }
        }
    }
}

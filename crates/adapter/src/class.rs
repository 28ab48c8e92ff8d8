//! Conversion of Cairo 0 and Sierra class definitions, and of the CASM a
//! Sierra class compiles to.
use std::io::Write;

use base64::prelude::*;
use flate2::write::GzEncoder;
use flate2::Compression;
use sncore_common::class::{
    Cairo0Class, Cairo1Class, Class, CompiledClass, CompiledEntryPoint, SegmentLengths,
    SelectorAndOffset, SierraEntryPoint, SierraEntryPoints,
};
use sncore_gateway_types::class_definition as gw;

use crate::numeric::parse_big_uint;
use crate::AdaptError;

/// Adapts either flavour of class definition. The compiled class is only
/// used for Sierra classes.
pub fn adapt_class(
    definition: gw::ClassDefinition,
    compiled: Option<gw::CompiledClass>,
) -> Result<Class, AdaptError> {
    match definition {
        gw::ClassDefinition::Sierra(sierra) => {
            adapt_cairo1_class(sierra, compiled).map(Class::Cairo1)
        }
        gw::ClassDefinition::Cairo(cairo) => adapt_cairo0_class(cairo),
    }
}

/// The program and ABI hashes are computed from the adapted program and ABI.
///
/// Programs shorter than three words are rejected with
/// [AdaptError::MalformedProgram], unless they start with the `0.1.0`
/// version word.
pub fn adapt_cairo1_class(
    sierra: gw::Sierra,
    compiled: Option<gw::CompiledClass>,
) -> Result<Cairo1Class, AdaptError> {
    let program = sierra.sierra_program;
    if program.len() < 3 && program.first() != Some(&Cairo1Class::sierra_version_0_1_0()) {
        return Err(AdaptError::MalformedProgram { len: program.len() });
    }

    let entry_points = SierraEntryPoints {
        constructor: adapt_sierra_entry_points(sierra.entry_points_by_type.constructor),
        external: adapt_sierra_entry_points(sierra.entry_points_by_type.external),
        l1_handler: adapt_sierra_entry_points(sierra.entry_points_by_type.l1_handler),
    };
    let compiled = compiled.map(adapt_compiled_class).transpose()?;

    Ok(Cairo1Class::new(
        sierra.contract_class_version,
        program,
        sierra.abi,
        entry_points,
        compiled,
    ))
}

fn adapt_sierra_entry_points(entry_points: Vec<gw::SelectorAndFunctionIndex>) -> Vec<SierraEntryPoint> {
    entry_points
        .into_iter()
        .map(|entry_point| SierraEntryPoint {
            index: entry_point.function_idx,
            selector: entry_point.selector,
        })
        .collect()
}

pub fn adapt_compiled_class(compiled: gw::CompiledClass) -> Result<CompiledClass, AdaptError> {
    let prime = parse_big_uint(&compiled.prime)
        .ok_or_else(|| AdaptError::InvalidPrime(compiled.prime.clone()))?;

    Ok(CompiledClass {
        prime,
        bytecode: compiled.bytecode,
        pythonic_hints: compiled.pythonic_hints,
        hints: compiled.hints,
        compiler_version: compiled.compiler_version,
        bytecode_segment_lengths: compiled.bytecode_segment_lengths.map(adapt_segment_lengths),
        external: adapt_compiled_entry_points(compiled.entry_points_by_type.external),
        l1_handler: adapt_compiled_entry_points(compiled.entry_points_by_type.l1_handler),
        constructor: adapt_compiled_entry_points(compiled.entry_points_by_type.constructor),
    })
}

fn adapt_compiled_entry_points(entry_points: Vec<gw::CompiledEntryPoint>) -> Vec<CompiledEntryPoint> {
    entry_points
        .into_iter()
        .map(|entry_point| CompiledEntryPoint {
            offset: entry_point.offset,
            selector: entry_point.selector,
            builtins: entry_point.builtins,
        })
        .collect()
}

/// Children keep their order, as it follows the bytecode.
pub fn adapt_segment_lengths(lengths: gw::NestedIntList) -> SegmentLengths {
    match lengths {
        gw::NestedIntList::Leaf(length) => SegmentLengths::Leaf(length),
        gw::NestedIntList::Node(children) => {
            SegmentLengths::Node(children.into_iter().map(adapt_segment_lengths).collect())
        }
    }
}

/// The program is stored gzip compressed and base64 encoded.
pub fn adapt_cairo0_class(cairo: gw::Cairo) -> Result<Class, AdaptError> {
    let program = compress_program(cairo.program.get().as_bytes())?;

    Ok(Class::Cairo0(Cairo0Class {
        abi: cairo.abi,
        externals: adapt_offsets(cairo.entry_points_by_type.external),
        l1_handlers: adapt_offsets(cairo.entry_points_by_type.l1_handler),
        constructors: adapt_offsets(cairo.entry_points_by_type.constructor),
        program,
    }))
}

fn adapt_offsets(entry_points: Vec<gw::SelectorAndOffset>) -> Vec<SelectorAndOffset> {
    entry_points
        .into_iter()
        .map(|entry_point| SelectorAndOffset {
            selector: entry_point.selector,
            offset: entry_point.offset,
        })
        .collect()
}

fn compress_program(program: &[u8]) -> std::io::Result<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(program)?;
    let compressed = encoder.finish()?;

    Ok(BASE64_STANDARD.encode(compressed))
}

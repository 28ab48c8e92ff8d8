//! Structures used for deserializing replies from the Starknet feeder gateway.
//!
//! These mirror the JSON replies closely and are deliberately loose: most
//! fields are optional because they depend on the protocol version the data
//! was produced with. `sncore-adapter` turns them into the strict types of
//! `sncore-common`.
pub mod class_definition;
pub mod reply;

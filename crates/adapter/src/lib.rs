//! Conversion of Starknet feeder gateway replies into the core domain model.
//!
//! Every conversion is a pure function of its input. Expected absence, such as
//! fields which older Starknet versions did not serve, maps to an empty or
//! zero value, while malformed input fails the whole conversion with an
//! [AdaptError].
mod block;
mod class;
mod error;
pub mod numeric;
mod receipt;
pub mod resource;
mod state_diff;
mod transaction;

pub use block::{adapt_block, adapt_pre_confirmed_block};
pub use class::{
    adapt_cairo0_class, adapt_cairo1_class, adapt_class, adapt_compiled_class,
    adapt_segment_lengths,
};
pub use error::AdaptError;
pub use receipt::adapt_receipt;
pub use state_diff::{adapt_state_diff, adapt_state_update};
pub use transaction::adapt_transaction;

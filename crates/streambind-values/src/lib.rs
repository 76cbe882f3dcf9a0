//! Typed value slots and the binding table that keeps them in sync with
//! parsed stream messages.
//!
//! This is the value-add layer above framing: a decoded message is split
//! into tokens by [`parse::tokenize`], then [`ValueBindingTable`] resolves
//! each token to a named or positional [`ValueSlot`], creating slots on
//! first sight and coercing updates by each slot's fixed type.

pub mod numeric;
pub mod parse;
pub mod slot;
pub mod table;
pub mod value;

pub use numeric::{looks_non_numeric, parse_float_lenient, parse_int_lenient};
pub use parse::tokenize;
pub use slot::ValueSlot;
pub use table::{BindSummary, ValueBindingTable};
pub use value::{Color, Value, ValueKind};

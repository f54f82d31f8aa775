//! Text module: stateless string helpers and integer arithmetic.
//!
//! Every function here is pure; the only fallible one is `strings::join`.

pub mod arithmetic;
pub mod strings;

pub use arithmetic::{add, multiply};
pub use strings::{capitalize, is_empty, is_not_empty, join};

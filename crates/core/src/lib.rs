//! `keystone-core`: shared building blocks.
//!
//! This crate contains **pure** primitives (no I/O, no logging setup): the
//! workspace-wide error type and the value object contract.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;

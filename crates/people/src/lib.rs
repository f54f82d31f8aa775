//! People module: the `Person` value object and its validating builder.
//!
//! Pure, deterministic construction logic (no IO, no storage). A `Person` can
//! only come out of `PersonBuilder::build`, which is the single place its
//! invariants are checked.

pub mod person;

pub use person::{FIRST_NAME, LAST_NAME, Person, PersonBuilder};

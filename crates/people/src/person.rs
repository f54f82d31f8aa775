use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use keystone_core::{DomainError, DomainResult, ValueObject};

/// Public field names, as they appear in error messages and serialized form.
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";

/// Value object: a named person with a non-negative age.
///
/// Only obtainable through [`PersonBuilder::build`] (or deserialization, which
/// goes through the same validation), so every instance satisfies:
/// - first and last name are present
/// - age is not negative
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PersonRecord")]
pub struct Person {
    first_name: String,
    last_name: String,
    age: u32,
}

impl Person {
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// First and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl ValueObject for Person {}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Person({FIRST_NAME}={}, {LAST_NAME}={}, age={})",
            self.first_name, self.last_name, self.age
        )
    }
}

/// Staged constructor for [`Person`].
///
/// Setters accept anything, including values `build` will reject; validation
/// happens exactly once, in `build`, which consumes the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    age: i32,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Defaults to 0 when never called.
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Validate the staged values and produce a [`Person`].
    ///
    /// Checks run in order (first name, last name, age) and the first
    /// failure is returned.
    pub fn build(self) -> DomainResult<Person> {
        let Some(first_name) = self.first_name else {
            debug!(field = FIRST_NAME, "person_rejected reason=missing_field");
            return Err(DomainError::missing_field(FIRST_NAME));
        };
        let Some(last_name) = self.last_name else {
            debug!(field = LAST_NAME, "person_rejected reason=missing_field");
            return Err(DomainError::missing_field(LAST_NAME));
        };
        let Ok(age) = u32::try_from(self.age) else {
            debug!(age = self.age, "person_rejected reason=negative_age");
            return Err(DomainError::out_of_range("age cannot be negative"));
        };

        trace!(%first_name, %last_name, age, "person_built");
        Ok(Person {
            first_name,
            last_name,
            age,
        })
    }
}

/// Unvalidated wire shape; converted into [`Person`] through the builder.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonRecord {
    first_name: Option<String>,
    last_name: Option<String>,
    #[serde(default)]
    age: i32,
}

impl TryFrom<PersonRecord> for Person {
    type Error = DomainError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        let mut builder = Person::builder().age(record.age);
        if let Some(first_name) = record.first_name {
            builder = builder.first_name(first_name);
        }
        if let Some(last_name) = record.last_name {
            builder = builder.last_name(last_name);
        }
        builder.build()
    }
}

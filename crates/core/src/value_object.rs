//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

use core::any::Any;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// The trait requires:
/// - **Clone**: value objects are values, not references
/// - **Eq + Hash**: equality over all stored attributes, with a hash that agrees
/// - **Debug**: for logging and test output
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert_eq!(m1, m2);
/// assert!(!m1.eq_dyn(&"USD"));
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug + 'static {
    /// Compare against a value whose concrete type is only known at runtime.
    ///
    /// Returns `false` when `other` is not a `Self`; never panics.
    fn eq_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Money {
        amount: i64,
        currency: String,
    }

    impl ValueObject for Money {}

    fn usd(amount: i64) -> Money {
        Money {
            amount,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn eq_dyn_matches_same_type_by_value() {
        assert!(usd(100).eq_dyn(&usd(100)));
        assert!(!usd(100).eq_dyn(&usd(101)));
    }

    #[test]
    fn eq_dyn_rejects_unrelated_types() {
        assert!(!usd(100).eq_dyn(&"not money"));
        assert!(!usd(100).eq_dyn(&100i64));
        assert!(!usd(100).eq_dyn(&Option::<Money>::None));
    }
}

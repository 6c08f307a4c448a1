use serde::{Deserialize, Serialize};

/// Which side of a flag a predicate selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Setting {
    On,
    Off,
}

/// The data form of a scope predicate: the set of packed values that satisfy
/// a flag condition, plus whether an absent (nil) stored value matches.
///
/// `values` is always kept in ascending order so that membership lists
/// materialized into queries are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    values: Vec<u64>,
    include_absent: bool,
}

impl Membership {
    /// Builds a membership set from packed values.
    ///
    /// The values are sorted and deduplicated; callers do not need to
    /// pre-order them.
    #[must_use]
    pub fn new(mut values: Vec<u64>, include_absent: bool) -> Self {
        values.sort_unstable();
        values.dedup();
        Self { values, include_absent }
    }

    /// Packed values satisfying the predicate, ascending.
    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Whether an absent stored value satisfies the predicate.
    #[must_use]
    pub const fn includes_absent(&self) -> bool {
        self.include_absent
    }

    /// Tests a possibly-absent stored value against the predicate.
    #[must_use]
    pub fn contains(&self, raw: Option<u64>) -> bool {
        match raw {
            None => self.include_absent,
            Some(value) => self.values.binary_search(&value).is_ok(),
        }
    }
}

/// Numeric range constraint emitted for a validated packed attribute.
///
/// A value is admissible when `value < limit`; there is no lower bound beyond
/// the unsigned integer domain itself. Enforcement is the persistence layer's
/// job, the compiler only emits the constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConstraint {
    attribute: String,
    limit: u64,
}

impl RangeConstraint {
    #[must_use]
    pub fn new(attribute: impl Into<String>, limit: u64) -> Self {
        Self { attribute: attribute.into(), limit }
    }

    /// The attribute the constraint applies to.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Exclusive upper bound (`2^flag_count`).
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns true if the value is within range.
    #[must_use]
    pub const fn permits(&self, value: u64) -> bool {
        value < self.limit
    }
}

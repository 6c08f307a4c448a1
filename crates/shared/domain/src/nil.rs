use crate::membership::{Membership, Setting};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Policy for a packed attribute that has no stored value.
///
/// Absence is a distinct state from the value `0`; this enum decides how it
/// participates in reads and in scope membership. One variant exists per
/// recognized policy so that future handling modes (exclude nil rows, treat
/// nil as all-on) can be added without touching call sites.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NilHandling {
    /// Treat an absent value as `0` for reads; absent rows satisfy every
    /// "flag disabled" predicate and no "flag enabled" predicate.
    #[default]
    Include,
}

impl NilHandling {
    /// The integer to use in bit arithmetic for a possibly-absent stored value.
    #[must_use]
    pub const fn read(self, raw: Option<u64>) -> u64 {
        match self {
            Self::Include => match raw {
                Some(value) => value,
                None => 0,
            },
        }
    }

    /// Adjusts a computed value set for rows whose attribute is absent.
    ///
    /// Under `Include`, an absent value has every flag disabled: the set joins
    /// the absent marker for `Off` predicates and never for `On` predicates.
    #[must_use]
    pub fn membership(self, values: Vec<u64>, sense: Setting) -> Membership {
        match self {
            Self::Include => Membership::new(values, matches!(sense, Setting::Off)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_reads_absent_as_zero() {
        assert_eq!(NilHandling::Include.read(None), 0);
        assert_eq!(NilHandling::Include.read(Some(6)), 6);
    }

    #[test]
    fn include_augments_only_off_sense() {
        let off = NilHandling::Include.membership(vec![0, 2], Setting::Off);
        assert!(off.includes_absent());

        let on = NilHandling::Include.membership(vec![1, 3], Setting::On);
        assert!(!on.includes_absent());
    }
}

//! Pure value-set arithmetic over the packed domain `[0, 2^flag_count)`.
//!
//! Everything here is stateless and deterministic: value sets are enumerated
//! in ascending integer order so that materialized membership lists are
//! reproducible in generated query predicates.

use maskset_domain::Setting;

/// How a caller-supplied flag subset is combined into one predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Set-union across the per-flag value sets.
    Any,
    /// Set-intersection across the per-flag value sets.
    All,
}

const fn bit_matches(value: u64, flag_index: u32, setting: Setting) -> bool {
    let set = value & (1 << flag_index) != 0;
    match setting {
        Setting::On => set,
        Setting::Off => !set,
    }
}

/// All packed values in `[0, 2^flag_count)` for which the flag at
/// `flag_index` is on (or off), ascending.
///
/// Exactly half the domain qualifies, so the result length is always
/// `2^(flag_count - 1)`. Evaluated once per flag at compile time; flag counts
/// are capped small enough that full enumeration stays cheap.
#[must_use]
pub fn values_where_flag(setting: Setting, flag_index: u32, flag_count: u32) -> Vec<u64> {
    debug_assert!(flag_index < flag_count);
    (0..1u64 << flag_count).filter(|&value| bit_matches(value, flag_index, setting)).collect()
}

/// Reduces the per-flag value sets for `flag_indices` with union (`Any`) or
/// intersection (`All`), ascending.
///
/// Callers resolve flag names to indices before reaching this point; an empty
/// subset yields the empty set for `Any` and the full domain for `All`
/// (identity elements of the respective reductions).
#[must_use]
pub fn combine_across_flags(
    flag_indices: &[u32],
    setting: Setting,
    combinator: Combinator,
    flag_count: u32,
) -> Vec<u64> {
    (0..1u64 << flag_count)
        .filter(|&value| {
            let mut matched = flag_indices.iter().map(|&i| bit_matches(value, i, setting));
            match combinator {
                Combinator::Any => matched.any(|m| m),
                Combinator::All => matched.all(|m| m),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_is_ascending_and_half_sized() {
        let on = values_where_flag(Setting::On, 0, 3);
        assert_eq!(on, vec![1, 3, 5, 7]);

        let off = values_where_flag(Setting::Off, 1, 3);
        assert_eq!(off, vec![0, 1, 4, 5]);

        for index in 0..4 {
            assert_eq!(values_where_flag(Setting::On, index, 4).len(), 8);
        }
    }

    #[test]
    fn combine_matches_explicit_set_algebra() {
        let a = values_where_flag(Setting::On, 0, 3);
        let b = values_where_flag(Setting::On, 2, 3);

        let any = combine_across_flags(&[0, 2], Setting::On, Combinator::Any, 3);
        let union: Vec<u64> = (0..8).filter(|v| a.contains(v) || b.contains(v)).collect();
        assert_eq!(any, union);

        let all = combine_across_flags(&[0, 2], Setting::On, Combinator::All, 3);
        let intersection: Vec<u64> = (0..8).filter(|v| a.contains(v) && b.contains(v)).collect();
        assert_eq!(all, intersection);
    }

    #[test]
    fn empty_subset_reduces_to_identity() {
        assert!(combine_across_flags(&[], Setting::On, Combinator::Any, 2).is_empty());
        assert_eq!(combine_across_flags(&[], Setting::On, Combinator::All, 2), vec![0, 1, 2, 3]);
    }

    #[test]
    fn single_flag_combination_equals_plain_enumeration() {
        let direct = values_where_flag(Setting::Off, 1, 4);
        let combined = combine_across_flags(&[1], Setting::Off, Combinator::Any, 4);
        assert_eq!(direct, combined);
    }
}

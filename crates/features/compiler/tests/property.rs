use maskset_compiler::{ConflictRegistry, compile};
use maskset_domain::{RawOptions, StaticHost};
use proptest::prelude::*;

const FLAGS: [&str; 5] = ["alpha", "beta", "gamma", "delta", "epsilon"];

fn encode(subset: &[bool]) -> u64 {
    subset.iter().enumerate().fold(0, |acc, (i, &on)| if on { acc | (1 << i) } else { acc })
}

proptest! {
    #[test]
    fn getter_and_settings_roundtrip_any_subset(subset in proptest::collection::vec(any::<bool>(), 5)) {
        let host = StaticHost::new("Model");
        let mut registry = ConflictRegistry::new();
        let set = compile(&host, &mut registry, "attribs", FLAGS, &RawOptions::default()).unwrap();

        let value = encode(&subset);

        let expected: Vec<&str> = FLAGS
            .iter()
            .zip(&subset)
            .filter_map(|(&flag, &on)| on.then_some(flag))
            .collect();
        prop_assert_eq!(set.enabled_flags(Some(value)), expected);

        for (i, &flag) in FLAGS.iter().enumerate() {
            prop_assert_eq!(set.check(flag, Some(value)).unwrap(), subset[i]);
        }
        let settings = set.settings(Some(value));
        for (i, (flag, on)) in settings.into_iter().enumerate() {
            prop_assert_eq!(flag, FLAGS[i]);
            prop_assert_eq!(on, subset[i]);
        }
    }

    #[test]
    fn setter_by_names_equals_encoded_subset(subset in proptest::collection::vec(any::<bool>(), 5)) {
        let host = StaticHost::new("Model");
        let mut registry = ConflictRegistry::new();
        let set = compile(&host, &mut registry, "attribs", FLAGS, &RawOptions::default()).unwrap();

        let names: Vec<&str> = FLAGS
            .iter()
            .zip(&subset)
            .filter_map(|(&flag, &on)| on.then_some(flag))
            .collect();
        prop_assert_eq!(set.set_value(names).unwrap(), encode(&subset));
    }

    #[test]
    fn scope_membership_agrees_with_check(value in 0u64..32) {
        let host = StaticHost::new("Model");
        let mut registry = ConflictRegistry::new();
        let set = compile(&host, &mut registry, "attribs", FLAGS, &RawOptions::default()).unwrap();

        for flag in FLAGS {
            let checked = set.check(flag, Some(value)).unwrap();
            prop_assert_eq!(set.enabled_scope(flag).unwrap().contains(Some(value)), checked);
            prop_assert_eq!(set.disabled_scope(flag).unwrap().contains(Some(value)), !checked);
        }
    }
}

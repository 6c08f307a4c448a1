use maskset_domain::{DefinitionError, NilHandling, RawOptions, Setting};

#[test]
fn defaults_are_sane() {
    let options = RawOptions::default().resolve().unwrap();

    assert_eq!(options.label("flag"), "flag");
    assert_eq!(options.nil_handling(), NilHandling::Include);
    assert!(options.validate());
}

#[test]
fn explicit_values_win_over_defaults() {
    let raw = RawOptions {
        flag_prefix: Some("is".into()),
        flag_suffix: Some("enabled".into()),
        nil_handling: Some("include".into()),
        validate: Some(false),
    };
    let options = raw.resolve().unwrap();

    assert_eq!(options.label("flag"), "is_flag_enabled");
    assert!(!options.validate());
}

#[test]
fn unknown_nil_handling_is_a_definition_error() {
    let raw = RawOptions { nil_handling: Some("exclude".into()), ..RawOptions::default() };
    let err = raw.resolve().unwrap_err();

    assert_eq!(err, DefinitionError::InvalidNilHandling { value: "exclude".into() });
    assert!(err.to_string().contains("invalid nil handling option"));
}

#[test]
fn raw_options_deserialize_from_json() {
    let raw: RawOptions = serde_json::from_value(serde_json::json!({
        "flag_prefix": "is",
        "validate": false
    }))
    .unwrap();

    assert_eq!(raw.flag_prefix.as_deref(), Some("is"));
    assert_eq!(raw.validate, Some(false));
    assert!(raw.nil_handling.is_none());
}

#[test]
fn include_policy_semantics() {
    let nil = NilHandling::Include;

    assert_eq!(nil.read(None), 0);
    assert_eq!(nil.read(Some(5)), 5);

    let disabled = nil.membership(vec![0, 2, 4, 6], Setting::Off);
    assert!(disabled.contains(None));
    assert!(disabled.contains(Some(4)));

    let enabled = nil.membership(vec![1, 3, 5, 7], Setting::On);
    assert!(!enabled.contains(None));
}

use maskset_domain::{DefinitionError, FlagSetDefinition, RawOptions};

fn define(attribute: &str, flags: &[&str]) -> Result<FlagSetDefinition, DefinitionError> {
    FlagSetDefinition::new(attribute, flags.iter().copied(), &RawOptions::default())
}

#[test]
fn valid_definition_preserves_declaration_order() {
    let def = define("attribs", &["flag", "flag2", "flag3"]).unwrap();

    assert_eq!(def.attribute(), "attribs");
    assert_eq!(def.flags(), &["flag", "flag2", "flag3"]);
    assert_eq!(def.flag_count(), 3);
    assert_eq!(def.label(1), "flag2");
}

#[test]
fn empty_attribute_is_rejected() {
    let err = define("", &["flag"]).unwrap_err();
    assert_eq!(err, DefinitionError::EmptyAttribute);

    let err = define("   ", &["flag"]).unwrap_err();
    assert_eq!(err, DefinitionError::EmptyAttribute);
}

#[test]
fn empty_flags_are_rejected() {
    let err = define("attribs", &[]).unwrap_err();
    assert_eq!(err, DefinitionError::EmptyFlags);
}

#[test]
fn duplicate_flags_are_rejected() {
    let err = define("attribs", &["flag", "other", "flag"]).unwrap_err();
    assert_eq!(err, DefinitionError::DuplicateFlag { flag: "flag".into() });
}

#[test]
fn non_identifier_flags_are_rejected() {
    let err = define("attribs", &["flag", "bad-name"]).unwrap_err();
    assert_eq!(err, DefinitionError::InvalidFlagLabel { flag: "bad-name".into() });
}

#[test]
fn flag_count_is_capped() {
    let flags: Vec<String> = (0..17).map(|i| format!("flag{i}")).collect();
    let err =
        FlagSetDefinition::new("attribs", flags, &RawOptions::default()).unwrap_err();
    assert_eq!(err, DefinitionError::TooManyFlags { count: 17, max: 16 });
}

#[test]
fn labels_apply_resolved_affixes() {
    let options = RawOptions { flag_prefix: Some("has".into()), ..RawOptions::default() };
    let def = FlagSetDefinition::new("attribs", ["flag"], &options).unwrap();
    assert_eq!(def.label(0), "has_flag");
}

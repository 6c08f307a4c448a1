use maskset::prelude::*;

#[test]
fn options_deserialized_from_config_drive_compilation() {
    let raw: RawOptions = serde_json::from_str(
        r#"{ "flag_prefix": "has", "nil_handling": "include", "validate": true }"#,
    )
    .unwrap();

    let host = StaticHost::new("Account");
    let mut registry = ConflictRegistry::new();
    let attribs = compile(&host, &mut registry, "attribs", ["flag"], &raw).unwrap();

    assert_eq!(attribs.flag_method_names("flag").unwrap().check, "has_flag");
    assert_eq!(attribs.constraint().unwrap().limit(), 2);
}

#[test]
fn compile_store_and_query_through_the_facade() {
    let host = StaticHost::new("Account");
    let mut registry = ConflictRegistry::new();
    let attribs =
        compile(&host, &mut registry, "attribs", ["flag", "flag2"], &RawOptions::default())
            .unwrap();

    let store = MemoryStore::new();
    let id = store.insert();

    let next = attribs.set_value(vec!["flag", "flag2"]).unwrap();
    store.write(id, "attribs", next).unwrap();

    let scope = attribs.all_enabled(&["flag", "flag2"]).unwrap();
    assert_eq!(store.filter("attribs", &scope), vec![id]);
}

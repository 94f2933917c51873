//! JSON export/import and the `apply` merge.

mod common;

use hostess::commands;
use hostess::format::{from_json, to_json};
use hostess::{HostsError, HostsModel};
use std::fs;

fn tuples(model: &HostsModel) -> Vec<(String, String, bool)> {
    model
        .list()
        .map(|e| (e.hostname.clone(), e.address.to_string(), e.enabled))
        .collect()
}

#[test]
fn dump_excludes_passthrough_lines() {
    let model = HostsModel::parse("# c\n127.0.0.1 localhost\n\n# 10.0.0.1 old.example.com\n");
    let json = to_json(&model).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"hostname": "localhost", "address": "127.0.0.1", "enabled": true},
            {"hostname": "old.example.com", "address": "10.0.0.1", "enabled": false},
        ])
    );
}

#[test]
fn export_import_keeps_entries() {
    let model = HostsModel::parse("127.0.0.1 localhost\n::1 localhost\n# 10.0.0.1 a b\n");
    let imported = from_json(&to_json(&model).unwrap()).unwrap();
    assert_eq!(tuples(&imported), tuples(&model));
}

#[test]
fn enabled_duplicates_collapse_to_last_value() {
    let json = r#"[
        {"hostname": "foo", "address": "1.1.1.1", "enabled": true},
        {"hostname": "FOO", "address": "2.2.2.2", "enabled": true},
        {"hostname": "bar", "address": "3.3.3.3", "enabled": false},
        {"hostname": "bar", "address": "3.3.3.3", "enabled": false}
    ]"#;
    let model = from_json(json).unwrap();
    assert_eq!(
        tuples(&model),
        vec![
            ("foo".into(), "2.2.2.2".into(), true),
            ("bar".into(), "3.3.3.3".into(), false),
        ]
    );
}

#[test]
fn disabled_record_does_not_displace_enabled_one() {
    let mut model = HostsModel::new();
    model.add("foo", "1.1.1.1").unwrap();
    model.disable("foo").unwrap();
    model.add("foo", "2.2.2.2").unwrap();
    let before = tuples(&model);
    assert_eq!(
        before,
        vec![
            ("foo".into(), "1.1.1.1".into(), false),
            ("foo".into(), "2.2.2.2".into(), true),
        ]
    );

    let imported = from_json(&to_json(&model).unwrap()).unwrap();
    assert_eq!(tuples(&imported), before);
}

#[test]
fn apply_keeps_disabled_and_enabled_for_same_slot() {
    let dir = common::temp_dir();
    let hosts = common::hosts_file(&dir, "2.2.2.2 foo\n");
    let json = dir.path().join("import.json");
    fs::write(
        &json,
        r#"[{"hostname": "foo", "address": "1.1.1.1", "enabled": false},
            {"hostname": "foo", "address": "2.2.2.2", "enabled": true}]"#,
    )
    .unwrap();

    commands::apply(&common::options(&hosts, false), &json).unwrap();
    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "2.2.2.2\tfoo\n# 1.1.1.1\tfoo\n"
    );
}

#[test]
fn malformed_imports_fail() {
    let cases = [
        r#"{"hostname": "foo"}"#,
        r#"[{"hostname": "foo", "address": "1.1.1.1"}]"#,
        r#"[{"hostname": "foo", "address": "1.1.1.1", "enabled": "yes"}]"#,
        r#"[{"hostname": "foo", "address": "1.1.1.1", "enabled": true}, {"hostname": "bar", "address": "nope", "enabled": true}]"#,
        r#"[{"hostname": "bad host", "address": "1.1.1.1", "enabled": true}]"#,
        "not json",
    ];
    for json in cases {
        assert!(
            matches!(from_json(json), Err(HostsError::MalformedImport(_))),
            "{json}"
        );
    }
}

#[test]
fn malformed_import_names_record() {
    let json = r#"[{"hostname": "ok.test", "address": "1.1.1.1", "enabled": true},
                   {"hostname": "bar", "address": "nope", "enabled": true}]"#;
    let err = from_json(json).unwrap_err();
    assert!(err.to_string().contains("record 1"), "{err}");
}

#[test]
fn apply_merges_into_hosts_file() {
    let dir = common::temp_dir();
    let hosts = common::hosts_file(&dir, "# keep me\n127.0.0.1 localhost\n10.0.0.1 app.test\n");
    let json = dir.path().join("import.json");
    fs::write(
        &json,
        r#"[{"hostname": "app.test", "address": "10.0.0.9", "enabled": true},
            {"hostname": "new.test", "address": "fd00::1", "enabled": false}]"#,
    )
    .unwrap();

    let outcome = commands::apply(&common::options(&hosts, false), &json).unwrap();
    assert!(outcome.written);
    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "# keep me\n127.0.0.1\tlocalhost\n10.0.0.9\tapp.test\n# fd00::1\tnew.test\n"
    );
}

#[test]
fn apply_is_all_or_nothing() {
    let dir = common::temp_dir();
    let original = "127.0.0.1   localhost\n";
    let hosts = common::hosts_file(&dir, original);
    let json = dir.path().join("import.json");
    fs::write(
        &json,
        r#"[{"hostname": "good.test", "address": "10.0.0.1", "enabled": true},
            {"hostname": "bad.test", "address": "300.0.0.1", "enabled": true}]"#,
    )
    .unwrap();

    let err = commands::apply(&common::options(&hosts, false), &json).unwrap_err();
    assert!(matches!(err, HostsError::MalformedImport(_)));
    assert_eq!(fs::read_to_string(&hosts).unwrap(), original);
}

#[test]
fn dump_command_reads_hosts_file() {
    let dir = common::temp_dir();
    let hosts = common::hosts_file(&dir, "127.0.0.1 localhost\n");
    let json = commands::dump(&common::options(&hosts, false)).unwrap();
    let model = from_json(&json).unwrap();
    assert!(model.has("localhost"));
}

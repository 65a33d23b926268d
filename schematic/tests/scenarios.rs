//! End-to-end validation scenarios against the firewall schemas.

use schematic::{validate, IssueKind, ValidateOptions};
use schematic_definitions::hcloud::{FIREWALL, FIREWALL_RESPONSE, FIREWALL_RULE};
use serde_json::json;

fn detailed(context: &str) -> ValidateOptions {
    ValidateOptions::new(context).with_details(true)
}

#[test]
fn complete_firewall_validates_and_is_returned_unchanged() {
    let firewall = json!({
        "id": 1,
        "name": "fw1",
        "labels": {},
        "created": "2024-01-01T00:00:00Z"
    });

    let validated = validate(&FIREWALL, &firewall, &detailed("firewalls.get")).unwrap();
    assert_eq!(validated["name"], "fw1");
    assert_eq!(validated, firewall);

    let envelope = json!({ "firewall": firewall });
    let validated = validate(&FIREWALL_RESPONSE, &envelope, &detailed("firewalls.get")).unwrap();
    assert_eq!(validated["firewall"]["name"], "fw1");
}

#[test]
fn incomplete_firewall_names_every_missing_field() {
    let firewall = json!({"id": 1, "name": "fw1"});

    let err = validate(&FIREWALL, &firewall, &detailed("firewalls.get")).unwrap_err();
    assert_eq!(err.context, "firewalls.get");
    assert_eq!(err.missing(), vec!["labels", "created"]);
    assert_eq!(err.issues.len(), 2);

    let rendered = err.to_string();
    assert!(rendered.contains("labels"), "{rendered}");
    assert!(rendered.contains("created"), "{rendered}");

    let envelope = json!({ "firewall": firewall });
    let err = validate(&FIREWALL_RESPONSE, &envelope, &detailed("firewalls.get")).unwrap_err();
    assert_eq!(err.missing(), vec!["firewall.labels", "firewall.created"]);
}

#[test]
fn malformed_port_fails_on_port_only() {
    let rule = json!({"direction": "in", "protocol": "tcp", "port": "443-invalid"});

    let err = validate(&FIREWALL_RULE, &rule, &detailed("firewalls.set_rules")).unwrap_err();
    assert_eq!(err.paths(), vec!["port"]);
    assert!(matches!(
        err.issues[0].kind,
        IssueKind::PatternMismatch { ref found, .. } if found == "443-invalid"
    ));
}

#[test]
fn malformed_port_inside_firewall_reports_full_path() {
    let firewall = json!({
        "id": 1,
        "name": "fw1",
        "labels": {"env": "prod"},
        "created": "2024-01-01T00:00:00Z",
        "rules": [
            {"direction": "in", "protocol": "tcp", "port": "22"},
            {"direction": "in", "protocol": "udp", "port": "53"},
            {"direction": "in", "protocol": "tcp", "port": "443-invalid"}
        ]
    });

    let err = validate(&FIREWALL, &firewall, &detailed("firewalls.get")).unwrap_err();
    assert_eq!(err.paths(), vec!["rules[2].port"]);
}

#[test]
fn summary_error_still_names_context() {
    let err = validate(
        &FIREWALL,
        &json!({"id": 1, "name": "fw1"}),
        &ValidateOptions::new("firewalls.get"),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("firewalls.get:"));
    assert!(err.issues.is_empty());
}

#[test]
fn firewall_id_beyond_signed_range_is_rejected() {
    let envelope = json!({
        "firewall": {
            "id": u64::MAX,
            "name": "fw1",
            "labels": {},
            "created": "2024-01-01T00:00:00Z"
        }
    });

    let err = validate(&FIREWALL_RESPONSE, &envelope, &detailed("firewalls.get")).unwrap_err();
    assert_eq!(err.paths(), vec!["firewall.id"]);
    assert!(matches!(err.issues[0].kind, IssueKind::TypeMismatch { .. }));
}

//! Properties that must hold for every schema in the Hetzner Cloud registry.
//!
//! Values are derived from the schemas themselves, so a newly registered
//! schema is covered without touching this file.

use schematic::{validate, IssueKind, ValidateOptions, ValidationError};
use schematic_define::{ObjectSchema, Schema, SchemaRef};
use schematic_definitions::hcloud::{self, PORT_PATTERN};
use serde_json::{json, Map, Value};

const UNKNOWN_KEY: &str = "added_upstream_later";

fn options(context: &str) -> ValidateOptions {
    ValidateOptions::new(context).with_details(true)
}

fn check(ident: &str, schema: &Schema, value: &Value) -> Result<Value, ValidationError> {
    validate(schema, value, &options(ident))
}

/// Builds the smallest value that satisfies `schema`.
fn minimal(schema: &Schema) -> Value {
    match schema {
        Schema::Ref(target) => minimal(target),
        Schema::String(string) => match &string.pattern {
            Some(pattern) if pattern.as_str() == PORT_PATTERN => json!("80"),
            Some(pattern) => panic!("no sample for pattern {}", pattern.as_str()),
            None => json!("text"),
        },
        Schema::Integer => json!(1),
        Schema::Number => json!(1.5),
        Schema::Boolean => json!(true),
        Schema::Any => json!({}),
        Schema::Enum(enumeration) => json!(enumeration.values[0]),
        Schema::Nullable(_) => Value::Null,
        Schema::Array(_) => json!([]),
        Schema::Map(_) => json!({}),
        Schema::Object(object) => Value::Object(minimal_object(object)),
        Schema::Union(union) => {
            let variant = &union.variants[0];
            let mut entries = minimal_object(&variant.schema);
            entries.insert(union.discriminator.to_string(), json!(variant.tag));
            Value::Object(entries)
        }
    }
}

fn minimal_object(object: &ObjectSchema) -> Map<String, Value> {
    object
        .required_fields()
        .map(|field| (field.name.to_string(), minimal(&field.schema)))
        .collect()
}

/// Registry objects, split by unknown-field policy.
fn objects(passthrough: bool) -> Vec<(&'static str, SchemaRef)> {
    hcloud::registry()
        .into_iter()
        .filter(|(_, schema)| {
            matches!(schema.resolve(), Schema::Object(o) if o.is_passthrough() == passthrough)
        })
        .collect()
}

// =============================================================================
// Required fields
// =============================================================================

#[test]
fn minimal_values_validate_for_every_schema() {
    for (ident, schema) in hcloud::registry() {
        let value = minimal(schema);
        if let Err(err) = check(ident, schema, &value) {
            panic!("{ident}: minimal value {value} rejected: {err}");
        }
    }
}

#[test]
fn removing_any_required_field_fails_at_that_field() {
    for (ident, schema) in objects(true).into_iter().chain(objects(false)) {
        let Schema::Object(object) = schema.resolve() else {
            unreachable!()
        };
        for field in object.required_fields() {
            let mut value = minimal(schema);
            value.as_object_mut().unwrap().remove(field.name);

            let err = check(ident, schema, &value)
                .expect_err(&format!("{ident} accepted a value without {}", field.name));
            assert_eq!(err.paths(), vec![field.name], "{ident}");
            assert_eq!(err.missing(), vec![field.name], "{ident}");
        }
    }
}

#[test]
fn entity_schemas_declare_required_fields() {
    let entities = [
        ("FIREWALL", &hcloud::FIREWALL),
        ("SERVER", &hcloud::SERVER),
        ("NETWORK", &hcloud::NETWORK),
        ("ACTION", &hcloud::ACTION),
        ("LOCATION", &hcloud::LOCATION),
        ("ISO", &hcloud::ISO),
    ];
    for (ident, schema) in entities {
        let Schema::Object(object) = schema.resolve() else {
            panic!("{ident} is not an object");
        };
        assert!(object.required_fields().count() > 0, "{ident}");
    }
}

// =============================================================================
// Passthrough vs strict
// =============================================================================

#[test]
fn entities_accept_and_keep_unknown_fields() {
    let entities = objects(true);
    assert!(entities.len() > 20);

    for (ident, schema) in entities {
        let mut value = minimal(schema);
        value[UNKNOWN_KEY] = json!({"nested": [1, 2]});

        let validated = check(ident, schema, &value)
            .unwrap_or_else(|e| panic!("{ident} rejected an unknown field: {e}"));
        assert_eq!(validated[UNKNOWN_KEY], json!({"nested": [1, 2]}), "{ident}");
    }
}

#[test]
fn request_payloads_reject_unknown_fields() {
    let strict = objects(false);
    let idents: Vec<_> = strict.iter().map(|(ident, _)| *ident).collect();
    assert!(idents.contains(&"CREATE_FIREWALL_BODY"));
    assert!(idents.contains(&"LIST_SERVERS_QUERY"));

    for (ident, schema) in strict {
        let mut value = minimal(schema);
        value[UNKNOWN_KEY] = json!(1);

        let err = check(ident, schema, &value).expect_err(ident);
        let issue = err.issue_at(UNKNOWN_KEY).expect(ident);
        assert_eq!(issue.kind, IssueKind::UnknownField, "{ident}");
    }
}

#[test]
fn request_and_entity_names_follow_policy() {
    for (ident, _) in objects(false) {
        assert!(
            ident.ends_with("_BODY") || ident.ends_with("_QUERY") || ident.ends_with("_SPEC"),
            "{ident} is strict but is not a request payload"
        );
    }
    for (ident, _) in objects(true) {
        assert!(
            !ident.ends_with("_BODY") && !ident.ends_with("_QUERY"),
            "{ident} is a request payload but passes unknown fields"
        );
    }
}

#[test]
fn nested_strictness_applies_inside_bodies() {
    let body = json!({
        "name": "fw",
        "rules": [{"direction": "in", "protocol": "tcp", "port": "22", "priority": 1}]
    });
    let err = check("firewalls.create", &hcloud::CREATE_FIREWALL_BODY, &body).unwrap_err();
    assert_eq!(err.paths(), vec!["rules[0].priority"]);
}

// =============================================================================
// Discriminated unions
// =============================================================================

#[test]
fn applied_to_server_branch_validates() {
    let value = json!({"type": "server", "server": {"id": 42}});
    assert!(check("applied_to", &hcloud::FIREWALL_RESOURCE, &value).is_ok());
}

#[test]
fn applied_to_label_selector_branch_validates() {
    let value = json!({
        "type": "label_selector",
        "label_selector": {"selector": "env=prod"},
        "applied_to_resources": [{"type": "server", "server": {"id": 1}}]
    });
    assert!(check("applied_to", &hcloud::FIREWALL_RESOURCE, &value).is_ok());
}

#[test]
fn server_tag_without_server_payload_fails() {
    let value = json!({"type": "server"});
    let err = check("applied_to", &hcloud::FIREWALL_RESOURCE, &value).unwrap_err();
    assert_eq!(err.missing(), vec!["server"]);
}

#[test]
fn unknown_discriminator_fails() {
    let value = json!({"type": "group", "group": {"id": 1}});
    let err = check("applied_to", &hcloud::FIREWALL_RESOURCE, &value).unwrap_err();

    let issue = err.issue_at("type").unwrap();
    match &issue.kind {
        IssueKind::UnknownVariant { allowed, found } => {
            assert_eq!(found, "group");
            assert_eq!(allowed, &vec!["server", "label_selector"]);
        }
        other => panic!("expected UnknownVariant, got {other:?}"),
    }
}

#[test]
fn missing_discriminator_fails() {
    let value = json!({"server": {"id": 1}});
    let err = check("applied_to", &hcloud::FIREWALL_RESOURCE, &value).unwrap_err();
    assert_eq!(err.issue_at("type").unwrap().kind, IssueKind::MissingDiscriminator);
}

#[test]
fn branch_fields_are_checked_against_the_selected_branch() {
    // a label_selector payload under the server tag
    let value = json!({"type": "server", "label_selector": {"selector": "a=b"}});
    let err = check("applied_to", &hcloud::FIREWALL_RESOURCE_SPEC, &value).unwrap_err();
    assert_eq!(err.paths(), vec!["server", "label_selector"]);
}

#[test]
fn union_inside_entity_reports_nested_path() {
    let firewall = json!({
        "id": 1,
        "name": "fw1",
        "labels": {},
        "created": "2024-01-01T00:00:00Z",
        "applied_to": [
            {"type": "server", "server": {"id": 1}},
            {"type": "group"}
        ]
    });
    let err = check("firewalls.get", &hcloud::FIREWALL, &firewall).unwrap_err();
    assert_eq!(err.paths(), vec!["applied_to[1].type"]);
}

// =============================================================================
// Pattern-constrained fields
// =============================================================================

fn rule_with_port(port: &str) -> Value {
    json!({"direction": "in", "protocol": "tcp", "port": port})
}

#[test]
fn port_accepts_single_ports_and_ranges() {
    for port in ["80", "80-90"] {
        let rule = rule_with_port(port);
        assert!(check("rule", &hcloud::FIREWALL_RULE, &rule).is_ok(), "{port}");
        assert!(check("rule", &hcloud::FIREWALL_RULE_SPEC, &rule).is_ok(), "{port}");
    }
}

#[test]
fn port_rejects_malformed_values() {
    for port in ["abc", "80-"] {
        let err = check("rule", &hcloud::FIREWALL_RULE, &rule_with_port(port)).unwrap_err();
        match &err.issue_at("port").unwrap().kind {
            IssueKind::PatternMismatch { pattern, found } => {
                assert_eq!(pattern, PORT_PATTERN);
                assert_eq!(found, port);
            }
            other => panic!("expected PatternMismatch for {port}, got {other:?}"),
        }
    }
}

// =============================================================================
// Optional vs nullable
// =============================================================================

#[test]
fn optional_nullable_field_accepts_absent_null_and_value() {
    let base = json!({"direction": "in", "protocol": "icmp"});
    for port in [None, Some(Value::Null), Some(json!("443"))] {
        let mut rule = base.clone();
        if let Some(port) = port {
            rule["port"] = port;
        }
        assert!(check("rule", &hcloud::FIREWALL_RULE, &rule).is_ok(), "{rule}");
    }
}

#[test]
fn optional_nullable_field_rejects_wrong_type() {
    let rule = json!({"direction": "in", "protocol": "tcp", "port": 443});
    let err = check("rule", &hcloud::FIREWALL_RULE, &rule).unwrap_err();
    assert!(matches!(
        err.issue_at("port").unwrap().kind,
        IssueKind::TypeMismatch { .. }
    ));
}

#[test]
fn required_non_nullable_field_rejects_null() {
    let firewall = json!({"id": 1, "name": null, "labels": {}, "created": "2024-01-01T00:00:00Z"});
    let err = check("firewall", &hcloud::FIREWALL, &firewall).unwrap_err();
    assert_eq!(err.paths(), vec!["name"]);
}

#[test]
fn required_nullable_field_accepts_null_but_not_absence() {
    let Schema::Object(action) = hcloud::ACTION.resolve() else {
        panic!("ACTION is not an object");
    };
    let finished = action.field("finished").unwrap();
    assert!(finished.required);
    assert!(finished.schema.accepts_null());

    let mut value = minimal(&hcloud::ACTION);
    value["finished"] = json!("2024-01-01T00:00:00Z");
    assert!(check("action", &hcloud::ACTION, &value).is_ok());

    value.as_object_mut().unwrap().remove("finished");
    let err = check("action", &hcloud::ACTION, &value).unwrap_err();
    assert_eq!(err.missing(), vec!["finished"]);
}

// =============================================================================
// Idempotence and determinism
// =============================================================================

#[test]
fn validating_a_validated_value_is_idempotent() {
    for (ident, schema) in hcloud::registry() {
        let mut value = minimal(schema);
        if value.is_object() && matches!(schema.resolve(), Schema::Object(o) if o.is_passthrough()) {
            value[UNKNOWN_KEY] = json!("kept");
        }
        let once = check(ident, schema, &value).unwrap();
        let twice = check(ident, schema, &once).unwrap();
        assert_eq!(once, twice, "{ident}");
        assert_eq!(once, value, "{ident}");
    }
}

#[test]
fn diagnostics_are_deterministic() {
    let body = json!({
        "name": 7,
        "rules": [{"direction": "sideways", "protocol": "tcp", "port": "x"}],
        "bogus": true
    });
    let first = check("firewalls.create", &hcloud::CREATE_FIREWALL_BODY, &body).unwrap_err();
    let second = check("firewalls.create", &hcloud::CREATE_FIREWALL_BODY, &body).unwrap_err();

    assert_eq!(first.issues, second.issues);
    assert_eq!(
        first.paths(),
        vec!["name", "rules[0].direction", "rules[0].port", "bogus"]
    );
}

#[test]
fn summary_mode_reports_context_only() {
    let body = json!({"name": 7, "bogus": true});
    let err = validate(
        &hcloud::CREATE_FIREWALL_BODY,
        &body,
        &ValidateOptions::new("firewalls.create"),
    )
    .unwrap_err();
    assert_eq!(err.context, "firewalls.create");
    assert!(err.issues.is_empty());
    assert!(!err.is_detailed());
}

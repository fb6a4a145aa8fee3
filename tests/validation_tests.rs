use serde_json::json;

use leadboard::models::{Field, Submission};
use leadboard::submission::fields::{validate, validate_required};

fn complete() -> Submission {
    Submission {
        full_name: "Jane Doe".to_string(),
        phone: "555-1000".to_string(),
        email: "jane@x.com".to_string(),
        roles: "Designer".to_string(),
        ..Default::default()
    }
}

// ── Required Fields ─────────────────────────────────────────────

#[test]
fn complete_record_is_valid() {
    assert!(validate_required(&complete()).is_empty());
}

#[test]
fn each_blank_required_field_is_reported() {
    let errors = validate_required(&Submission::default());
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[&Field::FullName], "Full name is required");
    assert_eq!(errors[&Field::Phone], "Phone is required");
    assert_eq!(errors[&Field::Email], "Email is required");
    assert_eq!(errors[&Field::Roles], "Roles is required");
}

#[test]
fn whitespace_counts_as_blank() {
    let mut record = complete();
    record.full_name = "  \t ".to_string();
    let errors = validate_required(&record);
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::FullName]);
}

#[test]
fn surrounding_whitespace_is_fine() {
    let mut record = complete();
    record.roles = "  Designer  ".to_string();
    assert!(validate_required(&record).is_empty());
}

#[test]
fn no_format_checks() {
    let mut record = complete();
    record.email = "not-an-email".to_string();
    record.phone = "call me".to_string();
    assert!(validate_required(&record).is_empty());
}

#[test]
fn optional_fields_may_be_empty() {
    let record = complete();
    assert!(record.budget.is_empty());
    assert!(validate_required(&record).is_empty());
}

#[test]
fn custom_required_set() {
    let record = complete();
    let errors = validate(&record, &[Field::Budget, Field::Email]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[&Field::Budget], "Budget is required");

    assert!(validate(&Submission::default(), &[]).is_empty());
}

// ── Wire Format ─────────────────────────────────────────────────

#[test]
fn absent_keys_read_as_empty_strings() {
    let record: Submission = serde_json::from_value(json!({
        "id": "12",
        "fullName": "Jane Doe",
        "phone": "555-1000",
        "email": "jane@x.com",
        "roles": "Designer",
    }))
    .unwrap();

    assert_eq!(record.id.as_deref(), Some("12"));
    assert_eq!(record.budget, "");
    assert_eq!(record.persona, "");
    assert!(record.created_at.is_none());
    assert!(record.extra.is_empty());
}

#[test]
fn null_and_numeric_values_are_tolerated() {
    let record: Submission = serde_json::from_value(json!({
        "id": 7,
        "fullName": "Lee Park",
        "phone": 5557000,
        "email": "lee@x.com",
        "roles": "Engineer",
        "budget": null,
        "talents": null,
        "createdAt": 1700000000,
    }))
    .unwrap();

    assert_eq!(record.id.as_deref(), Some("7"));
    assert_eq!(record.phone, "5557000");
    assert_eq!(record.budget, "");
    assert_eq!(record.talents, "");
    assert_eq!(record.created_at, Some(json!(1700000000)));
    assert_eq!(record.display(Field::Budget), "-");

    // The timestamp goes back out in its original shape
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["createdAt"], 1700000000);
}

#[test]
fn unsaved_record_omits_id_and_timestamp() {
    let value = serde_json::to_value(complete()).unwrap();
    assert!(value.get("id").is_none());
    assert!(value.get("createdAt").is_none());
    assert_eq!(value["fullName"], "Jane Doe");
    assert_eq!(value["additionalInfo"], "");
}

#[test]
fn unknown_keys_survive_a_round_trip() {
    let input = json!({
        "id": "3",
        "fullName": "Jane Doe",
        "phone": "555-1000",
        "email": "jane@x.com",
        "roles": "Designer",
        "additionalInfo": "",
        "budget": "",
        "talents": "",
        "persona": "",
        "createdAt": "2024-05-01T10:00:00.000Z",
        "avatar": "https://example.com/a.png",
    });
    let record: Submission = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(record.extra["avatar"], "https://example.com/a.png");
    assert_eq!(serde_json::to_value(&record).unwrap(), input);
}

#[test]
fn display_falls_back_to_dash() {
    let mut record = complete();
    record.talents = "MultiTask".to_string();
    assert_eq!(record.display(Field::Budget), "-");
    assert_eq!(record.display(Field::Talents), "MultiTask");
    assert_eq!(record.display(Field::FullName), "Jane Doe");
}

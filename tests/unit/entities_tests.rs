/*!
 * Tests for parsing entity replies returned by the oracle
 */

use serde_json::{json, Value};
use translitner::errors::ServiceError;
use translitner::transliteration::parse_entity_reply;

#[test]
fn test_parseEntityReply_withJsonTaggedFence_shouldReturnInnerMapping() {
    let entities = parse_entity_reply("```json\n{\"John\": \"জন\"}\n```").unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(entities.get("John").and_then(Value::as_str), Some("জন"));
}

#[test]
fn test_parseEntityReply_withValidJson_shouldReturnAllEntities() {
    let reply = r#"{
        "Gauhati High Court": "গুৱাহাটী উচ্চ ন্যায়ালয়",
        "AS-01-AB-1234": "এএছ-০১-এবি-১২৩৪",
        "inter alia": "ইন্টাৰ এলিয়া"
    }"#;

    let entities = parse_entity_reply(reply).unwrap();

    assert_eq!(entities.len(), 3);
    assert_eq!(
        entities.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Gauhati High Court", "AS-01-AB-1234", "inter alia"]
    );
}

#[test]
fn test_parseEntityReply_withMixedValueTypes_shouldKeepValuesAsGiven() {
    let entities = parse_entity_reply(r#"{"John": "জন", "2021": 2021}"#).unwrap();
    assert_eq!(entities.get("John"), Some(&json!("জন")));
    assert_eq!(entities.get("2021"), Some(&json!(2021)));

    let entities = parse_entity_reply(r#"{"John": null}"#).unwrap();
    assert_eq!(entities.get("John"), Some(&Value::Null));
}

#[test]
fn test_parseEntityReply_withArrayOrScalar_shouldFail() {
    for reply in [r#"["John", "Mary"]"#, "3", r#""জন""#, "true"] {
        let error = parse_entity_reply(reply).unwrap_err();
        assert!(matches!(error, ServiceError::UnparseableReply { .. }), "reply {reply} should fail");
    }
}

#[test]
fn test_parseEntityReply_withNoJson_shouldKeepRawReplyInError() {
    let error = parse_entity_reply("I cannot process this.").unwrap_err();

    assert!(matches!(error, ServiceError::UnparseableReply { .. }));
    assert!(error.to_string().contains("I cannot process this."));
}

#[test]
fn test_parseEntityReply_withUnclosedFence_shouldFail() {
    assert!(parse_entity_reply("```json\n{\"John\": \"জন\"}").is_err());
}

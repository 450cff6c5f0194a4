//! Unit tests for types module.

use super::*;

#[test]
fn test_health_response_deserialization() {
    let health: HealthResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
    assert_eq!(health.status, "ok");
}

#[test]
fn test_item_deserialization() {
    let json = r#"{"id":7,"name":"Quiz","created_at":"2024-03-29T16:00:00Z"}"#;
    let item: Item = serde_json::from_str(json).unwrap();

    assert_eq!(item.id, 7);
    assert_eq!(item.name, "Quiz");
    assert_eq!(item.created_at, "2024-03-29T16:00:00Z");
}

#[test]
fn test_item_rejects_missing_field() {
    let json = r#"{"id":7,"name":"Quiz"}"#;
    assert!(serde_json::from_str::<Item>(json).is_err());
}

#[test]
fn test_item_rejects_extra_field() {
    let json = r#"{"id":7,"name":"Quiz","created_at":"2024-03-29T16:00:00Z","secret":1}"#;
    assert!(serde_json::from_str::<Item>(json).is_err());
}

#[test]
fn test_items_query_encoding() {
    let query = ItemsQuery { limit: Some(5) };
    assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "limit=5");
}

#[test]
fn test_items_query_default_is_empty() {
    let query = ItemsQuery::default();
    assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "");
}

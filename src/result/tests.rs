//! Tests for the result model

use super::{ErrorCollection, Failed, Outcome};
use crate::BraintreeError;
use serde_json::json;

fn nested_error_body() -> serde_json::Value {
    json!({
        "errors": [],
        "customer": {
            "errors": [
                {"code": "91609", "message": "Customer ID has already been taken.", "attribute": "id"}
            ],
            "creditCard": {
                "errors": [
                    {"code": "81715", "message": "Credit card number is invalid.", "attribute": "number"},
                    {"code": "81707", "message": "CVV verification failed.", "attribute": "cvv"},
                    {"code": "81714", "message": "Credit card number is required.", "attribute": "number"}
                ]
            }
        }
    })
}

#[test]
fn test_successful_outcome_exposes_payload_under_its_field() {
    let outcome = Outcome::successful("paypalAccount", json!({"token": "abc"}));

    assert!(outcome.is_success());
    assert!(outcome.errors().is_none());
    let payload = outcome.get("paypalAccount").unwrap();
    assert_eq!(payload["token"], "abc");
    assert_eq!(outcome.payload().unwrap(), payload);
}

#[test]
fn test_undefined_field_access_names_the_requested_field() {
    let outcome = Outcome::successful("transaction", 1u32);

    let err = outcome.get("notAProperty").unwrap_err();
    match err {
        BraintreeError::UndefinedField(field) => assert_eq!(field, "notAProperty"),
        other => panic!("expected UndefinedField, got {:?}", other),
    }
}

#[test]
fn test_failed_outcome_has_errors_and_no_payload() {
    let failed = Failed::from_value(&json!({
        "errors": {"errors": [
            {"code": "81501", "message": "Amount is required.", "attribute": "amount"}
        ]},
        "message": "Amount is required."
    }))
    .unwrap();
    let outcome: Outcome<()> = Outcome::failed(failed);

    assert!(!outcome.is_success());
    assert!(outcome.payload().is_none());
    assert_eq!(outcome.message(), Some("Amount is required."));
    assert_eq!(outcome.errors().unwrap().deep_size(), 1);
}

#[test]
fn test_for_key_navigates_one_level_at_a_time() {
    let errors = ErrorCollection::from_value(&nested_error_body()).unwrap();

    let on_number = errors
        .for_key("customer")
        .unwrap()
        .for_key("creditCard")
        .unwrap()
        .on_attribute("number");
    assert_eq!(on_number.len(), 2);
    assert_eq!(on_number[0].code, "81715");
    assert_eq!(on_number[1].code, "81714");

    // creditCard is nested under customer, not reachable from the root
    assert!(errors.for_key("creditCard").is_err());
}

#[test]
fn test_for_key_missing_key_is_an_error_not_an_empty_collection() {
    let errors = ErrorCollection::from_value(&nested_error_body()).unwrap();

    let err = errors.for_key("nonexistent").unwrap_err();
    match err {
        BraintreeError::KeyNotFound(key) => assert_eq!(key, "nonexistent"),
        other => panic!("expected KeyNotFound, got {:?}", other),
    }
}

#[test]
fn test_for_key_is_pure() {
    let errors = ErrorCollection::from_value(&nested_error_body()).unwrap();

    let first = errors.for_key("customer").unwrap();
    let second = errors.for_key("customer").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_on_attribute_preserves_source_order() {
    let errors = ErrorCollection::from_value(&json!({
        "errors": [
            {"code": "1", "message": "first", "attribute": "amount"},
            {"code": "2", "message": "other", "attribute": "status"},
            {"code": "3", "message": "second", "attribute": "amount"}
        ]
    }))
    .unwrap();

    let on_amount = errors.on_attribute("amount");
    let codes: Vec<&str> = on_amount.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["1", "3"]);
}

#[test]
fn test_on_attribute_no_match_is_empty_not_an_error() {
    let errors = ErrorCollection::from_value(&nested_error_body()).unwrap();
    assert!(errors.on_attribute("number").is_empty());
}

#[test]
fn test_paypal_token_in_use_scenario() {
    let errors = ErrorCollection::from_value(&json!({
        "paypalAccount": {
            "errors": [
                {"code": "92906", "message": "Token is in use", "attribute": "token"}
            ]
        }
    }))
    .unwrap();

    let on_token = errors.for_key("paypalAccount").unwrap().on_attribute("token");
    assert_eq!(on_token[0].code, crate::types::codes::paypal_account::TOKEN_IS_IN_USE);
    assert_eq!(on_token[0].message, "Token is in use");
}

#[test]
fn test_deep_size_counts_every_level() {
    let errors = ErrorCollection::from_value(&nested_error_body()).unwrap();

    assert_eq!(errors.deep_size(), 4);
    assert_eq!(errors.entries().len(), 0);
    assert_eq!(errors.deep_all().len(), 4);
    assert!(!errors.is_empty());
}

#[test]
fn test_scalar_keys_in_error_body_are_ignored() {
    let errors = ErrorCollection::from_value(&json!({
        "errors": [],
        "params": "echoed-request-data",
        "customer": {"errors": []}
    }))
    .unwrap();

    assert!(errors.is_empty());
    assert!(errors.for_key("customer").is_ok());
    assert!(errors.for_key("params").is_err());
}

#[test]
fn test_non_object_error_body_is_rejected() {
    assert!(ErrorCollection::from_value(&json!(["not", "an", "object"])).is_err());
    assert!(ErrorCollection::from_value(&json!({"errors": {"not": "an array"}})).is_err());
}

#[test]
fn test_failed_without_errors_key_yields_empty_collection() {
    let failed = Failed::from_value(&json!({"message": "upstream hiccup"})).unwrap();
    assert!(failed.errors().is_empty());
    assert_eq!(failed.message(), Some("upstream hiccup"));
}

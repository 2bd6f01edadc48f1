use aas_models::codec::{decode_operation_variables, encode_operation_variables, DecodePolicy};
use aas_models::error::Error;
use aas_models::model::{OperationVariable, OperationVariableSet};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Stand-in for the polymorphic submodel element payload: discriminated by a
/// `modelType` field inside the element's own JSON, exactly how the real
/// element codec is keyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "modelType")]
enum TestElement {
    Property { value: String },
    Range { min: i64, max: i64 },
}

#[test]
fn test_null_yields_absent_set_and_empty_array_an_empty_set() {
    let absent: Option<OperationVariableSet<TestElement>> =
        decode_operation_variables(&json!(null), DecodePolicy::Lenient).unwrap();
    assert!(absent.is_none());

    let empty: Option<OperationVariableSet<TestElement>> =
        decode_operation_variables(&json!([]), DecodePolicy::Lenient).unwrap();
    assert!(empty.unwrap().is_empty());
}

#[test]
fn test_entries_without_value_are_excluded() {
    let token = json!([
        {"value": null},
        {"value": {"modelType": "Property", "value": "5"}}
    ]);
    let set: OperationVariableSet<TestElement> =
        decode_operation_variables(&token, DecodePolicy::Lenient)
            .unwrap()
            .unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(
        set.values().next().unwrap(),
        &TestElement::Property {
            value: "5".to_string()
        }
    );
}

#[test]
fn test_order_follows_the_array() {
    let token = json!([
        {"value": {"modelType": "Property", "value": "a"}},
        {"value": {"modelType": "Range", "min": 0, "max": 10}},
        {"value": {"modelType": "Property", "value": "b"}}
    ]);
    let set: OperationVariableSet<TestElement> =
        decode_operation_variables(&token, DecodePolicy::Lenient)
            .unwrap()
            .unwrap();
    let kinds: Vec<&TestElement> = set.values().collect();
    assert!(matches!(kinds[0], TestElement::Property { .. }));
    assert!(matches!(kinds[1], TestElement::Range { .. }));
    assert!(matches!(kinds[2], TestElement::Property { .. }));
}

#[test]
fn test_non_object_entry_is_fatal() {
    let token = json!([{"value": {"modelType": "Property", "value": "a"}}, "noise"]);
    let err =
        decode_operation_variables::<TestElement>(&token, DecodePolicy::Lenient).unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedToken {
            expected: "object",
            found: "string",
        }
    ));
}

#[test]
fn test_element_decode_errors_propagate() {
    let token = json!([{"value": {"modelType": "Unheard"}}]);
    let err =
        decode_operation_variables::<TestElement>(&token, DecodePolicy::Lenient).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_round_trip_through_serde() {
    let set: OperationVariableSet<TestElement> = vec![
        OperationVariable::new(TestElement::Property {
            value: "5".to_string(),
        }),
        OperationVariable::new(TestElement::Range { min: -3, max: 3 }),
    ]
    .into();

    let encoded = serde_json::to_string(&set).unwrap();
    let again: OperationVariableSet<TestElement> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(set, again);
}

#[test]
fn test_encode_delegates_to_element_codec() {
    let set: OperationVariableSet<TestElement> =
        vec![OperationVariable::new(TestElement::Range { min: 1, max: 2 })].into();
    let encoded = encode_operation_variables(Some(&set)).unwrap();
    assert_eq!(
        encoded,
        json!([{"value": {"modelType": "Range", "min": 1, "max": 2}}])
    );
}

#[test]
fn test_strict_policy_accepts_fully_populated_input() {
    let token = json!([{"value": {"modelType": "Property", "value": "5"}}]);
    let set: OperationVariableSet<TestElement> =
        decode_operation_variables(&token, DecodePolicy::Strict)
            .unwrap()
            .unwrap();
    assert_eq!(set.len(), 1);
}

use aas_models::codec::{decode_reference, encode_reference, DecodePolicy, ReferenceCodec};
use aas_models::error::Error;
use aas_models::model::{referable, AnyReferable, Key, KeyType, Reference, ReferenceType};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[test]
fn test_round_trip_preserves_structure() {
    let json = r#"{
        "type": "ModelReference",
        "keys": [
            {"type": "Submodel", "value": "urn:sm:1"},
            {"type": "Property", "value": "temperature"}
        ],
        "referredSemanticId": {
            "type": "ExternalReference",
            "keys": [{"type": "GlobalReference", "value": "urn:sem:1"}]
        }
    }"#;
    let reference: Reference = serde_json::from_str(json).unwrap();
    let encoded = serde_json::to_string(&reference).unwrap();
    let again: Reference = serde_json::from_str(&encoded).unwrap();
    assert_eq!(reference, again);
}

#[test]
fn test_key_entries_without_value_are_dropped() {
    let token = json!({
        "type": "ExternalReference",
        "keys": [
            {"type": "FragmentReference"},
            {"type": "FragmentReference", "value": "x"}
        ]
    });
    let reference: Reference = decode_reference(&token, DecodePolicy::Lenient)
        .unwrap()
        .unwrap();
    assert_eq!(reference.keys, vec![Key::new(KeyType::FragmentReference, "x")]);
}

#[test]
fn test_heterogeneous_key_noise_is_skipped_in_order() {
    let token = json!({
        "type": "ModelReference",
        "keys": [
            "noise",
            {"type": "Submodel", "value": "urn:sm:1"},
            42,
            {"type": "Property", "value": ""},
            {"type": "Property", "value": "p"}
        ]
    });
    let reference: Reference = decode_reference(&token, DecodePolicy::Lenient)
        .unwrap()
        .unwrap();
    let values: Vec<&str> = reference.keys.iter().map(|k| k.value.as_str()).collect();
    assert_eq!(values, vec!["urn:sm:1", "p"]);
}

#[test]
fn test_recursive_referred_semantic_id() {
    let token = json!({
        "type": "ModelReference",
        "keys": [{"type": "Submodel", "value": "urn:1"}],
        "referredSemanticId": {
            "type": "ExternalReference",
            "keys": [{"type": "GlobalReference", "value": "urn:2"}]
        }
    });
    let reference: Reference = decode_reference(&token, DecodePolicy::Lenient)
        .unwrap()
        .unwrap();
    assert_eq!(reference.kind, ReferenceType::ModelReference);

    let nested = reference.referred_semantic_id.as_deref().unwrap();
    assert_eq!(nested.kind, ReferenceType::ExternalReference);
    assert_eq!(nested.keys, vec![Key::new(KeyType::GlobalReference, "urn:2")]);
    assert!(nested.referred_semantic_id.is_none());
}

#[test]
fn test_nested_null_semantic_id_stays_absent() {
    let token = json!({
        "type": "ModelReference",
        "keys": [],
        "referredSemanticId": null
    });
    let reference: Reference = decode_reference(&token, DecodePolicy::Lenient)
        .unwrap()
        .unwrap();
    assert!(reference.referred_semantic_id.is_none());
}

#[test]
fn test_bare_string_raises_shape_error() {
    let err =
        decode_reference::<AnyReferable>(&json!("urn:not:a:reference"), DecodePolicy::Lenient)
            .unwrap_err();
    assert!(matches!(err, Error::UnexpectedToken { .. }));
    assert_eq!(err.to_string(), "expected object, found string");
}

#[test]
fn test_two_referable_kinds_yield_independent_codecs() {
    let token = json!({
        "type": "ModelReference",
        "keys": [{"type": "Submodel", "value": "urn:sm:1"}]
    });

    let submodel_ref: Reference<referable::Submodel> =
        ReferenceCodec::lenient().decode(&token).unwrap().unwrap();
    let property_ref: Reference<referable::Property> =
        ReferenceCodec::lenient().decode(&token).unwrap().unwrap();

    assert_eq!(submodel_ref.target_key_type(), KeyType::Submodel);
    assert_eq!(property_ref.target_key_type(), KeyType::Property);
    assert_eq!(submodel_ref.erased(), property_ref.erased());
}

#[test]
fn test_downstream_referable_kind_gets_a_codec() {
    // Any marker implementing Referable works without registration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Blueprint;
    impl aas_models::model::Referable for Blueprint {
        const KEY_TYPE: KeyType = KeyType::ConceptDescription;
    }

    let reference: Reference<Blueprint> = ReferenceCodec::lenient()
        .decode_str(r#"{"type": "ModelReference", "keys": []}"#)
        .unwrap()
        .unwrap();
    assert_eq!(reference.target_key_type(), KeyType::ConceptDescription);
}

#[test]
fn test_encoded_field_order_is_stable() {
    let reference: Reference = Reference::with_keys(
        ReferenceType::ModelReference,
        vec![Key::new(KeyType::Submodel, "urn:sm:1")],
    )
    .with_referred_semantic_id(Reference::with_keys(
        ReferenceType::ExternalReference,
        vec![Key::new(KeyType::GlobalReference, "urn:sem:1")],
    ));

    let encoded = serde_json::to_string(&reference).unwrap();
    assert_eq!(
        encoded,
        r#"{"type":"ModelReference","keys":[{"type":"Submodel","value":"urn:sm:1"}],"referredSemanticId":{"type":"ExternalReference","keys":[{"type":"GlobalReference","value":"urn:sem:1"}]}}"#
    );
}

#[test]
fn test_undefined_kind_is_written_out() {
    let reference = Reference::<AnyReferable>::default();
    let encoded = encode_reference(Some(&reference));
    assert_eq!(encoded, json!({"type": "Undefined", "keys": []}));
}

#[test]
fn test_optional_reference_in_embedding_struct() {
    #[derive(Debug, Serialize, Deserialize)]
    struct ElementHeader {
        #[serde(rename = "idShort")]
        id_short: String,
        #[serde(rename = "semanticId", skip_serializing_if = "Option::is_none")]
        semantic_id: Option<Reference>,
    }

    let with: ElementHeader = serde_json::from_value(json!({
        "idShort": "Temperature",
        "semanticId": {"type": "ExternalReference", "keys": []}
    }))
    .unwrap();
    assert!(with.semantic_id.is_some());

    let without: ElementHeader = serde_json::from_value(json!({
        "idShort": "Temperature",
        "semanticId": null
    }))
    .unwrap();
    assert!(without.semantic_id.is_none());
}

#[test]
fn test_strict_policy_round_trips_clean_input() {
    let token = json!({
        "type": "ExternalReference",
        "keys": [{"type": "GlobalReference", "value": "urn:sem:1"}]
    });
    let codec = ReferenceCodec::<AnyReferable>::strict();
    let reference = codec.decode(&token).unwrap().unwrap();
    assert_eq!(codec.encode(Some(&reference)), token);
}

#[test]
fn test_decoded_reference_reencodes_equivalently() {
    let token = json!({
        "type": "ModelReference",
        "keys": [
            {"type": "Submodel", "value": "urn:sm:1"},
            {"type": "SubmodelElementCollection", "value": "sensors"},
            {"type": "Property", "value": "temperature"}
        ]
    });
    let reference: Reference = decode_reference(&token, DecodePolicy::Lenient)
        .unwrap()
        .unwrap();
    let encoded: Value = encode_reference(Some(&reference));
    assert_eq!(encoded, token);
}

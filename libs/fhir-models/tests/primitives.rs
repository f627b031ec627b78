use serde_json::json;
use tessera_codec::{FhirDate, FhirDateTime, Precision};
use tessera_format::{into_document, parse_document, to_json_string, Document};
use tessera_models::r4::{AdministrativeGender, ObservationStatus};
use tessera_models::{decode_resource, encode_resource, DecodeErrorKind, ResourceValue};

fn doc(value: serde_json::Value) -> Document {
    into_document(value).unwrap()
}

fn patient(resource: ResourceValue) -> Box<tessera_models::r4::Patient> {
    match resource {
        ResourceValue::Patient(p) => p,
        other => panic!("expected a Patient, got {}", other.resource_type()),
    }
}

// ============================================================================
// Value/Companion Merge
// ============================================================================

#[test]
fn test_null_value_with_companion() {
    let document = doc(json!({
        "resourceType": "Observation",
        "status": null,
        "_status": {
            "extension": [{
                "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason",
                "valueCode": "unknown"
            }]
        },
        "code": {"text": "x"}
    }));

    let resource = decode_resource(document).unwrap();
    let ResourceValue::Observation(observation) = &resource else {
        panic!("expected an Observation");
    };
    assert!(observation.status.value.is_none());
    assert_eq!(observation.status.extension.len(), 1);
    assert_eq!(observation.status(), None);

    let encoded = encode_resource(&resource);
    assert!(!encoded.contains_key("status"));
    assert_eq!(
        encoded["_status"]["extension"][0]["valueCode"],
        json!("unknown")
    );
}

#[test]
fn test_value_and_companion_together() {
    let document = doc(json!({
        "resourceType": "Patient",
        "gender": "other",
        "_gender": {
            "id": "g1",
            "extension": [{"url": "http://example.org/gender-detail", "valueString": "non-binary"}]
        }
    }));
    let resource = decode_resource(document.clone()).unwrap();
    let gender = patient(resource.clone()).gender.clone().unwrap();
    assert_eq!(gender.value, Some(AdministrativeGender::Other));
    assert_eq!(gender.id.as_deref(), Some("g1"));

    assert_eq!(encode_resource(&resource), document);
}

#[test]
fn test_list_companions_stay_aligned() {
    let document = doc(json!({
        "resourceType": "Patient",
        "name": [{
            "given": ["Alice", null, "Carol"],
            "_given": [
                null,
                {"extension": [{"url": "http://example.org/nick", "valueString": "B"}]},
                null
            ]
        }]
    }));
    let resource = decode_resource(document.clone()).unwrap();
    let decoded = patient(resource.clone());
    let given = &decoded.name[0].given;
    assert_eq!(given.len(), 3);
    assert_eq!(given[0].value.as_deref(), Some("Alice"));
    assert!(given[1].value.is_none());
    assert_eq!(given[1].extension.len(), 1);
    assert_eq!(given[2].value.as_deref(), Some("Carol"));

    assert_eq!(encode_resource(&resource), document);
}

#[test]
fn test_misaligned_companion_list() {
    let err = decode_resource(doc(json!({
        "resourceType": "Patient",
        "name": [{"given": ["A", "B"], "_given": [null]}]
    })))
    .unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::MalformedDocument(_)));
    assert_eq!(err.path.to_string(), "Patient.name[0].given");
}

// ============================================================================
// Lexical Rules
// ============================================================================

#[test]
fn test_no_type_coercion() {
    let cases = [
        (json!({"resourceType": "Patient", "active": "true"}), "boolean", "Patient.active"),
        (
            json!({"resourceType": "Patient", "multipleBirthInteger": "2"}),
            "integer",
            "Patient.multipleBirthInteger",
        ),
        (json!({"resourceType": "Patient", "birthDate": 1974}), "date", "Patient.birthDate"),
    ];
    for (input, expected, path) in cases {
        let err = decode_resource(doc(input)).unwrap_err();
        match &err.kind {
            DecodeErrorKind::MalformedPrimitive { expected: e, .. } => assert_eq!(*e, expected),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.path.to_string(), path);
    }
}

#[test]
fn test_integer_range() {
    let err = decode_resource(doc(json!({
        "resourceType": "Patient",
        "multipleBirthInteger": 2147483648u64
    })))
    .unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::MalformedPrimitive { .. }));
}

#[test]
fn test_positive_int_rejects_zero() {
    let err = decode_resource(doc(json!({
        "resourceType": "Patient",
        "telecom": [{"system": "phone", "value": "1", "rank": 0}]
    })))
    .unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::MalformedPrimitive {
            expected: "positiveInt",
            found: "0".into(),
        }
    );
    assert_eq!(err.path.to_string(), "Patient.telecom[0].rank");
}

#[test]
fn test_unknown_code() {
    let err = decode_resource(doc(json!({
        "resourceType": "Observation",
        "status": "done",
        "code": {"text": "x"}
    })))
    .unwrap_err();
    match err.kind {
        DecodeErrorKind::MalformedPrimitive { expected, found } => {
            assert_eq!(expected, "code from http://hl7.org/fhir/observation-status");
            assert_eq!(found, "\"done\"");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(ObservationStatus::from_code("final"), Some(ObservationStatus::Final));
}

#[test]
fn test_partial_dates_keep_precision() {
    let resource = decode_resource(doc(json!({
        "resourceType": "Patient",
        "birthDate": "1974-12"
    })))
    .unwrap();
    let birth_date = patient(resource.clone())
        .birth_date
        .clone()
        .and_then(|d| d.value)
        .unwrap();
    assert_eq!(birth_date.precision(), Precision::Month);
    assert_eq!(birth_date, FhirDate::parse("1974-12").unwrap());
    assert_eq!(encode_resource(&resource)["birthDate"], "1974-12");

    assert!(FhirDateTime::parse("2015-02-07T13:28").is_none());
}

#[test]
fn test_decimals_are_numbers_only() {
    let err = decode_resource(doc(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "x"},
        "valueQuantity": {"value": "72.5"}
    })))
    .unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::MalformedPrimitive { expected: "decimal", .. }
    ));
    assert_eq!(err.path.to_string(), "Observation.valueQuantity.value");
}

#[test]
fn test_large_decimals_are_exact() {
    let text = concat!(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},"#,
        r#""valueQuantity":{"value":123456789012345678901234567890.000000001}}"#
    );
    let resource = decode_resource(parse_document(text).unwrap()).unwrap();
    assert_eq!(to_json_string(&encode_resource(&resource)).unwrap(), text);
}

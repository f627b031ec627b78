use serde_json::json;
use tessera_format::{into_document, Document};
use tessera_models::r4::{
    ConditionOnset, ExtensionValue, ObservationValue, PatientDeceased,
};
use tessera_models::{decode_resource, encode_resource, DecodeErrorKind, ResourceValue};

fn doc(value: serde_json::Value) -> Document {
    into_document(value).unwrap()
}

fn observation(value: serde_json::Value) -> Document {
    let mut document = doc(json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "test"}
    }));
    for (key, item) in doc(value) {
        document.insert(key, item);
    }
    document
}

#[test]
fn test_each_candidate_selects_its_variant() {
    let cases = [
        (json!({"valueQuantity": {"value": 1}}), "valueQuantity"),
        (json!({"valueCodeableConcept": {"text": "x"}}), "valueCodeableConcept"),
        (json!({"valueString": "x"}), "valueString"),
        (json!({"valueBoolean": false}), "valueBoolean"),
        (json!({"valueInteger": 3}), "valueInteger"),
        (json!({"valueRange": {"low": {"value": 1}}}), "valueRange"),
        (json!({"valueRatio": {"numerator": {"value": 1}}}), "valueRatio"),
        (json!({"valueTime": "12:30:00"}), "valueTime"),
        (json!({"valueDateTime": "2020-02"}), "valueDateTime"),
        (json!({"valuePeriod": {"start": "2020"}}), "valuePeriod"),
    ];

    for (input, field) in cases {
        let resource = decode_resource(observation(input)).unwrap();
        let ResourceValue::Observation(obs) = &resource else {
            panic!("expected an Observation");
        };
        let value = obs.value.as_ref().unwrap();
        assert_eq!(tessera_codec::ChoiceFamily::field_name(value), field);

        let encoded = encode_resource(&resource);
        let value_keys: Vec<&String> = encoded.keys().filter(|k| k.starts_with("value")).collect();
        assert_eq!(value_keys, vec![field]);
    }
}

#[test]
fn test_two_candidates_are_ambiguous() {
    let err = decode_resource(observation(json!({
        "valueString": "high",
        "valueQuantity": {"value": 5}
    })))
    .unwrap_err();

    assert_eq!(
        err.kind,
        DecodeErrorKind::AmbiguousChoice {
            family: "value",
            present: vec!["valueQuantity".into(), "valueString".into()],
        }
    );
    assert_eq!(err.path.to_string(), "Observation");
}

#[test]
fn test_companion_only_candidate_counts_as_present() {
    let resource = decode_resource(observation(json!({
        "_valueString": {
            "extension": [{
                "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason",
                "valueCode": "unknown"
            }]
        }
    })))
    .unwrap();
    let ResourceValue::Observation(obs) = resource else {
        panic!("expected an Observation");
    };
    match obs.value {
        Some(ObservationValue::String(s)) => {
            assert!(s.value.is_none());
            assert_eq!(s.extension.len(), 1);
        }
        other => panic!("unexpected value: {:?}", other),
    }
}

#[test]
fn test_companion_of_other_candidate_is_ambiguous() {
    let err = decode_resource(observation(json!({
        "valueBoolean": true,
        "_valueString": {"id": "s"}
    })))
    .unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::AmbiguousChoice { family: "value", .. }
    ));
}

#[test]
fn test_wrong_payload_for_candidate() {
    let err = decode_resource(observation(json!({"valueBoolean": "yes"}))).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::MalformedPrimitive {
            expected: "boolean",
            found: "\"yes\"".into(),
        }
    );
    assert_eq!(err.path.to_string(), "Observation.valueBoolean");
}

#[test]
fn test_nested_choice_paths() {
    let err = decode_resource(doc(json!({
        "resourceType": "MedicationStatement",
        "status": "active",
        "medicationCodeableConcept": {"text": "aspirin"},
        "subject": {"reference": "Patient/1"},
        "dosage": [{
            "timing": {
                "repeat": {"boundsDuration": {"value": 3}, "boundsPeriod": {"start": "2020"}}
            }
        }]
    })))
    .unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::AmbiguousChoice { family: "bounds", .. }
    ));
    assert_eq!(
        err.path.to_string(),
        "MedicationStatement.dosage[0].timing.repeat"
    );
}

#[test]
fn test_condition_onset_and_patient_deceased() {
    let resource = decode_resource(doc(json!({
        "resourceType": "Condition",
        "subject": {"reference": "Patient/1"},
        "onsetPeriod": {"start": "2019-01", "end": "2019-03"}
    })))
    .unwrap();
    let ResourceValue::Condition(condition) = resource else {
        panic!("expected a Condition");
    };
    assert!(matches!(condition.onset, Some(ConditionOnset::Period(_))));

    let resource = decode_resource(doc(json!({
        "resourceType": "Patient",
        "deceasedDateTime": "2015-02-07T13:28:17-05:00"
    })))
    .unwrap();
    let ResourceValue::Patient(patient) = resource else {
        panic!("expected a Patient");
    };
    assert!(matches!(patient.deceased, Some(PatientDeceased::DateTime(_))));
    assert!(patient.is_deceased());
}

#[test]
fn test_extension_value_choice() {
    let document = tessera_format::parse_document(
        r#"{
            "resourceType": "Patient",
            "extension": [
                {"url": "http://example.org/a", "valueCodeableConcept": {"text": "a"}},
                {"url": "http://example.org/b", "valueDecimal": 0.50}
            ]
        }"#,
    )
    .unwrap();
    let resource = decode_resource(document).unwrap();
    let ResourceValue::Patient(patient) = resource else {
        panic!("expected a Patient");
    };
    let extension = &patient.domain.extension;
    assert!(matches!(
        extension[0].value,
        Some(ExtensionValue::CodeableConcept(_))
    ));
    match &extension[1].value {
        Some(ExtensionValue::Decimal(d)) => {
            assert_eq!(d.value.as_ref().map(|v| v.as_str()), Some("0.50"))
        }
        other => panic!("unexpected value: {:?}", other),
    }
}

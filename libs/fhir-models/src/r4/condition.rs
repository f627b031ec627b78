//! Condition resource.

use super::datatypes::{Age, Annotation, CodeableConcept, Identifier, Period, Range, Reference};
use super::element::BackboneElement;
use super::primitives::{DateTime, FhirString};
use super::resource::DomainResource;
use tessera_codec::{aggregate, choice_type};

choice_type! {
    pub enum ConditionOnset("onset") {
        "onsetDateTime" => DateTime(DateTime),
        "onsetAge" => Age(Age),
        "onsetPeriod" => Period(Period),
        "onsetRange" => Range(Range),
        "onsetString" => String(FhirString),
    }
}

choice_type! {
    pub enum ConditionAbatement("abatement") {
        "abatementDateTime" => DateTime(DateTime),
        "abatementAge" => Age(Age),
        "abatementPeriod" => Period(Period),
        "abatementRange" => Range(Range),
        "abatementString" => String(FhirString),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct ConditionStage("Condition.stage") {
        backbone: BackboneElement => group(),
        summary: Option<CodeableConcept> => optional("summary"),
        assessment: Vec<Reference> => list("assessment"),
        type_: Option<CodeableConcept> => optional("type"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct ConditionEvidence("Condition.evidence") {
        backbone: BackboneElement => group(),
        code: Vec<CodeableConcept> => list("code"),
        detail: Vec<Reference> => list("detail"),
    }
}

aggregate! {
    /// A clinical condition, problem or diagnosis.
    pub struct Condition(resource "Condition") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        clinical_status: Option<CodeableConcept> => optional("clinicalStatus"),
        verification_status: Option<CodeableConcept> => optional("verificationStatus"),
        category: Vec<CodeableConcept> => list("category"),
        severity: Option<CodeableConcept> => optional("severity"),
        code: Option<CodeableConcept> => optional("code"),
        body_site: Vec<CodeableConcept> => list("bodySite"),
        subject: Reference => required("subject"),
        encounter: Option<Reference> => optional("encounter"),
        onset: Option<ConditionOnset> => choice(),
        abatement: Option<ConditionAbatement> => choice(),
        recorded_date: Option<DateTime> => optional("recordedDate"),
        recorder: Option<Reference> => optional("recorder"),
        asserter: Option<Reference> => optional("asserter"),
        stage: Vec<ConditionStage> => list("stage"),
        evidence: Vec<ConditionEvidence> => list("evidence"),
        note: Vec<Annotation> => list("note"),
    }
}

impl Condition {
    /// A condition for `subject` with every other element absent.
    pub fn for_subject(subject: Reference) -> Self {
        Self {
            domain: DomainResource::default(),
            identifier: Vec::new(),
            clinical_status: None,
            verification_status: None,
            category: Vec::new(),
            severity: None,
            code: None,
            body_site: Vec::new(),
            subject,
            encounter: None,
            onset: None,
            abatement: None,
            recorded_date: None,
            recorder: None,
            asserter: None,
            stage: Vec::new(),
            evidence: Vec::new(),
            note: Vec::new(),
            unknown: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_codec::{decode_as, encode_as, DecodeErrorKind, DecodeOptions};
    use tessera_format::parse_document;

    #[test]
    fn test_onset_age() {
        let text = r#"{
            "resourceType": "Condition",
            "subject": {"reference": "Patient/f201"},
            "onsetAge": {
                "value": 52,
                "unit": "years",
                "system": "http://unitsofmeasure.org",
                "code": "a"
            },
            "abatementString": "around April 9, 2013"
        }"#;
        let condition: Condition =
            decode_as(parse_document(text).unwrap(), &DecodeOptions::default()).unwrap();
        assert_eq!(condition.subject.reference_str(), Some("Patient/f201"));
        assert!(matches!(condition.onset, Some(ConditionOnset::Age(_))));
        match &condition.abatement {
            Some(ConditionAbatement::String(s)) => {
                assert_eq!(s.value.as_deref(), Some("around April 9, 2013"))
            }
            other => panic!("unexpected abatement: {other:?}"),
        }
    }

    #[test]
    fn test_subject_required() {
        let text = r#"{"resourceType": "Condition", "onsetString": "childhood"}"#;
        let err = decode_as::<Condition>(parse_document(text).unwrap(), &DecodeOptions::default())
            .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingRequiredField("subject".into()));
        assert_eq!(err.path.to_string(), "Condition");
    }

    #[test]
    fn test_for_subject_encodes_minimally() {
        let condition = Condition::for_subject(Reference::to("Patient/1"));
        let encoded = encode_as(&condition);
        assert_eq!(encoded.len(), 2);
        assert_eq!(encoded["subject"]["reference"], "Patient/1");
    }
}

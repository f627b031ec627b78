//! AllergyIntolerance resource.

use super::codes::{
    AllergyIntoleranceCategory, AllergyIntoleranceCriticality, AllergyIntoleranceSeverity,
    AllergyIntoleranceType,
};
use super::datatypes::{Age, Annotation, CodeableConcept, Identifier, Period, Range, Reference};
use super::element::BackboneElement;
use super::primitives::{CodeOf, DateTime, FhirString};
use super::resource::DomainResource;
use tessera_codec::{aggregate, choice_type};

choice_type! {
    pub enum AllergyIntoleranceOnset("onset") {
        "onsetDateTime" => DateTime(DateTime),
        "onsetAge" => Age(Age),
        "onsetPeriod" => Period(Period),
        "onsetRange" => Range(Range),
        "onsetString" => String(FhirString),
    }
}

aggregate! {
    pub struct AllergyIntoleranceReaction("AllergyIntolerance.reaction") {
        backbone: BackboneElement => group(),
        substance: Option<CodeableConcept> => optional("substance"),
        manifestation: Vec<CodeableConcept> => required_list("manifestation"),
        description: Option<FhirString> => optional("description"),
        onset: Option<DateTime> => optional("onset"),
        severity: Option<CodeOf<AllergyIntoleranceSeverity>> => optional("severity"),
        exposure_route: Option<CodeableConcept> => optional("exposureRoute"),
        note: Vec<Annotation> => list("note"),
    }
}

aggregate! {
    /// Risk of a harmful reaction to a substance.
    pub struct AllergyIntolerance(resource "AllergyIntolerance") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        clinical_status: Option<CodeableConcept> => optional("clinicalStatus"),
        verification_status: Option<CodeableConcept> => optional("verificationStatus"),
        type_: Option<CodeOf<AllergyIntoleranceType>> => optional("type"),
        category: Vec<CodeOf<AllergyIntoleranceCategory>> => list("category"),
        criticality: Option<CodeOf<AllergyIntoleranceCriticality>> => optional("criticality"),
        code: Option<CodeableConcept> => optional("code"),
        patient: Reference => required("patient"),
        encounter: Option<Reference> => optional("encounter"),
        onset: Option<AllergyIntoleranceOnset> => choice(),
        recorded_date: Option<DateTime> => optional("recordedDate"),
        recorder: Option<Reference> => optional("recorder"),
        asserter: Option<Reference> => optional("asserter"),
        last_occurrence: Option<DateTime> => optional("lastOccurrence"),
        note: Vec<Annotation> => list("note"),
        reaction: Vec<AllergyIntoleranceReaction> => list("reaction"),
    }
}

impl AllergyIntolerance {
    /// Categories with a known code, skipping entries that only carry extensions.
    pub fn categories(&self) -> impl Iterator<Item = AllergyIntoleranceCategory> + '_ {
        self.category.iter().filter_map(|c| c.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_codec::{decode_as, DecodeErrorKind, DecodeOptions};
    use tessera_format::parse_document;

    #[test]
    fn test_category_list_with_companions() {
        let text = r#"{
            "resourceType": "AllergyIntolerance",
            "patient": {"reference": "Patient/example"},
            "category": ["food", null],
            "_category": [
                null,
                {"extension": [{"url": "http://example.org/why", "valueString": "not recorded"}]}
            ],
            "criticality": "high"
        }"#;
        let allergy: AllergyIntolerance =
            decode_as(parse_document(text).unwrap(), &DecodeOptions::default()).unwrap();
        assert_eq!(allergy.category.len(), 2);
        assert_eq!(
            allergy.categories().collect::<Vec<_>>(),
            vec![AllergyIntoleranceCategory::Food]
        );
        assert_eq!(allergy.category[1].extension.len(), 1);
    }

    #[test]
    fn test_reaction_requires_manifestation() {
        let text = r#"{
            "resourceType": "AllergyIntolerance",
            "patient": {"reference": "Patient/example"},
            "reaction": [{"description": "hives", "manifestation": []}]
        }"#;
        let err = decode_as::<AllergyIntolerance>(
            parse_document(text).unwrap(),
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::MissingRequiredField("manifestation".into())
        );
        assert_eq!(err.path.to_string(), "AllergyIntolerance.reaction[0]");
    }

    #[test]
    fn test_unknown_criticality_code() {
        let text = r#"{
            "resourceType": "AllergyIntolerance",
            "patient": {"reference": "Patient/example"},
            "criticality": "severe"
        }"#;
        let err = decode_as::<AllergyIntolerance>(
            parse_document(text).unwrap(),
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::MalformedPrimitive { .. }));
        assert_eq!(err.path.to_string(), "AllergyIntolerance.criticality");
    }
}

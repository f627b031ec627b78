//! Observation resource.

use super::codes::ObservationStatus;
use super::datatypes::{
    Annotation, CodeableConcept, Identifier, Period, Quantity, Range, Ratio, Reference,
    SampledData, SimpleQuantity, Timing,
};
use super::element::BackboneElement;
use super::primitives::{Boolean, CodeOf, DateTime, FhirString, Instant, Integer, Time};
use super::resource::DomainResource;
use tessera_codec::{aggregate, choice_type};

choice_type! {
    pub enum ObservationEffective("effective") {
        "effectiveDateTime" => DateTime(DateTime),
        "effectivePeriod" => Period(Period),
        "effectiveTiming" => Timing(Timing),
        "effectiveInstant" => Instant(Instant),
    }
}

choice_type! {
    /// `Observation.value[x]`, shared with `Observation.component.value[x]`.
    pub enum ObservationValue("value") {
        "valueQuantity" => Quantity(Quantity),
        "valueCodeableConcept" => CodeableConcept(CodeableConcept),
        "valueString" => String(FhirString),
        "valueBoolean" => Boolean(Boolean),
        "valueInteger" => Integer(Integer),
        "valueRange" => Range(Range),
        "valueRatio" => Ratio(Ratio),
        "valueSampledData" => SampledData(SampledData),
        "valueTime" => Time(Time),
        "valueDateTime" => DateTime(DateTime),
        "valuePeriod" => Period(Period),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct ObservationReferenceRange("Observation.referenceRange") {
        backbone: BackboneElement => group(),
        low: Option<SimpleQuantity> => optional("low"),
        high: Option<SimpleQuantity> => optional("high"),
        type_: Option<CodeableConcept> => optional("type"),
        applies_to: Vec<CodeableConcept> => list("appliesTo"),
        age: Option<Range> => optional("age"),
        text: Option<FhirString> => optional("text"),
    }
}

aggregate! {
    pub struct ObservationComponent("Observation.component") {
        backbone: BackboneElement => group(),
        code: CodeableConcept => required("code"),
        value: Option<ObservationValue> => choice(),
        data_absent_reason: Option<CodeableConcept> => optional("dataAbsentReason"),
        interpretation: Vec<CodeableConcept> => list("interpretation"),
        reference_range: Vec<ObservationReferenceRange> => list("referenceRange"),
    }
}

aggregate! {
    /// Measurements and simple assertions made about a subject.
    pub struct Observation(resource "Observation") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        based_on: Vec<Reference> => list("basedOn"),
        part_of: Vec<Reference> => list("partOf"),
        status: CodeOf<ObservationStatus> => required("status"),
        category: Vec<CodeableConcept> => list("category"),
        code: CodeableConcept => required("code"),
        subject: Option<Reference> => optional("subject"),
        focus: Vec<Reference> => list("focus"),
        encounter: Option<Reference> => optional("encounter"),
        effective: Option<ObservationEffective> => choice(),
        issued: Option<Instant> => optional("issued"),
        performer: Vec<Reference> => list("performer"),
        value: Option<ObservationValue> => choice(),
        data_absent_reason: Option<CodeableConcept> => optional("dataAbsentReason"),
        interpretation: Vec<CodeableConcept> => list("interpretation"),
        note: Vec<Annotation> => list("note"),
        body_site: Option<CodeableConcept> => optional("bodySite"),
        method: Option<CodeableConcept> => optional("method"),
        specimen: Option<Reference> => optional("specimen"),
        device: Option<Reference> => optional("device"),
        reference_range: Vec<ObservationReferenceRange> => list("referenceRange"),
        has_member: Vec<Reference> => list("hasMember"),
        derived_from: Vec<Reference> => list("derivedFrom"),
        component: Vec<ObservationComponent> => list("component"),
    }
}

impl Observation {
    pub fn status(&self) -> Option<ObservationStatus> {
        self.status.value
    }

    /// The value as a quantity, when it is one.
    pub fn value_quantity(&self) -> Option<&Quantity> {
        match &self.value {
            Some(ObservationValue::Quantity(quantity)) => Some(quantity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_codec::{decode_as, encode_as, DecodeErrorKind, DecodeOptions};
    use tessera_format::{parse_document, to_json_string};

    #[test]
    fn test_value_quantity_keeps_precision() {
        let text = concat!(
            r#"{"resourceType":"Observation","status":"final","code":{"text":"weight"},"#,
            r#""valueQuantity":{"value":72.50,"unit":"kg"}}"#
        );
        let observation: Observation =
            decode_as(parse_document(text).unwrap(), &DecodeOptions::default()).unwrap();

        let value = observation
            .value_quantity()
            .and_then(|q| q.value.as_ref())
            .and_then(|v| v.value.as_ref())
            .unwrap();
        assert_eq!(value.as_str(), "72.50");
        assert_eq!(to_json_string(&encode_as(&observation)).unwrap(), text);
    }

    #[test]
    fn test_status_is_required() {
        let text = r#"{"resourceType":"Observation","code":{"text":"weight"}}"#;
        let err = decode_as::<Observation>(parse_document(text).unwrap(), &DecodeOptions::default())
            .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingRequiredField("status".into()));
    }

    #[test]
    fn test_component_values() {
        let text = r#"{
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "blood pressure"},
            "effectiveDateTime": "2012-09-17",
            "component": [
                {"code": {"text": "systolic"}, "valueQuantity": {"value": 107, "unit": "mmHg"}},
                {"code": {"text": "diastolic"}, "valueQuantity": {"value": 60, "unit": "mmHg"}}
            ]
        }"#;
        let observation: Observation =
            decode_as(parse_document(text).unwrap(), &DecodeOptions::default()).unwrap();
        assert_eq!(observation.status(), Some(ObservationStatus::Final));
        assert_eq!(observation.component.len(), 2);
        assert!(matches!(
            observation.effective,
            Some(ObservationEffective::DateTime(_))
        ));
        assert!(observation.value.is_none());
    }
}

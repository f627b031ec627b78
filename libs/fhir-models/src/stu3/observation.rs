//! STU3 Observation.

use super::codes::ObservationRelationshipType;
use super::resource::DomainResource;
use crate::r4::element::BackboneElement;
use crate::r4::{
    Attachment, Boolean, CodeOf, CodeableConcept, DateTime, FhirString, Identifier, Instant,
    ObservationReferenceRange, ObservationStatus, Period, Quantity, Range, Ratio, Reference,
    SampledData, Time,
};
use tessera_codec::{aggregate, choice_type};

choice_type! {
    pub enum ObservationEffective("effective") {
        "effectiveDateTime" => DateTime(DateTime),
        "effectivePeriod" => Period(Period),
    }
}

choice_type! {
    /// STU3 allows `valueAttachment` and has no `valueInteger`.
    pub enum ObservationValue("value") {
        "valueQuantity" => Quantity(Quantity),
        "valueCodeableConcept" => CodeableConcept(CodeableConcept),
        "valueString" => String(FhirString),
        "valueBoolean" => Boolean(Boolean),
        "valueRange" => Range(Range),
        "valueRatio" => Ratio(Ratio),
        "valueSampledData" => SampledData(SampledData),
        "valueAttachment" => Attachment(Attachment),
        "valueTime" => Time(Time),
        "valueDateTime" => DateTime(DateTime),
        "valuePeriod" => Period(Period),
    }
}

aggregate! {
    pub struct ObservationRelated("Observation.related") {
        backbone: BackboneElement => group(),
        type_: Option<CodeOf<ObservationRelationshipType>> => optional("type"),
        target: Reference => required("target"),
    }
}

aggregate! {
    pub struct ObservationComponent("Observation.component") {
        backbone: BackboneElement => group(),
        code: CodeableConcept => required("code"),
        value: Option<ObservationValue> => choice(),
        data_absent_reason: Option<CodeableConcept> => optional("dataAbsentReason"),
        interpretation: Option<CodeableConcept> => optional("interpretation"),
        reference_range: Vec<ObservationReferenceRange> => list("referenceRange"),
    }
}

aggregate! {
    /// Measurements and simple assertions made about a subject.
    pub struct Observation(resource "Observation") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        based_on: Vec<Reference> => list("basedOn"),
        status: CodeOf<ObservationStatus> => required("status"),
        category: Vec<CodeableConcept> => list("category"),
        code: CodeableConcept => required("code"),
        subject: Option<Reference> => optional("subject"),
        context: Option<Reference> => optional("context"),
        effective: Option<ObservationEffective> => choice(),
        issued: Option<Instant> => optional("issued"),
        performer: Vec<Reference> => list("performer"),
        value: Option<ObservationValue> => choice(),
        data_absent_reason: Option<CodeableConcept> => optional("dataAbsentReason"),
        interpretation: Option<CodeableConcept> => optional("interpretation"),
        comment: Option<FhirString> => optional("comment"),
        body_site: Option<CodeableConcept> => optional("bodySite"),
        method: Option<CodeableConcept> => optional("method"),
        specimen: Option<Reference> => optional("specimen"),
        device: Option<Reference> => optional("device"),
        reference_range: Vec<ObservationReferenceRange> => list("referenceRange"),
        related: Vec<ObservationRelated> => list("related"),
        component: Vec<ObservationComponent> => list("component"),
    }
}

impl Observation {
    pub fn status(&self) -> Option<ObservationStatus> {
        self.status.value
    }

    pub fn value_quantity(&self) -> Option<&Quantity> {
        match &self.value {
            Some(ObservationValue::Quantity(quantity)) => Some(quantity),
            _ => None,
        }
    }

    /// Targets of `related` entries with the given relationship.
    pub fn related_by(
        &self,
        relationship: ObservationRelationshipType,
    ) -> impl Iterator<Item = &Reference> {
        self.related
            .iter()
            .filter(move |r| r.type_.as_ref().and_then(|t| t.value) == Some(relationship))
            .map(|r| &r.target)
    }
}

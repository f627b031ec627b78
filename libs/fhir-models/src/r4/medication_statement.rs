//! MedicationStatement resource.

use super::codes::MedicationStatementStatus;
use super::datatypes::{Annotation, CodeableConcept, Dosage, Identifier, Period, Reference};
use super::primitives::{CodeOf, DateTime};
use super::resource::DomainResource;
use tessera_codec::{aggregate, choice_type};

choice_type! {
    pub enum MedicationStatementMedication("medication") {
        "medicationCodeableConcept" => CodeableConcept(CodeableConcept),
        "medicationReference" => Reference(Reference),
    }
}

choice_type! {
    pub enum MedicationStatementEffective("effective") {
        "effectiveDateTime" => DateTime(DateTime),
        "effectivePeriod" => Period(Period),
    }
}

aggregate! {
    /// A record of a medication being taken, now, in the past or in future.
    pub struct MedicationStatement(resource "MedicationStatement") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        based_on: Vec<Reference> => list("basedOn"),
        part_of: Vec<Reference> => list("partOf"),
        status: CodeOf<MedicationStatementStatus> => required("status"),
        status_reason: Vec<CodeableConcept> => list("statusReason"),
        category: Option<CodeableConcept> => optional("category"),
        medication: MedicationStatementMedication => required_choice(),
        subject: Reference => required("subject"),
        context: Option<Reference> => optional("context"),
        effective: Option<MedicationStatementEffective> => choice(),
        date_asserted: Option<DateTime> => optional("dateAsserted"),
        information_source: Option<Reference> => optional("informationSource"),
        derived_from: Vec<Reference> => list("derivedFrom"),
        reason_code: Vec<CodeableConcept> => list("reasonCode"),
        reason_reference: Vec<Reference> => list("reasonReference"),
        note: Vec<Annotation> => list("note"),
        dosage: Vec<Dosage> => list("dosage"),
    }
}

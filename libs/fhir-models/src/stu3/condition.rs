//! STU3 Condition. Statuses are plain codes rather than CodeableConcepts.

use super::codes::{ConditionClinicalStatus, ConditionVerificationStatus};
use super::resource::DomainResource;
use crate::r4::element::BackboneElement;
use crate::r4::{
    Age, Annotation, Boolean, CodeOf, CodeableConcept, ConditionEvidence, ConditionOnset,
    DateTime, FhirString, Identifier, Period, Range, Reference,
};
use tessera_codec::{aggregate, choice_type};

choice_type! {
    /// STU3 adds `abatementBoolean`.
    pub enum ConditionAbatement("abatement") {
        "abatementDateTime" => DateTime(DateTime),
        "abatementAge" => Age(Age),
        "abatementBoolean" => Boolean(Boolean),
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
    }
}

aggregate! {
    /// A clinical condition, problem or diagnosis.
    pub struct Condition(resource "Condition") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        clinical_status: Option<CodeOf<ConditionClinicalStatus>> => optional("clinicalStatus"),
        verification_status: Option<CodeOf<ConditionVerificationStatus>>
            => optional("verificationStatus"),
        category: Vec<CodeableConcept> => list("category"),
        severity: Option<CodeableConcept> => optional("severity"),
        code: Option<CodeableConcept> => optional("code"),
        body_site: Vec<CodeableConcept> => list("bodySite"),
        subject: Reference => required("subject"),
        context: Option<Reference> => optional("context"),
        onset: Option<ConditionOnset> => choice(),
        abatement: Option<ConditionAbatement> => choice(),
        asserted_date: Option<DateTime> => optional("assertedDate"),
        asserter: Option<Reference> => optional("asserter"),
        stage: Option<ConditionStage> => optional("stage"),
        evidence: Vec<ConditionEvidence> => list("evidence"),
        note: Vec<Annotation> => list("note"),
    }
}

impl Condition {
    pub fn clinical_status(&self) -> Option<ConditionClinicalStatus> {
        self.clinical_status.as_ref().and_then(|s| s.value)
    }

    /// Active or recurring.
    pub fn is_active(&self) -> bool {
        matches!(
            self.clinical_status(),
            Some(ConditionClinicalStatus::Active | ConditionClinicalStatus::Recurrence)
        )
    }
}

//! STU3 AllergyIntolerance.

use super::codes::{AllergyIntoleranceClinicalStatus, AllergyIntoleranceVerificationStatus};
use super::resource::DomainResource;
use crate::r4::{
    AllergyIntoleranceCategory, AllergyIntoleranceCriticality, AllergyIntoleranceOnset,
    AllergyIntoleranceReaction, AllergyIntoleranceType, Annotation, CodeOf, CodeableConcept,
    DateTime, Identifier, Reference,
};
use tessera_codec::aggregate;

aggregate! {
    /// Risk of a harmful reaction to a substance.
    pub struct AllergyIntolerance(resource "AllergyIntolerance") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        clinical_status: Option<CodeOf<AllergyIntoleranceClinicalStatus>>
            => optional("clinicalStatus"),
        verification_status: CodeOf<AllergyIntoleranceVerificationStatus>
            => required("verificationStatus"),
        type_: Option<CodeOf<AllergyIntoleranceType>> => optional("type"),
        category: Vec<CodeOf<AllergyIntoleranceCategory>> => list("category"),
        criticality: Option<CodeOf<AllergyIntoleranceCriticality>> => optional("criticality"),
        code: Option<CodeableConcept> => optional("code"),
        patient: Reference => required("patient"),
        onset: Option<AllergyIntoleranceOnset> => choice(),
        asserted_date: Option<DateTime> => optional("assertedDate"),
        recorder: Option<Reference> => optional("recorder"),
        asserter: Option<Reference> => optional("asserter"),
        last_occurrence: Option<DateTime> => optional("lastOccurrence"),
        note: Vec<Annotation> => list("note"),
        reaction: Vec<AllergyIntoleranceReaction> => list("reaction"),
    }
}

impl AllergyIntolerance {
    pub fn verification_status(&self) -> Option<AllergyIntoleranceVerificationStatus> {
        self.verification_status.value
    }

    pub fn categories(&self) -> impl Iterator<Item = AllergyIntoleranceCategory> + '_ {
        self.category.iter().filter_map(|c| c.value)
    }
}

//! FHIR R4 (4.0.1) catalogue.

pub mod allergy_intolerance;
pub mod bundle;
pub mod codes;
pub mod condition;
pub mod datatypes;
pub mod document_reference;
pub mod element;
pub mod medication;
pub mod medication_statement;
pub mod observation;
pub mod operation_outcome;
pub mod patient;
pub mod primitives;
pub mod resource;

pub use allergy_intolerance::{
    AllergyIntolerance, AllergyIntoleranceOnset, AllergyIntoleranceReaction,
};
pub use bundle::{
    Bundle, BundleEntry, BundleEntryRequest, BundleEntryResponse, BundleEntrySearch, BundleLink,
};
pub use codes::*;
pub use condition::{
    Condition, ConditionAbatement, ConditionEvidence, ConditionOnset, ConditionStage,
};
pub use datatypes::*;
pub use document_reference::{
    DocumentReference, DocumentReferenceContent, DocumentReferenceContext,
    DocumentReferenceRelatesTo,
};
pub use element::{BackboneElement, Element, Extension, ExtensionValue};
pub use medication::{Medication, MedicationBatch, MedicationIngredient, MedicationIngredientItem};
pub use medication_statement::{
    MedicationStatement, MedicationStatementEffective, MedicationStatementMedication,
};
pub use observation::{
    Observation, ObservationComponent, ObservationEffective, ObservationReferenceRange,
    ObservationValue,
};
pub use operation_outcome::{OperationOutcome, OperationOutcomeIssue};
pub use patient::{
    Patient, PatientCommunication, PatientContact, PatientDeceased, PatientLink,
    PatientMultipleBirth,
};
pub use primitives::*;
pub use resource::{
    is_registered, registered_resource_types, DomainResource, ResourceBase, ResourceValue,
};

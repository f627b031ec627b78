//! FHIR STU3 (3.0.2) catalogue.
//!
//! The same resource set as [`crate::r4`], with STU3 field sets and code
//! systems. General-purpose datatypes, `Extension` and the primitives are
//! shared with R4: [`Patient`] here still embeds [`crate::r4::HumanName`].
//! Decoding goes through the same `tessera-codec` engine with its own
//! registry, so a document is read against exactly one release.
//!
//! ```rust
//! use tessera_models::stu3::{self, MedicationStatementTaken, ResourceValue};
//!
//! let resource = stu3::from_json_str(r#"{
//!     "resourceType": "MedicationStatement",
//!     "status": "completed",
//!     "medicationCodeableConcept": {"text": "aspirin"},
//!     "subject": {"reference": "Patient/1"},
//!     "taken": "y"
//! }"#).unwrap();
//!
//! match &resource {
//!     ResourceValue::MedicationStatement(statement) => {
//!         assert_eq!(statement.taken(), Some(MedicationStatementTaken::Yes));
//!     }
//!     other => panic!("unexpected {}", other.resource_type()),
//! }
//! ```

pub mod allergy_intolerance;
pub mod bundle;
pub mod codes;
pub mod condition;
pub mod document_reference;
pub mod dosage;
pub mod medication;
pub mod medication_statement;
pub mod observation;
pub mod operation_outcome;
pub mod patient;
pub mod resource;

use crate::api::{decode_in, encode_in, parse_in, print_in};
use crate::error::Result;
use tessera_codec::{DecodeError, DecodeOptions};
use tessera_format::Document;

pub use allergy_intolerance::AllergyIntolerance;
pub use bundle::{Bundle, BundleEntry, BundleEntryRequest, BundleEntryResponse};
pub use codes::*;
pub use condition::{Condition, ConditionAbatement, ConditionStage};
pub use document_reference::{
    DocumentReference, DocumentReferenceContent, DocumentReferenceContext,
    DocumentReferenceContextRelated,
};
pub use dosage::Dosage;
pub use medication::{
    Medication, MedicationIngredient, MedicationItem, MedicationPackage, MedicationPackageBatch,
    MedicationPackageContent,
};
pub use medication_statement::MedicationStatement;
pub use observation::{
    Observation, ObservationComponent, ObservationEffective, ObservationRelated, ObservationValue,
};
pub use operation_outcome::OperationOutcome;
pub use patient::{Patient, PatientAnimal};
pub use resource::{is_registered, registered_resource_types, DomainResource, ResourceValue};

pub fn decode_resource(document: Document) -> std::result::Result<ResourceValue, DecodeError> {
    decode_resource_with(document, &DecodeOptions::default())
}

pub fn decode_resource_with(
    document: Document,
    options: &DecodeOptions,
) -> std::result::Result<ResourceValue, DecodeError> {
    decode_in(document, options)
}

pub fn encode_resource(resource: &ResourceValue) -> Document {
    encode_in(resource)
}

pub fn from_json_str(input: &str) -> Result<ResourceValue> {
    from_json_str_with(input, &DecodeOptions::default())
}

pub fn from_json_str_with(input: &str, options: &DecodeOptions) -> Result<ResourceValue> {
    parse_in(input, options)
}

pub fn to_json_string(resource: &ResourceValue) -> Result<String> {
    print_in(resource, false)
}

pub fn to_json_string_pretty(resource: &ResourceValue) -> Result<String> {
    print_in(resource, true)
}

//! STU3 DocumentReference.

use super::resource::DomainResource;
use crate::r4::element::BackboneElement;
use crate::r4::{
    Attachment, CodeOf, CodeableConcept, Coding, CompositionStatus, DateTime,
    DocumentReferenceRelatesTo, DocumentReferenceStatus, DocumentRelationshipType, FhirString,
    Identifier, Instant, Period, Reference,
};
use tessera_codec::aggregate;

aggregate! {
    pub struct DocumentReferenceContent("DocumentReference.content") {
        backbone: BackboneElement => group(),
        attachment: Attachment => required("attachment"),
        format: Option<Coding> => optional("format"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct DocumentReferenceContextRelated("DocumentReference.context.related") {
        backbone: BackboneElement => group(),
        identifier: Option<Identifier> => optional("identifier"),
        ref_: Option<Reference> => optional("ref"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct DocumentReferenceContext("DocumentReference.context") {
        backbone: BackboneElement => group(),
        encounter: Option<Reference> => optional("encounter"),
        event: Vec<CodeableConcept> => list("event"),
        period: Option<Period> => optional("period"),
        facility_type: Option<CodeableConcept> => optional("facilityType"),
        practice_setting: Option<CodeableConcept> => optional("practiceSetting"),
        source_patient_info: Option<Reference> => optional("sourcePatientInfo"),
        related: Vec<DocumentReferenceContextRelated> => list("related"),
    }
}

aggregate! {
    /// Metadata about a document, with the document itself attached or linked.
    pub struct DocumentReference(resource "DocumentReference") {
        domain: DomainResource => group(),
        master_identifier: Option<Identifier> => optional("masterIdentifier"),
        identifier: Vec<Identifier> => list("identifier"),
        status: CodeOf<DocumentReferenceStatus> => required("status"),
        doc_status: Option<CodeOf<CompositionStatus>> => optional("docStatus"),
        type_: CodeableConcept => required("type"),
        class: Option<CodeableConcept> => optional("class"),
        subject: Option<Reference> => optional("subject"),
        created: Option<DateTime> => optional("created"),
        indexed: Instant => required("indexed"),
        author: Vec<Reference> => list("author"),
        authenticator: Option<Reference> => optional("authenticator"),
        custodian: Option<Reference> => optional("custodian"),
        relates_to: Vec<DocumentReferenceRelatesTo> => list("relatesTo"),
        description: Option<FhirString> => optional("description"),
        security_label: Vec<CodeableConcept> => list("securityLabel"),
        content: Vec<DocumentReferenceContent> => required_list("content"),
        context: Option<DocumentReferenceContext> => optional("context"),
    }
}

impl DocumentReference {
    pub fn replaced_documents(&self) -> impl Iterator<Item = &Reference> {
        self.relates_to
            .iter()
            .filter(|r| r.code.value == Some(DocumentRelationshipType::Replaces))
            .map(|r| &r.target)
    }
}

//! DocumentReference resource.

use super::codes::{CompositionStatus, DocumentReferenceStatus, DocumentRelationshipType};
use super::datatypes::{Attachment, CodeableConcept, Coding, Identifier, Period, Reference};
use super::element::BackboneElement;
use super::primitives::{CodeOf, FhirString, Instant};
use super::resource::DomainResource;
use tessera_codec::aggregate;

aggregate! {
    pub struct DocumentReferenceRelatesTo("DocumentReference.relatesTo") {
        backbone: BackboneElement => group(),
        code: CodeOf<DocumentRelationshipType> => required("code"),
        target: Reference => required("target"),
    }
}

aggregate! {
    pub struct DocumentReferenceContent("DocumentReference.content") {
        backbone: BackboneElement => group(),
        attachment: Attachment => required("attachment"),
        format: Option<Coding> => optional("format"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct DocumentReferenceContext("DocumentReference.context") {
        backbone: BackboneElement => group(),
        encounter: Vec<Reference> => list("encounter"),
        event: Vec<CodeableConcept> => list("event"),
        period: Option<Period> => optional("period"),
        facility_type: Option<CodeableConcept> => optional("facilityType"),
        practice_setting: Option<CodeableConcept> => optional("practiceSetting"),
        source_patient_info: Option<Reference> => optional("sourcePatientInfo"),
        related: Vec<Reference> => list("related"),
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
        type_: Option<CodeableConcept> => optional("type"),
        category: Vec<CodeableConcept> => list("category"),
        subject: Option<Reference> => optional("subject"),
        date: Option<Instant> => optional("date"),
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
    /// Targets of `replaces` relations: documents this one supersedes.
    pub fn replaced_documents(&self) -> impl Iterator<Item = &Reference> {
        self.relates_to
            .iter()
            .filter(|r| r.code.value == Some(DocumentRelationshipType::Replaces))
            .map(|r| &r.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_codec::{decode_as, DecodeErrorKind, DecodeOptions};
    use tessera_format::parse_document;

    #[test]
    fn test_decode_document_reference() {
        let text = r#"{
            "resourceType": "DocumentReference",
            "status": "current",
            "docStatus": "preliminary",
            "date": "2005-12-24T09:43:41+11:00",
            "relatesTo": [{
                "code": "replaces",
                "target": {"reference": "DocumentReference/example"}
            }],
            "content": [{
                "attachment": {
                    "contentType": "application/hl7-v3+xml",
                    "language": "en-US",
                    "size": 3654
                },
                "format": {
                    "system": "urn:oid:1.3.6.1.4.1.19376.1.2.3",
                    "code": "urn:ihe:pcc:handp:2008"
                }
            }],
            "context": {"period": {"start": "2004-12-23T08:00:00+10:00"}}
        }"#;
        let doc: DocumentReference =
            decode_as(parse_document(text).unwrap(), &DecodeOptions::strict()).unwrap();
        assert_eq!(doc.status.value, Some(DocumentReferenceStatus::Current));
        assert_eq!(doc.content.len(), 1);
        assert_eq!(
            doc.replaced_documents()
                .filter_map(Reference::reference_str)
                .collect::<Vec<_>>(),
            vec!["DocumentReference/example"]
        );
    }

    #[test]
    fn test_content_required() {
        let text = r#"{"resourceType": "DocumentReference", "status": "current"}"#;
        let err =
            decode_as::<DocumentReference>(parse_document(text).unwrap(), &DecodeOptions::default())
                .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingRequiredField("content".into()));
    }

    #[test]
    fn test_instant_requires_seconds_and_zone() {
        let text = r#"{
            "resourceType": "DocumentReference",
            "status": "current",
            "date": "2005-12-24",
            "content": [{"attachment": {"url": "http://example.org/doc"}}]
        }"#;
        let err =
            decode_as::<DocumentReference>(parse_document(text).unwrap(), &DecodeOptions::default())
                .unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::MalformedPrimitive { expected: "instant", .. }
        ));
        assert_eq!(err.path.to_string(), "DocumentReference.date");
    }
}

//! STU3 MedicationStatement.
//!
//! `taken` is required and says whether the patient took the medication; R4
//! folded it into `status`.

use super::codes::{MedicationStatementStatus, MedicationStatementTaken};
use super::dosage::Dosage;
use super::resource::DomainResource;
use crate::r4::{
    Annotation, CodeOf, CodeableConcept, DateTime, Identifier, MedicationStatementEffective,
    MedicationStatementMedication, Reference,
};
use tessera_codec::aggregate;

aggregate! {
    /// A record of a medication being taken, now, in the past or in future.
    pub struct MedicationStatement(resource "MedicationStatement") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        based_on: Vec<Reference> => list("basedOn"),
        part_of: Vec<Reference> => list("partOf"),
        context: Option<Reference> => optional("context"),
        status: CodeOf<MedicationStatementStatus> => required("status"),
        category: Option<CodeableConcept> => optional("category"),
        medication: MedicationStatementMedication => required_choice(),
        effective: Option<MedicationStatementEffective> => choice(),
        date_asserted: Option<DateTime> => optional("dateAsserted"),
        information_source: Option<Reference> => optional("informationSource"),
        subject: Reference => required("subject"),
        derived_from: Vec<Reference> => list("derivedFrom"),
        taken: CodeOf<MedicationStatementTaken> => required("taken"),
        reason_not_taken: Vec<CodeableConcept> => list("reasonNotTaken"),
        reason_code: Vec<CodeableConcept> => list("reasonCode"),
        reason_reference: Vec<Reference> => list("reasonReference"),
        note: Vec<Annotation> => list("note"),
        dosage: Vec<Dosage> => list("dosage"),
    }
}

impl MedicationStatement {
    pub fn taken(&self) -> Option<MedicationStatementTaken> {
        self.taken.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_codec::{decode_as, encode_as, DecodeErrorKind, DecodeOptions};
    use tessera_format::{parse_document, structurally_equivalent, Value};

    const EXAMPLE: &str = r##"{
        "resourceType": "MedicationStatement",
        "status": "active",
        "medicationReference": {"reference": "#med0309"},
        "effectiveDateTime": "2015-01-23",
        "subject": {"reference": "Patient/pat1", "display": "Donald Duck"},
        "taken": "n",
        "reasonNotTaken": [{"text": "patient refused"}],
        "dosage": [{
            "sequence": 1,
            "text": "1-2 tablets once daily at bedtime as needed for restless legs",
            "asNeededCodeableConcept": {"text": "restless legs"},
            "doseRange": {
                "low": {"value": 1, "unit": "TAB"},
                "high": {"value": 2, "unit": "TAB"}
            }
        }]
    }"##;

    #[test]
    fn test_taken_round_trip() {
        let document = parse_document(EXAMPLE).unwrap();
        let statement: MedicationStatement =
            decode_as(document.clone(), &DecodeOptions::strict()).unwrap();
        assert_eq!(statement.taken(), Some(MedicationStatementTaken::No));
        assert_eq!(statement.reason_not_taken.len(), 1);
        assert!(structurally_equivalent(
            &Value::Object(encode_as(&statement)),
            &Value::Object(document)
        ));
    }

    #[test]
    fn test_taken_required() {
        let text = r#"{
            "resourceType": "MedicationStatement",
            "status": "active",
            "medicationCodeableConcept": {"text": "aspirin"},
            "subject": {"reference": "Patient/1"}
        }"#;
        let err = decode_as::<MedicationStatement>(
            parse_document(text).unwrap(),
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingRequiredField("taken".into()));
    }
}

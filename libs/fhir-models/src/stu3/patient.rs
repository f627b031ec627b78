//! STU3 Patient, which still carries `animal`.

use super::codes::AnimalGenderStatus;
use super::resource::DomainResource;
use crate::r4::element::BackboneElement;
use crate::r4::{
    Address, AdministrativeGender, Attachment, Boolean, CodeOf, CodeableConcept, ContactPoint, Date,
    HumanName, Identifier, PatientCommunication, PatientContact, PatientDeceased, PatientLink,
    PatientMultipleBirth, Reference,
};
use tessera_codec::aggregate;

aggregate! {
    /// Present when the patient is not a human.
    pub struct PatientAnimal("Patient.animal") {
        backbone: BackboneElement => group(),
        species: CodeableConcept => required("species"),
        breed: Option<CodeableConcept> => optional("breed"),
        gender_status: Option<CodeableConcept> => optional("genderStatus"),
    }
}

impl PatientAnimal {
    /// `genderStatus` read against the example code system.
    pub fn gender_status_code(&self) -> Option<AnimalGenderStatus> {
        let concept = self.gender_status.as_ref()?;
        AnimalGenderStatus::ALL
            .iter()
            .copied()
            .find(|status| concept.has_coding(AnimalGenderStatus::SYSTEM, status.code()))
    }
}

aggregate! {
    /// Demographics of a person or animal receiving care.
    #[derive(Default)]
    pub struct Patient(resource "Patient") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        active: Option<Boolean> => optional("active"),
        name: Vec<HumanName> => list("name"),
        telecom: Vec<ContactPoint> => list("telecom"),
        gender: Option<CodeOf<AdministrativeGender>> => optional("gender"),
        birth_date: Option<Date> => optional("birthDate"),
        deceased: Option<PatientDeceased> => choice(),
        address: Vec<Address> => list("address"),
        marital_status: Option<CodeableConcept> => optional("maritalStatus"),
        multiple_birth: Option<PatientMultipleBirth> => choice(),
        photo: Vec<Attachment> => list("photo"),
        contact: Vec<PatientContact> => list("contact"),
        animal: Option<PatientAnimal> => optional("animal"),
        communication: Vec<PatientCommunication> => list("communication"),
        general_practitioner: Vec<Reference> => list("generalPractitioner"),
        managing_organization: Option<Reference> => optional("managingOrganization"),
        link: Vec<PatientLink> => list("link"),
    }
}

impl Patient {
    pub fn gender(&self) -> Option<AdministrativeGender> {
        self.gender.as_ref().and_then(|g| g.value)
    }

    pub fn is_animal(&self) -> bool {
        self.animal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessera_codec::{decode_as, encode_as, DecodeErrorKind, DecodeOptions, Document};

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_decode_animal() {
        let input = doc(json!({
            "resourceType": "Patient",
            "id": "animal",
            "name": [{"use": "usual", "given": ["Kenzi"]}],
            "gender": "female",
            "animal": {
                "species": {
                    "coding": [{"system": "http://hl7.org/fhir/animal-species", "code": "canislf"}]
                },
                "genderStatus": {
                    "coding": [{
                        "system": "http://hl7.org/fhir/animal-genderstatus",
                        "code": "neutered"
                    }]
                }
            }
        }));
        let patient: Patient = decode_as(input.clone(), &DecodeOptions::strict()).unwrap();
        assert!(patient.is_animal());
        assert_eq!(
            patient.animal.as_ref().unwrap().gender_status_code(),
            Some(AnimalGenderStatus::Neutered)
        );
        assert_eq!(encode_as(&patient), input);
    }

    #[test]
    fn test_species_required() {
        let err = decode_as::<Patient>(
            doc(json!({"resourceType": "Patient", "animal": {"breed": {"text": "Collie"}}})),
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingRequiredField("species".into()));
        assert_eq!(err.path.to_string(), "Patient.animal");
    }
}

//! Patient resource.

use super::codes::{AdministrativeGender, LinkType};
use super::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, HumanName, Identifier, Period, Reference,
};
use super::element::BackboneElement;
use super::primitives::{Boolean, CodeOf, Date, DateTime, Integer};
use super::resource::DomainResource;
use tessera_codec::{aggregate, choice_type};

choice_type! {
    pub enum PatientDeceased("deceased") {
        "deceasedBoolean" => Boolean(Boolean),
        "deceasedDateTime" => DateTime(DateTime),
    }
}

choice_type! {
    pub enum PatientMultipleBirth("multipleBirth") {
        "multipleBirthBoolean" => Boolean(Boolean),
        "multipleBirthInteger" => Integer(Integer),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct PatientContact("Patient.contact") {
        backbone: BackboneElement => group(),
        relationship: Vec<CodeableConcept> => list("relationship"),
        name: Option<HumanName> => optional("name"),
        telecom: Vec<ContactPoint> => list("telecom"),
        address: Option<Address> => optional("address"),
        gender: Option<CodeOf<AdministrativeGender>> => optional("gender"),
        organization: Option<Reference> => optional("organization"),
        period: Option<Period> => optional("period"),
    }
}

aggregate! {
    pub struct PatientCommunication("Patient.communication") {
        backbone: BackboneElement => group(),
        language: CodeableConcept => required("language"),
        preferred: Option<Boolean> => optional("preferred"),
    }
}

aggregate! {
    pub struct PatientLink("Patient.link") {
        backbone: BackboneElement => group(),
        other: Reference => required("other"),
        type_: CodeOf<LinkType> => required("type"),
    }
}

aggregate! {
    /// Demographics of a person receiving care.
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

    /// Whether the record says the patient has died, by flag or by date.
    pub fn is_deceased(&self) -> bool {
        match &self.deceased {
            Some(PatientDeceased::Boolean(flag)) => flag.value == Some(true),
            Some(PatientDeceased::DateTime(_)) => true,
            None => false,
        }
    }
}

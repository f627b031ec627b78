//! Code systems whose STU3 values differ from R4.
//!
//! Systems with the same values in both releases are re-exported from
//! [`crate::r4::codes`] by the parent module.

use tessera_codec::code_system;

code_system! {
    pub enum ConditionClinicalStatus("http://hl7.org/fhir/condition-clinical") {
        Active = "active",
        Recurrence = "recurrence",
        Inactive = "inactive",
        Remission = "remission",
        Resolved = "resolved",
    }
}

code_system! {
    pub enum ConditionVerificationStatus("http://hl7.org/fhir/condition-ver-status") {
        Provisional = "provisional",
        Differential = "differential",
        Confirmed = "confirmed",
        Refuted = "refuted",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

code_system! {
    pub enum AllergyIntoleranceClinicalStatus(
        "http://hl7.org/fhir/allergy-clinical-status"
    ) {
        Active = "active",
        Inactive = "inactive",
        Resolved = "resolved",
    }
}

code_system! {
    pub enum AllergyIntoleranceVerificationStatus(
        "http://hl7.org/fhir/allergy-verification-status"
    ) {
        Unconfirmed = "unconfirmed",
        Confirmed = "confirmed",
        Refuted = "refuted",
        EnteredInError = "entered-in-error",
    }
}

code_system! {
    pub enum MedicationStatementStatus("http://hl7.org/fhir/medication-statement-status") {
        Active = "active",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Intended = "intended",
        Stopped = "stopped",
        OnHold = "on-hold",
    }
}

code_system! {
    pub enum MedicationStatementTaken("http://hl7.org/fhir/medication-statement-taken") {
        Yes = "y",
        No = "n",
        Unknown = "unk",
        NotApplicable = "na",
    }
}

code_system! {
    pub enum HttpVerb("http://hl7.org/fhir/http-verb") {
        Get = "GET",
        Post = "POST",
        Put = "PUT",
        Delete = "DELETE",
    }
}

code_system! {
    pub enum ObservationRelationshipType(
        "http://hl7.org/fhir/observation-relationshiptypes"
    ) {
        HasMember = "has-member",
        DerivedFrom = "derived-from",
        SequelTo = "sequel-to",
        Replaces = "replaces",
        QualifiedBy = "qualified-by",
        InterferedBy = "interfered-by",
    }
}

code_system! {
    pub enum AnimalGenderStatus("http://hl7.org/fhir/animal-genderstatus") {
        Neutered = "neutered",
        Intact = "intact",
        Unknown = "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_specific_values() {
        assert_eq!(HttpVerb::from_code("PATCH"), None);
        assert_eq!(HttpVerb::from_code("DELETE"), Some(HttpVerb::Delete));
        assert_eq!(MedicationStatementStatus::from_code("not-taken"), None);
        assert_eq!(
            MedicationStatementTaken::from_code("unk"),
            Some(MedicationStatementTaken::Unknown)
        );
        assert_eq!(ConditionClinicalStatus::Recurrence.code(), "recurrence");
    }
}

//! STU3 Dosage: dose and rate sit directly on the dosage, without the
//! `doseAndRate` list R4 introduced.

use crate::r4::element::Element;
use crate::r4::{
    CodeableConcept, DosageAsNeeded, DoseAndRateDose, DoseAndRateRate, FhirString, Integer, Ratio,
    SimpleQuantity, Timing,
};
use tessera_codec::aggregate;

aggregate! {
    /// How a medication is or should be taken.
    #[derive(Default)]
    pub struct Dosage("Dosage") {
        element: Element => group(),
        sequence: Option<Integer> => optional("sequence"),
        text: Option<FhirString> => optional("text"),
        additional_instruction: Vec<CodeableConcept> => list("additionalInstruction"),
        patient_instruction: Option<FhirString> => optional("patientInstruction"),
        timing: Option<Timing> => optional("timing"),
        as_needed: Option<DosageAsNeeded> => choice(),
        site: Option<CodeableConcept> => optional("site"),
        route: Option<CodeableConcept> => optional("route"),
        method: Option<CodeableConcept> => optional("method"),
        dose: Option<DoseAndRateDose> => choice(),
        max_dose_per_period: Option<Ratio> => optional("maxDosePerPeriod"),
        max_dose_per_administration: Option<SimpleQuantity> => optional("maxDosePerAdministration"),
        max_dose_per_lifetime: Option<SimpleQuantity> => optional("maxDosePerLifetime"),
        rate: Option<DoseAndRateRate> => choice(),
    }
}

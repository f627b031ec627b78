//! STU3 Medication, with `package` in place of R4's `batch` and `amount`.

use super::resource::DomainResource;
use crate::r4::element::BackboneElement;
use crate::r4::{
    Attachment, Boolean, CodeOf, CodeableConcept, DateTime, FhirString, MedicationStatus, Ratio,
    Reference, SimpleQuantity,
};
use tessera_codec::{aggregate, choice_type};

choice_type! {
    pub enum MedicationItem("item") {
        "itemCodeableConcept" => CodeableConcept(CodeableConcept),
        "itemReference" => Reference(Reference),
    }
}

aggregate! {
    pub struct MedicationIngredient("Medication.ingredient") {
        backbone: BackboneElement => group(),
        item: MedicationItem => required_choice(),
        is_active: Option<Boolean> => optional("isActive"),
        amount: Option<Ratio> => optional("amount"),
    }
}

aggregate! {
    pub struct MedicationPackageContent("Medication.package.content") {
        backbone: BackboneElement => group(),
        item: MedicationItem => required_choice(),
        amount: Option<SimpleQuantity> => optional("amount"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct MedicationPackageBatch("Medication.package.batch") {
        backbone: BackboneElement => group(),
        lot_number: Option<FhirString> => optional("lotNumber"),
        expiration_date: Option<DateTime> => optional("expirationDate"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct MedicationPackage("Medication.package") {
        backbone: BackboneElement => group(),
        container: Option<CodeableConcept> => optional("container"),
        content: Vec<MedicationPackageContent> => list("content"),
        batch: Vec<MedicationPackageBatch> => list("batch"),
    }
}

aggregate! {
    /// A medication definition: product code, form, ingredients and packaging.
    #[derive(Default)]
    pub struct Medication(resource "Medication") {
        domain: DomainResource => group(),
        code: Option<CodeableConcept> => optional("code"),
        status: Option<CodeOf<MedicationStatus>> => optional("status"),
        is_brand: Option<Boolean> => optional("isBrand"),
        is_over_the_counter: Option<Boolean> => optional("isOverTheCounter"),
        manufacturer: Option<Reference> => optional("manufacturer"),
        form: Option<CodeableConcept> => optional("form"),
        ingredient: Vec<MedicationIngredient> => list("ingredient"),
        package: Option<MedicationPackage> => optional("package"),
        image: Vec<Attachment> => list("image"),
    }
}

impl Medication {
    pub fn active_ingredients(&self) -> impl Iterator<Item = &MedicationIngredient> {
        self.ingredient
            .iter()
            .filter(|i| i.is_active.as_ref().and_then(|flag| flag.value) == Some(true))
    }

    /// Lot numbers across every packaged batch.
    pub fn lot_numbers(&self) -> impl Iterator<Item = &str> {
        self.package
            .iter()
            .flat_map(|p| p.batch.iter())
            .filter_map(|b| b.lot_number.as_ref()?.value.as_deref())
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
    fn test_package() {
        let input = doc(json!({
            "resourceType": "Medication",
            "code": {"text": "Amoxicillin 250mg/5ml Suspension"},
            "isBrand": false,
            "package": {
                "container": {"text": "Bottle"},
                "content": [{
                    "itemReference": {"reference": "#amox"},
                    "amount": {"value": 100, "unit": "mL"}
                }],
                "batch": [{"lotNumber": "9494788", "expirationDate": "2017-05-22"}]
            }
        }));
        let medication: Medication = decode_as(input.clone(), &DecodeOptions::strict()).unwrap();
        assert_eq!(medication.lot_numbers().collect::<Vec<_>>(), vec!["9494788"]);
        assert_eq!(encode_as(&medication), input);
    }

    #[test]
    fn test_content_item_required() {
        let err = decode_as::<Medication>(
            doc(json!({
                "resourceType": "Medication",
                "package": {"content": [{"amount": {"value": 1}}]}
            })),
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingRequiredChoice("item"));
        assert_eq!(err.path.to_string(), "Medication.package.content[0]");
    }
}

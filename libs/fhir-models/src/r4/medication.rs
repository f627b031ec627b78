//! Medication resource.

use super::codes::MedicationStatus;
use super::datatypes::{CodeableConcept, Identifier, Ratio, Reference};
use super::element::BackboneElement;
use super::primitives::{Boolean, CodeOf, DateTime, FhirString};
use super::resource::DomainResource;
use tessera_codec::{aggregate, choice_type};

choice_type! {
    pub enum MedicationIngredientItem("item") {
        "itemCodeableConcept" => CodeableConcept(CodeableConcept),
        "itemReference" => Reference(Reference),
    }
}

aggregate! {
    pub struct MedicationIngredient("Medication.ingredient") {
        backbone: BackboneElement => group(),
        item: MedicationIngredientItem => required_choice(),
        is_active: Option<Boolean> => optional("isActive"),
        strength: Option<Ratio> => optional("strength"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct MedicationBatch("Medication.batch") {
        backbone: BackboneElement => group(),
        lot_number: Option<FhirString> => optional("lotNumber"),
        expiration_date: Option<DateTime> => optional("expirationDate"),
    }
}

aggregate! {
    /// A medication definition: product code, form and ingredients.
    #[derive(Default)]
    pub struct Medication(resource "Medication") {
        domain: DomainResource => group(),
        identifier: Vec<Identifier> => list("identifier"),
        code: Option<CodeableConcept> => optional("code"),
        status: Option<CodeOf<MedicationStatus>> => optional("status"),
        manufacturer: Option<Reference> => optional("manufacturer"),
        form: Option<CodeableConcept> => optional("form"),
        amount: Option<Ratio> => optional("amount"),
        ingredient: Vec<MedicationIngredient> => list("ingredient"),
        batch: Option<MedicationBatch> => optional("batch"),
    }
}

impl Medication {
    /// Ingredients flagged as active.
    pub fn active_ingredients(&self) -> impl Iterator<Item = &MedicationIngredient> {
        self.ingredient
            .iter()
            .filter(|i| i.is_active.as_ref().and_then(|flag| flag.value) == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_codec::{decode_as, DecodeErrorKind, DecodeOptions};
    use tessera_format::parse_document;

    #[test]
    fn test_ingredient_item() {
        let text = r#"{
            "resourceType": "Medication",
            "code": {"text": "Amoxicillin 250mg/5ml"},
            "ingredient": [
                {"itemReference": {"reference": "Substance/amox"}, "isActive": true},
                {"itemCodeableConcept": {"text": "water"}, "isActive": false}
            ],
            "batch": {"lotNumber": "9494788", "expirationDate": "2017-05-22"}
        }"#;
        let medication: Medication =
            decode_as(parse_document(text).unwrap(), &DecodeOptions::default()).unwrap();
        assert_eq!(medication.ingredient.len(), 2);
        assert_eq!(medication.active_ingredients().count(), 1);
        assert!(matches!(
            medication.ingredient[0].item,
            MedicationIngredientItem::Reference(_)
        ));
    }

    #[test]
    fn test_ingredient_item_required() {
        let text = r#"{"resourceType": "Medication", "ingredient": [{"isActive": true}]}"#;
        let err = decode_as::<Medication>(parse_document(text).unwrap(), &DecodeOptions::default())
            .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingRequiredChoice("item"));
        assert_eq!(err.path.to_string(), "Medication.ingredient[0]");
    }
}

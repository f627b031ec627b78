//! General-purpose FHIR R4 datatypes.

use super::codes::{
    AddressType, AddressUse, ContactPointSystem, ContactPointUse, DaysOfWeek, IdentifierUse,
    NameUse, NarrativeStatus, QuantityComparator, UnitsOfTime,
};
use super::element::{BackboneElement, Element};
use super::primitives::{
    Base64Binary, Boolean, Canonical, Code, CodeOf, DateTime, Decimal, FhirString, Id, Instant,
    Integer, Markdown, PositiveInt, Time, UnsignedInt, Uri, Url,
};
use tessera_codec::{aggregate, choice_type};

aggregate! {
    /// A reference to a code defined by a terminology system.
    #[derive(Default)]
    pub struct Coding("Coding") {
        element: Element => group(),
        system: Option<Uri> => optional("system"),
        version: Option<FhirString> => optional("version"),
        code: Option<Code> => optional("code"),
        display: Option<FhirString> => optional("display"),
        user_selected: Option<Boolean> => optional("userSelected"),
    }
}

impl Coding {
    pub fn new(system: &str, code: &str) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Self::default()
        }
    }
}

aggregate! {
    #[derive(Default)]
    pub struct CodeableConcept("CodeableConcept") {
        element: Element => group(),
        coding: Vec<Coding> => list("coding"),
        text: Option<FhirString> => optional("text"),
    }
}

impl CodeableConcept {
    /// Whether any coding matches `system` and `code`.
    pub fn has_coding(&self, system: &str, code: &str) -> bool {
        self.coding.iter().any(|c| {
            c.system.as_ref().and_then(|s| s.value.as_deref()) == Some(system)
                && c.code.as_ref().and_then(|v| v.value.as_deref()) == Some(code)
        })
    }
}

aggregate! {
    #[derive(Default)]
    pub struct Identifier("Identifier") {
        element: Element => group(),
        use_: Option<CodeOf<IdentifierUse>> => optional("use"),
        type_: Option<CodeableConcept> => optional("type"),
        system: Option<Uri> => optional("system"),
        value: Option<FhirString> => optional("value"),
        period: Option<Period> => optional("period"),
        /// Organization that issued the identifier.
        assigner: Option<Box<Reference>> => optional("assigner"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct Period("Period") {
        element: Element => group(),
        start: Option<DateTime> => optional("start"),
        end: Option<DateTime> => optional("end"),
    }
}

aggregate! {
    /// A measured amount. `value` keeps its written precision.
    #[derive(Default)]
    pub struct Quantity("Quantity") {
        element: Element => group(),
        value: Option<Decimal> => optional("value"),
        comparator: Option<CodeOf<QuantityComparator>> => optional("comparator"),
        unit: Option<FhirString> => optional("unit"),
        system: Option<Uri> => optional("system"),
        code: Option<Code> => optional("code"),
    }
}

pub type Age = Quantity;
pub type Count = Quantity;
pub type Distance = Quantity;
pub type Duration = Quantity;
pub type SimpleQuantity = Quantity;

aggregate! {
    #[derive(Default)]
    pub struct Money("Money") {
        element: Element => group(),
        value: Option<Decimal> => optional("value"),
        currency: Option<Code> => optional("currency"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct Range("Range") {
        element: Element => group(),
        low: Option<SimpleQuantity> => optional("low"),
        high: Option<SimpleQuantity> => optional("high"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct Ratio("Ratio") {
        element: Element => group(),
        numerator: Option<Quantity> => optional("numerator"),
        denominator: Option<Quantity> => optional("denominator"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct Reference("Reference") {
        element: Element => group(),
        /// Literal reference: relative, internal (`#id`) or absolute URL.
        reference: Option<FhirString> => optional("reference"),
        type_: Option<Uri> => optional("type"),
        identifier: Option<Identifier> => optional("identifier"),
        display: Option<FhirString> => optional("display"),
    }
}

impl Reference {
    pub fn to(reference: &str) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }

    /// The literal reference string, if any.
    pub fn reference_str(&self) -> Option<&str> {
        self.reference.as_ref().and_then(|r| r.value.as_deref())
    }
}

aggregate! {
    #[derive(Default)]
    pub struct HumanName("HumanName") {
        element: Element => group(),
        use_: Option<CodeOf<NameUse>> => optional("use"),
        text: Option<FhirString> => optional("text"),
        family: Option<FhirString> => optional("family"),
        given: Vec<FhirString> => list("given"),
        prefix: Vec<FhirString> => list("prefix"),
        suffix: Vec<FhirString> => list("suffix"),
        period: Option<Period> => optional("period"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct ContactPoint("ContactPoint") {
        element: Element => group(),
        system: Option<CodeOf<ContactPointSystem>> => optional("system"),
        value: Option<FhirString> => optional("value"),
        use_: Option<CodeOf<ContactPointUse>> => optional("use"),
        rank: Option<PositiveInt> => optional("rank"),
        period: Option<Period> => optional("period"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct Address("Address") {
        element: Element => group(),
        use_: Option<CodeOf<AddressUse>> => optional("use"),
        type_: Option<CodeOf<AddressType>> => optional("type"),
        text: Option<FhirString> => optional("text"),
        line: Vec<FhirString> => list("line"),
        city: Option<FhirString> => optional("city"),
        district: Option<FhirString> => optional("district"),
        state: Option<FhirString> => optional("state"),
        postal_code: Option<FhirString> => optional("postalCode"),
        country: Option<FhirString> => optional("country"),
        period: Option<Period> => optional("period"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct Attachment("Attachment") {
        element: Element => group(),
        content_type: Option<Code> => optional("contentType"),
        language: Option<Code> => optional("language"),
        data: Option<Base64Binary> => optional("data"),
        url: Option<Url> => optional("url"),
        size: Option<UnsignedInt> => optional("size"),
        hash: Option<Base64Binary> => optional("hash"),
        title: Option<FhirString> => optional("title"),
        creation: Option<DateTime> => optional("creation"),
    }
}

choice_type! {
    pub enum AnnotationAuthor("author") {
        "authorReference" => Reference(Reference),
        "authorString" => String(FhirString),
    }
}

aggregate! {
    pub struct Annotation("Annotation") {
        element: Element => group(),
        author: Option<AnnotationAuthor> => choice(),
        time: Option<DateTime> => optional("time"),
        text: Markdown => required("text"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct Meta("Meta") {
        element: Element => group(),
        version_id: Option<Id> => optional("versionId"),
        last_updated: Option<Instant> => optional("lastUpdated"),
        source: Option<Uri> => optional("source"),
        profile: Vec<Canonical> => list("profile"),
        security: Vec<Coding> => list("security"),
        tag: Vec<Coding> => list("tag"),
    }
}

aggregate! {
    /// Human-readable summary. `div` is XHTML carried as an opaque string.
    pub struct Narrative("Narrative") {
        element: Element => group(),
        status: CodeOf<NarrativeStatus> => required("status"),
        div: String => required_plain("div"),
    }
}

aggregate! {
    pub struct SampledData("SampledData") {
        element: Element => group(),
        origin: SimpleQuantity => required("origin"),
        period: Decimal => required("period"),
        factor: Option<Decimal> => optional("factor"),
        lower_limit: Option<Decimal> => optional("lowerLimit"),
        upper_limit: Option<Decimal> => optional("upperLimit"),
        dimensions: PositiveInt => required("dimensions"),
        data: Option<FhirString> => optional("data"),
    }
}

choice_type! {
    pub enum TimingRepeatBounds("bounds") {
        "boundsDuration" => Duration(Duration),
        "boundsRange" => Range(Range),
        "boundsPeriod" => Period(Period),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct TimingRepeat("Timing.repeat") {
        element: Element => group(),
        bounds: Option<TimingRepeatBounds> => choice(),
        count: Option<PositiveInt> => optional("count"),
        count_max: Option<PositiveInt> => optional("countMax"),
        duration: Option<Decimal> => optional("duration"),
        duration_max: Option<Decimal> => optional("durationMax"),
        duration_unit: Option<CodeOf<UnitsOfTime>> => optional("durationUnit"),
        frequency: Option<PositiveInt> => optional("frequency"),
        frequency_max: Option<PositiveInt> => optional("frequencyMax"),
        period: Option<Decimal> => optional("period"),
        period_max: Option<Decimal> => optional("periodMax"),
        period_unit: Option<CodeOf<UnitsOfTime>> => optional("periodUnit"),
        day_of_week: Vec<CodeOf<DaysOfWeek>> => list("dayOfWeek"),
        time_of_day: Vec<Time> => list("timeOfDay"),
        when: Vec<Code> => list("when"),
        offset: Option<UnsignedInt> => optional("offset"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct Timing("Timing") {
        backbone: BackboneElement => group(),
        event: Vec<DateTime> => list("event"),
        repeat: Option<TimingRepeat> => optional("repeat"),
        code: Option<CodeableConcept> => optional("code"),
    }
}

choice_type! {
    pub enum DosageAsNeeded("asNeeded") {
        "asNeededBoolean" => Boolean(Boolean),
        "asNeededCodeableConcept" => CodeableConcept(CodeableConcept),
    }
}

choice_type! {
    pub enum DoseAndRateDose("dose") {
        "doseRange" => Range(Range),
        "doseQuantity" => Quantity(SimpleQuantity),
    }
}

choice_type! {
    pub enum DoseAndRateRate("rate") {
        "rateRatio" => Ratio(Ratio),
        "rateRange" => Range(Range),
        "rateQuantity" => Quantity(SimpleQuantity),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct DosageDoseAndRate("Dosage.doseAndRate") {
        element: Element => group(),
        type_: Option<CodeableConcept> => optional("type"),
        dose: Option<DoseAndRateDose> => choice(),
        rate: Option<DoseAndRateRate> => choice(),
    }
}

aggregate! {
    /// How a medication is or should be taken.
    #[derive(Default)]
    pub struct Dosage("Dosage") {
        backbone: BackboneElement => group(),
        sequence: Option<Integer> => optional("sequence"),
        text: Option<FhirString> => optional("text"),
        additional_instruction: Vec<CodeableConcept> => list("additionalInstruction"),
        patient_instruction: Option<FhirString> => optional("patientInstruction"),
        timing: Option<Timing> => optional("timing"),
        as_needed: Option<DosageAsNeeded> => choice(),
        site: Option<CodeableConcept> => optional("site"),
        route: Option<CodeableConcept> => optional("route"),
        method: Option<CodeableConcept> => optional("method"),
        dose_and_rate: Vec<DosageDoseAndRate> => list("doseAndRate"),
        max_dose_per_period: Option<Ratio> => optional("maxDosePerPeriod"),
        max_dose_per_administration: Option<SimpleQuantity> => optional("maxDosePerAdministration"),
        max_dose_per_lifetime: Option<SimpleQuantity> => optional("maxDosePerLifetime"),
    }
}

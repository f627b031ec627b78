//! Element, BackboneElement and Extension.

use super::datatypes::{
    Address, Age, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, Count, Distance,
    Dosage, Duration, HumanName, Identifier, Meta, Money, Period, Quantity, Range, Ratio,
    Reference, SampledData, Timing,
};
use super::primitives::{
    Base64Binary, Boolean, Canonical, Code, Date, DateTime, Decimal, FhirString, Id, Instant,
    Integer, Markdown, Oid, PositiveInt, Time, UnsignedInt, Uri, Url, Uuid,
};
use tessera_codec::{
    aggregate, choice_type, FieldGroup, FieldReader, FieldWriter, RawElement, Result,
};

/// `id` and `extension`, carried by every datatype.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
}

impl FieldGroup for Element {
    fn read(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.plain("id")?,
            extension: reader.list("extension")?,
        })
    }

    fn write(&self, writer: &mut FieldWriter) {
        writer.plain("id", &self.id);
        writer.list("extension", &self.extension);
    }
}

/// Element plus `modifierExtension`, for elements nested inside resources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackboneElement {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    /// Extensions that change the meaning of the element. Never dropped.
    pub modifier_extension: Vec<Extension>,
}

impl FieldGroup for BackboneElement {
    fn read(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.plain("id")?,
            extension: reader.list("extension")?,
            modifier_extension: reader.list("modifierExtension")?,
        })
    }

    fn write(&self, writer: &mut FieldWriter) {
        writer.plain("id", &self.id);
        writer.list("extension", &self.extension);
        writer.list("modifierExtension", &self.modifier_extension);
    }
}

impl BackboneElement {
    /// Modifier extensions whose URL is not in `understood`.
    ///
    /// A consumer that gets a non-empty result must not interpret the element
    /// as if the modifiers were absent.
    pub fn unhandled_modifiers<'a>(&'a self, understood: &[&str]) -> Vec<&'a Extension> {
        unhandled_modifiers(&self.modifier_extension, understood)
    }
}

pub(crate) fn unhandled_modifiers<'a>(
    modifiers: &'a [Extension],
    understood: &[&str],
) -> Vec<&'a Extension> {
    modifiers
        .iter()
        .filter(|ext| !understood.contains(&ext.url.as_str()))
        .collect()
}

aggregate! {
    /// An extension: a URL naming its definition, plus either a value or
    /// nested extensions.
    #[derive(Default)]
    pub struct Extension("Extension") {
        id: Option<String> => plain("id"),
        extension: Vec<Extension> => list("extension"),
        url: String => required_plain("url"),
        value: Option<ExtensionValue> => choice(),
    }
}

impl Extension {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: ExtensionValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    /// Nested extensions with the given URL.
    pub fn nested<'a>(&'a self, url: &'a str) -> impl Iterator<Item = &'a Extension> + 'a {
        self.extension.iter().filter(move |ext| ext.url == url)
    }
}

choice_type! {
    /// `Extension.value[x]`: every type R4 allows.
    ///
    /// Complex values are boxed to keep the recursion through
    /// `Extension.extension` cheap on the stack. Metadata types with no model
    /// here are held as [`RawElement`].
    pub enum ExtensionValue("value") {
        "valueBase64Binary" => Base64Binary(Base64Binary),
        "valueBoolean" => Boolean(Boolean),
        "valueCanonical" => Canonical(Canonical),
        "valueCode" => Code(Code),
        "valueDate" => Date(Date),
        "valueDateTime" => DateTime(DateTime),
        "valueDecimal" => Decimal(Decimal),
        "valueId" => Id(Id),
        "valueInstant" => Instant(Instant),
        "valueInteger" => Integer(Integer),
        "valueMarkdown" => Markdown(Markdown),
        "valueOid" => Oid(Oid),
        "valuePositiveInt" => PositiveInt(PositiveInt),
        "valueString" => String(FhirString),
        "valueTime" => Time(Time),
        "valueUnsignedInt" => UnsignedInt(UnsignedInt),
        "valueUri" => Uri(Uri),
        "valueUrl" => Url(Url),
        "valueUuid" => Uuid(Uuid),
        "valueAddress" => Address(Box<Address>),
        "valueAge" => Age(Box<Age>),
        "valueAnnotation" => Annotation(Box<Annotation>),
        "valueAttachment" => Attachment(Box<Attachment>),
        "valueCodeableConcept" => CodeableConcept(Box<CodeableConcept>),
        "valueCoding" => Coding(Box<Coding>),
        "valueContactPoint" => ContactPoint(Box<ContactPoint>),
        "valueCount" => Count(Box<Count>),
        "valueDistance" => Distance(Box<Distance>),
        "valueDuration" => Duration(Box<Duration>),
        "valueHumanName" => HumanName(Box<HumanName>),
        "valueIdentifier" => Identifier(Box<Identifier>),
        "valueMoney" => Money(Box<Money>),
        "valuePeriod" => Period(Box<Period>),
        "valueQuantity" => Quantity(Box<Quantity>),
        "valueRange" => Range(Box<Range>),
        "valueRatio" => Ratio(Box<Ratio>),
        "valueReference" => Reference(Box<Reference>),
        "valueSampledData" => SampledData(Box<SampledData>),
        "valueSignature" => Signature(RawElement),
        "valueTiming" => Timing(Box<Timing>),
        "valueContactDetail" => ContactDetail(RawElement),
        "valueContributor" => Contributor(RawElement),
        "valueDataRequirement" => DataRequirement(RawElement),
        "valueExpression" => Expression(RawElement),
        "valueParameterDefinition" => ParameterDefinition(RawElement),
        "valueRelatedArtifact" => RelatedArtifact(RawElement),
        "valueTriggerDefinition" => TriggerDefinition(RawElement),
        "valueUsageContext" => UsageContext(RawElement),
        "valueDosage" => Dosage(Box<Dosage>),
        "valueMeta" => Meta(Box<Meta>),
    }
}

impl ExtensionValue {
    /// Whether the value is one of the types held as [`RawElement`].
    pub fn is_raw(&self) -> bool {
        matches!(
            self,
            ExtensionValue::Signature(_)
                | ExtensionValue::ContactDetail(_)
                | ExtensionValue::Contributor(_)
                | ExtensionValue::DataRequirement(_)
                | ExtensionValue::Expression(_)
                | ExtensionValue::ParameterDefinition(_)
                | ExtensionValue::RelatedArtifact(_)
                | ExtensionValue::TriggerDefinition(_)
                | ExtensionValue::UsageContext(_)
        )
    }
}

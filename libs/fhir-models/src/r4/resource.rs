//! Resource base groups and the polymorphic resource union.

use super::datatypes::{Meta, Narrative};
use super::element::{unhandled_modifiers, Extension};
use super::primitives::{Code, Uri};
use super::{
    AllergyIntolerance, Bundle, Condition, DocumentReference, Medication, MedicationStatement,
    Observation, OperationOutcome, Patient,
};
use phf::phf_map;
use tessera_codec::{
    Aggregate, DecodeError, FieldGroup, FieldReader, FieldWriter, PolymorphicResource,
    RegistryEntry, ResourceShape, Result,
};

/// Fields every resource has.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceBase {
    pub id: Option<String>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
}

impl FieldGroup for ResourceBase {
    fn read(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.plain("id")?,
            meta: reader.optional("meta")?,
            implicit_rules: reader.optional("implicitRules")?,
            language: reader.optional("language")?,
        })
    }

    fn write(&self, writer: &mut FieldWriter) {
        writer.plain("id", &self.id);
        writer.optional("meta", &self.meta);
        writer.optional("implicitRules", &self.implicit_rules);
        writer.optional("language", &self.language);
    }
}

/// Fields of every resource except Bundle, Binary and Parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainResource {
    pub resource: ResourceBase,
    pub text: Option<Narrative>,
    /// Resources owned by this one, referenced as `#id`.
    pub contained: Vec<ResourceValue>,
    pub extension: Vec<Extension>,
    pub modifier_extension: Vec<Extension>,
}

impl FieldGroup for DomainResource {
    fn read(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            resource: reader.group()?,
            text: reader.optional("text")?,
            contained: reader.resource_list("contained")?,
            extension: reader.list("extension")?,
            modifier_extension: reader.list("modifierExtension")?,
        })
    }

    fn write(&self, writer: &mut FieldWriter) {
        writer.group(&self.resource);
        writer.optional("text", &self.text);
        writer.resource_list("contained", &self.contained);
        writer.list("extension", &self.extension);
        writer.list("modifierExtension", &self.modifier_extension);
    }
}

impl DomainResource {
    pub fn unhandled_modifiers<'a>(&'a self, understood: &[&str]) -> Vec<&'a Extension> {
        unhandled_modifiers(&self.modifier_extension, understood)
    }

    /// Find a contained resource by its local id (without the leading `#`).
    pub fn contained_by_id(&self, id: &str) -> Option<&ResourceValue> {
        self.contained.iter().find(|r| r.id() == Some(id))
    }
}

/// Any registered resource. The variant determines the `resourceType`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceValue {
    AllergyIntolerance(Box<AllergyIntolerance>),
    Bundle(Box<Bundle>),
    Condition(Box<Condition>),
    DocumentReference(Box<DocumentReference>),
    Medication(Box<Medication>),
    MedicationStatement(Box<MedicationStatement>),
    Observation(Box<Observation>),
    OperationOutcome(Box<OperationOutcome>),
    Patient(Box<Patient>),
}

macro_rules! resource_variants {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for ResourceValue {
                fn from(resource: $variant) -> Self {
                    ResourceValue::$variant(Box::new(resource))
                }
            }
        )+

        impl ResourceValue {
            pub fn resource_type(&self) -> &'static str {
                match self {
                    $( ResourceValue::$variant(_) => <$variant as ResourceShape>::RESOURCE_TYPE, )+
                }
            }

            fn encode_variant(&self, writer: &mut FieldWriter) {
                match self {
                    $( ResourceValue::$variant(resource) => resource.encode_fields(writer), )+
                }
            }
        }
    };
}

resource_variants!(
    AllergyIntolerance,
    Bundle,
    Condition,
    DocumentReference,
    Medication,
    MedicationStatement,
    Observation,
    OperationOutcome,
    Patient,
);

impl ResourceValue {
    pub fn base(&self) -> &ResourceBase {
        match self {
            ResourceValue::Bundle(bundle) => &bundle.base,
            ResourceValue::AllergyIntolerance(r) => &r.domain.resource,
            ResourceValue::Condition(r) => &r.domain.resource,
            ResourceValue::DocumentReference(r) => &r.domain.resource,
            ResourceValue::Medication(r) => &r.domain.resource,
            ResourceValue::MedicationStatement(r) => &r.domain.resource,
            ResourceValue::Observation(r) => &r.domain.resource,
            ResourceValue::OperationOutcome(r) => &r.domain.resource,
            ResourceValue::Patient(r) => &r.domain.resource,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.base().id.as_deref()
    }

    /// The DomainResource fields, absent for Bundle.
    pub fn domain(&self) -> Option<&DomainResource> {
        match self {
            ResourceValue::AllergyIntolerance(r) => Some(&r.domain),
            ResourceValue::Bundle(_) => None,
            ResourceValue::Condition(r) => Some(&r.domain),
            ResourceValue::DocumentReference(r) => Some(&r.domain),
            ResourceValue::Medication(r) => Some(&r.domain),
            ResourceValue::MedicationStatement(r) => Some(&r.domain),
            ResourceValue::Observation(r) => Some(&r.domain),
            ResourceValue::OperationOutcome(r) => Some(&r.domain),
            ResourceValue::Patient(r) => Some(&r.domain),
        }
    }
}

fn decode_variant<T>(
    reader: &mut FieldReader<'_>,
) -> std::result::Result<ResourceValue, DecodeError>
where
    T: ResourceShape,
    ResourceValue: From<T>,
{
    T::decode_fields(reader).map(ResourceValue::from)
}

/// `resourceType` to decoder. Built at compile time; a duplicate key does not
/// compile.
static REGISTRY: phf::Map<&'static str, RegistryEntry<ResourceValue>> = phf_map! {
    "AllergyIntolerance" => RegistryEntry {
        resource_type: "AllergyIntolerance",
        decode: decode_variant::<AllergyIntolerance>,
    },
    "Bundle" => RegistryEntry {
        resource_type: "Bundle",
        decode: decode_variant::<Bundle>,
    },
    "Condition" => RegistryEntry {
        resource_type: "Condition",
        decode: decode_variant::<Condition>,
    },
    "DocumentReference" => RegistryEntry {
        resource_type: "DocumentReference",
        decode: decode_variant::<DocumentReference>,
    },
    "Medication" => RegistryEntry {
        resource_type: "Medication",
        decode: decode_variant::<Medication>,
    },
    "MedicationStatement" => RegistryEntry {
        resource_type: "MedicationStatement",
        decode: decode_variant::<MedicationStatement>,
    },
    "Observation" => RegistryEntry {
        resource_type: "Observation",
        decode: decode_variant::<Observation>,
    },
    "OperationOutcome" => RegistryEntry {
        resource_type: "OperationOutcome",
        decode: decode_variant::<OperationOutcome>,
    },
    "Patient" => RegistryEntry {
        resource_type: "Patient",
        decode: decode_variant::<Patient>,
    },
};

impl PolymorphicResource for ResourceValue {
    fn lookup(resource_type: &str) -> Option<&'static RegistryEntry<Self>> {
        REGISTRY.get(resource_type)
    }

    fn resource_type(&self) -> &'static str {
        ResourceValue::resource_type(self)
    }

    fn encode_fields(&self, writer: &mut FieldWriter) {
        self.encode_variant(writer)
    }
}

/// Registered resource types, sorted.
pub fn registered_resource_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = REGISTRY.keys().copied().collect();
    types.sort_unstable();
    types
}

pub fn is_registered(resource_type: &str) -> bool {
    REGISTRY.contains_key(resource_type)
}

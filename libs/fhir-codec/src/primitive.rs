//! Primitive value layer.
//!
//! In FHIR JSON a primitive is split across two keys: `name` holds the scalar
//! and `_name` holds its element metadata (`id`, `extension`). [`Primitive`]
//! is the merged form; the split happens in the reader and writer.

use crate::aggregate::UnknownFields;
use crate::datetime::{FhirDate, FhirDateTime, FhirInstant, FhirTime};
use crate::decimal::PreciseDecimal;
use serde_json::{Number, Value};
use std::fmt;
use std::num::NonZeroU32;
use tessera_format::exact_number;

/// A scalar type that can sit in the value half of a primitive.
pub trait PrimitiveKind: Sized + Clone + PartialEq + fmt::Debug {
    /// FHIR type name, e.g. `dateTime`.
    const FHIR_TYPE: &'static str;

    /// What a malformed value is reported as expecting.
    const EXPECTED: &'static str = Self::FHIR_TYPE;

    /// Read the scalar from its JSON form. JSON types are not coerced: the
    /// string `"5"` is not an integer.
    fn from_json(value: &Value) -> Option<Self>;

    fn to_json(&self) -> Value;
}

/// A primitive value merged with its element metadata.
///
/// `value` may be absent while metadata is present (`"_status": {...}`
/// with no `status`), which FHIR uses for data-absent-reason extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive<V, E> {
    pub value: Option<V>,
    pub id: Option<String>,
    pub extension: Vec<E>,
    /// Unrecognised keys found in the `_name` companion.
    pub unknown: UnknownFields,
}

impl<V, E> Default for Primitive<V, E> {
    fn default() -> Self {
        Self {
            value: None,
            id: None,
            extension: Vec::new(),
            unknown: UnknownFields::new(),
        }
    }
}

impl<V, E> Primitive<V, E> {
    pub fn new(value: V) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// A primitive with no value, to be annotated with metadata.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_extension(mut self, extension: E) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Whether a `_name` companion is needed to encode this value.
    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || !self.extension.is_empty() || !self.unknown.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && !self.has_metadata()
    }
}

impl<V, E> From<V> for Primitive<V, E> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<E> From<&str> for Primitive<String, E> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// Short rendering of an offending JSON value for error messages.
pub(crate) fn describe(value: &Value) -> String {
    const LIMIT: usize = 64;
    let text = value.to_string();
    if text.len() <= LIMIT {
        return text;
    }
    let mut end = LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

impl PrimitiveKind for bool {
    const FHIR_TYPE: &'static str = "boolean";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl PrimitiveKind for i32 {
    const FHIR_TYPE: &'static str = "integer";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|n| i32::try_from(n).ok())
    }

    fn to_json(&self) -> Value {
        Value::Number(Number::from(*self))
    }
}

/// `unsignedInt`: 0 to 2^31-1.
impl PrimitiveKind for u32 {
    const FHIR_TYPE: &'static str = "unsignedInt";

    fn from_json(value: &Value) -> Option<Self> {
        value
            .as_u64()
            .filter(|n| *n <= i32::MAX as u64)
            .and_then(|n| u32::try_from(n).ok())
    }

    fn to_json(&self) -> Value {
        Value::Number(Number::from(*self))
    }
}

/// `positiveInt`: 1 to 2^31-1.
impl PrimitiveKind for NonZeroU32 {
    const FHIR_TYPE: &'static str = "positiveInt";

    fn from_json(value: &Value) -> Option<Self> {
        u32::from_json(value).and_then(NonZeroU32::new)
    }

    fn to_json(&self) -> Value {
        Value::Number(Number::from(self.get()))
    }
}

impl PrimitiveKind for String {
    const FHIR_TYPE: &'static str = "string";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl PrimitiveKind for PreciseDecimal {
    const FHIR_TYPE: &'static str = "decimal";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => PreciseDecimal::parse(n.as_str()),
            _ => None,
        }
    }

    fn to_json(&self) -> Value {
        exact_number(self.as_str())
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(self.as_str().to_string()))
    }
}

macro_rules! lexical_primitive {
    ($($ty:ty => $fhir:literal),+ $(,)?) => {
        $(
            impl PrimitiveKind for $ty {
                const FHIR_TYPE: &'static str = $fhir;

                fn from_json(value: &Value) -> Option<Self> {
                    value.as_str().and_then(<$ty>::parse)
                }

                fn to_json(&self) -> Value {
                    Value::String(self.as_str().to_string())
                }
            }
        )+
    };
}

lexical_primitive! {
    FhirDate => "date",
    FhirDateTime => "dateTime",
    FhirInstant => "instant",
    FhirTime => "time",
}

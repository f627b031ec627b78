//! Declarative builders for model types.

/// Declare an aggregate: a struct with one public field per FHIR element plus
/// an `unknown` map, and its [`Aggregate`](crate::Aggregate) impl.
///
/// Each field names the [`FieldReader`](crate::FieldReader) /
/// [`FieldWriter`](crate::FieldWriter) method pair that handles it. Fields are
/// written back in declaration order, so declare them in FHIR element order.
///
/// ```
/// use tessera_codec::{aggregate, Primitive};
///
/// aggregate! {
///     pub struct Note("Note") {
///         author: Option<String> => plain("author"),
///         text: Primitive<String, Note> => required("text"),
///         replies: Vec<Note> => list("reply"),
///     }
/// }
/// ```
///
/// `struct Name(resource "Name")` additionally implements
/// [`ResourceShape`](crate::ResourceShape).
#[macro_export]
macro_rules! aggregate {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident(resource $type_name:literal) { $($body:tt)* }
    ) => {
        $crate::aggregate! {
            $(#[$meta])*
            $vis struct $name($type_name) { $($body)* }
        }

        impl $crate::ResourceShape for $name {
            const RESOURCE_TYPE: &'static str = $type_name;
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($type_name:literal) {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $method:ident($($arg:literal)?)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
            /// Fields found in the document that this type does not model.
            pub unknown: $crate::UnknownFields,
        }

        impl $crate::Aggregate for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn decode_fields(reader: &mut $crate::FieldReader<'_>) -> $crate::Result<Self> {
                Ok(Self {
                    $( $field: reader.$method($($arg)?)?, )*
                    unknown: reader.finish()?,
                })
            }

            fn encode_fields(&self, writer: &mut $crate::FieldWriter) {
                $( writer.$method($($arg,)? &self.$field); )*
                writer.unknown(&self.unknown);
            }
        }
    };
}

/// Declare a choice family as an enum with one variant per allowed type.
///
/// ```
/// use tessera_codec::{aggregate, choice_type, Primitive};
///
/// aggregate! {
///     pub struct Ext("Extension") {
///         url: String => required_plain("url"),
///     }
/// }
///
/// choice_type! {
///     pub enum Deceased("deceased") {
///         "deceasedBoolean" => Boolean(Primitive<bool, Ext>),
///         "deceasedDateTime" => DateTime(Primitive<tessera_codec::FhirDateTime, Ext>),
///     }
/// }
/// ```
#[macro_export]
macro_rules! choice_type {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($family:literal) {
            $( $field:literal => $variant:ident($ty:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $variant($ty), )+
        }

        impl $crate::ChoiceFamily for $name {
            const FAMILY: &'static str = $family;
            const CANDIDATES: &'static [&'static str] = &[$($field),+];

            fn is_candidate_present(fields: &$crate::Document, candidate: &str) -> bool {
                match candidate {
                    $( $field => <$ty as $crate::FieldValue>::is_present(fields, $field), )+
                    _ => false,
                }
            }

            fn decode_candidate(
                reader: &mut $crate::FieldReader<'_>,
                candidate: &str,
            ) -> $crate::Result<Option<Self>> {
                match candidate {
                    $(
                        $field => $crate::take_candidate::<$ty, Self>(
                            reader,
                            $field,
                            $name::$variant,
                        ),
                    )+
                    _ => Ok(None),
                }
            }

            fn encode(&self, writer: &mut $crate::FieldWriter) {
                match self {
                    $( $name::$variant(value) => $crate::FieldValue::put(value, writer, $field), )+
                }
            }

            fn field_name(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => $field, )+
                }
            }
        }
    };
}

/// Declare a FHIR code system as a Rust enum usable as a primitive value.
///
/// Unknown codes fail to decode with `MalformedPrimitive`.
#[macro_export]
macro_rules! code_system {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($system:literal) {
            $( $(#[$variant_meta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            pub const SYSTEM: &'static str = $system;

            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl $crate::PrimitiveKind for $name {
            const FHIR_TYPE: &'static str = "code";
            const EXPECTED: &'static str = concat!("code from ", $system);

            fn from_json(value: &$crate::Value) -> Option<Self> {
                value.as_str().and_then(Self::from_code)
            }

            fn to_json(&self) -> $crate::Value {
                $crate::Value::String(self.code().to_string())
            }
        }
    };
}

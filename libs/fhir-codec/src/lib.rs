#![forbid(unsafe_code)]
//! Generic encode/decode engine for FHIR JSON.
//!
//! This crate knows nothing about individual resources. It provides the
//! machinery a model crate plugs its types into:
//!
//! - [`Aggregate`] + [`FieldReader`]/[`FieldWriter`]: structural codec for
//!   complex types, declared with [`aggregate!`].
//! - [`Primitive`] + [`PrimitiveKind`]: scalar values merged with their
//!   `_field` metadata.
//! - [`ChoiceFamily`]: `[x]` fields with the at-most-one rule, declared with
//!   [`choice_type!`]. Candidates without a model are held as [`RawElement`].
//! - [`PolymorphicResource`]: resolution of `resourceType`-tagged documents
//!   through a static registry.
//!
//! Unknown fields follow [`DecodeOptions::unknown_fields`]; by default they are
//! preserved and written back, so decode followed by encode reproduces the
//! input document.

mod aggregate;
mod choice;
mod context;
mod datetime;
mod decimal;
mod error;
mod macros;
mod options;
mod path;
mod primitive;
mod raw;
mod reader;
mod registry;
mod writer;

pub use aggregate::{
    decode_value, encode_value, Aggregate, FieldGroup, FieldValue, UnknownFields,
};
pub use choice::{take_candidate, ChoiceFamily};
pub use context::DecodeContext;
pub use datetime::{FhirDate, FhirDateTime, FhirInstant, FhirTime, Precision};
pub use decimal::PreciseDecimal;
pub use error::{DecodeError, DecodeErrorKind, Result};
pub use options::{DecodeOptions, UnknownFieldPolicy, UnknownResourcePolicy, DEFAULT_MAX_DEPTH};
pub use path::{FieldPath, PathSegment};
pub use primitive::{Primitive, PrimitiveKind};
pub use raw::RawElement;
pub use reader::FieldReader;
pub use registry::{
    decode_as, decode_document, encode_as, encode_document, DecodeFn, PolymorphicResource,
    RegistryEntry, ResourceShape,
};
pub use tessera_format::{Document, Value};
pub use writer::FieldWriter;

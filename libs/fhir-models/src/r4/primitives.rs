//! FHIR R4 primitive types, each paired with the R4 [`Extension`].
//!
//! String-based types (`code`, `uri`, `id`, ...) share `String` as their
//! value type and are only checked for being JSON strings.

use super::element::Extension;
use std::num::NonZeroU32;
use tessera_codec::{FhirDate, FhirDateTime, FhirInstant, FhirTime, PreciseDecimal, Primitive};

pub type Boolean = Primitive<bool, Extension>;
pub type Integer = Primitive<i32, Extension>;
pub type UnsignedInt = Primitive<u32, Extension>;
pub type PositiveInt = Primitive<NonZeroU32, Extension>;
pub type Decimal = Primitive<PreciseDecimal, Extension>;

pub type FhirString = Primitive<String, Extension>;
pub type Code = Primitive<String, Extension>;
pub type Uri = Primitive<String, Extension>;
pub type Url = Primitive<String, Extension>;
pub type Canonical = Primitive<String, Extension>;
pub type Id = Primitive<String, Extension>;
pub type Oid = Primitive<String, Extension>;
pub type Uuid = Primitive<String, Extension>;
pub type Markdown = Primitive<String, Extension>;
pub type Base64Binary = Primitive<String, Extension>;

pub type Date = Primitive<FhirDate, Extension>;
pub type DateTime = Primitive<FhirDateTime, Extension>;
pub type Instant = Primitive<FhirInstant, Extension>;
pub type Time = Primitive<FhirTime, Extension>;

/// A `code` bound to a required value set, modeled as a Rust enum.
pub type CodeOf<T> = Primitive<T, Extension>;

//! FHIR data models
//!
//! Strongly-typed Rust structures for FHIR R4 and STU3 resources, decoded
//! from and encoded to FHIR JSON through the `tessera-codec` engine.
//!
//! # Module Organization
//!
//! - `r4`: primitives, datatypes, code systems and resources of FHIR R4
//! - `stu3`: the same resource set for FHIR STU3, with its own union,
//!   registry and entry points
//! - [`decode_resource`] / [`encode_resource`]: polymorphic R4 entry points
//!   keyed on `resourceType`
//!
//! # Design Philosophy
//!
//! - **Closed catalogue**: every registered resource is a [`ResourceValue`]
//!   variant, so matching on it is exhaustive
//! - **Lossless**: decimals keep their digits, primitive extensions keep their
//!   `_field` companions, unknown fields are preserved by default
//! - **Located errors**: a failure carries the path of the offending field
//!
//! # Example
//!
//! ```rust
//! use tessera_models::{from_json_str, r4::AdministrativeGender, ResourceValue};
//!
//! let resource = from_json_str(r#"{
//!     "resourceType": "Patient",
//!     "id": "example",
//!     "gender": "female",
//!     "_gender": {"extension": [{"url": "http://example.org/verified", "valueBoolean": true}]}
//! }"#).unwrap();
//!
//! match &resource {
//!     ResourceValue::Patient(patient) => {
//!         assert_eq!(patient.gender(), Some(AdministrativeGender::Female));
//!         assert_eq!(patient.gender.as_ref().unwrap().extension.len(), 1);
//!     }
//!     other => panic!("unexpected {}", other.resource_type()),
//! }
//! ```

mod api;
pub mod error;
pub mod r4;
pub mod stu3;

pub use api::{
    decode_bundle_isolating_entries, decode_resource, decode_resource_with, encode_resource,
    from_json_str, from_json_str_with, to_json_string, to_json_string_pretty, EntryFailure,
    IsolatedBundle,
};
pub use error::{Error, Result};
pub use r4::{is_registered, registered_resource_types, ResourceValue};
pub use tessera_codec::{
    DecodeError, DecodeErrorKind, DecodeOptions, UnknownFieldPolicy, UnknownResourcePolicy,
};

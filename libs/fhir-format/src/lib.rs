//! FHIR JSON document boundary.
//!
//! The codec never looks at text. It works on a [`Document`]: an ordered map of
//! field names to JSON values. This crate owns the conversion between UTF-8
//! JSON and that map, plus the conventions of the FHIR JSON representation
//! that every layer above has to agree on:
//! - The root object names its shape through `resourceType`.
//! - Primitive metadata (`id`, `extension`) travels in a `_field` companion key.
//! - Decimals keep their exact lexical form (`1.10` is not `1.1`).
//!
//! Numbers are parsed with serde_json's `arbitrary_precision` feature and
//! then respelled from the source text, so a [`Value::Number`] writes back
//! exactly the literal it was read from (`1.10`, `1.0e2`, `1E5`).

mod number;

use serde_json::Map;
use std::io::Read;
use thiserror::Error;

pub use number::exact_number;
pub use serde_json::{Number, Value};

/// An ordered mapping from field names to values.
pub type Document = Map<String, Value>;

/// Key holding the discriminator of a resource document.
pub const RESOURCE_TYPE_KEY: &str = "resourceType";

const COMPANION_PREFIX: char = '_';

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected a JSON object for the resource, found {0}")]
    ExpectedObject(&'static str),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;

/// Parse FHIR JSON text into a [`Document`].
pub fn parse_document(input: &str) -> Result<Document> {
    let mut value: Value = serde_json::from_str(input)?;
    number::restore_literals(input, &mut value);
    into_document(value)
}

/// Parse FHIR JSON bytes into a [`Document`].
pub fn parse_document_slice(input: &[u8]) -> Result<Document> {
    let mut value: Value = serde_json::from_slice(input)?;
    if let Ok(text) = std::str::from_utf8(input) {
        number::restore_literals(text, &mut value);
    }
    into_document(value)
}

/// Parse FHIR JSON from a reader into a [`Document`].
///
/// The input is read to the end first.
pub fn parse_document_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    parse_document_slice(&input)
}

/// Unwrap a JSON value that must be an object.
pub fn into_document(value: Value) -> Result<Document> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(FormatError::ExpectedObject(json_kind(&other))),
    }
}

/// Serialize a document as compact JSON.
pub fn to_json_string(document: &Document) -> Result<String> {
    Ok(serde_json::to_string(document)?)
}

/// Serialize a document as indented JSON.
pub fn to_json_string_pretty(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// The `resourceType` of a document, if it has a string one.
pub fn resource_type(document: &Document) -> Option<&str> {
    document.get(RESOURCE_TYPE_KEY).and_then(Value::as_str)
}

/// Name of the companion key carrying `id`/`extension` for a primitive field.
///
/// `birthDate` pairs with `_birthDate`.
pub fn companion_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 1);
    key.push(COMPANION_PREFIX);
    key.push_str(name);
    key
}

/// The primitive field a companion key belongs to, if `key` is one.
pub fn companion_base(key: &str) -> Option<&str> {
    key.strip_prefix(COMPANION_PREFIX).filter(|base| !base.is_empty())
}

/// Short description of the JSON type of a value, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Drop the parts of a value that carry no information in FHIR JSON:
/// object members that are `null` or empty arrays.
///
/// Nulls inside arrays are kept since they align primitive values with their
/// `_field` companions.
pub fn strip_empty(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, item) in map {
                match item {
                    Value::Null => {}
                    Value::Array(items) if items.is_empty() => {}
                    other => {
                        out.insert(key.clone(), strip_empty(other));
                    }
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(strip_empty).collect()),
        other => other.clone(),
    }
}

/// Compare two documents the way the round-trip law does: member order,
/// absent vs. empty lists and explicit nulls are not significant.
pub fn structurally_equivalent(left: &Value, right: &Value) -> bool {
    strip_empty(left) == strip_empty(right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_rejects_non_objects() {
        let err = parse_document("[1, 2]").unwrap_err();
        assert!(matches!(err, FormatError::ExpectedObject("array")));

        let err = parse_document("{").unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));
    }

    #[test]
    fn decimals_keep_their_digits() {
        let doc = parse_document(
            r#"{"resourceType":"Observation","value":1.10,"big":12345678901234567890.000}"#,
        )
        .unwrap();
        let text = to_json_string(&doc).unwrap();
        assert!(text.contains("1.10"));
        assert!(text.contains("12345678901234567890.000"));
    }

    #[test]
    fn exponents_keep_their_spelling() {
        let input = r#"{"resourceType":"Observation","a":1.0e2,"b":1E5,"c":2.5e-3}"#;
        let from_str = to_json_string(&parse_document(input).unwrap()).unwrap();
        assert_eq!(from_str, input);

        let from_slice = to_json_string(&parse_document_slice(input.as_bytes()).unwrap()).unwrap();
        assert_eq!(from_slice, input);

        let from_reader =
            to_json_string(&parse_document_reader(input.as_bytes()).unwrap()).unwrap();
        assert_eq!(from_reader, input);
    }

    #[test]
    fn member_order_is_preserved() {
        let doc = parse_document(r#"{"resourceType":"Patient","zeta":1,"alpha":2}"#).unwrap();
        let keys: Vec<_> = doc.keys().cloned().collect();
        assert_eq!(keys, vec!["resourceType", "zeta", "alpha"]);
    }

    #[test]
    fn companion_keys() {
        assert_eq!(companion_key("birthDate"), "_birthDate");
        assert_eq!(companion_base("_birthDate"), Some("birthDate"));
        assert_eq!(companion_base("birthDate"), None);
        assert_eq!(companion_base("_"), None);
    }

    #[test]
    fn resource_type_lookup() {
        let doc = parse_document(r#"{"resourceType":"Bundle"}"#).unwrap();
        assert_eq!(resource_type(&doc), Some("Bundle"));

        let doc = parse_document(r#"{"resourceType":5}"#).unwrap();
        assert_eq!(resource_type(&doc), None);
    }

    #[test]
    fn structural_equivalence_ignores_empty_members() {
        let left = json!({"a": [], "b": null, "c": {"d": [null, 1]}});
        let right = json!({"c": {"d": [null, 1]}});
        assert!(structurally_equivalent(&left, &right));

        let different = json!({"c": {"d": [1]}});
        assert!(!structurally_equivalent(&left, &different));
    }
}

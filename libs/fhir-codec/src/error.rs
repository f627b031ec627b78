//! Decode failures.

use crate::path::FieldPath;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecodeError>;

/// A decode failure, located at the field where it happened.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {path}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    /// Path from the document root to the failing field.
    pub path: FieldPath,
    /// The shape being decoded when the failure happened.
    pub type_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("unknown resource type '{0}'")]
    UnknownResourceType(String),

    #[error("missing required field '{0}'")]
    MissingRequiredField(String),

    #[error("missing required choice '{0}[x]'")]
    MissingRequiredChoice(&'static str),

    #[error("more than one value for choice '{family}[x]': {}", .present.join(", "))]
    AmbiguousChoice {
        family: &'static str,
        present: Vec<String>,
    },

    #[error("malformed {expected} value: {found}")]
    MalformedPrimitive {
        expected: &'static str,
        found: String,
    },

    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("nesting deeper than {0} levels")]
    DepthExceeded(usize),

    #[error("unrecognized field '{0}'")]
    UnrecognizedField(String),
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind, path: FieldPath, type_name: &'static str) -> Self {
        Self {
            kind,
            path,
            type_name,
        }
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Whether a caller may drop the failing embedded resource and carry on.
    ///
    /// Only an unknown discriminator qualifies; everything else means the
    /// document is wrong.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::UnknownResourceType(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let mut path = FieldPath::new("Bundle");
        path.push_field("entry");
        path.push_index(0);
        path.push_field("resource");
        let err = DecodeError::new(
            DecodeErrorKind::MissingRequiredField("status".into()),
            path,
            "Observation",
        );
        assert_eq!(
            err.to_string(),
            "missing required field 'status' at Bundle.entry[0].resource"
        );
    }

    #[test]
    fn test_ambiguous_choice_lists_fields() {
        let kind = DecodeErrorKind::AmbiguousChoice {
            family: "onset",
            present: vec!["onsetDateTime".into(), "onsetAge".into()],
        };
        assert_eq!(
            kind.to_string(),
            "more than one value for choice 'onset[x]': onsetDateTime, onsetAge"
        );
    }

    #[test]
    fn test_only_unknown_types_are_recoverable() {
        let unknown = DecodeError::new(
            DecodeErrorKind::UnknownResourceType("Foo".into()),
            FieldPath::new("Bundle"),
            "Bundle",
        );
        let depth = DecodeError::new(
            DecodeErrorKind::DepthExceeded(64),
            FieldPath::new("Bundle"),
            "Bundle",
        );
        assert!(unknown.is_recoverable());
        assert!(!depth.is_recoverable());
    }
}

//! Decode configuration.

use serde::{Deserialize, Serialize};

/// Default bound on nesting of aggregates, extensions and contained resources.
///
/// A debug build decoding at this depth stays well inside a 2 MiB thread
/// stack. Real documents rarely go past a dozen levels.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// What to do with document fields no modeled shape recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownFieldPolicy {
    /// Keep them on the decoded value and write them back on encode.
    #[default]
    Preserve,
    /// Fail with `UnrecognizedField`.
    Reject,
    /// Drop them (logged at warn level).
    Ignore,
}

/// What to do with an embedded resource whose `resourceType` is not registered.
///
/// Applies to embedded slots (bundle entries, contained resources) only; the
/// document root must always be a known type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownResourcePolicy {
    #[default]
    Error,
    /// Treat the slot as absent.
    Skip,
}

/// Options for a single decode pass.
///
/// Deserializable so hosts can embed it in their own configuration:
///
/// ```
/// use tessera_codec::{DecodeOptions, UnknownFieldPolicy};
///
/// let options: DecodeOptions =
///     serde_json::from_str(r#"{"unknownFields": "reject"}"#).unwrap();
/// assert_eq!(options.unknown_fields, UnknownFieldPolicy::Reject);
/// assert_eq!(options.max_depth, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecodeOptions {
    pub max_depth: usize,
    pub unknown_fields: UnknownFieldPolicy,
    pub unknown_resources: UnknownResourcePolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            unknown_fields: UnknownFieldPolicy::default(),
            unknown_resources: UnknownResourcePolicy::default(),
        }
    }
}

impl DecodeOptions {
    /// Reject anything not modeled.
    pub fn strict() -> Self {
        Self::default().with_unknown_fields(UnknownFieldPolicy::Reject)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn with_unknown_resources(mut self, policy: UnknownResourcePolicy) -> Self {
        self.unknown_resources = policy;
        self
    }
}

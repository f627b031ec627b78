//! Entry points: JSON text or documents in, typed resources out.

use crate::error::Result;
use crate::r4::{Bundle, BundleEntry, ResourceValue};
use tessera_codec::{
    decode_as, decode_document, decode_value, encode_document, Aggregate, DecodeContext,
    DecodeError, DecodeOptions, PolymorphicResource, ResourceShape,
};
use tessera_format::{Document, Value};

/// A release's resource union, as seen by the entry points.
pub(crate) trait Catalogue: PolymorphicResource {
    const RELEASE: &'static str;

    fn id(&self) -> Option<&str>;
}

impl Catalogue for ResourceValue {
    const RELEASE: &'static str = "R4";

    fn id(&self) -> Option<&str> {
        ResourceValue::id(self)
    }
}

impl Catalogue for crate::stu3::ResourceValue {
    const RELEASE: &'static str = "STU3";

    fn id(&self) -> Option<&str> {
        crate::stu3::ResourceValue::id(self)
    }
}

pub(crate) fn decode_in<R: Catalogue>(
    document: Document,
    options: &DecodeOptions,
) -> std::result::Result<R, DecodeError> {
    let resource: R = decode_document(document, options)?;
    tracing::debug!(
        release = R::RELEASE,
        resource_type = resource.resource_type(),
        id = resource.id().unwrap_or_default(),
        "decoded resource"
    );
    Ok(resource)
}

pub(crate) fn encode_in<R: Catalogue>(resource: &R) -> Document {
    tracing::debug!(
        release = R::RELEASE,
        resource_type = resource.resource_type(),
        "encoding resource"
    );
    encode_document(resource)
}

pub(crate) fn parse_in<R: Catalogue>(input: &str, options: &DecodeOptions) -> Result<R> {
    let document = tessera_format::parse_document(input)?;
    Ok(decode_in(document, options)?)
}

pub(crate) fn print_in<R: Catalogue>(resource: &R, pretty: bool) -> Result<String> {
    let document = encode_in(resource);
    if pretty {
        Ok(tessera_format::to_json_string_pretty(&document)?)
    } else {
        Ok(tessera_format::to_json_string(&document)?)
    }
}

/// Decode any registered resource with the default options.
pub fn decode_resource(document: Document) -> std::result::Result<ResourceValue, DecodeError> {
    decode_resource_with(document, &DecodeOptions::default())
}

pub fn decode_resource_with(
    document: Document,
    options: &DecodeOptions,
) -> std::result::Result<ResourceValue, DecodeError> {
    decode_in(document, options)
}

pub fn encode_resource(resource: &ResourceValue) -> Document {
    encode_in(resource)
}

/// Parse FHIR JSON text into a resource.
pub fn from_json_str(input: &str) -> Result<ResourceValue> {
    from_json_str_with(input, &DecodeOptions::default())
}

pub fn from_json_str_with(input: &str, options: &DecodeOptions) -> Result<ResourceValue> {
    parse_in(input, options)
}

pub fn to_json_string(resource: &ResourceValue) -> Result<String> {
    print_in(resource, false)
}

pub fn to_json_string_pretty(resource: &ResourceValue) -> Result<String> {
    print_in(resource, true)
}

/// An entry that failed to decode, by position in the original `entry` array.
#[derive(Debug)]
pub struct EntryFailure {
    pub index: usize,
    pub error: DecodeError,
}

/// A Bundle decoded entry by entry.
#[derive(Debug)]
pub struct IsolatedBundle {
    /// The bundle with every entry that decoded, in document order.
    pub bundle: Bundle,
    pub failures: Vec<EntryFailure>,
}

impl IsolatedBundle {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Decode a Bundle, keeping going when individual entries fail.
///
/// Everything outside `entry` is decoded as usual and still fails the whole
/// call. Each entry is decoded on its own; failures are collected with their
/// index and the entry is left out of the result. Error paths are the same as
/// a whole-bundle decode would report (`Bundle.entry[3].resource.status`).
pub fn decode_bundle_isolating_entries(
    mut document: Document,
    options: &DecodeOptions,
) -> std::result::Result<IsolatedBundle, DecodeError> {
    let entries = match document.shift_remove("entry") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            // Not a list: put it back and let the strict decode report it.
            document.insert("entry".to_string(), other);
            Vec::new()
        }
        None => Vec::new(),
    };

    let mut bundle: Bundle = decode_as(document, options)?;
    let mut failures = Vec::new();
    for (index, item) in entries.into_iter().enumerate() {
        if item.is_null() {
            continue;
        }
        match decode_entry(item, index, options) {
            Ok(entry) => bundle.entry.push(entry),
            Err(error) => failures.push(EntryFailure { index, error }),
        }
    }

    if !failures.is_empty() {
        tracing::debug!(
            decoded = bundle.entry.len(),
            failed = failures.len(),
            "isolated failing bundle entries"
        );
    }
    Ok(IsolatedBundle { bundle, failures })
}

fn decode_entry(
    item: Value,
    index: usize,
    options: &DecodeOptions,
) -> std::result::Result<BundleEntry, DecodeError> {
    let mut ctx = DecodeContext::new(*options);
    ctx.set_root(Bundle::RESOURCE_TYPE);
    ctx.descend(Bundle::TYPE_NAME, |ctx| {
        ctx.in_field("entry", |ctx| ctx.in_index(index, |ctx| decode_value(item, ctx)))
    })
}

//! Resource type registry and polymorphic resolution.
//!
//! A resource document names its own shape through `resourceType`. The
//! concrete resource union (`ResourceValue` in the model crate) implements
//! [`PolymorphicResource`] with a static lookup table from discriminator to
//! decode function; encoding goes through the union's own `match`, so the tag
//! written is always the one the variant belongs to.

use crate::aggregate::Aggregate;
use crate::context::DecodeContext;
use crate::error::{DecodeErrorKind, Result};
use crate::options::{DecodeOptions, UnknownResourcePolicy};
use crate::reader::FieldReader;
use crate::writer::FieldWriter;
use serde_json::Value;
use tessera_format::{json_kind, Document, RESOURCE_TYPE_KEY};

/// Decode function signature stored in registry tables.
pub type DecodeFn<R> = fn(&mut FieldReader<'_>) -> Result<R>;

pub struct RegistryEntry<R: 'static> {
    /// Canonical discriminator.
    pub resource_type: &'static str,
    /// Decodes the remaining fields once the discriminator is removed.
    pub decode: DecodeFn<R>,
}

/// A closed union of resource shapes addressed by `resourceType`.
pub trait PolymorphicResource: Sized + 'static {
    fn lookup(resource_type: &str) -> Option<&'static RegistryEntry<Self>>;

    /// Discriminator of this value's variant.
    fn resource_type(&self) -> &'static str;

    fn encode_fields(&self, writer: &mut FieldWriter);
}

/// An aggregate that is a resource of one fixed type.
pub trait ResourceShape: Aggregate {
    const RESOURCE_TYPE: &'static str;
}

fn read_tag(document: &mut Document, ctx: &mut DecodeContext) -> Result<String> {
    match document.shift_remove(RESOURCE_TYPE_KEY) {
        Some(Value::String(tag)) => Ok(tag),
        None | Some(Value::Null) => Err(ctx.error(DecodeErrorKind::MissingRequiredField(
            RESOURCE_TYPE_KEY.to_string(),
        ))),
        Some(other) => Err(ctx.field_error(
            RESOURCE_TYPE_KEY,
            DecodeErrorKind::MalformedDocument(format!(
                "resourceType must be a string, found {}",
                json_kind(&other)
            )),
        )),
    }
}

fn decode_entry<R: 'static>(
    entry: &'static RegistryEntry<R>,
    document: Document,
    ctx: &mut DecodeContext,
) -> Result<R> {
    tracing::trace!(
        resource_type = entry.resource_type,
        path = %ctx.path(),
        "resolved resource type"
    );
    ctx.descend(entry.resource_type, |ctx| {
        let mut reader = FieldReader::new(entry.resource_type, document, ctx);
        (entry.decode)(&mut reader)
    })
}

/// Decode a document whose root may be any registered resource.
///
/// An unknown `resourceType` at the root is always an error, whatever the
/// [`UnknownResourcePolicy`].
pub fn decode_document<R: PolymorphicResource>(
    mut document: Document,
    options: &DecodeOptions,
) -> Result<R> {
    let mut ctx = DecodeContext::new(*options);
    let tag = read_tag(&mut document, &mut ctx)?;
    match R::lookup(&tag) {
        Some(entry) => {
            ctx.set_root(entry.resource_type);
            decode_entry(entry, document, &mut ctx)
        }
        None => Err(ctx.error(DecodeErrorKind::UnknownResourceType(tag))),
    }
}

/// Decode an embedded resource slot. Returns `None` when the type is unknown
/// and the policy says to skip it.
pub(crate) fn decode_embedded<R: PolymorphicResource>(
    value: Value,
    ctx: &mut DecodeContext,
) -> Result<Option<R>> {
    let mut document = match value {
        Value::Object(document) => document,
        other => {
            return Err(ctx.error(DecodeErrorKind::MalformedDocument(format!(
                "expected a resource object, found {}",
                json_kind(&other)
            ))))
        }
    };
    let tag = read_tag(&mut document, ctx)?;
    match R::lookup(&tag) {
        Some(entry) => decode_entry(entry, document, ctx).map(Some),
        None if ctx.options().unknown_resources == UnknownResourcePolicy::Skip => {
            tracing::warn!(
                resource_type = %tag,
                path = %ctx.path(),
                "skipping resource of unknown type"
            );
            Ok(None)
        }
        None => Err(ctx.error(DecodeErrorKind::UnknownResourceType(tag))),
    }
}

/// Encode any registered resource, `resourceType` first.
pub fn encode_document<R: PolymorphicResource>(resource: &R) -> Document {
    let mut writer = FieldWriter::new();
    writer.insert(
        RESOURCE_TYPE_KEY,
        Value::String(resource.resource_type().to_string()),
    );
    resource.encode_fields(&mut writer);
    writer.finish()
}

pub(crate) fn encode_embedded<R: PolymorphicResource>(resource: &R) -> Value {
    Value::Object(encode_document(resource))
}

/// Decode a document that must be of resource type `T`.
pub fn decode_as<T: ResourceShape>(mut document: Document, options: &DecodeOptions) -> Result<T> {
    let mut ctx = DecodeContext::new(*options);
    let tag = read_tag(&mut document, &mut ctx)?;
    if tag != T::RESOURCE_TYPE {
        return Err(ctx.field_error(
            RESOURCE_TYPE_KEY,
            DecodeErrorKind::MalformedDocument(format!(
                "expected resourceType '{}', found '{}'",
                T::RESOURCE_TYPE,
                tag
            )),
        ));
    }
    ctx.set_root(T::RESOURCE_TYPE);
    ctx.descend(T::TYPE_NAME, |ctx| {
        let mut reader = FieldReader::new(T::TYPE_NAME, document, ctx);
        T::decode_fields(&mut reader)
    })
}

pub fn encode_as<T: ResourceShape>(resource: &T) -> Document {
    let mut writer = FieldWriter::new();
    writer.insert(RESOURCE_TYPE_KEY, Value::String(T::RESOURCE_TYPE.to_string()));
    resource.encode_fields(&mut writer);
    writer.finish()
}

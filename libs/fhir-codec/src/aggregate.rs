//! Structural aggregate codec.
//!
//! Every complex datatype, backbone element and resource implements
//! [`Aggregate`]: a fixed set of named fields read through a [`FieldReader`]
//! and written through a [`FieldWriter`]. [`FieldValue`] is what lets a field
//! hold either another aggregate or a [`Primitive`].

use crate::context::DecodeContext;
use crate::error::{DecodeErrorKind, Result};
use crate::primitive::{describe, Primitive, PrimitiveKind};
use crate::reader::FieldReader;
use crate::writer::FieldWriter;
use serde_json::{Map, Value};
use tessera_format::{companion_key, json_kind, Document};

/// Fields present in a document that no modeled shape recognised, kept in
/// document order.
pub type UnknownFields = Map<String, Value>;

pub trait Aggregate: Sized {
    /// Name used in error reports, e.g. `Patient.contact`.
    const TYPE_NAME: &'static str;

    fn decode_fields(reader: &mut FieldReader<'_>) -> Result<Self>;

    /// Write modeled fields in FHIR element order, then preserved unknown ones.
    fn encode_fields(&self, writer: &mut FieldWriter);
}

impl<T: Aggregate> Aggregate for Box<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn decode_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        T::decode_fields(reader).map(Box::new)
    }

    fn encode_fields(&self, writer: &mut FieldWriter) {
        (**self).encode_fields(writer)
    }
}

/// A set of fields shared by several aggregates and read from the same object
/// (`id`/`extension` of every element, the resource base fields, ...).
pub trait FieldGroup: Sized {
    fn read(reader: &mut FieldReader<'_>) -> Result<Self>;
    fn write(&self, writer: &mut FieldWriter);
}

/// Anything that can occupy a named field: an aggregate or a primitive.
pub trait FieldValue: Sized {
    /// Remove the field (and its companion, for primitives) and decode it.
    fn take(reader: &mut FieldReader<'_>, name: &str) -> Result<Option<Self>>;

    fn take_list(reader: &mut FieldReader<'_>, name: &str) -> Result<Vec<Self>>;

    /// Whether the document holds a non-null value for the field.
    fn is_present(fields: &Document, name: &str) -> bool;

    fn put(&self, writer: &mut FieldWriter, name: &str);

    fn put_list(items: &[Self], writer: &mut FieldWriter, name: &str);
}

/// Decode one aggregate from a JSON value.
pub fn decode_value<T: Aggregate>(value: Value, ctx: &mut DecodeContext) -> Result<T> {
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(ctx.error(DecodeErrorKind::MalformedDocument(format!(
                "expected an object for {}, found {}",
                T::TYPE_NAME,
                json_kind(&other)
            ))))
        }
    };
    ctx.descend(T::TYPE_NAME, |ctx| {
        let mut reader = FieldReader::new(T::TYPE_NAME, fields, ctx);
        T::decode_fields(&mut reader)
    })
}

pub fn encode_value<T: Aggregate>(value: &T) -> Value {
    let mut writer = FieldWriter::new();
    value.encode_fields(&mut writer);
    Value::Object(writer.finish())
}

pub(crate) fn expect_array(
    value: Option<Value>,
    name: &str,
    ctx: &DecodeContext,
) -> Result<Vec<Value>> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(ctx.error(DecodeErrorKind::MalformedDocument(format!(
            "expected an array for '{}', found {}",
            name,
            json_kind(&other)
        )))),
    }
}

pub(crate) fn present(fields: &Document, key: &str) -> bool {
    fields.get(key).map_or(false, |v| !v.is_null())
}

impl<T: Aggregate> FieldValue for T {
    fn take(reader: &mut FieldReader<'_>, name: &str) -> Result<Option<Self>> {
        match reader.take_raw(name) {
            None => Ok(None),
            Some(value) => reader
                .ctx()
                .in_field(name, |ctx| decode_value(value, ctx))
                .map(Some),
        }
    }

    fn take_list(reader: &mut FieldReader<'_>, name: &str) -> Result<Vec<Self>> {
        let raw = reader.take_raw(name);
        let ctx = reader.ctx();
        ctx.in_field(name, |ctx| {
            let items = expect_array(raw, name, ctx)?;
            // No iterator adapters: each one adds frames per nesting level.
            let mut decoded = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                decoded.push(ctx.in_index(index, |ctx| decode_value(item, ctx))?);
            }
            Ok(decoded)
        })
    }

    fn is_present(fields: &Document, name: &str) -> bool {
        present(fields, name)
    }

    fn put(&self, writer: &mut FieldWriter, name: &str) {
        writer.insert(name, encode_value(self));
    }

    fn put_list(items: &[Self], writer: &mut FieldWriter, name: &str) {
        if items.is_empty() {
            return;
        }
        writer.insert(name, Value::Array(items.iter().map(encode_value).collect()));
    }
}

/// Merge a value and its companion into one primitive.
fn decode_primitive<V, E>(
    value: Option<Value>,
    companion: Option<Value>,
    ctx: &mut DecodeContext,
) -> Result<Primitive<V, E>>
where
    V: PrimitiveKind,
    E: Aggregate,
{
    let value = match value {
        None => None,
        Some(raw) => match V::from_json(&raw) {
            Some(v) => Some(v),
            None => {
                return Err(ctx.error(DecodeErrorKind::MalformedPrimitive {
                    expected: V::EXPECTED,
                    found: describe(&raw),
                }))
            }
        },
    };
    let mut primitive = Primitive {
        value,
        ..Primitive::default()
    };
    match companion {
        None => {}
        Some(Value::Object(fields)) => {
            ctx.descend(V::FHIR_TYPE, |ctx| {
                let mut reader = FieldReader::new(V::FHIR_TYPE, fields, ctx);
                primitive.id = reader.plain("id")?;
                primitive.extension = reader.list("extension")?;
                primitive.unknown = reader.finish()?;
                Ok(())
            })?;
        }
        Some(other) => {
            return Err(ctx.error(DecodeErrorKind::MalformedDocument(format!(
                "expected an object for primitive metadata, found {}",
                json_kind(&other)
            ))))
        }
    }
    Ok(primitive)
}

fn companion_json<V, E: Aggregate>(primitive: &Primitive<V, E>) -> Value {
    let mut writer = FieldWriter::new();
    writer.plain("id", &primitive.id);
    writer.list("extension", &primitive.extension);
    writer.unknown(&primitive.unknown);
    Value::Object(writer.finish())
}

impl<V, E> FieldValue for Primitive<V, E>
where
    V: PrimitiveKind,
    E: Aggregate,
{
    fn take(reader: &mut FieldReader<'_>, name: &str) -> Result<Option<Self>> {
        let value = reader.take_raw(name);
        let companion = reader.take_raw(&companion_key(name));
        if value.is_none() && companion.is_none() {
            return Ok(None);
        }
        reader
            .ctx()
            .in_field(name, |ctx| decode_primitive(value, companion, ctx))
            .map(Some)
    }

    /// `name[i]` pairs with `_name[i]`; either side may hold `null`.
    fn take_list(reader: &mut FieldReader<'_>, name: &str) -> Result<Vec<Self>> {
        let raw_values = reader.take_raw(name);
        let raw_companions = reader.take_raw(&companion_key(name));
        let ctx = reader.ctx();
        ctx.in_field(name, |ctx| {
            let values = expect_array(raw_values, name, ctx)?;
            let companions = expect_array(raw_companions, name, ctx)?;
            if !values.is_empty() && !companions.is_empty() && values.len() != companions.len() {
                return Err(ctx.error(DecodeErrorKind::MalformedDocument(format!(
                    "'{}' has {} values but '_{}' has {} entries",
                    name,
                    values.len(),
                    name,
                    companions.len()
                ))));
            }
            let len = values.len().max(companions.len());
            let mut values = values.into_iter();
            let mut companions = companions.into_iter();
            let mut items = Vec::with_capacity(len);
            for index in 0..len {
                let value = values.next().filter(|v| !v.is_null());
                let companion = companions.next().filter(|v| !v.is_null());
                items.push(ctx.in_index(index, |ctx| decode_primitive(value, companion, ctx))?);
            }
            Ok(items)
        })
    }

    fn is_present(fields: &Document, name: &str) -> bool {
        present(fields, name) || present(fields, &companion_key(name))
    }

    fn put(&self, writer: &mut FieldWriter, name: &str) {
        if let Some(value) = &self.value {
            writer.insert(name, value.to_json());
        }
        if self.has_metadata() {
            writer.insert(companion_key(name), companion_json(self));
        }
    }

    fn put_list(items: &[Self], writer: &mut FieldWriter, name: &str) {
        if items.iter().any(|item| item.value.is_some()) {
            let values = items
                .iter()
                .map(|item| item.value.as_ref().map_or(Value::Null, V::to_json))
                .collect();
            writer.insert(name, Value::Array(values));
        }
        if items.iter().any(Primitive::has_metadata) {
            let companions = items
                .iter()
                .map(|item| {
                    if item.has_metadata() {
                        companion_json(item)
                    } else {
                        Value::Null
                    }
                })
                .collect();
            writer.insert(companion_key(name), Value::Array(companions));
        }
    }
}

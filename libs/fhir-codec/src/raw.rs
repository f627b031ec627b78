//! Complex values carried as plain JSON.

use crate::aggregate::{expect_array, present, FieldValue};
use crate::context::DecodeContext;
use crate::error::{DecodeErrorKind, Result};
use crate::reader::FieldReader;
use crate::writer::FieldWriter;
use serde_json::Value;
use tessera_format::{json_kind, Document};

/// A complex datatype the catalogue knows by name but does not model.
///
/// It still takes part in choice resolution: `valueString` next to
/// `valueSignature` is ambiguous even though no `Signature` shape exists. The
/// object is kept as read and written back unchanged; unknown-field policies
/// do not look inside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawElement(pub Document);

impl RawElement {
    pub fn fields(&self) -> &Document {
        &self.0
    }

    pub fn into_fields(self) -> Document {
        self.0
    }
}

impl From<Document> for RawElement {
    fn from(fields: Document) -> Self {
        Self(fields)
    }
}

fn expect_object(value: Value, ctx: &DecodeContext) -> Result<RawElement> {
    match value {
        Value::Object(fields) => Ok(RawElement(fields)),
        other => Err(ctx.error(DecodeErrorKind::MalformedDocument(format!(
            "expected an object, found {}",
            json_kind(&other)
        )))),
    }
}

impl FieldValue for RawElement {
    fn take(reader: &mut FieldReader<'_>, name: &str) -> Result<Option<Self>> {
        match reader.take_raw(name) {
            None => Ok(None),
            Some(value) => reader
                .ctx()
                .in_field(name, |ctx| expect_object(value, ctx))
                .map(Some),
        }
    }

    fn take_list(reader: &mut FieldReader<'_>, name: &str) -> Result<Vec<Self>> {
        let raw = reader.take_raw(name);
        reader.ctx().in_field(name, |ctx| {
            let items = expect_array(raw, name, ctx)?;
            let mut elements = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                elements.push(ctx.in_index(index, |ctx| expect_object(item, ctx))?);
            }
            Ok(elements)
        })
    }

    fn is_present(fields: &Document, name: &str) -> bool {
        present(fields, name)
    }

    fn put(&self, writer: &mut FieldWriter, name: &str) {
        writer.insert(name, Value::Object(self.0.clone()));
    }

    fn put_list(items: &[Self], writer: &mut FieldWriter, name: &str) {
        if items.is_empty() {
            return;
        }
        let values = items.iter().map(|item| Value::Object(item.0.clone())).collect();
        writer.insert(name, Value::Array(values));
    }
}

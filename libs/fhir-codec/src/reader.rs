use crate::aggregate::{expect_array, FieldGroup, FieldValue, UnknownFields};
use crate::choice::ChoiceFamily;
use crate::context::DecodeContext;
use crate::error::{DecodeError, DecodeErrorKind, Result};
use crate::options::UnknownFieldPolicy;
use crate::primitive::{describe, PrimitiveKind};
use crate::registry::{decode_embedded, PolymorphicResource};
use serde_json::Value;
use tessera_format::Document;

/// Reads the fields of one JSON object into an aggregate.
///
/// Every read removes the key it consumed, so whatever is left when
/// [`finish`](Self::finish) runs is, by construction, unrecognised. Decoding
/// is therefore insensitive to key order. Explicit `null` reads as absent.
pub struct FieldReader<'a> {
    type_name: &'static str,
    fields: Document,
    ctx: &'a mut DecodeContext,
}

impl<'a> FieldReader<'a> {
    pub fn new(type_name: &'static str, fields: Document, ctx: &'a mut DecodeContext) -> Self {
        Self {
            type_name,
            fields,
            ctx,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn ctx(&mut self) -> &mut DecodeContext {
        &mut *self.ctx
    }

    /// Whether the object still holds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub(crate) fn take_raw(&mut self, name: &str) -> Option<Value> {
        match self.fields.shift_remove(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn missing(&self, name: &str) -> DecodeError {
        self.ctx
            .error(DecodeErrorKind::MissingRequiredField(name.to_string()))
    }

    pub fn optional<T: FieldValue>(&mut self, name: &str) -> Result<Option<T>> {
        T::take(self, name)
    }

    pub fn required<T: FieldValue>(&mut self, name: &str) -> Result<T> {
        match T::take(self, name)? {
            Some(value) => Ok(value),
            None => Err(self.missing(name)),
        }
    }

    pub fn list<T: FieldValue>(&mut self, name: &str) -> Result<Vec<T>> {
        T::take_list(self, name)
    }

    /// A list with cardinality `1..*`: absent and empty are both errors.
    pub fn required_list<T: FieldValue>(&mut self, name: &str) -> Result<Vec<T>> {
        let items = T::take_list(self, name)?;
        if items.is_empty() {
            return Err(self.missing(name));
        }
        Ok(items)
    }

    /// A scalar without `_name` companion (element ids, `Extension.url`,
    /// narrative `div`).
    pub fn plain<V: PrimitiveKind>(&mut self, name: &str) -> Result<Option<V>> {
        let Some(raw) = self.take_raw(name) else {
            return Ok(None);
        };
        match V::from_json(&raw) {
            Some(value) => Ok(Some(value)),
            None => Err(self.ctx.field_error(
                name,
                DecodeErrorKind::MalformedPrimitive {
                    expected: V::EXPECTED,
                    found: describe(&raw),
                },
            )),
        }
    }

    pub fn required_plain<V: PrimitiveKind>(&mut self, name: &str) -> Result<V> {
        match self.plain(name)? {
            Some(value) => Ok(value),
            None => Err(self.missing(name)),
        }
    }

    /// Resolve a choice family: at most one candidate may be present.
    pub fn choice<C: ChoiceFamily>(&mut self) -> Result<Option<C>> {
        let present: Vec<&'static str> = C::CANDIDATES
            .iter()
            .copied()
            .filter(|candidate| C::is_candidate_present(&self.fields, candidate))
            .collect();
        match present.as_slice() {
            [] => Ok(None),
            [candidate] => C::decode_candidate(self, candidate),
            _ => Err(self.ctx.error(DecodeErrorKind::AmbiguousChoice {
                family: C::FAMILY,
                present: present.iter().map(|name| name.to_string()).collect(),
            })),
        }
    }

    pub fn required_choice<C: ChoiceFamily>(&mut self) -> Result<C> {
        match self.choice()? {
            Some(value) => Ok(value),
            None => Err(self
                .ctx
                .error(DecodeErrorKind::MissingRequiredChoice(C::FAMILY))),
        }
    }

    /// A slot holding any registered resource, resolved by its `resourceType`.
    pub fn resource<R: PolymorphicResource>(&mut self, name: &str) -> Result<Option<R>> {
        let Some(raw) = self.take_raw(name) else {
            return Ok(None);
        };
        self.ctx.in_field(name, |ctx| decode_embedded(raw, ctx))
    }

    /// A list of resources. Entries skipped under
    /// [`UnknownResourcePolicy::Skip`](crate::UnknownResourcePolicy::Skip)
    /// are left out.
    pub fn resource_list<R: PolymorphicResource>(&mut self, name: &str) -> Result<Vec<R>> {
        let raw = self.take_raw(name);
        self.ctx.in_field(name, |ctx| {
            let items = expect_array(raw, name, ctx)?;
            let mut resources = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                if let Some(resource) = ctx.in_index(index, |ctx| decode_embedded(item, ctx))? {
                    resources.push(resource);
                }
            }
            Ok(resources)
        })
    }

    pub fn group<G: FieldGroup>(&mut self) -> Result<G> {
        G::read(self)
    }

    /// Apply the unknown-field policy to everything not read so far.
    pub fn finish(&mut self) -> Result<UnknownFields> {
        let leftover = std::mem::take(&mut self.fields);
        let policy = self.ctx.options().unknown_fields;
        let mut unknown = UnknownFields::new();
        for (key, value) in leftover {
            if value.is_null() {
                continue;
            }
            match policy {
                UnknownFieldPolicy::Preserve => {
                    unknown.insert(key, value);
                }
                UnknownFieldPolicy::Reject => {
                    return Err(self.ctx.error(DecodeErrorKind::UnrecognizedField(key)));
                }
                UnknownFieldPolicy::Ignore => {
                    tracing::warn!(
                        type_name = self.type_name,
                        path = %self.ctx.path(),
                        field = %key,
                        "dropping unrecognized field"
                    );
                }
            }
        }
        if !unknown.is_empty() {
            tracing::debug!(
                type_name = self.type_name,
                count = unknown.len(),
                "preserving unrecognized fields"
            );
        }
        Ok(unknown)
    }
}

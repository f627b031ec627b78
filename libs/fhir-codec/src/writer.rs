use crate::aggregate::{FieldGroup, FieldValue, UnknownFields};
use crate::choice::ChoiceFamily;
use crate::primitive::PrimitiveKind;
use crate::registry::{encode_embedded, PolymorphicResource};
use serde_json::Value;
use tessera_format::Document;

/// Collects the fields of one JSON object, in the order they are written.
///
/// Absent values and empty lists are never written.
#[derive(Debug, Default)]
pub struct FieldWriter {
    fields: Document,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn optional<T: FieldValue>(&mut self, name: &str, value: &Option<T>) {
        if let Some(value) = value {
            value.put(self, name);
        }
    }

    pub fn required<T: FieldValue>(&mut self, name: &str, value: &T) {
        value.put(self, name);
    }

    pub fn list<T: FieldValue>(&mut self, name: &str, items: &[T]) {
        T::put_list(items, self, name);
    }

    pub fn required_list<T: FieldValue>(&mut self, name: &str, items: &[T]) {
        T::put_list(items, self, name);
    }

    pub fn plain<V: PrimitiveKind>(&mut self, name: &str, value: &Option<V>) {
        if let Some(value) = value {
            self.insert(name, value.to_json());
        }
    }

    pub fn required_plain<V: PrimitiveKind>(&mut self, name: &str, value: &V) {
        self.insert(name, value.to_json());
    }

    pub fn choice<C: ChoiceFamily>(&mut self, value: &Option<C>) {
        if let Some(value) = value {
            value.encode(self);
        }
    }

    pub fn required_choice<C: ChoiceFamily>(&mut self, value: &C) {
        value.encode(self);
    }

    pub fn resource<R: PolymorphicResource>(&mut self, name: &str, value: &Option<R>) {
        if let Some(resource) = value {
            self.insert(name, encode_embedded(resource));
        }
    }

    pub fn resource_list<R: PolymorphicResource>(&mut self, name: &str, items: &[R]) {
        if items.is_empty() {
            return;
        }
        self.insert(name, Value::Array(items.iter().map(encode_embedded).collect()));
    }

    pub fn group<G: FieldGroup>(&mut self, group: &G) {
        group.write(self);
    }

    /// Re-emit preserved fields. Keys already written by the model win.
    pub fn unknown(&mut self, fields: &UnknownFields) {
        for (key, value) in fields {
            if !self.fields.contains_key(key) {
                self.fields.insert(key.clone(), value.clone());
            }
        }
    }

    pub fn finish(self) -> Document {
        self.fields
    }
}

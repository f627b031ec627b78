//! A miniature model used to exercise the engine without the full catalogue.

#![allow(dead_code)]

use tessera_codec::{
    aggregate, choice_type, code_system, Aggregate, FieldReader, FieldWriter, PolymorphicResource,
    PreciseDecimal, Primitive, RegistryEntry, Result,
};

aggregate! {
    pub struct Ext("Extension") {
        id: Option<String> => plain("id"),
        extension: Vec<Ext> => list("extension"),
        url: String => required_plain("url"),
        value: Option<ExtValue> => choice(),
    }
}

choice_type! {
    pub enum ExtValue("value") {
        "valueString" => String(Primitive<String, Ext>),
        "valueBoolean" => Boolean(Primitive<bool, Ext>),
        "valueCoding" => Coding(Coding),
    }
}

aggregate! {
    pub struct Coding("Coding") {
        system: Option<Primitive<String, Ext>> => optional("system"),
        code: Option<Primitive<String, Ext>> => optional("code"),
    }
}

code_system! {
    pub enum NoteStatus("http://example.org/note-status") {
        Draft = "draft",
        Final = "final",
    }
}

choice_type! {
    pub enum Subject("subject") {
        "subjectString" => String(Primitive<String, Ext>),
        "subjectCoding" => Coding(Coding),
    }
}

aggregate! {
    pub struct Note(resource "Note") {
        id: Option<String> => plain("id"),
        status: Primitive<NoteStatus, Ext> => required("status"),
        tags: Vec<Primitive<String, Ext>> => list("tag"),
        score: Option<Primitive<PreciseDecimal, Ext>> => optional("score"),
        subject: Option<Subject> => choice(),
        coding: Vec<Coding> => list("coding"),
        contained: Vec<AnyResource> => resource_list("contained"),
        extension: Vec<Ext> => list("extension"),
    }
}

aggregate! {
    pub struct Folder(resource "Folder") {
        main: Option<AnyResource> => resource("main"),
        items: Vec<AnyResource> => resource_list("item"),
        labels: Vec<Coding> => required_list("label"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnyResource {
    Folder(Box<Folder>),
    Note(Box<Note>),
}

fn decode_folder(reader: &mut FieldReader<'_>) -> Result<AnyResource> {
    Folder::decode_fields(reader).map(|f| AnyResource::Folder(Box::new(f)))
}

fn decode_note(reader: &mut FieldReader<'_>) -> Result<AnyResource> {
    Note::decode_fields(reader).map(|n| AnyResource::Note(Box::new(n)))
}

static FOLDER: RegistryEntry<AnyResource> = RegistryEntry {
    resource_type: "Folder",
    decode: decode_folder,
};

static NOTE: RegistryEntry<AnyResource> = RegistryEntry {
    resource_type: "Note",
    decode: decode_note,
};

impl PolymorphicResource for AnyResource {
    fn lookup(resource_type: &str) -> Option<&'static RegistryEntry<Self>> {
        match resource_type {
            "Folder" => Some(&FOLDER),
            "Note" => Some(&NOTE),
            _ => None,
        }
    }

    fn resource_type(&self) -> &'static str {
        match self {
            AnyResource::Folder(_) => "Folder",
            AnyResource::Note(_) => "Note",
        }
    }

    fn encode_fields(&self, writer: &mut FieldWriter) {
        match self {
            AnyResource::Folder(folder) => folder.encode_fields(writer),
            AnyResource::Note(note) => note.encode_fields(writer),
        }
    }
}

pub fn draft_note() -> Note {
    Note {
        id: None,
        status: Primitive::new(NoteStatus::Draft),
        tags: Vec::new(),
        score: None,
        subject: None,
        coding: Vec::new(),
        contained: Vec::new(),
        extension: Vec::new(),
        unknown: Default::default(),
    }
}

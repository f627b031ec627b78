//! STU3 Bundle.
//!
//! Links and search metadata are shared with R4. Entries hold STU3
//! resources, requests use the STU3 verb set, and the bundle may carry a
//! `signature`.

use super::codes::HttpVerb;
use super::resource::ResourceValue;
use crate::r4::element::BackboneElement;
use crate::r4::{
    BundleEntrySearch, BundleLink, BundleType, CodeOf, FhirString, Identifier, Instant,
    ResourceBase, UnsignedInt, Uri,
};
use tessera_codec::{aggregate, Primitive, RawElement};

aggregate! {
    pub struct BundleEntryRequest("Bundle.entry.request") {
        backbone: BackboneElement => group(),
        method: CodeOf<HttpVerb> => required("method"),
        url: Uri => required("url"),
        if_none_match: Option<FhirString> => optional("ifNoneMatch"),
        if_modified_since: Option<Instant> => optional("ifModifiedSince"),
        if_match: Option<FhirString> => optional("ifMatch"),
        if_none_exist: Option<FhirString> => optional("ifNoneExist"),
    }
}

impl BundleEntryRequest {
    pub fn new(method: HttpVerb, url: impl Into<String>) -> Self {
        Self {
            backbone: BackboneElement::default(),
            method: method.into(),
            url: Primitive::new(url.into()),
            if_none_match: None,
            if_modified_since: None,
            if_match: None,
            if_none_exist: None,
            unknown: Default::default(),
        }
    }
}

aggregate! {
    pub struct BundleEntryResponse("Bundle.entry.response") {
        backbone: BackboneElement => group(),
        status: FhirString => required("status"),
        location: Option<Uri> => optional("location"),
        etag: Option<FhirString> => optional("etag"),
        last_modified: Option<Instant> => optional("lastModified"),
        outcome: Option<ResourceValue> => resource("outcome"),
    }
}

aggregate! {
    #[derive(Default)]
    pub struct BundleEntry("Bundle.entry") {
        backbone: BackboneElement => group(),
        link: Vec<BundleLink> => list("link"),
        full_url: Option<Uri> => optional("fullUrl"),
        resource: Option<ResourceValue> => resource("resource"),
        search: Option<BundleEntrySearch> => optional("search"),
        request: Option<BundleEntryRequest> => optional("request"),
        response: Option<BundleEntryResponse> => optional("response"),
    }
}

impl BundleEntry {
    pub fn with_resource(resource: impl Into<ResourceValue>) -> Self {
        Self {
            resource: Some(resource.into()),
            ..Self::default()
        }
    }

    pub fn full_url(mut self, url: impl Into<String>) -> Self {
        self.full_url = Some(Primitive::new(url.into()));
        self
    }
}

aggregate! {
    /// A container for a collection of resources.
    pub struct Bundle(resource "Bundle") {
        base: ResourceBase => group(),
        identifier: Option<Identifier> => optional("identifier"),
        bundle_type: CodeOf<BundleType> => required("type"),
        total: Option<UnsignedInt> => optional("total"),
        link: Vec<BundleLink> => list("link"),
        entry: Vec<BundleEntry> => list("entry"),
        /// Digital signature, kept as read.
        signature: Option<RawElement> => optional("signature"),
    }
}

impl Bundle {
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            base: ResourceBase::default(),
            identifier: None,
            bundle_type: bundle_type.into(),
            total: None,
            link: Vec::new(),
            entry: Vec::new(),
            signature: None,
            unknown: Default::default(),
        }
    }

    pub fn bundle_type(&self) -> Option<BundleType> {
        self.bundle_type.value
    }

    pub fn entry_count(&self) -> usize {
        self.entry.len()
    }

    pub fn resources(&self) -> impl Iterator<Item = &ResourceValue> {
        self.entry.iter().filter_map(|e| e.resource.as_ref())
    }

    pub fn add_entry(&mut self, entry: BundleEntry) {
        self.entry.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stu3::Patient;
    use serde_json::json;
    use tessera_codec::{decode_as, encode_as, DecodeErrorKind, DecodeOptions, Document};

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_entries_are_stu3_resources() {
        let input = doc(json!({
            "resourceType": "Bundle",
            "type": "collection",
            "entry": [{
                "fullUrl": "urn:uuid:1",
                "resource": {
                    "resourceType": "Patient",
                    "animal": {"species": {"text": "dog"}}
                }
            }],
            "signature": {"when": "2017-01-01T00:00:00Z", "blob": "Li4u"}
        }));
        let bundle: Bundle = decode_as(input.clone(), &DecodeOptions::strict()).unwrap();
        match bundle.resources().next() {
            Some(ResourceValue::Patient(patient)) => assert!(patient.is_animal()),
            other => panic!("unexpected {:?}", other),
        }
        assert!(bundle.signature.is_some());
        assert_eq!(encode_as(&bundle), input);
    }

    #[test]
    fn test_patch_is_not_an_stu3_verb() {
        let err = decode_as::<Bundle>(
            doc(json!({
                "resourceType": "Bundle",
                "type": "transaction",
                "entry": [{"request": {"method": "PATCH", "url": "Patient/1"}}]
            })),
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::MalformedPrimitive { .. }));
        assert_eq!(err.path.to_string(), "Bundle.entry[0].request.method");
    }

    #[test]
    fn test_build_transaction() {
        let mut bundle = Bundle::new(BundleType::Transaction);
        let mut entry = BundleEntry::with_resource(Patient::default()).full_url("urn:uuid:p");
        entry.request = Some(BundleEntryRequest::new(HttpVerb::Post, "Patient"));
        bundle.add_entry(entry);

        let json = encode_as(&bundle);
        assert_eq!(json["entry"][0]["resource"]["resourceType"], "Patient");
        assert_eq!(json["entry"][0]["request"]["method"], "POST");
        assert_eq!(bundle.entry_count(), 1);
    }
}

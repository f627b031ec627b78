//! Bundle resource.
//!
//! Bundle derives from Resource, not DomainResource: it has no narrative,
//! contained resources or extensions at the root.

use super::codes::{BundleType, HttpVerb, SearchEntryMode};
use super::datatypes::Identifier;
use super::element::BackboneElement;
use super::primitives::{CodeOf, Decimal, FhirString, Instant, UnsignedInt, Uri};
use super::resource::{ResourceBase, ResourceValue};
use tessera_codec::{aggregate, Primitive};

aggregate! {
    /// Links related to this Bundle.
    pub struct BundleLink("Bundle.link") {
        backbone: BackboneElement => group(),
        relation: FhirString => required("relation"),
        url: Uri => required("url"),
    }
}

impl BundleLink {
    pub fn new(relation: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            backbone: BackboneElement::default(),
            relation: Primitive::new(relation.into()),
            url: Primitive::new(url.into()),
            unknown: Default::default(),
        }
    }
}

aggregate! {
    #[derive(Default)]
    pub struct BundleEntrySearch("Bundle.entry.search") {
        backbone: BackboneElement => group(),
        mode: Option<CodeOf<SearchEntryMode>> => optional("mode"),
        /// Search ranking, between 0 and 1.
        score: Option<Decimal> => optional("score"),
    }
}

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
        /// OperationOutcome with hints and warnings for this entry.
        outcome: Option<ResourceValue> => resource("outcome"),
    }
}

aggregate! {
    /// An entry in a bundle: a resource, information about it, or both.
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
        timestamp: Option<Instant> => optional("timestamp"),
        total: Option<UnsignedInt> => optional("total"),
        link: Vec<BundleLink> => list("link"),
        entry: Vec<BundleEntry> => list("entry"),
    }
}

impl Bundle {
    /// Create a new Bundle with only its type set.
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            base: ResourceBase::default(),
            identifier: None,
            bundle_type: bundle_type.into(),
            timestamp: None,
            total: None,
            link: Vec::new(),
            entry: Vec::new(),
            unknown: Default::default(),
        }
    }

    pub fn bundle_type(&self) -> Option<BundleType> {
        self.bundle_type.value
    }

    pub fn is_transaction(&self) -> bool {
        self.bundle_type() == Some(BundleType::Transaction)
    }

    pub fn is_batch(&self) -> bool {
        self.bundle_type() == Some(BundleType::Batch)
    }

    pub fn is_searchset(&self) -> bool {
        self.bundle_type() == Some(BundleType::Searchset)
    }

    pub fn entry_count(&self) -> usize {
        self.entry.len()
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entry
    }

    pub fn entries_mut(&mut self) -> &mut [BundleEntry] {
        &mut self.entry
    }

    /// Resources carried by the entries, in entry order.
    pub fn resources(&self) -> impl Iterator<Item = &ResourceValue> {
        self.entry.iter().filter_map(|e| e.resource.as_ref())
    }

    pub fn add_entry(&mut self, entry: BundleEntry) {
        self.entry.push(entry);
    }

    pub fn add_link(&mut self, relation: impl Into<String>, url: impl Into<String>) {
        self.link.push(BundleLink::new(relation, url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::Patient;
    use serde_json::json;
    use tessera_codec::{decode_as, encode_as, DecodeErrorKind, DecodeOptions, Document};

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_deserialize_bundle() {
        let json = json!({
            "resourceType": "Bundle",
            "id": "example-bundle",
            "type": "searchset",
            "total": 1,
            "entry": [
                {
                    "fullUrl": "http://example.org/fhir/Patient/123",
                    "resource": {
                        "resourceType": "Patient",
                        "id": "123"
                    },
                    "search": {
                        "mode": "match",
                        "score": 1.0
                    }
                }
            ]
        });

        let bundle: Bundle = decode_as(doc(json), &DecodeOptions::default()).unwrap();
        assert_eq!(bundle.base.id.as_deref(), Some("example-bundle"));
        assert_eq!(bundle.bundle_type(), Some(BundleType::Searchset));
        assert_eq!(bundle.total.as_ref().and_then(|t| t.value), Some(1));
        assert_eq!(bundle.entry_count(), 1);
        assert_eq!(bundle.resources().next().unwrap().resource_type(), "Patient");

        let score = bundle.entry[0].search.as_ref().unwrap().score.as_ref().unwrap();
        assert_eq!(score.value.as_ref().unwrap().as_str(), "1.0");
    }

    #[test]
    fn test_serialize_bundle() {
        let bundle = Bundle::new(BundleType::Transaction);
        let json = encode_as(&bundle);
        assert_eq!(json["resourceType"], "Bundle");
        assert_eq!(json["type"], "transaction");
        assert_eq!(json.len(), 2);
    }

    #[test]
    fn test_is_transaction() {
        let bundle = Bundle::new(BundleType::Transaction);
        assert!(bundle.is_transaction());
        assert!(!bundle.is_batch());
    }

    #[test]
    fn test_is_batch() {
        let bundle = Bundle::new(BundleType::Batch);
        assert!(bundle.is_batch());
        assert!(!bundle.is_transaction());
    }

    #[test]
    fn test_is_searchset() {
        let bundle = Bundle::new(BundleType::Searchset);
        assert!(bundle.is_searchset());
    }

    #[test]
    fn test_add_entry() {
        let mut bundle = Bundle::new(BundleType::Collection);
        let mut patient = Patient::default();
        patient.domain.resource.id = Some("123".into());
        bundle.add_entry(
            BundleEntry::with_resource(patient).full_url("http://example.org/fhir/Patient/123"),
        );
        assert_eq!(bundle.entry_count(), 1);

        let json = encode_as(&bundle);
        assert_eq!(json["entry"][0]["resource"]["resourceType"], "Patient");
        assert_eq!(json["entry"][0]["resource"]["id"], "123");
    }

    #[test]
    fn test_add_link() {
        let mut bundle = Bundle::new(BundleType::Searchset);
        bundle.add_link("self", "http://example.org/fhir/Patient?_id=123");
        assert_eq!(bundle.link.len(), 1);
        assert_eq!(bundle.link[0].relation.value.as_deref(), Some("self"));
    }

    #[test]
    fn test_bundle_entry_request() {
        let mut entry = BundleEntry::default();
        entry.request = Some(BundleEntryRequest::new(HttpVerb::Post, "Patient"));

        let mut bundle = Bundle::new(BundleType::Transaction);
        bundle.add_entry(entry);
        let json = encode_as(&bundle);
        assert_eq!(json["entry"][0]["request"]["method"], "POST");
        assert_eq!(json["entry"][0]["request"]["url"], "Patient");
    }

    #[test]
    fn test_bundle_entry_response_outcome() {
        let json = json!({
            "resourceType": "Bundle",
            "type": "transaction-response",
            "entry": [{
                "response": {
                    "status": "201 Created",
                    "location": "Patient/123/_history/1",
                    "etag": "W/\"1\"",
                    "lastModified": "2023-01-01T00:00:00Z",
                    "outcome": {
                        "resourceType": "OperationOutcome",
                        "issue": [{"severity": "information", "code": "informational"}]
                    }
                }
            }]
        });
        let bundle: Bundle = decode_as(doc(json), &DecodeOptions::default()).unwrap();
        let response = bundle.entry[0].response.as_ref().unwrap();
        assert_eq!(response.status.value.as_deref(), Some("201 Created"));
        assert_eq!(
            response.outcome.as_ref().map(ResourceValue::resource_type),
            Some("OperationOutcome")
        );
    }

    #[test]
    fn test_entry_error_path() {
        let json = json!({
            "resourceType": "Bundle",
            "type": "collection",
            "entry": [
                {"resource": {"resourceType": "Patient"}},
                {"resource": {"resourceType": "Patient", "gender": "mail"}}
            ]
        });
        let err = decode_as::<Bundle>(doc(json), &DecodeOptions::default()).unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::MalformedPrimitive { .. }));
        assert_eq!(err.path.to_string(), "Bundle.entry[1].resource.gender");
    }
}

//! Required-binding code systems used by the catalogue.

use tessera_codec::code_system;

code_system! {
    pub enum AdministrativeGender("http://hl7.org/fhir/administrative-gender") {
        Male = "male",
        Female = "female",
        Other = "other",
        Unknown = "unknown",
    }
}

code_system! {
    pub enum ObservationStatus("http://hl7.org/fhir/observation-status") {
        Registered = "registered",
        Preliminary = "preliminary",
        Final = "final",
        Amended = "amended",
        Corrected = "corrected",
        Cancelled = "cancelled",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

code_system! {
    pub enum BundleType("http://hl7.org/fhir/bundle-type") {
        Document = "document",
        Message = "message",
        Transaction = "transaction",
        TransactionResponse = "transaction-response",
        Batch = "batch",
        BatchResponse = "batch-response",
        History = "history",
        Searchset = "searchset",
        Collection = "collection",
    }
}

code_system! {
    pub enum HttpVerb("http://hl7.org/fhir/http-verb") {
        Get = "GET",
        Head = "HEAD",
        Post = "POST",
        Put = "PUT",
        Delete = "DELETE",
        Patch = "PATCH",
    }
}

code_system! {
    pub enum SearchEntryMode("http://hl7.org/fhir/search-entry-mode") {
        Match = "match",
        Include = "include",
        Outcome = "outcome",
    }
}

code_system! {
    pub enum NarrativeStatus("http://hl7.org/fhir/narrative-status") {
        Generated = "generated",
        Extensions = "extensions",
        Additional = "additional",
        Empty = "empty",
    }
}

code_system! {
    pub enum QuantityComparator("http://hl7.org/fhir/quantity-comparator") {
        LessThan = "<",
        LessOrEqual = "<=",
        GreaterOrEqual = ">=",
        GreaterThan = ">",
    }
}

code_system! {
    pub enum IdentifierUse("http://hl7.org/fhir/identifier-use") {
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Secondary = "secondary",
        Old = "old",
    }
}

code_system! {
    pub enum NameUse("http://hl7.org/fhir/name-use") {
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Nickname = "nickname",
        Anonymous = "anonymous",
        Old = "old",
        Maiden = "maiden",
    }
}

code_system! {
    pub enum ContactPointSystem("http://hl7.org/fhir/contact-point-system") {
        Phone = "phone",
        Fax = "fax",
        Email = "email",
        Pager = "pager",
        Url = "url",
        Sms = "sms",
        Other = "other",
    }
}

code_system! {
    pub enum ContactPointUse("http://hl7.org/fhir/contact-point-use") {
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
        Mobile = "mobile",
    }
}

code_system! {
    pub enum AddressUse("http://hl7.org/fhir/address-use") {
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
        Billing = "billing",
    }
}

code_system! {
    pub enum AddressType("http://hl7.org/fhir/address-type") {
        Postal = "postal",
        Physical = "physical",
        Both = "both",
    }
}

code_system! {
    pub enum LinkType("http://hl7.org/fhir/link-type") {
        ReplacedBy = "replaced-by",
        Replaces = "replaces",
        Refer = "refer",
        SeeAlso = "seealso",
    }
}

code_system! {
    pub enum AllergyIntoleranceType("http://hl7.org/fhir/allergy-intolerance-type") {
        Allergy = "allergy",
        Intolerance = "intolerance",
    }
}

code_system! {
    pub enum AllergyIntoleranceCategory("http://hl7.org/fhir/allergy-intolerance-category") {
        Food = "food",
        Medication = "medication",
        Environment = "environment",
        Biologic = "biologic",
    }
}

code_system! {
    pub enum AllergyIntoleranceCriticality("http://hl7.org/fhir/allergy-intolerance-criticality") {
        Low = "low",
        High = "high",
        UnableToAssess = "unable-to-assess",
    }
}

code_system! {
    pub enum AllergyIntoleranceSeverity("http://hl7.org/fhir/reaction-event-severity") {
        Mild = "mild",
        Moderate = "moderate",
        Severe = "severe",
    }
}

code_system! {
    pub enum MedicationStatus("http://hl7.org/fhir/CodeSystem/medication-status") {
        Active = "active",
        Inactive = "inactive",
        EnteredInError = "entered-in-error",
    }
}

code_system! {
    pub enum MedicationStatementStatus(
        "http://hl7.org/fhir/CodeSystem/medication-statement-status"
    ) {
        Active = "active",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Intended = "intended",
        Stopped = "stopped",
        OnHold = "on-hold",
        Unknown = "unknown",
        NotTaken = "not-taken",
    }
}

code_system! {
    pub enum DocumentReferenceStatus("http://hl7.org/fhir/document-reference-status") {
        Current = "current",
        Superseded = "superseded",
        EnteredInError = "entered-in-error",
    }
}

code_system! {
    pub enum CompositionStatus("http://hl7.org/fhir/composition-status") {
        Preliminary = "preliminary",
        Final = "final",
        Amended = "amended",
        EnteredInError = "entered-in-error",
    }
}

code_system! {
    pub enum DocumentRelationshipType("http://hl7.org/fhir/document-relationship-type") {
        Replaces = "replaces",
        Transforms = "transforms",
        Signs = "signs",
        Appends = "appends",
    }
}

code_system! {
    pub enum IssueSeverity("http://hl7.org/fhir/issue-severity") {
        Fatal = "fatal",
        Error = "error",
        Warning = "warning",
        Information = "information",
    }
}

code_system! {
    pub enum IssueType("http://hl7.org/fhir/issue-type") {
        Invalid = "invalid",
        Structure = "structure",
        Required = "required",
        Value = "value",
        Invariant = "invariant",
        Security = "security",
        Login = "login",
        Unknown = "unknown",
        Expired = "expired",
        Forbidden = "forbidden",
        Suppressed = "suppressed",
        Processing = "processing",
        NotSupported = "not-supported",
        Duplicate = "duplicate",
        MultipleMatches = "multiple-matches",
        NotFound = "not-found",
        Deleted = "deleted",
        TooLong = "too-long",
        CodeInvalid = "code-invalid",
        Extension = "extension",
        TooCostly = "too-costly",
        BusinessRule = "business-rule",
        Conflict = "conflict",
        Transient = "transient",
        LockError = "lock-error",
        NoStore = "no-store",
        Exception = "exception",
        Timeout = "timeout",
        Incomplete = "incomplete",
        Throttled = "throttled",
        Informational = "informational",
    }
}

code_system! {
    pub enum UnitsOfTime("http://unitsofmeasure.org") {
        Second = "s",
        Minute = "min",
        Hour = "h",
        Day = "d",
        Week = "wk",
        Month = "mo",
        Year = "a",
    }
}

code_system! {
    pub enum DaysOfWeek("http://hl7.org/fhir/days-of-week") {
        Mon = "mon",
        Tue = "tue",
        Wed = "wed",
        Thu = "thu",
        Fri = "fri",
        Sat = "sat",
        Sun = "sun",
    }
}

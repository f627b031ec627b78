//! OperationOutcome resource, and the mapping from decode failures to it.

use super::codes::{IssueSeverity, IssueType};
use super::datatypes::CodeableConcept;
use super::element::BackboneElement;
use super::primitives::{CodeOf, FhirString};
use super::resource::DomainResource;
use tessera_codec::{aggregate, DecodeError, DecodeErrorKind, Primitive};

aggregate! {
    pub struct OperationOutcomeIssue("OperationOutcome.issue") {
        backbone: BackboneElement => group(),
        severity: CodeOf<IssueSeverity> => required("severity"),
        code: CodeOf<IssueType> => required("code"),
        details: Option<CodeableConcept> => optional("details"),
        diagnostics: Option<FhirString> => optional("diagnostics"),
        location: Vec<FhirString> => list("location"),
        expression: Vec<FhirString> => list("expression"),
    }
}

impl OperationOutcomeIssue {
    pub fn new(severity: IssueSeverity, code: IssueType) -> Self {
        Self {
            backbone: BackboneElement::default(),
            severity: severity.into(),
            code: code.into(),
            details: None,
            diagnostics: None,
            location: Vec::new(),
            expression: Vec::new(),
            unknown: Default::default(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: impl Into<String>) -> Self {
        self.diagnostics = Some(Primitive::new(diagnostics.into()));
        self
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression.push(Primitive::new(expression.into()));
        self
    }
}

aggregate! {
    /// Errors, warnings and information about the result of an action.
    pub struct OperationOutcome(resource "OperationOutcome") {
        domain: DomainResource => group(),
        issue: Vec<OperationOutcomeIssue> => required_list("issue"),
    }
}

impl OperationOutcome {
    pub fn new(issue: Vec<OperationOutcomeIssue>) -> Self {
        Self {
            domain: DomainResource::default(),
            issue,
            unknown: Default::default(),
        }
    }

    /// Report a decode failure as a single error issue located at the path
    /// where decoding stopped.
    pub fn from_decode_error(err: &DecodeError) -> Self {
        let issue = OperationOutcomeIssue::new(IssueSeverity::Error, issue_type(err.kind()))
            .with_diagnostics(err.to_string())
            .with_expression(err.path.to_string());
        Self::new(vec![issue])
    }

    /// Whether any issue is an error or fatal.
    pub fn has_errors(&self) -> bool {
        self.issue.iter().any(|i| {
            matches!(
                i.severity.value,
                Some(IssueSeverity::Error | IssueSeverity::Fatal)
            )
        })
    }
}

impl From<&DecodeError> for OperationOutcome {
    fn from(err: &DecodeError) -> Self {
        OperationOutcome::from_decode_error(err)
    }
}

fn issue_type(kind: &DecodeErrorKind) -> IssueType {
    match kind {
        DecodeErrorKind::UnknownResourceType(_) => IssueType::NotSupported,
        DecodeErrorKind::MissingRequiredField(_) | DecodeErrorKind::MissingRequiredChoice(_) => {
            IssueType::Required
        }
        DecodeErrorKind::MalformedPrimitive { .. } => IssueType::Value,
        DecodeErrorKind::DepthExceeded(_) => IssueType::TooCostly,
        DecodeErrorKind::AmbiguousChoice { .. }
        | DecodeErrorKind::MalformedDocument(_)
        | DecodeErrorKind::UnrecognizedField(_) => IssueType::Structure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_codec::{decode_as, encode_as, DecodeOptions};
    use tessera_format::parse_document;

    #[test]
    fn test_from_decode_error() {
        let text = r#"{
            "resourceType": "OperationOutcome",
            "issue": [{"severity": "loud", "code": "value"}]
        }"#;
        let err =
            decode_as::<OperationOutcome>(parse_document(text).unwrap(), &DecodeOptions::default())
                .unwrap_err();

        let outcome = OperationOutcome::from_decode_error(&err);
        assert!(outcome.has_errors());
        let issue = &outcome.issue[0];
        assert_eq!(issue.code.value, Some(IssueType::Value));
        assert_eq!(
            issue.expression[0].value.as_deref(),
            Some("OperationOutcome.issue[0].severity")
        );

        let encoded = encode_as(&outcome);
        assert_eq!(encoded["issue"][0]["severity"], "error");
        assert_eq!(encoded["issue"][0]["code"], "value");
    }

    #[test]
    fn test_issue_required() {
        let text = r#"{"resourceType": "OperationOutcome"}"#;
        let err =
            decode_as::<OperationOutcome>(parse_document(text).unwrap(), &DecodeOptions::default())
                .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingRequiredField("issue".into()));
        assert_eq!(
            OperationOutcome::from(&err).issue[0].code.value,
            Some(IssueType::Required)
        );
    }

    #[test]
    fn test_informational_outcome_has_no_errors() {
        let outcome = OperationOutcome::new(vec![OperationOutcomeIssue::new(
            IssueSeverity::Information,
            IssueType::Informational,
        )]);
        assert!(!outcome.has_errors());
    }
}

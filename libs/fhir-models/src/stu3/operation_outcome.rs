//! STU3 OperationOutcome. Issues have the same shape as in R4.

use super::resource::DomainResource;
use crate::r4::{IssueSeverity, OperationOutcomeIssue};
use tessera_codec::{aggregate, DecodeError};

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
        Self::new(crate::r4::OperationOutcome::from_decode_error(err).issue)
    }

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

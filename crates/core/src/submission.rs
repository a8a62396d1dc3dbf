//! Submitted-project documents and the grading payload.

use serde::{Deserialize, Serialize};

use crate::id::DocumentId;

/// Grading lifecycle flag on a submission.
///
/// The only supported transition is Pending -> Approved, applied by the
/// grading update (which always writes Approved). The initial value is
/// caller-supplied at creation and is not forced to Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApproveStatus {
    Pending,
    Approved,
}

/// The field set of a submitted-project document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionFields {
    pub examinee_email: String,
    pub creator_email: String,
    pub approve_status: ApproveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_marks: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// A stored submission: store-assigned id plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedProject {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(flatten)]
    pub fields: SubmissionFields,
}

/// Grading update payload: marks and feedback.
///
/// Applying a grade also forces the submission's status to Approved,
/// regardless of anything else the caller sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    #[serde(default)]
    pub given_marks: Option<i32>,
    #[serde(default)]
    pub feedback: Option<String>,
}

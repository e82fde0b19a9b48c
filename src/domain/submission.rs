//! src/domain/submission.rs

use crate::domain::new_submission::NewSubmission;

/// A stored submission as it is written to and read back from the store.
///
/// Carries no store identifier, so nothing serialized from it exposes one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

impl From<&NewSubmission> for Submission {
    fn from(submission: &NewSubmission) -> Self {
        Self {
            name: submission.name.as_ref().to_owned(),
            email: submission.email.as_ref().to_owned(),
        }
    }
}

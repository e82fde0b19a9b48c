//! src/domain/new_submission.rs

use crate::domain::submitter_email::SubmitterEmail;
use crate::domain::submitter_name::SubmitterName;

/// A submission that passed the presence checks and may be stored.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
}

impl NewSubmission {
    pub fn parse(name: Option<String>, email: Option<String>) -> Result<Self, String> {
        let name = SubmitterName::parse(name)?;
        let email = SubmitterEmail::parse(email)?;
        Ok(Self { name, email })
    }
}

//! src/domain/submitter_email.rs

/// A submitted email address. Only presence is checked; the format is the
/// submitter's business.
#[derive(Debug, Clone)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    pub fn parse(s: Option<String>) -> Result<SubmitterEmail, String> {
        match s {
            Some(s) if !s.is_empty() => Ok(Self(s)),
            _ => Err("email is missing or empty".to_string()),
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

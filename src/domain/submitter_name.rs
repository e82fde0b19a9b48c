//! src/domain/submitter_name.rs

#[derive(Debug, Clone)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Accepts any present, non-empty value. The value is kept verbatim:
    /// no trimming and no character rules.
    pub fn parse(s: Option<String>) -> Result<SubmitterName, String> {
        match s {
            Some(s) if !s.is_empty() => Ok(Self(s)),
            _ => Err("name is missing or empty".to_string()),
        }
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
